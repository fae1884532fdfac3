//! Config-driven page router for static content sites.
//!
//! A page location's `ui` and `tool` query parameters select one of three
//! page strategies (landing page, tool info page, interactive tool page),
//! which fill the page from templates and a static site config. The
//! architecture enforces a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (parameter parsing, context
//!   resolution, dispatch). No I/O, fully testable in isolation.
//! - **[`io`]**: Capabilities the strategies act through (template sources,
//!   the page document, interactive hooks) and site loading.
//!
//! [`render`] holds the page strategies; [`bootstrap`] runs them once per page
//! load; [`check`] backs the `check` CLI command.

pub mod bootstrap;
pub mod check;
pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod render;
pub mod site;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
