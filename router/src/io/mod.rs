//! I/O capabilities and loaders for the router.
//!
//! Everything that touches the filesystem or the page lives here, behind the
//! [`templates::TemplateSource`], [`document::Document`] and
//! [`interactive::InteractiveToolLoader`] seams.

pub mod config;
pub mod document;
pub mod interactive;
pub mod site_store;
pub mod templates;
