//! Orchestration for a single page load.
//!
//! The bootstrapper is a one-shot state machine:
//! `Init → ContextResolved → HeaderRendered → Dispatched`. It resolves the
//! context, fixes up the body classes, renders the header and hands off to
//! exactly one page strategy.

use anyhow::{Result, bail};
use serde::Serialize;
use tracing::{debug, info};

use crate::core::dispatch::{Dispatch, dispatch};
use crate::core::params::read_params;
use crate::core::resolver::{resolve, was_redirected};
use crate::core::types::Context;
use crate::io::document::{Document, HtmlDocument};
use crate::io::interactive::{InteractiveToolLoader, ScriptHookLoader};
use crate::io::site_store::Site;
use crate::io::templates::TemplateSource;
use crate::render::{PageRenderer, ToolPageOutcome, legacy_pre_render_fix};

/// Progress of a bootstrap run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BootstrapState {
    Init,
    ContextResolved,
    HeaderRendered,
    /// Terminal.
    Dispatched,
}

/// What a bootstrap run decided and did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BootstrapReport {
    pub context: Context,
    pub dispatch: Dispatch,
    /// Set only for the tool info strategy.
    pub tool_page: Option<ToolPageOutcome>,
}

/// Runs the page load sequence once against a document.
pub struct Bootstrapper<'a, T, D, L> {
    renderer: PageRenderer<'a, T>,
    document: D,
    loader: L,
    state: BootstrapState,
}

impl<'a, T, D, L> Bootstrapper<'a, T, D, L>
where
    T: TemplateSource,
    D: Document,
    L: InteractiveToolLoader,
{
    pub fn new(renderer: PageRenderer<'a, T>, document: D, loader: L) -> Self {
        Self {
            renderer,
            document,
            loader,
            state: BootstrapState::Init,
        }
    }

    pub fn state(&self) -> BootstrapState {
        self.state
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    /// Resolve `location` and render the page for it.
    ///
    /// Fails if this bootstrapper already ran: strategies append, so a second
    /// run would duplicate the page.
    pub async fn bootstrap(&mut self, location: &str) -> Result<BootstrapReport> {
        if self.state != BootstrapState::Init {
            bail!("page already bootstrapped (state {:?})", self.state);
        }

        let requested = read_params(location);
        let context = resolve(self.renderer.site(), requested.clone());
        if was_redirected(&requested, &context) {
            debug!(
                requested_ui = ?requested.ui,
                requested_tool = ?requested.tool,
                "unknown tool, redirecting to home"
            );
        }
        self.state = BootstrapState::ContextResolved;

        legacy_pre_render_fix(&mut self.document, &context);
        self.renderer.render_header(&mut self.document, &context)?;
        self.state = BootstrapState::HeaderRendered;

        let decision = dispatch(&context);
        info!(ui = ?context.url.ui, tool = ?context.tool_id(), strategy = ?decision, "dispatching page");
        let mut tool_page = None;
        match &decision {
            Dispatch::Interactive { tool_id } => {
                self.renderer
                    .render_interactive(&mut self.document, &mut self.loader, tool_id);
            }
            Dispatch::ToolInfo { tool_id } => {
                let outcome = self
                    .renderer
                    .render_tool_info(&mut self.document, &context, tool_id)
                    .await;
                tool_page = Some(outcome);
            }
            Dispatch::Landing => {
                self.renderer.render_landing(&mut self.document, &context)?;
            }
        }
        self.state = BootstrapState::Dispatched;

        Ok(BootstrapReport {
            context,
            dispatch: decision,
            tool_page,
        })
    }

    pub fn into_document(self) -> D {
        self.document
    }
}

/// A finished page.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub html: String,
    pub report: BootstrapReport,
}

/// Render the page for `location` from a loaded site.
pub async fn render_page(site: &Site, location: &str) -> Result<RenderedPage> {
    let document = HtmlDocument::from_shell(site.templates.shell())?;
    let renderer = PageRenderer::new(&site.config, &site.settings, &site.templates);
    let mut bootstrapper = Bootstrapper::new(renderer, document, ScriptHookLoader);
    let report = bootstrapper.bootstrap(location).await?;
    let html = bootstrapper.into_document().to_html();
    Ok(RenderedPage { html, report })
}
