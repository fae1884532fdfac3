//! Page render strategies.
//!
//! Each strategy appends to the document; calling one twice duplicates its
//! output, so the bootstrapper runs each at most once per navigation.

use anyhow::Result;
use minijinja::context;
use serde::Serialize;
use tracing::{debug, warn};

use crate::core::types::{Context, MODE_CLASSES};
use crate::io::config::{MissingTemplatePolicy, RouterConfig};
use crate::io::document::{Container, Document};
use crate::io::interactive::InteractiveToolLoader;
use crate::io::templates::{TemplateEngine, TemplateSource};
use crate::site::SiteConfig;

const MISSING_TEMPLATE_NOTICE: &str = r#"<div class="template-missing" role="alert">The page for <code>{{ tool_id }}</code> could not be loaded.</div>"#;

/// Outcome of the tool info strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ToolPageOutcome {
    Rendered { path: String },
    Missing { path: String, reason: String },
}

/// Renders the page strategies of one site against a resolved context.
pub struct PageRenderer<'a, T> {
    site: &'a SiteConfig,
    settings: &'a RouterConfig,
    templates: &'a T,
    engine: TemplateEngine,
}

impl<'a, T: TemplateSource> PageRenderer<'a, T> {
    pub fn new(site: &'a SiteConfig, settings: &'a RouterConfig, templates: &'a T) -> Self {
        Self {
            site,
            settings,
            templates,
            engine: TemplateEngine::new(),
        }
    }

    pub fn site(&self) -> &'a SiteConfig {
        self.site
    }

    /// Header/navigation bar into the header container.
    pub fn render_header<D: Document>(&self, doc: &mut D, context: &Context) -> Result<()> {
        let id = &self.settings.header_template;
        let html = self.render_inline(id, context)?;
        doc.append_html(Container::Header, &html);
        debug!(template = %id, bytes = html.len(), "header rendered");
        Ok(())
    }

    /// Landing page into the content container.
    pub fn render_landing<D: Document>(&self, doc: &mut D, context: &Context) -> Result<()> {
        let id = &self.settings.landing_template;
        let html = self.render_inline(id, context)?;
        doc.append_html(Container::Content, &html);
        debug!(template = %id, bytes = html.len(), "landing page rendered");
        Ok(())
    }

    /// Fetch the tool's info page template and render it into the content
    /// container.
    ///
    /// A template that cannot be fetched or rendered never fails the page; the
    /// configured [`MissingTemplatePolicy`] decides what the reader sees.
    pub async fn render_tool_info<D: Document>(
        &self,
        doc: &mut D,
        context: &Context,
        tool_id: &str,
    ) -> ToolPageOutcome {
        let path = self.settings.tool_template_path(tool_id);
        let rendered = match self.templates.fetch(&path).await {
            Ok(source) => self
                .site
                .template_data(context)
                .and_then(|data| self.engine.render(&path, &source, data)),
            Err(err) => Err(err),
        };

        match rendered {
            Ok(html) => {
                doc.append_html(Container::Content, &html);
                debug!(path = %path, bytes = html.len(), "tool page rendered");
                ToolPageOutcome::Rendered { path }
            }
            Err(err) => {
                let reason = format!("{:#}", err);
                warn!(path = %path, tool_id, error = %reason, "tool page template unavailable");
                if self.settings.on_missing_template == MissingTemplatePolicy::Notice {
                    match self
                        .engine
                        .render("missing-template", MISSING_TEMPLATE_NOTICE, context! { tool_id => tool_id })
                    {
                        Ok(notice) => doc.append_html(Container::Content, &notice),
                        Err(err) => warn!(error = %format!("{:#}", err), "notice render failed"),
                    }
                }
                ToolPageOutcome::Missing { path, reason }
            }
        }
    }

    /// Hand the page to the interactive tool collaborators, in their fixed order.
    pub fn render_interactive<D: Document, L: InteractiveToolLoader>(
        &self,
        doc: &mut D,
        loader: &mut L,
        tool_id: &str,
    ) {
        debug!(tool_id, "loading interactive tool interface");
        loader.load_tool_interface_template(doc);
        loader.align_interface_content(doc);
        loader.init_info(doc);
        loader.init_tool_interface_control(doc);
    }

    fn render_inline(&self, id: &str, context: &Context) -> Result<String> {
        let source = self.templates.inline(id)?;
        let data = self.site.template_data(context)?;
        self.engine.render(id, &source, data)
    }

    /// Compile the inline templates without rendering them.
    pub fn check_inline_templates(&self) -> Result<()> {
        for id in [&self.settings.header_template, &self.settings.landing_template] {
            let source = self.templates.inline(id)?;
            self.engine.check(id, &source)?;
        }
        Ok(())
    }
}

/// Swap the body's mode class for the resolved `ui`.
///
/// Older stylesheets key page layout off a body class named after the mode.
pub fn legacy_pre_render_fix<D: Document>(doc: &mut D, context: &Context) {
    for class in MODE_CLASSES {
        doc.remove_body_class(class);
    }
    if let Some(ui) = context.url.ui.as_deref() {
        doc.add_body_class(ui);
    }
}
