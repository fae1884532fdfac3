//! Static checks for a site directory (`site-router check`).

use std::fs;
use std::path::Path;

use anyhow::Result;
use tracing::debug;

use crate::io::document::HtmlDocument;
use crate::io::site_store::load_site;
use crate::io::templates::TemplateEngine;
use crate::render::PageRenderer;

/// A tool whose info page would fall back to the missing-template policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateProblem {
    pub tool_id: String,
    pub path: String,
    pub problem: String,
}

/// Result of checking a site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub tools: usize,
    pub problems: Vec<TemplateProblem>,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.problems.is_empty()
    }
}

/// Check settings, config, shell and every tool's info page template.
///
/// Load errors (settings, config, shell layout, inline templates) are returned
/// as `Err`; tool templates that are missing or do not compile are collected
/// in the report.
pub fn check_site(root: &Path) -> Result<CheckReport> {
    let site = load_site(root)?;
    HtmlDocument::from_shell(site.templates.shell())?;
    PageRenderer::new(&site.config, &site.settings, &site.templates).check_inline_templates()?;

    let engine = TemplateEngine::new();
    let mut problems = Vec::new();
    for tool_id in site.config.tool_ids() {
        let path = site.settings.tool_template_path(tool_id);
        let full = root.join(&path);
        let problem = match fs::read_to_string(&full) {
            Ok(source) => engine.check(&path, &source).err().map(|err| format!("{:#}", err)),
            Err(err) => Some(format!("read {}: {}", full.display(), err)),
        };
        debug!(tool_id, path = %path, ok = problem.is_none(), "checked tool template");
        if let Some(problem) = problem {
            problems.push(TemplateProblem {
                tool_id: tool_id.to_string(),
                path,
                problem,
            });
        }
    }

    Ok(CheckReport {
        tools: site.config.tools.len(),
        problems,
    })
}
