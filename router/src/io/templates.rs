//! Template sources and the rendering engine.
//!
//! Templates come from two places: inline `<script id="...">` blocks embedded
//! in the page shell (header, landing page) and standalone files fetched by
//! convention path (tool info pages). The [`TemplateSource`] trait hides where
//! they live so tests can serve them from memory.

use std::future::Future;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use regex::Regex;
use serde::Serialize;
use tracing::{debug, instrument};

/// Where template sources come from.
pub trait TemplateSource {
    /// Source of the inline template embedded in the page shell under `id`.
    fn inline(&self, id: &str) -> Result<String>;

    /// Fetch a template by path relative to the site root.
    fn fetch(&self, path: &str) -> impl Future<Output = Result<String>> + Send;
}

/// Serves inline templates from a loaded shell and fetches files under a site root.
#[derive(Debug, Clone)]
pub struct FsTemplateSource {
    root: PathBuf,
    shell: String,
}

impl FsTemplateSource {
    pub fn new(root: impl Into<PathBuf>, shell: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            shell: shell.into(),
        }
    }

    /// Read the shell at `root/shell_path` and serve from `root`.
    pub fn open(root: &Path, shell_path: &str) -> Result<Self> {
        let path = root.join(shell_path);
        let shell = std::fs::read_to_string(&path)
            .with_context(|| format!("read page shell {}", path.display()))?;
        Ok(Self::new(root, shell))
    }

    pub fn shell(&self) -> &str {
        &self.shell
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl TemplateSource for FsTemplateSource {
    fn inline(&self, id: &str) -> Result<String> {
        extract_inline(&self.shell, id)?
            .ok_or_else(|| anyhow!("page shell has no inline template with id '{}'", id))
    }

    #[instrument(skip(self), fields(root = %self.root.display()))]
    async fn fetch(&self, path: &str) -> Result<String> {
        let full = self.root.join(path);
        let contents = tokio::fs::read_to_string(&full)
            .await
            .with_context(|| format!("fetch template {}", full.display()))?;
        debug!(bytes = contents.len(), "template fetched");
        Ok(contents)
    }
}

/// Return the body of the `<script>` element whose id is `id`.
pub fn extract_inline(shell: &str, id: &str) -> Result<Option<String>> {
    let pattern = format!(
        r#"(?is)<script\b[^>]*\sid\s*=\s*["']{}["'][^>]*>(.*?)</script\s*>"#,
        regex::escape(id)
    );
    let re = Regex::new(&pattern).with_context(|| format!("build inline template pattern for '{}'", id))?;
    Ok(re
        .captures(shell)
        .and_then(|caps| caps.get(1))
        .map(|body| body.as_str().to_string()))
}

/// Template engine wrapper around minijinja.
///
/// Every template is HTML auto-escaped and undefined values (including
/// lookups through undefined values) render empty, which is the
/// mustache-style contract site templates are written against.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    pub fn new() -> Self {
        Self {
            env: Self::environment(),
        }
    }

    /// Environment settings shared by rendering and compile checks.
    fn environment<'source>() -> Environment<'source> {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::Html);
        env.set_undefined_behavior(UndefinedBehavior::Chainable);
        env
    }

    /// Compile `source` and render it against `data`.
    pub fn render<S: Serialize>(&self, name: &str, source: &str, data: S) -> Result<String> {
        self.env
            .render_str(source, data)
            .with_context(|| format!("render template '{}'", name))
    }

    /// Compile `source` without rendering it.
    ///
    /// Sources are borrowed, so this compiles in a short-lived environment
    /// configured like the rendering one.
    pub fn check(&self, name: &str, source: &str) -> Result<()> {
        Self::environment()
            .template_from_str(source)
            .map(|_| ())
            .with_context(|| format!("compile template '{}'", name))
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}
