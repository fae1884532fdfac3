//! Router settings stored in `site.toml` at the site root.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// File name of the settings file inside a site directory.
pub const SETTINGS_FILE: &str = "site.toml";

/// What a tool info page shows when its template cannot be loaded.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MissingTemplatePolicy {
    /// Append a short alert naming the tool.
    #[default]
    Notice,
    /// Append nothing; the content area stays empty.
    Blank,
}

/// Router settings (TOML).
///
/// Every field is optional; missing fields take the conventional layout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RouterConfig {
    /// Site config JSON, relative to the site root.
    pub site_config: String,

    /// Page shell holding the containers and inline templates.
    pub shell: String,

    /// Directory of tool info templates, relative to the site root.
    pub template_dir: String,

    /// Extension of tool info templates (without the dot).
    pub template_extension: String,

    /// Element id of the inline header template.
    pub header_template: String,

    /// Element id of the inline landing page template.
    pub landing_template: String,

    pub on_missing_template: MissingTemplatePolicy,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            site_config: "config.json".to_string(),
            shell: "index.html".to_string(),
            template_dir: "templates".to_string(),
            template_extension: "html".to_string(),
            header_template: "header-template".to_string(),
            landing_template: "landing-page-template".to_string(),
            on_missing_template: MissingTemplatePolicy::default(),
        }
    }
}

impl RouterConfig {
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("site_config", &self.site_config),
            ("shell", &self.shell),
            ("template_dir", &self.template_dir),
            ("template_extension", &self.template_extension),
            ("header_template", &self.header_template),
            ("landing_template", &self.landing_template),
        ] {
            if value.trim().is_empty() {
                return Err(anyhow!("{} must be non-empty", name));
            }
        }
        if self.template_extension.contains(['.', '/', '\\']) {
            return Err(anyhow!(
                "template_extension must not contain '.', '/' or '\\' (got {:?})",
                self.template_extension
            ));
        }
        Ok(())
    }

    /// Convention path of a tool's info page template, relative to the site root.
    pub fn tool_template_path(&self, tool_id: &str) -> String {
        format!(
            "{}/{}.{}",
            self.template_dir.trim_end_matches('/'),
            tool_id,
            self.template_extension
        )
    }
}

/// Load settings from a TOML file.
///
/// If the file is missing, returns `RouterConfig::default()`.
pub fn load_config(path: &Path) -> Result<RouterConfig> {
    if !path.exists() {
        let cfg = RouterConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: RouterConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}
