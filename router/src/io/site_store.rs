//! Site loading: settings, config (schema + invariants), page shell.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use jsonschema::validator_for;
use serde_json::Value;
use tracing::debug;

use super::config::{RouterConfig, SETTINGS_FILE, load_config};
use super::templates::FsTemplateSource;
use crate::core::invariants::validate_invariants;
use crate::site::SiteConfig;

const SITE_SCHEMA: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/schemas/site_config.schema.json"
));

/// Canonical paths within a site directory.
#[derive(Debug, Clone)]
pub struct SitePaths {
    pub root: PathBuf,
    pub settings_path: PathBuf,
    pub config_path: PathBuf,
    pub shell_path: PathBuf,
    pub template_dir: PathBuf,
}

impl SitePaths {
    pub fn new(root: impl Into<PathBuf>, settings: &RouterConfig) -> Self {
        let root = root.into();
        Self {
            settings_path: root.join(SETTINGS_FILE),
            config_path: root.join(&settings.site_config),
            shell_path: root.join(&settings.shell),
            template_dir: root.join(&settings.template_dir),
            root,
        }
    }
}

/// Everything needed to render pages of one site.
#[derive(Debug, Clone)]
pub struct Site {
    pub paths: SitePaths,
    pub settings: RouterConfig,
    pub config: SiteConfig,
    pub templates: FsTemplateSource,
}

/// Load a site directory: `site.toml` (optional), the config JSON and the shell.
pub fn load_site(root: &Path) -> Result<Site> {
    debug!(root = %root.display(), "loading site");
    let settings = load_config(&root.join(SETTINGS_FILE))?;
    let paths = SitePaths::new(root, &settings);
    let config = load_site_config(&paths.config_path)?;
    let templates = FsTemplateSource::open(root, &settings.shell)?;
    debug!(tools = config.tools.len(), "site loaded");
    Ok(Site {
        paths,
        settings,
        config,
        templates,
    })
}

/// Load and validate a site config (schema + invariants).
pub fn load_site_config(path: &Path) -> Result<SiteConfig> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read site config {}", path.display()))?;
    parse_site_config(&contents).with_context(|| format!("load site config {}", path.display()))
}

/// Parse and validate site config JSON.
pub fn parse_site_config(contents: &str) -> Result<SiteConfig> {
    let value: Value = serde_json::from_str(contents).context("parse site config json")?;
    validate_schema(&value)?;
    let config: SiteConfig =
        serde_json::from_value(value).context("deserialize site config")?;
    let errors = validate_invariants(&config);
    if !errors.is_empty() {
        return Err(anyhow!("site config invariants failed: {}", errors.join("; ")));
    }
    Ok(config)
}

fn validate_schema(config: &Value) -> Result<()> {
    let schema: Value = serde_json::from_str(SITE_SCHEMA).context("parse site config schema")?;
    let compiled = validator_for(&schema).map_err(|err| anyhow!("invalid schema: {}", err))?;
    let messages = compiled
        .iter_errors(config)
        .map(|err| err.to_string())
        .collect::<Vec<_>>();
    if !messages.is_empty() {
        return Err(anyhow!(
            "site config schema validation failed: {}",
            messages.join("; ")
        ));
    }
    Ok(())
}
