//! Test-only doubles and fixtures for routing and rendering.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use serde_json::{Value, json};

use crate::io::document::Document;
use crate::io::interactive::{
    ALIGN_INTERFACE_CONTENT, INIT_INFO, INIT_TOOL_INTERFACE_CONTROL, InteractiveToolLoader,
    LOAD_TOOL_INTERFACE_TEMPLATE,
};
use crate::io::templates::TemplateSource;
use crate::site::SiteConfig;

/// Page shell with both containers and the two inline templates.
pub const SHELL: &str = r#"<!doctype html>
<html>
<head><title>Tools</title></head>
<body class="home">
<div id="header"></div>
<div id="content"></div>
<script id="header-template" type="text/x-template"><h1>{{ title }}</h1></script>
<script id="landing-page-template" type="text/x-template"><ul>{% for key, tool in tools|items %}<li><a href="?ui=tool&amp;tool={{ tool.id }}">{{ tool.name }}</a></li>{% endfor %}</ul></script>
</body>
</html>
"#;

/// Config JSON with two tools: `hash-compare` (key `hash`) and `automizer`
/// (key `auto`).
pub fn sample_config_json() -> Value {
    json!({
        "title": "Verification Tools",
        "tools": {
            "hash": { "id": "hash-compare", "name": "Hash Compare", "languages": ["c"] },
            "auto": { "id": "automizer", "name": "Automizer", "languages": ["c", "boogie"] }
        }
    })
}

pub fn sample_site() -> SiteConfig {
    serde_json::from_value(sample_config_json()).expect("sample config parses")
}

/// In-memory template source that records every fetch.
#[derive(Debug, Default)]
pub struct MemoryTemplateSource {
    inline: HashMap<String, String>,
    remote: HashMap<String, String>,
    fetched: Mutex<Vec<String>>,
}

impl MemoryTemplateSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_inline(mut self, id: &str, source: &str) -> Self {
        self.inline.insert(id.to_string(), source.to_string());
        self
    }

    pub fn with_remote(mut self, path: &str, source: &str) -> Self {
        self.remote.insert(path.to_string(), source.to_string());
        self
    }

    /// Paths requested so far, in order (including failed fetches).
    pub fn fetched(&self) -> Vec<String> {
        self.fetched.lock().expect("fetch log lock").clone()
    }
}

impl TemplateSource for MemoryTemplateSource {
    fn inline(&self, id: &str) -> Result<String> {
        self.inline
            .get(id)
            .cloned()
            .ok_or_else(|| anyhow!("no inline template '{}'", id))
    }

    async fn fetch(&self, path: &str) -> Result<String> {
        self.fetched
            .lock()
            .expect("fetch log lock")
            .push(path.to_string());
        self.remote
            .get(path)
            .cloned()
            .ok_or_else(|| anyhow!("not found: {}", path))
    }
}

/// Interactive loader that only records hook invocations.
#[derive(Debug, Default)]
pub struct RecordingLoader {
    pub calls: Vec<&'static str>,
}

impl InteractiveToolLoader for RecordingLoader {
    fn load_tool_interface_template(&mut self, _doc: &mut dyn Document) {
        self.calls.push(LOAD_TOOL_INTERFACE_TEMPLATE);
    }

    fn align_interface_content(&mut self, _doc: &mut dyn Document) {
        self.calls.push(ALIGN_INTERFACE_CONTENT);
    }

    fn init_info(&mut self, _doc: &mut dyn Document) {
        self.calls.push(INIT_INFO);
    }

    fn init_tool_interface_control(&mut self, _doc: &mut dyn Document) {
        self.calls.push(INIT_TOOL_INTERFACE_CONTROL);
    }
}

/// Temporary site directory seeded with `config.json`, `index.html` and
/// `templates/hash-compare.html`. `automizer` has no template.
pub struct SiteDir {
    temp: tempfile::TempDir,
}

impl SiteDir {
    pub fn new() -> Result<Self> {
        let temp = tempfile::tempdir().context("create temp site dir")?;
        let dir = Self { temp };
        let config = serde_json::to_string_pretty(&sample_config_json())?;
        dir.write("config.json", &config)?;
        dir.write("index.html", SHELL)?;
        dir.write(
            "templates/hash-compare.html",
            "<h2>{{ context.tool.name }}</h2><p>{{ context.tool.languages|join(\", \") }}</p>",
        )?;
        Ok(dir)
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// Write `contents` to `relative`, creating parent directories.
    pub fn write(&self, relative: &str, contents: &str) -> Result<()> {
        let path = self.temp.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create directory {}", parent.display()))?;
        }
        fs::write(&path, contents).with_context(|| format!("write {}", path.display()))
    }
}
