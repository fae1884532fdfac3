//! Static site configuration: the tools a site offers plus free-form site data.
//!
//! Loaded once (see [`crate::io::site_store`]) and read-only afterwards. The
//! id index is built at construction so tool lookups never scan.

use std::collections::HashMap;

use anyhow::{Context as _, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::types::Context;

/// Key under which the resolved [`Context`] is exposed to templates.
pub const CONTEXT_KEY: &str = "context";

/// One tool entry under `tools`.
///
/// Only `id` is interpreted by the router; the remaining fields are passed
/// through to templates untouched.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToolConfig {
    pub id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Root configuration document.
///
/// `tools` and the free-form site fields keep the order they were written
/// in, so templates list tools the way the config author arranged them.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(from = "SiteConfigDoc")]
pub struct SiteConfig {
    pub tools: IndexMap<String, ToolConfig>,
    #[serde(flatten)]
    pub site: Map<String, Value>,
    #[serde(skip)]
    by_id: HashMap<String, String>,
}

#[derive(Deserialize)]
struct SiteConfigDoc {
    tools: IndexMap<String, ToolConfig>,
    #[serde(flatten)]
    site: Map<String, Value>,
}

impl From<SiteConfigDoc> for SiteConfig {
    fn from(doc: SiteConfigDoc) -> Self {
        Self::new(doc.tools, doc.site)
    }
}

impl SiteConfig {
    pub fn new(tools: IndexMap<String, ToolConfig>, site: Map<String, Value>) -> Self {
        let mut by_id = HashMap::with_capacity(tools.len());
        // First entry wins for a repeated id; invariants reject repeats at
        // load time anyway.
        for (key, tool) in &tools {
            by_id.entry(tool.id.clone()).or_insert_with(|| key.clone());
        }
        Self { tools, site, by_id }
    }

    /// Look up a tool by its `id` field (not its key under `tools`).
    pub fn tool(&self, id: &str) -> Option<&ToolConfig> {
        self.by_id.get(id).and_then(|key| self.tools.get(key))
    }

    /// Iterate tool ids in the order the config lists them.
    pub fn tool_ids(&self) -> impl Iterator<Item = &str> {
        self.tools.values().map(|tool| tool.id.as_str())
    }

    /// Data handed to every template: the whole config with `context` set to
    /// the current resolution.
    pub fn template_data(&self, context: &Context) -> Result<Value> {
        let mut data = match serde_json::to_value(self).context("serialize site config")? {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        let context = serde_json::to_value(context).context("serialize context")?;
        data.insert(CONTEXT_KEY.to_string(), context);
        Ok(Value::Object(data))
    }
}
