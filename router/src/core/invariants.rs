//! Semantic invariants of a site config not expressible via JSON Schema.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::site::SiteConfig;

/// Tool ids end up as file names under the template directory.
static TOOL_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_][A-Za-z0-9_.-]*$").unwrap());

/// True if `id` can be used as a single path segment.
pub fn is_path_safe_id(id: &str) -> bool {
    TOOL_ID_RE.is_match(id) && !id.contains("..")
}

/// Check semantic invariants:
/// - No duplicate tool ids
/// - Every id is a safe path segment
pub fn validate_invariants(site: &SiteConfig) -> Vec<String> {
    let mut errors = Vec::new();
    let mut seen: HashMap<&str, &str> = HashMap::new();
    for (key, tool) in &site.tools {
        if let Some(first) = seen.insert(tool.id.as_str(), key.as_str()) {
            errors.push(format!(
                "duplicate tool id '{}' under tools.{} and tools.{}",
                tool.id, first, key
            ));
        }
        if !is_path_safe_id(&tool.id) {
            errors.push(format!(
                "tools.{}: id '{}' must match [A-Za-z0-9_][A-Za-z0-9_.-]* without '..'",
                key, tool.id
            ));
        }
    }
    errors
}
