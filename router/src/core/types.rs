//! Shared deterministic types for routing decisions.
//!
//! These types define stable contracts between core components. They do not
//! depend on external state or I/O.

use serde::{Serialize, Serializer};

use crate::site::ToolConfig;

/// `ui` value selecting the landing page.
pub const HOME: &str = "home";
/// `ui` value selecting the tool info page.
pub const TOOL: &str = "tool";
/// `ui` value selecting the interactive tool page.
pub const INTERACTIVE: &str = "int";

/// Every mode token; also the set of body classes cleared before each render.
pub const MODE_CLASSES: [&str; 3] = [INTERACTIVE, TOOL, HOME];

/// Recognized query parameters of a page location.
///
/// Values are raw: nothing here has been validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UrlParams {
    pub ui: Option<String>,
    pub tool: Option<String>,
}

/// The per-navigation decision: effective mode plus the selected tool.
///
/// Invariant: unless `url.ui` is `"home"`, `tool` holds the config whose id
/// equals `url.tool`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Context {
    pub url: UrlParams,
    #[serde(serialize_with = "tool_or_empty")]
    pub tool: Option<ToolConfig>,
}

impl Context {
    pub fn mode(&self) -> UiMode {
        UiMode::parse(self.url.ui.as_deref())
    }

    pub fn tool_id(&self) -> Option<&str> {
        self.tool.as_ref().map(|tool| tool.id.as_str())
    }
}

/// Templates expect an object under `context.tool` even when nothing is
/// selected.
fn tool_or_empty<S: Serializer>(tool: &Option<ToolConfig>, serializer: S) -> Result<S::Ok, S::Error> {
    match tool {
        Some(tool) => tool.serialize(serializer),
        None => serde_json::Map::new().serialize(serializer),
    }
}

/// Interpretation of a `ui` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Home,
    ToolInfo,
    Interactive,
    /// Absent or unknown token; renders like [`UiMode::Home`].
    Unrecognized,
}

impl UiMode {
    pub fn parse(ui: Option<&str>) -> Self {
        match ui {
            Some(HOME) => Self::Home,
            Some(TOOL) => Self::ToolInfo,
            Some(INTERACTIVE) => Self::Interactive,
            _ => Self::Unrecognized,
        }
    }
}
