//! Mode dispatch: map a resolved context to a render strategy.

use serde::Serialize;

use super::types::{Context, UiMode};

/// Which page strategy runs for a navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum Dispatch {
    Interactive { tool_id: String },
    ToolInfo { tool_id: String },
    Landing,
}

/// Select the strategy for `context`.
///
/// Anything other than `int` or `tool` (including `home`, absent and unknown
/// tokens) lands on the landing page, as does a tool mode with no tool bound.
pub fn dispatch(context: &Context) -> Dispatch {
    match (context.mode(), context.tool_id()) {
        (UiMode::Interactive, Some(id)) => Dispatch::Interactive {
            tool_id: id.to_string(),
        },
        (UiMode::ToolInfo, Some(id)) => Dispatch::ToolInfo {
            tool_id: id.to_string(),
        },
        _ => Dispatch::Landing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::resolver::resolve_location;
    use crate::test_support::sample_site;

    #[test]
    fn dispatches_each_mode() {
        let site = sample_site();
        assert_eq!(
            dispatch(&resolve_location(&site, "?ui=int&tool=automizer")),
            Dispatch::Interactive {
                tool_id: "automizer".to_string()
            }
        );
        assert_eq!(
            dispatch(&resolve_location(&site, "?ui=tool&tool=automizer")),
            Dispatch::ToolInfo {
                tool_id: "automizer".to_string()
            }
        );
        assert_eq!(dispatch(&resolve_location(&site, "?ui=home")), Dispatch::Landing);
    }

    #[test]
    fn unknown_mode_falls_through_to_landing() {
        let site = sample_site();
        assert_eq!(
            dispatch(&resolve_location(&site, "?ui=other&tool=automizer")),
            Dispatch::Landing
        );
    }

    #[test]
    fn tool_mode_without_tool_lands() {
        let mut context = resolve_location(&sample_site(), "?ui=int&tool=automizer");
        context.tool = None;
        assert_eq!(dispatch(&context), Dispatch::Landing);
    }
}
