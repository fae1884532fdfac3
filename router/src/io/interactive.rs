//! Interactive tool hooks.
//!
//! The interactive page is assembled by four collaborators the router knows
//! only by name. [`InteractiveToolLoader`] is the seam; [`ScriptHookLoader`]
//! defers each hook to the page's own scripts.

use super::document::{Container, Document};

pub const LOAD_TOOL_INTERFACE_TEMPLATE: &str = "load_tool_interface_template";
pub const ALIGN_INTERFACE_CONTENT: &str = "alignInterfaceContent";
pub const INIT_INFO: &str = "initInfo";
pub const INIT_TOOL_INTERFACE_CONTROL: &str = "init_tool_interface_control";

/// Hook names in invocation order.
pub const HOOKS: [&str; 4] = [
    LOAD_TOOL_INTERFACE_TEMPLATE,
    ALIGN_INTERFACE_CONTENT,
    INIT_INFO,
    INIT_TOOL_INTERFACE_CONTROL,
];

/// Collaborators that build the interactive tool page.
///
/// Callers invoke the methods in declaration order; implementations may rely
/// on that.
pub trait InteractiveToolLoader {
    fn load_tool_interface_template(&mut self, doc: &mut dyn Document);

    fn align_interface_content(&mut self, doc: &mut dyn Document);

    /// Informational notices, including the cookie notice when needed.
    fn init_info(&mut self, doc: &mut dyn Document);

    fn init_tool_interface_control(&mut self, doc: &mut dyn Document);
}

/// Emits one `<script>hook();</script>` per hook into the content container.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptHookLoader;

impl ScriptHookLoader {
    fn emit(doc: &mut dyn Document, hook: &str) {
        doc.append_html(Container::Content, &format!("<script>{}();</script>", hook));
    }
}

impl InteractiveToolLoader for ScriptHookLoader {
    fn load_tool_interface_template(&mut self, doc: &mut dyn Document) {
        Self::emit(doc, LOAD_TOOL_INTERFACE_TEMPLATE);
    }

    fn align_interface_content(&mut self, doc: &mut dyn Document) {
        Self::emit(doc, ALIGN_INTERFACE_CONTENT);
    }

    fn init_info(&mut self, doc: &mut dyn Document) {
        Self::emit(doc, INIT_INFO);
    }

    fn init_tool_interface_control(&mut self, doc: &mut dyn Document) {
        Self::emit(doc, INIT_TOOL_INTERFACE_CONTROL);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::document::HtmlDocument;
    use crate::test_support::SHELL;

    #[test]
    fn script_loader_emits_named_hook() {
        let mut doc = HtmlDocument::from_shell(SHELL).expect("shell");
        let mut loader = ScriptHookLoader;
        loader.init_info(&mut doc);
        assert_eq!(
            doc.container_html(Container::Content),
            "<script>initInfo();</script>"
        );
        assert_eq!(doc.container_html(Container::Header), "");
    }
}
