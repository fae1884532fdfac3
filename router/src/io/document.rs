//! Page document abstraction.
//!
//! The [`Document`] trait is the only way renderers touch the page: append
//! markup to a named container and edit the body's class list.
//! [`HtmlDocument`] implements it over a page shell and splices the result
//! back into HTML.

use std::ops::Range;
use std::sync::LazyLock;

use anyhow::{Context, Result, anyhow};
use regex::Regex;

/// Named containers renderers append into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Container {
    Header,
    Content,
}

impl Container {
    /// Element id of the container in the page shell.
    pub fn element_id(self) -> &'static str {
        match self {
            Container::Header => "header",
            Container::Content => "content",
        }
    }
}

/// Mutable view of the page being built.
pub trait Document {
    /// Append markup at the end of `container`.
    fn append_html(&mut self, container: Container, html: &str);

    fn remove_body_class(&mut self, class: &str);

    /// Add whitespace-separated class tokens to the body, skipping ones present.
    fn add_body_class(&mut self, class: &str);
}

static BODY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?is)<body\b([^>]*)>").unwrap());
static CLASS_ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)(?:^|\s+)class\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s>]+))"#).unwrap()
});

/// In-memory document over a page shell.
///
/// The shell must contain a `<body>` tag and elements with ids `header` and
/// `content`. Appended markup lands right after each container's opening tag,
/// ahead of any children the shell already put there.
#[derive(Debug, Clone)]
pub struct HtmlDocument {
    shell: String,
    body_tag: Range<usize>,
    body_attrs: String,
    header_at: usize,
    content_at: usize,
    header: String,
    content: String,
    body_classes: Vec<String>,
}

impl HtmlDocument {
    pub fn from_shell(shell: impl Into<String>) -> Result<Self> {
        let shell = shell.into();
        let body = BODY_RE
            .captures(&shell)
            .ok_or_else(|| anyhow!("page shell has no <body> tag"))?;
        let body_tag = body.get(0).map(|m| m.range()).unwrap_or_default();
        let attrs = body.get(1).map(|m| m.as_str()).unwrap_or_default();

        let mut body_classes = Vec::new();
        if let Some(class) = CLASS_ATTR_RE.captures(attrs) {
            let value = class
                .get(1)
                .or_else(|| class.get(2))
                .or_else(|| class.get(3))
                .map(|m| m.as_str())
                .unwrap_or_default();
            body_classes.extend(value.split_whitespace().map(str::to_string));
        }
        let body_attrs = CLASS_ATTR_RE.replace(attrs, "").into_owned();

        let header_at = container_insert_point(&shell, Container::Header)?;
        let content_at = container_insert_point(&shell, Container::Content)?;
        if header_at < body_tag.end || content_at < body_tag.end {
            return Err(anyhow!("page shell containers must sit inside <body>"));
        }

        Ok(Self {
            shell,
            body_tag,
            body_attrs,
            header_at,
            content_at,
            header: String::new(),
            content: String::new(),
            body_classes,
        })
    }

    /// Markup appended to `container` so far.
    pub fn container_html(&self, container: Container) -> &str {
        match container {
            Container::Header => &self.header,
            Container::Content => &self.content,
        }
    }

    pub fn body_classes(&self) -> &[String] {
        &self.body_classes
    }

    /// Splice containers and body classes back into the shell.
    pub fn to_html(&self) -> String {
        let body = if self.body_classes.is_empty() {
            format!("<body{}>", self.body_attrs)
        } else {
            format!(
                "<body{} class=\"{}\">",
                self.body_attrs,
                self.body_classes.join(" ")
            )
        };
        let mut edits = [
            (self.body_tag.clone(), body.as_str()),
            (self.header_at..self.header_at, self.header.as_str()),
            (self.content_at..self.content_at, self.content.as_str()),
        ];
        edits.sort_by_key(|(range, _)| range.start);

        let mut out = String::with_capacity(self.shell.len() + self.header.len() + self.content.len());
        let mut cursor = 0;
        for (range, text) in &edits {
            out.push_str(&self.shell[cursor..range.start]);
            out.push_str(text);
            cursor = range.end;
        }
        out.push_str(&self.shell[cursor..]);
        out
    }
}

impl Document for HtmlDocument {
    fn append_html(&mut self, container: Container, html: &str) {
        match container {
            Container::Header => self.header.push_str(html),
            Container::Content => self.content.push_str(html),
        }
    }

    fn remove_body_class(&mut self, class: &str) {
        self.body_classes.retain(|existing| existing != class);
    }

    fn add_body_class(&mut self, class: &str) {
        for token in class.split_whitespace() {
            if !self.body_classes.iter().any(|existing| existing == token) {
                self.body_classes.push(token.to_string());
            }
        }
    }
}

/// Byte offset right after the opening tag of the container element.
fn container_insert_point(shell: &str, container: Container) -> Result<usize> {
    let pattern = format!(
        r#"(?is)<[a-z][a-z0-9-]*\b[^>]*\sid\s*=\s*["']{}["'][^>]*>"#,
        regex::escape(container.element_id())
    );
    let re = Regex::new(&pattern).context("build container pattern")?;
    re.find(shell).map(|m| m.end()).ok_or_else(|| {
        anyhow!(
            "page shell has no element with id '{}'",
            container.element_id()
        )
    })
}
