//! End-to-end page load scenarios.
//!
//! Each test drives a fresh `Bootstrapper` over the sample site with
//! in-memory templates and a recording hook loader, then checks the resolved
//! context, which strategy ran, and what landed in the document.

use serde_json::json;
use site_router::bootstrap::{BootstrapState, Bootstrapper, render_page};
use site_router::core::dispatch::Dispatch;
use site_router::io::config::RouterConfig;
use site_router::io::document::{Container, HtmlDocument};
use site_router::io::site_store::load_site;
use site_router::render::{PageRenderer, ToolPageOutcome};
use site_router::test_support::{
    MemoryTemplateSource, RecordingLoader, SHELL, SiteDir, sample_site,
};

fn templates() -> MemoryTemplateSource {
    MemoryTemplateSource::new()
        .with_inline("header-template", "<h1>{{ title }}</h1>")
        .with_inline("landing-page-template", "<p>landing</p>")
        .with_remote("templates/hash-compare.hbs", "<h2>{{ context.tool.name }}</h2>")
}

fn hbs_settings() -> RouterConfig {
    RouterConfig {
        template_extension: "hbs".to_string(),
        ..RouterConfig::default()
    }
}

/// Scenario 1: `?ui=home` renders the landing page with an empty tool.
#[tokio::test]
async fn home_renders_landing_page() {
    let site = sample_site();
    let settings = hbs_settings();
    let templates = templates();
    let renderer = PageRenderer::new(&site, &settings, &templates);
    let doc = HtmlDocument::from_shell(SHELL).expect("shell");
    let mut boot = Bootstrapper::new(renderer, doc, RecordingLoader::default());

    let report = boot.bootstrap("?ui=home").await.expect("bootstrap");

    assert_eq!(
        serde_json::to_value(&report.context).expect("context json"),
        json!({ "url": { "ui": "home", "tool": null }, "tool": {} })
    );
    assert_eq!(report.dispatch, Dispatch::Landing);
    assert_eq!(boot.document().container_html(Container::Content), "<p>landing</p>");
    assert_eq!(boot.document().container_html(Container::Header), "<h1>Verification Tools</h1>");
    assert!(templates.fetched().is_empty());
}

/// Scenario 2: a known tool in tool mode binds the config and fetches its
/// template by convention path.
#[tokio::test]
async fn tool_mode_fetches_convention_path() {
    let site = sample_site();
    let settings = hbs_settings();
    let templates = templates();
    let renderer = PageRenderer::new(&site, &settings, &templates);
    let doc = HtmlDocument::from_shell(SHELL).expect("shell");
    let mut boot = Bootstrapper::new(renderer, doc, RecordingLoader::default());

    let report = boot
        .bootstrap("https://tools.example.org/?ui=tool&tool=hash-compare")
        .await
        .expect("bootstrap");

    assert_eq!(report.context.tool_id(), Some("hash-compare"));
    assert_eq!(
        report.context.tool.as_ref().and_then(|t| t.fields.get("name")),
        Some(&json!("Hash Compare"))
    );
    assert_eq!(templates.fetched(), vec!["templates/hash-compare.hbs"]);
    assert_eq!(
        report.tool_page,
        Some(ToolPageOutcome::Rendered {
            path: "templates/hash-compare.hbs".to_string()
        })
    );
    assert_eq!(boot.document().container_html(Container::Content), "<h2>Hash Compare</h2>");
}

/// Scenario 3: an unknown tool in interactive mode is redirected home; no
/// hook runs.
#[tokio::test]
async fn unknown_interactive_tool_redirects_home() {
    let site = sample_site();
    let settings = hbs_settings();
    let templates = templates();
    let renderer = PageRenderer::new(&site, &settings, &templates);
    let doc = HtmlDocument::from_shell(SHELL).expect("shell");
    let mut boot = Bootstrapper::new(renderer, doc, RecordingLoader::default());

    let report = boot
        .bootstrap("?ui=int&tool=does-not-exist")
        .await
        .expect("bootstrap");

    assert_eq!(report.context.url.ui.as_deref(), Some("home"));
    assert_eq!(report.dispatch, Dispatch::Landing);
    assert!(boot.loader().calls.is_empty());
    assert_eq!(boot.document().container_html(Container::Content), "<p>landing</p>");
}

/// Scenario 4: no parameters at all is forced home.
#[tokio::test]
async fn no_parameters_forces_home() {
    let site = sample_site();
    let settings = hbs_settings();
    let templates = templates();
    let renderer = PageRenderer::new(&site, &settings, &templates);
    let doc = HtmlDocument::from_shell(SHELL).expect("shell");
    let mut boot = Bootstrapper::new(renderer, doc, RecordingLoader::default());

    let report = boot.bootstrap("https://tools.example.org/").await.expect("bootstrap");

    assert_eq!(report.context.url.ui.as_deref(), Some("home"));
    assert_eq!(report.context.url.tool, None);
    assert_eq!(report.context.tool, None);
    assert_eq!(report.dispatch, Dispatch::Landing);
}

/// Scenario 5: interactive mode leaves only the `int` mode class on the body
/// and runs the hooks in order.
#[tokio::test]
async fn interactive_mode_sets_body_class_and_runs_hooks() {
    let site = sample_site();
    let settings = hbs_settings();
    let templates = templates();
    let renderer = PageRenderer::new(&site, &settings, &templates);
    let mut doc = HtmlDocument::from_shell(SHELL).expect("shell");
    site_router::io::document::Document::add_body_class(&mut doc, "tool");
    let mut boot = Bootstrapper::new(renderer, doc, RecordingLoader::default());

    let report = boot
        .bootstrap("?ui=int&tool=automizer")
        .await
        .expect("bootstrap");

    let classes = boot.document().body_classes();
    assert!(classes.iter().any(|c| c == "int"));
    assert!(!classes.iter().any(|c| c == "tool" || c == "home"));
    assert_eq!(
        report.dispatch,
        Dispatch::Interactive {
            tool_id: "automizer".to_string()
        }
    );
    assert_eq!(boot.loader().calls, site_router::io::interactive::HOOKS);
    assert_eq!(boot.state(), BootstrapState::Dispatched);
    assert_eq!(boot.document().container_html(Container::Content), "");
}

/// Unknown `ui` with a valid tool keeps the token as a body class and falls
/// through to the landing page.
#[tokio::test]
async fn unrecognized_mode_lands_with_stray_class() {
    let site = sample_site();
    let settings = hbs_settings();
    let templates = templates();
    let renderer = PageRenderer::new(&site, &settings, &templates);
    let doc = HtmlDocument::from_shell(SHELL).expect("shell");
    let mut boot = Bootstrapper::new(renderer, doc, RecordingLoader::default());

    let report = boot
        .bootstrap("?ui=gallery&tool=automizer")
        .await
        .expect("bootstrap");

    assert_eq!(report.dispatch, Dispatch::Landing);
    assert_eq!(report.context.tool_id(), Some("automizer"));
    assert_eq!(boot.document().body_classes(), ["gallery"]);
}

/// Full filesystem page: shell, inline templates, remote template, script hooks.
#[tokio::test]
async fn render_page_from_site_directory() {
    let dir = SiteDir::new().expect("site dir");
    let site = load_site(dir.path()).expect("load site");

    let page = render_page(&site, "?ui=tool&tool=hash-compare")
        .await
        .expect("render");
    assert!(page.html.contains(r#"<body class="tool">"#), "{}", page.html);
    assert!(page.html.contains(r#"<div id="header"><h1>Verification Tools</h1></div>"#));
    assert!(page.html.contains(r#"<div id="content"><h2>Hash Compare</h2><p>c</p></div>"#));

    let page = render_page(&site, "?ui=int&tool=automizer")
        .await
        .expect("render");
    let hooks = page
        .html
        .find("load_tool_interface_template();")
        .zip(page.html.find("init_tool_interface_control();"));
    assert!(matches!(hooks, Some((first, last)) if first < last));

    let page = render_page(&site, "?ui=tool&tool=automizer")
        .await
        .expect("render");
    assert!(page.html.contains("template-missing"));
    assert!(matches!(page.report.tool_page, Some(ToolPageOutcome::Missing { .. })));
}
