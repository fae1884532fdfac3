//! CLI tests for `site-router`.
//!
//! Spawns the binary against a temporary site directory and checks output and
//! exit codes.

use std::process::Command;

use serde_json::Value;
use site_router::exit_codes;
use site_router::test_support::SiteDir;

fn site_router() -> Command {
    Command::new(env!("CARGO_BIN_EXE_site-router"))
}

#[test]
fn render_prints_tool_page() {
    let dir = SiteDir::new().expect("site dir");

    let output = site_router()
        .args(["render", "--url", "?ui=tool&tool=hash-compare", "--site"])
        .arg(dir.path())
        .output()
        .expect("site-router render");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let html = String::from_utf8(output.stdout).expect("utf8");
    assert!(html.contains("<h2>Hash Compare</h2>"));
    assert!(html.contains(r#"<body class="tool">"#));
}

#[test]
fn render_writes_out_file() {
    let dir = SiteDir::new().expect("site dir");
    let out = dir.path().join("home.html");

    let status = site_router()
        .arg("render")
        .arg("--site")
        .arg(dir.path())
        .arg("--out")
        .arg(&out)
        .status()
        .expect("site-router render");

    assert_eq!(status.code(), Some(exit_codes::OK));
    let html = std::fs::read_to_string(&out).expect("read page");
    assert!(html.contains(">Automizer</a>"));
}

#[test]
fn resolve_prints_context_json() {
    let dir = SiteDir::new().expect("site dir");

    let output = site_router()
        .args(["resolve", "--url", "?ui=int&tool=nope", "--site"])
        .arg(dir.path())
        .output()
        .expect("site-router resolve");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let context: Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(context["url"]["ui"], "home");
    assert_eq!(context["url"]["tool"], "nope");
    assert_eq!(context["tool"], serde_json::json!({}));
}

#[test]
fn check_reports_missing_tool_template() {
    let dir = SiteDir::new().expect("site dir");

    let output = site_router()
        .arg("check")
        .arg("--site")
        .arg(dir.path())
        .output()
        .expect("site-router check");

    assert_eq!(output.status.code(), Some(exit_codes::INCOMPLETE));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("automizer"));
}

#[test]
fn invalid_config_exits_invalid() {
    let dir = SiteDir::new().expect("site dir");
    dir.write("config.json", r#"{"tools":{"a":{"id":"../x"}}}"#)
        .expect("write config");

    let status = site_router()
        .arg("render")
        .arg("--site")
        .arg(dir.path())
        .status()
        .expect("site-router render");

    assert_eq!(status.code(), Some(exit_codes::INVALID));
}
