//! `site-router`: render and inspect pages of a config-driven static site.
//!
//! A site directory holds `config.json`, the `index.html` page shell,
//! `templates/` and an optional `site.toml`. Pages are selected by the
//! `ui`/`tool` query parameters of the location passed with `--url`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use site_router::bootstrap::render_page;
use site_router::check::check_site;
use site_router::core::resolver::resolve_location;
use site_router::exit_codes;
use site_router::io::site_store::load_site;
use site_router::logging;

#[derive(Parser)]
#[command(
    name = "site-router",
    version,
    about = "Config-driven page router for static content sites"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the page for a location and print (or write) its HTML.
    Render {
        #[command(flatten)]
        target: Target,
        /// Write the page here instead of stdout.
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Print the resolved context for a location as JSON.
    Resolve {
        #[command(flatten)]
        target: Target,
    },
    /// Check settings, config, page shell and every tool's template.
    Check {
        /// Site directory.
        #[arg(long, default_value = ".")]
        site: PathBuf,
    },
}

#[derive(clap::Args)]
struct Target {
    /// Site directory.
    #[arg(long, default_value = ".")]
    site: PathBuf,
    /// Page location: full URL, `?query`, or bare query.
    #[arg(long, default_value = "")]
    url: String,
}

fn main() {
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    match cli.command {
        Command::Render { target, out } => cmd_render(&target, out),
        Command::Resolve { target } => cmd_resolve(&target),
        Command::Check { site } => cmd_check(&site),
    }
}

fn cmd_render(target: &Target, out: Option<PathBuf>) -> Result<i32> {
    let site = load_site(&target.site)?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("build async runtime")?;
    let page = runtime.block_on(render_page(&site, &target.url))?;
    match out {
        Some(path) => {
            fs::write(&path, &page.html).with_context(|| format!("write {}", path.display()))?
        }
        None => print!("{}", page.html),
    }
    Ok(exit_codes::OK)
}

fn cmd_resolve(target: &Target) -> Result<i32> {
    let site = load_site(&target.site)?;
    let context = resolve_location(&site.config, &target.url);
    print_json(&context)?;
    Ok(exit_codes::OK)
}

fn cmd_check(site: &Path) -> Result<i32> {
    let report = check_site(site)?;
    for problem in &report.problems {
        eprintln!("{} ({}): {}", problem.tool_id, problem.path, problem.problem);
    }
    if !report.is_clean() {
        eprintln!(
            "{} of {} tools have no usable info page template",
            report.problems.len(),
            report.tools
        );
        return Ok(exit_codes::INCOMPLETE);
    }
    println!("ok: {} tools", report.tools);
    Ok(exit_codes::OK)
}

/// Serialize `value` to pretty-printed JSON with trailing newline on stdout.
fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let payload = serde_json::to_string_pretty(value).context("serialize json")?;
    println!("{}", payload);
    Ok(())
}
