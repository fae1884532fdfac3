//! Site preview server - renders router pages on request, like the browser would.

mod routes;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;

use axum::Router;
use axum::routing::get;
use clap::Parser;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::info;

use crate::state::AppState;

#[derive(Parser)]
#[command(name = "site-preview")]
#[command(about = "Local preview server for a config-driven static site")]
struct Args {
    /// Address to bind the server to
    #[arg(long, default_value = "127.0.0.1")]
    bind: String,

    /// Port to listen on
    #[arg(long, default_value = "3001")]
    port: u16,

    /// Site directory (contains config.json and index.html)
    #[arg(long, default_value = ".")]
    site: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("site_preview=info".parse()?),
        )
        .init();

    let args = Args::parse();

    let site_dir = args.site.canonicalize().unwrap_or(args.site);
    info!(site_dir = %site_dir.display(), "starting site-preview");

    let state = AppState::new(site_dir.clone());
    // Fail fast on a broken site; requests reload it anyway.
    let site = state.load_site()?;
    info!(tools = site.config.tools.len(), "site loaded");

    let api_router = routes::api_router();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Static assets (css, js, templates) come straight from the site directory.
    let app = Router::new()
        .route("/", get(routes::get_page))
        .route("/index.html", get(routes::get_page))
        .nest("/api", api_router)
        .layer(cors)
        .with_state(state)
        .fallback_service(ServeDir::new(site_dir));

    let addr: SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;
    info!(addr = %addr, "listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
