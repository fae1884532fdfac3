//! Shared application state for the preview server.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use site_router::io::site_store::{Site, load_site};

/// Shared state accessible from all request handlers.
///
/// The site is reloaded on every request, so edits to the config, shell or
/// templates show up on the next page load.
#[derive(Clone)]
pub struct AppState {
    /// Root directory of the site (contains config.json, index.html).
    pub site_dir: Arc<PathBuf>,
}

impl AppState {
    pub fn new(site_dir: PathBuf) -> Self {
        Self {
            site_dir: Arc::new(site_dir),
        }
    }

    /// Load the site as it currently is on disk.
    pub fn load_site(&self) -> Result<Site> {
        load_site(&self.site_dir)
    }
}
