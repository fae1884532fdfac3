//! Context resolution: which mode runs and for which tool.

use super::params::read_params;
use super::types::{Context, HOME, UrlParams};
use crate::site::SiteConfig;

/// Resolve requested parameters against the site's tools.
///
/// A `tool` that names no configured id forces `ui` to `"home"`, whatever was
/// requested. Outside home mode the matching tool is bound.
pub fn resolve(site: &SiteConfig, params: UrlParams) -> Context {
    let mut url = params;
    let known = url.tool.as_deref().and_then(|id| site.tool(id));
    if known.is_none() {
        url.ui = Some(HOME.to_string());
    }

    let tool = if url.ui.as_deref() != Some(HOME) {
        known.cloned()
    } else {
        None
    };

    Context { url, tool }
}

/// Read parameters from `location` and resolve them.
pub fn resolve_location(site: &SiteConfig, location: &str) -> Context {
    resolve(site, read_params(location))
}

/// True when resolution overrode the requested `ui`.
pub fn was_redirected(requested: &UrlParams, resolved: &Context) -> bool {
    requested.ui != resolved.url.ui
}
