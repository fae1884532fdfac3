//! Query parameter extraction for page locations.

use std::borrow::Cow;

use super::types::UrlParams;

/// Read the `ui` and `tool` parameters from a location.
///
/// `location` may be a full URL, a `?query`, or a bare query string. Decoding
/// matches the browser's `URLSearchParams.get`: `+` is a space, percent
/// escapes are decoded, the first occurrence of a key wins.
pub fn read_params(location: &str) -> UrlParams {
    let query = query_part(location);
    UrlParams {
        ui: param(query, "ui"),
        tool: param(query, "tool"),
    }
}

/// Return the first decoded value bound to `key`, if any.
pub fn param(query: &str, key: &str) -> Option<String> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(name, _)| decode(name) == key)
        .map(|(_, value)| decode(value).into_owned())
}

fn query_part(location: &str) -> &str {
    let without_fragment = location.split_once('#').map_or(location, |(head, _)| head);
    match without_fragment.split_once('?') {
        Some((_, query)) => query,
        // A URL or absolute path without `?` carries no parameters; anything
        // else is a bare query string.
        None if without_fragment.contains("://") || without_fragment.starts_with('/') => "",
        None => without_fragment,
    }
}

fn decode(raw: &str) -> Cow<'_, str> {
    if !raw.contains(['+', '%']) {
        return Cow::Borrowed(raw);
    }
    let spaced = raw.replace('+', " ");
    let decoded = match urlencoding::decode(&spaced) {
        Ok(text) => text.into_owned(),
        Err(_) => String::from_utf8_lossy(&urlencoding::decode_binary(spaced.as_bytes())).into_owned(),
    };
    Cow::Owned(decoded)
}
