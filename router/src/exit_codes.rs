//! Stable exit codes for `site-router` commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Command failed due to invalid settings/config/shell/templates or other errors.
pub const INVALID: i32 = 1;
/// `site-router check` found tools whose info page template is missing or broken.
pub const INCOMPLETE: i32 = 2;
