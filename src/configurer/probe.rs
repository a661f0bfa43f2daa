//! Env var and filesystem probing for distribution detection.
//!
//! Detectable configurers locate their distribution's install root the same
//! way: an environment variable override is checked first (handling
//! relocated installs), then a list of well-known default paths. A root
//! only counts if the distribution's marker path exists beneath it, so a
//! stale env var pointing at an empty directory falls through to the
//! defaults.
//!
//! Env lookups go through an injected function so tests never have to
//! mutate real process environment variables.

use std::path::PathBuf;

/// Env lookup signature used by configurers; defaults to [`std::env::var`].
pub type EnvLookup = fn(&str) -> Result<String, std::env::VarError>;

/// Locate a distribution install root.
///
/// Checks `env_var` first, then falls back to `default_roots` in order.
/// Returns the first root under which `marker` exists.
pub fn locate_install_root<F>(
    env_var: Option<&str>,
    default_roots: &[PathBuf],
    marker: &str,
    env_fn: &F,
) -> Option<PathBuf>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    // 1. Env var override first (handles relocated installs)
    if let Some(var) = env_var {
        if let Ok(val) = env_fn(var) {
            let root = PathBuf::from(val);
            if root.join(marker).exists() {
                return Some(root);
            }
        }
    }

    // 2. Fall back to well-known roots
    for root in default_roots {
        if root.join(marker).exists() {
            return Some(root.clone());
        }
    }

    None
}
