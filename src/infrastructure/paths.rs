//! Path utilities for locating catalog data on the host.
//!
//! Data lives under `$XDG_DATA_HOME/pokecatalog`, falling back to
//! `~/.local/share/pokecatalog`, and finally to a relative `pokecatalog`
//! directory when no home directory is known.

use std::path::PathBuf;

/// Directory name used under the data home.
const APP_DIR: &str = "pokecatalog";

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .filter(|home| !home.is_empty())
        .map(PathBuf::from)
}

/// Returns the default data directory for catalog storage and logs.
///
/// # Examples
///
/// ```
/// use pokecatalog::infrastructure::get_data_dir;
///
/// let data_dir = get_data_dir();
/// assert!(data_dir.ends_with("pokecatalog"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    if let Some(xdg) = std::env::var_os("XDG_DATA_HOME").filter(|v| !v.is_empty()) {
        return PathBuf::from(xdg).join(APP_DIR);
    }
    home_dir().map_or_else(
        || PathBuf::from(APP_DIR),
        |home| home.join(".local").join("share").join(APP_DIR),
    )
}

/// Expands a leading `~` to the home directory.
///
/// Paths without a tilde prefix, or any path when no home directory is
/// known, are returned unchanged.
///
/// # Examples
///
/// ```
/// use pokecatalog::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), std::path::PathBuf::from("/absolute/path"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    let rest = if path == "~" {
        Some("")
    } else {
        path.strip_prefix("~/")
    };

    match (rest, home_dir()) {
        (Some(""), Some(home)) => home,
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}
