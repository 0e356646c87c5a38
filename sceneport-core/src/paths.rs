//! Asset-relative path resolution.
//!
//! Descriptor files reference each other with paths relative to the nearest
//! ancestor directory literally named `assets`, so an exported tree stays
//! valid wherever the engine installs it.

use tracing::warn;

const ASSET_DIR: &str = "assets/";

/// Resolve a path relative to its nearest `assets` directory ancestor.
///
/// Returns everything after the first occurrence of the literal `assets/`
/// segment, with platform backslashes normalized to `/` first. A path with
/// no such segment is returned unchanged (apart from the normalization) and
/// a warning is logged; the resulting reference will only load if the engine
/// resolves it against the right working directory.
pub fn asset_relative(path: &str) -> String {
    let normalized = path.replace('\\', "/");
    match normalized.find(ASSET_DIR) {
        Some(index) => normalized[index + ASSET_DIR.len()..].to_string(),
        None => {
            warn!(
                path = %normalized,
                "path has no `assets` ancestor, embedding it unchanged"
            );
            normalized
        }
    }
}
