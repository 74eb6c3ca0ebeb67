//! Path-pattern rules mapping package file listings to asset identifiers.
//!
//! A file contributes an identifier when it sits under the category's
//! atlas directory and carries the image extension; the identifier is the
//! path with that prefix and extension stripped, case-folded by the
//! catalog on insert.

/// Atlas directory holding decal textures.
pub const DECALS_DIR: &str = "Graphics/Atlases/Gameplay/decals/";

/// Atlas directory holding styleground (parallax background) textures.
pub const STYLEGROUNDS_DIR: &str = "Graphics/Atlases/Gameplay/bgs/";

const IMAGE_EXT: &str = ".png";

/// Backslashes become forward slashes; archives produced on Windows list
/// paths either way.
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

fn id_under(path: &str, dir: &str) -> Option<String> {
    let normalized = normalize_separators(path);
    let rest = normalized.strip_prefix(dir)?;
    let id = rest.strip_suffix(IMAGE_EXT)?;
    if id.is_empty() { None } else { Some(id.to_string()) }
}

/// Decal identifier for a bundled file path, if the path is one.
pub fn decal_id(path: &str) -> Option<String> {
    id_under(path, DECALS_DIR)
}

/// Styleground identifier for a bundled file path, if the path is one.
pub fn styleground_id(path: &str) -> Option<String> {
    id_under(path, STYLEGROUNDS_DIR)
}
