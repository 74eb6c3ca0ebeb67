//! Identifier normalization and the wire-name escaping scheme.
//!
//! Node names on the wire cannot contain the path separator; a namespaced
//! identifier like `HelperPack/CustomSpring` travels as
//! `HelperPack_CustomSpring`. The mapping is best-effort: it is ambiguous
//! when the original identifier itself contained an underscore, so callers
//! that look identifiers up should probe both forms (see
//! [`crate::verify::extract`]).

/// Character standing in for `/` inside wire node names.
pub const ESCAPE: char = '_';

/// Replace path separators with the escape character.
pub fn escape_name(identifier: &str) -> String {
    identifier.replace('/', "_")
}

/// Reverse [`escape_name`]. Lossy for identifiers that legitimately
/// contained the escape character.
pub fn unescape_name(name: &str) -> String {
    name.replace(ESCAPE, "/")
}

const IMAGE_EXT: &str = ".png";

/// Canonical form of a texture attribute value: forward slashes, no
/// trailing image extension. Case is preserved for display; catalog
/// lookups fold it, and the extension strip folds too so `.PNG` matches.
pub fn normalize_texture(value: &str) -> String {
    let normalized = value.replace('\\', "/");
    match strip_suffix_ci(&normalized, IMAGE_EXT) {
        Some(stripped) => stripped.to_string(),
        None => normalized,
    }
}

/// [`str::strip_prefix`] with ASCII-case-insensitive comparison; the
/// returned slice keeps the original casing.
pub fn strip_prefix_ci<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix).then(|| &s[prefix.len()..])
}

/// [`str::strip_suffix`] with ASCII-case-insensitive comparison.
pub fn strip_suffix_ci<'a>(s: &'a str, suffix: &str) -> Option<&'a str> {
    let split = s.len().checked_sub(suffix.len())?;
    let tail = s.get(split..)?;
    tail.eq_ignore_ascii_case(suffix).then(|| &s[..split])
}
