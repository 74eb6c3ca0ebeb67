//! In-memory representation of one decoded scene file.
//!
//! Built once per decode call and owned exclusively by the caller; nothing
//! here is mutated after construction.

/// Interning table of strings referenced by index throughout a file.
///
/// Immutable once the decoder has built it. Out-of-range indices are a
/// decode error, never a default value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringTable(Vec<String>);

impl StringTable {
    pub fn new(strings: Vec<String>) -> Self {
        Self(strings)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: u16) -> Option<&str> {
        self.0.get(usize::from(index)).map(String::as_str)
    }

    pub fn strings(&self) -> &[String] {
        &self.0
    }
}

/// One attribute payload, tagged by the wire type byte.
///
/// A closed sum over the eight wire kinds, so a new kind is a
/// compile-time-checked change in every consumer. `Lookup` stores the
/// already-resolved string-table entry; `RleStr` stores the expanded
/// Latin-1 text (the original run pairs are not recoverable).
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Bool(bool),
    Byte(u8),
    Short(i16),
    Int(i32),
    Float(f32),
    Lookup(String),
    Str(String),
    RleStr(String),
}

impl AttrValue {
    /// String view for the three text-carrying kinds.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Lookup(s) | AttrValue::Str(s) | AttrValue::RleStr(s) => Some(s),
            _ => None,
        }
    }
}

/// One node of the attributed tree.
///
/// Attributes keep wire order and are not deduplicated; duplicate names are
/// well-formed input as far as the decoder is concerned. Node names keep
/// whatever escaping the wire carried; reversing it is the verifier's job.
#[derive(Debug, Clone, PartialEq)]
pub struct MapNode {
    /// Resolved from the string table. Empty for the root, whose wire name
    /// is discarded.
    pub name: String,
    pub attrs: Vec<(String, AttrValue)>,
    pub children: Vec<MapNode>,
}

impl MapNode {
    /// First attribute with the given name, in wire order.
    pub fn attr(&self, name: &str) -> Option<&AttrValue> {
        self.attrs.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// First string-valued attribute with the given name.
    pub fn attr_str(&self, name: &str) -> Option<&str> {
        self.attr(name).and_then(AttrValue::as_str)
    }
}

/// Full result of decoding one scene file.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedMap {
    /// Package name read from the file header.
    pub package: String,
    /// Side artifact: the interning table, exposed for diagnostics.
    pub lookup: StringTable,
    pub root: MapNode,
}
