use thiserror::Error;

/// Structured decode failure for one scene file.
///
/// Every variant carries the byte offset at which decoding stopped so a
/// corrupt file can be diagnosed without re-running the decoder under a
/// debugger. A `DecodeError` abandons the whole file; the decoder never
/// returns a partially-built tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("unexpected end of input at offset {offset} (needed {needed} more bytes)")]
    UnexpectedEof { offset: usize, needed: usize },

    #[error("length prefix at offset {offset} does not fit in 32 bits")]
    LengthOverflow { offset: usize },

    #[error("string at offset {offset} is not valid UTF-8")]
    InvalidUtf8 { offset: usize },

    #[error("string table index {index} out of range at offset {offset} (table holds {len} entries)")]
    LookupOutOfRange {
        offset: usize,
        index: usize,
        len: usize,
    },

    #[error("unknown attribute type tag {tag} at offset {offset}")]
    UnknownTypeTag { offset: usize, tag: u8 },

    #[error("run-length payload at offset {offset} has odd length {len}")]
    OddRunLength { offset: usize, len: usize },

    #[error("node nesting exceeds {limit} levels at offset {offset}")]
    NestingTooDeep { offset: usize, limit: usize },
}
