use crate::binfmt::error::DecodeError;
use crate::binfmt::read::ByteReader;
use crate::binfmt::tree::{AttrValue, DecodedMap, MapNode, StringTable};

/// Wire type tags for attribute payloads.
mod tag {
    pub const BOOL: u8 = 0;
    pub const BYTE: u8 = 1;
    pub const SHORT: u8 = 2;
    pub const INT: u8 = 3;
    pub const FLOAT: u8 = 4;
    pub const LOOKUP: u8 = 5;
    pub const STRING: u8 = 6;
    pub const RUN_LENGTH: u8 = 7;
}

/// Hard cap on node nesting. Scene files produced by real editors stay in
/// the low tens; the cap exists so a crafted file cannot blow the stack.
const MAX_DEPTH: usize = 256;

/// Decode one scene file.
///
/// Wire grammar, read sequentially:
/// 1. length-prefixed header literal (read and discarded),
/// 2. length-prefixed package name,
/// 3. u16 string-table count, then that many length-prefixed strings,
/// 4. one recursively-encoded node: the root.
///
/// Any malformed input aborts the whole file with a [`DecodeError`]; there
/// is no partial result. Semantically odd but well-formed input (duplicate
/// attribute names, empty node names) decodes without complaint.
pub fn decode(bytes: &[u8]) -> Result<DecodedMap, DecodeError> {
    let mut r = ByteReader::new(bytes);

    let _header = r.var_string()?;
    let package = r.var_string()?.to_string();

    let count = r.u16()? as usize;
    let mut strings = Vec::new();
    for _ in 0..count {
        strings.push(r.var_string()?.to_string());
    }
    let lookup = StringTable::new(strings);

    let root = decode_node(&mut r, &lookup, 0)?;

    Ok(DecodedMap {
        package,
        lookup,
        root,
    })
}

/// Resolve a 2-byte string-table index read at `offset`.
fn resolve(lookup: &StringTable, index: u16, offset: usize) -> Result<String, DecodeError> {
    lookup
        .get(index)
        .map(str::to_string)
        .ok_or(DecodeError::LookupOutOfRange {
            offset,
            index: usize::from(index),
            len: lookup.len(),
        })
}

fn decode_node(
    r: &mut ByteReader<'_>,
    lookup: &StringTable,
    depth: usize,
) -> Result<MapNode, DecodeError> {
    if depth > MAX_DEPTH {
        return Err(DecodeError::NestingTooDeep {
            offset: r.offset(),
            limit: MAX_DEPTH,
        });
    }

    let name_offset = r.offset();
    let name_index = r.u16()?;
    // The root's wire name is discarded, but the index is still
    // bounds-checked like every other table reference.
    let resolved = resolve(lookup, name_index, name_offset)?;
    let name = if depth == 0 { String::new() } else { resolved };

    let attr_count = r.u8()?;
    let mut attrs = Vec::with_capacity(usize::from(attr_count));
    for _ in 0..attr_count {
        let attr_offset = r.offset();
        let attr_name = resolve(lookup, r.u16()?, attr_offset)?;
        let value = decode_value(r, lookup)?;
        attrs.push((attr_name, value));
    }

    let child_count = r.u16()? as usize;
    let mut children = Vec::new();
    for _ in 0..child_count {
        children.push(decode_node(r, lookup, depth + 1)?);
    }

    Ok(MapNode {
        name,
        attrs,
        children,
    })
}

fn decode_value(r: &mut ByteReader<'_>, lookup: &StringTable) -> Result<AttrValue, DecodeError> {
    let tag_offset = r.offset();
    let tag = r.u8()?;
    Ok(match tag {
        tag::BOOL => AttrValue::Bool(r.u8()? != 0),
        tag::BYTE => AttrValue::Byte(r.u8()?),
        tag::SHORT => AttrValue::Short(r.i16()?),
        tag::INT => AttrValue::Int(r.i32()?),
        tag::FLOAT => AttrValue::Float(r.f32()?),
        tag::LOOKUP => {
            let offset = r.offset();
            AttrValue::Lookup(resolve(lookup, r.u16()?, offset)?)
        }
        tag::STRING => AttrValue::Str(r.var_string()?.to_string()),
        tag::RUN_LENGTH => AttrValue::RleStr(r.run_length_string()?),
        other => {
            return Err(DecodeError::UnknownTypeTag {
                offset: tag_offset,
                tag: other,
            });
        }
    })
}
