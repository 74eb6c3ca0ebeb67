pub mod decode;
pub mod error;
pub mod read;
pub mod tree;

pub use decode::decode;
pub use error::DecodeError;
pub use tree::{AttrValue, DecodedMap, MapNode, StringTable};
