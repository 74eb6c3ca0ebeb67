pub mod attribution;
pub mod check;
pub mod extract;
pub mod names;

pub use attribution::{Attribution, AttributionMap, NoAttribution};
pub use check::verify;
