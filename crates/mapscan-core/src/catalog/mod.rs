pub mod build;
pub mod builtin;
pub mod cache;
pub mod model;
pub mod paths;
pub mod snapshot;

pub use build::build;
pub use builtin::BuiltinDataset;
pub use cache::{DependencyCache, DependencySource, EditorPlugins, NoDependencies};
pub use model::{AssetCatalog, AssetCategory, AssetOrigin};
pub use snapshot::Slot;
