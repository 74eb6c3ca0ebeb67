use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::catalog::model::{AssetCatalog, AssetCategory, AssetOrigin};

/// Static reference dataset of assets shipped with the base game.
///
/// A plain key-list per category, loaded from JSON at process start and
/// converted once into catalog form. The dataset itself is never mutated;
/// a background refresh replaces the whole value through a
/// [`crate::catalog::Slot`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuiltinDataset {
    #[serde(default)]
    pub decals: Vec<String>,
    #[serde(default)]
    pub stylegrounds: Vec<String>,
    #[serde(default)]
    pub entities: Vec<String>,
    #[serde(default)]
    pub triggers: Vec<String>,
    #[serde(default)]
    pub effects: Vec<String>,
}

impl BuiltinDataset {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("failed to parse built-in asset dataset")
    }

    fn list(&self, category: AssetCategory) -> &[String] {
        match category {
            AssetCategory::Decals => &self.decals,
            AssetCategory::Stylegrounds => &self.stylegrounds,
            AssetCategory::Entities => &self.entities,
            AssetCategory::Triggers => &self.triggers,
            AssetCategory::Effects => &self.effects,
        }
    }

    /// Catalog with every identifier under origin `BuiltIn`.
    pub fn to_catalog(&self) -> AssetCatalog {
        let mut catalog = AssetCatalog::default();
        for category in AssetCategory::ALL {
            for id in self.list(category) {
                catalog.insert(category, id, AssetOrigin::BuiltIn);
            }
        }
        catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_partial_dataset_with_defaults() {
        let dataset =
            BuiltinDataset::from_json(r#"{"entities": ["spring", "spikesUp"]}"#).unwrap();
        assert_eq!(dataset.entities.len(), 2);
        assert!(dataset.decals.is_empty());
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(BuiltinDataset::from_json("{not json").is_err());
    }

    #[test]
    fn converts_to_builtin_tagged_catalog() {
        let dataset = BuiltinDataset {
            decals: vec!["forest/tree_a".into()],
            entities: vec!["Spring".into()],
            ..Default::default()
        };
        let catalog = dataset.to_catalog();

        assert!(catalog.contains(AssetCategory::Decals, "forest/tree_a"));
        let origins = catalog.origins(AssetCategory::Entities, "spring").unwrap();
        assert_eq!(origins.iter().collect::<Vec<_>>(), [&AssetOrigin::BuiltIn]);
    }
}
