use std::collections::HashMap;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::catalog::AssetCategory;

/// Ecosystem-wide index answering "which dependency is known to supply
/// this identifier elsewhere?".
///
/// Consulted only for identifiers already found missing; a `None` answer
/// means no known provider and leaves the finding unattributed.
pub trait Attribution {
    fn suggest(&self, category: AssetCategory, identifier: &str) -> Option<String>;
}

/// Attribution source with no ecosystem data.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAttribution;

impl Attribution for NoAttribution {
    fn suggest(&self, _category: AssetCategory, _identifier: &str) -> Option<String> {
        None
    }
}

/// Serde-loadable per-category map from identifier to the dependency name
/// that supplies it. Keys are matched case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributionMap {
    #[serde(default)]
    decals: HashMap<String, String>,
    #[serde(default)]
    stylegrounds: HashMap<String, String>,
    #[serde(default)]
    entities: HashMap<String, String>,
    #[serde(default)]
    triggers: HashMap<String, String>,
    #[serde(default)]
    effects: HashMap<String, String>,
}

impl AttributionMap {
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: Self = serde_json::from_str(json).context("failed to parse attribution index")?;
        Ok(raw.folded())
    }

    pub fn insert(&mut self, category: AssetCategory, identifier: &str, dependency: &str) {
        self.map_mut(category)
            .insert(identifier.to_lowercase(), dependency.to_string());
    }

    fn map(&self, category: AssetCategory) -> &HashMap<String, String> {
        match category {
            AssetCategory::Decals => &self.decals,
            AssetCategory::Stylegrounds => &self.stylegrounds,
            AssetCategory::Entities => &self.entities,
            AssetCategory::Triggers => &self.triggers,
            AssetCategory::Effects => &self.effects,
        }
    }

    fn map_mut(&mut self, category: AssetCategory) -> &mut HashMap<String, String> {
        match category {
            AssetCategory::Decals => &mut self.decals,
            AssetCategory::Stylegrounds => &mut self.stylegrounds,
            AssetCategory::Entities => &mut self.entities,
            AssetCategory::Triggers => &mut self.triggers,
            AssetCategory::Effects => &mut self.effects,
        }
    }

    /// Re-key every map with case-folded identifiers. Input files are not
    /// required to be pre-folded.
    fn folded(mut self) -> Self {
        for category in AssetCategory::ALL {
            let folded = self
                .map(category)
                .iter()
                .map(|(k, v)| (k.to_lowercase(), v.clone()))
                .collect();
            *self.map_mut(category) = folded;
        }
        self
    }
}

impl Attribution for AttributionMap {
    fn suggest(&self, category: AssetCategory, identifier: &str) -> Option<String> {
        self.map(category).get(&identifier.to_lowercase()).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggest_is_case_insensitive() {
        let mut map = AttributionMap::default();
        map.insert(AssetCategory::Entities, "HelperPack/CustomSpring", "HelperPack");

        assert_eq!(
            map.suggest(AssetCategory::Entities, "helperpack/customspring"),
            Some("HelperPack".to_string())
        );
        assert_eq!(map.suggest(AssetCategory::Triggers, "helperpack/customspring"), None);
    }

    #[test]
    fn json_keys_are_folded_on_load() {
        let map = AttributionMap::from_json(
            r#"{"decals": {"Helper/Arrow": "HelperPack"}}"#,
        )
        .unwrap();

        assert_eq!(
            map.suggest(AssetCategory::Decals, "HELPER/ARROW"),
            Some("HelperPack".to_string())
        );
    }

    #[test]
    fn no_attribution_always_declines() {
        assert_eq!(NoAttribution.suggest(AssetCategory::Decals, "anything"), None);
    }
}
