use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

/// The five kinds of references the verifier checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetCategory {
    Decals,
    Stylegrounds,
    Entities,
    Triggers,
    Effects,
}

impl AssetCategory {
    /// Fixed category order; report findings follow it.
    pub const ALL: [AssetCategory; 5] = [
        AssetCategory::Decals,
        AssetCategory::Stylegrounds,
        AssetCategory::Entities,
        AssetCategory::Triggers,
        AssetCategory::Effects,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AssetCategory::Decals => "decals",
            AssetCategory::Stylegrounds => "stylegrounds",
            AssetCategory::Entities => "entities",
            AssetCategory::Triggers => "triggers",
            AssetCategory::Effects => "effects",
        }
    }
}

/// Which source supplies a known asset identifier.
///
/// Attribution only; a reference known under any origin is known.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetOrigin {
    BuiltIn,
    Bundled,
    Dependency(String),
}

/// Per-category sets of known identifiers, each tagged with every origin
/// that provides it.
///
/// Keys are stored case-folded; lookups fold the query, so callers never
/// pre-normalize. A catalog is built once per verification run and read-only
/// afterwards (see [`crate::catalog::snapshot`] for how refreshed source
/// data is handed off without mutating a live catalog).
#[derive(Debug, Clone, Default)]
pub struct AssetCatalog {
    decals: HashMap<String, BTreeSet<AssetOrigin>>,
    stylegrounds: HashMap<String, BTreeSet<AssetOrigin>>,
    entities: HashMap<String, BTreeSet<AssetOrigin>>,
    triggers: HashMap<String, BTreeSet<AssetOrigin>>,
    effects: HashMap<String, BTreeSet<AssetOrigin>>,
}

impl AssetCatalog {
    fn map(&self, category: AssetCategory) -> &HashMap<String, BTreeSet<AssetOrigin>> {
        match category {
            AssetCategory::Decals => &self.decals,
            AssetCategory::Stylegrounds => &self.stylegrounds,
            AssetCategory::Entities => &self.entities,
            AssetCategory::Triggers => &self.triggers,
            AssetCategory::Effects => &self.effects,
        }
    }

    fn map_mut(&mut self, category: AssetCategory) -> &mut HashMap<String, BTreeSet<AssetOrigin>> {
        match category {
            AssetCategory::Decals => &mut self.decals,
            AssetCategory::Stylegrounds => &mut self.stylegrounds,
            AssetCategory::Entities => &mut self.entities,
            AssetCategory::Triggers => &mut self.triggers,
            AssetCategory::Effects => &mut self.effects,
        }
    }

    pub fn insert(&mut self, category: AssetCategory, identifier: &str, origin: AssetOrigin) {
        self.map_mut(category)
            .entry(identifier.to_lowercase())
            .or_default()
            .insert(origin);
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, category: AssetCategory, identifier: &str) -> bool {
        self.map(category).contains_key(&identifier.to_lowercase())
    }

    /// Origins known to provide `identifier`, if any.
    pub fn origins(
        &self,
        category: AssetCategory,
        identifier: &str,
    ) -> Option<&BTreeSet<AssetOrigin>> {
        self.map(category).get(&identifier.to_lowercase())
    }

    pub fn len(&self, category: AssetCategory) -> usize {
        self.map(category).len()
    }

    pub fn is_empty(&self) -> bool {
        AssetCategory::ALL.iter().all(|c| self.map(*c).is_empty())
    }
}
