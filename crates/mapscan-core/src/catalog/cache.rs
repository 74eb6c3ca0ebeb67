use std::collections::HashMap;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Editor-plugin identifier lists for one dependency.
///
/// Entities, triggers and effects are declared through editor tooling
/// metadata, tracked independently from the dependency's file listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorPlugins {
    #[serde(default)]
    pub entities: Vec<String>,
    #[serde(default)]
    pub triggers: Vec<String>,
    #[serde(default)]
    pub effects: Vec<String>,
}

/// Lookup seam for per-dependency metadata.
///
/// Backed externally by a cache that a separate update-tracking process
/// keeps fresh. A `None` from either lookup is a cache miss, not an error:
/// the builder skips that dependency and verifies with what it has.
pub trait DependencySource {
    /// Cached file listing for `dependency`, one package-relative path per
    /// entry.
    fn listing(&self, dependency: &str) -> Option<Vec<String>>;

    /// Cached editor-plugin identifiers for `dependency`.
    fn editor_plugins(&self, dependency: &str) -> Option<EditorPlugins>;
}

/// Source with nothing cached; every lookup misses.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDependencies;

impl DependencySource for NoDependencies {
    fn listing(&self, _dependency: &str) -> Option<Vec<String>> {
        None
    }

    fn editor_plugins(&self, _dependency: &str) -> Option<EditorPlugins> {
        None
    }
}

/// In-memory dependency cache, serde-loadable from the file the update
/// tracker writes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyCache {
    #[serde(default)]
    listings: HashMap<String, Vec<String>>,
    #[serde(default)]
    plugins: HashMap<String, EditorPlugins>,
}

impl DependencyCache {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("failed to parse dependency cache")
    }

    pub fn insert_listing(&mut self, dependency: &str, listing: Vec<String>) {
        self.listings.insert(dependency.to_string(), listing);
    }

    pub fn insert_plugins(&mut self, dependency: &str, plugins: EditorPlugins) {
        self.plugins.insert(dependency.to_string(), plugins);
    }
}

impl DependencySource for DependencyCache {
    fn listing(&self, dependency: &str) -> Option<Vec<String>> {
        self.listings.get(dependency).cloned()
    }

    fn editor_plugins(&self, dependency: &str) -> Option<EditorPlugins> {
        self.plugins.get(dependency).cloned()
    }
}
