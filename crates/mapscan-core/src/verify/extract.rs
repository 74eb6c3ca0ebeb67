use std::collections::HashSet;

use crate::binfmt::tree::MapNode;
use crate::catalog::AssetCategory;
use crate::verify::names;

/// In-map namespace prefix for decal textures. Stripped before lookup so
/// the reference and the catalog compare in the same namespace. Prefix
/// matching ignores ASCII case, like every other identifier comparison.
const DECAL_PREFIX: &str = "decals/";

/// In-map namespace prefix for styleground textures. A `parallax` texture
/// outside this prefix belongs to a different texture pool and is not
/// checked at all.
const STYLEGROUND_PREFIX: &str = "bgs/";

/// One candidate asset reference found in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    /// Original-case identifier used for display.
    pub display: String,
    /// Catalog keys to probe; the reference is known if any of them hit.
    /// More than one entry only for escaped node names, where the literal
    /// wire name is kept as a fallback against escape ambiguity.
    pub probes: Vec<String>,
}

impl Reference {
    fn plain(id: String) -> Self {
        Self {
            probes: vec![id.clone()],
            display: id,
        }
    }

    fn escaped(wire_name: &str) -> Self {
        let unescaped = names::unescape_name(wire_name);
        let mut probes = vec![unescaped.clone()];
        if unescaped != wire_name {
            probes.push(wire_name.to_string());
        }
        Self {
            display: unescaped,
            probes,
        }
    }
}

/// References collected for one category, deduplicated case-insensitively
/// with first-seen casing preserved.
#[derive(Debug, Clone, Default)]
pub struct Refs {
    seen: HashSet<String>,
    items: Vec<Reference>,
}

impl Refs {
    fn add(&mut self, reference: Reference) {
        if self.seen.insert(reference.display.to_lowercase()) {
            self.items.push(reference);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Reference> {
        self.items.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// All candidate references in one decoded tree, per category.
#[derive(Debug, Clone, Default)]
pub struct ReferenceSet {
    pub decals: Refs,
    pub stylegrounds: Refs,
    pub entities: Refs,
    pub triggers: Refs,
    pub effects: Refs,
}

impl ReferenceSet {
    pub fn category(&self, category: AssetCategory) -> &Refs {
        match category {
            AssetCategory::Decals => &self.decals,
            AssetCategory::Stylegrounds => &self.stylegrounds,
            AssetCategory::Entities => &self.entities,
            AssetCategory::Triggers => &self.triggers,
            AssetCategory::Effects => &self.effects,
        }
    }
}

/// Single pass over the tree collecting every candidate reference.
///
/// Extraction rules:
/// - `decal` nodes: the `texture` attribute, normalized, `decals/` prefix
///   stripped when present.
/// - `parallax` nodes: the `texture` attribute, only when it sits under
///   `bgs/`; the prefix is stripped to match catalog identifiers.
/// - children of `entities` / `triggers` nodes: the child's node name,
///   unescaped, into the matching category.
/// - children of `Foregrounds` / `Backgrounds` nodes: the child's node
///   name, unescaped, into the effects category.
pub fn extract_references(root: &MapNode) -> ReferenceSet {
    let mut refs = ReferenceSet::default();
    visit(root, &mut refs);
    refs
}

fn visit(node: &MapNode, refs: &mut ReferenceSet) {
    match node.name.as_str() {
        "decal" => {
            if let Some(texture) = node.attr_str("texture") {
                let normalized = names::normalize_texture(texture);
                let id = names::strip_prefix_ci(&normalized, DECAL_PREFIX)
                    .unwrap_or(&normalized);
                refs.decals.add(Reference::plain(id.to_string()));
            }
        }
        "parallax" => {
            if let Some(texture) = node.attr_str("texture") {
                let normalized = names::normalize_texture(texture);
                if let Some(id) = names::strip_prefix_ci(&normalized, STYLEGROUND_PREFIX) {
                    refs.stylegrounds.add(Reference::plain(id.to_string()));
                }
            }
        }
        "entities" => {
            for child in &node.children {
                refs.entities.add(Reference::escaped(&child.name));
            }
        }
        "triggers" => {
            for child in &node.children {
                refs.triggers.add(Reference::escaped(&child.name));
            }
        }
        "Foregrounds" | "Backgrounds" => {
            for child in &node.children {
                refs.effects.add(Reference::escaped(&child.name));
            }
        }
        _ => {}
    }

    for child in &node.children {
        visit(child, refs);
    }
}
