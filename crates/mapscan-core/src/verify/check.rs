use std::collections::BTreeSet;

use crate::binfmt::tree::DecodedMap;
use crate::catalog::{AssetCatalog, AssetCategory};
use crate::report::model::{Finding, FindingKind, VerificationReport};
use crate::verify::attribution::Attribution;
use crate::verify::extract::{self, Reference};

/// Check every asset reference in a decoded map against the catalog.
///
/// Pure single pass: extract references, test each against the catalog
/// case-insensitively, group the misses into one finding per category in
/// the fixed category order, and ask the attribution index for a candidate
/// provider per missing identifier. Identifiers within a finding are
/// sorted; the same input always yields the same report.
pub fn verify(
    map: &DecodedMap,
    catalog: &AssetCatalog,
    attribution: &dyn Attribution,
) -> VerificationReport {
    let refs = extract::extract_references(&map.root);

    let mut findings = Vec::new();
    for category in AssetCategory::ALL {
        let missing: Vec<&Reference> = refs
            .category(category)
            .iter()
            .filter(|r| !is_known(catalog, category, r))
            .collect();
        if missing.is_empty() {
            continue;
        }

        let mut identifiers: Vec<String> =
            missing.iter().map(|r| r.display.clone()).collect();
        identifiers.sort_by_key(|id| (id.to_lowercase(), id.clone()));

        let attributed: BTreeSet<String> = missing
            .iter()
            .filter_map(|r| attribution.suggest(category, &r.display))
            .collect();

        findings.push(Finding {
            kind: FindingKind::for_category(category),
            identifiers,
            attributed_to: attributed.into_iter().collect(),
            message: None,
        });
    }

    VerificationReport { findings }
}

/// A reference is known if any of its probe keys hits the category.
fn is_known(catalog: &AssetCatalog, category: AssetCategory, reference: &Reference) -> bool {
    reference
        .probes
        .iter()
        .any(|probe| catalog.contains(category, probe))
}
