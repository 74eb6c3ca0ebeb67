use crate::catalog::cache::DependencySource;
use crate::catalog::model::{AssetCatalog, AssetCategory, AssetOrigin};
use crate::catalog::paths;

/// Merge the three known-asset origins into one catalog for a single
/// verification run.
///
/// Starts from a clone of the built-in catalog, adds identifiers derived
/// from the bundled file listing with origin `Bundled`, then asks `source`
/// about each declared dependency. A cache miss skips that dependency
/// silently: partial verification beats refusing to verify. The returned
/// catalog is owned by the caller and must serve the whole run; it shares
/// nothing with the refreshable inputs.
pub fn build(
    bundled_listing: &[String],
    dependencies: &[String],
    source: &dyn DependencySource,
    builtin: &AssetCatalog,
) -> AssetCatalog {
    let mut catalog = builtin.clone();

    ingest_listing(&mut catalog, bundled_listing, &AssetOrigin::Bundled);

    for dependency in dependencies {
        let origin = AssetOrigin::Dependency(dependency.clone());
        if let Some(listing) = source.listing(dependency) {
            ingest_listing(&mut catalog, &listing, &origin);
        }
        if let Some(plugins) = source.editor_plugins(dependency) {
            for id in &plugins.entities {
                catalog.insert(AssetCategory::Entities, id, origin.clone());
            }
            for id in &plugins.triggers {
                catalog.insert(AssetCategory::Triggers, id, origin.clone());
            }
            for id in &plugins.effects {
                catalog.insert(AssetCategory::Effects, id, origin.clone());
            }
        }
    }

    catalog
}

fn ingest_listing(catalog: &mut AssetCatalog, listing: &[String], origin: &AssetOrigin) {
    for path in listing {
        if let Some(id) = paths::decal_id(path) {
            catalog.insert(AssetCategory::Decals, &id, origin.clone());
        } else if let Some(id) = paths::styleground_id(path) {
            catalog.insert(AssetCategory::Stylegrounds, &id, origin.clone());
        }
    }
}
