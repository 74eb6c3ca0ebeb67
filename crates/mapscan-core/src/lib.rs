pub mod artifact;
pub mod binfmt;
pub mod catalog;
pub mod report;
pub mod verify;

use std::path::Path;

use anyhow::Result;

use crate::artifact::SceneFile;
use crate::catalog::{AssetCatalog, DependencySource};
use crate::report::model::{Finding, Report, ToolInfo};
use crate::verify::Attribution;

pub const TOOL_NAME: &str = "mapscan";

/// JSON schema version of mapscan reports.
/// This must be bumped only when the report contract changes semantically.
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Everything a scan needs besides the scene files themselves.
///
/// All of it comes from external collaborators: the unpacked archive's file
/// listing, the dependency names pulled from the package manifest, the
/// dependency metadata cache, the static built-in catalog, and the
/// ecosystem attribution index.
pub struct ScanInputs<'a> {
    pub bundled_listing: &'a [String],
    pub dependencies: &'a [String],
    pub source: &'a dyn DependencySource,
    pub builtin: &'a AssetCatalog,
    pub attribution: &'a dyn Attribution,
}

/// Scan already-read scene files and assemble the final report.
///
/// The catalog is built exactly once, up front, and serves every file in
/// the run; background refreshes of the underlying data cannot shift the
/// result mid-run. Each file decodes independently: a decode failure turns
/// into one decode-error finding and the remaining files still verify.
pub fn scan(files: &[SceneFile], inputs: &ScanInputs<'_>, tool: ToolInfo) -> Report {
    let catalog = catalog::build(
        inputs.bundled_listing,
        inputs.dependencies,
        inputs.source,
        inputs.builtin,
    );

    let mut artifacts = Vec::with_capacity(files.len());
    let mut packages = Vec::with_capacity(files.len());
    let mut findings: Vec<Finding> = Vec::new();

    for file in files {
        artifacts.push(file.info());
        let label = file.path.clone().unwrap_or_else(|| "<bytes>".to_string());
        match binfmt::decode(&file.bytes) {
            Ok(map) => {
                packages.push(Some(map.package.clone()));
                let report = verify::verify(&map, &catalog, inputs.attribution);
                findings.extend(report.findings);
            }
            Err(err) => {
                packages.push(None);
                findings.push(Finding::decode_error(label, err.to_string()));
            }
        }
    }

    Report::new(tool, artifacts, packages, findings)
}

/// Read scene files from disk and scan them.
pub fn scan_paths<P: AsRef<Path>>(
    paths: &[P],
    inputs: &ScanInputs<'_>,
    tool: ToolInfo,
) -> Result<Report> {
    let files = paths
        .iter()
        .map(|p| artifact::read_scene_file(p.as_ref()))
        .collect::<Result<Vec<_>>>()?;
    Ok(scan(&files, inputs, tool))
}
