use anyhow::{Context, Result};
use clap::Parser;

use mapscan_core::catalog::{BuiltinDataset, DependencyCache, DependencySource, NoDependencies};
use mapscan_core::report::{model::ToolInfo, render};
use mapscan_core::verify::{Attribution, AttributionMap, NoAttribution};
use mapscan_core::{ScanInputs, scan_paths};

mod args;

fn main() -> Result<()> {
    let args = args::Args::parse();

    let tool = ToolInfo {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        commit: args.commit.clone(),
    };

    let bundled_listing = match &args.listing {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read listing: {}", path.display()))?
            .lines()
            .map(str::to_string)
            .filter(|l| !l.is_empty())
            .collect(),
        None => Vec::new(),
    };

    let builtin = match &args.builtin {
        Some(path) => BuiltinDataset::from_json(
            &std::fs::read_to_string(path)
                .with_context(|| format!("failed to read builtin dataset: {}", path.display()))?,
        )?,
        None => BuiltinDataset::default(),
    }
    .to_catalog();

    let source: Box<dyn DependencySource> = match &args.deps_cache {
        Some(path) => Box::new(DependencyCache::from_json(
            &std::fs::read_to_string(path)
                .with_context(|| format!("failed to read deps cache: {}", path.display()))?,
        )?),
        None => Box::new(NoDependencies),
    };

    let attribution: Box<dyn Attribution> = match &args.attribution {
        Some(path) => Box::new(AttributionMap::from_json(
            &std::fs::read_to_string(path)
                .with_context(|| format!("failed to read attribution index: {}", path.display()))?,
        )?),
        None => Box::new(NoAttribution),
    };

    let inputs = ScanInputs {
        bundled_listing: &bundled_listing,
        dependencies: &args.dependencies,
        source: source.as_ref(),
        builtin: &builtin,
        attribution: attribution.as_ref(),
    };

    let report = scan_paths(&args.map_paths, &inputs, tool)?;

    let output = match args.format {
        args::OutputFormat::Json => serde_json::to_string_pretty(&report)?,
        args::OutputFormat::Text => render::render_text(&report),
    };

    match args.out {
        Some(path) => std::fs::write(path, &output)?,
        None => print!("{output}"),
    }

    std::process::exit(report.exit_code);
}
