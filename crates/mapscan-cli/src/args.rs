use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Debug, Parser)]
#[command(
    name = "mapscan",
    version,
    about = "Decode binary scene files and verify mod asset references"
)]
pub struct Args {
    /// Paths to the binary scene file(s) to scan
    #[arg(required = true)]
    pub map_paths: Vec<PathBuf>,

    /// Bundled file listing of the package under test, one path per line
    #[arg(long)]
    pub listing: Option<PathBuf>,

    /// Declared dependency name (repeatable)
    #[arg(long = "dep")]
    pub dependencies: Vec<String>,

    /// JSON dependency-metadata cache written by the update tracker
    #[arg(long)]
    pub deps_cache: Option<PathBuf>,

    /// JSON built-in asset dataset
    #[arg(long)]
    pub builtin: Option<PathBuf>,

    /// JSON attribution index (identifier -> providing dependency)
    #[arg(long)]
    pub attribution: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value = "json")]
    pub format: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Optional git commit hash for tool metadata
    #[arg(long)]
    pub commit: Option<String>,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}
