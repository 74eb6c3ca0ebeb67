use serde::{Deserialize, Serialize};

use crate::SCHEMA_VERSION;
use crate::catalog::AssetCategory;

/// What a single finding reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FindingKind {
    MissingDecal,
    MissingStyleground,
    MissingEntity,
    MissingTrigger,
    MissingEffect,
    DecodeError,
}

impl FindingKind {
    pub fn for_category(category: AssetCategory) -> Self {
        match category {
            AssetCategory::Decals => FindingKind::MissingDecal,
            AssetCategory::Stylegrounds => FindingKind::MissingStyleground,
            AssetCategory::Entities => FindingKind::MissingEntity,
            AssetCategory::Triggers => FindingKind::MissingTrigger,
            AssetCategory::Effects => FindingKind::MissingEffect,
        }
    }

    /// Category this kind reports on; `None` for decode errors.
    pub fn category(self) -> Option<AssetCategory> {
        match self {
            FindingKind::MissingDecal => Some(AssetCategory::Decals),
            FindingKind::MissingStyleground => Some(AssetCategory::Stylegrounds),
            FindingKind::MissingEntity => Some(AssetCategory::Entities),
            FindingKind::MissingTrigger => Some(AssetCategory::Triggers),
            FindingKind::MissingEffect => Some(AssetCategory::Effects),
            FindingKind::DecodeError => None,
        }
    }

    pub fn is_decode_error(self) -> bool {
        self == FindingKind::DecodeError
    }
}

/// One reported problem.
///
/// For missing-asset kinds, `identifiers` holds the deduplicated,
/// case-preserving identifiers sorted for stable output, and
/// `attributed_to` names candidate dependencies that could supply them
/// (empty means no known provider). For decode errors, `identifiers` holds
/// the affected file and `message` the cause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub kind: FindingKind,
    pub identifiers: Vec<String>,
    pub attributed_to: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub message: Option<String>,
}

impl Finding {
    pub fn decode_error(file: impl Into<String>, cause: impl Into<String>) -> Self {
        Self {
            kind: FindingKind::DecodeError,
            identifiers: vec![file.into()],
            attributed_to: vec![],
            message: Some(cause.into()),
        }
    }
}

/// Ordered findings for one verification run, one file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VerificationReport {
    pub findings: Vec<Finding>,
}

impl VerificationReport {
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn has_decode_errors(&self) -> bool {
        self.findings.iter().any(|f| f.kind.is_decode_error())
    }
}

/// Tool metadata embedded in every report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
    pub commit: Option<String>,
}

/// Identity of one analyzed scene file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactInfo {
    pub path: Option<String>,
    pub size_bytes: u64,
    pub hash: ArtifactHash,
}

/// Cryptographic artifact fingerprint; depends only on the file bytes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactHash {
    pub algorithm: String,
    pub value: String,
}

/// Top-level report for one scanned package.
///
/// The stable JSON contract handed to whatever front end renders it.
/// Identical inputs must serialize identically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub schema_version: String,
    pub tool: ToolInfo,
    /// One entry per scene file examined, in input order.
    pub artifacts: Vec<ArtifactInfo>,
    /// Package name per scene file, aligned with `artifacts`; `None` for a
    /// file that failed to decode.
    pub packages: Vec<Option<String>>,
    pub findings: Vec<Finding>,
    pub exit_code: i32,
}

impl Report {
    /// Assemble the final report. A decode failure on one file never
    /// suppresses findings from the others; both kinds of finding simply
    /// coexist in `findings`.
    ///
    /// Exit code policy: 2 if any file failed to decode, 1 if anything is
    /// missing, 0 for a clean scan.
    pub fn new(
        tool: ToolInfo,
        artifacts: Vec<ArtifactInfo>,
        packages: Vec<Option<String>>,
        findings: Vec<Finding>,
    ) -> Self {
        let exit_code = if findings.iter().any(|f| f.kind.is_decode_error()) {
            2
        } else if findings.is_empty() {
            0
        } else {
            1
        };

        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            tool,
            artifacts,
            packages,
            findings,
            exit_code,
        }
    }
}
