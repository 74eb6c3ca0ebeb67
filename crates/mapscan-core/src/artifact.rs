use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::{fs, path::Path};

use crate::report::model::{ArtifactHash, ArtifactInfo};

/// One scene file read for scanning: the exact bytes plus a fingerprint
/// that depends only on them. Filesystem metadata is ignored so the same
/// file always yields the same report.
#[derive(Debug, Clone)]
pub struct SceneFile {
    pub path: Option<String>,
    pub bytes: Vec<u8>,
    pub size_bytes: u64,
    pub hash_hex: String,
}

impl SceneFile {
    pub fn from_bytes(path: Option<String>, bytes: Vec<u8>) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        let digest = hasher.finalize();

        Self {
            path,
            size_bytes: bytes.len() as u64,
            bytes,
            hash_hex: hex::encode(digest),
        }
    }

    /// Report-facing identity of this file.
    pub fn info(&self) -> ArtifactInfo {
        ArtifactInfo {
            path: self.path.clone(),
            size_bytes: self.size_bytes,
            hash: ArtifactHash {
                algorithm: "sha256".to_string(),
                value: self.hash_hex.clone(),
            },
        }
    }
}

pub fn read_scene_file(path: &Path) -> Result<SceneFile> {
    let bytes =
        fs::read(path).with_context(|| format!("failed to read scene file: {}", path.display()))?;
    Ok(SceneFile::from_bytes(
        Some(path.display().to_string()),
        bytes,
    ))
}
