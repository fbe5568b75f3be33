//! Loading an exported model from disk.
//!
//! The artifact is a JSON object holding the [`GaussianNbParams`] fields plus
//! optional `name` and `trained_on` metadata. Its SHA-256 is recorded so logs
//! and reports say exactly which export produced a verdict.

use super::naive_bayes::{GaussianNb, GaussianNbParams, ParamError};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("read model {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse model {}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid model {}", path.display())]
    Params {
        path: PathBuf,
        #[source]
        source: ParamError,
    },
}

#[derive(Debug, Deserialize)]
struct ArtifactFile {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    trained_on: Option<String>,
    #[serde(flatten)]
    params: GaussianNbParams,
}

/// Provenance of a loaded model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelMetadata {
    pub name: Option<String>,
    pub trained_on: Option<String>,
    /// Lowercase hex SHA-256 of the artifact bytes.
    pub sha256: String,
    pub path: PathBuf,
}

/// A validated model together with where it came from.
#[derive(Debug, Clone)]
pub struct ModelArtifact {
    pub metadata: ModelMetadata,
    pub model: GaussianNb,
}

impl ModelArtifact {
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let bytes = fs::read(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let sha256 = hex::encode(Sha256::digest(&bytes));

        let file: ArtifactFile =
            serde_json::from_slice(&bytes).map_err(|source| ModelError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        let model = GaussianNb::from_params(file.params).map_err(|source| ModelError::Params {
            path: path.to_path_buf(),
            source,
        })?;

        let metadata = ModelMetadata {
            name: file.name,
            trained_on: file.trained_on,
            sha256,
            path: path.to_path_buf(),
        };
        tracing::info!(
            name = metadata.name.as_deref().unwrap_or("-"),
            sha256 = %metadata.sha256,
            "loaded model from {}",
            path.display()
        );
        Ok(Self { metadata, model })
    }
}
