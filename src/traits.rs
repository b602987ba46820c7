use crate::model::PackageManifest;
use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Failed to parse package metadata: {0}")]
    InvalidContent(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Extraction timed out after {0}s")]
    Timeout(u64),
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<serde_json::Error> for ExtractError {
    fn from(err: serde_json::Error) -> Self {
        ExtractError::InvalidContent(err.to_string())
    }
}

/// Package-introspection collaborator: reads a package file and reports its
/// identity and requested permissions.
#[async_trait]
pub trait PermissionExtractor: Send + Sync {
    /// Returns the package format this extractor handles (e.g., "apk").
    fn format_id(&self) -> &str;

    /// Extracts the manifest of the package at `path`.
    async fn extract(&self, path: &Path) -> Result<PackageManifest, ExtractError>;
}
