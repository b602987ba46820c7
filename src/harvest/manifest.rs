//! Extractor backed by manifest dumps written next to each package.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::model::PackageManifest;
use crate::traits::{ExtractError, PermissionExtractor};

/// Suffix appended to a package path to locate its dump.
pub const DEFAULT_DUMP_SUFFIX: &str = ".manifest.json";

/// Reads `<package>.manifest.json`, the JSON form of [`PackageManifest`]
/// produced by an external introspection step.
///
/// A missing dump, malformed JSON, or an empty package name is reported as
/// an [`ExtractError`].
#[derive(Debug, Clone)]
pub struct ManifestDumpExtractor {
    suffix: String,
}

impl Default for ManifestDumpExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_DUMP_SUFFIX)
    }
}

impl ManifestDumpExtractor {
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
        }
    }

    /// Location of the dump belonging to `package`.
    pub fn dump_path(&self, package: &Path) -> PathBuf {
        let mut raw = package.as_os_str().to_owned();
        raw.push(&self.suffix);
        PathBuf::from(raw)
    }
}

#[async_trait]
impl PermissionExtractor for ManifestDumpExtractor {
    fn format_id(&self) -> &str {
        "manifest-dump"
    }

    async fn extract(&self, path: &Path) -> Result<PackageManifest, ExtractError> {
        let dump = self.dump_path(path);
        debug!(dump = %dump.display(), "Reading manifest dump");

        let content = tokio::fs::read(&dump).await?;
        let manifest: PackageManifest = serde_json::from_slice(&content)?;

        if manifest.package_name.trim().is_empty() {
            return Err(ExtractError::InvalidContent(format!(
                "{}: empty package name",
                dump.display()
            )));
        }
        Ok(manifest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[tokio::test]
    async fn test_reads_sidecar_dump() {
        let dir = tempfile::tempdir().unwrap();
        let package = dir.path().join("Camera.apk");
        fs::write(&package, b"PK").unwrap();
        fs::write(
            dir.path().join("Camera.apk.manifest.json"),
            r#"{
                "package_name": "com.example.camera",
                "version_name": "2.1",
                "version_code": 21,
                "permissions": ["android.permission.CAMERA", "android.permission.CAMERA"]
            }"#,
        )
        .unwrap();

        let manifest = ManifestDumpExtractor::default()
            .extract(&package)
            .await
            .unwrap();
        assert_eq!(manifest.package_name, "com.example.camera");
        assert_eq!(manifest.version_code, 21);
        assert_eq!(manifest.permissions.len(), 2);
    }

    #[tokio::test]
    async fn test_missing_dump_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = ManifestDumpExtractor::default()
            .extract(&dir.path().join("Ghost.apk"))
            .await;
        assert!(matches!(result, Err(ExtractError::IoError(_))));
    }

    #[tokio::test]
    async fn test_malformed_dump_is_invalid_content() {
        let dir = tempfile::tempdir().unwrap();
        let package = dir.path().join("Broken.apk");
        fs::write(dir.path().join("Broken.apk.manifest.json"), b"{ not json").unwrap();

        let result = ManifestDumpExtractor::default().extract(&package).await;
        assert!(matches!(result, Err(ExtractError::InvalidContent(_))));

        fs::write(
            dir.path().join("Broken.apk.manifest.json"),
            r#"{"package_name": " ", "version_name": "", "version_code": 0, "permissions": []}"#,
        )
        .unwrap();
        let result = ManifestDumpExtractor::default().extract(&package).await;
        assert!(matches!(result, Err(ExtractError::InvalidContent(_))));
    }

    #[test]
    fn test_dump_path() {
        let extractor = ManifestDumpExtractor::new(".json");
        assert_eq!(
            extractor.dump_path(Path::new("/fw/apps/Foo.apk")),
            PathBuf::from("/fw/apps/Foo.apk.json")
        );
    }
}
