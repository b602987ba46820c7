//! Permission harvest pipeline.
//!
//! This module provides the [`HarvestPipeline`] coordinator that runs the
//! full analysis chain (Extraction → Classification → Directory aggregation →
//! Version series aggregation) with:
//! - Async extraction via `tokio`, bounded by [`ExtractionExecutor`]
//! - Configurable per-package timeouts
//! - Structured logging via `tracing`
//! - Failure containment: a package failure never aborts its directory and a
//!   broken version folder never aborts the series

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use super::discovery;
use crate::classify::analyze_manifest;
use crate::executor::ExtractionExecutor;
use crate::model::{
    AppAnalysisResult, DirectoryReport, DirectorySummary, PackageManifest, VersionEntry,
    VersionSeries,
};
use crate::stats::series::{aggregate_series_with, RankingLimits, DEFAULT_DEVICE_FAMILIES};
use crate::stats::{aggregate, VersionPattern, VersionReport};
use crate::taxonomy::Resolver;
use crate::traits::{ExtractError, PermissionExtractor};

// ============================================================================
// Pipeline Types
// ============================================================================

/// A version series together with its aggregate report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesAnalysis {
    pub series: VersionSeries,
    pub report: VersionReport,
}

/// Errors that abort a pipeline call.
///
/// Package-level failures are not represented here; they are recorded in
/// the corresponding [`AppAnalysisResult`].
#[derive(thiserror::Error, Debug)]
pub enum PipelineError {
    /// Device-family tags produced an unusable folder pattern
    #[error("Invalid version folder pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// Directory could not be listed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// ============================================================================
// Pipeline Executor
// ============================================================================

/// Harvest pipeline over a pluggable [`PermissionExtractor`].
///
/// # Example
///
/// ```ignore
/// use permission_harvester::harvest::{HarvestPipeline, ManifestDumpExtractor};
/// use std::path::Path;
/// use std::time::Duration;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let pipeline = HarvestPipeline::new(ManifestDumpExtractor::default())
///         .with_timeout(Duration::from_secs(60))
///         .with_device_families(["q1", "q2"]);
///
///     let analysis = pipeline.analyze_versions(Path::new("firmware")).await?;
///     println!("{} versions", analysis.series.len());
///     Ok(())
/// }
/// ```
pub struct HarvestPipeline<E>
where
    E: PermissionExtractor + 'static,
{
    extractor: Arc<E>,

    resolver: Resolver<'static>,

    /// Timeout for a single package extraction (default: 5 minutes)
    package_timeout: Duration,

    /// Extractions allowed in flight (default: 4)
    concurrency: usize,

    executor: ExtractionExecutor,

    /// Package file extension without the dot (default: `apk`)
    package_extension: String,

    /// Application directory inside each version folder (default: `apps`)
    apps_dir: String,

    device_families: Vec<String>,

    ranking_limits: RankingLimits,
}

impl<E> HarvestPipeline<E>
where
    E: PermissionExtractor + 'static,
{
    /// Creates a pipeline over `extractor` with the built-in taxonomy.
    pub fn new(extractor: E) -> Self {
        let package_timeout = Duration::from_secs(300);
        let concurrency = 4;

        Self {
            extractor: Arc::new(extractor),
            resolver: Resolver::default(),
            package_timeout,
            concurrency,
            executor: ExtractionExecutor::new(concurrency, package_timeout),
            package_extension: "apk".to_string(),
            apps_dir: "apps".to_string(),
            device_families: DEFAULT_DEVICE_FAMILIES.iter().map(|f| f.to_string()).collect(),
            ranking_limits: RankingLimits::default(),
        }
    }

    /// Sets the timeout for each package extraction.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.package_timeout = timeout;
        self.executor = ExtractionExecutor::new(self.concurrency, timeout);
        self
    }

    /// Sets how many packages are extracted at once.
    pub fn with_concurrency(mut self, limit: usize) -> Self {
        self.concurrency = limit;
        self.executor = ExtractionExecutor::new(limit, self.package_timeout);
        self
    }

    pub fn with_package_extension(mut self, extension: impl Into<String>) -> Self {
        self.package_extension = extension.into();
        self
    }

    pub fn with_apps_dir(mut self, apps_dir: impl Into<String>) -> Self {
        self.apps_dir = apps_dir.into();
        self
    }

    /// Sets the folder prefixes accepted as firmware versions.
    pub fn with_device_families<I, S>(mut self, families: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.device_families = families.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_ranking_limits(mut self, limits: RankingLimits) -> Self {
        self.ranking_limits = limits;
        self
    }

    pub fn with_resolver(mut self, resolver: Resolver<'static>) -> Self {
        self.resolver = resolver;
        self
    }

    /// Extracts and classifies a single package.
    ///
    /// Never fails: extraction errors and timeouts become
    /// [`AppAnalysisResult::Failed`].
    pub async fn analyze_package(&self, path: &Path) -> AppAnalysisResult {
        let outcome = self
            .executor
            .execute(self.extractor.clone(), path.to_path_buf())
            .await;
        self.classify_outcome(path, outcome)
    }

    /// Analyses every package file in `dir` and aggregates the results.
    ///
    /// A directory with no package files yields an empty report without a
    /// summary.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Io`] if `dir` cannot be listed.
    pub async fn analyze_directory(&self, dir: &Path) -> Result<DirectoryReport, PipelineError> {
        let files = discovery::package_files(dir, &self.package_extension).await?;
        if files.is_empty() {
            warn!(dir = %dir.display(), extension = %self.package_extension, "No package files found");
            return Ok(DirectoryReport::default());
        }

        info!(dir = %dir.display(), count = files.len(), "Found package files to analyze");

        // Spawn everything first so extractions overlap, then collect in file
        // order so the aggregate does not depend on completion order.
        let handles: Vec<_> = files
            .into_iter()
            .map(|path| {
                let executor = self.executor.clone();
                let extractor = self.extractor.clone();
                let task_path = path.clone();
                let handle = tokio::spawn(async move { executor.execute(extractor, task_path).await });
                (path, handle)
            })
            .collect();

        let mut apps = BTreeMap::new();
        for (path, handle) in handles {
            let outcome = match handle.await {
                Ok(outcome) => outcome,
                Err(e) => {
                    let error = format!("Extraction task failed: {}", e);
                    warn!(package = %path.display(), %error, "Package analysis failed");
                    apps.insert(file_name(&path), AppAnalysisResult::failed(error));
                    continue;
                }
            };
            apps.insert(file_name(&path), self.classify_outcome(&path, outcome));
        }

        let summary = aggregate(&apps);
        match &summary {
            DirectorySummary::Stats(stats) => info!(
                total = stats.total_apps,
                successful = stats.successful,
                failed = stats.failed,
                with_dangerous = stats.apps_with_dangerous_count,
                "Directory analysis completed"
            ),
            DirectorySummary::Error { error } => warn!(dir = %dir.display(), %error, "Directory analysis completed"),
        }

        Ok(DirectoryReport {
            apps,
            directory_summary: Some(summary),
        })
    }

    /// Analyses every firmware version folder under `base`.
    ///
    /// Folders are processed in ascending version order. A folder without an
    /// application directory, or whose directory cannot be read, is recorded
    /// as [`VersionEntry::NoData`]. When several folders carry the same
    /// version number the first in name order is kept.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError`] if `base` cannot be listed or the device
    /// families do not form a valid pattern.
    pub async fn analyze_versions(&self, base: &Path) -> Result<SeriesAnalysis, PipelineError> {
        let pattern = VersionPattern::new(self.device_families.as_slice())?;
        let folders = discovery::version_folders(base, &pattern).await?;
        info!(count = folders.len(), "Found firmware versions to analyze");

        let mut series = VersionSeries::new();
        for folder in folders {
            if let Some(existing) = series.get(&folder.version) {
                warn!(
                    version = folder.version,
                    folder = %folder.name,
                    kept = %existing.folder(),
                    "Duplicate version number, skipping folder"
                );
                continue;
            }

            let apps_path = folder.path.join(&self.apps_dir);
            let entry = if tokio::fs::metadata(&apps_path)
                .await
                .map(|m| m.is_dir())
                .unwrap_or(false)
            {
                info!(version = folder.version, "Analyzing firmware version");
                match self.analyze_directory(&apps_path).await {
                    Ok(report) => VersionEntry::Analyzed {
                        folder: folder.name,
                        report,
                    },
                    Err(e) => {
                        warn!(version = folder.version, error = %e, "Failed to read apps directory");
                        VersionEntry::NoData {
                            folder: folder.name,
                            reason: e.to_string(),
                        }
                    }
                }
            } else {
                warn!(version = folder.version, apps_dir = %self.apps_dir, "No apps directory found");
                VersionEntry::NoData {
                    folder: folder.name,
                    reason: format!("no '{}' directory", self.apps_dir),
                }
            };
            series.insert(folder.version, entry);
        }

        let report = aggregate_series_with(&series, self.ranking_limits);
        info!(
            versions = series.len(),
            no_data = report.no_data.len(),
            "Version series analysis completed"
        );

        Ok(SeriesAnalysis { series, report })
    }

    fn classify_outcome(
        &self,
        path: &Path,
        outcome: Result<PackageManifest, ExtractError>,
    ) -> AppAnalysisResult {
        match outcome {
            Ok(manifest) => AppAnalysisResult::Analyzed(analyze_manifest(&self.resolver, manifest)),
            Err(e) => {
                warn!(package = %path.display(), error = %e, "Package analysis failed");
                AppAnalysisResult::failed(e.to_string())
            }
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harvest::manifest::ManifestDumpExtractor;
    use crate::taxonomy::Category;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::fs;
    use std::path::PathBuf;

    // Mock extractor keyed by file name; unknown names fail
    struct MockExtractor {
        manifests: HashMap<String, Vec<&'static str>>,
    }

    impl MockExtractor {
        fn new(entries: &[(&str, Vec<&'static str>)]) -> Self {
            Self {
                manifests: entries
                    .iter()
                    .map(|(name, perms)| (name.to_string(), perms.clone()))
                    .collect(),
            }
        }
    }

    #[async_trait]
    impl PermissionExtractor for MockExtractor {
        fn format_id(&self) -> &str {
            "mock"
        }

        async fn extract(&self, path: &Path) -> Result<PackageManifest, ExtractError> {
            let name = file_name(path);
            let perms = self
                .manifests
                .get(&name)
                .ok_or_else(|| ExtractError::InvalidContent(format!("{name}: malformed manifest")))?;

            Ok(PackageManifest {
                package_name: format!("com.example.{}", name.trim_end_matches(".apk")),
                version_name: "1.0".to_string(),
                version_code: 1,
                permissions: perms.iter().map(|p| p.to_string()).collect(),
            })
        }
    }

    fn touch(dir: &Path, names: &[&str]) {
        fs::create_dir_all(dir).unwrap();
        for name in names {
            fs::write(dir.join(name), b"PK").unwrap();
        }
    }

    #[tokio::test]
    async fn test_directory_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), &["one.apk", "two.apk"]);

        let pipeline = HarvestPipeline::new(MockExtractor::new(&[
            (
                "one.apk",
                vec!["android.permission.CAMERA", "android.permission.INTERNET"],
            ),
            ("two.apk", vec!["android.permission.CAMERA"]),
        ]));

        let report = pipeline.analyze_directory(dir.path()).await.unwrap();
        let summary = report.directory_summary.unwrap();
        let stats = summary.stats().unwrap();

        assert_eq!(stats.dangerous_histogram, BTreeMap::from([("CAMERA".to_string(), 2)]));
        assert_eq!(stats.apps_with_dangerous_count, 2);
        assert_eq!(stats.apps_with_dangerous_percentage, 100.0);
        assert_eq!(report.apps.len(), 2);
    }

    #[tokio::test]
    async fn test_package_failure_is_contained() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), &["good.apk", "broken.apk"]);

        let pipeline = HarvestPipeline::new(MockExtractor::new(&[(
            "good.apk",
            vec!["android.permission.READ_SMS"],
        )]));

        let report = pipeline.analyze_directory(dir.path()).await.unwrap();
        let stats = report.directory_summary.as_ref().unwrap().stats().unwrap().clone();

        assert_eq!(stats.total_apps, 2);
        assert_eq!(stats.successful, 1);
        assert_eq!(stats.failed, 1);
        assert!(report.apps["broken.apk"]
            .error()
            .unwrap()
            .contains("malformed manifest"));
    }

    #[tokio::test]
    async fn test_all_failed_directory_yields_sentinel() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), &["a.apk"]);

        let pipeline = HarvestPipeline::new(MockExtractor::new(&[]));
        let report = pipeline.analyze_directory(dir.path()).await.unwrap();

        assert_eq!(
            report.directory_summary,
            Some(DirectorySummary::no_successful_analyses())
        );
    }

    #[tokio::test]
    async fn test_empty_directory_has_no_summary() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), &["readme.txt"]);

        let pipeline = HarvestPipeline::new(MockExtractor::new(&[]));
        let report = pipeline.analyze_directory(dir.path()).await.unwrap();

        assert!(report.apps.is_empty());
        assert!(report.directory_summary.is_none());
    }

    #[tokio::test]
    async fn test_unreadable_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let pipeline = HarvestPipeline::new(MockExtractor::new(&[]));

        let result = pipeline.analyze_directory(&dir.path().join("absent")).await;
        assert!(matches!(result, Err(PipelineError::Io(_))));
    }

    #[tokio::test]
    async fn test_custom_extension() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), &["a.apk", "b.pkg"]);

        let pipeline = HarvestPipeline::new(MockExtractor::new(&[("b.pkg", vec![])]))
            .with_package_extension("pkg");
        let report = pipeline.analyze_directory(dir.path()).await.unwrap();

        assert_eq!(report.apps.keys().collect::<Vec<_>>(), vec!["b.pkg"]);
    }

    #[tokio::test]
    async fn test_version_series() {
        let base = tempfile::tempdir().unwrap();
        touch(&base.path().join("q1_v10_2024-03-01/apps"), &["cam.apk"]);
        touch(&base.path().join("q1_v9/apps"), &["cam.apk", "net.apk"]);
        touch(&base.path().join("q1_v10_2024-04-01/apps"), &["net.apk"]);
        fs::create_dir_all(base.path().join("q1_v11/other")).unwrap();
        touch(&base.path().join("randomfolder/apps"), &["cam.apk"]);

        let pipeline = HarvestPipeline::new(MockExtractor::new(&[
            ("cam.apk", vec!["android.permission.CAMERA"]),
            ("net.apk", vec!["android.permission.INTERNET"]),
        ]))
        .with_concurrency(1);

        let analysis = pipeline.analyze_versions(base.path()).await.unwrap();

        assert_eq!(analysis.series.keys().copied().collect::<Vec<_>>(), vec![9, 10, 11]);
        assert_eq!(analysis.series[&10].folder(), "q1_v10_2024-03-01");
        assert!(analysis.series[&11].report().is_none());

        let report = &analysis.report;
        assert_eq!(report.no_data, vec![11]);
        assert_eq!(report.trend.iter().map(|t| t.version).collect::<Vec<_>>(), vec![9, 10]);

        // dangerous totals: v9 = 1, v10 = 1
        let means = report.cross_version_means.as_ref().unwrap();
        assert_eq!(means[&Category::Dangerous], 1.0);
        assert_eq!(means[&Category::Normal], 0.5);

        let v9 = &report.rankings[&9][&Category::Dangerous];
        assert_eq!(v9[0].permission, "CAMERA");
        assert_eq!(v9[0].percentage, 50.0);
    }

    #[tokio::test]
    async fn test_extra_device_families() {
        let base = tempfile::tempdir().unwrap();
        touch(&base.path().join("q1_v1/apps"), &["cam.apk"]);
        touch(&base.path().join("q3_v2/apps"), &["cam.apk"]);

        let extractor = MockExtractor::new(&[("cam.apk", vec!["android.permission.CAMERA"])]);
        let pipeline = HarvestPipeline::new(extractor).with_device_families(["q1", "q3"]);

        let analysis = pipeline.analyze_versions(base.path()).await.unwrap();
        assert_eq!(analysis.series.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_manifest_dump_pipeline() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), &["Camera.apk", "Broken.apk"]);
        fs::write(
            dir.path().join("Camera.apk.manifest.json"),
            r#"{"package_name": "com.example.camera", "version_name": "1", "version_code": 1,
                "permissions": ["android.permission.CAMERA", "com.oculus.permission.UNLISTED_FEATURE"]}"#,
        )
        .unwrap();

        let pipeline = HarvestPipeline::new(ManifestDumpExtractor::default());
        let report = pipeline.analyze_directory(dir.path()).await.unwrap();

        let camera = report.apps["Camera.apk"].analysis().unwrap();
        assert_eq!(camera.permissions.dangerous, vec!["CAMERA"]);
        assert_eq!(
            camera.permissions.others,
            vec!["com.oculus.permission.UNLISTED_FEATURE"]
        );
        assert!(!report.apps["Broken.apk"].is_success());
        assert_eq!(report.successful(), 1);
    }

    #[tokio::test]
    async fn test_analyze_package_timeout() {
        struct Stuck;

        #[async_trait]
        impl PermissionExtractor for Stuck {
            fn format_id(&self) -> &str {
                "stuck"
            }

            async fn extract(&self, _path: &Path) -> Result<PackageManifest, ExtractError> {
                tokio::time::sleep(Duration::from_secs(30)).await;
                Err(ExtractError::Unknown("unreachable".to_string()))
            }
        }

        let pipeline = HarvestPipeline::new(Stuck).with_timeout(Duration::from_millis(20));
        let result = pipeline.analyze_package(&PathBuf::from("stuck.apk")).await;
        assert!(result.error().unwrap().contains("timed out"));
    }
}
