use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::stats::directory::DirectoryStats;
use crate::taxonomy::Category;

/// Error message carried by the empty-directory sentinel.
pub const NO_SUCCESSFUL_ANALYSES: &str = "No successful analyses";

/// Metadata handed over by the package-introspection collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageManifest {
    pub package_name: String,
    pub version_name: String,
    pub version_code: i64,
    pub permissions: Vec<String>, // raw identifiers, duplicates kept
}

/// Per-package classification result: one sequence per category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionBucketSet {
    pub dangerous: Vec<String>,
    pub normal: Vec<String>,
    pub signature: Vec<String>,
    #[serde(rename = "signatureOrSystem")]
    pub signature_or_system: Vec<String>,
    pub others: Vec<String>,
}

impl PermissionBucketSet {
    pub fn bucket(&self, category: Category) -> &[String] {
        match category {
            Category::Dangerous => &self.dangerous,
            Category::Normal => &self.normal,
            Category::Signature => &self.signature,
            Category::SignatureOrSystem => &self.signature_or_system,
            Category::Other => &self.others,
        }
    }

    pub(crate) fn bucket_mut(&mut self, category: Category) -> &mut Vec<String> {
        match category {
            Category::Dangerous => &mut self.dangerous,
            Category::Normal => &mut self.normal,
            Category::Signature => &mut self.signature,
            Category::SignatureOrSystem => &mut self.signature_or_system,
            Category::Other => &mut self.others,
        }
    }

    /// Iterates `(category, bucket)` pairs in [`Category::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[String])> {
        Category::ALL.into_iter().map(move |c| (c, self.bucket(c)))
    }

    /// Number of identifiers held in each bucket.
    pub fn summary(&self) -> BTreeMap<Category, usize> {
        self.iter().map(|(c, bucket)| (c, bucket.len())).collect()
    }

    pub fn total(&self) -> usize {
        self.iter().map(|(_, bucket)| bucket.len()).sum()
    }
}

/// A successfully analysed package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppAnalysis {
    pub package_name: String,
    pub version_name: String,
    pub version_code: i64,
    pub permissions: PermissionBucketSet,
    pub permission_summary: BTreeMap<Category, usize>,
}

/// Outcome of analysing one package file.
///
/// Serializes either as the full analysis or as `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AppAnalysisResult {
    Analyzed(AppAnalysis),
    Failed { error: String },
}

impl AppAnalysisResult {
    pub fn failed(error: impl Into<String>) -> Self {
        Self::Failed {
            error: error.into(),
        }
    }

    pub fn analysis(&self) -> Option<&AppAnalysis> {
        match self {
            Self::Analyzed(analysis) => Some(analysis),
            Self::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Analyzed(_) => None,
            Self::Failed { error } => Some(error.as_str()),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Analyzed(_))
    }
}

/// Directory-level aggregate, or the sentinel for a directory without a
/// single usable package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DirectorySummary {
    Stats(DirectoryStats),
    Error { error: String },
}

impl DirectorySummary {
    pub fn no_successful_analyses() -> Self {
        Self::Error {
            error: NO_SUCCESSFUL_ANALYSES.to_string(),
        }
    }

    pub fn stats(&self) -> Option<&DirectoryStats> {
        match self {
            Self::Stats(stats) => Some(stats),
            Self::Error { .. } => None,
        }
    }

    pub fn successful(&self) -> usize {
        self.stats().map_or(0, |s| s.successful)
    }
}

/// Every package found in one application directory, keyed by file name.
///
/// `directory_summary` is `None` only when the directory held no package
/// files at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectoryReport {
    pub apps: BTreeMap<String, AppAnalysisResult>,
    pub directory_summary: Option<DirectorySummary>,
}

impl DirectoryReport {
    pub fn successful(&self) -> usize {
        self.directory_summary
            .as_ref()
            .map_or(0, DirectorySummary::successful)
    }

    /// Successful analyses in file-name order.
    pub fn analyses(&self) -> impl Iterator<Item = &AppAnalysis> {
        self.apps.values().filter_map(AppAnalysisResult::analysis)
    }
}

/// One firmware version in a series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum VersionEntry {
    /// The version's application directory was analysed
    Analyzed {
        folder: String,
        #[serde(flatten)]
        report: DirectoryReport,
    },

    /// The version folder had no application directory
    NoData { folder: String, reason: String },
}

impl VersionEntry {
    pub fn folder(&self) -> &str {
        match self {
            Self::Analyzed { folder, .. } | Self::NoData { folder, .. } => folder,
        }
    }

    pub fn report(&self) -> Option<&DirectoryReport> {
        match self {
            Self::Analyzed { report, .. } => Some(report),
            Self::NoData { .. } => None,
        }
    }
}

/// Firmware versions ordered by ascending version number.
pub type VersionSeries = BTreeMap<u64, VersionEntry>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_set_serializes_with_category_keys() {
        let buckets = PermissionBucketSet {
            signature_or_system: vec!["INSTALL_PACKAGES".to_string()],
            ..Default::default()
        };
        let json = serde_json::to_value(&buckets).unwrap();
        assert_eq!(json["signatureOrSystem"][0], "INSTALL_PACKAGES");
        assert!(json["others"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_failed_result_shape() {
        let result = AppAnalysisResult::failed("bad zip");
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"{"error":"bad zip"}"#);

        let back: AppAnalysisResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back.error(), Some("bad zip"));
        assert!(!back.is_success());
    }

    #[test]
    fn test_sentinel_shape() {
        let json = serde_json::to_string(&DirectorySummary::no_successful_analyses()).unwrap();
        assert_eq!(json, r#"{"error":"No successful analyses"}"#);
        assert_eq!(DirectorySummary::no_successful_analyses().successful(), 0);
    }

    #[test]
    fn test_no_data_entry_shape() {
        let entry = VersionEntry::NoData {
            folder: "q1_v3".to_string(),
            reason: "missing apps directory".to_string(),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["status"], "no_data");
        assert_eq!(json["folder"], "q1_v3");
        assert!(entry.report().is_none());
    }
}
