//! Version series aggregator: statistics across firmware releases.
//!
//! Every statistic here is computed from the successful package analyses of
//! each version. Versions recorded as no-data never contribute, and versions
//! without a single successful analysis are left out of the per-app,
//! cross-version and ranking sections.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use super::tally::Tally;
use super::{mean, median, percentage, round_to};
use crate::model::{AppAnalysis, DirectorySummary, VersionSeries};
use crate::taxonomy::Category;

/// Device-family tags recognised by default.
pub const DEFAULT_DEVICE_FAMILIES: &[&str] = &["q1"];

// ============================================================================
// Version Extraction
// ============================================================================

/// Parses firmware version numbers out of `<family>_v<digits>[_<date>]`
/// folder names.
#[derive(Debug, Clone)]
pub struct VersionPattern {
    regex: Regex,
}

impl Default for VersionPattern {
    fn default() -> Self {
        Self::new(DEFAULT_DEVICE_FAMILIES).expect("default version pattern is valid")
    }
}

impl VersionPattern {
    /// Builds a pattern accepting any of `families` as the folder prefix.
    ///
    /// # Errors
    ///
    /// Returns `Err` only if the assembled expression exceeds regex limits.
    pub fn new<S: AsRef<str>>(families: &[S]) -> Result<Self, regex::Error> {
        let alternatives: Vec<String> = families
            .iter()
            .map(|f| regex::escape(f.as_ref()))
            .collect();
        let regex = Regex::new(&format!(r"^(?:{})_v(\d+)", alternatives.join("|")))?;
        Ok(Self { regex })
    }

    /// Returns the version number of `folder`, or `None` when the name does
    /// not follow the convention.
    pub fn parse(&self, folder: &str) -> Option<u64> {
        let captures = self.regex.captures(folder)?;
        captures[1].parse().ok()
    }
}

// ============================================================================
// Report Types
// ============================================================================

/// How many ranked permissions to keep per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingLimits {
    pub classified: usize,
    pub other: usize,
}

impl Default for RankingLimits {
    fn default() -> Self {
        Self {
            classified: 5,
            other: 20,
        }
    }
}

impl RankingLimits {
    pub fn for_category(&self, category: Category) -> usize {
        match category {
            Category::Other => self.other,
            _ => self.classified,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeanMedian {
    pub mean: f64,
    pub median: f64,
}

/// Per-app bucket sizes for one version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerAppStats {
    pub apps_analyzed: usize,
    pub categories: BTreeMap<Category, MeanMedian>,
}

/// A frequently granted permission and its adoption across the version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdoptionRank {
    pub permission: String,
    pub count: usize,

    /// `count / apps analysed * 100`, one decimal
    pub percentage: f64,
}

/// Category totals for one version; the raw series behind trend charts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub version: u64,
    pub apps_analyzed: usize,
    pub counts: BTreeMap<Category, usize>,
}

/// Statistics over a whole [`VersionSeries`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VersionReport {
    /// Directory aggregate of every analysed version
    pub directory_stats: BTreeMap<u64, Option<DirectorySummary>>,

    /// Versions whose folder had no application directory
    pub no_data: Vec<u64>,

    pub per_app: BTreeMap<u64, PerAppStats>,

    /// Mean category total per version; `None` when no version had a
    /// successful analysis
    pub cross_version_means: Option<BTreeMap<Category, f64>>,

    pub rankings: BTreeMap<u64, BTreeMap<Category, Vec<AdoptionRank>>>,

    pub trend: Vec<TrendPoint>,
}

// ============================================================================
// Aggregation
// ============================================================================

/// Aggregates `series` with the default [`RankingLimits`].
pub fn aggregate_series(series: &VersionSeries) -> VersionReport {
    aggregate_series_with(series, RankingLimits::default())
}

/// Aggregates `series`, keeping `limits` ranked permissions per category.
pub fn aggregate_series_with(series: &VersionSeries, limits: RankingLimits) -> VersionReport {
    let mut report = VersionReport::default();
    let mut totals: BTreeMap<Category, usize> = Category::ALL.iter().map(|&c| (c, 0)).collect();
    let mut versions_with_data = 0usize;

    for (&version, entry) in series {
        let Some(directory) = entry.report() else {
            report.no_data.push(version);
            continue;
        };
        report
            .directory_stats
            .insert(version, directory.directory_summary.clone());

        let apps: Vec<&AppAnalysis> = directory.analyses().collect();
        let counts = category_totals(&apps);
        report.trend.push(TrendPoint {
            version,
            apps_analyzed: apps.len(),
            counts: counts.clone(),
        });

        if apps.is_empty() {
            debug!(version, "No successful analyses, skipping version statistics");
            continue;
        }

        versions_with_data += 1;
        for (category, count) in counts {
            *totals.entry(category).or_default() += count;
        }
        report.per_app.insert(version, per_app_stats(&apps));
        report.rankings.insert(version, rankings(&apps, limits));
    }

    if versions_with_data > 0 {
        report.cross_version_means = Some(
            totals
                .into_iter()
                .map(|(c, total)| (c, total as f64 / versions_with_data as f64))
                .collect(),
        );
    }

    report
}

/// Total occurrences per category across `apps`.
fn category_totals(apps: &[&AppAnalysis]) -> BTreeMap<Category, usize> {
    Category::ALL
        .iter()
        .map(|&c| {
            let total: usize = apps.iter().map(|a| a.permissions.bucket(c).len()).sum();
            (c, total)
        })
        .collect()
}

fn per_app_stats(apps: &[&AppAnalysis]) -> PerAppStats {
    let categories = Category::ALL
        .iter()
        .map(|&c| {
            let sizes: Vec<usize> = apps.iter().map(|a| a.permissions.bucket(c).len()).collect();
            let stats = MeanMedian {
                mean: mean(&sizes),
                median: median(&sizes),
            };
            (c, stats)
        })
        .collect();

    PerAppStats {
        apps_analyzed: apps.len(),
        categories,
    }
}

fn rankings(apps: &[&AppAnalysis], limits: RankingLimits) -> BTreeMap<Category, Vec<AdoptionRank>> {
    Category::ALL
        .iter()
        .map(|&c| {
            let mut tally = Tally::new();
            for app in apps {
                tally.extend(app.permissions.bucket(c));
            }

            let ranked = tally
                .top(limits.for_category(c))
                .into_iter()
                .map(|r| AdoptionRank {
                    percentage: round_to(percentage(r.count, apps.len()), 1),
                    permission: r.permission,
                    count: r.count,
                })
                .collect();
            (c, ranked)
        })
        .collect()
}
