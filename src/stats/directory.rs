//! Directory aggregator: rolls package results up into [`DirectoryStats`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::tally::{RankedCount, Tally};
use super::{percentage, round_to};
use crate::model::{AppAnalysisResult, DirectorySummary};

/// Aggregate statistics for one application directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectoryStats {
    /// Package files attempted, failures included
    pub total_apps: usize,

    pub successful: usize,

    pub failed: usize,

    /// Successful packages holding at least one dangerous permission
    pub apps_with_dangerous_count: usize,

    /// `apps_with_dangerous_count / successful * 100`, two decimals
    pub apps_with_dangerous_percentage: f64,

    /// Occurrences per dangerous permission
    pub dangerous_histogram: BTreeMap<String, usize>,

    /// Same counts, most frequent first; ties in first-seen order
    pub dangerous_ranked: Vec<RankedCount>,

    pub dangerous_unique_count: usize,

    pub dangerous_total_occurrences: usize,
}

/// Aggregates every package result of one directory.
///
/// Results are visited in map order, which fixes the first-seen order used to
/// break ranking ties. Returns the "No successful analyses" sentinel when no
/// package was analysed successfully.
pub fn aggregate(results: &BTreeMap<String, AppAnalysisResult>) -> DirectorySummary {
    let total_apps = results.len();
    let mut successful = 0;
    let mut apps_with_dangerous_count = 0;
    let mut dangerous = Tally::new();

    for analysis in results.values().filter_map(AppAnalysisResult::analysis) {
        successful += 1;
        if !analysis.permissions.dangerous.is_empty() {
            apps_with_dangerous_count += 1;
            dangerous.extend(&analysis.permissions.dangerous);
        }
    }

    if successful == 0 {
        return DirectorySummary::no_successful_analyses();
    }

    let dangerous_ranked = dangerous.ranked();
    let dangerous_histogram = dangerous_ranked
        .iter()
        .map(|r| (r.permission.clone(), r.count))
        .collect();

    DirectorySummary::Stats(DirectoryStats {
        total_apps,
        successful,
        failed: total_apps - successful,
        apps_with_dangerous_count,
        apps_with_dangerous_percentage: round_to(
            percentage(apps_with_dangerous_count, successful),
            2,
        ),
        dangerous_histogram,
        dangerous_ranked,
        dangerous_unique_count: dangerous.unique(),
        dangerous_total_occurrences: dangerous.total(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::analyze_manifest;
    use crate::model::PackageManifest;
    use crate::taxonomy::Resolver;

    fn app(perms: &[&str]) -> AppAnalysisResult {
        let manifest = PackageManifest {
            package_name: "com.example".to_string(),
            version_name: "1.0".to_string(),
            version_code: 1,
            permissions: perms.iter().map(|p| p.to_string()).collect(),
        };
        AppAnalysisResult::Analyzed(analyze_manifest(&Resolver::default(), manifest))
    }

    fn results(entries: Vec<(&str, AppAnalysisResult)>) -> BTreeMap<String, AppAnalysisResult> {
        entries
            .into_iter()
            .map(|(name, result)| (name.to_string(), result))
            .collect()
    }

    #[test]
    fn test_all_failed_returns_sentinel() {
        let summary = aggregate(&results(vec![
            ("a.apk", AppAnalysisResult::failed("corrupt")),
            ("b.apk", AppAnalysisResult::failed("corrupt")),
        ]));
        assert_eq!(summary, DirectorySummary::no_successful_analyses());

        assert_eq!(aggregate(&BTreeMap::new()), DirectorySummary::no_successful_analyses());
    }

    #[test]
    fn test_dangerous_percentage_three_of_four() {
        let summary = aggregate(&results(vec![
            ("a.apk", app(&["android.permission.CAMERA"])),
            ("b.apk", app(&["android.permission.READ_CONTACTS"])),
            ("c.apk", app(&["android.permission.RECORD_AUDIO"])),
            ("d.apk", app(&["android.permission.INTERNET"])),
            ("e.apk", AppAnalysisResult::failed("unreadable")),
        ]));
        let stats = summary.stats().unwrap();

        assert_eq!(stats.total_apps, 5);
        assert_eq!(stats.successful, 4);
        assert_eq!(stats.failed, 1);
        assert_eq!(stats.apps_with_dangerous_count, 3);
        assert_eq!(stats.apps_with_dangerous_percentage, 75.0);
    }

    #[test]
    fn test_two_thirds_rounds_to_two_places() {
        let summary = aggregate(&results(vec![
            ("a.apk", app(&["android.permission.CAMERA"])),
            ("b.apk", app(&["android.permission.CAMERA"])),
            ("c.apk", app(&[])),
        ]));
        assert_eq!(summary.stats().unwrap().apps_with_dangerous_percentage, 66.67);
    }

    #[test]
    fn test_end_to_end_histogram() {
        let summary = aggregate(&results(vec![
            (
                "one.apk",
                app(&["android.permission.CAMERA", "android.permission.INTERNET"]),
            ),
            ("two.apk", app(&["android.permission.CAMERA"])),
        ]));
        let stats = summary.stats().unwrap();

        assert_eq!(
            stats.dangerous_histogram,
            BTreeMap::from([("CAMERA".to_string(), 2)])
        );
        assert_eq!(stats.apps_with_dangerous_count, 2);
        assert_eq!(stats.apps_with_dangerous_percentage, 100.0);
        assert_eq!(stats.dangerous_unique_count, 1);
        assert_eq!(stats.dangerous_total_occurrences, 2);
    }

    #[test]
    fn test_ranking_tie_break_follows_traversal_order() {
        // a.apk is visited first and introduces CAMERA before READ_SMS
        let summary = aggregate(&results(vec![
            (
                "a.apk",
                app(&[
                    "android.permission.CAMERA",
                    "android.permission.RECORD_AUDIO",
                    "android.permission.READ_SMS",
                ]),
            ),
            (
                "b.apk",
                app(&["android.permission.READ_SMS", "android.permission.CAMERA"]),
            ),
            (
                "c.apk",
                app(&["android.permission.READ_SMS", "android.permission.CAMERA"]),
            ),
        ]));
        let stats = summary.stats().unwrap();

        let order: Vec<&str> = stats
            .dangerous_ranked
            .iter()
            .map(|r| r.permission.as_str())
            .collect();
        assert_eq!(order, vec!["CAMERA", "READ_SMS", "RECORD_AUDIO"]);
        assert_eq!(stats.dangerous_total_occurrences, 7);
    }

    #[test]
    fn test_repeated_grants_are_counted() {
        let summary = aggregate(&results(vec![(
            "a.apk",
            app(&["android.permission.CAMERA", "android.permission.CAMERA"]),
        )]));
        let stats = summary.stats().unwrap();
        assert_eq!(stats.dangerous_histogram["CAMERA"], 2);
        assert_eq!(stats.apps_with_dangerous_count, 1);
    }
}
