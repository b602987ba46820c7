//! App classifier: partitions a package's permissions into category buckets.

use crate::model::{AppAnalysis, PackageManifest, PermissionBucketSet};
use crate::taxonomy::Resolver;

/// Sorts every identifier in `permissions` into its bucket.
///
/// Input order is preserved inside each bucket and repeated identifiers are
/// kept as separate occurrences. Each call builds a fresh bucket set.
pub fn classify<S: AsRef<str>>(resolver: &Resolver<'_>, permissions: &[S]) -> PermissionBucketSet {
    let mut buckets = PermissionBucketSet::default();
    for raw in permissions {
        let resolution = resolver.classify_identifier(raw.as_ref());
        buckets
            .bucket_mut(resolution.category)
            .push(resolution.key.to_string());
    }
    buckets
}

/// Classifies an extracted manifest into a complete [`AppAnalysis`].
pub fn analyze_manifest(resolver: &Resolver<'_>, manifest: PackageManifest) -> AppAnalysis {
    let permissions = classify(resolver, &manifest.permissions);
    let permission_summary = permissions.summary();

    AppAnalysis {
        package_name: manifest.package_name,
        version_name: manifest.version_name,
        version_code: manifest.version_code,
        permissions,
        permission_summary,
    }
}
