//! Permission risk taxonomy.
//!
//! This module owns the static classification data for the harvester:
//! - Protection levels and bucket categories via [`ProtectionLevel`] and [`Category`]
//! - The immutable lookup table via [`Taxonomy`]
//! - Namespace-aware identifier resolution via [`Resolver`]

pub mod resolver;
mod table;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

pub use resolver::{NamespaceRule, Resolution, Resolver, NAMESPACE_RULES};

// ============================================================================
// Categories
// ============================================================================

/// Protection level recorded for a permission in the taxonomy table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProtectionLevel {
    /// Guards private user data or device features; granted at runtime
    Dangerous,

    /// Low-risk, granted automatically at install time
    Normal,

    /// Granted only to packages signed with the declaring certificate
    Signature,

    /// Granted to signature holders or to packages in the system image
    SignatureOrSystem,
}

/// Bucket a permission identifier is sorted into.
///
/// The four taxonomy levels plus [`Category::Other`] for anything the
/// taxonomy does not recognise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "dangerous")]
    Dangerous,
    #[serde(rename = "normal")]
    Normal,
    #[serde(rename = "signature")]
    Signature,
    #[serde(rename = "signatureOrSystem")]
    SignatureOrSystem,
    #[serde(rename = "others")]
    Other,
}

impl Category {
    /// All categories, in bucket order.
    pub const ALL: [Category; 5] = [
        Category::Dangerous,
        Category::Normal,
        Category::Signature,
        Category::SignatureOrSystem,
        Category::Other,
    ];

    /// Key used for this bucket in serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Dangerous => "dangerous",
            Category::Normal => "normal",
            Category::Signature => "signature",
            Category::SignatureOrSystem => "signatureOrSystem",
            Category::Other => "others",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ProtectionLevel> for Category {
    fn from(level: ProtectionLevel) -> Self {
        match level {
            ProtectionLevel::Dangerous => Category::Dangerous,
            ProtectionLevel::Normal => Category::Normal,
            ProtectionLevel::Signature => Category::Signature,
            ProtectionLevel::SignatureOrSystem => Category::SignatureOrSystem,
        }
    }
}

// ============================================================================
// Taxonomy Table
// ============================================================================

/// One row of the taxonomy, keyed by the permission's local name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaxonomyEntry {
    /// Protection level of the permission
    pub category: ProtectionLevel,

    /// Short human-readable label
    ///
    /// Example: `"take pictures and videos"`
    pub label: &'static str,

    /// Long-form description of what the permission allows
    pub description: &'static str,
}

/// Immutable lookup table from local permission name to [`TaxonomyEntry`].
///
/// Lookups are exact and case-sensitive. The built-in instance is created on
/// first use and shared read-only for the rest of the process.
#[derive(Debug)]
pub struct Taxonomy {
    entries: HashMap<&'static str, TaxonomyEntry>,
    groups: HashMap<&'static str, &'static str>,
}

static BUILTIN: LazyLock<Taxonomy> = LazyLock::new(|| {
    Taxonomy::from_rows(table::PERMISSIONS, table::PERMISSION_GROUPS)
});

impl Taxonomy {
    /// Returns the process-wide built-in taxonomy.
    pub fn builtin() -> &'static Taxonomy {
        &BUILTIN
    }

    /// Builds a taxonomy from raw rows.
    ///
    /// Later rows with an already-present local name are ignored so the first
    /// definition of a key always wins.
    pub fn from_rows(
        permissions: &[(&'static str, ProtectionLevel, &'static str, &'static str)],
        groups: &[(&'static str, &'static str)],
    ) -> Self {
        let mut entries = HashMap::with_capacity(permissions.len());
        for &(name, category, label, description) in permissions {
            entries.entry(name).or_insert(TaxonomyEntry {
                category,
                label,
                description,
            });
        }

        Self {
            entries,
            groups: groups.iter().copied().collect(),
        }
    }

    /// Looks up a local name (the part after the namespace prefix).
    pub fn get(&self, local_name: &str) -> Option<&TaxonomyEntry> {
        self.entries.get(local_name)
    }

    /// Returns the description of a permission group such as `"LOCATION"`.
    pub fn group_description(&self, group: &str) -> Option<&'static str> {
        self.groups.get(group).copied()
    }

    /// Iterates over every `(local name, entry)` pair in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &TaxonomyEntry)> {
        self.entries.iter().map(|(name, entry)| (*name, entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_size_and_levels() {
        let taxonomy = Taxonomy::builtin();
        assert_eq!(taxonomy.len(), 284);

        let count = |level: ProtectionLevel| {
            taxonomy
                .iter()
                .filter(|(_, entry)| entry.category == level)
                .count()
        };
        assert_eq!(count(ProtectionLevel::Dangerous), 62);
        assert_eq!(count(ProtectionLevel::Normal), 66);
        assert_eq!(count(ProtectionLevel::Signature), 128);
        assert_eq!(count(ProtectionLevel::SignatureOrSystem), 28);
    }

    #[test]
    fn test_lookup_is_exact_and_case_sensitive() {
        let taxonomy = Taxonomy::builtin();

        let camera = taxonomy.get("CAMERA").expect("CAMERA should be present");
        assert_eq!(camera.category, ProtectionLevel::Dangerous);
        assert!(!camera.label.is_empty());

        assert!(taxonomy.get("camera").is_none());
        assert!(taxonomy.get("CAMERA ").is_none());
        assert!(taxonomy.get("android.permission.CAMERA").is_none());
    }

    #[test]
    fn test_first_definition_wins() {
        let taxonomy = Taxonomy::from_rows(
            &[
                ("FOO", ProtectionLevel::Normal, "foo", "first"),
                ("FOO", ProtectionLevel::Dangerous, "foo", "second"),
            ],
            &[],
        );
        assert_eq!(taxonomy.len(), 1);
        assert_eq!(taxonomy.get("FOO").unwrap().description, "first");
    }

    #[test]
    fn test_group_descriptions() {
        let taxonomy = Taxonomy::builtin();
        assert!(taxonomy.group_description("LOCATION").is_some());
        assert!(taxonomy.group_description("STORAGE").is_some());
        assert!(taxonomy.group_description("CAMERA").is_none());
    }

    #[test]
    fn test_category_serialization_keys() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
        }
        assert_eq!(Category::from(ProtectionLevel::SignatureOrSystem), Category::SignatureOrSystem);
    }
}
