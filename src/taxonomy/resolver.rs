//! Namespace-aware resolution of raw permission identifiers.

use super::{Category, Taxonomy};

/// A recognised permission namespace.
///
/// An identifier belongs to the namespace when it starts with `prefix`
/// immediately followed by `separator`; the remainder is its local name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamespaceRule {
    pub prefix: &'static str,
    pub separator: char,
}

impl NamespaceRule {
    pub const fn new(prefix: &'static str) -> Self {
        Self {
            prefix,
            separator: '.',
        }
    }

    /// Strips `prefix` plus separator, returning the local name.
    pub fn strip<'a>(&self, raw: &'a str) -> Option<&'a str> {
        raw.strip_prefix(self.prefix)?.strip_prefix(self.separator)
    }
}

/// Namespaces checked in order: the platform namespace, then the vendor one.
pub const NAMESPACE_RULES: &[NamespaceRule] = &[
    NamespaceRule::new("android.permission"),
    NamespaceRule::new("com.oculus.permission"),
];

/// Outcome of resolving one identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution<'a> {
    pub category: Category,

    /// Identifier recorded in the bucket: the local name for taxonomy hits,
    /// the untouched raw identifier otherwise.
    pub key: &'a str,
}

/// Maps raw permission identifiers onto taxonomy categories.
///
/// Holds a reference to the taxonomy instead of consulting global state, so a
/// single table can back any number of resolvers.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'t> {
    taxonomy: &'t Taxonomy,
    rules: &'t [NamespaceRule],
}

impl Default for Resolver<'static> {
    fn default() -> Self {
        Self::new(Taxonomy::builtin())
    }
}

impl<'t> Resolver<'t> {
    /// Creates a resolver over `taxonomy` using [`NAMESPACE_RULES`].
    pub fn new(taxonomy: &'t Taxonomy) -> Self {
        Self {
            taxonomy,
            rules: NAMESPACE_RULES,
        }
    }

    /// Replaces the namespace rules.
    pub fn with_rules(mut self, rules: &'t [NamespaceRule]) -> Self {
        self.rules = rules;
        self
    }

    pub fn taxonomy(&self) -> &'t Taxonomy {
        self.taxonomy
    }

    /// Returns the category of `raw`, or [`Category::Other`] when the
    /// identifier has no recognised namespace or an unknown local name.
    pub fn resolve(&self, raw: &str) -> Category {
        self.classify_identifier(raw).category
    }

    /// Resolves `raw` to its category and bucket key.
    pub fn classify_identifier<'a>(&self, raw: &'a str) -> Resolution<'a> {
        let hit = self
            .rules
            .iter()
            .find_map(|rule| rule.strip(raw))
            .and_then(|local| self.taxonomy.get(local).map(|entry| (local, entry)));

        match hit {
            Some((local, entry)) => Resolution {
                category: entry.category.into(),
                key: local,
            },
            None => Resolution {
                category: Category::Other,
                key: raw,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_entry_resolves_under_both_namespaces() {
        let resolver = Resolver::default();
        for (local, entry) in resolver.taxonomy().iter() {
            for rule in NAMESPACE_RULES {
                let raw = format!("{}.{}", rule.prefix, local);
                assert_eq!(
                    resolver.resolve(&raw),
                    Category::from(entry.category),
                    "{raw}"
                );
            }
        }
    }

    #[test]
    fn test_unknown_identifiers_fall_through_to_other() {
        let resolver = Resolver::default();
        assert_eq!(
            resolver.resolve("android.permission.NOT_A_REAL_PERM"),
            Category::Other
        );
        assert_eq!(resolver.resolve("some.other.thing"), Category::Other);
        assert_eq!(resolver.resolve("CAMERA"), Category::Other);
        assert_eq!(resolver.resolve("android.permission.camera"), Category::Other);
        assert_eq!(resolver.resolve(""), Category::Other);
    }

    #[test]
    fn test_prefix_requires_separator() {
        let resolver = Resolver::default();
        assert_eq!(resolver.resolve("android.permissionCAMERA"), Category::Other);
        assert_eq!(resolver.resolve("android.permission_CAMERA"), Category::Other);
        assert_eq!(resolver.resolve("android.permission.CAMERA"), Category::Dangerous);
    }

    #[test]
    fn test_bucket_keys() {
        let resolver = Resolver::default();

        let hit = resolver.classify_identifier("com.oculus.permission.CAMERA");
        assert_eq!(hit.category, Category::Dangerous);
        assert_eq!(hit.key, "CAMERA");

        let miss = resolver.classify_identifier("com.oculus.permission.UNLISTED_FEATURE");
        assert_eq!(miss.category, Category::Other);
        assert_eq!(miss.key, "com.oculus.permission.UNLISTED_FEATURE");
    }

    #[test]
    fn test_custom_rules() {
        const VENDOR_ONLY: &[NamespaceRule] = &[NamespaceRule::new("vendor.perm")];
        let resolver = Resolver::default().with_rules(VENDOR_ONLY);

        assert_eq!(resolver.resolve("vendor.perm.INTERNET"), Category::Normal);
        assert_eq!(resolver.resolve("android.permission.INTERNET"), Category::Other);
    }
}
