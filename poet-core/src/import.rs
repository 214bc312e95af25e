//! External references and deduplicated reference sets.

use indexmap::IndexMap;

use crate::{Error, Result};

/// An external package the rendered text depends on.
///
/// Identity is the import path: two imports with the same path are the same
/// entity, whatever alias they ask for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Import {
    path: String,
    alias: Option<String>,
}

impl Import {
    /// Create an import for `path`, rejecting empty paths and empty segments.
    pub fn new(path: impl Into<String>) -> Result<Self> {
        let path = path.into();
        validate_path(&path)?;
        Ok(Self { path, alias: None })
    }

    /// Request a specific alias. The registry still disambiguates on collision.
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// The canonical import path. Two imports with the same path are the same import.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The requested alias, if any.
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// The display token used when no alias is requested.
    pub fn default_token(&self) -> String {
        default_token(&self.path)
    }

    /// The token this import would like to be printed with.
    pub fn preferred_token(&self) -> String {
        match &self.alias {
            Some(alias) => alias.clone(),
            None => self.default_token(),
        }
    }
}

fn validate_path(path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(Error::invalid_reference("import path is empty"));
    }
    if path.chars().any(char::is_whitespace) {
        return Err(Error::invalid_reference(format!(
            "import path '{path}' contains whitespace"
        )));
    }
    if path.split('/').any(str::is_empty) {
        return Err(Error::invalid_reference(format!(
            "import path '{path}' has an empty segment"
        )));
    }
    Ok(())
}

/// Derive the package token for an import path.
///
/// Uses the final path segment, skipping a trailing major-version segment
/// (`/v2`), dropping a `.vN` suffix (`check.v1`) and mapping characters that
/// cannot appear in an identifier to `_`.
pub fn default_token(path: &str) -> String {
    let mut segments = path.rsplit('/');
    let last = segments.next().unwrap_or(path);
    let segment = if is_major_version(last) {
        segments.next().unwrap_or(last)
    } else {
        last
    };

    let segment = match segment.rfind(".v") {
        Some(pos) if pos > 0 && is_major_version(&segment[pos + 1..]) => &segment[..pos],
        _ => segment,
    };

    let mut token: String = segment
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    if token.starts_with(|c: char| c.is_ascii_digit()) {
        token.insert(0, '_');
    }
    token
}

fn is_major_version(segment: &str) -> bool {
    segment
        .strip_prefix('v')
        .is_some_and(|digits| !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()))
}

/// An insertion-ordered set of imports keyed by path.
///
/// Inserting a path that is already present is a no-op, so merging the sets of
/// nested blocks never duplicates an entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportSet {
    imports: IndexMap<String, Import>,
}

impl ImportSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an import. Returns `false` if the path was already present.
    pub fn insert(&mut self, import: Import) -> bool {
        if self.imports.contains_key(import.path()) {
            return false;
        }
        self.imports.insert(import.path.clone(), import);
        true
    }

    /// Merge another set into this one, keeping first-seen entries.
    pub fn merge(&mut self, other: ImportSet) {
        self.extend(other.imports.into_values());
    }

    /// Check whether an import with `path` is in the set.
    pub fn contains(&self, path: &str) -> bool {
        self.imports.contains_key(path)
    }

    /// Get the import stored for `path`.
    pub fn get(&self, path: &str) -> Option<&Import> {
        self.imports.get(path)
    }

    /// Iterate over imports in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Import> {
        self.imports.values()
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    pub fn len(&self) -> usize {
        self.imports.len()
    }
}

impl Extend<Import> for ImportSet {
    fn extend<I: IntoIterator<Item = Import>>(&mut self, iter: I) {
        for import in iter {
            self.insert(import);
        }
    }
}

impl FromIterator<Import> for ImportSet {
    fn from_iter<I: IntoIterator<Item = Import>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl IntoIterator for ImportSet {
    type Item = Import;
    type IntoIter = indexmap::map::IntoValues<String, Import>;

    fn into_iter(self) -> Self::IntoIter {
        self.imports.into_values()
    }
}

impl<'a> IntoIterator for &'a ImportSet {
    type Item = &'a Import;
    type IntoIter = indexmap::map::Values<'a, String, Import>;

    fn into_iter(self) -> Self::IntoIter {
        self.imports.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn import(path: &str) -> Import {
        Import::new(path).unwrap()
    }

    #[test]
    fn test_default_token() {
        assert_eq!(default_token("time"), "time");
        assert_eq!(default_token("net/http"), "http");
        assert_eq!(default_token("gopkg.in/check.v1"), "check");
        assert_eq!(default_token("github.com/acme/widgets/v2"), "widgets");
        assert_eq!(default_token("github.com/acme/go-kit"), "go_kit");
        assert_eq!(default_token("example.com/3d"), "_3d");
        assert_eq!(default_token("example.com/v"), "v");
    }

    #[test]
    fn test_preferred_token_uses_alias() {
        let i = import("gopkg.in/yaml.v3").with_alias("yml");
        assert_eq!(i.default_token(), "yaml");
        assert_eq!(i.preferred_token(), "yml");
    }

    #[test]
    fn test_invalid_paths() {
        for path in ["", "net//http", "/abs", "has space"] {
            let err = Import::new(path).unwrap_err();
            assert!(matches!(*err, Error::InvalidReference { .. }), "{path}");
        }
    }

    #[test]
    fn test_set_deduplicates_by_path() {
        let mut set = ImportSet::new();
        assert!(set.insert(import("fmt")));
        assert!(!set.insert(import("fmt").with_alias("f")));
        assert!(set.insert(import("os")));

        assert_eq!(set.len(), 2);
        assert_eq!(set.get("fmt").and_then(Import::alias), None);
    }

    #[test]
    fn test_merge_keeps_order() {
        let mut a: ImportSet = [import("fmt"), import("os")].into_iter().collect();
        let b: ImportSet = [import("os"), import("time")].into_iter().collect();
        a.merge(b);

        let paths: Vec<&str> = a.iter().map(Import::path).collect();
        assert_eq!(paths, vec!["fmt", "os", "time"]);
    }
}
