//! Per-unit import registry with collision-free aliasing.

use std::collections::HashSet;

use indexmap::IndexMap;
use tracing::debug;

use crate::import::{Import, default_token};

/// Tracks the imports a rendered unit needs and the token each one is printed with.
///
/// Registration is append-only and first-registered-wins: a path keeps the
/// token it was given the first time it was seen, and a later path whose
/// token collides gets the first free numeric suffix instead.
///
/// # Example
///
/// ```
/// use gopoet_core::{Import, ImportRegistry};
///
/// let mut registry = ImportRegistry::with_home("github.com/acme/app");
/// let a = Import::new("github.com/acme/log").unwrap();
/// let b = Import::new("github.com/other/log").unwrap();
///
/// assert_eq!(registry.register(&a), Some("log"));
/// assert_eq!(registry.register(&b), Some("log2"));
/// assert_eq!(registry.register(&a), Some("log"));
///
/// let home = Import::new("github.com/acme/app").unwrap();
/// assert_eq!(registry.register(&home), None);
/// assert_eq!(registry.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportRegistry {
    home: Option<String>,
    /// Import path -> resolved token, in registration order
    resolved: IndexMap<String, String>,
    /// Default token per path, so the import table knows when to print an alias
    defaults: IndexMap<String, String>,
    taken: HashSet<String>,
}

impl ImportRegistry {
    /// Create a registry with no home unit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry for rendering the unit at `home`.
    pub fn with_home(home: impl Into<String>) -> Self {
        Self {
            home: Some(home.into()),
            ..Self::default()
        }
    }

    /// The import path of the unit being rendered, if set.
    pub fn home(&self) -> Option<&str> {
        self.home.as_deref()
    }

    /// Check whether `path` is the unit being rendered.
    pub fn is_home(&self, path: &str) -> bool {
        self.home.as_deref() == Some(path)
    }

    /// Register an import and return the token to qualify names with.
    ///
    /// Returns `None` for the home unit, which is never imported.
    pub fn register(&mut self, import: &Import) -> Option<&str> {
        let path = import.path();
        if self.is_home(path) {
            debug!(path, "skipping import of home unit");
            return None;
        }

        if !self.resolved.contains_key(path) {
            let preferred = import.preferred_token();
            let token = self.free_token(&preferred);
            if token != preferred {
                debug!(path, %token, %preferred, "disambiguated import alias");
            }
            self.taken.insert(token.clone());
            self.defaults
                .insert(path.to_string(), default_token(path));
            self.resolved.insert(path.to_string(), token);
        }

        self.resolved.get(path).map(String::as_str)
    }

    /// Register every import in `imports`.
    pub fn register_all<'a>(&mut self, imports: impl IntoIterator<Item = &'a Import>) {
        for import in imports {
            self.register(import);
        }
    }

    /// Look up the token for `path` without registering it.
    ///
    /// An unregistered path gets the token it would be assigned now, so it
    /// never borrows a token already resolved to a different package. The
    /// home unit has none.
    pub fn qualifier(&self, path: &str) -> Option<String> {
        if self.is_home(path) {
            return None;
        }
        if let Some(token) = self.resolved.get(path) {
            return Some(token.clone());
        }
        let token = self.free_token(&default_token(path));
        debug!(path, %token, "qualifying unregistered import");
        Some(token)
    }

    /// Qualify `name` with the token for `path`, or leave it bare for the home unit.
    pub fn qualify(&self, path: &str, name: &str) -> String {
        match self.qualifier(path) {
            Some(token) => format!("{token}.{name}"),
            None => name.to_string(),
        }
    }

    /// Resolved path -> token table, in registration order.
    pub fn resolved(&self) -> impl Iterator<Item = (&str, &str)> {
        self.resolved
            .iter()
            .map(|(path, token)| (path.as_str(), token.as_str()))
    }

    /// The resolved imports, with an alias only where the token differs from
    /// the default one.
    pub fn imports(&self) -> Vec<Import> {
        self.resolved
            .iter()
            .filter_map(|(path, token)| {
                let import = Import::new(path.as_str()).ok()?;
                let default = self.defaults.get(path).map(String::as_str);
                Some(if default == Some(token.as_str()) {
                    import
                } else {
                    import.with_alias(token.as_str())
                })
            })
            .collect()
    }

    /// Check whether no import has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.resolved.is_empty()
    }

    /// Number of distinct registered import paths.
    pub fn len(&self) -> usize {
        self.resolved.len()
    }

    fn free_token(&self, preferred: &str) -> String {
        if !self.taken.contains(preferred) {
            return preferred.to_string();
        }
        (2..)
            .map(|n| format!("{preferred}{n}"))
            .find(|candidate| !self.taken.contains(candidate))
            .unwrap_or_else(|| preferred.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn import(path: &str) -> Import {
        Import::new(path).unwrap()
    }

    #[test]
    fn test_register_is_idempotent() {
        let mut registry = ImportRegistry::new();
        assert_eq!(registry.register(&import("fmt")), Some("fmt"));
        assert_eq!(registry.register(&import("fmt")), Some("fmt"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_collision_first_registered_wins() {
        let mut registry = ImportRegistry::new();
        assert_eq!(registry.register(&import("crypto/rand")), Some("rand"));
        assert_eq!(registry.register(&import("math/rand")), Some("rand2"));
        assert_eq!(registry.register(&import("example.com/rand")), Some("rand3"));
        // The earlier registrant is never re-aliased.
        assert_eq!(registry.qualifier("crypto/rand").as_deref(), Some("rand"));

        let imports = registry.imports();
        assert_eq!(imports[0].alias(), None);
        assert_eq!(imports[1].alias(), Some("rand2"));
        assert_eq!(imports[2].alias(), Some("rand3"));
    }

    #[test]
    fn test_unregistered_qualifier_avoids_taken_tokens() {
        let mut registry = ImportRegistry::new();
        registry.register(&import("crypto/rand"));
        assert_eq!(registry.qualifier("math/rand").as_deref(), Some("rand2"));
        assert_eq!(registry.qualify("math/rand", "Intn"), "rand2.Intn");
        assert_eq!(registry.qualifier("fmt").as_deref(), Some("fmt"));
        // Looking up does not register.
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_suffix_skips_taken_tokens() {
        let mut registry = ImportRegistry::new();
        registry.register(&import("example.com/log2"));
        registry.register(&import("example.com/log"));
        assert_eq!(registry.register(&import("other.com/log")), Some("log3"));
    }

    #[test]
    fn test_requested_alias() {
        let mut registry = ImportRegistry::new();
        let yaml = import("gopkg.in/yaml.v3").with_alias("yml");
        assert_eq!(registry.register(&yaml), Some("yml"));
        assert_eq!(registry.imports()[0].alias(), Some("yml"));

        // Re-registering with a different alias keeps the first resolution.
        let again = import("gopkg.in/yaml.v3").with_alias("y");
        assert_eq!(registry.register(&again), Some("yml"));
    }

    #[test]
    fn test_home_is_never_imported() {
        let mut registry = ImportRegistry::with_home("github.com/acme/app");
        assert_eq!(registry.register(&import("github.com/acme/app")), None);
        assert!(registry.is_empty());
        assert_eq!(registry.qualify("github.com/acme/app", "Config"), "Config");
        assert_eq!(registry.qualify("time", "Duration"), "time.Duration");
    }

    #[test]
    fn test_resolved_table_order() {
        let mut registry = ImportRegistry::new();
        registry.register_all(&[import("os"), import("fmt"), import("os")]);
        let table: Vec<_> = registry.resolved().collect();
        assert_eq!(table, vec![("os", "os"), ("fmt", "fmt")]);
    }
}
