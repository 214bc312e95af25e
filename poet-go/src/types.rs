//! Type references: named types, builtins and composites.

use std::sync::Arc;

use gopoet_core::{Error, Import, ImportRegistry, ImportSet, Pointer, Result, TypeReference};

/// A named type, optionally qualified by the package that declares it.
///
/// ```
/// use gopoet::TypeName;
/// use gopoet_core::{ImportRegistry, TypeReference};
///
/// let duration = TypeName::qualified("time", "Duration").unwrap();
/// assert_eq!(duration.type_name(&ImportRegistry::new()), "time.Duration");
///
/// let home = ImportRegistry::with_home("time");
/// assert_eq!(duration.type_name(&home), "Duration");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeName {
    package: Option<Import>,
    name: String,
}

impl TypeName {
    /// A type declared in the package at `path`.
    pub fn qualified(path: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_identifier(&name)?;
        Ok(Self {
            package: Some(Import::new(path)?),
            name,
        })
    }

    /// A type declared in the unit being rendered, or a builtin.
    pub fn local(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_identifier(&name)?;
        Ok(Self {
            package: None,
            name,
        })
    }

    /// Ask for the package to be imported under `alias`.
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.package = self.package.map(|import| import.with_alias(alias));
        self
    }

    pub(crate) fn builtin(name: &'static str) -> Self {
        Self {
            package: None,
            name: name.to_string(),
        }
    }

    /// The unqualified name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The package the name lives in. `None` for local and builtin names.
    pub fn package(&self) -> Option<&Import> {
        self.package.as_ref()
    }

    /// A pointer to this type.
    pub fn pointer(self) -> Pointer {
        Pointer::new(self)
    }
}

impl TypeReference for TypeName {
    fn type_name(&self, registry: &ImportRegistry) -> String {
        match &self.package {
            Some(import) => registry.qualify(import.path(), &self.name),
            None => self.name.clone(),
        }
    }

    fn type_imports(&self) -> ImportSet {
        self.package.iter().cloned().collect()
    }
}

pub(crate) fn validate_identifier(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Err(Error::invalid_reference("type name is empty"));
    };
    if !(first.is_alphabetic() || first == '_') {
        return Err(Error::invalid_reference(format!(
            "type name '{name}' must start with a letter or underscore"
        )));
    }
    if !chars.all(|c| c.is_alphanumeric() || c == '_') {
        return Err(Error::invalid_reference(format!(
            "type name '{name}' is not an identifier"
        )));
    }
    Ok(())
}

macro_rules! builtins {
    ($($fn_name:ident => $go:literal),* $(,)?) => {
        $(
            #[doc = concat!("The predeclared `", $go, "` type.")]
            pub fn $fn_name() -> TypeName {
                TypeName::builtin($go)
            }
        )*
    };
}

builtins!(
    bool => "bool",
    int => "int",
    int32 => "int32",
    int64 => "int64",
    uint => "uint",
    uint8 => "uint8",
    uint64 => "uint64",
    float32 => "float32",
    float64 => "float64",
    string => "string",
    byte => "byte",
    rune => "rune",
    error => "error",
    any => "any",
);

/// `[]T`
#[derive(Debug, Clone)]
pub struct Slice {
    element: Arc<dyn TypeReference>,
}

impl TypeReference for Slice {
    fn type_name(&self, registry: &ImportRegistry) -> String {
        format!("[]{}", self.element.type_name(registry))
    }

    fn type_imports(&self) -> ImportSet {
        self.element.type_imports()
    }
}

/// `map[K]V`
#[derive(Debug, Clone)]
pub struct Map {
    key: Arc<dyn TypeReference>,
    value: Arc<dyn TypeReference>,
}

impl TypeReference for Map {
    fn type_name(&self, registry: &ImportRegistry) -> String {
        format!(
            "map[{}]{}",
            self.key.type_name(registry),
            self.value.type_name(registry)
        )
    }

    fn type_imports(&self) -> ImportSet {
        let mut imports = self.key.type_imports();
        imports.merge(self.value.type_imports());
        imports
    }
}

/// `[]element`.
pub fn slice_of(element: impl TypeReference + 'static) -> Slice {
    Slice {
        element: Arc::new(element),
    }
}

/// `map[key]value`.
pub fn map_of(key: impl TypeReference + 'static, value: impl TypeReference + 'static) -> Map {
    Map {
        key: Arc::new(key),
        value: Arc::new(value),
    }
}

/// `*inner`.
pub fn pointer_to(inner: impl TypeReference + 'static) -> Pointer {
    Pointer::new(inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_have_no_imports() {
        let registry = ImportRegistry::new();
        assert_eq!(int().type_name(&registry), "int");
        assert!(string().type_imports().is_empty());
    }

    #[test]
    fn test_builtin_names() {
        let registry = ImportRegistry::new();
        let names: Vec<String> = [bool(), uint64(), float32(), rune(), error(), any()]
            .iter()
            .map(|ty| ty.type_name(&registry))
            .collect();
        assert_eq!(names, ["bool", "uint64", "float32", "rune", "error", "any"]);
    }

    #[test]
    fn test_invalid_names() {
        for name in ["", "1st", "has space", "a.b"] {
            let err = TypeName::local(name).unwrap_err();
            assert!(matches!(*err, Error::InvalidReference { .. }), "{name}");
        }
        assert!(TypeName::qualified("", "Time").is_err());
        assert!(TypeName::local("_private").is_ok());
    }

    #[test]
    fn test_composites() {
        let registry = ImportRegistry::new();
        let time = TypeName::qualified("time", "Time").unwrap();
        let ty = map_of(string(), slice_of(pointer_to(time)));

        assert_eq!(ty.type_name(&registry), "map[string][]*time.Time");
        assert_eq!(ty.type_imports().len(), 1);
    }

    #[test]
    fn test_requested_alias_is_used() {
        let mut registry = ImportRegistry::new();
        let node = TypeName::qualified("gopkg.in/yaml.v3", "Node")
            .unwrap()
            .with_alias("yml");
        registry.register_all(&node.type_imports());
        assert_eq!(node.type_name(&registry), "yml.Node");
    }
}
