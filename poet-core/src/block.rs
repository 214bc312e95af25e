//! Capability traits shared by every declaration kind, plus composition helpers.

use std::{fmt, sync::Arc};

use crate::{CodeWriter, ImportRegistry, ImportSet, Result, Statement, Value};

/// A nameable, importable entity that can be substituted with `$T`.
pub trait TypeReference: fmt::Debug + Send + Sync {
    /// The name to print, qualified through `registry` where needed.
    fn type_name(&self, registry: &ImportRegistry) -> String;

    /// The imports this reference needs.
    fn type_imports(&self) -> ImportSet;
}

impl<T: TypeReference + ?Sized> TypeReference for &T {
    fn type_name(&self, registry: &ImportRegistry) -> String {
        (**self).type_name(registry)
    }

    fn type_imports(&self) -> ImportSet {
        (**self).type_imports()
    }
}

impl<T: TypeReference + ?Sized> TypeReference for Box<T> {
    fn type_name(&self, registry: &ImportRegistry) -> String {
        self.as_ref().type_name(registry)
    }

    fn type_imports(&self) -> ImportSet {
        self.as_ref().type_imports()
    }
}

impl<T: TypeReference + ?Sized> TypeReference for Arc<T> {
    fn type_name(&self, registry: &ImportRegistry) -> String {
        self.as_ref().type_name(registry)
    }

    fn type_imports(&self) -> ImportSet {
        self.as_ref().type_imports()
    }
}

/// Something that renders to an ordered sequence of statements.
pub trait CodeBlock {
    /// The statements to emit, in order.
    fn statements(&self) -> Vec<Statement>;

    /// The deduplicated imports needed to render [`CodeBlock::statements`].
    fn imports(&self) -> ImportSet;

    /// Render this block on its own with a fresh writer.
    fn render(&self) -> Result<String> {
        let mut writer = CodeWriter::default();
        writer.write_code_block(self)?;
        Ok(writer.into_string())
    }
}

impl<T: CodeBlock + ?Sized> CodeBlock for &T {
    fn statements(&self) -> Vec<Statement> {
        (**self).statements()
    }

    fn imports(&self) -> ImportSet {
        (**self).imports()
    }
}

impl<T: CodeBlock + ?Sized> CodeBlock for Box<T> {
    fn statements(&self) -> Vec<Statement> {
        self.as_ref().statements()
    }

    fn imports(&self) -> ImportSet {
        self.as_ref().imports()
    }
}

/// Collect the imports of every type argument in `statements`.
pub fn imports_of<'a>(statements: impl IntoIterator<Item = &'a Statement>) -> ImportSet {
    let mut imports = ImportSet::new();
    for statement in statements {
        for reference in statement.args.iter().filter_map(Value::as_type) {
            imports.merge(reference.type_imports());
        }
    }
    imports
}

/// A "pointer to" decoration of another reference.
///
/// Only the printed name changes; the imports are the wrapped reference's.
#[derive(Debug, Clone)]
pub struct Pointer {
    inner: Arc<dyn TypeReference>,
}

impl Pointer {
    /// Decorate `inner` as a pointer.
    pub fn new(inner: impl TypeReference + 'static) -> Self {
        Self {
            inner: Arc::new(inner),
        }
    }

    /// Decorate an already shared reference.
    pub fn from_arc(inner: Arc<dyn TypeReference>) -> Self {
        Self { inner }
    }

    /// The decorated reference.
    pub fn inner(&self) -> &Arc<dyn TypeReference> {
        &self.inner
    }
}

impl TypeReference for Pointer {
    fn type_name(&self, registry: &ImportRegistry) -> String {
        format!("*{}", self.inner.type_name(registry))
    }

    fn type_imports(&self) -> ImportSet {
        self.inner.type_imports()
    }
}

/// Append attached blocks to a parent's statements.
///
/// Non-empty neighbours are separated by exactly one blank statement; an
/// empty parent gets no leading blank, and no blank trails the last block.
pub fn attach<B: CodeBlock>(mut statements: Vec<Statement>, attachments: &[B]) -> Vec<Statement> {
    for block in attachments {
        let attached = block.statements();
        if attached.is_empty() {
            continue;
        }
        if !statements.is_empty() {
            statements.push(Statement::blank());
        }
        statements.extend(attached);
    }
    statements
}

/// Merge the imports of attached blocks into a parent's imports.
pub fn attach_imports<B: CodeBlock>(mut imports: ImportSet, attachments: &[B]) -> ImportSet {
    for block in attachments {
        imports.merge(block.imports());
    }
    imports
}

/// A plain list of statements with the imports of their type arguments.
#[derive(Debug, Clone, Default)]
pub struct RawBlock {
    statements: Vec<Statement>,
    imports: ImportSet,
}

impl RawBlock {
    /// Wrap `statements`, collecting the imports of their `$T` arguments.
    pub fn new(statements: Vec<Statement>) -> Self {
        let imports = imports_of(&statements);
        Self {
            statements,
            imports,
        }
    }

    /// Add imports the statements do not mention as `$T` arguments.
    pub fn with_imports(mut self, imports: ImportSet) -> Self {
        self.imports.merge(imports);
        self
    }
}

impl From<Statement> for RawBlock {
    fn from(statement: Statement) -> Self {
        Self::new(vec![statement])
    }
}

impl CodeBlock for RawBlock {
    fn statements(&self) -> Vec<Statement> {
        self.statements.clone()
    }

    fn imports(&self) -> ImportSet {
        self.imports.clone()
    }
}
