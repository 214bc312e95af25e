//! Interface declarations.

use std::sync::Arc;

use gopoet_core::{CodeBlock, ImportRegistry, ImportSet, Statement, TypeReference, Value, statement};

use crate::{Comment, FuncSpec};

/// An interface declaration: embedded interfaces followed by method signatures.
#[derive(Debug, Clone)]
pub struct InterfaceSpec {
    pub name: String,
    pub comment: Comment,
    pub embedded: Vec<Arc<dyn TypeReference>>,
    pub methods: Vec<FuncSpec>,
}

impl InterfaceSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comment: Comment::default(),
            embedded: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Set the doc comment.
    pub fn comment(mut self, comment: impl Into<Comment>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Add a method. Only its comment and signature are rendered.
    pub fn method(mut self, method: FuncSpec) -> Self {
        self.methods.push(method);
        self
    }

    /// Embed another interface.
    pub fn embed(mut self, interface: impl TypeReference + 'static) -> Self {
        self.embedded.push(Arc::new(interface));
        self
    }
}

impl TypeReference for InterfaceSpec {
    fn type_name(&self, _registry: &ImportRegistry) -> String {
        self.name.clone()
    }

    fn type_imports(&self) -> ImportSet {
        ImportSet::new()
    }
}

impl CodeBlock for InterfaceSpec {
    fn statements(&self) -> Vec<Statement> {
        let mut statements = self.comment.statements();
        if self.embedded.is_empty() && self.methods.is_empty() {
            statements.push(statement!("type $L interface{}", self.name.as_str()));
            return statements;
        }

        statements.push(statement!("type $L interface {", self.name.as_str()).indent_after(1));
        for embedded in &self.embedded {
            statements.push(Statement::with_args(
                "$T",
                vec![Value::Type(Arc::clone(embedded))],
            ));
        }
        for method in &self.methods {
            statements.extend(method.comment.statements());
            statements.push(method.signature());
        }
        statements.push(Statement::close("}"));
        statements
    }

    fn imports(&self) -> ImportSet {
        let mut imports: ImportSet = self
            .embedded
            .iter()
            .flat_map(|embedded| embedded.type_imports())
            .collect();
        for method in &self.methods {
            imports.merge(method.signature_imports());
        }
        imports
    }
}
