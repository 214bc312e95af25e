//! Method declarations.

use std::sync::Arc;

use gopoet_core::{CodeBlock, ImportSet, Statement, TypeReference, Value};

use crate::{Comment, FuncSpec};

/// A function with a receiver.
///
/// Wraps a [`FuncSpec`] and forwards its builder methods, so a method is
/// built the same way a function is.
#[derive(Debug, Clone)]
pub struct MethodSpec {
    func: FuncSpec,
    receiver_name: String,
    receiver: Arc<dyn TypeReference>,
}

impl MethodSpec {
    /// A method named `name` on `receiver`, bound as `receiver_name`.
    pub fn new(
        name: impl Into<String>,
        receiver_name: impl Into<String>,
        receiver: impl TypeReference + 'static,
    ) -> Self {
        Self::from_function(FuncSpec::new(name), receiver_name, receiver)
    }

    /// Turn an existing function into a method on `receiver`.
    pub fn from_function(
        func: FuncSpec,
        receiver_name: impl Into<String>,
        receiver: impl TypeReference + 'static,
    ) -> Self {
        Self {
            func,
            receiver_name: receiver_name.into(),
            receiver: Arc::new(receiver),
        }
    }

    /// The wrapped function.
    pub fn func(&self) -> &FuncSpec {
        &self.func
    }

    pub fn name(&self) -> &str {
        &self.func.name
    }

    pub fn receiver_name(&self) -> &str {
        &self.receiver_name
    }

    /// The receiver type, possibly a pointer.
    pub fn receiver(&self) -> &Arc<dyn TypeReference> {
        &self.receiver
    }

    /// See [`FuncSpec::comment`].
    pub fn comment(self, comment: impl Into<Comment>) -> Self {
        self.map_func(|f| f.comment(comment))
    }

    /// See [`FuncSpec::param`].
    pub fn param(self, name: impl Into<String>, ty: impl TypeReference + 'static) -> Self {
        self.map_func(|f| f.param(name, ty))
    }

    pub fn variadic_param(self, name: impl Into<String>, ty: impl TypeReference + 'static) -> Self {
        self.map_func(|f| f.variadic_param(name, ty))
    }

    /// See [`FuncSpec::result`].
    pub fn result(self, name: impl Into<String>, ty: impl TypeReference + 'static) -> Self {
        self.map_func(|f| f.result(name, ty))
    }

    pub fn statement(self, statement: Statement) -> Self {
        self.map_func(|f| f.statement(statement))
    }

    pub fn extend_body(self, statements: impl IntoIterator<Item = Statement>) -> Self {
        self.map_func(|f| f.extend_body(statements))
    }

    /// See [`FuncSpec::block_start`].
    pub fn block_start(self, statement: Statement) -> Self {
        self.map_func(|f| f.block_start(statement))
    }

    pub fn block_end(self) -> Self {
        self.map_func(FuncSpec::block_end)
    }

    fn map_func(mut self, f: impl FnOnce(FuncSpec) -> FuncSpec) -> Self {
        self.func = f(self.func);
        self
    }
}

impl CodeBlock for MethodSpec {
    fn statements(&self) -> Vec<Statement> {
        let header = Statement::with_args(
            "func ($L $T) ",
            vec![
                Value::from(self.receiver_name.as_str()),
                Value::Type(Arc::clone(&self.receiver)),
            ],
        );
        self.func.declaration(header)
    }

    fn imports(&self) -> ImportSet {
        let mut imports = self.receiver.type_imports();
        imports.merge(self.func.imports());
        imports
    }
}
