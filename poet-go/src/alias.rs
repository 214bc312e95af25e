//! Named type definitions over an underlying type.

use std::sync::Arc;

use gopoet_core::{CodeBlock, ImportRegistry, ImportSet, Statement, TypeReference, Value};

use crate::Comment;

/// A named type defined from an underlying type: `type Name Underlying`.
#[derive(Debug, Clone)]
pub struct TypeAliasSpec {
    pub name: String,
    pub underlying: Arc<dyn TypeReference>,
    pub comment: Comment,
}

impl TypeAliasSpec {
    /// Define `name` from `underlying`.
    pub fn new(name: impl Into<String>, underlying: impl TypeReference + 'static) -> Self {
        Self {
            name: name.into(),
            underlying: Arc::new(underlying),
            comment: Comment::default(),
        }
    }

    pub fn comment(mut self, comment: impl Into<Comment>) -> Self {
        self.comment = comment.into();
        self
    }
}

impl TypeReference for TypeAliasSpec {
    fn type_name(&self, _registry: &ImportRegistry) -> String {
        self.name.clone()
    }

    fn type_imports(&self) -> ImportSet {
        ImportSet::new()
    }
}

impl CodeBlock for TypeAliasSpec {
    fn statements(&self) -> Vec<Statement> {
        let mut statements = self.comment.statements();
        statements.push(Statement::with_args(
            "type $L $T",
            vec![
                Value::from(self.name.as_str()),
                Value::Type(Arc::clone(&self.underlying)),
            ],
        ));
        statements
    }

    fn imports(&self) -> ImportSet {
        self.underlying.type_imports()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{TypeName, types};

    #[test]
    fn test_alias() {
        let alias = TypeAliasSpec::new("Timeout", TypeName::qualified("time", "Duration").unwrap())
            .comment("Timeout bounds a request.");
        assert_eq!(
            alias.render().unwrap(),
            "// Timeout bounds a request.\ntype Timeout time.Duration\n"
        );
        assert!(alias.imports().contains("time"));
    }

    #[test]
    fn test_alias_is_a_local_reference() {
        let alias = TypeAliasSpec::new("IDs", types::slice_of(types::int64()));
        assert_eq!(alias.type_name(&ImportRegistry::new()), "IDs");
        assert!(alias.type_imports().is_empty());
    }
}
