//! Package-level variables and constants.

use std::sync::Arc;

use gopoet_core::{CodeBlock, ImportSet, RawBlock, Statement, TypeReference, Value, statement};

use crate::Comment;

/// A variable or constant declaration with its initial value.
#[derive(Debug, Clone)]
pub struct Variable {
    pub name: String,
    pub ty: Arc<dyn TypeReference>,
    pub comment: Comment,
    pub constant: bool,
    /// Grouped declarations omit the `var`/`const` keyword.
    pub in_group: bool,
    pub value: RawBlock,
}

impl Variable {
    /// A `var` declaration without a value.
    pub fn new(name: impl Into<String>, ty: impl TypeReference + 'static) -> Self {
        Self {
            name: name.into(),
            ty: Arc::new(ty),
            comment: Comment::default(),
            constant: false,
            in_group: false,
            value: RawBlock::default(),
        }
    }

    /// A `const` declaration.
    pub fn constant(name: impl Into<String>, ty: impl TypeReference + 'static) -> Self {
        Self {
            constant: true,
            ..Self::new(name, ty)
        }
    }

    /// Set the comment written above the declaration.
    pub fn comment(mut self, comment: impl Into<Comment>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Set a single-line value.
    pub fn value(self, value: Statement) -> Self {
        self.value_block(RawBlock::from(value))
    }

    /// Set a value that may span several lines.
    ///
    /// The first statement is joined to `name type = `.
    pub fn value_block(mut self, value: RawBlock) -> Self {
        self.value = value;
        self
    }

    fn prefix(&self) -> &'static str {
        match (self.in_group, self.constant) {
            (true, _) => "",
            (false, true) => "const ",
            (false, false) => "var ",
        }
    }
}

impl CodeBlock for Variable {
    fn statements(&self) -> Vec<Statement> {
        let mut statements = self.comment.statements();
        let declaration = Statement::with_args(
            "$L$L $T",
            vec![
                Value::from(self.prefix()),
                Value::from(self.name.as_str()),
                Value::Type(Arc::clone(&self.ty)),
            ],
        );

        let mut value = self.value.statements().into_iter();
        match value.next() {
            None => statements.push(declaration),
            Some(first) => {
                statements.push(declaration.append(Statement::new(" = ")).append(first));
                statements.extend(value);
            }
        }
        statements
    }

    fn imports(&self) -> ImportSet {
        let mut imports = self.ty.type_imports();
        imports.merge(self.value.imports());
        imports
    }
}

/// Variables and constants rendered as `const ( … )` and `var ( … )` groups.
///
/// # Example
///
/// ```
/// use gopoet::{VariableGrouping, types};
/// use gopoet_core::{CodeBlock, statement};
///
/// let globals = VariableGrouping::new()
///     .constant("Retries", types::int(), statement!("$L", 3))
///     .variable("name", types::string(), statement!("$L", "\"svc\""));
///
/// assert_eq!(
///     globals.render().unwrap(),
///     "const (\n\tRetries int = 3\n)\n\nvar (\n\tname string = \"svc\"\n)\n"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct VariableGrouping {
    pub variables: Vec<Variable>,
}

impl VariableGrouping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable with a single-line value.
    pub fn variable(
        self,
        name: impl Into<String>,
        ty: impl TypeReference + 'static,
        value: Statement,
    ) -> Self {
        self.push(Variable::new(name, ty).value(value))
    }

    /// Add a constant with a single-line value.
    pub fn constant(
        self,
        name: impl Into<String>,
        ty: impl TypeReference + 'static,
        value: Statement,
    ) -> Self {
        self.push(Variable::constant(name, ty).value(value))
    }

    /// Add a prepared declaration. It is marked as grouped.
    pub fn push(mut self, mut variable: Variable) -> Self {
        variable.in_group = true;
        self.variables.push(variable);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

fn group(keyword: &str, variables: &[&Variable]) -> Vec<Statement> {
    if variables.is_empty() {
        return Vec::new();
    }
    let mut statements = vec![statement!("$L (", keyword).indent_after(1)];
    for variable in variables {
        statements.extend(variable.statements());
    }
    statements.push(Statement::close(")"));
    statements
}

impl CodeBlock for VariableGrouping {
    fn statements(&self) -> Vec<Statement> {
        let (constants, variables): (Vec<&Variable>, Vec<&Variable>) =
            self.variables.iter().partition(|v| v.constant);

        let mut statements = group("const", &constants);
        if !constants.is_empty() && !variables.is_empty() {
            statements.push(Statement::blank());
        }
        statements.extend(group("var", &variables));
        statements
    }

    fn imports(&self) -> ImportSet {
        let mut imports = ImportSet::new();
        for variable in &self.variables {
            imports.merge(variable.imports());
        }
        imports
    }
}

impl From<Vec<Variable>> for VariableGrouping {
    fn from(variables: Vec<Variable>) -> Self {
        variables.into_iter().fold(Self::new(), Self::push)
    }
}
