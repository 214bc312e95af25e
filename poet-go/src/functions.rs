//! Function declarations.

use std::sync::Arc;

use gopoet_core::{CodeBlock, ImportSet, Statement, TypeReference, Value, imports_of};

use crate::Comment;

/// A function parameter or result.
#[derive(Debug, Clone)]
pub struct Parameter {
    /// Empty for unnamed parameters.
    pub name: String,
    pub ty: Arc<dyn TypeReference>,
    pub variadic: bool,
}

/// A function declaration: signature plus body statements.
///
/// # Example
///
/// ```
/// use gopoet::{FuncSpec, types};
/// use gopoet_core::{CodeBlock, statement};
///
/// let func = FuncSpec::new("Sum")
///     .variadic_param("xs", types::int())
///     .result("", types::int())
///     .statement(statement!("total := $L", 0))
///     .block_start(statement!("for _, x := range $L", "xs"))
///     .statement(statement!("total += $L", "x"))
///     .block_end()
///     .statement(statement!("return $L", "total"));
///
/// assert_eq!(
///     func.render().unwrap(),
///     "func Sum(xs ...int) int {\n\ttotal := 0\n\tfor _, x := range xs {\n\t\ttotal += x\n\t}\n\treturn total\n}\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct FuncSpec {
    pub name: String,
    pub comment: Comment,
    pub params: Vec<Parameter>,
    pub results: Vec<Parameter>,
    pub body: Vec<Statement>,
}

impl FuncSpec {
    /// A function with no parameters, results or body.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comment: Comment::default(),
            params: Vec::new(),
            results: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Set the doc comment.
    pub fn comment(mut self, comment: impl Into<Comment>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Add a parameter. An empty name leaves it unnamed.
    pub fn param(mut self, name: impl Into<String>, ty: impl TypeReference + 'static) -> Self {
        self.params.push(Parameter {
            name: name.into(),
            ty: Arc::new(ty),
            variadic: false,
        });
        self
    }

    /// Add a trailing `...T` parameter.
    pub fn variadic_param(
        mut self,
        name: impl Into<String>,
        ty: impl TypeReference + 'static,
    ) -> Self {
        self.params.push(Parameter {
            name: name.into(),
            ty: Arc::new(ty),
            variadic: true,
        });
        self
    }

    /// Add a result. A single unnamed result is printed without parentheses.
    pub fn result(mut self, name: impl Into<String>, ty: impl TypeReference + 'static) -> Self {
        self.results.push(Parameter {
            name: name.into(),
            ty: Arc::new(ty),
            variadic: false,
        });
        self
    }

    /// Add a statement to the body.
    pub fn statement(mut self, statement: Statement) -> Self {
        self.body.push(statement);
        self
    }

    /// Add multiple statements to the body.
    pub fn extend_body(mut self, statements: impl IntoIterator<Item = Statement>) -> Self {
        self.body.extend(statements);
        self
    }

    /// Open a nested block: appends ` {` and indents what follows.
    pub fn block_start(mut self, statement: Statement) -> Self {
        let Statement {
            mut template,
            args,
            before_indent,
            ..
        } = statement;
        template.push_str(" {");
        self.body.push(Statement {
            template,
            args,
            before_indent,
            after_indent: 1,
        });
        self
    }

    /// Close the innermost block opened with [`FuncSpec::block_start`].
    pub fn block_end(mut self) -> Self {
        self.body.push(Statement::close("}"));
        self
    }

    /// The signature without `func`, receiver or opening brace: `Name(params) results`.
    pub fn signature(&self) -> Statement {
        let mut template = String::from("$L(");
        let mut args = vec![Value::from(self.name.as_str())];
        write_parameters(&mut template, &mut args, &self.params);
        template.push(')');

        match self.results.as_slice() {
            [] => {}
            [only] if only.name.is_empty() => {
                template.push(' ');
                write_parameters(&mut template, &mut args, &self.results);
            }
            _ => {
                template.push_str(" (");
                write_parameters(&mut template, &mut args, &self.results);
                template.push(')');
            }
        }

        Statement::with_args(template, args)
    }

    /// The imports of the parameter and result types.
    pub fn signature_imports(&self) -> ImportSet {
        self.params
            .iter()
            .chain(&self.results)
            .flat_map(|param| param.ty.type_imports())
            .collect()
    }

    /// The declaration, wrapped around `body`, with `header` prefixed to the signature.
    pub(crate) fn declaration(&self, header: Statement) -> Vec<Statement> {
        let mut statements = self.comment.statements();
        statements.push(
            header
                .append(self.signature())
                .append(Statement::open(" {")),
        );
        statements.extend(self.body.iter().cloned());
        statements.push(Statement::close("}"));
        statements
    }
}

fn write_parameters(template: &mut String, args: &mut Vec<Value>, params: &[Parameter]) {
    for (i, param) in params.iter().enumerate() {
        if i > 0 {
            template.push_str(", ");
        }
        if !param.name.is_empty() {
            template.push_str("$L ");
            args.push(Value::from(param.name.as_str()));
        }
        if param.variadic {
            template.push_str("...");
        }
        template.push_str("$T");
        args.push(Value::Type(Arc::clone(&param.ty)));
    }
}

impl CodeBlock for FuncSpec {
    fn statements(&self) -> Vec<Statement> {
        self.declaration(Statement::new("func "))
    }

    fn imports(&self) -> ImportSet {
        let mut imports = imports_of(&self.body);
        imports.merge(self.signature_imports());
        imports
    }
}
