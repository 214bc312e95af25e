//! Go source file assembly: package clause, import block and declarations.

use std::path::{Path, PathBuf};

use gopoet_core::{
    CodeBlock, CodeWriter, Import, Indent, RenderConfig, Rendered, Result, Statement, statement,
};
use tracing::debug;

use crate::Comment;

/// A Go source file.
///
/// Declarations are rendered first so the import block lists exactly the
/// packages the body refers to, with any disambiguating aliases.
///
/// # Example
///
/// ```
/// use gopoet::{FileSpec, FuncSpec, TypeName};
/// use gopoet_core::Statement;
///
/// let println = TypeName::qualified("fmt", "Println").unwrap();
/// let main = FuncSpec::new("main")
///     .statement(Statement::new("$T($L)").ty(println).arg("\"hi\""));
/// let file = FileSpec::new("main").declaration(main);
///
/// assert_eq!(
///     file.render().unwrap(),
///     "package main\n\nimport \"fmt\"\n\nfunc main() {\n\tfmt.Println(\"hi\")\n}\n"
/// );
/// ```
pub struct FileSpec {
    package_name: String,
    import_path: Option<String>,
    file_name: String,
    comment: Comment,
    indent: Indent,
    declarations: Vec<Box<dyn CodeBlock + Send + Sync>>,
}

impl FileSpec {
    /// A file in package `package_name`, written as `<package_name>.go`.
    pub fn new(package_name: impl Into<String>) -> Self {
        let package_name = package_name.into();
        Self {
            file_name: package_name.clone(),
            package_name,
            import_path: None,
            comment: Comment::default(),
            indent: Indent::GO,
            declarations: Vec::new(),
        }
    }

    /// Set the import path of this file's package. References to it are never imported.
    pub fn import_path(mut self, path: impl Into<String>) -> Self {
        self.import_path = Some(path.into());
        self
    }

    /// Set the file name, without the `.go` extension.
    pub fn file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = name.into();
        self
    }

    /// Set the comment written above the package clause.
    pub fn comment(mut self, comment: impl Into<Comment>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Set the indentation unit. Defaults to tabs.
    pub fn indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    /// Add a declaration. Declarations are separated by one blank line.
    pub fn declaration(mut self, block: impl CodeBlock + Send + Sync + 'static) -> Self {
        self.declarations.push(Box::new(block));
        self
    }

    /// Render the declarations and collect their imports.
    pub fn render_body(&self) -> Result<Rendered> {
        let mut config = RenderConfig::new().indent(self.indent);
        config.home = self.import_path.clone();

        let mut writer = CodeWriter::new(config);
        let mut first = true;
        for declaration in &self.declarations {
            if declaration.statements().is_empty() {
                continue;
            }
            if !first {
                writer.write_statement(&Statement::blank())?;
            }
            writer.write_code_block(declaration.as_ref())?;
            first = false;
        }
        Ok(writer.finish())
    }

    /// Render the whole file.
    pub fn render(&self) -> Result<String> {
        let Rendered { code, mut imports } = self.render_body()?;
        imports.sort_by(|a, b| a.path().cmp(b.path()));

        let mut header = CodeWriter::new(RenderConfig::new().indent(self.indent));
        header.write_code_block(&self.comment)?;
        header.write_statement(&statement!("package $L", self.package_name.as_str()))?;
        for statement in import_block(&imports) {
            header.write_statement(&statement)?;
        }

        let mut out = header.into_string();
        if !code.is_empty() {
            out.push('\n');
            out.push_str(&code);
        }
        Ok(out)
    }

    /// Render and write the file to `<base>/<file_name>.go`.
    pub fn write(&self, base: &Path) -> eyre::Result<PathBuf> {
        let path = base.join(format!("{}.go", self.file_name));
        let content = self.render()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, content)?;
        debug!(path = %path.display(), "wrote go file");
        Ok(path)
    }
}

fn import_line(import: &Import) -> String {
    match import.alias() {
        Some(alias) => format!("{alias} \"{}\"", import.path()),
        None => format!("\"{}\"", import.path()),
    }
}

fn import_block(imports: &[Import]) -> Vec<Statement> {
    match imports {
        [] => Vec::new(),
        [only] => vec![
            Statement::blank(),
            statement!("import $L", import_line(only)),
        ],
        _ => {
            let mut statements = vec![Statement::blank(), Statement::open("import (")];
            statements.extend(imports.iter().map(|i| statement!("$L", import_line(i))));
            statements.push(Statement::close(")"));
            statements
        }
    }
}

#[cfg(test)]
mod tests {
    use gopoet_core::Error;

    use super::*;
    use crate::{StructSpec, VariableGrouping};

    #[test]
    fn test_package_only() {
        assert_eq!(FileSpec::new("empty").render().unwrap(), "package empty\n");
    }

    #[test]
    fn test_empty_declarations_are_skipped() {
        let file = FileSpec::new("models")
            .declaration(StructSpec::new("A"))
            .declaration(VariableGrouping::new())
            .declaration(StructSpec::new("B"));
        assert_eq!(
            file.render().unwrap(),
            "package models\n\ntype A struct{}\n\ntype B struct{}\n"
        );
    }

    #[test]
    fn test_render_error_propagates() {
        let file = FileSpec::new("bad").declaration(gopoet_core::RawBlock::from(
            Statement::new("$L"),
        ));
        let err = file.render().unwrap_err();
        assert!(matches!(err.root_cause(), Error::ArgumentCount { .. }));
    }

    #[test]
    fn test_import_block_forms() {
        let single = import_block(&[Import::new("fmt").unwrap()]);
        assert_eq!(single.len(), 2);

        let many = import_block(&[
            Import::new("fmt").unwrap(),
            Import::new("math/rand").unwrap().with_alias("rand2"),
        ]);
        assert_eq!(many.len(), 5);
        assert_eq!(import_line(&Import::new("os").unwrap()), "\"os\"");
    }
}
