//! Indentation-tracking statement writer.

use tracing::trace;

use crate::{
    CodeBlock, Error, Import, ImportRegistry, Indent, RenderConfig, Result, Statement, render,
};

/// Writes statements to a buffer, tracking the current depth and the imports
/// the written text needs.
///
/// One writer renders one unit and is then discarded.
///
/// # Example
///
/// ```
/// use gopoet_core::{CodeWriter, Statement, statement};
///
/// let mut writer = CodeWriter::default();
/// writer
///     .write_statement(&Statement::open("func main() {"))?
///     .write_statement(&statement!("println($L)", 1))?
///     .write_statement(&Statement::close("}"))?;
///
/// assert_eq!(writer.as_str(), "func main() {\n\tprintln(1)\n}\n");
/// # Ok::<(), Box<gopoet_core::Error>>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeWriter {
    depth: usize,
    indent: Indent,
    buffer: String,
    registry: ImportRegistry,
    /// Statements written so far in this pass
    written: usize,
}

/// The output of one render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    /// The rendered text.
    pub code: String,
    /// Deduplicated, alias-resolved imports the text needs.
    pub imports: Vec<Import>,
}

impl CodeWriter {
    /// Create a writer at depth zero for the unit described by `config`.
    pub fn new(config: RenderConfig) -> Self {
        let registry = match config.home {
            Some(home) => ImportRegistry::with_home(home),
            None => ImportRegistry::new(),
        };
        Self {
            depth: 0,
            indent: config.indent,
            buffer: String::new(),
            registry,
            written: 0,
        }
    }

    /// A writer for the unit at import path `home`.
    pub fn for_home(home: impl Into<String>) -> Self {
        Self::new(RenderConfig::new().home(home))
    }

    /// Write one statement, applying its indentation deltas around it.
    pub fn write_statement(&mut self, statement: &Statement) -> Result<&mut Self> {
        let depth = shift(self.depth, statement.before_indent)?;
        let after = shift(depth, statement.after_indent)?;
        let line = render(&statement.template, &statement.args, &mut self.registry)?;

        trace!(index = self.written, depth, template = %statement.template, "write statement");
        self.depth = depth;
        self.write_code(&line);
        self.buffer.push('\n');
        self.depth = after;
        self.written += 1;
        Ok(self)
    }

    /// Write every statement of `block` in order.
    ///
    /// Errors are annotated with the position of the failing statement.
    pub fn write_code_block<B: CodeBlock + ?Sized>(&mut self, block: &B) -> Result<&mut Self> {
        for (index, statement) in block.statements().iter().enumerate() {
            self.write_statement(statement)
                .map_err(|source| Box::new(Error::Statement { index, source }))?;
        }
        Ok(self)
    }

    /// Write raw code at the current depth, without a line terminator.
    ///
    /// Empty code is written without indentation so blank lines stay blank.
    pub fn write_code(&mut self, code: &str) -> &mut Self {
        if !code.is_empty() {
            self.indent.write_to(&mut self.buffer, self.depth);
            self.buffer.push_str(code);
        }
        self
    }

    /// Number of statements written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Get the current depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Get a reference to the current buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Get the imports resolved so far.
    pub fn registry(&self) -> &ImportRegistry {
        &self.registry
    }

    /// Consume the writer and return the rendered text.
    pub fn into_string(self) -> String {
        self.buffer
    }

    /// Consume the writer and return the text with its resolved imports.
    pub fn finish(self) -> Rendered {
        Rendered {
            imports: self.registry.imports(),
            code: self.buffer,
        }
    }
}

fn shift(depth: usize, delta: i32) -> Result<usize> {
    let shifted = depth as i64 + i64::from(delta);
    usize::try_from(shifted).map_err(|_| Box::new(Error::IndentUnderflow { depth, delta }))
}

/// Compute the depth each statement is written at, without rendering.
pub fn indent_levels(statements: &[Statement]) -> Result<Vec<usize>> {
    let mut depth = 0;
    let mut levels = Vec::with_capacity(statements.len());
    for (index, statement) in statements.iter().enumerate() {
        let annotate = |source| Box::new(Error::Statement { index, source });
        let at = shift(depth, statement.before_indent).map_err(annotate)?;
        levels.push(at);
        depth = shift(at, statement.after_indent).map_err(annotate)?;
    }
    Ok(levels)
}

/// Check that `statements` close every block they open and never dedent past zero.
pub fn is_balanced(statements: &[Statement]) -> bool {
    let net: i64 = statements
        .iter()
        .map(|s| i64::from(s.before_indent) + i64::from(s.after_indent))
        .sum();
    net == 0 && indent_levels(statements).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RawBlock, statement};

    fn lines(statements: Vec<Statement>) -> String {
        let mut writer = CodeWriter::default();
        writer.write_code_block(&RawBlock::new(statements)).unwrap();
        writer.into_string()
    }

    #[test]
    fn test_literal_line() {
        assert_eq!(lines(vec![statement!("$L", 42)]), "42\n");
        assert_eq!(lines(vec![statement!("$L", "name")]), "name\n");
    }

    #[test]
    fn test_open_body_close() {
        let out = lines(vec![
            statement!("$L", "open").indent_after(1),
            statement!("$L", "body"),
            statement!("$L", "close").indent_before(-1),
        ]);
        assert_eq!(out, "open\n\tbody\nclose\n");
    }

    #[test]
    fn test_nested_blocks() {
        let out = lines(vec![
            Statement::open("func f() {"),
            Statement::open("for {"),
            Statement::open("if x {"),
            Statement::new("break"),
            Statement::close("}"),
            Statement::close("}"),
            Statement::close("}"),
        ]);
        assert_eq!(out, "func f() {\n\tfor {\n\t\tif x {\n\t\t\tbreak\n\t\t}\n\t}\n}\n");
    }

    #[test]
    fn test_close_and_reopen_on_one_line() {
        let out = lines(vec![
            Statement::open("if a {"),
            Statement::new("x()"),
            Statement::new("} else {").indent_before(-1).indent_after(1),
            Statement::new("y()"),
            Statement::close("}"),
        ]);
        assert_eq!(out, "if a {\n\tx()\n} else {\n\ty()\n}\n");
    }

    #[test]
    fn test_blank_line_has_no_indent() {
        let out = lines(vec![
            Statement::open("{"),
            Statement::blank(),
            Statement::close("}"),
        ]);
        assert_eq!(out, "{\n\n}\n");
    }

    #[test]
    fn test_spaces_indent() {
        let mut writer = CodeWriter::new(RenderConfig::new().indent(Indent::spaces(2)));
        writer
            .write_statement(&Statement::open("a {"))
            .unwrap()
            .write_statement(&Statement::new("b"))
            .unwrap();
        assert_eq!(writer.as_str(), "a {\n  b\n");
        assert_eq!(writer.depth(), 1);
    }

    #[test]
    fn test_configured_width_is_honored() {
        let config = RenderConfig::from_toml_str("indent = { spaces = 3 }").unwrap();
        let mut writer = CodeWriter::new(config);
        writer
            .write_statement(&Statement::open("a {"))
            .unwrap()
            .write_statement(&Statement::open("b {"))
            .unwrap()
            .write_statement(&Statement::new("c"))
            .unwrap();
        assert_eq!(writer.as_str(), "a {\n   b {\n      c\n");
    }

    #[test]
    fn test_underflow_is_rejected() {
        let mut writer = CodeWriter::default();
        let err = writer.write_statement(&Statement::close("}")).unwrap_err();
        assert!(matches!(*err, Error::IndentUnderflow { depth: 0, delta: -1 }));
        assert_eq!(writer.as_str(), "");
    }

    #[test]
    fn test_error_names_statement() {
        let mut writer = CodeWriter::default();
        let block = RawBlock::new(vec![Statement::new("ok"), Statement::new("$Q")]);
        let err = writer.write_code_block(&block).unwrap_err();
        assert!(matches!(*err, Error::Statement { index: 1, .. }));
        assert!(matches!(err.root_cause(), Error::UnknownDirective { .. }));
    }

    #[test]
    fn test_argument_count_error() {
        let mut writer = CodeWriter::default();
        let err = writer
            .write_statement(&statement!("$L $L", 1))
            .unwrap_err();
        assert!(matches!(*err, Error::ArgumentCount { index: 1, .. }));
    }

    #[test]
    fn test_indent_levels() {
        let statements = vec![
            Statement::open("a"),
            Statement::new("b"),
            Statement::close("c"),
        ];
        assert_eq!(indent_levels(&statements).unwrap(), vec![0, 1, 0]);
        assert!(is_balanced(&statements));
    }

    #[test]
    fn test_unbalanced() {
        assert!(!is_balanced(&[Statement::open("a")]));
        assert!(!is_balanced(&[Statement::close("}"), Statement::open("{")]));
        let err = indent_levels(&[Statement::close("}")]).unwrap_err();
        assert!(matches!(*err, Error::Statement { index: 0, .. }));
    }

    #[derive(Debug)]
    struct Qualified(&'static str, &'static str);

    impl crate::TypeReference for Qualified {
        fn type_name(&self, registry: &ImportRegistry) -> String {
            registry.qualify(self.0, self.1)
        }

        fn type_imports(&self) -> crate::ImportSet {
            Import::new(self.0).into_iter().collect()
        }
    }

    #[test]
    fn test_failed_statement_leaves_no_import() {
        let mut writer = CodeWriter::default();
        let err = writer
            .write_statement(&Statement::new("$T $Q").ty(Qualified("time", "Time")))
            .unwrap_err();
        assert!(matches!(*err, Error::UnknownDirective { .. }));
        assert_eq!(writer.written(), 0);

        let rendered = writer.finish();
        assert_eq!(rendered.code, "");
        assert!(rendered.imports.is_empty());
    }

    #[test]
    fn test_written_counts_statements() {
        let mut writer = CodeWriter::default();
        writer
            .write_code_block(&RawBlock::new(vec![
                Statement::open("a {"),
                Statement::blank(),
                Statement::close("}"),
            ]))
            .unwrap();
        assert_eq!(writer.written(), 3);
        assert!(writer.write_statement(&Statement::close("}")).is_err());
        assert_eq!(writer.written(), 3);
    }

    #[test]
    fn test_finish_returns_imports() {
        let writer = CodeWriter::for_home("example.com/app");
        let rendered = writer.finish();
        assert_eq!(rendered.code, "");
        assert!(rendered.imports.is_empty());
    }
}
