//! The unit of emission: a template, its arguments and an indentation delta pair.

use crate::{TypeReference, Value};

/// One emitted line.
///
/// `before_indent` is applied before the line is written (so a closing
/// construct dedents itself) and `after_indent` after it (so an opening
/// construct indents the lines that follow). A complete declaration sums to zero.
#[derive(Debug, Clone, Default)]
pub struct Statement {
    pub template: String,
    pub args: Vec<Value>,
    pub before_indent: i32,
    pub after_indent: i32,
}

impl Statement {
    /// A statement at the current depth.
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            ..Self::default()
        }
    }

    /// A statement at the current depth with all of its arguments.
    ///
    /// See also the [`statement!`](crate::statement!) macro.
    pub fn with_args(template: impl Into<String>, args: Vec<Value>) -> Self {
        Self {
            template: template.into(),
            args,
            ..Self::default()
        }
    }

    /// A line that opens a block: the lines after it are indented one level.
    pub fn open(template: impl Into<String>) -> Self {
        Self::new(template).indent_after(1)
    }

    /// A line that closes a block: it is written one level shallower.
    pub fn close(template: impl Into<String>) -> Self {
        Self::new(template).indent_before(-1)
    }

    /// An empty line.
    pub fn blank() -> Self {
        Self::default()
    }

    /// Append a literal or type argument.
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.args.push(value.into());
        self
    }

    /// Append a type reference argument for a `$T` directive.
    pub fn ty(mut self, reference: impl TypeReference + 'static) -> Self {
        self.args.push(Value::ty(reference));
        self
    }

    /// Append several arguments.
    pub fn args(mut self, values: impl IntoIterator<Item = Value>) -> Self {
        self.args.extend(values);
        self
    }

    /// Shift the depth by `delta` before this line is written.
    pub fn indent_before(mut self, delta: i32) -> Self {
        self.before_indent = delta;
        self
    }

    /// Shift the depth by `delta` after this line is written.
    pub fn indent_after(mut self, delta: i32) -> Self {
        self.after_indent = delta;
        self
    }

    /// Join two statements on one line.
    ///
    /// Keeps `self`'s `before_indent` and `other`'s `after_indent`.
    pub fn append(mut self, other: Statement) -> Self {
        self.template.push_str(&other.template);
        self.args.extend(other.args);
        self.after_indent = other.after_indent;
        self
    }

    /// Number of argument-consuming directives (`$L`, `$T`) in the template.
    pub fn directive_count(&self) -> usize {
        let mut count = 0;
        let mut chars = self.template.chars();
        while let Some(c) = chars.next() {
            if c == '$' && matches!(chars.next(), Some('L' | 'T')) {
                count += 1;
            }
        }
        count
    }

    /// Check whether this statement writes an empty line.
    pub fn is_blank(&self) -> bool {
        self.template.is_empty() && self.args.is_empty()
    }
}

/// Build a [`Statement`] from a template and its arguments.
///
/// ```
/// use gopoet_core::statement;
///
/// let s = statement!("$L := $L", "x", 1);
/// assert_eq!(s.args.len(), 2);
/// assert_eq!(s.directive_count(), 2);
/// ```
#[macro_export]
macro_rules! statement {
    ($template:expr $(, $arg:expr)* $(,)?) => {
        $crate::Statement::with_args($template, vec![$($crate::Value::from($arg)),*])
    };
}
