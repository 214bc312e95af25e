//! Line comments written above declarations.

use gopoet_core::{CodeBlock, ImportSet, Statement, statement};

/// A `//` comment, one statement per line. An empty comment emits nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Comment(String);

impl Comment {
    /// A comment from `text`. Each line becomes one `//` line.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Check whether the comment renders nothing.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Comment {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Comment {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl CodeBlock for Comment {
    fn statements(&self) -> Vec<Statement> {
        self.0
            .lines()
            .map(|line| {
                if line.is_empty() {
                    Statement::new("//")
                } else {
                    statement!("// $L", line)
                }
            })
            .collect()
    }

    fn imports(&self) -> ImportSet {
        ImportSet::new()
    }
}
