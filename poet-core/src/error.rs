use miette::Diagnostic;
use thiserror::Error;

/// Result type for rendering operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Errors raised while building or rendering statements.
///
/// Every variant is a usage defect in the calling code. Rendering stops at the
/// first one and no partial output is returned.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("template '{template}' has no argument for directive #{index}")]
    #[diagnostic(
        code(poet::argument_count),
        help("supply one argument per `$L`/`$T` directive")
    )]
    ArgumentCount { template: String, index: usize },

    #[error("template '{template}' used {used} of {supplied} arguments")]
    #[diagnostic(
        code(poet::unused_arguments),
        help("remove the extra arguments or add the missing directives")
    )]
    UnusedArguments {
        template: String,
        used: usize,
        supplied: usize,
    },

    #[error("unknown directive '${directive}' at offset {offset} in template '{template}'")]
    #[diagnostic(
        code(poet::unknown_directive),
        help("supported directives are `$L`, `$T` and `$$`")
    )]
    UnknownDirective {
        template: String,
        directive: String,
        offset: usize,
    },

    #[error("argument #{index} of template '{template}' is not {expected}")]
    #[diagnostic(code(poet::type_mismatch))]
    TypeMismatch {
        template: String,
        index: usize,
        expected: &'static str,
    },

    #[error("invalid reference: {reason}")]
    #[diagnostic(code(poet::invalid_reference))]
    InvalidReference { reason: String },

    #[error("indentation would drop below zero (depth {depth}, delta {delta})")]
    #[diagnostic(
        code(poet::indent_underflow),
        help("every `afterIndent: +1` must be paired with a later `beforeIndent: -1`")
    )]
    IndentUnderflow { depth: usize, delta: i32 },

    #[error("failed to render statement #{index}")]
    #[diagnostic(code(poet::statement))]
    Statement {
        index: usize,
        #[source]
        source: Box<Error>,
    },

    #[error("failed to parse render configuration")]
    #[diagnostic(code(poet::config))]
    Config {
        #[source]
        source: toml::de::Error,
    },
}

impl Error {
    /// Create an invalid reference error.
    pub fn invalid_reference(reason: impl Into<String>) -> Box<Self> {
        Box::new(Self::InvalidReference {
            reason: reason.into(),
        })
    }

    /// Strip `Statement` annotations and return the error that caused them.
    pub fn root_cause(&self) -> &Error {
        match self {
            Self::Statement { source, .. } => source.root_cause(),
            other => other,
        }
    }
}
