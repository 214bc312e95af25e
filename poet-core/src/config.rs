//! Per-unit render configuration.

use serde::Deserialize;

use crate::{Error, Indent, Result};

/// Settings for one render pass.
///
/// Can be built in code or loaded from TOML:
///
/// ```
/// use gopoet_core::{Indent, RenderConfig};
///
/// let config = RenderConfig::from_toml_str(
///     r#"
///     home = "github.com/acme/widgets"
///     indent = { spaces = 4 }
///     "#,
/// )
/// .unwrap();
///
/// assert_eq!(config.indent, Indent::Spaces(4));
/// assert_eq!(config.home.as_deref(), Some("github.com/acme/widgets"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Indentation unit.
    pub indent: Indent,
    /// Import path of the unit being rendered. References to it are never imported.
    pub home: Option<String>,
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from TOML.
    pub fn from_toml_str(src: &str) -> Result<Self> {
        toml::from_str(src).map_err(|source| Box::new(Error::Config { source }))
    }

    /// Set the indentation unit.
    pub fn indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    /// Set the home import path.
    pub fn home(mut self, path: impl Into<String>) -> Self {
        self.home = Some(path.into());
        self
    }
}
