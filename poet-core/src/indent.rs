//! Indentation configuration for rendered source.

use serde::{Deserialize, Serialize};

/// Indentation unit written once per nesting level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Indent {
    /// Spaces with the specified width. Any width is written as configured.
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// Tab indentation (gofmt).
    pub const GO: Self = Self::Tab;

    /// `width` spaces per level.
    pub const fn spaces(width: u8) -> Self {
        Self::Spaces(width)
    }

    /// The text written for one indent level.
    pub fn unit(&self) -> String {
        match self {
            Self::Spaces(width) => " ".repeat(usize::from(*width)),
            Self::Tab => "\t".to_string(),
        }
    }

    /// Append `depth` indentation units to `buffer`.
    pub fn write_to(&self, buffer: &mut String, depth: usize) {
        match self {
            Self::Spaces(width) => {
                buffer.extend(std::iter::repeat_n(' ', usize::from(*width) * depth));
            }
            Self::Tab => buffer.extend(std::iter::repeat_n('\t', depth)),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::GO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_unit() {
        assert_eq!(Indent::spaces(2).unit(), "  ");
        assert_eq!(Indent::spaces(4).unit(), "    ");
        assert_eq!(Indent::Tab.unit(), "\t");
    }

    #[test]
    fn test_odd_widths_are_kept() {
        assert_eq!(Indent::spaces(3).unit(), "   ");
        assert_eq!(Indent::spaces(0).unit(), "");

        let mut buffer = String::new();
        Indent::spaces(3).write_to(&mut buffer, 2);
        assert_eq!(buffer, "      ");
    }

    #[test]
    fn test_default_is_tab() {
        assert_eq!(Indent::default(), Indent::Tab);
    }

    #[test]
    fn test_write_to() {
        let mut buffer = String::new();
        Indent::spaces(2).write_to(&mut buffer, 3);
        assert_eq!(buffer, "      ");

        let mut buffer = String::new();
        Indent::Tab.write_to(&mut buffer, 2);
        assert_eq!(buffer, "\t\t");
    }
}
