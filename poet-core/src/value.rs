//! Arguments substituted into statement templates.

use std::sync::Arc;

use crate::TypeReference;

/// One argument of a statement template.
///
/// `$L` consumes a [`Value::Literal`], `$T` consumes a [`Value::Type`].
#[derive(Debug, Clone)]
pub enum Value {
    /// Text substituted as-is; no quoting is added.
    Literal(String),
    /// A reference whose imports are registered when it is rendered.
    Type(Arc<dyn TypeReference>),
}

impl Value {
    /// Wrap a literal in its textual form.
    pub fn literal(value: impl ToString) -> Self {
        Self::Literal(value.to_string())
    }

    /// Wrap a type reference.
    pub fn ty(reference: impl TypeReference + 'static) -> Self {
        Self::Type(Arc::new(reference))
    }

    /// The type reference, if this is a `$T` argument.
    pub fn as_type(&self) -> Option<&Arc<dyn TypeReference>> {
        match self {
            Self::Type(reference) => Some(reference),
            Self::Literal(_) => None,
        }
    }

    pub fn is_type(&self) -> bool {
        matches!(self, Self::Type(_))
    }
}

macro_rules! literal_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::Literal(value.to_string())
                }
            }
        )*
    };
}

literal_from!(
    &str, String, &String, char, bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128,
    usize, f32, f64,
);

impl From<Arc<dyn TypeReference>> for Value {
    fn from(reference: Arc<dyn TypeReference>) -> Self {
        Self::Type(reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_conversions() {
        assert!(matches!(Value::from(1), Value::Literal(s) if s == "1"));
        assert!(matches!(Value::from(2.5), Value::Literal(s) if s == "2.5"));
        assert!(matches!(Value::from(true), Value::Literal(s) if s == "true"));
        assert!(matches!(Value::from("x"), Value::Literal(s) if s == "x"));
        assert!(matches!(Value::from('c'), Value::Literal(s) if s == "c"));
        assert!(!Value::literal(42).is_type());
    }
}
