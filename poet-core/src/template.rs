//! Directive substitution for statement templates.
//!
//! - `$L` substitutes the next argument's literal text.
//! - `$T` substitutes the next argument's type name and registers its imports.
//! - `$$` substitutes a literal `$`.
//!
//! Anything else after `$` is an error.

use std::sync::Arc;

use crate::{Error, ImportRegistry, Result, TypeReference, Value};

/// Render `template` with `args`, registering the imports of every `$T` argument.
///
/// Fails without producing output if the directives and arguments do not line up.
///
/// ```
/// use gopoet_core::{ImportRegistry, Value, render};
///
/// let mut registry = ImportRegistry::new();
/// let text = render("$L costs $$$L", &[Value::from("tea"), Value::from(3)], &mut registry).unwrap();
/// assert_eq!(text, "tea costs $3");
/// ```
pub fn render(template: &str, args: &[Value], registry: &mut ImportRegistry) -> Result<String> {
    let pieces = parse(template, args)?;

    for piece in &pieces {
        if let Piece::Type(reference) = piece {
            registry.register_all(&reference.type_imports());
        }
    }

    let mut out = String::with_capacity(template.len());
    for piece in pieces {
        match piece {
            Piece::Text(text) => out.push_str(text),
            Piece::Dollar => out.push('$'),
            Piece::Type(reference) => out.push_str(&reference.type_name(registry)),
        }
    }
    Ok(out)
}

/// A checked template fragment.
enum Piece<'a> {
    Text(&'a str),
    Dollar,
    Type(&'a Arc<dyn TypeReference>),
}

/// Match every directive with its argument without touching the registry.
fn parse<'a>(template: &'a str, args: &'a [Value]) -> Result<Vec<Piece<'a>>> {
    let mut pieces = Vec::new();
    let mut next = 0;
    let mut start = 0;
    let mut chars = template.char_indices();

    while let Some((offset, c)) = chars.next() {
        if c != '$' {
            continue;
        }
        if start < offset {
            pieces.push(Piece::Text(&template[start..offset]));
        }

        match chars.next() {
            Some((_, '$')) => pieces.push(Piece::Dollar),
            Some((_, 'L')) => {
                match take(template, args, next)? {
                    Value::Literal(text) => pieces.push(Piece::Text(text.as_str())),
                    Value::Type(_) => {
                        return Err(Box::new(Error::TypeMismatch {
                            template: template.to_string(),
                            index: next,
                            expected: "a literal",
                        }));
                    }
                }
                next += 1;
            }
            Some((_, 'T')) => {
                match take(template, args, next)? {
                    Value::Type(reference) => pieces.push(Piece::Type(reference)),
                    Value::Literal(_) => {
                        return Err(Box::new(Error::TypeMismatch {
                            template: template.to_string(),
                            index: next,
                            expected: "a type reference",
                        }));
                    }
                }
                next += 1;
            }
            other => {
                return Err(Box::new(Error::UnknownDirective {
                    template: template.to_string(),
                    directive: other.map(|(_, c)| c.to_string()).unwrap_or_default(),
                    offset,
                }));
            }
        }
        start = offset + 2;
    }
    if start < template.len() {
        pieces.push(Piece::Text(&template[start..]));
    }

    if next < args.len() {
        return Err(Box::new(Error::UnusedArguments {
            template: template.to_string(),
            used: next,
            supplied: args.len(),
        }));
    }

    Ok(pieces)
}

fn take<'a>(template: &str, args: &'a [Value], index: usize) -> Result<&'a Value> {
    args.get(index).ok_or_else(|| {
        Box::new(Error::ArgumentCount {
            template: template.to_string(),
            index,
        })
    })
}
