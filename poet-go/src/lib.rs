//! Go declaration builders for the gopoet source generator.
//!
//! Every builder implements [`gopoet_core::CodeBlock`], and the ones that
//! denote a usable type also implement [`gopoet_core::TypeReference`], so
//! they can be rendered on their own or passed to a `$T` directive.
//!
//! # Module Organization
//!
//! - [`types`] - Named, builtin and composite type references
//! - [`StructSpec`], [`InterfaceSpec`], [`TypeAliasSpec`] - Type declarations
//! - [`FuncSpec`], [`MethodSpec`] - Functions and methods
//! - [`VariableGrouping`], [`Variable`] - Package-level `var`/`const`
//! - [`FileSpec`] - Package clause, import block and declarations

mod alias;
mod comment;
mod file;
mod functions;
mod globals;
mod interfaces;
mod methods;
mod structs;
pub mod types;

pub use alias::TypeAliasSpec;
pub use comment::Comment;
pub use file::FileSpec;
pub use functions::{FuncSpec, Parameter};
pub use globals::{Variable, VariableGrouping};
pub use interfaces::InterfaceSpec;
pub use methods::MethodSpec;
pub use structs::{Field, StructSpec};
pub use types::TypeName;
