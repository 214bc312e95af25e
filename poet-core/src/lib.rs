//! Rendering engine for the gopoet source generator.
//!
//! Declaration builders describe their output as a sequence of
//! [`Statement`]s. A [`CodeWriter`] renders those statements, tracking
//! indentation and collecting the imports the emitted text refers to.
//!
//! # Module Organization
//!
//! - [`template`] - `$L`/`$T`/`$$` directive substitution
//! - [`statement`] - The statement model
//! - [`writer`] - Indentation-tracking writer
//! - [`registry`] - Import aliasing and deduplication
//! - [`block`] - `CodeBlock`/`TypeReference` traits and composition helpers

pub mod block;
mod config;
mod error;
pub mod import;
mod indent;
pub mod registry;
pub mod statement;
pub mod template;
mod value;
pub mod writer;

pub use block::{
    CodeBlock, Pointer, RawBlock, TypeReference, attach, attach_imports, imports_of,
};
pub use config::RenderConfig;
pub use error::{Error, Result};
pub use import::{Import, ImportSet};
pub use indent::Indent;
pub use registry::ImportRegistry;
pub use statement::Statement;
pub use template::render;
pub use value::Value;
pub use writer::{CodeWriter, Rendered, indent_levels, is_balanced};
