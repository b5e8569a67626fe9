//! Core utilities and types for the metagen schema compiler.
//!
//! This crate provides the naming helpers and file-writing primitives shared
//! by the schema loader, the pipeline and the language emitters.

mod file;
mod utils;

// File operations
pub use file::{FileRules, GENERATED_HEADER, GeneratedFile, WriteResult, write_file};
// String utilities
pub use utils::{is_identifier, is_pascal_case, to_pascal_case, to_snake_case};
