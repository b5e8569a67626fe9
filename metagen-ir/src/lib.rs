//! Intermediate representation types for the metagen schema compiler.
//!
//! This crate provides the type definitions shared by the pipeline phases and
//! the language emitters.
//!
//! # Architecture
//!
//! ```text
//! schema.toml → metagen-schema (parsing) → SchemaIR (resolved paths)
//!             → AccessorModel (accessor families) → emitter
//! ```
//!
//! The IR types are language-agnostic: accessor names are PascalCase stems
//! (`WellColor`, `SetWellColor`) that each emitter converts to its own
//! naming convention.

mod accessor;
mod schema;
mod types;

pub use accessor::{AccessorFamily, AccessorModel, CountAccessor, GetAccessor, SetAccessor};
pub use schema::{ContainmentPath, EntityIR, EnumIR, PathStep, PropertyIR, SchemaIR, SchemaMeta};
pub use types::{Cardinality, IndexParam, ValueType};
