//! Schema loading for the metagen schema compiler.
//!
//! A schema is a TOML document describing entities, their properties and the
//! parents they are contained in. Parsing checks names, types and parent
//! references; containment paths are resolved later by the pipeline.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod schema;

pub use error::{Error, Result, SourceContext};
pub use schema::{
    EnumDef, Entity, ParseContext, Primitive, Property, Schema, SchemaFile, SchemaMeta,
    parse_schema,
};
