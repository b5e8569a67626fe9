//! Language-agnostic compiler core for metagen.
//!
//! This crate takes a loaded schema through the compilation pipeline and
//! provides the abstractions shared by language emitters (e.g.
//! `metagen-codegen-rust`).
//!
//! # Module Organization
//!
//! - [`pipeline`] - Phases (validate, resolve, synthesize), plugins and diagnostics
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`language`] - Language-specific abstractions (LanguageCodegen, NamingConvention)
//! - [`schema`] - Views over a compiled schema (ContainmentTree, SchemaSummary)

pub mod builder;
pub mod language;
pub mod pipeline;
pub mod schema;
