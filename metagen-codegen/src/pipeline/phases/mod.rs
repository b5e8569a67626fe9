//! Built-in pipeline phases.
//!
//! - [`ValidatePhase`] - runs lints over the schema and collects diagnostics
//! - [`ResolvePhase`] - resolves containment paths into a [`SchemaIR`](metagen_ir::SchemaIR)
//! - [`SynthesizePhase`] - derives the [`AccessorModel`](metagen_ir::AccessorModel)

mod resolve;
mod synthesize;
mod validate;

pub use resolve::{ResolveError, ResolvePhase, resolve_schema};
pub use synthesize::{SynthesizeError, SynthesizePhase, synthesize_model};
pub use validate::{
    Lint, LintInfo, MissingDescriptionLint, PascalCaseLint, UnusedEnumLint, ValidatePhase,
};
