//! Compilation pipeline.
//!
//! A [`Pipeline`] takes a loaded schema through a fixed sequence of phases:
//!
//! - validate: lints, reported as diagnostics
//! - resolve: containment paths for every entity
//! - synthesize: count/get/set accessor families
//!
//! Plugins hook in before and after each phase, and all phases share one
//! [`CompilationContext`].
//!
//! # Example
//!
//! ```ignore
//! use metagen_codegen::pipeline::Pipeline;
//!
//! let ctx = Pipeline::new().run(schema)?;
//! for warning in ctx.warnings() {
//!     eprintln!("{warning}");
//! }
//! let (ir, model) = ctx.into_parts()?;
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod plugin;
mod runner;
mod snapshot;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::{Phase, PhaseInfo};
pub use plugin::Plugin;
pub use runner::Pipeline;
pub use snapshot::{PhaseSnapshot, SnapshotPlugin};
