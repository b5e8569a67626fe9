//! Pipeline phase trait.

use eyre::Result;
use serde::Serialize;

use super::CompilationContext;

/// Name and description of a phase, for reports.
#[derive(Debug, Clone, Serialize)]
pub struct PhaseInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// A step of schema compilation.
///
/// Built-in phases, in order:
/// - `ValidatePhase` - runs lints over the loaded schema
/// - `ResolvePhase` - computes containment paths and lowers to `SchemaIR`
/// - `SynthesizePhase` - derives accessor families from the IR
pub trait Phase: Send + Sync {
    /// The name of this phase (used in diagnostics and plugin hooks).
    fn name(&self) -> &'static str;

    /// A human-readable description of what this phase does.
    fn description(&self) -> &'static str;

    /// Run this phase on the compilation context.
    ///
    /// # Errors
    ///
    /// Returns an error if the schema cannot be compiled. Non-fatal findings
    /// are recorded as diagnostics instead.
    fn run(&self, ctx: &mut CompilationContext) -> Result<()>;

    fn info(&self) -> PhaseInfo {
        PhaseInfo {
            name: self.name(),
            description: self.description(),
        }
    }
}
