//! Pipeline plugin trait.

use eyre::Result;

use super::CompilationContext;

/// Hooks that run around every phase.
///
/// Plugins can inspect the context between phases (the snapshot plugin dumps
/// it as JSON) or abort compilation by returning an error.
///
/// # Example
///
/// ```ignore
/// struct FamilyLimit(usize);
///
/// impl Plugin for FamilyLimit {
///     fn name(&self) -> &'static str { "family-limit" }
///
///     fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
///         if phase == "synthesize" && ctx.model()?.families.len() > self.0 {
///             eyre::bail!("too many accessor families");
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Plugin: Send + Sync {
    /// The name of this plugin (for logging).
    fn name(&self) -> &'static str;

    /// Called before a phase runs. Return an error to abort the pipeline.
    #[allow(unused_variables)]
    fn on_before_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        Ok(())
    }

    /// Called after a phase completes. Return an error to abort the pipeline.
    #[allow(unused_variables)]
    fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        Ok(())
    }
}
