//! Validate phase - runs lints on the schema.

mod lint;
pub mod lints;

use eyre::{Result, bail};
pub use lint::{Lint, LintInfo};
pub use lints::{MissingDescriptionLint, PascalCaseLint, UnusedEnumLint};
use tracing::debug;

use crate::pipeline::{CompilationContext, Phase};

/// Phase that checks the schema with a configurable set of lints.
pub struct ValidatePhase {
    lints: Vec<Box<dyn Lint>>,
}

impl ValidatePhase {
    /// A validate phase with the default lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(PascalCaseLint),
                Box::new(MissingDescriptionLint),
                Box::new(UnusedEnumLint),
            ],
        }
    }

    /// A validate phase with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    pub fn lint_info(&self) -> Vec<LintInfo> {
        self.lints.iter().map(|l| l.info()).collect()
    }
}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn description(&self) -> &'static str {
        "Check schema conventions and collect diagnostics"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        for lint in &self.lints {
            let before = ctx.diagnostics.len();
            lint.check(&ctx.schema, &mut ctx.diagnostics);
            debug!(
                lint = lint.name(),
                findings = ctx.diagnostics.len() - before,
                "lint done"
            );
        }

        // Warnings are allowed; lints that report errors stop compilation
        if ctx.has_errors() {
            bail!("validation failed with {} error(s)", ctx.error_count());
        }

        Ok(())
    }
}
