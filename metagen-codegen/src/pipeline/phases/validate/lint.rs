//! Lint trait for schema validation.

use metagen_schema::Schema;
use serde::Serialize;

use crate::pipeline::Diagnostic;

/// Name and description of a lint, for reports.
#[derive(Debug, Clone, Serialize)]
pub struct LintInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// A check over the loaded schema that reports non-fatal findings.
pub trait Lint: Send + Sync {
    /// The name of this lint, shown next to its diagnostics.
    fn name(&self) -> &'static str;

    /// A human-readable description of what the lint checks.
    fn description(&self) -> &'static str;

    /// Check the schema and add any diagnostics.
    fn check(&self, schema: &Schema, diagnostics: &mut Vec<Diagnostic>);

    fn info(&self) -> LintInfo {
        LintInfo {
            name: self.name(),
            description: self.description(),
        }
    }
}
