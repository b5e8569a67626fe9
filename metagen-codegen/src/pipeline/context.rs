//! Compilation context passed through pipeline phases.

use eyre::{Result, eyre};
use metagen_ir::{AccessorModel, SchemaIR};
use metagen_schema::Schema;

use super::diagnostic::{Diagnostic, Severity};

/// State carried through every pipeline phase.
///
/// Each phase fills in its output: `resolve` sets [`ir`](Self::ir),
/// `synthesize` sets [`model`](Self::model).
#[derive(Debug)]
pub struct CompilationContext {
    /// The schema being compiled.
    pub schema: Schema,
    /// Schema with resolved containment paths (set by the resolve phase).
    pub ir: Option<SchemaIR>,
    /// Accessor families (set by the synthesize phase).
    pub model: Option<AccessorModel>,
    /// Diagnostics collected during compilation.
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    pub fn new(schema: Schema) -> Self {
        Self {
            schema,
            ir: None,
            model: None,
            diagnostics: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }

    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn add_warning(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(phase, message));
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity.is_warning())
    }

    /// The resolved schema, or an error if the resolve phase has not run.
    pub fn ir(&self) -> Result<&SchemaIR> {
        self.ir
            .as_ref()
            .ok_or_else(|| eyre!("schema IR not set - did the resolve phase run?"))
    }

    /// The accessor model, or an error if the synthesize phase has not run.
    pub fn model(&self) -> Result<&AccessorModel> {
        self.model
            .as_ref()
            .ok_or_else(|| eyre!("accessor model not set - did the synthesize phase run?"))
    }

    /// Take the resolved schema and accessor model out of the context.
    pub fn into_parts(self) -> Result<(SchemaIR, AccessorModel)> {
        let ir = self
            .ir
            .ok_or_else(|| eyre!("schema IR not set - did the resolve phase run?"))?;
        let model = self
            .model
            .ok_or_else(|| eyre!("accessor model not set - did the synthesize phase run?"))?;
        Ok((ir, model))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_schema() -> Schema {
        r#"
            [schema]
            name = "test"
            root = "Document"
        "#
        .parse()
        .expect("Failed to parse test schema")
    }

    #[test]
    fn test_context_creation() {
        let ctx = CompilationContext::new(make_test_schema());

        assert!(ctx.ir.is_none());
        assert!(ctx.model.is_none());
        assert!(ctx.diagnostics.is_empty());
        assert!(ctx.ir().is_err());
        assert!(ctx.into_parts().is_err());
    }

    #[test]
    fn test_context_diagnostics() {
        let mut ctx = CompilationContext::new(make_test_schema());

        ctx.add_diagnostic(Diagnostic::error("test", "test error"));
        ctx.add_warning("test", "test warning");
        ctx.add_diagnostic(Diagnostic::info("test", "just info"));

        assert!(ctx.has_errors());
        assert!(ctx.has_warnings());
        assert_eq!(ctx.error_count(), 1);
        assert_eq!(ctx.warning_count(), 1);
        assert_eq!(ctx.warnings().count(), 1);
    }
}
