//! Check operation - schema validation.

use std::path::Path;

use eyre::Result;
use metagen_codegen::{
    pipeline::{Pipeline, Severity},
    schema::{ContainmentTree, ContainmentTreeDisplay, DisplayStyle, SchemaSummary},
};
use metagen_schema::Schema;
use tracing::debug;

use super::describe;
use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Runs the whole pipeline. A failing phase makes the report invalid
/// instead of returning an error.
pub fn check(schema: Schema, schema_path: &Path) -> Result<CheckReport> {
    let mut report = CheckReport {
        schema_path: schema_path.to_path_buf(),
        name: schema.schema.name.clone(),
        version: schema.schema.version.clone(),
        description: schema.schema.description.clone(),
        errors: Vec::new(),
        warnings: Vec::new(),
        infos: Vec::new(),
        summary: SchemaSummary::default(),
        tree: String::new(),
    };

    let ctx = match Pipeline::new().run(schema) {
        Ok(ctx) => ctx,
        Err(e) => {
            debug!(error = %e, "pipeline failed");
            report.errors.push(format!("error: {:#}", e));
            return Ok(report);
        }
    };

    for diag in &ctx.diagnostics {
        let text = format!("{}: {}", diag.severity, describe(diag));
        match diag.severity {
            Severity::Error => report.errors.push(text),
            Severity::Warning => report.warnings.push(text),
            Severity::Info => report.infos.push(text),
        }
    }

    let ir = ctx.ir()?;
    let model = ctx.model()?;
    report.summary = SchemaSummary::new(ir, model);

    let tree = ContainmentTree::new(&ir.root, model);
    report.tree = ContainmentTreeDisplay::new(&tree)
        .style(DisplayStyle::Simple)
        .render()
        .lines()
        .map(|line| format!("  {}", line))
        .collect::<Vec<_>>()
        .join("\n");

    Ok(report)
}
