//! Explain operation - pipeline explanation.

use std::path::Path;

use eyre::{Context, Result};
use metagen_codegen::pipeline::{Pipeline, phases::ValidatePhase};
use metagen_codegen_rust::{Generator, LanguageCodegen};
use metagen_schema::Schema;

use crate::reports::{ExplainReport, FamilyInfo, LintInfo, MultiPathInfo, PhaseInfo};

/// Execute the explain operation.
pub fn explain(schema: Schema, schema_path: &Path) -> Result<ExplainReport> {
    let pipeline = Pipeline::new();

    let phases = pipeline
        .phase_info()
        .into_iter()
        .map(|p| PhaseInfo {
            name: p.name.to_string(),
            description: p.description.to_string(),
        })
        .collect();

    let lints = ValidatePhase::new()
        .lint_info()
        .into_iter()
        .map(|l| LintInfo {
            name: l.name.to_string(),
            description: l.description.to_string(),
        })
        .collect();

    let ctx = pipeline.run(schema).wrap_err("Pipeline failed")?;
    let (ir, model) = ctx.into_parts()?;

    let multi_path = ir
        .multi_path_entities()
        .map(|e| MultiPathInfo {
            entity: e.name.clone(),
            paths: e.paths.iter().map(|p| p.display()).collect(),
        })
        .collect();

    let families = model
        .families
        .iter()
        .map(|f| FamilyInfo {
            name: f.name.clone(),
            path: f.path.display(),
            params: f.params().into_iter().map(|p| p.name).collect(),
            properties: f.getters.len(),
        })
        .collect();

    let files = Generator::new(&ir, &model)
        .preview()
        .into_iter()
        .map(|f| f.path)
        .collect();

    Ok(ExplainReport {
        schema_path: schema_path.to_path_buf(),
        name: ir.meta.name.clone(),
        root: ir.root.clone(),
        phases,
        lints,
        multi_path,
        families,
        files,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::test_schemas::{ANNOTATIONS, parse};

    #[test]
    fn test_explain_annotations() {
        let report = explain(parse(ANNOTATIONS), Path::new("annotations.toml")).unwrap();

        let phases: Vec<_> = report.phases.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(phases, ["validate", "resolve", "synthesize"]);
        assert_eq!(report.lints.len(), 3);
        assert_eq!(report.root, "Document");

        assert_eq!(report.multi_path.len(), 1);
        assert_eq!(report.multi_path[0].entity, "AnnotationRef");
        assert_eq!(
            report.multi_path[0].paths,
            ["Instrument/AnnotationRef", "Instrument/LightSource/AnnotationRef"]
        );

        let light_source_ref = report
            .families
            .iter()
            .find(|f| f.name == "LightSourceAnnotationRef")
            .unwrap();
        assert_eq!(
            light_source_ref.params,
            ["instrument_index", "light_source_index", "annotation_ref_index"]
        );
        assert_eq!(light_source_ref.properties, 1);
        assert_eq!(report.files.first().map(String::as_str), Some("mod.rs"));
    }
}
