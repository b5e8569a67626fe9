//! Generate operation - accessor code generation.

use std::path::PathBuf;

use eyre::{Context, Result};
use metagen_codegen::{
    pipeline::{Pipeline, SnapshotPlugin},
    schema::SchemaSummary,
};
use metagen_codegen_rust::{Generator, LanguageCodegen};
use metagen_schema::Schema;
use tracing::debug;

use super::describe;
use crate::reports::{GenerateReport, GenerationResult, PreviewResult, WrittenResult};

/// Options for the generate operation.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub output_dir: PathBuf,
    /// Render the files without writing them.
    pub dry_run: bool,
    /// Write a JSON snapshot of the pipeline state after each phase.
    pub visualize: bool,
}

impl GenerateOptions {
    /// Where `--visualize` puts the phase snapshots.
    pub fn debug_dir(&self) -> PathBuf {
        self.output_dir.join(".metagen").join("debug")
    }
}

/// Execute the generate operation.
pub fn generate(schema: Schema, options: &GenerateOptions) -> Result<GenerateReport> {
    let debug_dir = options.visualize.then(|| options.debug_dir());
    debug!(output = %options.output_dir.display(), dry_run = options.dry_run, "generating");

    let mut pipeline = Pipeline::new();
    if let Some(dir) = &debug_dir {
        pipeline = pipeline.plugin(SnapshotPlugin::with_output_dir(dir));
    }

    let ctx = pipeline.run(schema).wrap_err("Failed to compile schema")?;
    let warnings = ctx.warnings().map(describe).collect();
    let (ir, model) = ctx.into_parts()?;

    let generator = Generator::new(&ir, &model);
    let result = if options.dry_run {
        GenerationResult::Preview(PreviewResult {
            files: generator.preview(),
        })
    } else {
        let generated = generator
            .generate(&options.output_dir)
            .wrap_err("Failed to generate code")?;
        GenerationResult::Written(WrittenResult {
            output_dir: options.output_dir.clone(),
            written: generated.written,
            unchanged: generated.unchanged,
        })
    };

    Ok(GenerateReport {
        name: ir.meta.name.clone(),
        version: ir.meta.version.clone(),
        summary: SchemaSummary::new(&ir, &model),
        warnings,
        result,
        debug_dir,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::test_schemas::{PLATES, parse};

    fn options(dir: &std::path::Path) -> GenerateOptions {
        GenerateOptions {
            output_dir: dir.join("generated"),
            dry_run: false,
            visualize: false,
        }
    }

    #[test]
    fn test_generate_writes_then_skips_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let options = options(dir.path());

        let first = generate(parse(PLATES), &options).unwrap();
        let GenerationResult::Written(first) = first.result else {
            panic!("expected written files");
        };
        assert_eq!(first.written.len(), 9);
        assert!(options.output_dir.join("aggregate.rs").exists());

        let second = generate(parse(PLATES), &options).unwrap();
        let GenerationResult::Written(second) = second.result else {
            panic!("expected written files");
        };
        assert!(second.written.is_empty());
        assert_eq!(second.unchanged.len(), 9);
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let options = GenerateOptions {
            dry_run: true,
            ..options(dir.path())
        };

        let report = generate(parse(PLATES), &options).unwrap();
        let GenerationResult::Preview(preview) = report.result else {
            panic!("expected preview");
        };
        assert_eq!(preview.files.len(), 9);
        assert!(!options.output_dir.exists());
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn test_visualize_writes_snapshots() {
        let dir = tempfile::tempdir().unwrap();
        let options = GenerateOptions {
            visualize: true,
            ..options(dir.path())
        };

        let report = generate(parse(PLATES), &options).unwrap();
        let debug_dir = report.debug_dir.unwrap();
        for phase in ["validate", "resolve", "synthesize"] {
            assert!(debug_dir.join(format!("{phase}.json")).exists());
        }
    }
}
