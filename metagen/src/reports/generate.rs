//! Generate command report data structures.

use std::path::PathBuf;

use metagen_codegen::{language::PreviewFile, schema::SchemaSummary};

use super::output::{Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    pub name: String,
    pub version: Option<String>,
    pub summary: SchemaSummary,
    /// Lint findings, already formatted.
    pub warnings: Vec<String>,
    pub result: GenerationResult,
    /// Where `--visualize` wrote the phase snapshots.
    pub debug_dir: Option<PathBuf>,
}

/// Files were either written or only previewed.
#[derive(Debug)]
pub enum GenerationResult {
    Written(WrittenResult),
    Preview(PreviewResult),
}

#[derive(Debug)]
pub struct WrittenResult {
    pub output_dir: PathBuf,
    /// Files with new content.
    pub written: Vec<String>,
    /// Files already up to date.
    pub unchanged: Vec<String>,
}

#[derive(Debug)]
pub struct PreviewResult {
    pub files: Vec<PreviewFile>,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.result {
            GenerationResult::Preview(preview) => {
                for file in &preview.files {
                    out.divider(&file.path);
                    out.preformatted(&file.content);
                }
                out.divider("Summary");
                out.preformatted(&format!("{} files would be generated", preview.files.len()));
            }
            GenerationResult::Written(written) => {
                match &self.version {
                    Some(version) => out.preformatted(&format!("{} v{}", self.name, version)),
                    None => out.preformatted(&self.name),
                }
                out.key_value_indented(
                    "Accessors",
                    &format!(
                        "{} across {} families",
                        self.summary.accessors(),
                        self.summary.families
                    ),
                );
                out.newline();

                out.key_value("Generated", &written.output_dir.display().to_string());
                for file in &written.written {
                    out.added_item(file);
                }
                if !written.unchanged.is_empty() {
                    out.key_value_indented("Unchanged", &written.unchanged.join(", "));
                }
            }
        }

        if let Some(dir) = &self.debug_dir {
            out.newline();
            out.key_value("Pipeline snapshots written to", &dir.display().to_string());
        }
    }
}
