//! Check command report data structures.

use std::path::PathBuf;

use metagen_codegen::schema::SchemaSummary;

use super::output::{Output, Report};

/// Result of validating a schema.
#[derive(Debug)]
pub struct CheckReport {
    pub schema_path: PathBuf,
    pub name: String,
    pub version: Option<String>,
    pub description: Option<String>,
    /// Rendered diagnostics, by severity.
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub infos: Vec<String>,
    pub summary: SchemaSummary,
    /// Containment tree, pre-rendered and indented.
    pub tree: String,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{} {}", n, word)
    } else {
        format!("{} {}s", n, word)
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        // Diagnostics already carry their severity prefix
        for diag in self.errors.iter().chain(&self.warnings).chain(&self.infos) {
            out.preformatted(diag);
        }
        if !self.errors.is_empty() || !self.warnings.is_empty() {
            out.newline();
        }

        if !self.is_valid() {
            out.preformatted(&format!(
                "✗ {} has {}",
                self.schema_path.display(),
                plural(self.errors.len(), "error")
            ));
            return;
        }

        out.preformatted(&format!("✓ {} is valid", self.schema_path.display()));
        out.newline();

        match &self.version {
            Some(version) => out.preformatted(&format!("  {} v{}", self.name, version)),
            None => out.preformatted(&format!("  {}", self.name)),
        }
        if let Some(desc) = &self.description {
            out.preformatted(&format!("  {}", desc));
        }
        out.newline();

        let s = &self.summary;
        out.key_value_indented("Entities", &s.entities.to_string());
        out.key_value_indented("Enums", &s.enums.to_string());
        out.key_value_indented("Properties", &s.properties.to_string());
        out.key_value_indented(
            "Families",
            &format!(
                "{} ({} multi-path entities)",
                s.families, s.multi_path_entities
            ),
        );
        out.key_value_indented(
            "Accessors",
            &format!(
                "{} ({} count, {} get, {} set)",
                s.accessors(),
                s.count_accessors,
                s.get_accessors,
                s.set_accessors
            ),
        );
        out.key_value_indented("Max depth", &s.max_depth.to_string());

        if !self.tree.is_empty() {
            out.newline();
            out.preformatted(&self.tree);
        }
    }
}
