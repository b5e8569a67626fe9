//! Explain command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// What the pipeline does with a schema.
#[derive(Debug)]
pub struct ExplainReport {
    pub schema_path: PathBuf,
    pub name: String,
    pub root: String,
    pub phases: Vec<PhaseInfo>,
    pub lints: Vec<LintInfo>,
    /// Entities with more than one containment path.
    pub multi_path: Vec<MultiPathInfo>,
    pub families: Vec<FamilyInfo>,
    /// Generated file names, in emission order.
    pub files: Vec<String>,
}

#[derive(Debug)]
pub struct PhaseInfo {
    pub name: String,
    pub description: String,
}

#[derive(Debug)]
pub struct LintInfo {
    pub name: String,
    pub description: String,
}

#[derive(Debug)]
pub struct MultiPathInfo {
    pub entity: String,
    /// Each path, rendered as `A/B/C`.
    pub paths: Vec<String>,
}

/// One accessor family and the indices its accessors take.
#[derive(Debug)]
pub struct FamilyInfo {
    pub name: String,
    pub path: String,
    pub params: Vec<String>,
    pub properties: usize,
}

impl Report for ExplainReport {
    fn render(&self, out: &mut dyn Output) {
        out.title("Metagen Pipeline Explanation");
        out.newline();

        out.key_value("Input", &self.schema_path.display().to_string());
        out.key_value_indented("Schema", &self.name);
        out.key_value_indented("Root", &self.root);
        out.newline();

        out.section("Pipeline Phases");
        for (i, phase) in self.phases.iter().enumerate() {
            out.numbered_item(i + 1, &format!("{} - {}", phase.name, phase.description));
        }
        out.newline();

        out.section("Validation Lints");
        for lint in &self.lints {
            out.list_item(&format!("{}: {}", lint.name, lint.description));
        }
        out.newline();

        if !self.multi_path.is_empty() {
            out.section("Multi-path Entities");
            for entity in &self.multi_path {
                out.list_item(&format!("{} via {}", entity.entity, entity.paths.join(", ")));
            }
            out.newline();
        }

        out.section("Accessor Families");
        for family in &self.families {
            out.list_item(&format!(
                "{} [{}] ({}) {} properties",
                family.name,
                family.path,
                family.params.join(", "),
                family.properties
            ));
        }
        out.newline();

        out.section("Files to Generate");
        for file in &self.files {
            out.list_item(file);
        }
    }
}
