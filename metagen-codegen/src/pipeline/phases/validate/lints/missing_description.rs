//! Lint for entities without descriptions.

use metagen_schema::Schema;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Warns about entities without a description.
///
/// Descriptions become the doc comments on generated accessors, so an
/// undocumented entity yields undocumented API.
pub struct MissingDescriptionLint;

impl Lint for MissingDescriptionLint {
    fn name(&self) -> &'static str {
        "missing-description"
    }

    fn description(&self) -> &'static str {
        "Warn about entities without a description"
    }

    fn check(&self, schema: &Schema, diagnostics: &mut Vec<Diagnostic>) {
        for (name, entity) in &schema.entities {
            let missing = entity
                .description
                .as_deref()
                .is_none_or(|d| d.trim().is_empty());
            if missing {
                diagnostics.push(
                    Diagnostic::warning("validate", format!("entity '{}' has no description", name))
                        .from_lint(self.name())
                        .at(format!("entities.{}", name)),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_and_blank_descriptions() {
        let schema: Schema = r#"
            [schema]
            name = "test"
            root = "Document"

            [entities.Plate]
            parents = ["Document"]

            [entities.Well]
            parents = ["Plate"]
            description = "  "

            [entities.Image]
            parents = ["Document"]
            description = "An image"
        "#
        .parse()
        .unwrap();

        let mut diagnostics = Vec::new();
        MissingDescriptionLint.check(&schema, &mut diagnostics);

        let locations: Vec<_> = diagnostics
            .iter()
            .filter_map(|d| d.location.as_deref())
            .collect();
        assert_eq!(locations, ["entities.Plate", "entities.Well"]);
        assert!(diagnostics.iter().all(|d| d.severity.is_warning()));
    }
}
