//! Lint for schema naming conventions.

use metagen_core::is_pascal_case;
use metagen_schema::Schema;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Warns about entity, property and enum names that aren't PascalCase.
///
/// Accessor names are built by concatenating names (`InstrumentAnnotationRefID`),
/// which only reads well, and converts to snake_case predictably, when each
/// part is PascalCase.
pub struct PascalCaseLint;

impl Lint for PascalCaseLint {
    fn name(&self) -> &'static str {
        "pascal-case"
    }

    fn description(&self) -> &'static str {
        "Check entity, property and enum names are PascalCase"
    }

    fn check(&self, schema: &Schema, diagnostics: &mut Vec<Diagnostic>) {
        let mut check = |kind: &str, name: &str, location: String| {
            if !is_pascal_case(name) {
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!("{} '{}' should be PascalCase (e.g., 'LightSource')", kind, name),
                    )
                    .from_lint(self.name())
                    .at(location),
                );
            }
        };

        for name in schema.enums.keys() {
            check("enum", name, format!("enums.{}", name));
        }

        for (name, entity) in &schema.entities {
            check("entity", name, format!("entities.{}", name));
            for property in entity.properties.keys() {
                check(
                    "property",
                    property,
                    format!("entities.{}.properties.{}", name, property),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_pascal_names() {
        let schema: Schema = r#"
            [schema]
            name = "test"
            root = "Document"

            [entities.light_source]
            parents = ["Document"]
            properties.power = "float"
            properties.Model = "string"
        "#
        .parse()
        .unwrap();

        let mut diagnostics = Vec::new();
        PascalCaseLint.check(&schema, &mut diagnostics);

        let locations: Vec<_> = diagnostics
            .iter()
            .filter_map(|d| d.location.as_deref())
            .collect();
        assert_eq!(
            locations,
            ["entities.light_source", "entities.light_source.properties.power"]
        );
    }

    #[test]
    fn test_acronyms_are_accepted() {
        let schema: Schema = r#"
            [schema]
            name = "test"
            root = "Document"

            [entities.ROI]
            parents = ["Document"]
            properties.ID = "string"
        "#
        .parse()
        .unwrap();

        let mut diagnostics = Vec::new();
        PascalCaseLint.check(&schema, &mut diagnostics);
        assert!(diagnostics.is_empty());
    }
}
