//! Lint for enumerations no property refers to.

use metagen_schema::Schema;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Warns about enums that no property uses as its type.
pub struct UnusedEnumLint;

impl Lint for UnusedEnumLint {
    fn name(&self) -> &'static str {
        "unused-enum"
    }

    fn description(&self) -> &'static str {
        "Warn about enums that no property refers to"
    }

    fn check(&self, schema: &Schema, diagnostics: &mut Vec<Diagnostic>) {
        for name in schema.enums.keys() {
            let used = schema
                .entities
                .values()
                .flat_map(|e| e.properties.values())
                .any(|p| &p.ty == name);

            if !used {
                diagnostics.push(
                    Diagnostic::warning("validate", format!("enum '{}' is never used", name))
                        .from_lint(self.name())
                        .at(format!("enums.{}", name)),
                );
            }
        }
    }
}
