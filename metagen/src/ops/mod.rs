//! Core operations.
//!
//! The logic behind each metagen command, separated from argument parsing
//! and output rendering. Every operation returns a report.

mod check;
mod explain;
mod generate;
mod tree;

pub use check::check;
pub use explain::explain;
pub use generate::{GenerateOptions, generate};
pub use tree::tree;

use metagen_codegen::pipeline::Diagnostic;

/// A diagnostic's message with its lint and location, without the severity.
fn describe(diag: &Diagnostic) -> String {
    let mut text = match diag.lint {
        Some(lint) => format!("[{}] {}", lint, diag.message),
        None => diag.message.clone(),
    };
    if let Some(loc) = &diag.location {
        text.push_str(&format!("\n  --> {}", loc));
    }
    text
}

#[cfg(test)]
pub(crate) mod test_schemas {
    use metagen_schema::Schema;

    pub const PLATES: &str = r#"
        [schema]
        name = "plates"
        version = "1.0"
        root = "Document"

        [entities.Plate]
        parents = ["Document"]
        description = "A multi-well plate"
        properties.Name = "string"

        [entities.Well]
        parents = ["Plate"]
        properties.Color = "int"
    "#;

    pub const ANNOTATIONS: &str = r#"
        [schema]
        name = "annotations"
        root = "Document"

        [entities.Instrument]
        parents = ["Document"]

        [entities.LightSource]
        parents = ["Instrument"]

        [entities.AnnotationRef]
        parents = ["Instrument", "LightSource"]
        properties.Value = "string"
    "#;

    pub fn parse(toml: &str) -> Schema {
        toml.parse().expect("test schema should parse")
    }
}
