//! Counts computed from a compiled schema.

use metagen_ir::{AccessorModel, SchemaIR};
use serde::Serialize;

/// Pre-computed counts used by the `check` and `generate` reports.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaSummary {
    pub enums: usize,
    pub entities: usize,
    /// Entities reachable through more than one path.
    pub multi_path_entities: usize,
    pub properties: usize,
    pub families: usize,
    pub count_accessors: usize,
    pub get_accessors: usize,
    pub set_accessors: usize,
    /// Length of the longest containment path.
    pub max_depth: usize,
}

impl SchemaSummary {
    pub fn new(ir: &SchemaIR, model: &AccessorModel) -> Self {
        Self {
            enums: ir.enums.len(),
            entities: ir.entities.len(),
            multi_path_entities: ir.multi_path_entities().count(),
            properties: ir.entities.iter().map(|e| e.properties.len()).sum(),
            families: model.families.len(),
            count_accessors: model.families.len(),
            get_accessors: model.getter_count(),
            set_accessors: model.setter_count(),
            max_depth: model
                .families
                .iter()
                .map(|f| f.path.depth())
                .max()
                .unwrap_or(0),
        }
    }

    pub fn accessors(&self) -> usize {
        self.count_accessors + self.get_accessors + self.set_accessors
    }
}
