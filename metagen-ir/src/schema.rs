//! Resolved schema representation.
//!
//! The schema IR is the loaded schema with every entity's containment paths
//! worked out. It is produced by the resolve phase and consumed by the
//! accessor synthesizer.

use serde::Serialize;

use crate::{Cardinality, IndexParam, ValueType};

/// Schema IR - entities with their resolved containment paths.
#[derive(Debug, Clone, Serialize)]
pub struct SchemaIR {
    /// Schema metadata.
    pub meta: SchemaMeta,
    /// Name of the document root.
    pub root: String,
    /// Enumerations in declaration order.
    pub enums: Vec<EnumIR>,
    /// Entities in declaration order.
    pub entities: Vec<EntityIR>,
}

impl SchemaIR {
    /// Look up an entity by name.
    pub fn entity(&self, name: &str) -> Option<&EntityIR> {
        self.entities.iter().find(|e| e.name == name)
    }

    /// Entities reachable through more than one path.
    pub fn multi_path_entities(&self) -> impl Iterator<Item = &EntityIR> {
        self.entities.iter().filter(|e| e.is_multi_path())
    }

    /// Total number of containment paths across all entities.
    pub fn path_count(&self) -> usize {
        self.entities.iter().map(|e| e.paths.len()).sum()
    }
}

/// Schema metadata.
#[derive(Debug, Clone, Serialize)]
pub struct SchemaMeta {
    /// Schema name.
    pub name: String,
    /// Free-form version string.
    pub version: Option<String>,
    /// Description used in generated documentation.
    pub description: Option<String>,
}

/// An enumeration.
#[derive(Debug, Clone, Serialize)]
pub struct EnumIR {
    pub name: String,
    pub values: Vec<String>,
    pub description: Option<String>,
}

/// An entity with its resolved containment paths.
#[derive(Debug, Clone, Serialize)]
pub struct EntityIR {
    /// Entity name.
    pub name: String,
    /// Description for generated documentation.
    pub description: Option<String>,
    /// Declared parents in declaration order.
    pub parents: Vec<String>,
    /// Properties in declaration order.
    pub properties: Vec<PropertyIR>,
    /// Containment paths from the root, ordered by parent declaration order.
    pub paths: Vec<ContainmentPath>,
}

impl EntityIR {
    /// Returns true if the entity is reachable through more than one path.
    pub fn is_multi_path(&self) -> bool {
        self.paths.len() > 1
    }

    /// Returns true if the entity declares more than one parent.
    pub fn has_multiple_parents(&self) -> bool {
        self.parents.len() > 1
    }
}

/// A property of an entity.
#[derive(Debug, Clone, Serialize)]
pub struct PropertyIR {
    /// Property name.
    pub name: String,
    /// Value type.
    pub ty: ValueType,
    /// Scalar or repeated.
    pub cardinality: Cardinality,
    /// Description for generated documentation.
    pub description: Option<String>,
}

/// One step of a containment path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PathStep {
    /// Entity at this level.
    pub entity: String,
    /// Name of the index parameter selecting the entity (e.g. `well_index`).
    pub index: String,
}

/// Ordered steps from the document root down to an entity.
///
/// The root contributes no step, so a root-level entity has a single-step
/// path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct ContainmentPath {
    pub steps: Vec<PathStep>,
}

impl ContainmentPath {
    pub fn new(steps: Vec<PathStep>) -> Self {
        Self { steps }
    }

    /// Number of containment levels.
    pub fn depth(&self) -> usize {
        self.steps.len()
    }

    /// The entity the path leads to.
    pub fn target(&self) -> Option<&PathStep> {
        self.steps.last()
    }

    /// The path to the enclosing entity, or `None` for root-level entities.
    pub fn parent(&self) -> Option<ContainmentPath> {
        match self.steps.split_last() {
            Some((_, rest)) if !rest.is_empty() => Some(Self::new(rest.to_vec())),
            _ => None,
        }
    }

    /// Index parameters for the full chain.
    pub fn params(&self) -> Vec<IndexParam> {
        self.steps
            .iter()
            .map(|step| IndexParam {
                name: step.index.clone(),
                entity: step.entity.clone(),
            })
            .collect()
    }

    /// Entity names along the path, joined with `/`.
    pub fn display(&self) -> String {
        self.steps
            .iter()
            .map(|s| s.entity.as_str())
            .collect::<Vec<_>>()
            .join("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(entity: &str, index: &str) -> PathStep {
        PathStep {
            entity: entity.into(),
            index: index.into(),
        }
    }

    #[test]
    fn test_containment_path_parent() {
        let path = ContainmentPath::new(vec![
            step("Plate", "plate_index"),
            step("Well", "well_index"),
        ]);
        let parent = path.parent().unwrap();
        assert_eq!(parent.display(), "Plate");
        assert!(parent.parent().is_none());
        assert_eq!(path.target().unwrap().entity, "Well");
    }

    #[test]
    fn test_containment_path_params() {
        let path = ContainmentPath::new(vec![
            step("Instrument", "instrument_index"),
            step("AnnotationRef", "annotation_ref_index"),
        ]);
        let names: Vec<_> = path.params().into_iter().map(|p| p.name).collect();
        assert_eq!(names, ["instrument_index", "annotation_ref_index"]);
        assert_eq!(path.display(), "Instrument/AnnotationRef");
        assert_eq!(path.depth(), 2);
    }
}
