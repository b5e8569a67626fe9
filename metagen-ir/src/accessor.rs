//! Accessor model.
//!
//! One [`AccessorFamily`] exists per (entity, containment path) pair. Each
//! family carries a count accessor and a get/set pair per property.

use serde::Serialize;

use crate::{Cardinality, ContainmentPath, IndexParam, ValueType};

/// All accessor families synthesized from a schema.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AccessorModel {
    /// Families in entity declaration order, then path order.
    pub families: Vec<AccessorFamily>,
}

impl AccessorModel {
    /// Look up a family by name.
    pub fn family(&self, name: &str) -> Option<&AccessorFamily> {
        self.families.iter().find(|f| f.name == name)
    }

    /// Families generated for the given entity, in path order.
    pub fn families_for<'a>(&'a self, entity: &'a str) -> impl Iterator<Item = &'a AccessorFamily> {
        self.families.iter().filter(move |f| f.entity == entity)
    }

    /// Walk from a family up through its ancestors, nearest first.
    pub fn ancestors(&self, family: &AccessorFamily) -> Vec<&AccessorFamily> {
        let mut chain = Vec::new();
        let mut next = family.parent;
        while let Some(index) = next {
            let Some(parent) = self.families.get(index) else {
                break;
            };
            chain.push(parent);
            next = parent.parent;
        }
        chain
    }

    /// Number of get accessors across all families.
    pub fn getter_count(&self) -> usize {
        self.families.iter().map(|f| f.getters.len()).sum()
    }

    /// Number of set accessors across all families.
    pub fn setter_count(&self) -> usize {
        self.families.iter().map(|f| f.setters.len()).sum()
    }

    /// Total number of accessors, counts included.
    pub fn accessor_count(&self) -> usize {
        self.families.len() + self.getter_count() + self.setter_count()
    }
}

/// The accessors for one entity reached through one containment path.
#[derive(Debug, Clone, Serialize)]
pub struct AccessorFamily {
    /// Entity the family accesses.
    pub entity: String,
    /// Family name: the entity name with any disambiguating parents
    /// prepended (e.g. `InstrumentAnnotationRef`).
    pub name: String,
    /// Containment path the family follows.
    pub path: ContainmentPath,
    /// Index into [`AccessorModel::families`] of the enclosing entity's
    /// family along this path. `None` for root-level entities.
    pub parent: Option<usize>,
    /// Description carried over from the entity.
    pub description: Option<String>,
    pub count: CountAccessor,
    pub getters: Vec<GetAccessor>,
    pub setters: Vec<SetAccessor>,
}

impl AccessorFamily {
    /// Index parameters for the full chain, the entity's own index last.
    pub fn params(&self) -> Vec<IndexParam> {
        self.path.params()
    }
}

/// Counts the entity's instances under a given chain of ancestors.
///
/// Takes every index of the path except the entity's own.
#[derive(Debug, Clone, Serialize)]
pub struct CountAccessor {
    /// Accessor name stem (e.g. `WellCount`).
    pub name: String,
    pub params: Vec<IndexParam>,
}

/// Reads one property through the full index chain.
#[derive(Debug, Clone, Serialize)]
pub struct GetAccessor {
    /// Accessor name stem (e.g. `WellColor`).
    pub name: String,
    /// Property the accessor reads.
    pub property: String,
    pub ty: ValueType,
    pub cardinality: Cardinality,
    pub params: Vec<IndexParam>,
}

/// Writes one property through the full index chain.
#[derive(Debug, Clone, Serialize)]
pub struct SetAccessor {
    /// Accessor name stem (e.g. `SetWellColor`).
    pub name: String,
    /// Property the accessor writes.
    pub property: String,
    /// Name of the value parameter (e.g. `color`).
    pub value: String,
    pub ty: ValueType,
    pub cardinality: Cardinality,
    pub params: Vec<IndexParam>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PathStep;

    fn family(name: &str, entity: &str, steps: &[&str], parent: Option<usize>) -> AccessorFamily {
        let path = ContainmentPath::new(
            steps
                .iter()
                .map(|e| PathStep {
                    entity: e.to_string(),
                    index: format!("{}_index", e.to_lowercase()),
                })
                .collect(),
        );
        let mut params = path.params();
        params.pop();
        AccessorFamily {
            entity: entity.into(),
            name: name.into(),
            path,
            parent,
            description: None,
            count: CountAccessor {
                name: format!("{name}Count"),
                params,
            },
            getters: vec![],
            setters: vec![],
        }
    }

    #[test]
    fn test_ancestors_nearest_first() {
        let model = AccessorModel {
            families: vec![
                family("Plate", "Plate", &["Plate"], None),
                family("Well", "Well", &["Plate", "Well"], Some(0)),
                family("WellSample", "WellSample", &["Plate", "Well", "WellSample"], Some(1)),
            ],
        };

        let names: Vec<_> = model
            .ancestors(&model.families[2])
            .into_iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(names, ["Well", "Plate"]);
        assert!(model.ancestors(&model.families[0]).is_empty());
    }

    #[test]
    fn test_families_for_entity() {
        let model = AccessorModel {
            families: vec![
                family("Instrument", "Instrument", &["Instrument"], None),
                family("InstrumentAnnotationRef", "AnnotationRef", &["Instrument", "AnnotationRef"], Some(0)),
                family("LightSource", "LightSource", &["LightSource"], None),
                family("LightSourceAnnotationRef", "AnnotationRef", &["LightSource", "AnnotationRef"], Some(2)),
            ],
        };

        let names: Vec<_> = model
            .families_for("AnnotationRef")
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(names, ["InstrumentAnnotationRef", "LightSourceAnnotationRef"]);
        assert!(model.family("LightSource").is_some());
        assert_eq!(model.accessor_count(), 4);
    }
}
