//! Resolve phase - computes containment paths and lowers the schema to IR.
//!
//! Every entity is reached from the document root through its declared
//! parents. Each parent contributes its own paths extended by one step, so
//! an entity below a multi-parent ancestor inherits all of that ancestor's
//! paths. Paths are ordered by parent declaration order, recursively.

use std::collections::HashMap;

use eyre::Result;
use metagen_core::to_snake_case;
use metagen_ir::{
    Cardinality, ContainmentPath, EntityIR, EnumIR, PathStep, PropertyIR, SchemaIR, SchemaMeta,
    ValueType,
};
use metagen_schema::{Entity, Primitive, Property, Schema};
use thiserror::Error;
use tracing::{debug, trace};

use crate::pipeline::{CompilationContext, Diagnostic, Phase};

/// A schema whose containment graph cannot be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// Following parents leads back to an entity already on the path.
    ///
    /// `cycle` lists the entities in parent order and repeats the first one
    /// at the end: `["A", "B", "A"]` means A's parent is B and B's parent is A.
    #[error("containment cycle: {}", .cycle.join(" -> "))]
    Cycle { cycle: Vec<String> },

    #[error("entity '{entity}' has unknown parent '{parent}'")]
    UnknownParent { entity: String, parent: String },

    #[error("entity '{entity}' has no path to the root")]
    Unreachable { entity: String },

    #[error("property '{entity}.{property}' has unknown type '{ty}'")]
    UnknownType {
        entity: String,
        property: String,
        ty: String,
    },
}

/// Phase that resolves containment paths and builds the [`SchemaIR`].
pub struct ResolvePhase;

impl Phase for ResolvePhase {
    fn name(&self) -> &'static str {
        "resolve"
    }

    fn description(&self) -> &'static str {
        "Resolve containment paths from every entity to the root"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let ir = resolve_schema(&ctx.schema)?;

        for entity in ir.multi_path_entities() {
            let paths: Vec<_> = entity.paths.iter().map(|p| p.display()).collect();
            ctx.add_diagnostic(
                Diagnostic::info(
                    self.name(),
                    format!(
                        "entity '{}' is reachable through {} paths: {}",
                        entity.name,
                        entity.paths.len(),
                        paths.join(", ")
                    ),
                )
                .at(format!("entities.{}", entity.name)),
            );
        }

        debug!(
            entities = ir.entities.len(),
            paths = ir.path_count(),
            "resolved containment paths"
        );
        ctx.ir = Some(ir);
        Ok(())
    }
}

/// Name of the index parameter selecting an entity (`Well` -> `well_index`).
pub fn index_param_name(entity: &str) -> String {
    format!("{}_index", to_snake_case(entity))
}

/// Resolve every entity's containment paths and lower the schema to IR.
pub fn resolve_schema(schema: &Schema) -> Result<SchemaIR, ResolveError> {
    let mut resolver = Resolver::new(schema);

    let mut entities = Vec::with_capacity(schema.entities.len());
    for (name, entity) in &schema.entities {
        let paths = resolver.paths_of(name)?;
        if paths.is_empty() {
            return Err(ResolveError::Unreachable {
                entity: name.clone(),
            });
        }

        let properties = entity
            .properties
            .iter()
            .map(|(prop_name, prop)| lower_property(schema, name, prop_name, prop))
            .collect::<Result<Vec<_>, _>>()?;

        entities.push(EntityIR {
            name: name.clone(),
            description: entity.description.clone(),
            parents: entity.parent_names().map(String::from).collect(),
            properties,
            paths,
        });
    }

    Ok(SchemaIR {
        meta: SchemaMeta {
            name: schema.schema.name.clone(),
            version: schema.schema.version.clone(),
            description: schema.schema.description.clone(),
        },
        root: schema.root().to_string(),
        enums: schema
            .enums
            .iter()
            .map(|(name, def)| EnumIR {
                name: name.clone(),
                values: def.values.clone(),
                description: def.description.clone(),
            })
            .collect(),
        entities,
    })
}

fn lower_property(
    schema: &Schema,
    entity: &str,
    name: &str,
    property: &Property,
) -> Result<PropertyIR, ResolveError> {
    let ty = match property.primitive() {
        Some(Primitive::String) => ValueType::String,
        Some(Primitive::Bool) => ValueType::Bool,
        Some(Primitive::Int) => ValueType::Int,
        Some(Primitive::UInt) => ValueType::UInt,
        Some(Primitive::Long) => ValueType::Long,
        Some(Primitive::Float) => ValueType::Float,
        Some(Primitive::Quantity) => ValueType::Quantity {
            unit: property.unit.clone(),
        },
        None if schema.has_enum(&property.ty) => ValueType::Enum {
            name: property.ty.clone(),
        },
        None => {
            return Err(ResolveError::UnknownType {
                entity: entity.to_string(),
                property: name.to_string(),
                ty: property.ty.clone(),
            });
        }
    };

    Ok(PropertyIR {
        name: name.to_string(),
        ty,
        cardinality: if property.repeated {
            Cardinality::Repeated
        } else {
            Cardinality::Scalar
        },
        description: property.description.clone(),
    })
}

/// Depth-first path resolution with memoization and cycle detection.
struct Resolver<'a> {
    schema: &'a Schema,
    resolved: HashMap<&'a str, Vec<ContainmentPath>>,
    /// Entities currently being resolved, outermost first.
    stack: Vec<&'a str>,
}

impl<'a> Resolver<'a> {
    fn new(schema: &'a Schema) -> Self {
        Self {
            schema,
            resolved: HashMap::new(),
            stack: Vec::new(),
        }
    }

    fn paths_of(&mut self, name: &'a str) -> Result<Vec<ContainmentPath>, ResolveError> {
        if let Some(paths) = self.resolved.get(name) {
            return Ok(paths.clone());
        }

        if let Some(pos) = self.stack.iter().position(|n| *n == name) {
            let mut cycle: Vec<String> = self.stack[pos..].iter().map(|n| n.to_string()).collect();
            cycle.push(name.to_string());
            return Err(ResolveError::Cycle { cycle });
        }

        let schema = self.schema;
        let Some(entity) = schema.entity(name) else {
            return Err(ResolveError::Unreachable {
                entity: name.to_string(),
            });
        };

        self.stack.push(name);
        let paths = self.extend_parent_paths(name, entity);
        self.stack.pop();
        let paths = paths?;

        trace!(entity = name, paths = paths.len(), "resolved entity");
        self.resolved.insert(name, paths.clone());
        Ok(paths)
    }

    /// Paths of `name`: each parent's paths, extended by one step.
    fn extend_parent_paths(
        &mut self,
        name: &'a str,
        entity: &'a Entity,
    ) -> Result<Vec<ContainmentPath>, ResolveError> {
        let schema = self.schema;
        let step = PathStep {
            entity: name.to_string(),
            index: index_param_name(name),
        };

        let mut paths = Vec::new();
        for parent in entity.parent_names() {
            if schema.is_root(parent) {
                paths.push(ContainmentPath::new(vec![step.clone()]));
                continue;
            }

            if schema.entity(parent).is_none() {
                return Err(ResolveError::UnknownParent {
                    entity: name.to_string(),
                    parent: parent.to_string(),
                });
            }

            for mut path in self.paths_of(parent)? {
                path.steps.push(step.clone());
                paths.push(path);
            }
        }
        Ok(paths)
    }
}
