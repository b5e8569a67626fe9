//! Synthesize phase - derives accessor families from the resolved IR.
//!
//! Every (entity, path) pair becomes one [`AccessorFamily`]: a count
//! accessor over the enclosing indices, and a get/set pair per property over
//! the full index chain.

use std::collections::HashMap;

use eyre::Result;
use metagen_core::{to_pascal_case, to_snake_case};
use metagen_ir::{
    AccessorFamily, AccessorModel, ContainmentPath, CountAccessor, EntityIR, GetAccessor,
    SchemaIR, SetAccessor,
};
use thiserror::Error;
use tracing::debug;

use crate::pipeline::{CompilationContext, Phase};

/// Accessor names reserved by the generated capability traits.
const RESERVED_ACCESSORS: &[&str] = &["root", "set_root"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SynthesizeError {
    /// Two families or accessors ended up with the same name.
    #[error("name '{name}' is produced by both {first} and {second}")]
    Collision {
        name: String,
        first: String,
        second: String,
    },
}

/// Phase that builds the [`AccessorModel`] from the resolved schema.
pub struct SynthesizePhase;

impl Phase for SynthesizePhase {
    fn name(&self) -> &'static str {
        "synthesize"
    }

    fn description(&self) -> &'static str {
        "Derive count, get and set accessors for every entity path"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let model = synthesize_model(ctx.ir()?)?;
        debug!(
            families = model.families.len(),
            accessors = model.accessor_count(),
            "synthesized accessor model"
        );
        ctx.model = Some(model);
        Ok(())
    }
}

/// Build one accessor family per (entity, path) pair.
///
/// Families are ordered by entity declaration order, then path order.
pub fn synthesize_model(ir: &SchemaIR) -> Result<AccessorModel, SynthesizeError> {
    let mut families = Vec::with_capacity(ir.path_count());

    for entity in &ir.entities {
        for path in &entity.paths {
            families.push(build_family(ir, entity, path));
        }
    }

    link_parents(&mut families);

    let model = AccessorModel { families };
    check_collisions(&model)?;
    Ok(model)
}

/// Family name for an entity reached through `path`.
///
/// Each step whose entity declares several parents is prefixed with the
/// parent it was reached through, so `Instrument/AnnotationRef` becomes
/// `InstrumentAnnotationRef`. Entities on single-parent chains keep their
/// plain name.
pub fn family_name(ir: &SchemaIR, path: &ContainmentPath) -> String {
    let mut parts: Vec<&str> = Vec::new();

    let last = path.depth().saturating_sub(1);
    for (i, step) in path.steps.iter().enumerate() {
        let multi_parent = ir
            .entity(&step.entity)
            .is_some_and(EntityIR::has_multiple_parents);

        if multi_parent {
            // A root-level step was reached through the root, which needs no name
            if i > 0 {
                push_part(&mut parts, &path.steps[i - 1].entity);
            }
            push_part(&mut parts, &step.entity);
        } else if i == last {
            push_part(&mut parts, &step.entity);
        }
    }

    parts.concat()
}

fn push_part<'a>(parts: &mut Vec<&'a str>, name: &'a str) {
    if parts.last() != Some(&name) {
        parts.push(name);
    }
}

fn build_family(ir: &SchemaIR, entity: &EntityIR, path: &ContainmentPath) -> AccessorFamily {
    let name = family_name(ir, path);
    let params = path.params();
    let mut count_params = params.clone();
    count_params.pop();

    let getters = entity
        .properties
        .iter()
        .map(|prop| GetAccessor {
            name: format!("{}{}", name, to_pascal_case(&prop.name)),
            property: prop.name.clone(),
            ty: prop.ty.clone(),
            cardinality: prop.cardinality,
            params: params.clone(),
        })
        .collect();

    let setters = entity
        .properties
        .iter()
        .map(|prop| SetAccessor {
            name: format!("Set{}{}", name, to_pascal_case(&prop.name)),
            property: prop.name.clone(),
            value: to_snake_case(&prop.name),
            ty: prop.ty.clone(),
            cardinality: prop.cardinality,
            params: params.clone(),
        })
        .collect();

    AccessorFamily {
        entity: entity.name.clone(),
        count: CountAccessor {
            name: format!("{name}Count"),
            params: count_params,
        },
        name,
        path: path.clone(),
        parent: None,
        description: entity.description.clone(),
        getters,
        setters,
    }
}

/// Point every family at the family of its enclosing path.
fn link_parents(families: &mut [AccessorFamily]) {
    let by_path: HashMap<ContainmentPath, usize> = families
        .iter()
        .enumerate()
        .map(|(i, f)| (f.path.clone(), i))
        .collect();

    for family in families.iter_mut() {
        family.parent = family
            .path
            .parent()
            .and_then(|parent| by_path.get(&parent).copied());
    }
}

fn check_collisions(model: &AccessorModel) -> Result<(), SynthesizeError> {
    let mut families: HashMap<&str, String> = HashMap::new();
    let mut accessors: HashMap<String, String> = RESERVED_ACCESSORS
        .iter()
        .map(|name| (name.to_string(), "the root accessors".to_string()))
        .collect();

    for family in &model.families {
        let owner = format!("{} ({})", family.entity, family.path.display());
        if let Some(first) = families.insert(&family.name, owner.clone()) {
            return Err(SynthesizeError::Collision {
                name: family.name.clone(),
                first,
                second: owner,
            });
        }

        let names = std::iter::once(&family.count.name)
            .chain(family.getters.iter().map(|g| &g.name))
            .chain(family.setters.iter().map(|s| &s.name));
        for name in names {
            let method = to_snake_case(name);
            let accessor = format!("{owner} accessor {name}");
            if let Some(first) = accessors.insert(method.clone(), accessor.clone()) {
                return Err(SynthesizeError::Collision {
                    name: method,
                    first,
                    second: accessor,
                });
            }
        }

        for setter in &family.setters {
            if let Some(index) = setter.params.iter().find(|p| p.name == setter.value) {
                return Err(SynthesizeError::Collision {
                    name: setter.value.clone(),
                    first: format!("the index of {}", index.entity),
                    second: format!("the value of {}", setter.name),
                });
            }
        }
    }

    Ok(())
}
