use std::path::{Path, PathBuf};

use metagen_codegen::language::TypeMapper;
use metagen_core::GeneratedFile;
use metagen_ir::{AccessorFamily, AccessorModel, SetAccessor};

use super::{delegate_impl, uses};
use crate::{
    RustTypeMapper,
    accessors::{
        count_fn, get_fn, index_chain, method_name, root_fn, set_fn, set_root_fn, value_name,
    },
    ast::{Field, Fn, Impl, Struct},
    rust_file::{RustFile, Use},
};

/// `memory.rs`: a delegate that keeps everything it is given.
///
/// Each count accessor is backed by an `Occupancy` field and each property
/// by an `IndexedTable` field, both named after the accessor.
pub struct MemoryRs<'a> {
    model: &'a AccessorModel,
}

impl<'a> MemoryRs<'a> {
    pub fn new(model: &'a AccessorModel) -> Self {
        Self { model }
    }

    fn fields(&self) -> Vec<Field> {
        let mapper = RustTypeMapper;
        let mut fields = vec![Field::new("root", "Option<Root>")];
        for family in &self.model.families {
            fields.push(Field::new(method_name(&family.count.name), "Occupancy"));
            fields.extend(family.getters.iter().map(|g| {
                let ty = mapper.map_property(&g.ty, g.cardinality);
                Field::new(method_name(&g.name), format!("IndexedTable<{ty}>"))
            }));
        }
        fields
    }

    fn retrieve_impl(&self) -> Impl {
        let mapper = RustTypeMapper;
        let mut block = Impl::new("InMemoryMetadata")
            .for_trait("MetadataRetrieve")
            .method(root_fn().body_line("Ok(self.root.clone())"));

        for family in &self.model.families {
            let count = method_name(&family.count.name);
            block = block.method(count_fn(family).body_line(format!(
                "self.{count}.count({})",
                index_chain(&family.count.params)
            )));
            for getter in &family.getters {
                let take = if mapper.is_copy(&getter.ty, getter.cardinality) {
                    "copied"
                } else {
                    "cloned"
                };
                block = block.method(get_fn(getter).body_line(format!(
                    "self.{}.get({}).{take}()",
                    method_name(&getter.name),
                    index_chain(&getter.params)
                )));
            }
        }
        block
    }

    fn store_impl(&self) -> Impl {
        let mut block = Impl::new("InMemoryMetadata").for_trait("MetadataStore").method(
            set_root_fn()
                .body_line("self.root = Some(root);")
                .body_line("Ok(())"),
        );

        for family in &self.model.families {
            for setter in &family.setters {
                block = block.method(self.set_body(family, setter));
            }
        }
        block
    }

    /// Store the value, then register the entity and every ancestor along
    /// the path so that their counts cover it.
    fn set_body(&self, family: &AccessorFamily, setter: &SetAccessor) -> Fn {
        let table = family
            .getters
            .iter()
            .find(|g| g.property == setter.property)
            .map(|g| method_name(&g.name))
            .unwrap_or_else(|| method_name(setter.name.trim_start_matches("Set")));

        let mut method = set_fn(setter).body_line(format!(
            "self.{table}.set({}, {});",
            index_chain(&setter.params),
            value_name(setter)
        ));

        let levels = std::iter::once(family).chain(self.model.ancestors(family));
        for level in levels {
            let depth = level.path.depth();
            method = method.body_line(format!(
                "self.{}.insert({});",
                method_name(&level.count.name),
                index_chain(setter.params.get(..depth).unwrap_or_default())
            ));
        }
        method
    }
}

impl GeneratedFile for MemoryRs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("memory.rs")
    }

    fn render(&self) -> String {
        RustFile::new()
            .use_stmts([
                Use::new("metagen_runtime").symbols([
                    "Delegate",
                    "IndexedTable",
                    "Occupancy",
                    "Root",
                    "Unsupported",
                ]),
                uses::retrieve(),
                uses::store(),
            ])
            .add(
                Struct::new("InMemoryMetadata")
                    .doc(
                        "Keeps every value written to it, keyed by index chain.\n\n\
                         Setting a property registers the entity and its ancestors, so\n\
                         counts grow to cover the highest index written.",
                    )
                    .derives(["Debug", "Default"])
                    .fields(self.fields()),
            )
            .add(
                Impl::new("InMemoryMetadata").method(
                    Fn::new("new")
                        .returns("Self")
                        .body_line("Self::default()"),
                ),
            )
            .add(self.retrieve_impl())
            .add(self.store_impl())
            .add(delegate_impl("InMemoryMetadata", None, Some("self"), Some("self")))
            .render()
    }
}
