use std::path::{Path, PathBuf};

use metagen_core::GeneratedFile;
use metagen_ir::AccessorModel;

use super::{delegate_impl, uses};
use crate::{
    RustTypeMapper,
    accessors::{
        count_fn, get_fn, index_args, method_name, root_fn, set_args, set_fn, set_root_fn,
        value_name,
    },
    ast::{Field, Fn, Impl, Param, Receiver, Struct},
    rust_file::{RustFile, Use},
};

const DELEGATES: &str = "Vec<Box<dyn Delegate<dyn MetadataRetrieve, dyn MetadataStore>>>";

/// `aggregate.rs`: `AggregateMetadata` and the single-role wrappers.
pub struct AggregateRs<'a> {
    model: &'a AccessorModel,
}

impl<'a> AggregateRs<'a> {
    pub fn new(model: &'a AccessorModel) -> Self {
        Self { model }
    }

    fn aggregate_struct(&self) -> Struct {
        Struct::new("AggregateMetadata")
            .doc(
                "Fans metadata calls out to a fixed list of delegates.\n\n\
                 Reads return the first answer from a delegate that can retrieve,\n\
                 in registration order. Writes reach every delegate that can store.\n\
                 The root object belongs to no single delegate, so the root\n\
                 accessors always fail.",
            )
            .derives(["Debug", "Default"])
            .field(Field::new(
                "delegates",
                "Aggregate<dyn MetadataRetrieve, dyn MetadataStore>",
            ))
    }

    fn inherent_impl(&self) -> Impl {
        Impl::new("AggregateMetadata")
            .method(
                Fn::new("new")
                    .doc("Create an aggregate over `delegates`, consulted in order.")
                    .param(Param::new("delegates", DELEGATES))
                    .returns("Self")
                    .body_line("Self {")
                    .body_line("    delegates: Aggregate::new(delegates),")
                    .body_line("}"),
            )
            .method(
                Fn::method("len", Receiver::Ref)
                    .public()
                    .returns("usize")
                    .body_line("self.delegates.len()"),
            )
            .method(
                Fn::method("is_empty", Receiver::Ref)
                    .public()
                    .returns("bool")
                    .body_line("self.delegates.is_empty()"),
            )
            .method(
                Fn::method("delegate", Receiver::Ref)
                    .public()
                    .doc("The delegate registered at `index`.")
                    .param(Param::new("index", "usize"))
                    .returns("Option<&dyn Delegate<dyn MetadataRetrieve, dyn MetadataStore>>")
                    .body_line("self.delegates.get(index)"),
            )
    }

    fn retrieve_impl(&self) -> Impl {
        let mut block = Impl::new("AggregateMetadata")
            .for_trait("MetadataRetrieve")
            .method(root_fn().body_line(unsupported("root")));

        for family in &self.model.families {
            block = block.method(count_fn(family).body_line(format!(
                "self.delegates.first(|d| d.{}({}))",
                method_name(&family.count.name),
                index_args(&family.count.params)
            )));
            for getter in &family.getters {
                block = block.method(get_fn(getter).body_line(format!(
                    "self.delegates.first(|d| d.{}({}))",
                    method_name(&getter.name),
                    index_args(&getter.params)
                )));
            }
        }
        block
    }

    fn store_impl(&self) -> Impl {
        let mut block = Impl::new("AggregateMetadata").for_trait("MetadataStore").method(
            set_root_fn()
                .unused_params()
                .body_line(unsupported("set_root")),
        );

        let mapper = RustTypeMapper;
        for setter in self.model.families.iter().flat_map(|f| &f.setters) {
            let value = value_name(setter);
            // Non-copy values are cloned once per delegate
            let arg = if mapper.is_copy(&setter.ty, setter.cardinality) {
                value
            } else {
                format!("{value}.clone()")
            };
            block = block.method(set_fn(setter).body_line(format!(
                "self.delegates.broadcast(|d| d.{}({}));",
                method_name(&setter.name),
                set_args(setter, &arg)
            )));
        }
        block
    }
}

fn unsupported(operation: &str) -> String {
    format!("Err(Unsupported::new({operation:?}, \"AggregateMetadata\"))")
}

/// A wrapper struct exposing one capability of the wrapped value.
fn wrapper(name: &str, doc: &str) -> Struct {
    Struct::new(name)
        .generics("T")
        .doc(doc)
        .derives(["Debug", "Default"])
        .field(Field::new("inner", "T").public())
}

impl GeneratedFile for AggregateRs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("aggregate.rs")
    }

    fn render(&self) -> String {
        RustFile::new()
            .use_stmts([
                Use::new("metagen_runtime").symbols(["Aggregate", "Delegate", "Root", "Unsupported"]),
                uses::retrieve(),
                uses::store(),
            ])
            .add(self.aggregate_struct())
            .add(self.inherent_impl())
            .add(self.retrieve_impl())
            .add(self.store_impl())
            .add(delegate_impl("AggregateMetadata", None, Some("self"), Some("self")))
            .add(wrapper(
                "RetrieveOnly",
                "Registers a value as a delegate that only answers reads.",
            ))
            .add(delegate_impl(
                "RetrieveOnly<T>",
                Some("T: MetadataRetrieve + 'static"),
                Some("&self.inner"),
                None,
            ))
            .add(wrapper(
                "StoreOnly",
                "Registers a value as a delegate that only receives writes.",
            ))
            .add(delegate_impl(
                "StoreOnly<T>",
                Some("T: MetadataStore + 'static"),
                None,
                Some("&mut self.inner"),
            ))
            .render()
    }
}
