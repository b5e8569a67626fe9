use std::path::{Path, PathBuf};

use metagen_core::GeneratedFile;
use metagen_ir::{AccessorModel, SetAccessor, ValueType};

use super::{delegate_impl, uses};
use crate::{
    accessors::{method_name, set_args, set_fn, set_root_fn, value_name},
    ast::{Field, Fn, Impl, Param, Receiver, Struct},
    rust_file::{RustFile, Use},
};

const GENERICS: &str = "S: MetadataStore";

/// `filter.rs`: a store wrapper that cleans string values.
pub struct FilterRs<'a> {
    model: &'a AccessorModel,
}

impl<'a> FilterRs<'a> {
    pub fn new(model: &'a AccessorModel) -> Self {
        Self { model }
    }

    fn setters(&self) -> impl Iterator<Item = &SetAccessor> {
        self.model.families.iter().flat_map(|f| &f.setters)
    }

    fn has_strings(&self) -> bool {
        self.setters().any(|s| s.ty == ValueType::String)
    }

    fn inherent_impl(&self) -> Impl {
        let mut block = Impl::new("FilterMetadata<S>")
            .generics(GENERICS)
            .method(
                Fn::new("new")
                    .doc("Wrap `store`. Strings are cleaned only when `filter` is set.")
                    .param(Param::new("store", "S"))
                    .param(Param::new("filter", "bool"))
                    .returns("Self")
                    .body_line("Self { store, filter }"),
            )
            .method(
                Fn::method("inner", Receiver::Ref)
                    .public()
                    .returns("&S")
                    .body_line("&self.store"),
            )
            .method(
                Fn::method("into_inner", Receiver::Value)
                    .public()
                    .returns("S")
                    .body_line("self.store"),
            )
            .method(
                Fn::method("is_filtering", Receiver::Ref)
                    .public()
                    .returns("bool")
                    .body_line("self.filter"),
            );

        if self.has_strings() {
            block = block.method(
                Fn::method("clean", Receiver::Ref)
                    .param(Param::new("value", "String"))
                    .returns("String")
                    .body_line("if self.filter { sanitize(&value) } else { value }"),
            );
        }
        block
    }

    fn store_impl(&self) -> Impl {
        let mut block = Impl::new("FilterMetadata<S>")
            .generics(GENERICS)
            .for_trait("MetadataStore")
            .method(set_root_fn().body_line("self.store.set_root(root)"));

        for setter in self.setters() {
            let value = value_name(setter);
            let mut method = set_fn(setter);
            if setter.ty == ValueType::String {
                method = method.body_line(if setter.cardinality.is_repeated() {
                    format!(
                        "let {value}: Vec<String> = {value}.into_iter().map(|v| self.clean(v)).collect();"
                    )
                } else {
                    format!("let {value} = self.clean({value});")
                });
            }
            block = block.method(method.body_line(format!(
                "self.store.{}({});",
                method_name(&setter.name),
                set_args(setter, &value)
            )));
        }
        block
    }
}

impl GeneratedFile for FilterRs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("filter.rs")
    }

    fn render(&self) -> String {
        let mut runtime = vec!["Delegate", "Root", "Unsupported"];
        if self.has_strings() {
            runtime.push("sanitize");
        }

        RustFile::new()
            .use_stmts([
                Use::new("metagen_runtime").symbols(runtime),
                uses::retrieve(),
                uses::store(),
            ])
            .add(
                Struct::new("FilterMetadata")
                    .generics("S")
                    .doc(
                        "Forwards writes to a single store, stripping control characters\n\
                         other than tabs and newlines from strings when filtering is on.",
                    )
                    .derive("Debug")
                    .field(Field::new("store", "S"))
                    .field(Field::new("filter", "bool")),
            )
            .add(self.inherent_impl())
            .add(self.store_impl())
            .add(delegate_impl(
                "FilterMetadata<S>",
                Some("S: MetadataStore + 'static"),
                None,
                Some("&mut self.store"),
            ))
            .render()
    }
}
