use std::path::{Path, PathBuf};

use metagen_codegen::builder::{CodeBuilder, CodeFragment};
use metagen_core::GeneratedFile;
use metagen_ir::{AccessorFamily, AccessorModel};

use super::uses;
use crate::{
    accessors::{index_args, index_params, method_name, set_args, value_name},
    ast::{Fn, Param},
    rust_file::RustFile,
};

/// `converter.rs`: copies everything a retrieve view holds into a store.
pub struct ConverterRs<'a> {
    model: &'a AccessorModel,
}

impl<'a> ConverterRs<'a> {
    pub fn new(model: &'a AccessorModel) -> Self {
        Self { model }
    }

    /// Families nested directly under the family at `parent`.
    fn children(&self, parent: Option<usize>) -> impl Iterator<Item = (usize, &AccessorFamily)> {
        self.model
            .families
            .iter()
            .enumerate()
            .filter(move |(_, f)| f.parent == parent)
    }

    fn entry_fn(&self) -> Fn {
        let mut entry = io_params(Fn::new("convert_metadata")).doc(
            "Copy every value `src` holds into `dest`.\n\n\
             Each family is walked up to its count under every ancestor index;\n\
             absent values are skipped.",
        );
        let mut calls = self.children(None).peekable();
        if calls.peek().is_none() {
            return entry.unused_params();
        }
        for (_, family) in calls {
            entry = entry.body_line(format!("{}(src, dest);", converter_name(family)));
        }
        entry
    }

    /// Loop over one family's instances, copying their values and
    /// descending into nested families.
    fn family_fn(&self, index: usize, family: &AccessorFamily) -> Fn {
        let params = family.params();
        let Some((own, ancestors)) = params.split_last() else {
            return io_params(Fn::new(converter_name(family)).private()).unused_params();
        };

        let mut body = Vec::new();
        for getter in &family.getters {
            let Some(setter) = family.setters.iter().find(|s| s.property == getter.property) else {
                continue;
            };
            let value = value_name(setter);
            body.push(CodeFragment::braced(
                format!(
                    "if let Some({value}) = src.{}({}) {{",
                    method_name(&getter.name),
                    index_args(&getter.params)
                ),
                vec![CodeFragment::line(format!(
                    "dest.{}({});",
                    method_name(&setter.name),
                    set_args(setter, &value)
                ))],
            ));
        }
        for (_, child) in self.children(Some(index)) {
            body.push(CodeFragment::line(format!(
                "{}(src, dest, {});",
                converter_name(child),
                index_args(&params)
            )));
        }

        let index_var = if body.is_empty() { "_" } else { own.name.as_str() };
        let mut builder = CodeBuilder::rust();
        builder.write(CodeFragment::braced(
            format!(
                "for {index_var} in 0..src.{}({}).unwrap_or(0) {{",
                method_name(&family.count.name),
                index_args(ancestors)
            ),
            body,
        ));

        io_params(Fn::new(converter_name(family)).private())
            .params(index_params(ancestors))
            .body(builder.build())
    }
}

fn io_params(f: Fn) -> Fn {
    f.param(Param::new("src", "&dyn MetadataRetrieve"))
        .param(Param::new("dest", "&mut dyn MetadataStore"))
}

fn converter_name(family: &AccessorFamily) -> String {
    method_name(&format!("Copy{}", family.name))
}

impl GeneratedFile for ConverterRs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("converter.rs")
    }

    fn render(&self) -> String {
        let family_fns = self
            .model
            .families
            .iter()
            .enumerate()
            .map(|(i, f)| self.family_fn(i, f));

        RustFile::new()
            .use_stmts([uses::retrieve(), uses::store()])
            .add(self.entry_fn())
            .add_all(family_fns)
            .render()
    }
}
