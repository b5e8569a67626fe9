use std::path::{Path, PathBuf};

use metagen_core::GeneratedFile;
use metagen_ir::AccessorModel;

use super::uses;
use crate::{
    accessors::{family_comment, set_fn, set_root_fn},
    ast::Trait,
    rust_file::RustFile,
};

/// `store.rs`: the `MetadataStore` capability trait.
pub struct StoreRs<'a> {
    schema_name: &'a str,
    model: &'a AccessorModel,
}

impl<'a> StoreRs<'a> {
    pub fn new(schema_name: &'a str, model: &'a AccessorModel) -> Self {
        Self { schema_name, model }
    }
}

impl GeneratedFile for StoreRs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("store.rs")
    }

    fn render(&self) -> String {
        let mut store = Trait::new("MetadataStore")
            .doc(format!("Write access to {} metadata.", self.schema_name))
            .method(
                set_root_fn()
                    .doc("Replace the opaque root object of the metadata document.")
                    .declaration(),
            );

        for family in &self.model.families {
            if family.setters.is_empty() {
                continue;
            }
            let methods = family.setters.iter().map(|s| set_fn(s).declaration());
            store = store.group(Some(family_comment(family).as_str()), methods);
        }

        RustFile::new()
            .use_stmt(uses::runtime_root())
            .add(store)
            .render()
    }
}
