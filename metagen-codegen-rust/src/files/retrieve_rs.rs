use std::path::{Path, PathBuf};

use metagen_core::GeneratedFile;
use metagen_ir::AccessorModel;

use super::uses;
use crate::{
    accessors::{count_fn, family_comment, get_fn, root_fn},
    ast::Trait,
    rust_file::RustFile,
};

/// `retrieve.rs`: the `MetadataRetrieve` capability trait.
pub struct RetrieveRs<'a> {
    schema_name: &'a str,
    model: &'a AccessorModel,
}

impl<'a> RetrieveRs<'a> {
    pub fn new(schema_name: &'a str, model: &'a AccessorModel) -> Self {
        Self { schema_name, model }
    }
}

impl GeneratedFile for RetrieveRs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("retrieve.rs")
    }

    fn render(&self) -> String {
        let mut retrieve = Trait::new("MetadataRetrieve")
            .doc(format!(
                "Read access to {} metadata.\n\n\
                 Counts and values are `None` when the implementor has no answer.",
                self.schema_name
            ))
            .method(
                root_fn()
                    .doc("The opaque root object of the metadata document.")
                    .declaration(),
            );

        for family in &self.model.families {
            let methods = std::iter::once(count_fn(family).declaration())
                .chain(family.getters.iter().map(|g| get_fn(g).declaration()));
            retrieve = retrieve.group(Some(family_comment(family).as_str()), methods);
        }

        RustFile::new()
            .use_stmt(uses::runtime_root())
            .add(retrieve)
            .render()
    }
}
