use std::path::{Path, PathBuf};

use metagen_core::GeneratedFile;
use metagen_ir::AccessorModel;

use super::{delegate_impl, uses};
use crate::{
    accessors::{count_fn, get_fn, root_fn, set_fn, set_root_fn},
    ast::{Impl, Struct},
    rust_file::{RustFile, Use},
};

/// `dummy.rs`: a delegate that knows nothing and discards writes.
pub struct DummyRs<'a> {
    model: &'a AccessorModel,
}

impl<'a> DummyRs<'a> {
    pub fn new(model: &'a AccessorModel) -> Self {
        Self { model }
    }

    fn retrieve_impl(&self) -> Impl {
        let mut block = Impl::new("DummyMetadata")
            .for_trait("MetadataRetrieve")
            .method(root_fn().body_line("Ok(None)"));
        for family in &self.model.families {
            block = block.method(count_fn(family).unused_params().body_line("None"));
            for getter in &family.getters {
                block = block.method(get_fn(getter).unused_params().body_line("None"));
            }
        }
        block
    }

    fn store_impl(&self) -> Impl {
        let setters = self
            .model
            .families
            .iter()
            .flat_map(|f| &f.setters)
            .map(|s| set_fn(s).unused_params());
        Impl::new("DummyMetadata")
            .for_trait("MetadataStore")
            .method(set_root_fn().unused_params().body_line("Ok(())"))
            .methods(setters)
    }
}

impl GeneratedFile for DummyRs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("dummy.rs")
    }

    fn render(&self) -> String {
        RustFile::new()
            .use_stmts([
                Use::new("metagen_runtime").symbols(["Delegate", "Root", "Unsupported"]),
                uses::retrieve(),
                uses::store(),
            ])
            .add(
                Struct::new("DummyMetadata")
                    .doc(
                        "Answers every read with `None` and accepts every write without\n\
                         keeping it.",
                    )
                    .derives(["Debug", "Default", "Clone", "Copy"]),
            )
            .add(self.retrieve_impl())
            .add(self.store_impl())
            .add(delegate_impl("DummyMetadata", None, Some("self"), Some("self")))
            .render()
    }
}
