use std::path::{Path, PathBuf};

use metagen_core::GeneratedFile;

use crate::rust_file::{RawCode, RustFile};

/// The `mod.rs` tying the generated modules together.
pub struct ModRs {
    has_enums: bool,
}

impl ModRs {
    pub fn new(has_enums: bool) -> Self {
        Self { has_enums }
    }
}

impl GeneratedFile for ModRs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("mod.rs")
    }

    fn render(&self) -> String {
        let mut exports = vec![
            "pub use aggregate::{AggregateMetadata, RetrieveOnly, StoreOnly};",
            "pub use converter::convert_metadata;",
            "pub use dummy::DummyMetadata;",
        ];
        if self.has_enums {
            exports.push("pub use enums::*;");
        }
        exports.extend([
            "pub use filter::FilterMetadata;",
            "pub use memory::InMemoryMetadata;",
            "pub use retrieve::MetadataRetrieve;",
            "pub use store::MetadataStore;",
        ]);

        RustFile::new()
            .add(RawCode::lines([
                "pub mod aggregate;",
                "pub mod converter;",
                "pub mod dummy;",
                "pub mod enums;",
                "pub mod filter;",
                "pub mod memory;",
                "pub mod retrieve;",
                "pub mod store;",
            ]))
            .add(RawCode::lines(exports))
            .render()
    }
}
