use std::path::Path;

use eyre::Result;
use metagen_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
use metagen_core::{GeneratedFile, WriteResult};
use metagen_ir::{AccessorModel, SchemaIR};
use tracing::{debug, info};

use crate::files::{
    AggregateRs, ConverterRs, DummyRs, EnumsRs, FilterRs, MemoryRs, ModRs, RetrieveRs, StoreRs,
};

/// Rust emitter for a compiled schema.
///
/// Produces one flat module directory: the capability traits, the
/// delegating aggregate, the dummy, filter and in-memory delegates, and
/// the retrieve-to-store converter.
pub struct Generator<'a> {
    ir: &'a SchemaIR,
    model: &'a AccessorModel,
}

impl<'a> Generator<'a> {
    pub fn new(ir: &'a SchemaIR, model: &'a AccessorModel) -> Self {
        Self { ir, model }
    }

    /// Every emitted file, `mod.rs` first.
    pub fn files(&self) -> Vec<Box<dyn GeneratedFile + 'a>> {
        let name = self.ir.meta.name.as_str();
        vec![
            Box::new(ModRs::new(!self.ir.enums.is_empty())),
            Box::new(EnumsRs::new(&self.ir.enums)),
            Box::new(RetrieveRs::new(name, self.model)),
            Box::new(StoreRs::new(name, self.model)),
            Box::new(AggregateRs::new(self.model)),
            Box::new(DummyRs::new(self.model)),
            Box::new(FilterRs::new(self.model)),
            Box::new(MemoryRs::new(self.model)),
            Box::new(ConverterRs::new(self.model)),
        ]
    }
}

impl LanguageCodegen for Generator<'_> {
    fn language(&self) -> &'static str {
        "rust"
    }

    fn file_extension(&self) -> &'static str {
        "rs"
    }

    fn preview(&self) -> Vec<PreviewFile> {
        self.files()
            .iter()
            .map(|file| PreviewFile {
                path: file.path(Path::new("")).display().to_string(),
                content: file.contents(),
            })
            .collect()
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let mut result = GenerateResult::default();

        for file in self.files() {
            let path = file.path(output_dir);
            let name = file.path(Path::new("")).display().to_string();
            match file.write(output_dir)? {
                WriteResult::Written => result.written.push(name),
                WriteResult::Unchanged => result.unchanged.push(name),
            }
            debug!(path = %path.display(), "emitted");
        }

        info!(
            written = result.written.len(),
            unchanged = result.unchanged.len(),
            dir = %output_dir.display(),
            "generated rust bindings"
        );
        Ok(result)
    }
}
