//! Rust emitter for metagen.
//!
//! Turns a compiled schema ([`SchemaIR`](metagen_ir::SchemaIR) plus
//! [`AccessorModel`](metagen_ir::AccessorModel)) into a module of Rust
//! source files: `MetadataRetrieve` and `MetadataStore` traits, the
//! `AggregateMetadata` fan-out delegate, the dummy, filter and in-memory
//! delegates, and `convert_metadata` for copying one view into a store.

mod accessors;
mod generator;
mod naming;
mod rust_file;
mod type_mapper;

pub mod ast;
pub mod files;

pub use generator::Generator;
pub use metagen_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
pub use naming::RUST_NAMING;
pub use rust_file::{RawCode, RustFile, Use};
pub use type_mapper::RustTypeMapper;
