//! One [`GeneratedFile`](metagen_core::GeneratedFile) per emitted module.
//!
//! Emitted modules refer to each other through `super::`, so they work
//! both as a `mod.rs` tree and when pulled in with `include!`.

mod aggregate_rs;
mod converter_rs;
mod dummy_rs;
mod enums_rs;
mod filter_rs;
mod memory_rs;
mod mod_rs;
mod retrieve_rs;
mod store_rs;

pub use aggregate_rs::AggregateRs;
pub use converter_rs::ConverterRs;
pub use dummy_rs::DummyRs;
pub use enums_rs::EnumsRs;
pub use filter_rs::FilterRs;
pub use memory_rs::MemoryRs;
pub use mod_rs::ModRs;
pub use retrieve_rs::RetrieveRs;
pub use store_rs::StoreRs;

use crate::{
    ast::{Fn, Impl, Receiver},
    rust_file::Use,
};

/// Common use statements for generated files.
pub mod uses {
    use super::Use;

    /// `use metagen_runtime::{Root, Unsupported};`
    pub fn runtime_root() -> Use {
        Use::new("metagen_runtime").symbols(["Root", "Unsupported"])
    }

    /// `use super::retrieve::MetadataRetrieve;`
    pub fn retrieve() -> Use {
        Use::new("super::retrieve").symbol("MetadataRetrieve")
    }

    /// `use super::store::MetadataStore;`
    pub fn store() -> Use {
        Use::new("super::store").symbol("MetadataStore")
    }
}

/// `impl Delegate<..> for <type_name>` exposing the given views.
///
/// `retrieve` and `store` are the expressions returned from `as_retrieve`
/// and `as_store` (e.g. `self` or `&mut self.store`); `None` keeps the
/// trait's default of no view.
pub(crate) fn delegate_impl(
    type_name: &str,
    generics: Option<&str>,
    retrieve: Option<&str>,
    store: Option<&str>,
) -> Impl {
    let mut block = Impl::new(type_name).for_trait("Delegate<dyn MetadataRetrieve, dyn MetadataStore>");
    if let Some(generics) = generics {
        block = block.generics(generics);
    }
    if let Some(view) = retrieve {
        block = block.method(
            Fn::method("as_retrieve", Receiver::Ref)
                .returns("Option<&(dyn MetadataRetrieve + 'static)>")
                .body_line(format!("Some({view})")),
        );
    }
    if let Some(view) = store {
        block = block.method(
            Fn::method("as_store", Receiver::Mut)
                .returns("Option<&mut (dyn MetadataStore + 'static)>")
                .body_line(format!("Some({view})")),
        );
    }
    block
}
