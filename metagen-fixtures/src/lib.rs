//! Screening metadata bindings generated at build time from
//! `schemas/screening.toml`.
//!
//! The modules below are the emitter's output verbatim, pulled in with
//! `include!` so that the test suite compiles and runs generated code.

macro_rules! generated {
    ($($module:ident),* $(,)?) => {
        $(
            pub mod $module {
                include!(concat!(env!("OUT_DIR"), "/screening/", stringify!($module), ".rs"));
            }
        )*
    };
}

generated!(aggregate, converter, dummy, enums, filter, memory, retrieve, store);

pub use aggregate::{AggregateMetadata, RetrieveOnly, StoreOnly};
pub use converter::convert_metadata;
pub use dummy::DummyMetadata;
pub use enums::*;
pub use filter::FilterMetadata;
pub use memory::InMemoryMetadata;
pub use retrieve::MetadataRetrieve;
pub use store::MetadataStore;
