//! Runtime support for code generated by metagen.
//!
//! Generated metadata modules depend on this crate for delegate dispatch
//! ([`Aggregate`]), the storage tables behind the in-memory store
//! ([`IndexedTable`], [`Occupancy`]), and the opaque value types the schema
//! does not describe ([`Quantity`], [`Root`]).

mod aggregate;
mod error;
mod table;
mod value;

pub use aggregate::{Aggregate, Delegate};
pub use error::Unsupported;
pub use table::{IndexedTable, Occupancy};
pub use value::{Quantity, Root, sanitize};
