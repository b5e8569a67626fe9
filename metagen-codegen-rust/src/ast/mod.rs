//! Rust AST builders for generating traits, structs, enums, impls, and
//! functions.
//!
//! Each node implements [`Renderable`](metagen_codegen::builder::Renderable)
//! and is turned into text by a `CodeBuilder`.

mod enums;
mod fns;
mod impls;
mod structs;
mod traits;

pub use enums::{Arm, Enum, Match, Variant};
pub use fns::{Fn, Param, Receiver};
pub use impls::Impl;
pub use structs::{Field, Struct};
pub use traits::Trait;
