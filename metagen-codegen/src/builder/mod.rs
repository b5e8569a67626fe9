//! Code generation building blocks.
//!
//! AST nodes implement [`Renderable`] and describe themselves as a tree of
//! [`CodeFragment`]s. A [`CodeBuilder`] flattens that tree into indented text.

mod code_builder;
mod renderable;

pub use code_builder::CodeBuilder;
pub use renderable::{CodeFragment, Renderable};
