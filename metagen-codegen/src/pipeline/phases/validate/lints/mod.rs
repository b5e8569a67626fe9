//! Built-in lints for schema validation.

mod missing_description;
mod pascal_case;
mod unused_enum;

pub use missing_description::MissingDescriptionLint;
pub use pascal_case::PascalCaseLint;
pub use unused_enum::UnusedEnumLint;
