//! Rust type mapper implementation.

use metagen_codegen::language::TypeMapper;
use metagen_ir::{Cardinality, ValueType};

use crate::RUST_NAMING;

/// Maps schema value types to the Rust types used by generated modules.
///
/// Enumerations live in the generated `enums` module and are referenced from
/// sibling modules as `super::enums::Name`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustTypeMapper;

impl RustTypeMapper {
    /// Whether values of this property can be passed around by copy.
    pub fn is_copy(&self, ty: &ValueType, cardinality: Cardinality) -> bool {
        !cardinality.is_repeated() && !matches!(ty, ValueType::String | ValueType::Quantity { .. })
    }
}

impl TypeMapper for RustTypeMapper {
    fn map_value(&self, ty: &ValueType) -> String {
        match ty {
            ValueType::String => "String".into(),
            ValueType::Bool => "bool".into(),
            ValueType::Int => "i32".into(),
            ValueType::UInt => "u32".into(),
            ValueType::Long => "i64".into(),
            ValueType::Float => "f64".into(),
            ValueType::Enum { name } => format!("super::enums::{}", RUST_NAMING.type_ident(name)),
            ValueType::Quantity { .. } => "metagen_runtime::Quantity".into(),
        }
    }

    fn map_repeated(&self, inner: &str) -> String {
        format!("Vec<{inner}>")
    }

    fn map_optional(&self, inner: &str) -> String {
        format!("Option<{inner}>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_types() {
        let mapper = RustTypeMapper;
        assert_eq!(mapper.map_value(&ValueType::Int), "i32");
        assert_eq!(mapper.map_value(&ValueType::UInt), "u32");
        assert_eq!(mapper.map_value(&ValueType::Long), "i64");
        assert_eq!(mapper.map_value(&ValueType::Float), "f64");
        assert_eq!(
            mapper.map_value(&ValueType::Quantity {
                unit: Some("Length".into())
            }),
            "metagen_runtime::Quantity"
        );
    }

    #[test]
    fn test_property_types() {
        let mapper = RustTypeMapper;
        let detector = ValueType::Enum {
            name: "DetectorType".into(),
        };
        assert_eq!(
            mapper.map_property(&detector, Cardinality::Scalar),
            "super::enums::DetectorType"
        );
        assert_eq!(
            mapper.map_property(&ValueType::String, Cardinality::Repeated),
            "Vec<String>"
        );
        assert_eq!(mapper.map_optional("i32"), "Option<i32>");
    }

    #[test]
    fn test_copy_types() {
        let mapper = RustTypeMapper;
        assert!(mapper.is_copy(&ValueType::Int, Cardinality::Scalar));
        assert!(mapper.is_copy(
            &ValueType::Enum { name: "A".into() },
            Cardinality::Scalar
        ));
        assert!(!mapper.is_copy(&ValueType::String, Cardinality::Scalar));
        assert!(!mapper.is_copy(&ValueType::Int, Cardinality::Repeated));
    }
}
