//! Core type definitions.

use serde::Serialize;

/// Semantic value type of a property.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValueType {
    String,
    Bool,
    /// Signed 32-bit integer.
    Int,
    /// Non-negative 32-bit integer.
    UInt,
    /// Signed 64-bit integer.
    Long,
    /// 64-bit float.
    Float,
    /// A schema-declared enumeration.
    Enum { name: String },
    /// Numeric value with a unit, optionally tagged with a unit kind.
    Quantity { unit: Option<String> },
}

impl ValueType {
    /// Short name used in reports and diagnostics.
    pub fn display_name(&self) -> String {
        match self {
            ValueType::String => "string".into(),
            ValueType::Bool => "bool".into(),
            ValueType::Int => "int".into(),
            ValueType::UInt => "uint".into(),
            ValueType::Long => "long".into(),
            ValueType::Float => "float".into(),
            ValueType::Enum { name } => name.clone(),
            ValueType::Quantity { unit: Some(unit) } => format!("quantity<{}>", unit),
            ValueType::Quantity { unit: None } => "quantity".into(),
        }
    }

    /// Returns true for string values, which filtering stores sanitize.
    pub fn is_string(&self) -> bool {
        matches!(self, ValueType::String)
    }
}

/// Whether a property holds one value or a list of values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Cardinality {
    #[default]
    Scalar,
    Repeated,
}

impl Cardinality {
    pub fn is_repeated(&self) -> bool {
        matches!(self, Cardinality::Repeated)
    }
}

/// An integer index parameter of an accessor, one per containment level.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct IndexParam {
    /// Parameter name (e.g. `plate_index`).
    pub name: String,
    /// Entity the index selects.
    pub entity: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_type_display_name() {
        assert_eq!(ValueType::UInt.display_name(), "uint");
        assert_eq!(
            ValueType::Enum {
                name: "DetectorType".into()
            }
            .display_name(),
            "DetectorType"
        );
        assert_eq!(
            ValueType::Quantity {
                unit: Some("Length".into())
            }
            .display_name(),
            "quantity<Length>"
        );
    }

    #[test]
    fn test_cardinality_default_is_scalar() {
        assert_eq!(Cardinality::default(), Cardinality::Scalar);
        assert!(Cardinality::Repeated.is_repeated());
    }
}
