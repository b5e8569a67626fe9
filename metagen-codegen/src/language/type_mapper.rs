//! Value type mapping for target languages.

use metagen_ir::{Cardinality, ValueType};

/// Maps schema value types to a target language's type syntax.
pub trait TypeMapper {
    /// Target type of a single value.
    fn map_value(&self, ty: &ValueType) -> String;

    /// List type wrapping `inner`.
    fn map_repeated(&self, inner: &str) -> String;

    /// Optional type wrapping `inner`, used for accessor results.
    fn map_optional(&self, inner: &str) -> String;

    /// Target type of a property with the given cardinality.
    fn map_property(&self, ty: &ValueType, cardinality: Cardinality) -> String {
        let value = self.map_value(ty);
        match cardinality {
            Cardinality::Scalar => value,
            Cardinality::Repeated => self.map_repeated(&value),
        }
    }
}
