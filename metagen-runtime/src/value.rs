//! Value types the schema treats as opaque.

use std::{any::Any, fmt, sync::Arc};

/// A numeric value with a unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Quantity {
    pub value: f64,
    pub unit: String,
}

impl Quantity {
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

/// Opaque handle to the root object of a metadata document.
///
/// Stores decide what their root is; callers downcast to the concrete type.
#[derive(Clone)]
pub struct Root(Arc<dyn Any + Send + Sync>);

impl Root {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self(Arc::new(value))
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }
}

impl fmt::Debug for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Root").finish_non_exhaustive()
    }
}

/// Strip control characters, keeping tabs and newlines.
pub fn sanitize(value: &str) -> String {
    value
        .chars()
        .filter(|&c| !c.is_control() || matches!(c, '\t' | '\n'))
        .collect()
}
