use thiserror::Error;

/// An operation a generated type cannot perform.
///
/// Aggregates return this from their root accessors: the root of a metadata
/// document belongs to exactly one store, so it is neither read through nor
/// broadcast to delegates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{operation} is not supported by {target}")]
pub struct Unsupported {
    /// The operation that was attempted (e.g. `set_root`).
    pub operation: &'static str,
    /// The type it was attempted on.
    pub target: &'static str,
}

impl Unsupported {
    pub fn new(operation: &'static str, target: &'static str) -> Self {
        Self { operation, target }
    }
}
