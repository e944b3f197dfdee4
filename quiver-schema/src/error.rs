//! Error types for schema-bounded property operations.

use thiserror::Error;

/// Why a property lookup rejected its input.
///
/// The public lookup functions collapse these to `None` at the outward
/// boundary; the `try_` variants surface them so internal callers and
/// tests can tell rejected input apart from a legitimately empty result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// The type id is not below the domain's type count.
    #[error("type {type_id} out of range (type count {type_count})")]
    TypeOutOfRange {
        /// The rejected raw type id.
        type_id: u32,
        /// The domain's type count at the time of the call.
        type_count: u32,
    },

    /// The property index is not below the type's property count.
    #[error(
        "property {property_id} out of range for type {type_id} (property count {property_count})"
    )]
    PropertyOutOfRange {
        /// The type the property was looked up in.
        type_id: u32,
        /// The rejected raw property index.
        property_id: u32,
        /// The type's property count at the time of the call.
        property_count: u32,
    },
}

/// Result type for schema-bounded property operations.
pub type SchemaResult<T> = Result<T, SchemaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = SchemaError::TypeOutOfRange { type_id: 9, type_count: 3 };
        assert_eq!(err.to_string(), "type 9 out of range (type count 3)");

        let err = SchemaError::PropertyOutOfRange { type_id: 2, property_id: 5, property_count: 3 };
        assert!(err.to_string().contains("property 5"));
        assert!(err.to_string().contains("type 2"));
    }
}
