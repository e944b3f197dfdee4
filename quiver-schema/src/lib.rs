//! `QuiverDB` Schema
//!
//! This crate provides the schema-facing property surface of `QuiverDB`:
//! ordered property lists derived from a type's property table, direct
//! by-id property lookup, and the catalog boundary both are written
//! against. Vertex and edge properties run through one generic
//! implementation parameterized by the domain markers of `quiver-core`.
//!
//! # Modules
//!
//! - [`catalog`] - The schema-catalog boundary and an in-memory implementation
//! - [`error`] - Error types
//! - [`list`] - Ordered property lists
//! - [`lookup`] - Direct by-id property lookup

pub mod catalog;
pub mod error;
pub mod list;
pub mod lookup;

// Re-export commonly used items
pub use catalog::{DataType, MemoryCatalog, PropertyDef, SchemaCatalog, TypeCatalog};
pub use error::{SchemaError, SchemaResult};
pub use list::{EdgePropertyList, PropertyList, VertexPropertyList};
pub use lookup::{property_by_id, property_id, try_property_by_id};
