//! `QuiverDB` Core
//!
//! This crate provides the identifier types and the handle codec for the
//! property subsystem of a typed property graph: the mapping between an
//! opaque property handle exposed to callers and the internal pair of
//! (owning type id, local property index) used by the schema tables.
//!
//! # Modules
//!
//! - [`types`] - Domain markers, identifier newtypes, and the opaque handle
//! - [`encoding`] - Bit-level handle packing and unpacking

pub mod encoding;
pub mod types;

// Re-export commonly used items
pub use encoding::{decode_property_id, decode_type_id, encode_handle};
pub use types::{
    EdgeDomain, EdgePropertyHandle, EdgeTypeId, PropertyDomain, PropertyHandle, PropertyId,
    SchemaTypeId, VertexDomain, VertexPropertyHandle, VertexTypeId,
};
