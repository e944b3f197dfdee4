//! Property domain markers.
//!
//! Vertex properties and edge properties share one encoding and one list
//! implementation, but they are logically distinct identifier spaces: a
//! handle from one domain must never be comparable with a handle from the
//! other. [`PropertyDomain`] and [`SchemaTypeId`] tie each domain marker
//! to its concrete type-identifier type, in both directions, so the
//! shared components can be written once and instantiated per domain
//! while call sites stay free of type annotations.

use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use super::id::{EdgeTypeId, VertexTypeId};

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::VertexDomain {}
    impl Sealed for super::EdgeDomain {}
    impl Sealed for super::VertexTypeId {}
    impl Sealed for super::EdgeTypeId {}
}

/// A property identifier domain: vertex properties or edge properties.
///
/// Implemented only by [`VertexDomain`] and [`EdgeDomain`]; the trait is
/// sealed.
pub trait PropertyDomain: sealed::Sealed + Copy + Eq + Hash + fmt::Debug {
    /// Identifier type for the schema types of this domain.
    type TypeId: SchemaTypeId<Domain = Self>;
}

/// A schema-type identifier tied to its property domain.
///
/// Implemented only by [`VertexTypeId`] and [`EdgeTypeId`]; the trait is
/// sealed. The back-reference to [`SchemaTypeId::Domain`] lets generic
/// functions taking a type id recover the domain of the handles they
/// produce.
pub trait SchemaTypeId: sealed::Sealed + Copy + Eq + Hash + fmt::Debug {
    /// The property domain this identifier belongs to.
    type Domain: PropertyDomain<TypeId = Self>;

    /// Wrap a raw index as a type identifier.
    fn from_raw(raw: u32) -> Self;

    /// Unwrap this identifier to its raw index.
    fn as_raw(self) -> u32;
}

/// Marker for the vertex-property domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum VertexDomain {}

impl PropertyDomain for VertexDomain {
    type TypeId = VertexTypeId;
}

impl SchemaTypeId for VertexTypeId {
    type Domain = VertexDomain;

    #[inline]
    fn from_raw(raw: u32) -> Self {
        VertexTypeId::new(raw)
    }

    #[inline]
    fn as_raw(self) -> u32 {
        self.as_u32()
    }
}

/// Marker for the edge-property domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EdgeDomain {}

impl PropertyDomain for EdgeDomain {
    type TypeId = EdgeTypeId;
}

impl SchemaTypeId for EdgeTypeId {
    type Domain = EdgeDomain;

    #[inline]
    fn from_raw(raw: u32) -> Self {
        EdgeTypeId::new(raw)
    }

    #[inline]
    fn as_raw(self) -> u32 {
        self.as_u32()
    }
}
