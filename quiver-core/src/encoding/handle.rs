//! Bit-level packing of property handles.
//!
//! A property handle packs its owning type id and the property's local
//! index into a single `u64`:
//!
//! ```text
//! [ type id: high 32 bits ][ local property index: low 32 bits ]
//! ```
//!
//! The packing is bijective over the values the subsystem produces: the
//! schema layer only encodes type ids below the catalog's type count, and
//! every such handle is distinct from [`PropertyHandle::NULL`] (all bits
//! set, type component `u32::MAX`). The codec itself performs no bounds
//! validation; the validated entry points in the schema layer range-check
//! the type id and property index before encoding.
//!
//! The type component is redundant for the lookup contract (callers
//! already know which type they queried) but is encoded so a handle alone
//! can be resolved back to its property table, which the catalog's
//! handle-based metadata lookups rely on.

use crate::types::{PropertyDomain, PropertyHandle, PropertyId, SchemaTypeId};

const TYPE_SHIFT: u32 = 32;
const PROPERTY_MASK: u64 = 0xFFFF_FFFF;

/// Pack a (type id, local index) pair into a property handle.
///
/// Total over its accepted numeric ranges; callers are responsible for
/// range-checking both components against the schema catalog first.
#[inline]
#[must_use]
pub fn encode_handle<T: SchemaTypeId>(ty: T, property: PropertyId) -> PropertyHandle<T::Domain> {
    let raw = (u64::from(ty.as_raw()) << TYPE_SHIFT) | u64::from(property.as_u32());
    PropertyHandle::from_raw(raw)
}

/// Extract the local property index from a handle.
#[inline]
#[must_use]
pub fn decode_property_id<D: PropertyDomain>(handle: PropertyHandle<D>) -> PropertyId {
    PropertyId::new((handle.as_u64() & PROPERTY_MASK) as u32)
}

/// Extract the owning type id from a handle.
#[inline]
#[must_use]
pub fn decode_type_id<D: PropertyDomain>(handle: PropertyHandle<D>) -> D::TypeId {
    <D::TypeId as SchemaTypeId>::from_raw((handle.as_u64() >> TYPE_SHIFT) as u32)
}

impl<D: PropertyDomain> PropertyHandle<D> {
    /// Pack a (type id, local index) pair into a handle.
    ///
    /// Equivalent to [`encode_handle`].
    #[inline]
    #[must_use]
    pub fn new(ty: D::TypeId, property: PropertyId) -> Self {
        encode_handle(ty, property)
    }

    /// The local property index component of this handle.
    #[inline]
    #[must_use]
    pub fn property_id(self) -> PropertyId {
        decode_property_id(self)
    }

    /// The owning type component of this handle.
    #[inline]
    #[must_use]
    pub fn type_id(self) -> D::TypeId {
        decode_type_id(self)
    }
}
