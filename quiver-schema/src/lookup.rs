//! Direct by-id property lookup.
//!
//! The by-id path answers "the property of type T at local index k" via
//! the codec alone, without materializing a property list. It is
//! equivalent to deriving the type's list and indexing it, minus the
//! allocation.

use quiver_core::encoding::{decode_property_id, encode_handle};
use quiver_core::types::{PropertyDomain, PropertyHandle, PropertyId, SchemaTypeId};

use crate::catalog::TypeCatalog;
use crate::error::{SchemaError, SchemaResult};

/// Look up the property of `ty` at local index `property`.
///
/// Returns `Some` iff `ty` is below the domain's type count and
/// `property` is below the type's property count; otherwise `None`, so
/// callers can treat "property absent" and "index invalid" uniformly.
#[must_use]
pub fn property_by_id<T, C>(
    catalog: &C,
    ty: T,
    property: PropertyId,
) -> Option<PropertyHandle<T::Domain>>
where
    T: SchemaTypeId,
    C: TypeCatalog<T::Domain> + ?Sized,
{
    try_property_by_id(catalog, ty, property).ok()
}

/// Look up the property of `ty` at local index `property`, reporting
/// which bound was violated.
///
/// # Errors
///
/// Returns [`SchemaError::TypeOutOfRange`] when `ty` is not below the
/// domain's type count, and [`SchemaError::PropertyOutOfRange`] when the
/// type is valid but `property` is not below its property count.
pub fn try_property_by_id<T, C>(
    catalog: &C,
    ty: T,
    property: PropertyId,
) -> SchemaResult<PropertyHandle<T::Domain>>
where
    T: SchemaTypeId,
    C: TypeCatalog<T::Domain> + ?Sized,
{
    let type_count = catalog.type_count();
    let raw_ty = ty.as_raw();
    if raw_ty >= type_count {
        return Err(SchemaError::TypeOutOfRange { type_id: raw_ty, type_count });
    }

    let property_count = catalog.property_count(ty);
    if property.as_u32() >= property_count {
        return Err(SchemaError::PropertyOutOfRange {
            type_id: raw_ty,
            property_id: property.as_u32(),
            property_count,
        });
    }

    Ok(encode_handle(ty, property))
}

/// The local property index of a handle.
///
/// A pure decode with no validation that the handle was produced for any
/// particular type: passing a handle from the wrong type of the same
/// domain yields that handle's own index. Correct results are guaranteed
/// only for handles legitimately produced by this subsystem.
#[must_use]
pub fn property_id<D: PropertyDomain>(handle: PropertyHandle<D>) -> PropertyId {
    decode_property_id(handle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{DataType, MemoryCatalog, PropertyDef};
    use crate::list::VertexPropertyList;
    use quiver_core::types::VertexTypeId;

    fn sample_catalog() -> MemoryCatalog {
        let mut catalog = MemoryCatalog::new();
        catalog.add_vertex_type(vec![PropertyDef::new("name", DataType::String)]);
        catalog.add_vertex_type(vec![
            PropertyDef::new("title", DataType::String),
            PropertyDef::new("year", DataType::Int),
        ]);
        catalog
    }

    #[test]
    fn lookup_valid_property() {
        let catalog = sample_catalog();
        let ty = VertexTypeId::new(1);
        let handle = property_by_id(&catalog, ty, PropertyId::new(1)).unwrap();
        assert_eq!(handle, PropertyHandle::new(ty, PropertyId::new(1)));
        assert_eq!(property_id(handle), PropertyId::new(1));
    }

    #[test]
    fn lookup_agrees_with_derived_list() {
        let catalog = sample_catalog();
        for raw_ty in 0..2 {
            let ty = VertexTypeId::new(raw_ty);
            let list = VertexPropertyList::for_type(&catalog, ty).unwrap();
            for i in 0..list.len() as u32 {
                assert_eq!(
                    property_by_id(&catalog, ty, PropertyId::new(i)),
                    list.get(i as usize)
                );
            }
        }
    }

    #[test]
    fn lookup_rejects_each_bound_separately() {
        let catalog = sample_catalog();

        let err = try_property_by_id(&catalog, VertexTypeId::new(5), PropertyId::new(0))
            .unwrap_err();
        assert_eq!(err, SchemaError::TypeOutOfRange { type_id: 5, type_count: 2 });

        let err = try_property_by_id(&catalog, VertexTypeId::new(0), PropertyId::new(1))
            .unwrap_err();
        assert_eq!(
            err,
            SchemaError::PropertyOutOfRange { type_id: 0, property_id: 1, property_count: 1 }
        );
    }

    #[test]
    fn lookup_out_of_range_is_none() {
        let catalog = sample_catalog();
        assert!(property_by_id(&catalog, VertexTypeId::new(5), PropertyId::new(0)).is_none());
        assert!(property_by_id(&catalog, VertexTypeId::new(0), PropertyId::new(9)).is_none());
    }
}
