//! In-memory schema catalog.

use serde::{Deserialize, Serialize};

use quiver_core::types::{
    EdgeDomain, EdgePropertyHandle, EdgeTypeId, PropertyId, VertexDomain, VertexPropertyHandle,
    VertexTypeId,
};

use super::TypeCatalog;

/// Storable value type of a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    /// Boolean values.
    Bool,
    /// 64-bit signed integers.
    Int,
    /// 64-bit floating point numbers.
    Float,
    /// UTF-8 strings.
    String,
    /// Raw byte strings.
    Bytes,
}

impl DataType {
    /// Get a string representation of the data type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            DataType::Bool => "bool",
            DataType::Int => "int",
            DataType::Float => "float",
            DataType::String => "string",
            DataType::Bytes => "bytes",
        }
    }

    /// Parse a data type from a string.
    #[must_use]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "bool" => Some(DataType::Bool),
            "int" => Some(DataType::Int),
            "float" => Some(DataType::Float),
            "string" => Some(DataType::String),
            "bytes" => Some(DataType::Bytes),
            _ => None,
        }
    }
}

/// Definition of one property within a type's property table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDef {
    /// Property name, unique within its type.
    pub name: String,
    /// Storable value type of the property.
    pub datatype: DataType,
}

impl PropertyDef {
    /// Create a new property definition.
    #[must_use]
    pub fn new(name: impl Into<String>, datatype: DataType) -> Self {
        Self { name: name.into(), datatype }
    }
}

/// In-memory schema catalog.
///
/// Holds the property tables of all vertex and edge types. Type ids are
/// assigned densely in registration order, so every id below the
/// respective count is valid and the property order given at registration
/// is the local-index order. Suitable for static schemas and test
/// fixtures; engines with their own schema tables implement
/// [`TypeCatalog`] directly instead.
///
/// # Example
///
/// ```
/// use quiver_schema::catalog::{DataType, MemoryCatalog, PropertyDef, SchemaCatalog};
///
/// let mut catalog = MemoryCatalog::new();
/// let person = catalog.add_vertex_type(vec![
///     PropertyDef::new("name", DataType::String),
///     PropertyDef::new("age", DataType::Int),
/// ]);
///
/// assert_eq!(catalog.vertex_type_count(), 1);
/// assert_eq!(catalog.vertex_property_count(person), 2);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryCatalog {
    /// Property tables of vertex types, indexed by raw type id.
    vertex_types: Vec<Vec<PropertyDef>>,
    /// Property tables of edge types, indexed by raw type id.
    edge_types: Vec<Vec<PropertyDef>>,
}

impl MemoryCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a vertex type with the given property table.
    ///
    /// Returns the id assigned to the new type. Ids are dense and
    /// ascending; the order of `properties` is the local-index order.
    pub fn add_vertex_type(&mut self, properties: Vec<PropertyDef>) -> VertexTypeId {
        let id = VertexTypeId::new(self.vertex_types.len() as u32);
        self.vertex_types.push(properties);
        id
    }

    /// Register an edge type with the given property table.
    ///
    /// Returns the id assigned to the new type. Ids are dense and
    /// ascending; the order of `properties` is the local-index order.
    pub fn add_edge_type(&mut self, properties: Vec<PropertyDef>) -> EdgeTypeId {
        let id = EdgeTypeId::new(self.edge_types.len() as u32);
        self.edge_types.push(properties);
        id
    }

    /// Look up a vertex property definition by type and local index.
    #[must_use]
    pub fn vertex_property_def(
        &self,
        ty: VertexTypeId,
        property: PropertyId,
    ) -> Option<&PropertyDef> {
        self.vertex_types.get(ty.as_u32() as usize)?.get(property.as_u32() as usize)
    }

    /// Look up an edge property definition by type and local index.
    #[must_use]
    pub fn edge_property_def(&self, ty: EdgeTypeId, property: PropertyId) -> Option<&PropertyDef> {
        self.edge_types.get(ty.as_u32() as usize)?.get(property.as_u32() as usize)
    }

    /// Look up a vertex property definition by handle.
    ///
    /// Resolves both components of the handle; the null handle (and any
    /// handle whose type or index is not in the catalog) yields `None`.
    #[must_use]
    pub fn vertex_property_def_by_handle(
        &self,
        handle: VertexPropertyHandle,
    ) -> Option<&PropertyDef> {
        self.vertex_property_def(handle.type_id(), handle.property_id())
    }

    /// Look up an edge property definition by handle.
    #[must_use]
    pub fn edge_property_def_by_handle(&self, handle: EdgePropertyHandle) -> Option<&PropertyDef> {
        self.edge_property_def(handle.type_id(), handle.property_id())
    }
}

impl TypeCatalog<VertexDomain> for MemoryCatalog {
    fn type_count(&self) -> u32 {
        self.vertex_types.len() as u32
    }

    fn property_count(&self, ty: VertexTypeId) -> u32 {
        self.vertex_types.get(ty.as_u32() as usize).map_or(0, |props| props.len() as u32)
    }
}

impl TypeCatalog<EdgeDomain> for MemoryCatalog {
    fn type_count(&self) -> u32 {
        self.edge_types.len() as u32
    }

    fn property_count(&self, ty: EdgeTypeId) -> u32 {
        self.edge_types.get(ty.as_u32() as usize).map_or(0, |props| props.len() as u32)
    }
}
