mod memory;

pub use memory::{CatalogTypeData, LevelData, MemoryDocument, OpeningElement, WallElement};

use crate::error::DocumentError;
use crate::model::{CatalogKey, LevelRef, OpeningKind, OpeningPlacement, WallSegment};

slotmap::new_key_type! {
    /// Opaque identifier for a level owned by the host document.
    pub struct LevelHandle;
}

slotmap::new_key_type! {
    /// Opaque identifier for a placeable catalog type.
    pub struct TypeHandle;
}

slotmap::new_key_type! {
    /// Opaque identifier for a materialized wall element.
    pub struct WallHandle;
}

slotmap::new_key_type! {
    /// Opaque identifier for a materialized opening instance.
    pub struct InstanceHandle;
}

/// Level resolution capability of the host document.
pub trait LevelLookup {
    /// Resolves a level by its display name.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::LevelUnresolved` if no level carries the
    /// given name.
    fn find_level_by_name(&self, name: &str) -> Result<LevelRef, DocumentError>;
}

/// Catalog type resolution capability of the host document.
pub trait CatalogLookup {
    /// Resolves a placeable type by opening kind and catalog key.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::CatalogTypeUnresolved` if the catalog holds
    /// no matching entry.
    fn resolve_catalog_type(
        &self,
        kind: OpeningKind,
        key: &CatalogKey,
    ) -> Result<TypeHandle, DocumentError>;
}

/// Materialization capability of the host document.
///
/// Both methods mutate the model and must be called inside an open
/// transaction (see [`Transactional`]).
pub trait Materializer {
    /// Creates a wall element from a planned segment. The segment's top
    /// level becomes the wall's top constraint.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::NoOpenTransaction` when called outside a
    /// transaction.
    fn materialize_wall(&mut self, segment: &WallSegment) -> Result<WallHandle, DocumentError>;

    /// Creates an opening instance from a resolved placement, writing the
    /// sill height parameter when the placement carries one. An inactive
    /// catalog type is activated first.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::NoOpenTransaction` when called outside a
    /// transaction, and `DocumentError::EntityNotFound` for a stale type
    /// handle.
    fn materialize_opening(
        &mut self,
        placement: &OpeningPlacement,
        opening_type: TypeHandle,
    ) -> Result<InstanceHandle, DocumentError>;
}

/// Named atomic transactions, owned and enforced by the host document.
pub trait Transactional {
    /// Runs `op` inside a named transaction. When `op` fails, every
    /// document mutation it made is rolled back before the error returns.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::NestedTransaction` if a transaction is
    /// already open; otherwise whatever `op` returns.
    fn transact<T, F>(&mut self, name: &str, op: F) -> crate::error::Result<T>
    where
        F: FnOnce(&mut Self) -> crate::error::Result<T>;
}
