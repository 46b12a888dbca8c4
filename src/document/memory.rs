use slotmap::SlotMap;

use crate::error::DocumentError;
use crate::model::{CatalogKey, LevelRef, OpeningKind, OpeningPlacement, WallSegment};

use super::{
    CatalogLookup, InstanceHandle, LevelHandle, LevelLookup, Materializer, Transactional,
    TypeHandle, WallHandle,
};

/// A named level stored in the document.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelData {
    /// Display name used for lookup.
    pub name: String,
    /// Elevation in internal units.
    pub elevation: f64,
}

/// A loadable catalog entry. Types start out inactive and are activated
/// the first time an instance of them is placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogTypeData {
    /// Kind of opening the type produces.
    pub kind: OpeningKind,
    /// Family and type names the entry is matched on.
    pub key: CatalogKey,
    /// Whether the type has been activated for placement.
    pub active: bool,
}

/// A wall element created by materialization. The segment's top level is
/// kept as the wall's top constraint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallElement {
    /// Planned segment the wall was built from.
    pub segment: WallSegment,
}

/// An opening instance created by materialization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpeningElement {
    /// Resolved placement the instance was built from.
    pub placement: OpeningPlacement,
    /// Catalog type the instance was placed with.
    pub opening_type: TypeHandle,
}

/// In-memory host document backed by element arenas.
///
/// Stands in for a real host during planning and in tests: it owns levels,
/// a type catalog, and the materialized elements, and it enforces the
/// host's transaction discipline on every model mutation.
#[derive(Debug, Default)]
pub struct MemoryDocument {
    levels: SlotMap<LevelHandle, LevelData>,
    catalog: SlotMap<TypeHandle, CatalogTypeData>,
    walls: SlotMap<WallHandle, WallElement>,
    openings: SlotMap<InstanceHandle, OpeningElement>,
    transaction_open: bool,
}

impl MemoryDocument {
    /// Creates a new, empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Seeding ---

    /// Inserts a named level and returns its handle. Seeding is document
    /// setup and is not subject to transaction discipline.
    pub fn insert_level(&mut self, name: &str, elevation: f64) -> LevelHandle {
        self.levels.insert(LevelData {
            name: name.to_owned(),
            elevation,
        })
    }

    /// Inserts a loadable type, initially inactive, and returns its handle.
    pub fn insert_catalog_type(&mut self, kind: OpeningKind, key: CatalogKey) -> TypeHandle {
        self.catalog.insert(CatalogTypeData {
            kind,
            key,
            active: false,
        })
    }

    // --- Element access ---

    /// Returns a reference to the level data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the document.
    pub fn level(&self, handle: LevelHandle) -> Result<&LevelData, DocumentError> {
        self.levels
            .get(handle)
            .ok_or_else(|| DocumentError::EntityNotFound("level".into()))
    }

    /// Returns a reference to the catalog type data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the document.
    pub fn catalog_type(&self, handle: TypeHandle) -> Result<&CatalogTypeData, DocumentError> {
        self.catalog
            .get(handle)
            .ok_or_else(|| DocumentError::EntityNotFound("catalog type".into()))
    }

    /// Returns a reference to the wall element, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the document.
    pub fn wall(&self, handle: WallHandle) -> Result<&WallElement, DocumentError> {
        self.walls
            .get(handle)
            .ok_or_else(|| DocumentError::EntityNotFound("wall".into()))
    }

    /// Returns a reference to the opening instance, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the document.
    pub fn opening(&self, handle: InstanceHandle) -> Result<&OpeningElement, DocumentError> {
        self.openings
            .get(handle)
            .ok_or_else(|| DocumentError::EntityNotFound("opening".into()))
    }

    /// Number of wall elements in the document.
    #[must_use]
    pub fn wall_count(&self) -> usize {
        self.walls.len()
    }

    /// Number of opening instances in the document.
    #[must_use]
    pub fn opening_count(&self) -> usize {
        self.openings.len()
    }

    /// Iterates over all wall elements.
    pub fn walls(&self) -> impl Iterator<Item = (WallHandle, &WallElement)> {
        self.walls.iter()
    }

    /// Iterates over all opening instances.
    pub fn openings(&self) -> impl Iterator<Item = (InstanceHandle, &OpeningElement)> {
        self.openings.iter()
    }
}

impl LevelLookup for MemoryDocument {
    fn find_level_by_name(&self, name: &str) -> Result<LevelRef, DocumentError> {
        self.levels
            .iter()
            .find(|(_, data)| data.name == name)
            .map(|(handle, data)| LevelRef::new(handle, data.elevation))
            .ok_or_else(|| DocumentError::LevelUnresolved(name.to_owned()))
    }
}

impl CatalogLookup for MemoryDocument {
    fn resolve_catalog_type(
        &self,
        kind: OpeningKind,
        key: &CatalogKey,
    ) -> Result<TypeHandle, DocumentError> {
        self.catalog
            .iter()
            .find(|(_, data)| data.kind == kind && data.key == *key)
            .map(|(handle, _)| handle)
            .ok_or_else(|| DocumentError::CatalogTypeUnresolved {
                family: key.family.clone(),
                type_name: key.type_name.clone(),
            })
    }
}

impl Materializer for MemoryDocument {
    fn materialize_wall(&mut self, segment: &WallSegment) -> Result<WallHandle, DocumentError> {
        if !self.transaction_open {
            return Err(DocumentError::NoOpenTransaction);
        }
        tracing::debug!("materialized wall, length {:.3}", segment.length());
        Ok(self.walls.insert(WallElement { segment: *segment }))
    }

    fn materialize_opening(
        &mut self,
        placement: &OpeningPlacement,
        opening_type: TypeHandle,
    ) -> Result<InstanceHandle, DocumentError> {
        if !self.transaction_open {
            return Err(DocumentError::NoOpenTransaction);
        }
        let data = self
            .catalog
            .get_mut(opening_type)
            .ok_or_else(|| DocumentError::EntityNotFound("catalog type".into()))?;
        if !data.active {
            data.active = true;
            tracing::debug!(
                "activated type '{}' in family '{}'",
                data.key.type_name,
                data.key.family
            );
        }
        tracing::debug!(
            "materialized opening at ({:.3}, {:.3}, {:.3})",
            placement.position.x,
            placement.position.y,
            placement.position.z
        );
        Ok(self.openings.insert(OpeningElement {
            placement: *placement,
            opening_type,
        }))
    }
}

impl Transactional for MemoryDocument {
    fn transact<T, F>(&mut self, name: &str, op: F) -> crate::error::Result<T>
    where
        F: FnOnce(&mut Self) -> crate::error::Result<T>,
    {
        if self.transaction_open {
            return Err(DocumentError::NestedTransaction.into());
        }
        // Arena snapshot taken at open; restored verbatim on failure.
        let snapshot = (
            self.levels.clone(),
            self.catalog.clone(),
            self.walls.clone(),
            self.openings.clone(),
        );
        self.transaction_open = true;
        tracing::debug!("transaction '{}' opened", name);
        let outcome = op(self);
        self.transaction_open = false;
        match outcome {
            Ok(value) => {
                tracing::debug!("transaction '{}' committed", name);
                Ok(value)
            }
            Err(e) => {
                (self.levels, self.catalog, self.walls, self.openings) = snapshot;
                tracing::warn!("transaction '{}' rolled back: {}", name, e);
                Err(e)
            }
        }
    }
}
