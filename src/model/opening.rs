use crate::math::Point3;

use super::level::LevelRef;
use super::wall::WallSegment;

/// Kind of opening hosted by a wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpeningKind {
    /// A door; sits directly on the hosting level.
    Door,
    /// A window; sits at a sill height above the hosting level.
    Window,
}

/// Catalog lookup key for a placeable type: family name plus type name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogKey {
    /// Family the type belongs to.
    pub family: String,
    /// Type name within the family.
    pub type_name: String,
}

impl CatalogKey {
    /// Creates a new catalog key.
    #[must_use]
    pub fn new(family: &str, type_name: &str) -> Self {
        Self {
            family: family.to_owned(),
            type_name: type_name.to_owned(),
        }
    }
}

/// Request to put one opening into a wall.
#[derive(Debug, Clone, PartialEq)]
pub struct OpeningRequest {
    /// Kind of opening to place.
    pub kind: OpeningKind,
    /// Catalog key the host document resolves to a placeable type.
    pub catalog: CatalogKey,
    /// Sill height above the hosting level, in the caller's length unit.
    /// Meaningful for windows only; a value supplied on a door request is
    /// discarded at placement time.
    pub sill_height: Option<f64>,
}

impl OpeningRequest {
    /// Creates a request with an explicit kind and optional sill height.
    #[must_use]
    pub fn new(kind: OpeningKind, catalog: CatalogKey, sill_height: Option<f64>) -> Self {
        Self {
            kind,
            catalog,
            sill_height,
        }
    }

    /// Creates a door request.
    #[must_use]
    pub fn door(catalog: CatalogKey) -> Self {
        Self::new(OpeningKind::Door, catalog, None)
    }

    /// Creates a window request with a sill height above the hosting level.
    #[must_use]
    pub fn window(catalog: CatalogKey, sill_height: f64) -> Self {
        Self::new(OpeningKind::Window, catalog, Some(sill_height))
    }
}

/// Fully resolved opening instruction, ready for host materialization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpeningPlacement {
    /// Insertion point on the hosting wall centerline.
    pub position: Point3,
    /// The wall segment hosting the opening.
    pub host_wall: WallSegment,
    /// Level the opening is hosted on.
    pub level: LevelRef,
    /// Sill height parameter to write, when present.
    pub sill_height: Option<f64>,
}
