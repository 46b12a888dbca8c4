use crate::document::{
    CatalogLookup, InstanceHandle, LevelLookup, Materializer, Transactional, WallHandle,
};
use crate::error::Result;
use crate::model::{CatalogKey, OpeningKind, OpeningRequest};
use crate::planner::{PlaceOpening, RectangularFootprint, WallSide};
use crate::units::mm_to_internal;

/// Parameters describing one rectangular building shell.
///
/// Lengths are in millimeters; conversion to the host's internal unit
/// happens inside [`BuildShell`].
#[derive(Debug, Clone)]
pub struct ShellParams {
    /// Footprint extent along the X axis.
    pub width_mm: f64,
    /// Footprint extent along the Y axis.
    pub depth_mm: f64,
    /// Name of the level the walls stand on.
    pub base_level_name: String,
    /// Name of the level the walls run up to.
    pub top_level_name: String,
    /// Catalog key of the door type.
    pub door: CatalogKey,
    /// Side of the footprint that receives the door.
    pub door_side: WallSide,
    /// Catalog key of the window type, placed on every other side.
    pub window: CatalogKey,
    /// Window sill height above the base level.
    pub window_sill_mm: f64,
}

impl Default for ShellParams {
    fn default() -> Self {
        Self {
            width_mm: 10_000.0,
            depth_mm: 5_000.0,
            base_level_name: "Level 1".to_owned(),
            top_level_name: "Level 2".to_owned(),
            door: CatalogKey::new("Single-Flush", "0915 x 2134mm"),
            door_side: WallSide::South,
            window: CatalogKey::new("Fixed", "0915 x 1830mm"),
            window_sill_mm: 1_000.0,
        }
    }
}

/// Handles of the elements created by [`BuildShell`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltShell {
    /// The four perimeter walls, in footprint order.
    pub walls: [WallHandle; 4],
    /// The door instance on the requested side.
    pub door: InstanceHandle,
    /// Window instances on the remaining sides, in footprint order.
    pub windows: Vec<InstanceHandle>,
}

/// Builds a four-wall rectangular shell with a door and windows into a
/// host document.
///
/// Planning is pure; the document is touched only through its lookup and
/// materialization capabilities. All lookups run before the first
/// mutation, so a resolution failure leaves the document untouched.
#[derive(Debug)]
pub struct BuildShell {
    params: ShellParams,
}

impl BuildShell {
    /// Creates a new shell building operation.
    #[must_use]
    pub fn new(params: ShellParams) -> Self {
        Self { params }
    }

    /// Executes the build against the given host document.
    ///
    /// The walls go up in one transaction, then each opening in a
    /// transaction of its own, so a failed opening never takes the walls
    /// down with it.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::LevelUnresolved` or
    /// `DocumentError::CatalogTypeUnresolved` if a name does not resolve,
    /// and any `PlanError` the footprint or opening planning raises.
    pub fn execute<D>(&self, doc: &mut D) -> Result<BuiltShell>
    where
        D: LevelLookup + CatalogLookup + Materializer + Transactional,
    {
        let base = doc.find_level_by_name(&self.params.base_level_name)?;
        let top = doc.find_level_by_name(&self.params.top_level_name)?;

        let footprint = RectangularFootprint::new(
            mm_to_internal(self.params.width_mm),
            mm_to_internal(self.params.depth_mm),
            base,
            top,
        )
        .execute()?;

        let door_type = doc.resolve_catalog_type(OpeningKind::Door, &self.params.door)?;
        let window_type = doc.resolve_catalog_type(OpeningKind::Window, &self.params.window)?;

        let mut walls = [WallHandle::default(); 4];
        doc.transact("wall construction", |doc| {
            for (handle, segment) in walls.iter_mut().zip(&footprint) {
                *handle = doc.materialize_wall(segment)?;
            }
            Ok(())
        })?;

        let door_wall = footprint[self.params.door_side.index()];
        let door_placement =
            PlaceOpening::new(door_wall, OpeningRequest::door(self.params.door.clone()), base)
                .execute()?;
        let door = doc.transact("door insertion", |doc| {
            Ok(doc.materialize_opening(&door_placement, door_type)?)
        })?;

        let sill = mm_to_internal(self.params.window_sill_mm);
        let mut windows = Vec::with_capacity(WallSide::ALL.len() - 1);
        for side in WallSide::ALL {
            if side == self.params.door_side {
                continue;
            }
            let request = OpeningRequest::window(self.params.window.clone(), sill);
            let placement = PlaceOpening::new(footprint[side.index()], request, base).execute()?;
            let instance = doc.transact("window insertion", |doc| {
                Ok(doc.materialize_opening(&placement, window_type)?)
            })?;
            windows.push(instance);
        }

        tracing::info!(
            "shell built: {} walls, 1 door, {} windows",
            walls.len(),
            windows.len()
        );

        Ok(BuiltShell {
            walls,
            door,
            windows,
        })
    }
}
