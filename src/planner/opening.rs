use crate::error::{PlanError, Result};
use crate::model::{LevelRef, OpeningKind, OpeningPlacement, OpeningRequest, WallSegment};

/// Places one opening at the midpoint of a wall segment.
///
/// Resolving the request's catalog key to a placeable type is not done
/// here: that is a host-document capability, and the resolved handle is
/// paired with the returned placement only at materialization time.
pub struct PlaceOpening {
    wall: WallSegment,
    request: OpeningRequest,
    level: LevelRef,
}

impl PlaceOpening {
    /// Creates a new opening placement operation.
    #[must_use]
    pub fn new(wall: WallSegment, request: OpeningRequest, level: LevelRef) -> Self {
        Self {
            wall,
            request,
            level,
        }
    }

    /// Executes the placement.
    ///
    /// The insertion point is the arithmetic midpoint of the wall
    /// centerline, for every opening kind. Sill height passes through for
    /// windows; a sill height supplied on a door request is discarded,
    /// since doors sit directly on the hosting level.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::DegenerateWall` if the wall segment has zero
    /// length.
    pub fn execute(&self) -> Result<OpeningPlacement> {
        if self.wall.is_degenerate() {
            return Err(PlanError::DegenerateWall.into());
        }

        let sill_height = match self.request.kind {
            OpeningKind::Window => self.request.sill_height,
            OpeningKind::Door => None,
        };

        Ok(OpeningPlacement {
            position: self.wall.midpoint(),
            host_wall: self.wall,
            level: self.level,
            sill_height,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::document::LevelHandle;
    use crate::error::MuralisError;
    use crate::math::{Point3, TOLERANCE};
    use crate::model::CatalogKey;
    use crate::planner::RectangularFootprint;

    fn level(elevation: f64) -> LevelRef {
        LevelRef::new(LevelHandle::default(), elevation)
    }

    fn slanted_wall() -> WallSegment {
        WallSegment::new(
            Point3::new(1.0, 2.0, 0.0),
            Point3::new(5.0, 8.0, 0.0),
            level(0.0),
            level(3000.0),
        )
    }

    fn door_key() -> CatalogKey {
        CatalogKey::new("Single-Flush", "0915 x 2134mm")
    }

    fn window_key() -> CatalogKey {
        CatalogKey::new("Fixed", "0915 x 1830mm")
    }

    #[test]
    fn door_is_placed_at_the_midpoint() {
        let placement = PlaceOpening::new(
            slanted_wall(),
            OpeningRequest::door(door_key()),
            level(0.0),
        )
        .execute()
        .unwrap();
        assert!((placement.position.x - 3.0).abs() < TOLERANCE);
        assert!((placement.position.y - 5.0).abs() < TOLERANCE);
    }

    #[test]
    fn window_is_placed_at_the_same_midpoint() {
        let placement = PlaceOpening::new(
            slanted_wall(),
            OpeningRequest::window(window_key(), 1000.0),
            level(0.0),
        )
        .execute()
        .unwrap();
        assert!((placement.position.x - 3.0).abs() < TOLERANCE);
        assert!((placement.position.y - 5.0).abs() < TOLERANCE);
    }

    #[test]
    fn window_sill_height_passes_through() {
        let placement = PlaceOpening::new(
            slanted_wall(),
            OpeningRequest::window(window_key(), 1000.0),
            level(0.0),
        )
        .execute()
        .unwrap();
        assert_eq!(placement.sill_height, Some(1000.0));
    }

    #[test]
    fn door_sill_height_is_discarded() {
        let request = OpeningRequest::new(OpeningKind::Door, door_key(), Some(1000.0));
        let placement = PlaceOpening::new(slanted_wall(), request, level(0.0))
            .execute()
            .unwrap();
        assert!(placement.sill_height.is_none());
    }

    #[test]
    fn degenerate_wall_is_rejected() {
        let p = Point3::new(2.0, 2.0, 0.0);
        let wall = WallSegment::new(p, p, level(0.0), level(3000.0));
        let err = PlaceOpening::new(wall, OpeningRequest::door(door_key()), level(0.0))
            .execute()
            .unwrap_err();
        assert!(matches!(err, MuralisError::Plan(PlanError::DegenerateWall)));
    }

    #[test]
    fn placement_keeps_the_hosting_wall_and_level() {
        let wall = slanted_wall();
        let placement = PlaceOpening::new(wall, OpeningRequest::door(door_key()), level(0.0))
            .execute()
            .unwrap();
        assert_eq!(placement.host_wall, wall);
        assert!((placement.level.elevation).abs() < TOLERANCE);
    }

    // The canonical scenario, end to end at planner level: 10000 x 5000
    // between elevations 0 and 3000, door in wall 0, window in wall 1.
    #[test]
    fn door_and_window_on_the_canonical_footprint() {
        let base = level(0.0);
        let top = level(3000.0);
        let walls = RectangularFootprint::new(10_000.0, 5_000.0, base, top)
            .execute()
            .unwrap();

        let door = PlaceOpening::new(walls[0], OpeningRequest::door(door_key()), base)
            .execute()
            .unwrap();
        assert!((door.position.x).abs() < TOLERANCE);
        assert!((door.position.y + 2_500.0).abs() < TOLERANCE);
        assert!((door.position.z).abs() < TOLERANCE);
        assert!(door.sill_height.is_none());

        let window = PlaceOpening::new(
            walls[1],
            OpeningRequest::window(window_key(), 1_000.0),
            base,
        )
        .execute()
        .unwrap();
        assert!((window.position.x - 5_000.0).abs() < TOLERANCE);
        assert!((window.position.y).abs() < TOLERANCE);
        assert_eq!(window.sill_height, Some(1_000.0));
    }
}
