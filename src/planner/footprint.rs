use crate::error::{PlanError, Result};
use crate::math::Point3;
use crate::model::{LevelRef, WallSegment};

/// Cardinal side of a rectangular footprint, in emission order.
///
/// Callers address walls positionally ("the door goes into wall 0"), so
/// the side-to-index mapping is a contract, not an accident of loop order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallSide {
    /// Wall 0, along the X axis at the smaller Y.
    South,
    /// Wall 1, along the Y axis at the larger X.
    East,
    /// Wall 2, along the X axis at the larger Y.
    North,
    /// Wall 3, along the Y axis at the smaller X.
    West,
}

impl WallSide {
    /// All four sides, in footprint emission order.
    pub const ALL: [Self; 4] = [Self::South, Self::East, Self::North, Self::West];

    /// Index of this side's segment in the planned footprint.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::South => 0,
            Self::East => 1,
            Self::North => 2,
            Self::West => 3,
        }
    }
}

/// Plans a rectangular wall footprint centered on the local origin.
///
/// Corners are laid out counter-clockwise starting at `(-width/2,
/// -depth/2)`, at `z = 0` in a level-relative frame; the host document
/// owns the absolute frame.
#[derive(Debug)]
pub struct RectangularFootprint {
    width: f64,
    depth: f64,
    base_level: LevelRef,
    top_level: LevelRef,
}

impl RectangularFootprint {
    /// Creates a new footprint planning operation.
    ///
    /// `width` spans the X axis and `depth` the Y axis, both in the
    /// caller's length unit.
    #[must_use]
    pub fn new(width: f64, depth: f64, base_level: LevelRef, top_level: LevelRef) -> Self {
        Self {
            width,
            depth,
            base_level,
            top_level,
        }
    }

    /// Executes the planning, returning the four walls in footprint order
    /// ([`WallSide::South`] first, counter-clockwise).
    ///
    /// The segments form a closed loop: consecutive segments share their
    /// corner point exactly, and the loop perimeter is
    /// `2 * (width + depth)`.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::InvalidDimension` if `width` or `depth` is not
    /// strictly positive and finite, and `PlanError::InvalidLevelOrder` if
    /// the base level does not lie strictly below the top level.
    pub fn execute(&self) -> Result<[WallSegment; 4]> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(PlanError::InvalidDimension {
                dimension: "width",
                value: self.width,
            }
            .into());
        }
        if !self.depth.is_finite() || self.depth <= 0.0 {
            return Err(PlanError::InvalidDimension {
                dimension: "depth",
                value: self.depth,
            }
            .into());
        }
        if self.base_level.elevation >= self.top_level.elevation {
            return Err(PlanError::InvalidLevelOrder {
                base: self.base_level.elevation,
                top: self.top_level.elevation,
            }
            .into());
        }

        let dx = self.width / 2.0;
        let dy = self.depth / 2.0;

        // The fifth point repeats the first corner, closing the loop so
        // the segments can be emitted over consecutive pairs.
        let corners = [
            Point3::new(-dx, -dy, 0.0),
            Point3::new(dx, -dy, 0.0),
            Point3::new(dx, dy, 0.0),
            Point3::new(-dx, dy, 0.0),
            Point3::new(-dx, -dy, 0.0),
        ];

        Ok(std::array::from_fn(|i| {
            WallSegment::new(corners[i], corners[i + 1], self.base_level, self.top_level)
        }))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::document::LevelHandle;
    use crate::error::MuralisError;
    use crate::math::TOLERANCE;

    fn level(elevation: f64) -> LevelRef {
        LevelRef::new(LevelHandle::default(), elevation)
    }

    fn plan(width: f64, depth: f64) -> Result<[WallSegment; 4]> {
        RectangularFootprint::new(width, depth, level(0.0), level(3000.0)).execute()
    }

    #[test]
    fn walls_form_a_closed_loop() {
        for (width, depth) in [(1.0, 1.0), (10_000.0, 5_000.0), (2.5, 7.25)] {
            let walls = plan(width, depth).unwrap();
            for i in 0..4 {
                // Exact sharing: consecutive segments reuse the corner value.
                assert_eq!(walls[i].end, walls[(i + 1) % 4].start);
            }
        }
    }

    #[test]
    fn perimeter_is_twice_width_plus_depth() {
        for (width, depth) in [(1.0, 1.0), (10_000.0, 5_000.0), (2.5, 7.25)] {
            let walls = plan(width, depth).unwrap();
            let perimeter: f64 = walls.iter().map(WallSegment::length).sum();
            assert!((perimeter - 2.0 * (width + depth)).abs() < TOLERANCE);
        }
    }

    #[test]
    fn no_wall_is_degenerate() {
        let walls = plan(10_000.0, 5_000.0).unwrap();
        assert!(walls.iter().all(|w| !w.is_degenerate()));
    }

    #[test]
    fn axis_assignment_matches_sides() {
        let walls = plan(10_000.0, 5_000.0).unwrap();
        assert!((walls[WallSide::South.index()].length() - 10_000.0).abs() < TOLERANCE);
        assert!((walls[WallSide::East.index()].length() - 5_000.0).abs() < TOLERANCE);
        assert!((walls[WallSide::North.index()].length() - 10_000.0).abs() < TOLERANCE);
        assert!((walls[WallSide::West.index()].length() - 5_000.0).abs() < TOLERANCE);
    }

    #[test]
    fn corners_run_counter_clockwise_from_south_west() {
        let walls = plan(10_000.0, 5_000.0).unwrap();
        assert_eq!(walls[0].start, Point3::new(-5_000.0, -2_500.0, 0.0));
        assert_eq!(walls[0].end, Point3::new(5_000.0, -2_500.0, 0.0));
        assert_eq!(walls[2].start, Point3::new(5_000.0, 2_500.0, 0.0));
        assert_eq!(walls[3].end, walls[0].start);
    }

    #[test]
    fn side_midpoints_point_outward() {
        let walls = plan(10_000.0, 5_000.0).unwrap();
        assert!(walls[WallSide::South.index()].midpoint().y < 0.0);
        assert!(walls[WallSide::East.index()].midpoint().x > 0.0);
        assert!(walls[WallSide::North.index()].midpoint().y > 0.0);
        assert!(walls[WallSide::West.index()].midpoint().x < 0.0);
    }

    #[test]
    fn zero_width_is_rejected() {
        let err = plan(0.0, 5_000.0).unwrap_err();
        assert!(matches!(
            err,
            MuralisError::Plan(PlanError::InvalidDimension {
                dimension: "width",
                ..
            })
        ));
    }

    #[test]
    fn negative_depth_is_rejected() {
        let err = plan(10_000.0, -1.0).unwrap_err();
        assert!(matches!(
            err,
            MuralisError::Plan(PlanError::InvalidDimension {
                dimension: "depth",
                ..
            })
        ));
    }

    #[test]
    fn non_finite_width_is_rejected() {
        let err = plan(f64::NAN, 5_000.0).unwrap_err();
        assert!(matches!(
            err,
            MuralisError::Plan(PlanError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn equal_levels_are_rejected() {
        let err = RectangularFootprint::new(10.0, 5.0, level(100.0), level(100.0))
            .execute()
            .unwrap_err();
        assert!(matches!(
            err,
            MuralisError::Plan(PlanError::InvalidLevelOrder { .. })
        ));
    }

    #[test]
    fn inverted_levels_are_rejected() {
        let err = RectangularFootprint::new(10.0, 5.0, level(3000.0), level(0.0))
            .execute()
            .unwrap_err();
        assert!(matches!(
            err,
            MuralisError::Plan(PlanError::InvalidLevelOrder {
                base,
                top,
            }) if base > top
        ));
    }

    #[test]
    fn walls_carry_both_levels() {
        let base = level(0.0);
        let top = level(3000.0);
        let walls = RectangularFootprint::new(10.0, 5.0, base, top)
            .execute()
            .unwrap();
        for wall in &walls {
            assert!((wall.base_level.elevation - base.elevation).abs() < TOLERANCE);
            assert!((wall.top_level.elevation - top.elevation).abs() < TOLERANCE);
        }
    }
}
