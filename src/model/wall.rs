use crate::math::{point_3d, Point3, TOLERANCE};

use super::level::LevelRef;

/// A bounded straight wall segment between two levels.
///
/// Producers are expected to uphold two invariants: `start` and `end` are
/// distinct, and `base_level` lies strictly below `top_level`. A violation
/// is a precondition failure surfaced by the planning operations, not a
/// recoverable runtime state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallSegment {
    /// Start point of the wall centerline.
    pub start: Point3,
    /// End point of the wall centerline.
    pub end: Point3,
    /// Level bounding the wall from below.
    pub base_level: LevelRef,
    /// Level constraining the wall top.
    pub top_level: LevelRef,
}

impl WallSegment {
    /// Creates a new wall segment.
    #[must_use]
    pub fn new(start: Point3, end: Point3, base_level: LevelRef, top_level: LevelRef) -> Self {
        Self {
            start,
            end,
            base_level,
            top_level,
        }
    }

    /// Returns the length of the wall centerline.
    #[must_use]
    pub fn length(&self) -> f64 {
        point_3d::distance(&self.start, &self.end)
    }

    /// Returns the midpoint of the wall centerline.
    #[must_use]
    pub fn midpoint(&self) -> Point3 {
        point_3d::midpoint(&self.start, &self.end)
    }

    /// Returns `true` when the centerline is shorter than [`TOLERANCE`].
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.length() < TOLERANCE
    }
}
