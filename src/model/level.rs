use crate::document::LevelHandle;

/// Reference to a host-owned level: an opaque handle plus its elevation.
///
/// The planner treats the handle as a key it never constructs; resolving a
/// name to a live handle is the host document's job.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelRef {
    /// Host-side identifier of the level.
    pub handle: LevelHandle,
    /// Elevation of the level, in internal units.
    pub elevation: f64,
}

impl LevelRef {
    /// Creates a new level reference.
    #[must_use]
    pub fn new(handle: LevelHandle, elevation: f64) -> Self {
        Self { handle, elevation }
    }
}
