/// Millimeters per internal length unit.
///
/// The host document measures lengths in decimal feet; callers usually
/// think in millimeters. Conversion happens at the orchestration boundary,
/// never inside the planner, which is unit-agnostic.
pub const MM_PER_INTERNAL: f64 = 304.8;

/// Converts a length in millimeters to internal units.
#[must_use]
pub fn mm_to_internal(mm: f64) -> f64 {
    mm / MM_PER_INTERNAL
}

/// Converts a length in internal units back to millimeters.
#[must_use]
pub fn internal_to_mm(internal: f64) -> f64 {
    internal * MM_PER_INTERNAL
}
