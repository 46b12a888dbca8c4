mod footprint;
mod opening;

pub use footprint::{RectangularFootprint, WallSide};
pub use opening::PlaceOpening;
