pub mod level;
pub mod opening;
pub mod wall;

pub use level::LevelRef;
pub use opening::{CatalogKey, OpeningKind, OpeningPlacement, OpeningRequest};
pub use wall::WallSegment;
