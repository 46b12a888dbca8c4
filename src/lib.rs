pub mod build;
pub mod document;
pub mod error;
pub mod math;
pub mod model;
pub mod planner;
pub mod units;

pub use error::{MuralisError, Result};
