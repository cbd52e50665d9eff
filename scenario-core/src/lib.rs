pub mod calculations;
pub mod models;

pub use calculations::{Comparison, ScenarioProjector, project};
pub use models::*;
