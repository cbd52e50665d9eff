//! Projection of the four scenarios and the comparison derived from it.

pub mod common;
pub mod comparison;
pub mod projector;

pub use comparison::Comparison;
pub use projector::{ScenarioProjector, project};
