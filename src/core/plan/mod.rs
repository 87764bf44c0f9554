//! Relocation planning entry point
//!
//! Ties the classification, grouping and manifest-building stages together
//! behind one typed request/outcome pair.

pub mod planner;
pub mod request;

pub use planner::{PlanOutcome, RelocationPlanner};
pub use request::{PlanMode, PlanRequest};
