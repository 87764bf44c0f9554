//! Core planning logic
//!
//! The planning pipeline, leaf first:
//!
//! - [`classify`] - derive data type and group key from a relative path
//! - [`group`] - deterministic, addressable group enumeration
//! - [`manifest`] - build a copy/URI manifest for one addressed group
//! - [`plan`] - typed request validation and orchestration
//! - [`paginate`] - continuation-token enumeration for fan-out chunking
//!
//! Everything here is side-effect-free: I/O goes through the adapter traits
//! and the optional persist step is explicit.

pub mod classify;
pub mod group;
pub mod manifest;
pub mod paginate;
pub mod plan;

pub use classify::PathClassifier;
pub use group::GroupIndexer;
pub use paginate::PaginationKeyEnumerator;
pub use plan::{PlanMode, PlanOutcome, PlanRequest, RelocationPlanner};
