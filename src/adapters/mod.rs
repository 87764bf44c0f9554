//! External integrations
//!
//! Adapters wrap every collaborator the planning core calls into: the
//! packaging lookup store it reads records from, and the sinks it can
//! optionally persist manifests through. The core depends only on the traits
//! defined here, never on concrete transports.

pub mod sink;
pub mod store;
