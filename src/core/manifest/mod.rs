//! Manifest builders
//!
//! Two addressing variants build a manifest from one addressable group:
//!
//! - [`folder::FolderManifestBuilder`] - object-store folder push: one copy
//!   row per record, destination keys relative to the group's folder.
//! - [`prefix::PrefixManifestBuilder`] - external CMS prefix push: one
//!   destination URI per distinct parent directory, paired with the source
//!   URIs beneath it.
//!
//! Builders are pure: they read the group and the validated destination base
//! and produce a payload. Writing the payload anywhere is the caller's
//! optional, explicit persist step.

pub mod folder;
pub mod prefix;

pub use folder::FolderManifestBuilder;
pub use prefix::PrefixManifestBuilder;
