//! CLI command implementations

pub mod init;
pub mod plan;
pub mod validate;
pub mod windows;
