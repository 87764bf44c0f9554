//! Manifest sinks
//!
//! Optional persistence for built manifests: a filesystem sink for local and
//! mounted-volume use, and an in-memory sink for tests.

pub mod file;
pub mod memory;
pub mod traits;

pub use file::FileSink;
pub use memory::MemorySink;
pub use traits::ManifestSink;
