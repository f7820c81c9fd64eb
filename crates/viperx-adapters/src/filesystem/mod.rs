//! Filesystem adapters for generated projects.

pub(crate) mod local;
mod memory;

pub use local::LocalFilesystem;
pub use memory::MemoryFilesystem;
