//! Infrastructure adapters for ViperX.
//!
//! This crate implements the ports defined in `viperx-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod renderer;
pub mod source;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::MiniJinjaRenderer;
pub use source::{BundledSource, DirectorySource, MemorySource};
