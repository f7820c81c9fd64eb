//! Template source adapters.
//!
//! A source is one layer of the resolver's search path. The CLI stacks a
//! [`DirectorySource`] over a [`BundledSource`]; tests use [`MemorySource`].

mod bundled;
mod directory;
mod memory;

pub use bundled::BundledSource;
pub use directory::DirectorySource;
pub use memory::MemorySource;

/// Identifier of the user override directory.
pub const USER: &str = "user";

/// Identifier of the templates compiled into the binary.
pub const BUNDLED: &str = "bundled";
