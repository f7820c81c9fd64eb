//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "resolve a template" or "generate a project".

pub mod generator;
pub mod resolver;

pub use generator::{GeneratedFile, GenerationReport, GenerationRequest, PlannedFile, ProjectGenerator};
pub use resolver::LayeredResolver;
