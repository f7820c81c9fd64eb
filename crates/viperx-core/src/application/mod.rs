//! Application layer for ViperX.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (LayeredResolver, ProjectGenerator)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    GeneratedFile, GenerationReport, GenerationRequest, LayeredResolver, PlannedFile,
    ProjectGenerator,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, TemplateRenderer, TemplateSource};

pub use error::ApplicationError;
