//! Core domain layer for ViperX.
//!
//! Pure values and rules with no I/O. Template storage, rendering and the
//! filesystem are reached through ports defined in the application layer.
//!
//! ## What lives here
//!
//! - **Template names**: validated, normalized relative identifiers
//! - **Resolution results**: `Found` / `NotFound` plus listing rows
//! - **Project specs**: the validated description of a Python project
//! - **Render context**: the opaque variable map handed to the engine
//! - **Education**: static explanation and resource tables

pub mod education;
pub mod error;
pub mod project;
pub mod project_structure;
pub mod render_context;
pub mod resolution;
pub mod template_name;

pub use error::DomainError;
pub use project::{License, ModelFramework, ProjectKind, ProjectSpec, ProjectSpecBuilder};
pub use project_structure::{FileToWrite, ProjectStructure};
pub use render_context::RenderContext;
pub use resolution::{FoundTemplate, ResolvedTemplate, SourceId, TemplateListing, TemplateMiss};
pub use template_name::TemplateName;
