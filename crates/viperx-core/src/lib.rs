//! ViperX Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the ViperX
//! Python project generator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            viperx-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (LayeredResolver, ProjectGenerator)    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (TemplateSource, Renderer, Filesystem)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     viperx-adapters (Infrastructure)    │
//! │ (DirectorySource, BundledSource, ...)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use viperx_core::prelude::*;
//!
//! let resolver = LayeredResolver::new(vec![user_source, bundled_source])?;
//!
//! match resolver.resolve("README.md.j2")? {
//!     ResolvedTemplate::Found(found) => println!("{} from {}", found.name, found.source),
//!     ResolvedTemplate::NotFound(miss) => println!("searched {:?}", miss.searched),
//! }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerationReport, GenerationRequest, LayeredResolver, ProjectGenerator,
        ports::{Filesystem, TemplateRenderer, TemplateSource},
    };
    pub use crate::domain::{
        FoundTemplate, License, ModelFramework, ProjectKind, ProjectSpec, RenderContext,
        ResolvedTemplate, SourceId, TemplateListing, TemplateMiss, TemplateName,
    };
    pub use crate::error::{ViperxError, ViperxResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
