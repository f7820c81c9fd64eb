//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `viperx-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::application::ApplicationError;
use crate::domain::{RenderContext, SourceId, TemplateName};
use crate::error::ViperxResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `viperx_adapters::filesystem::LocalFilesystem` (production)
/// - `viperx_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ViperxResult<()>;

    /// Create or overwrite a file.
    fn write_file(&self, path: &Path, content: &str) -> ViperxResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> ViperxResult<()>;
}

/// A named, ordered provider of template bodies.
///
/// `lookup` is the only required capability. Enumeration and writing are
/// optional: a source that cannot enumerate returns `None` (which is
/// different from `Some(Ok(vec![]))`, an enumerable source with nothing in
/// it), and a read-only source keeps the default `write`.
///
/// Implemented by:
/// - `viperx_adapters::source::DirectorySource` (user overrides)
/// - `viperx_adapters::source::BundledSource` (templates shipped in the binary)
/// - `viperx_adapters::source::MemorySource` (tests)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateSource: Send + Sync {
    /// Identifier reported in resolution results, e.g. `user`.
    fn id(&self) -> SourceId;

    /// Raw template text, or `None` when this source does not define `name`.
    ///
    /// Errors are reserved for storage failures other than absence.
    fn lookup(&self, name: &TemplateName) -> ViperxResult<Option<String>>;

    /// Every template name this source holds, if it can list them.
    fn enumerate(&self) -> Option<ViperxResult<Vec<TemplateName>>> {
        None
    }

    fn supports_write(&self) -> bool {
        false
    }

    /// Create the backing storage root if absent.
    fn ensure_root(&self) -> ViperxResult<()> {
        Ok(())
    }

    /// Create or overwrite `name` with `content`.
    fn write(&self, name: &TemplateName, content: &str) -> ViperxResult<()> {
        let _ = (name, content);
        Err(ApplicationError::Unsupported {
            source_id: self.id(),
            operation: "write",
        }
        .into())
    }

    /// Where this source lives on disk, for display.
    fn location(&self) -> Option<PathBuf> {
        None
    }
}

/// Port for template rendering.
///
/// Implemented by:
/// - `viperx_adapters::renderer::MiniJinjaRenderer`
///
/// An undefined variable must surface as
/// [`ApplicationError::UndefinedVariable`], distinct from other failures.
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    fn render(
        &self,
        name: &TemplateName,
        content: &str,
        context: &RenderContext,
    ) -> ViperxResult<String>;
}
