//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use crate::domain::{SourceId, TemplateName};
use crate::error::{ErrorCategory, ViperxError};

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A resolver was built with an empty source list.
    #[error("Resolver needs at least one template source")]
    NoSources,

    /// Two sources share an identifier.
    #[error("Duplicate template source identifier '{id}'")]
    DuplicateSource { id: SourceId },

    /// An operation named a source the resolver does not know.
    #[error("Unknown template source '{id}'")]
    UnknownSource { id: SourceId },

    /// The origin and target of a copy are the same source.
    #[error("Cannot materialize source '{id}' into itself")]
    SameSource { id: SourceId },

    /// A source lacks an optional capability (enumerate, write).
    #[error("Template source '{source_id}' does not support {operation}")]
    Unsupported {
        source_id: SourceId,
        operation: &'static str,
    },

    /// Storage read or write failed for a reason other than "not present".
    #[error("Failed to {operation} {}: {source}", path.display())]
    Io {
        path: PathBuf,
        operation: &'static str,
        #[source]
        source: Arc<io::Error>,
    },

    /// Materialization stopped part way; `written` files were copied.
    #[error("Materializing into '{target}' stopped after {written} file(s): {reason}")]
    MaterializeInterrupted {
        target: SourceId,
        written: usize,
        #[source]
        reason: Box<ViperxError>,
    },

    /// A template required for generation exists in no source.
    #[error("Template '{name}' not found (searched: {})", join_ids(searched))]
    TemplateNotFound {
        name: TemplateName,
        searched: Vec<SourceId>,
    },

    /// The render engine rejected a template.
    #[error("Failed to render '{template}': {reason}")]
    RenderingFailed {
        template: TemplateName,
        reason: String,
    },

    /// A template referenced a variable the context does not define.
    #[error("Undefined variable in '{template}': {detail}")]
    UndefinedVariable {
        template: TemplateName,
        detail: String,
    },

    /// Project already exists at target location.
    #[error("Project already exists at {}", path.display())]
    ProjectExists { path: PathBuf },

    /// Rollback failed (best-effort cleanup failed).
    #[error("Rollback failed for {}: {reason}", path.display())]
    RollbackFailed { path: PathBuf, reason: String },

    /// Store access failed (lock poisoned, etc.).
    #[error("Template store lock poisoned")]
    StoreLockError,
}

fn join_ids(ids: &[SourceId]) -> String {
    ids.iter()
        .map(SourceId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

impl ApplicationError {
    /// Wrap an `io::Error` with the path and operation that produced it.
    pub fn io(path: impl Into<PathBuf>, operation: &'static str, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            operation,
            source: Arc::new(source),
        }
    }

    /// Files written before a materialization failure, if this is one.
    pub fn written_before_failure(&self) -> Option<usize> {
        match self {
            Self::MaterializeInterrupted { written, .. } => Some(*written),
            _ => None,
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::NoSources | Self::DuplicateSource { .. } => vec![
                "The resolver is built from the user template directory and the bundled set"
                    .into(),
                "Check 'templates.user_dir' with: viperx config get templates.user_dir".into(),
            ],
            Self::UnknownSource { id } => vec![
                format!("No template source is called '{}'", id),
                "Known sources: user, bundled".into(),
            ],
            Self::SameSource { .. } => {
                vec!["Pick a target different from the origin source".into()]
            }
            Self::Unsupported { operation, .. } => vec![
                format!("This source cannot {}", operation),
                "Only directory-backed sources can be written to".into(),
            ],
            Self::Io { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have read/write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::MaterializeInterrupted { written, reason, .. } => {
                let mut s = vec![format!("{} template(s) were copied before the failure", written)];
                s.extend(reason.suggestions());
                s.push("Re-running the command overwrites what was already copied".into());
                s
            }
            Self::TemplateNotFound { name, .. } => vec![
                format!("No source provides '{}'", name),
                "Run 'viperx templates list' to see available templates".into(),
                "Remove or rename a broken override in your template directory".into(),
            ],
            Self::RenderingFailed { .. } => vec![
                "Check the template syntax (Jinja2 style: {{ var }}, {% if %})".into(),
                "Run 'viperx templates show <name>' to inspect the template".into(),
            ],
            Self::UndefinedVariable { .. } => vec![
                "Templates may only use the documented context variables".into(),
                "Run 'viperx new --help' to see which options set them".into(),
            ],
            Self::ProjectExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Use --force to overwrite (destructive)".into(),
                "Choose a different project name".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NoSources
            | Self::DuplicateSource { .. }
            | Self::UnknownSource { .. }
            | Self::SameSource { .. } => ErrorCategory::Configuration,
            Self::Unsupported { .. } => ErrorCategory::Unsupported,
            Self::Io { .. } | Self::MaterializeInterrupted { .. } => ErrorCategory::Io,
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::RenderingFailed { .. }
            | Self::UndefinedVariable { .. }
            | Self::ProjectExists { .. } => ErrorCategory::Validation,
            Self::RollbackFailed { .. } | Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
