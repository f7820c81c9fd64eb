// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

use crate::error::ErrorCategory;

/// Root domain error type.
///
/// Every variant is a validation failure: the caller handed the domain a
/// value that violates one of its invariants. None of them are retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid template name '{name}': {reason}")]
    InvalidTemplateName { name: String, reason: String },

    #[error("Invalid source identifier '{id}': {reason}")]
    InvalidSourceId { id: String, reason: String },

    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("Unknown project type '{0}'")]
    UnknownProjectKind(String),

    #[error("Unknown license '{0}'")]
    UnknownLicense(String),

    #[error("Unknown framework '{0}'")]
    UnknownFramework(String),

    #[error("framework '{framework}' is only available for '{required}' projects, not '{kind}'")]
    IncompatibleFramework {
        framework: String,
        kind: String,
        required: &'static str,
    },

    #[error("Invalid Python version '{0}'")]
    InvalidPythonVersion(String),

    #[error("Duplicate output path in project: {path}")]
    DuplicatePath { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidTemplateName { .. } => vec![
                "Template names are relative, slash-separated paths".into(),
                "Example: README.md.j2 or src/main.py.j2".into(),
                "'..' segments and absolute paths are rejected".into(),
            ],
            Self::InvalidProjectName { .. } => vec![
                "Start with a letter; use letters, digits, '-', '_' or '.'".into(),
                "Examples: my-project, data_pipeline, api2".into(),
            ],
            Self::UnknownProjectKind(_) => vec![
                "Supported project types:".into(),
                "  • classic  - Standard Python package".into(),
                "  • ml       - Machine learning (numpy, pandas, scikit-learn)".into(),
                "  • dl       - Deep learning (pytorch or tensorflow)".into(),
            ],
            Self::UnknownLicense(_) => vec![
                "Supported licenses: MIT, Apache-2.0, GPLv3".into(),
                "Run 'viperx learn licenses' to compare them".into(),
            ],
            Self::UnknownFramework(_) | Self::IncompatibleFramework { .. } => vec![
                "Frameworks apply to deep-learning projects only".into(),
                "Example: viperx new my-net --type dl --framework tensorflow".into(),
            ],
            Self::InvalidPythonVersion(_) => {
                vec!["Use a MAJOR.MINOR version such as 3.11 or 3.12".into()]
            }
            _ => vec!["See 'viperx --help' for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Validation
    }
}
