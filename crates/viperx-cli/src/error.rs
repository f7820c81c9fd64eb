//! Error handling for the ViperX CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Proper error chaining
//! - Exit code mapping

use std::error::Error as _;

use owo_colors::OwoColorize;
use thiserror::Error;

use viperx_core::error::ViperxError;

pub use viperx_core::error::ErrorCategory as CoreCategory;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Unknown topic '{topic}'")]
    UnknownTopic {
        topic: String,
        available: Vec<&'static str>,
    },

    #[error("No explanation for '{key}'")]
    UnknownExplanation {
        key: String,
        available: Vec<&'static str>,
    },

    // ── Config errors ──────────────────────────────────────────────────────
    /// A configuration file could not be read, parsed, or queried.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // ── Core errors ────────────────────────────────────────────────────────
    /// An error propagated from `viperx-core` or an adapter.
    #[error(transparent)]
    Core(#[from] ViperxError),

    // ── System errors ──────────────────────────────────────────────────────
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Structured output could not be produced.
    #[error("Failed to serialise output: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownTopic { available, .. } => {
                let mut s = vec!["Available topics:".to_string()];
                s.extend(available.iter().map(|t| format!("  • {t}")));
                s.push("Example: viperx learn packaging".into());
                s
            }

            Self::UnknownExplanation { available, .. } => {
                let mut s = vec!["Available explanations:".to_string()];
                s.extend(available.iter().map(|k| format!("  • {k}")));
                s
            }

            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {}", message),
                "Show the active file with: viperx config path".into(),
                "Show effective values with: viperx config list".into(),
            ],

            Self::Core(core_err) => core_err.suggestions(),

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {}", message),
                "Check file permissions".into(),
                "Check available disk space".into(),
            ],

            Self::Serialization(_) => vec!["Retry with --output-format plain".into()],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownTopic { .. }
            | Self::UnknownExplanation { .. } => ErrorCategory::UserError,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Configuration | CoreCategory::Unsupported => {
                    ErrorCategory::Configuration
                }
                CoreCategory::Io | CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } | Self::Serialization(_) => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Not found     |  3   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{} {}\n\n",
            "✗".red().bold(),
            "Error:".red().bold()
        ));
        output.push_str(&format!("  {}\n", self.to_string().red()));

        if verbose {
            for cause in self.causes() {
                output.push_str(&format!("\n  {} {}\n", "→".dimmed(), cause.dimmed()));
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {}\n", suggestion));
            }
        }

        if !verbose {
            output.push('\n');
            output.push_str(&format!(
                "{} {}\n",
                "\u{2139}".blue(), // ℹ
                "Use -v / --verbose for more details.".dimmed(),
            ));
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`], without ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!("\nError: {}\n", self));

        if verbose {
            for cause in self.causes() {
                out.push_str(&format!("  Caused by: {cause}\n"));
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Source chain as text, skipping causes the previous message already
    /// spells out.
    fn causes(&self) -> Vec<String> {
        let mut shown = self.to_string();
        let mut causes = Vec::new();
        let mut source = self.source();
        while let Some(err) = source {
            let text = err.to_string();
            if !shown.contains(&text) {
                causes.push(text.clone());
            }
            shown = text;
            source = err.source();
        }
        causes
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::NotFound => tracing::warn!("Not found: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (validation, invalid arguments).
    UserError,
    /// Resource not found.
    NotFound,
    /// Configuration error.
    Configuration,
    /// Internal/system error.
    Internal,
}

// ── IntoCli trait ─────────────────────────────────────────────────────────────

/// Extension trait to convert foreign error types into [`CliError`] at
/// call-sites with a descriptive context message.
pub trait IntoCli<T> {
    /// Convert to `CliResult` attaching a human-readable context message.
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for anyhow::Result<T> {
    /// Configuration lookups report through `anyhow`; they surface as
    /// [`CliError::ConfigError`].
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::ConfigError {
            message: format!("{}: {e:#}", f().into()),
            source: Some(e.into()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;
    use viperx_core::{
        application::ApplicationError,
        domain::{DomainError, SourceId, TemplateName},
    };

    fn core(err: impl Into<ViperxError>) -> CliError {
        CliError::Core(err.into())
    }

    #[test]
    fn unknown_topic_lists_available() {
        let err = CliError::UnknownTopic {
            topic: "rust".into(),
            available: vec!["packaging", "uv"],
        };
        let suggestions = err.suggestions();
        assert!(suggestions.iter().any(|s| s.contains("packaging")));
        assert!(suggestions.iter().any(|s| s.contains("uv")));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn project_exists_suggests_force() {
        let err = core(ApplicationError::ProjectExists {
            path: PathBuf::from("/tmp/test"),
        });
        assert!(err.suggestions().iter().any(|s| s.contains("--force")));
        assert_eq!(err.exit_code(), 2);
    }

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn invalid_project_name_is_user_error() {
        let err = core(DomainError::InvalidProjectName {
            name: "1abc".into(),
            reason: "name must start with a letter".into(),
        });
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn missing_template_is_not_found() {
        let err = core(ApplicationError::TemplateNotFound {
            name: TemplateName::parse("x.j2").unwrap(),
            searched: vec![SourceId::new("user"), SourceId::new("bundled")],
        });
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn resolver_misconfiguration_is_configuration() {
        assert_eq!(core(ApplicationError::NoSources).exit_code(), 4);
        let unsupported = core(ApplicationError::Unsupported {
            source_id: SourceId::new("bundled"),
            operation: "write",
        });
        assert_eq!(unsupported.exit_code(), 4);
    }

    #[test]
    fn io_failures_are_internal() {
        let err = core(ApplicationError::io(
            "/x",
            "write file",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        ));
        assert_eq!(err.exit_code(), 1);
        assert_eq!(CliError::from(io::Error::other("e")).exit_code(), 1);
    }

    #[test]
    fn config_error_exit_code() {
        let err = CliError::ConfigError {
            message: "x".into(),
            source: None,
        };
        assert_eq!(err.exit_code(), 4);
    }

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn format_plain_contains_error_header() {
        let err = core(ApplicationError::ProjectExists {
            path: PathBuf::from("/tmp/x"),
        });
        let s = err.format_plain(false);
        assert!(s.contains("Error:"));
        assert!(s.contains("Suggestions:"));
        assert!(s.contains("--verbose"));
    }

    #[test]
    fn format_plain_verbose_shows_cause_chain() {
        let err = CliError::IoError {
            message: "writing".into(),
            source: io::Error::other("disk full"),
        };
        let s = err.format_plain(true);
        assert!(s.contains("Caused by: disk full"));
        assert!(!s.contains("--verbose"));
    }

    #[test]
    fn verbose_chain_does_not_repeat_core_message() {
        let err = core(ApplicationError::io(
            "/srv/tpl/README.md.j2",
            "read template",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        ));
        let s = err.format_plain(true);
        assert_eq!(s.matches("denied").count(), 1, "{s}");
        assert!(!s.contains("Caused by"), "{s}");
    }

    #[test]
    fn verbose_chain_keeps_new_information() {
        let err = CliError::ConfigError {
            message: "bad file".into(),
            source: Some(Box::new(io::Error::other("expected table"))),
        };
        assert_eq!(err.causes(), vec!["expected table".to_string()]);
    }

    // ── IntoCli ───────────────────────────────────────────────────────────

    #[test]
    fn into_cli_anyhow_is_config_error() {
        let result: anyhow::Result<()> = Err(anyhow::anyhow!("bad license"));
        let cli = result.with_cli_context(|| "defaults.license").unwrap_err();
        assert!(cli.to_string().contains("defaults.license"));
        assert_eq!(cli.exit_code(), 4);
    }
}
