//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use viperx_core::domain::{License, ModelFramework, ProjectKind};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "viperx",
    bin_name = "viperx",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f40d} Python project scaffolding with overridable templates",
    long_about = "ViperX generates uv-ready Python projects (classic, ML, DL). \
                  Every file comes from a template that you can override by \
                  dropping a file with the same name in your template directory.",
    after_help = "EXAMPLES:\n\
        \x20 viperx new my-lib\n\
        \x20 viperx new my-model --type dl --framework tensorflow --explain\n\
        \x20 viperx templates eject\n\
        \x20 viperx learn packaging",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new Python project.
    #[command(
        visible_alias = "n",
        about = "Create a new Python project",
        after_help = "EXAMPLES:\n\
            \x20 viperx new my-lib -d \"Handy helpers\" -a \"Ada Lovelace\"\n\
            \x20 viperx new churn --type ml --no-env\n\
            \x20 viperx new vision --type dl --framework pytorch -o ~/code\n\
            \x20 viperx new demo --dry-run --explain"
    )]
    New(NewArgs),

    /// Inspect and customise templates.
    #[command(
        about = "Inspect and customise templates",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 viperx templates list\n\
            \x20 viperx templates show README.md.j2\n\
            \x20 viperx templates eject --template-dir ./my-templates"
    )]
    Templates(TemplatesCommands),

    /// Learning resources about Python packaging and tooling.
    #[command(
        about = "Show learning resources",
        after_help = "EXAMPLES:\n\
            \x20 viperx learn\n\
            \x20 viperx learn uv"
    )]
    Learn(LearnArgs),

    /// Explain a generated file or layout decision.
    #[command(
        about = "Explain a project convention",
        after_help = "EXAMPLES:\n\
            \x20 viperx explain\n\
            \x20 viperx explain src_layout"
    )]
    Explain(ExplainArgs),

    /// Manage the ViperX configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 viperx config get defaults.author\n\
            \x20 viperx config list\n\
            \x20 viperx config path"
    )]
    Config(ConfigCommands),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 viperx completions bash > ~/.local/share/bash-completion/completions/viperx\n\
            \x20 viperx completions zsh  > ~/.zfunc/_viperx\n\
            \x20 viperx completions fish > ~/.config/fish/completions/viperx.fish"
    )]
    Completions(CompletionsArgs),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `viperx new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Project name; also the directory created under `--output`.
    #[arg(value_name = "NAME", help = "Project name")]
    pub name: String,

    #[arg(
        short = 'd',
        long = "description",
        value_name = "TEXT",
        help = "One-line project description"
    )]
    pub description: Option<String>,

    /// Falls back to `defaults.project_type`, then `classic`.
    #[arg(
        short = 't',
        long = "type",
        value_name = "TYPE",
        value_enum,
        help = "Project type"
    )]
    pub kind: Option<ProjectType>,

    /// Only valid with `--type dl`.
    #[arg(
        short = 'f',
        long = "framework",
        value_name = "FRAMEWORK",
        value_enum,
        help = "Deep-learning framework"
    )]
    pub framework: Option<Framework>,

    #[arg(
        short = 'a',
        long = "author",
        value_name = "NAME",
        help = "Author name (default: defaults.author)"
    )]
    pub author: Option<String>,

    #[arg(
        short = 'l',
        long = "license",
        value_name = "LICENSE",
        value_enum,
        help = "Project license"
    )]
    pub license: Option<LicenseArg>,

    #[arg(
        long = "python",
        value_name = "VERSION",
        help = "Python version, e.g. 3.12"
    )]
    pub python: Option<String>,

    #[arg(long = "no-env", help = "Skip the .env.example file")]
    pub no_env: bool,

    #[arg(long = "no-config", help = "Skip config.yaml and its loader")]
    pub no_config: bool,

    #[arg(long = "no-tests", help = "Skip the tests/ directory")]
    pub no_tests: bool,

    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Parent directory (default: current directory)"
    )]
    pub output: Option<PathBuf>,

    /// Overwrite an existing directory (destructive).
    #[arg(long = "force", help = "Overwrite existing directory")]
    pub force: bool,

    /// Render everything but write nothing.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,

    #[arg(long = "explain", help = "Explain each generated file")]
    pub explain: bool,

    #[command(flatten)]
    pub templates: TemplateDirArg,
}

/// Override directory shared by every command that resolves templates.
#[derive(Debug, Args, Default)]
pub struct TemplateDirArg {
    #[arg(
        long = "template-dir",
        value_name = "DIR",
        help = "User template directory (default: templates.user_dir)"
    )]
    pub template_dir: Option<PathBuf>,
}

// ── templates ─────────────────────────────────────────────────────────────────

/// Subcommands for `viperx templates`.
#[derive(Debug, Subcommand)]
pub enum TemplatesCommands {
    /// List every template name and the source that serves it.
    #[command(visible_alias = "ls")]
    List(TemplatesListArgs),

    /// Copy the bundled templates into the user template directory.
    Eject(TemplatesEjectArgs),

    /// Print a template's resolved content.
    Show(TemplatesShowArgs),
}

#[derive(Debug, Args)]
pub struct TemplatesListArgs {
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,

    #[command(flatten)]
    pub templates: TemplateDirArg,
}

#[derive(Debug, Args)]
pub struct TemplatesEjectArgs {
    #[command(flatten)]
    pub templates: TemplateDirArg,
}

#[derive(Debug, Args)]
pub struct TemplatesShowArgs {
    /// Template name, e.g. `README.md.j2`.
    #[arg(value_name = "NAME")]
    pub name: String,

    #[command(flatten)]
    pub templates: TemplateDirArg,
}

/// Output format for `templates list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
}

// ── learn / explain ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct LearnArgs {
    /// Topic key; omit to list topics.
    #[arg(value_name = "TOPIC")]
    pub topic: Option<String>,
}

#[derive(Debug, Args)]
pub struct ExplainArgs {
    /// Explanation key; omit to list keys.
    #[arg(value_name = "KEY")]
    pub key: Option<String>,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `viperx completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `viperx config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.author`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ProjectType {
    Classic,
    Ml,
    Dl,
}

impl From<ProjectType> for ProjectKind {
    fn from(value: ProjectType) -> Self {
        match value {
            ProjectType::Classic => Self::Classic,
            ProjectType::Ml => Self::Ml,
            ProjectType::Dl => Self::Dl,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Framework {
    #[value(alias = "torch")]
    Pytorch,
    #[value(alias = "tf")]
    Tensorflow,
}

impl From<Framework> for ModelFramework {
    fn from(value: Framework) -> Self {
        match value {
            Framework::Pytorch => Self::PyTorch,
            Framework::Tensorflow => Self::TensorFlow,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LicenseArg {
    #[value(name = "MIT", alias = "mit")]
    Mit,
    #[value(name = "Apache-2.0", alias = "apache")]
    Apache,
    #[value(name = "GPLv3", alias = "gpl")]
    Gpl,
}

impl From<LicenseArg> for License {
    fn from(value: LicenseArg) -> Self {
        match value {
            LicenseArg::Mit => Self::Mit,
            LicenseArg::Apache => Self::Apache2,
            LicenseArg::Gpl => Self::Gpl3,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
