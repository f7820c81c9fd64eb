//! Implementation of the `viperx new` command.
//!
//! Responsibility: translate CLI arguments and config defaults into a
//! `ProjectSpec`, call the core generator, and display results. No business
//! logic lives here.

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use viperx_adapters::{LocalFilesystem, MiniJinjaRenderer};
use viperx_core::{
    application::{GenerationReport, GenerationRequest, ProjectGenerator},
    domain::{ProjectKind, ProjectSpec, education},
    error::ViperxError,
};

use crate::{
    cli::NewArgs,
    commands::{build_resolver, explain},
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

/// Execute the `viperx new` command.
///
/// 1. Merge flags over config defaults into a validated `ProjectSpec`
/// 2. Stack the user template directory over the bundled templates
/// 3. Render and write (or only render, for `--dry-run`)
/// 4. Report files, overrides, explanations and next steps
#[instrument(skip_all, fields(project = %args.name))]
pub fn execute(args: NewArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let spec = build_spec(&args, &config)?;
    debug!(
        kind = %spec.kind(),
        license = %spec.license(),
        python = spec.python_version(),
        "Spec resolved"
    );

    let (resolver, user_dir) = build_resolver(args.templates.template_dir.as_deref(), &config)?;
    debug!(user_dir = %user_dir.display(), "Template overrides");

    let generator = ProjectGenerator::new(
        resolver,
        Box::new(MiniJinjaRenderer::new()),
        Box::new(LocalFilesystem::new()),
    );

    let mut request =
        GenerationRequest::new(spec, args.output.clone().unwrap_or_else(|| PathBuf::from(".")));
    request.force = args.force;
    request.dry_run = args.dry_run;
    request.explain = args.explain || config.defaults.explain;

    if !output.is_json() {
        output.header(&format!(
            "Creating '{}' ({} project)...",
            request.spec.name(),
            request.spec.kind()
        ))?;
    }

    let report = generator.generate(&request)?;
    info!(files = report.files.len(), dry_run = report.dry_run, "New finished");

    if output.is_json() {
        return output.json(&report);
    }
    show_report(&report, &request.spec, &output)
}

// ── Spec construction ─────────────────────────────────────────────────────────

fn build_spec(args: &NewArgs, config: &AppConfig) -> CliResult<ProjectSpec> {
    let kind: ProjectKind = match args.kind {
        Some(kind) => kind.into(),
        None => config
            .project_kind()
            .with_cli_context(|| "Cannot pick a project type")?,
    };
    let license = match args.license {
        Some(license) => license.into(),
        None => config
            .license()
            .with_cli_context(|| "Cannot pick a license")?,
    };

    let mut builder = ProjectSpec::builder(&args.name)
        .kind(kind)
        .license(license)
        .python_version(
            args.python
                .clone()
                .unwrap_or_else(|| config.defaults.python_version.clone()),
        )
        .use_env(!args.no_env)
        .use_config(!args.no_config)
        .use_tests(!args.no_tests);

    if let Some(description) = &args.description {
        builder = builder.description(description);
    }
    if let Some(framework) = args.framework {
        builder = builder.framework(framework.into());
    }
    if let Some(author) = args.author.as_ref().or(config.defaults.author.as_ref()) {
        builder = builder.author(author);
    }

    Ok(builder.build().map_err(ViperxError::from)?)
}

// ── Reporting ─────────────────────────────────────────────────────────────────

fn show_report(report: &GenerationReport, spec: &ProjectSpec, output: &OutputManager) -> CliResult<()> {
    let root = report.root.display();

    if report.dry_run {
        output.info(&format!(
            "Dry run: would create {} files in {root}",
            report.files.len()
        ))?;
    } else {
        output.success(&format!(
            "Project '{}' created in {root} ({} files)",
            spec.name(),
            report.files.len()
        ))?;
    }

    for file in &report.files {
        let line = if file.source == "bundled" {
            format!("  {}", file.path.display())
        } else {
            format!("  {}  [{}]", file.path.display(), file.source)
        };
        output.print(&line)?;
    }

    let overridden = report.overridden().count();
    if overridden > 0 {
        output.info(&format!("{overridden} file(s) came from your template overrides"))?;
    }

    for key in &report.explanations {
        if let Some(text) = education::explanation(key) {
            output.print("")?;
            explain::show(output, key, text)?;
        }
    }

    if !report.dry_run {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {root}"))?;
        output.print("  uv sync")?;
        output.print(&format!("  uv run {}", spec.name()))?;
    }
    Ok(())
}
