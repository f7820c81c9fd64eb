//! `viperx templates`: list, eject and show templates.

use tracing::{info, instrument};
use viperx_adapters::{BundledSource, source::USER};
use viperx_core::{
    application::ApplicationError,
    domain::{ResolvedTemplate, TemplateListing},
    error::ViperxError,
};

use crate::{
    cli::{ListFormat, OutputFormat, TemplatesCommands, TemplatesEjectArgs, TemplatesListArgs, TemplatesShowArgs},
    commands::build_resolver,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(cmd: TemplatesCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        TemplatesCommands::List(args) => list(args, &config, &output),
        TemplatesCommands::Eject(args) => eject(args, &config, &output),
        TemplatesCommands::Show(args) => show(args, &config, &output),
    }
}

fn list(args: TemplatesListArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let (resolver, user_dir) = build_resolver(args.templates.template_dir.as_deref(), config)?;
    let rows = resolver.list_templates()?;

    let format = if output.is_json() {
        ListFormat::Json
    } else {
        args.format
    };

    match format {
        ListFormat::Json => output.json(&rows)?,
        ListFormat::List => {
            for row in &rows {
                output.data(row.name.as_str())?;
            }
        }
        ListFormat::Table => {
            output.header("ViperX Templates")?;
            let table: Vec<Vec<String>> = rows
                .iter()
                .map(|row| vec![row.name.to_string(), row.source.to_string()])
                .collect();
            output.table(&["Template", "Source"], &table)?;
            output.print("")?;

            let overridden = rows.iter().filter(|row| row.source == USER).count();
            output.info(&format!(
                "{} templates, {} overridden from {}",
                rows.len(),
                overridden,
                user_dir.display()
            ))?;
        }
    }
    Ok(())
}

#[instrument(skip_all)]
fn eject(args: TemplatesEjectArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let (resolver, user_dir) = build_resolver(args.templates.template_dir.as_deref(), config)?;

    let existing = replaced_overrides(&resolver.list_templates()?);
    let count = resolver.materialize_overrides(USER)?;
    info!(count, target = %user_dir.display(), "Templates ejected");

    if output.is_json() {
        return output.json(&serde_json::json!({
            "count": count,
            "target": user_dir.display().to_string(),
        }));
    }
    if existing > 0 {
        output.warning(&format!("Replaced {existing} existing override(s)"))?;
    }
    output.success(&format!(
        "Ejected {count} templates to {}",
        user_dir.display()
    ))?;
    output.info("Edit a file there to override it; delete it to fall back to the bundled copy.")?;
    Ok(())
}

/// User overrides that eject will overwrite: only names the bundled set
/// also ships.
fn replaced_overrides(rows: &[TemplateListing]) -> usize {
    rows.iter()
        .filter(|row| row.source == USER)
        .filter(|row| {
            BundledSource::templates()
                .iter()
                .any(|(name, _)| *name == row.name.as_str())
        })
        .count()
}

fn show(args: TemplatesShowArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let (resolver, _) = build_resolver(args.templates.template_dir.as_deref(), config)?;

    let found = match resolver.resolve(&args.name)? {
        ResolvedTemplate::Found(found) => found,
        ResolvedTemplate::NotFound(miss) => {
            return Err(CliError::Core(ViperxError::from(
                ApplicationError::TemplateNotFound {
                    name: miss.name,
                    searched: miss.searched,
                },
            )));
        }
    };

    if output.is_json() {
        return output.json(&serde_json::json!({
            "name": found.name,
            "source": found.source,
            "content": found.content,
        }));
    }
    if output.format() == OutputFormat::Human {
        output.info(&format!("{} (from {})", found.name, found.source))?;
    }
    output.data(found.content.trim_end_matches('\n'))?;
    Ok(())
}
