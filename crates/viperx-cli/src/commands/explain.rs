//! `viperx explain`: the notes `new --explain` prints, on demand.

use viperx_core::domain::education;

use crate::{
    cli::ExplainArgs,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(args: ExplainArgs, output: OutputManager) -> CliResult<()> {
    let Some(key) = args.key else {
        let keys: Vec<_> = education::explanation_keys().collect();
        if output.is_json() {
            return output.json(&keys);
        }
        output.header("Available explanations")?;
        for key in keys {
            output.data(&format!("  {key}"))?;
        }
        return Ok(());
    };

    let key = normalize_key(&key);
    let text = education::explanation(&key).ok_or_else(|| CliError::UnknownExplanation {
        key: key.clone(),
        available: education::explanation_keys().collect(),
    })?;

    if output.is_json() {
        return output.json(&serde_json::json!({ "key": key, "text": text }));
    }
    show(&output, &key, text)
}

/// Shared with `new --explain`.
pub(crate) fn show(output: &OutputManager, key: &str, text: &str) -> CliResult<()> {
    output.panel(key, text)?;
    Ok(())
}

/// `src-layout` and `SRC_LAYOUT` both name `src_layout`.
fn normalize_key(raw: &str) -> String {
    raw.trim().to_ascii_lowercase().replace('-', "_")
}
