//! Command handlers, one module per subcommand.

use std::path::{Path, PathBuf};

use tracing::debug;
use viperx_adapters::{BundledSource, DirectorySource, source::USER};
use viperx_core::application::LayeredResolver;

use crate::{config::AppConfig, error::CliResult};

pub mod completions;
pub mod config;
pub mod explain;
pub mod learn;
pub mod new;
pub mod templates;

/// The user override directory stacked over the bundled set.
pub(crate) fn build_resolver(
    template_dir: Option<&Path>,
    config: &AppConfig,
) -> CliResult<(LayeredResolver, PathBuf)> {
    let user_dir = config.template_dir(template_dir);
    debug!(user_dir = %user_dir.display(), "Building template resolver");

    let resolver = LayeredResolver::new(vec![
        Box::new(DirectorySource::new(USER, &user_dir)),
        Box::new(BundledSource::new()),
    ])?;
    Ok((resolver, user_dir))
}
