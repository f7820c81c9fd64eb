//! Templates compiled into the binary.

use tracing::trace;
use viperx_core::{
    application::ports::TemplateSource,
    domain::{SourceId, TemplateName},
    error::{ViperxError, ViperxResult},
};

use super::BUNDLED;

macro_rules! bundled {
    ($($name:literal),* $(,)?) => {
        &[$(($name, include_str!(concat!("../../templates/", $name)))),*]
    };
}

static TEMPLATES: &[(&str, &str)] = bundled![
    "LICENSE.j2",
    "README.md.j2",
    "__init__.py.j2",
    "config.py.j2",
    "config.yaml.j2",
    "data_loader.py.j2",
    "env.example.j2",
    "gitignore.j2",
    "main.py.j2",
    "pyproject.toml.j2",
    "test_core.py.j2",
    "tests_init.py.j2",
];

/// Read-only, enumerable source over the templates shipped with viperx.
///
/// This is the lowest layer of the resolver and the origin for
/// `templates eject`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledSource;

impl BundledSource {
    pub fn new() -> Self {
        Self
    }

    /// Raw `(name, content)` pairs.
    pub fn templates() -> &'static [(&'static str, &'static str)] {
        TEMPLATES
    }
}

impl TemplateSource for BundledSource {
    fn id(&self) -> SourceId {
        SourceId::new(BUNDLED)
    }

    fn lookup(&self, name: &TemplateName) -> ViperxResult<Option<String>> {
        let found = TEMPLATES
            .iter()
            .find(|(n, _)| *n == name.as_str())
            .map(|(_, content)| content.to_string());
        trace!(template = %name, hit = found.is_some(), "Bundled lookup");
        Ok(found)
    }

    fn enumerate(&self) -> Option<ViperxResult<Vec<TemplateName>>> {
        Some(
            TEMPLATES
                .iter()
                .map(|(n, _)| TemplateName::parse(n).map_err(ViperxError::from))
                .collect(),
        )
    }
}
