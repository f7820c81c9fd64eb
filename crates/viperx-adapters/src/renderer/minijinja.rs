//! MiniJinja-based renderer.

use minijinja::{AutoEscape, Environment, ErrorKind, UndefinedBehavior};
use tracing::{debug, instrument};
use viperx_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    domain::{RenderContext, TemplateName},
    error::ViperxResult,
};

/// Jinja2-compatible renderer.
///
/// Undefined variables are errors rather than empty strings, and output is
/// never escaped: templates produce TOML, YAML and Python, not HTML.
#[derive(Debug)]
pub struct MiniJinjaRenderer {
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    #[instrument(skip_all, fields(template = %name))]
    fn render(
        &self,
        name: &TemplateName,
        content: &str,
        context: &RenderContext,
    ) -> ViperxResult<String> {
        self.env
            .render_named_str(name.as_str(), content, context)
            .map_err(|err| {
                debug!(error = %err, "Render failed");
                let detail = err.to_string();
                let mapped = match err.kind() {
                    ErrorKind::UndefinedError => ApplicationError::UndefinedVariable {
                        template: name.clone(),
                        detail,
                    },
                    _ => ApplicationError::RenderingFailed {
                        template: name.clone(),
                        reason: detail,
                    },
                };
                mapped.into()
            })
    }
}
