//! Project Generator - the main use case.
//!
//! This service coordinates the generation workflow:
//! 1. Plan which templates apply to the project spec
//! 2. Resolve each through the layered resolver
//! 3. Render with the project's context
//! 4. Write to the filesystem, rolling back on failure
//!
//! The CLI decides what to print; this service only reports what it did.

use std::path::{Path, PathBuf};

use chrono::Datelike;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError, LayeredResolver,
        ports::{Filesystem, TemplateRenderer},
    },
    domain::{
        FileToWrite, ProjectSpec, ProjectStructure, RenderContext, ResolvedTemplate, SourceId,
        TemplateName, education::explanations as notes,
    },
    error::{ViperxError, ViperxResult},
};

/// What to generate and how.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub spec: ProjectSpec,
    /// Parent directory; the project lands in `output_dir/<name>`.
    pub output_dir: PathBuf,
    pub explain: bool,
    pub force: bool,
    pub dry_run: bool,
}

impl GenerationRequest {
    pub fn new(spec: ProjectSpec, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            spec,
            output_dir: output_dir.into(),
            explain: false,
            force: false,
            dry_run: false,
        }
    }

    pub fn project_root(&self) -> PathBuf {
        self.output_dir.join(self.spec.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedFile {
    /// Relative to the project root.
    pub path: PathBuf,
    pub template: TemplateName,
    pub source: SourceId,
}

/// Outcome of a generation run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub root: PathBuf,
    pub files: Vec<GeneratedFile>,
    /// Explanation keys, in the order the matching files were generated.
    /// Empty unless the request asked for explanations.
    pub explanations: Vec<&'static str>,
    pub dry_run: bool,
}

impl GenerationReport {
    /// Files that came from a source other than `bundled`.
    pub fn overridden(&self) -> impl Iterator<Item = &GeneratedFile> {
        self.files.iter().filter(|f| f.source != "bundled")
    }
}

/// One step of the generation plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    pub template: TemplateName,
    pub output: PathBuf,
}

pub struct ProjectGenerator {
    resolver: LayeredResolver,
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl ProjectGenerator {
    pub fn new(
        resolver: LayeredResolver,
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            resolver,
            renderer,
            filesystem,
        }
    }

    pub fn resolver(&self) -> &LayeredResolver {
        &self.resolver
    }

    /// Templates that apply to `spec`, in generation order.
    pub fn plan(spec: &ProjectSpec) -> ViperxResult<Vec<PlannedFile>> {
        let pkg = PathBuf::from("src").join(spec.package_name());
        let mut steps: Vec<(&str, PathBuf)> = vec![
            ("pyproject.toml.j2", "pyproject.toml".into()),
            ("README.md.j2", "README.md".into()),
            ("gitignore.j2", ".gitignore".into()),
            ("LICENSE.j2", "LICENSE".into()),
            ("__init__.py.j2", pkg.join("__init__.py")),
            ("main.py.j2", pkg.join("main.py")),
        ];
        if spec.use_config() {
            steps.push(("config.yaml.j2", pkg.join("config.yaml")));
            steps.push(("config.py.j2", pkg.join("config.py")));
        }
        if spec.use_env() {
            steps.push(("env.example.j2", pkg.join(".env")));
            steps.push(("env.example.j2", pkg.join(".env.example")));
        }
        if spec.kind().is_data_science() {
            steps.push(("data_loader.py.j2", pkg.join("data_loader.py")));
        }
        if spec.use_tests() {
            steps.push(("tests_init.py.j2", pkg.join("tests").join("__init__.py")));
            steps.push(("test_core.py.j2", pkg.join("tests").join("test_core.py")));
        }

        steps
            .into_iter()
            .map(|(template, output)| -> ViperxResult<PlannedFile> {
                Ok(PlannedFile {
                    template: TemplateName::parse(template)?,
                    output,
                })
            })
            .collect()
    }

    /// Explanation keys for `spec`, in generation order.
    pub fn explanations_for(spec: &ProjectSpec) -> Vec<&'static str> {
        let mut keys = vec![
            notes::PYPROJECT_TOML,
            notes::SRC_LAYOUT,
            notes::GITIGNORE_PATTERNS,
            notes::LICENSE_CHOICE,
            notes::DEPENDENCY_PINNING,
            notes::ENTRY_POINTS,
        ];
        if spec.use_config() {
            keys.push(notes::CONFIG_IN_PACKAGE);
        }
        if spec.use_env() {
            keys.push(notes::ENV_ISOLATION);
        }
        if spec.use_tests() {
            keys.push(notes::TESTS_ISOLATION);
        }
        keys
    }

    /// Render every planned template without touching the filesystem.
    #[instrument(skip_all, fields(project = %request.spec.name()))]
    pub fn render(&self, request: &GenerationRequest) -> ViperxResult<ProjectStructure> {
        let context = RenderContext::for_project(&request.spec, chrono::Local::now().year());
        let mut structure = ProjectStructure::new(request.project_root());

        for step in Self::plan(&request.spec)? {
            let found = match self.resolver.resolve_name(&step.template)? {
                ResolvedTemplate::Found(found) => found,
                ResolvedTemplate::NotFound(miss) => {
                    return Err(ApplicationError::TemplateNotFound {
                        name: miss.name,
                        searched: miss.searched,
                    }
                    .into());
                }
            };

            let content = self
                .renderer
                .render(&step.template, &found.content, &context)?;
            debug!(template = %step.template, source = %found.source, "Rendered");

            structure.add_file(FileToWrite {
                path: step.output,
                content,
                template: found.name,
                source: found.source,
            });
        }

        structure.validate()?;
        Ok(structure)
    }

    /// Generate a project.
    #[instrument(
        skip_all,
        fields(
            project = %request.spec.name(),
            kind = %request.spec.kind(),
            output = %request.output_dir.display()
        )
    )]
    pub fn generate(&self, request: &GenerationRequest) -> ViperxResult<GenerationReport> {
        info!("Generating {} project", request.spec.kind());

        let root = request.project_root();
        let existed = self.filesystem.exists(&root);
        if existed && !request.force && !request.dry_run {
            return Err(ApplicationError::ProjectExists { path: root }.into());
        }

        let structure = self.render(request)?;

        if request.dry_run {
            info!(files = structure.file_count(), "Dry run, nothing written");
        } else {
            self.write_structure(&structure, !existed)?;
            info!(files = structure.file_count(), "Project generated");
        }

        Ok(GenerationReport {
            root: structure.root().to_path_buf(),
            files: structure
                .files()
                .map(|f| GeneratedFile {
                    path: f.path.clone(),
                    template: f.template.clone(),
                    source: f.source.clone(),
                })
                .collect(),
            explanations: if request.explain {
                Self::explanations_for(&request.spec)
            } else {
                Vec::new()
            },
            dry_run: request.dry_run,
        })
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Write project structure to filesystem with rollback on failure.
    ///
    /// Only a root this call created is removed; a pre-existing directory
    /// (written into with `force`) is left as it is.
    fn write_structure(&self, structure: &ProjectStructure, created_root: bool) -> ViperxResult<()> {
        match self.write_all(structure) {
            Ok(()) => Ok(()),
            Err(e) => {
                if created_root {
                    warn!("Write failed, attempting rollback");
                    self.rollback(structure.root());
                }
                Err(e)
            }
        }
    }

    fn write_all(&self, structure: &ProjectStructure) -> ViperxResult<()> {
        self.filesystem.create_dir_all(structure.root())?;

        for file in structure.files() {
            let path = structure.root().join(&file.path);
            if let Some(parent) = path.parent() {
                self.filesystem.create_dir_all(parent)?;
            }
            self.filesystem.write_file(&path, &file.content)?;
        }

        Ok(())
    }

    /// Best-effort rollback on failure.
    fn rollback(&self, root: &Path) {
        if let Err(e) = self.filesystem.remove_dir_all(root) {
            let err: ViperxError = ApplicationError::RollbackFailed {
                path: root.to_path_buf(),
                reason: e.to_string(),
            }
            .into();
            warn!(error = %err, "Rollback failed");
        } else {
            info!("Rollback successful");
        }
    }
}
