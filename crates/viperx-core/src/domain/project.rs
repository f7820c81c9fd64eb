//! The project being generated.
//!
//! A [`ProjectSpec`] is validated once at construction; everything the
//! generator derives from it (package name, dependencies, which templates
//! apply) is computed from already-valid data.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::DomainError;

// ── Project kind ─────────────────────────────────────────────────────────────

/// Kind of Python project to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectKind {
    /// Standard Python package.
    #[default]
    Classic,
    /// Machine learning: numpy, pandas, scikit-learn.
    Ml,
    /// Deep learning: a tensor framework on top of the ML stack.
    Dl,
}

impl ProjectKind {
    pub const ALL: [Self; 3] = [Self::Classic, Self::Ml, Self::Dl];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Ml => "ml",
            Self::Dl => "dl",
        }
    }

    /// `true` for kinds that ship a data-loading module.
    pub const fn is_data_science(self) -> bool {
        matches!(self, Self::Ml | Self::Dl)
    }
}

impl fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" | "lib" | "library" => Ok(Self::Classic),
            "ml" | "machine-learning" => Ok(Self::Ml),
            "dl" | "deep-learning" => Ok(Self::Dl),
            _ => Err(DomainError::UnknownProjectKind(s.into())),
        }
    }
}

// ── Framework ────────────────────────────────────────────────────────────────

/// Tensor framework for deep-learning projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelFramework {
    #[default]
    PyTorch,
    TensorFlow,
}

impl ModelFramework {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PyTorch => "pytorch",
            Self::TensorFlow => "tensorflow",
        }
    }

    pub const fn dependencies(self) -> &'static [&'static str] {
        match self {
            Self::PyTorch => &["torch>=2.0", "torchvision>=0.15"],
            Self::TensorFlow => &["tensorflow>=2.13"],
        }
    }
}

impl fmt::Display for ModelFramework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelFramework {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pytorch" | "torch" => Ok(Self::PyTorch),
            "tensorflow" | "tf" => Ok(Self::TensorFlow),
            _ => Err(DomainError::UnknownFramework(s.into())),
        }
    }
}

// ── License ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum License {
    #[default]
    #[serde(rename = "MIT")]
    Mit,
    #[serde(rename = "Apache-2.0")]
    Apache2,
    #[serde(rename = "GPLv3")]
    Gpl3,
}

impl License {
    pub const ALL: [Self; 3] = [Self::Mit, Self::Apache2, Self::Gpl3];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mit => "MIT",
            Self::Apache2 => "Apache-2.0",
            Self::Gpl3 => "GPLv3",
        }
    }

    /// SPDX identifier used in `pyproject.toml`.
    pub const fn spdx(&self) -> &'static str {
        match self {
            Self::Mit => "MIT",
            Self::Apache2 => "Apache-2.0",
            Self::Gpl3 => "GPL-3.0-or-later",
        }
    }
}

impl fmt::Display for License {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for License {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mit" => Ok(Self::Mit),
            "apache-2.0" | "apache2" | "apache" => Ok(Self::Apache2),
            "gplv3" | "gpl-3.0" | "gpl3" | "gpl" => Ok(Self::Gpl3),
            _ => Err(DomainError::UnknownLicense(s.into())),
        }
    }
}

// ── Spec ─────────────────────────────────────────────────────────────────────

/// Everything needed to generate one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSpec {
    name: String,
    package_name: String,
    description: String,
    kind: ProjectKind,
    framework: Option<ModelFramework>,
    author: String,
    license: License,
    python_version: String,
    use_env: bool,
    use_config: bool,
    use_tests: bool,
}

impl ProjectSpec {
    pub fn builder(name: impl Into<String>) -> ProjectSpecBuilder {
        ProjectSpecBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Importable package name: lowercase, separators folded to `_`.
    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> ProjectKind {
        self.kind
    }

    pub fn framework(&self) -> Option<ModelFramework> {
        self.framework
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn license(&self) -> License {
        self.license
    }

    pub fn python_version(&self) -> &str {
        &self.python_version
    }

    pub fn use_env(&self) -> bool {
        self.use_env
    }

    pub fn use_config(&self) -> bool {
        self.use_config
    }

    pub fn use_tests(&self) -> bool {
        self.use_tests
    }

    /// Runtime dependencies written into `pyproject.toml`.
    pub fn dependencies(&self) -> Vec<String> {
        let mut deps: Vec<&str> = Vec::new();
        if self.use_env {
            deps.push("python-dotenv>=1.0");
        }
        if self.use_config {
            deps.push("pyyaml>=6.0");
        }
        if self.kind.is_data_science() {
            deps.extend(["numpy>=1.24", "pandas>=2.0", "matplotlib>=3.7"]);
        }
        match self.kind {
            ProjectKind::Classic => {}
            ProjectKind::Ml => deps.extend(["scikit-learn>=1.3", "tqdm>=4.66"]),
            ProjectKind::Dl => {
                deps.extend(self.framework.unwrap_or_default().dependencies());
                deps.push("tqdm>=4.66");
            }
        }
        deps.into_iter().map(String::from).collect()
    }
}

/// Builder for [`ProjectSpec`]; validation happens in [`Self::build`].
#[derive(Debug, Clone)]
pub struct ProjectSpecBuilder {
    name: String,
    description: Option<String>,
    kind: ProjectKind,
    framework: Option<ModelFramework>,
    author: Option<String>,
    license: License,
    python_version: Option<String>,
    use_env: bool,
    use_config: bool,
    use_tests: bool,
}

impl ProjectSpecBuilder {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            kind: ProjectKind::default(),
            framework: None,
            author: None,
            license: License::default(),
            python_version: None,
            use_env: true,
            use_config: true,
            use_tests: true,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn kind(mut self, kind: ProjectKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn framework(mut self, framework: ModelFramework) -> Self {
        self.framework = Some(framework);
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn license(mut self, license: License) -> Self {
        self.license = license;
        self
    }

    pub fn python_version(mut self, version: impl Into<String>) -> Self {
        self.python_version = Some(version.into());
        self
    }

    pub fn use_env(mut self, enabled: bool) -> Self {
        self.use_env = enabled;
        self
    }

    pub fn use_config(mut self, enabled: bool) -> Self {
        self.use_config = enabled;
        self
    }

    pub fn use_tests(mut self, enabled: bool) -> Self {
        self.use_tests = enabled;
        self
    }

    pub fn build(self) -> Result<ProjectSpec, DomainError> {
        let name = self.name.trim().to_string();
        validate_project_name(&name)?;

        let framework = match (self.kind, self.framework) {
            (ProjectKind::Dl, fw) => Some(fw.unwrap_or_default()),
            (kind, Some(fw)) => {
                return Err(DomainError::IncompatibleFramework {
                    framework: fw.to_string(),
                    kind: kind.to_string(),
                    required: ProjectKind::Dl.as_str(),
                });
            }
            (_, None) => None,
        };

        let python_version = self.python_version.unwrap_or_else(|| "3.11".into());
        validate_python_version(&python_version)?;

        let description = self
            .description
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| format!("A {} Python project", self.kind));

        Ok(ProjectSpec {
            package_name: package_name_for(&name),
            name,
            description,
            kind: self.kind,
            framework,
            author: self.author.unwrap_or_else(|| "Your Name".into()),
            license: self.license,
            python_version,
            use_env: self.use_env,
            use_config: self.use_config,
            use_tests: self.use_tests,
        })
    }
}

fn validate_project_name(name: &str) -> Result<(), DomainError> {
    let invalid = |reason: &str| DomainError::InvalidProjectName {
        name: name.into(),
        reason: reason.into(),
    };

    let first = name.chars().next().ok_or_else(|| invalid("name cannot be empty"))?;
    if !first.is_ascii_alphabetic() {
        return Err(invalid("name must start with a letter"));
    }
    if let Some(bad) = name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
    {
        return Err(invalid(&format!("character '{bad}' is not allowed")));
    }
    Ok(())
}

fn validate_python_version(version: &str) -> Result<(), DomainError> {
    let mut parts = version.split('.');
    let valid = matches!(
        (parts.next(), parts.next(), parts.next()),
        (Some(major), Some(minor), None)
            if major == "3" && !minor.is_empty() && minor.chars().all(|c| c.is_ascii_digit())
    );
    if valid {
        Ok(())
    } else {
        Err(DomainError::InvalidPythonVersion(version.into()))
    }
}

fn package_name_for(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '-' | '.' | ' ' => '_',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}
