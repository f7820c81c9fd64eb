use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::{SourceId, TemplateName, error::DomainError};

/// Rendered project ready to be written.
///
/// This is the output of the rendering step. It contains no business logic,
/// only data: every file records the template and source it came from.
#[derive(Debug, Clone)]
pub struct ProjectStructure {
    pub(crate) root: PathBuf,
    pub(crate) files: Vec<FileToWrite>,
}

impl ProjectStructure {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            files: Vec::new(),
        }
    }

    pub fn add_file(&mut self, file: FileToWrite) {
        self.files.push(file);
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::new();
        for file in &self.files {
            if !seen.insert(file.path.as_path()) {
                return Err(DomainError::DuplicatePath {
                    path: file.path.display().to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn files(&self) -> impl Iterator<Item = &FileToWrite> {
        self.files.iter()
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileToWrite {
    /// Path relative to the project root.
    pub path: PathBuf,
    pub content: String,
    pub template: TemplateName,
    pub source: SourceId,
}

impl FileToWrite {
    pub fn size(&self) -> usize {
        self.content.len()
    }
}
