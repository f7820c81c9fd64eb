//! Directory-backed template source.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument, trace};
use viperx_core::{
    application::ports::TemplateSource,
    domain::{SourceId, TemplateName},
    error::ViperxResult,
};
use walkdir::WalkDir;

use crate::filesystem::local::map_io_error;

/// Templates stored as files under a root directory.
///
/// A missing root is not an error: lookups miss and enumeration is empty.
/// Writes create the root and any parent directories on demand.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    id: SourceId,
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(id: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            id: SourceId::new(id),
            root: root.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_of(&self, name: &TemplateName) -> PathBuf {
        self.root.join(name.to_relative_path())
    }
}

impl TemplateSource for DirectorySource {
    fn id(&self) -> SourceId {
        self.id.clone()
    }

    #[instrument(level = "trace", skip_all, fields(source = %self.id, template = %name))]
    fn lookup(&self, name: &TemplateName) -> ViperxResult<Option<String>> {
        let path = self.path_of(name);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            // A plain file where a parent directory should be.
            Err(e) if e.kind() == io::ErrorKind::NotADirectory => Ok(None),
            // `root/dir` named like a template: treat as absent.
            Err(_) if path.is_dir() => Ok(None),
            Err(e) => Err(map_io_error(&path, e, "read template")),
        }
    }

    fn enumerate(&self) -> Option<ViperxResult<Vec<TemplateName>>> {
        Some(self.walk())
    }

    fn supports_write(&self) -> bool {
        true
    }

    fn ensure_root(&self) -> ViperxResult<()> {
        fs::create_dir_all(&self.root).map_err(|e| map_io_error(&self.root, e, "create directory"))
    }

    fn write(&self, name: &TemplateName, content: &str) -> ViperxResult<()> {
        let path = self.path_of(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| map_io_error(parent, e, "create directory"))?;
        }
        fs::write(&path, content).map_err(|e| map_io_error(&path, e, "write template"))?;
        trace!(path = %path.display(), "Template written");
        Ok(())
    }

    fn location(&self) -> Option<PathBuf> {
        Some(self.root.clone())
    }
}

impl DirectorySource {
    fn walk(&self) -> ViperxResult<Vec<TemplateName>> {
        if !self.root.is_dir() {
            debug!(root = %self.root.display(), "Template directory absent");
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in WalkDir::new(&self.root).follow_links(true) {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(self.root.as_path()).to_path_buf();
                let io = e
                    .into_io_error()
                    .unwrap_or_else(|| io::Error::other("filesystem loop detected"));
                map_io_error(&path, io, "list templates")
            })?;

            if !entry.file_type().is_file() {
                continue;
            }
            let Ok(relative) = entry.path().strip_prefix(&self.root) else {
                continue;
            };
            let raw = relative.to_string_lossy();
            match TemplateName::parse(&raw) {
                Ok(name) => names.push(name),
                Err(e) => debug!(path = %raw, error = %e, "Skipping unnameable file"),
            }
        }

        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn name(s: &str) -> TemplateName {
        TemplateName::parse(s).unwrap()
    }

    #[test]
    fn missing_root_means_empty() {
        let tmp = TempDir::new().unwrap();
        let src = DirectorySource::new("user", tmp.path().join("nope"));

        assert_eq!(src.lookup(&name("README.md.j2")).unwrap(), None);
        assert!(src.enumerate().unwrap().unwrap().is_empty());
    }

    #[test]
    fn reads_nested_templates() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("src")).unwrap();
        fs::write(tmp.path().join("src/main.py.j2"), "print()").unwrap();
        fs::write(tmp.path().join("README.md.j2"), "# hi").unwrap();

        let src = DirectorySource::new("user", tmp.path());
        assert_eq!(
            src.lookup(&name("src/main.py.j2")).unwrap().as_deref(),
            Some("print()")
        );
        assert_eq!(
            src.enumerate().unwrap().unwrap(),
            vec![name("README.md.j2"), name("src/main.py.j2")]
        );
    }

    #[test]
    fn directory_with_template_name_is_a_miss() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("odd.j2")).unwrap();
        let src = DirectorySource::new("user", tmp.path());
        assert_eq!(src.lookup(&name("odd.j2")).unwrap(), None);
    }

    #[test]
    fn file_in_place_of_parent_directory_is_a_miss() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("sub"), "not a directory").unwrap();
        let src = DirectorySource::new("user", tmp.path());
        assert_eq!(src.lookup(&name("sub/x.j2")).unwrap(), None);
    }

    #[test]
    fn write_creates_root_and_overwrites() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("templates");
        let src = DirectorySource::new("user", &root);

        src.ensure_root().unwrap();
        src.write(&name("deep/x.j2"), "one").unwrap();
        src.write(&name("deep/x.j2"), "two").unwrap();

        assert_eq!(fs::read_to_string(root.join("deep/x.j2")).unwrap(), "two");
        assert_eq!(src.location(), Some(root));
    }
}
