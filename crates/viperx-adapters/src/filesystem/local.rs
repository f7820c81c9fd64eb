//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use tracing::trace;
use viperx_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{ViperxError, ViperxResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> ViperxResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> ViperxResult<()> {
        trace!(path = %path.display(), bytes = content.len(), "Writing file");
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn remove_dir_all(&self, path: &Path) -> ViperxResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }
}

pub(crate) fn map_io_error(path: &Path, e: io::Error, operation: &'static str) -> ViperxError {
    ApplicationError::io(path, operation, e).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_and_removes_tree() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let root = tmp.path().join("proj");

        fs.create_dir_all(&root.join("src/pkg")).unwrap();
        fs.write_file(&root.join("src/pkg/__init__.py"), "").unwrap();
        assert!(fs.exists(&root.join("src/pkg/__init__.py")));

        fs.remove_dir_all(&root).unwrap();
        assert!(!fs.exists(&root));
    }

    #[test]
    fn write_into_missing_parent_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let err = LocalFilesystem
            .write_file(&tmp.path().join("missing/file.txt"), "x")
            .unwrap_err();
        assert_eq!(err.category(), viperx_core::error::ErrorCategory::Io);
        assert!(err.to_string().contains("write file"));
    }
}
