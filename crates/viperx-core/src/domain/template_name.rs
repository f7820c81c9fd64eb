use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::Serialize;

use super::DomainError;

/// A relative, slash-separated template identifier such as `README.md.j2`.
///
/// Invariant: non-empty, relative, no `..` segment, no empty segments.
/// Backslashes are read as separators and `.` segments are dropped, so
/// `.\\src//main.py.j2` and `src/main.py.j2` compare equal. Comparison is
/// case-sensitive and never adds or strips extensions.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct TemplateName(String);

impl TemplateName {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let invalid = |reason: &str| DomainError::InvalidTemplateName {
            name: raw.to_string(),
            reason: reason.to_string(),
        };

        if raw.trim().is_empty() {
            return Err(invalid("name cannot be empty"));
        }
        if raw.contains('\0') {
            return Err(invalid("name cannot contain NUL"));
        }

        let unified = raw.replace('\\', "/");
        if unified.starts_with('/') {
            return Err(invalid("absolute names are not allowed"));
        }
        if unified.ends_with('/') {
            return Err(invalid("name must refer to a file, not a directory"));
        }

        let mut segments = Vec::new();
        for segment in unified.split('/') {
            match segment {
                "" | "." => continue,
                ".." => return Err(invalid("'..' segments are not allowed")),
                s if segments.is_empty() && is_drive_prefix(s) => {
                    return Err(invalid("absolute names are not allowed"));
                }
                s => segments.push(s),
            }
        }

        if segments.is_empty() {
            return Err(invalid("name has no file component"));
        }

        Ok(Self(segments.join("/")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Final segment, e.g. `main.py.j2` for `src/main.py.j2`.
    pub fn file_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/')
    }

    /// Platform path relative to a source root.
    pub fn to_relative_path(&self) -> PathBuf {
        self.segments().collect()
    }
}

fn is_drive_prefix(segment: &str) -> bool {
    let bytes = segment.as_bytes();
    bytes.len() == 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

impl fmt::Display for TemplateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TemplateName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for TemplateName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for TemplateName {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}
