//! Value objects produced by template resolution.

use std::fmt;

use serde::Serialize;

use super::{DomainError, TemplateName};

/// Identifier of a template source, e.g. `user` or `bundled`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct SourceId(String);

impl SourceId {
    /// Create an identifier without validation (for compile-time constants).
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Fallible constructor for identifiers coming from user input.
    pub fn parse(id: &str) -> Result<Self, DomainError> {
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidSourceId {
                id: id.into(),
                reason: "identifier cannot be empty".into(),
            });
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(DomainError::InvalidSourceId {
                id: id.into(),
                reason: "identifier cannot contain whitespace".into(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for SourceId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for SourceId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Template content together with the source that supplied it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundTemplate {
    pub name: TemplateName,
    pub content: String,
    pub source: SourceId,
}

/// A lookup miss. Carries every source that was consulted, in search order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateMiss {
    pub name: TemplateName,
    pub searched: Vec<SourceId>,
}

/// Outcome of [`crate::application::LayeredResolver::resolve`].
///
/// A miss is a normal result, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedTemplate {
    Found(FoundTemplate),
    NotFound(TemplateMiss),
}

impl ResolvedTemplate {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn name(&self) -> &TemplateName {
        match self {
            Self::Found(found) => &found.name,
            Self::NotFound(miss) => &miss.name,
        }
    }

    pub fn content(&self) -> Option<&str> {
        match self {
            Self::Found(found) => Some(&found.content),
            Self::NotFound(_) => None,
        }
    }

    pub fn source(&self) -> Option<&SourceId> {
        match self {
            Self::Found(found) => Some(&found.source),
            Self::NotFound(_) => None,
        }
    }

    pub fn found(self) -> Option<FoundTemplate> {
        match self {
            Self::Found(found) => Some(found),
            Self::NotFound(_) => None,
        }
    }
}

/// One row of [`crate::application::LayeredResolver::list_templates`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateListing {
    pub name: TemplateName,
    pub source: SourceId,
}
