//! In-memory template source.

use std::{
    collections::BTreeMap,
    sync::{Arc, RwLock},
};

use viperx_core::{
    application::{ApplicationError, ports::TemplateSource},
    domain::{SourceId, TemplateName},
    error::ViperxResult,
};

/// Thread-safe map of templates. Clones share the same storage.
#[derive(Debug, Clone)]
pub struct MemorySource {
    id: SourceId,
    inner: Arc<RwLock<BTreeMap<TemplateName, String>>>,
    enumerable: bool,
    writable: bool,
}

impl MemorySource {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: SourceId::new(id),
            inner: Arc::new(RwLock::new(BTreeMap::new())),
            enumerable: true,
            writable: true,
        }
    }

    /// Build from `(name, content)` pairs; invalid names are rejected.
    pub fn with_templates<'a>(
        id: impl Into<String>,
        templates: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> ViperxResult<Self> {
        let source = Self::new(id);
        for (name, content) in templates {
            source.insert(TemplateName::parse(name)?, content)?;
        }
        Ok(source)
    }

    /// A source that answers lookups but cannot list its contents.
    pub fn without_enumeration(mut self) -> Self {
        self.enumerable = false;
        self
    }

    pub fn read_only(mut self) -> Self {
        self.writable = false;
        self
    }

    pub fn insert(&self, name: TemplateName, content: impl Into<String>) -> ViperxResult<()> {
        self.inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?
            .insert(name, content.into());
        Ok(())
    }

    /// Remove a template, returning its content if it was present.
    pub fn remove(&self, name: &TemplateName) -> ViperxResult<Option<String>> {
        Ok(self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?
            .remove(name))
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TemplateSource for MemorySource {
    fn id(&self) -> SourceId {
        self.id.clone()
    }

    fn lookup(&self, name: &TemplateName) -> ViperxResult<Option<String>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(inner.get(name).cloned())
    }

    fn enumerate(&self) -> Option<ViperxResult<Vec<TemplateName>>> {
        if !self.enumerable {
            return None;
        }
        Some(
            self.inner
                .read()
                .map(|m| m.keys().cloned().collect())
                .map_err(|_| ApplicationError::StoreLockError.into()),
        )
    }

    fn supports_write(&self) -> bool {
        self.writable
    }

    fn write(&self, name: &TemplateName, content: &str) -> ViperxResult<()> {
        if !self.writable {
            return Err(ApplicationError::Unsupported {
                source_id: self.id.clone(),
                operation: "write",
            }
            .into());
        }
        self.insert(name.clone(), content)
    }
}
