//! Layered template resolution.
//!
//! The resolver holds an ordered list of [`TemplateSource`]s. Lower index
//! means higher priority: the first source that defines a name wins, no
//! matter what the other sources contain or when their files were touched.
//!
//! Nothing is cached. Every call reads the sources again, so deleting an
//! override is visible on the next `resolve`.

use std::collections::{BTreeSet, HashSet};

use tracing::{debug, info, instrument, trace, warn};

use crate::{
    application::{ApplicationError, ports::TemplateSource},
    domain::{FoundTemplate, ResolvedTemplate, SourceId, TemplateListing, TemplateMiss, TemplateName},
    error::{ViperxError, ViperxResult},
};

pub struct LayeredResolver {
    sources: Vec<Box<dyn TemplateSource>>,
}

impl std::fmt::Debug for LayeredResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayeredResolver")
            .field("sources", &self.source_ids())
            .finish()
    }
}

impl LayeredResolver {
    /// Build a resolver searching `sources` in the given order.
    ///
    /// Fails with a configuration error when the list is empty or two
    /// sources share an identifier. No source is consulted here.
    pub fn new(sources: Vec<Box<dyn TemplateSource>>) -> ViperxResult<Self> {
        if sources.is_empty() {
            return Err(ApplicationError::NoSources.into());
        }

        let mut seen = HashSet::new();
        for source in &sources {
            let id = source.id();
            if !seen.insert(id.clone()) {
                return Err(ApplicationError::DuplicateSource { id }.into());
            }
        }

        debug!(sources = ?seen, "Resolver constructed");
        Ok(Self { sources })
    }

    /// Sources in search order.
    pub fn sources(&self) -> impl Iterator<Item = &dyn TemplateSource> {
        self.sources.iter().map(|s| s.as_ref())
    }

    pub fn source_ids(&self) -> Vec<SourceId> {
        self.sources.iter().map(|s| s.id()).collect()
    }

    /// Find a source by identifier.
    pub fn source(&self, id: &str) -> Option<&dyn TemplateSource> {
        self.sources().find(|s| s.id() == id)
    }

    /// Resolve a raw template name.
    ///
    /// The name is validated first; an invalid name is a validation error
    /// and no source is consulted.
    pub fn resolve(&self, name: &str) -> ViperxResult<ResolvedTemplate> {
        let name = TemplateName::parse(name)?;
        self.resolve_name(&name)
    }

    /// Resolve an already-validated name.
    #[instrument(skip_all, fields(template = %name))]
    pub fn resolve_name(&self, name: &TemplateName) -> ViperxResult<ResolvedTemplate> {
        let mut searched = Vec::with_capacity(self.sources.len());

        for source in &self.sources {
            let id = source.id();
            match source.lookup(name)? {
                Some(content) => {
                    debug!(source = %id, "Template found");
                    return Ok(ResolvedTemplate::Found(FoundTemplate {
                        name: name.clone(),
                        content,
                        source: id,
                    }));
                }
                None => {
                    trace!(source = %id, "Not in source");
                    searched.push(id);
                }
            }
        }

        debug!(searched = searched.len(), "Template not found in any source");
        Ok(ResolvedTemplate::NotFound(TemplateMiss {
            name: name.clone(),
            searched,
        }))
    }

    /// Every name known to an enumerable source, with the source that wins it.
    ///
    /// Non-enumerable sources are skipped for discovery but still take part
    /// in choosing the winner. Sorted by name.
    #[instrument(skip(self))]
    pub fn list_templates(&self) -> ViperxResult<Vec<TemplateListing>> {
        let mut names = BTreeSet::new();

        for source in &self.sources {
            match source.enumerate() {
                Some(listed) => names.extend(listed?),
                None => trace!(source = %source.id(), "Source cannot enumerate, skipped"),
            }
        }

        let mut listing = Vec::with_capacity(names.len());
        for name in names {
            match self.resolve_name(&name)? {
                ResolvedTemplate::Found(found) => listing.push(TemplateListing {
                    name: found.name,
                    source: found.source,
                }),
                // Removed between enumeration and lookup.
                ResolvedTemplate::NotFound(miss) => {
                    warn!(template = %miss.name, "Enumerated template vanished")
                }
            }
        }

        debug!(count = listing.len(), "Templates listed");
        Ok(listing)
    }

    /// Copy every template of the lowest-priority source into `target`.
    ///
    /// Returns how many templates were written. Existing files in the target
    /// are overwritten; the copy is not atomic.
    pub fn materialize_overrides(&self, target: &str) -> ViperxResult<usize> {
        let origin = self
            .sources
            .last()
            .map(|s| s.id())
            .ok_or(ApplicationError::NoSources)?;
        self.materialize_from(origin.as_str(), target)
    }

    /// Copy every template `origin` enumerates into `target`.
    #[instrument(skip(self))]
    pub fn materialize_from(&self, origin: &str, target: &str) -> ViperxResult<usize> {
        let origin_source = self.known_source(origin)?;
        let target_source = self.known_source(target)?;

        let origin_id = origin_source.id();
        let target_id = target_source.id();
        if origin_id == target_id {
            return Err(ApplicationError::SameSource { id: target_id }.into());
        }

        let names = origin_source
            .enumerate()
            .ok_or_else(|| ApplicationError::Unsupported {
                source_id: origin_id.clone(),
                operation: "enumerate",
            })??;

        if !target_source.supports_write() {
            return Err(ApplicationError::Unsupported {
                source_id: target_id,
                operation: "write",
            }
            .into());
        }

        let interrupted = |written: usize, err: ViperxError| {
            ApplicationError::MaterializeInterrupted {
                target: target_id.clone(),
                written,
                reason: Box::new(err),
            }
        };

        target_source
            .ensure_root()
            .map_err(|e| interrupted(0, e))?;

        let mut written = 0;
        for name in &names {
            let content = match origin_source.lookup(name) {
                Ok(Some(content)) => content,
                Ok(None) => {
                    warn!(template = %name, "Enumerated template vanished, skipping");
                    continue;
                }
                Err(e) => return Err(interrupted(written, e).into()),
            };
            target_source
                .write(name, &content)
                .map_err(|e| interrupted(written, e))?;
            trace!(template = %name, "Copied");
            written += 1;
        }

        info!(origin = %origin_id, target = %target_id, written, "Templates materialized");
        Ok(written)
    }

    fn known_source(&self, id: &str) -> ViperxResult<&dyn TemplateSource> {
        self.source(id).ok_or_else(|| {
            ApplicationError::UnknownSource {
                id: SourceId::new(id),
            }
            .into()
        })
    }
}
