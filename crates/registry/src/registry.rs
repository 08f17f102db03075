use crate::error::{ErrorKind, Result};
use crate::resolver::ResolverHandle;
use exn::OptionExt;
use reel_config::Config;
use reel_models::{EpisodeServerRequest, EpisodeServerResponse, EpisodeSource, EpisodeSourcesRequest, RepoModuleId};
use std::collections::{HashMap, HashSet};
use std::collections::hash_map::Entry;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use tracing::{debug, instrument, warn};

/// Loaded modules, keyed by the repository and module that published them.
///
/// The registry is an ordinary owned value: build it at startup, then hand
/// out references (or an `Arc`) to whatever needs to resolve content.
/// Registering and unregistering need `&mut self`; dispatching only `&self`.
#[derive(Default)]
pub struct ModuleRegistry {
    modules: HashMap<RepoModuleId, ResolverHandle>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a module. Fails if the key is already taken; unregister first to
    /// replace a module.
    pub fn register(&mut self, id: RepoModuleId, resolver: ResolverHandle) -> Result<()> {
        match self.modules.entry(id) {
            Entry::Occupied(entry) => exn::bail!(ErrorKind::AlreadyRegistered(entry.key().clone())),
            Entry::Vacant(entry) => {
                debug!(module = %entry.key(), resolver = resolver.name(), "registered module");
                entry.insert(resolver);
                Ok(())
            },
        }
    }

    /// Register every enabled module from the configuration that `factory`
    /// can build, returning how many were registered.
    ///
    /// Modules the factory returns `None` for are skipped with a warning
    /// rather than failing the whole batch. Key conflicts (with modules
    /// already registered, or within the batch) are checked before anything
    /// is built, so a failed batch leaves the registry untouched.
    #[instrument(skip_all, fields(configured = config.modules.len()))]
    pub fn register_enabled<F>(&mut self, config: &Config, mut factory: F) -> Result<usize>
    where
        F: FnMut(&RepoModuleId) -> Option<ResolverHandle>,
    {
        let ids = config.enabled_modules().collect::<Vec<_>>();
        let mut batch = HashSet::new();
        for id in &ids {
            if self.modules.contains_key(id) || !batch.insert(id) {
                exn::bail!(ErrorKind::AlreadyRegistered(id.clone()));
            }
        }

        let mut registered = 0;
        for id in ids {
            match factory(&id) {
                Some(resolver) => {
                    self.register(id, resolver)?;
                    registered += 1;
                },
                None => warn!(module = %id, "no resolver available for configured module, skipping"),
            }
        }
        Ok(registered)
    }

    pub fn unregister(&mut self, id: &RepoModuleId) -> Option<ResolverHandle> {
        let removed = self.modules.remove(id);
        if removed.is_some() {
            debug!(module = %id, "unregistered module");
        }
        removed
    }

    pub fn get(&self, id: &RepoModuleId) -> Option<&ResolverHandle> {
        self.modules.get(id)
    }

    pub fn contains(&self, id: &RepoModuleId) -> bool {
        self.modules.contains_key(id)
    }

    /// Keys of all registered modules, in no particular order.
    pub fn ids(&self) -> impl Iterator<Item = &RepoModuleId> {
        self.modules.keys()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Ask a module which sources it offers for an episode.
    #[instrument(skip_all, fields(module = %id, playlist = %request.playlist_id, episode = %request.episode_id))]
    pub async fn sources(&self, id: &RepoModuleId, request: &EpisodeSourcesRequest) -> Result<Vec<EpisodeSource>> {
        let resolver = self.resolver(id)?;
        let sources = resolver.sources(request).await?;
        debug!(sources = sources.len(), "enumerated sources");
        Ok(sources)
    }

    /// Ask a module to resolve one server. The response is passed through
    /// untouched, including responses without any links.
    #[instrument(skip_all, fields(module = %id, source = %request.source_id, server = %request.server_id))]
    pub async fn resolve(&self, id: &RepoModuleId, request: &EpisodeServerRequest) -> Result<EpisodeServerResponse> {
        let resolver = self.resolver(id)?;
        let response = resolver.resolve(request).await?;
        debug!(
            links = response.links.len(),
            subtitles = response.subtitles.len(),
            skip_times = response.skip_times.len(),
            "resolved server"
        );
        Ok(response)
    }

    fn resolver(&self, id: &RepoModuleId) -> Result<&ResolverHandle> {
        self.modules.get(id).ok_or_raise(|| ErrorKind::ModuleNotFound(id.clone()))
    }
}

impl Debug for ModuleRegistry {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_map()
            .entries(self.modules.iter().map(|(id, resolver)| (id.to_string(), resolver.name())))
            .finish()
    }
}
