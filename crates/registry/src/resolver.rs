use crate::error::Result;
use async_trait::async_trait;
use reel_models::{EpisodeServerRequest, EpisodeServerResponse, EpisodeSource, EpisodeSourcesRequest};
use std::sync::Arc;

/// Shared handle to a loaded module.
pub type ResolverHandle = Arc<dyn Resolver>;

/// A loaded content-resolution module.
///
/// How a module actually finds its content (scraping, an API, a sandboxed
/// script) is entirely up to the implementation. Every call is independent
/// and returns freshly built values, so implementations must be safe to call
/// concurrently.
///
/// # Examples
///
/// ```
/// use reel_models::{EpisodeSourcesRequest, RepoModuleId};
/// use reel_registry::{ModuleRegistry, error::Result};
///
/// async fn first_server_links(registry: &ModuleRegistry, id: &RepoModuleId) -> Result<usize> {
///     let request = EpisodeSourcesRequest::new("frieren", "episode-1");
///     let sources = registry.sources(id, &request).await?;
///     let Some((source, server)) = sources.iter().find_map(|s| s.servers.first().map(|v| (s, v))) else {
///         return Ok(0);
///     };
///     let response = registry.resolve(id, &request.server(source.id.clone(), server.id.clone())).await?;
///     Ok(response.links.len())
/// }
/// ```
#[async_trait]
pub trait Resolver: Send + Sync {
    /// Human-readable module name, used for logging only.
    fn name(&self) -> &str;

    /// Enumerate the sources offered for an episode, in presentation order.
    async fn sources(&self, request: &EpisodeSourcesRequest) -> Result<Vec<EpisodeSource>>;

    /// Resolve one server to playable media.
    ///
    /// A response without links means nothing is playable right now; that
    /// is an answer, not an error.
    async fn resolve(&self, request: &EpisodeServerRequest) -> Result<EpisodeServerResponse>;
}
