//! In-memory resolver for testing.

use crate::Resolver;
use crate::error::{ErrorKind, Result};
use async_trait::async_trait;
use reel_models::{EpisodeServerRequest, EpisodeServerResponse, EpisodeSource, EpisodeSourcesRequest};
use std::collections::HashMap;

/// In-memory resolver for testing.
///
/// Answers from canned sources and responses. Unknown episodes have no
/// sources; unknown servers fail with [`ErrorKind::ServerNotFound`].
#[derive(Debug, Clone)]
pub struct MockResolver {
    name: String,
    sources: HashMap<EpisodeSourcesRequest, Vec<EpisodeSource>>,
    responses: HashMap<EpisodeServerRequest, EpisodeServerResponse>,
    failure: Option<String>,
}

impl MockResolver {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sources: HashMap::new(),
            responses: HashMap::new(),
            failure: None,
        }
    }

    pub fn with_sources(
        mut self,
        request: EpisodeSourcesRequest,
        sources: impl IntoIterator<Item = EpisodeSource>,
    ) -> Self {
        self.sources.insert(request, sources.into_iter().collect());
        self
    }

    pub fn with_response(mut self, request: EpisodeServerRequest, response: EpisodeServerResponse) -> Self {
        self.responses.insert(request, response);
        self
    }

    /// Make every call fail with [`ErrorKind::ModuleFailure`].
    pub fn with_failure(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }

    fn check_failure(&self) -> Result<()> {
        match &self.failure {
            Some(message) => exn::bail!(ErrorKind::ModuleFailure(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl Resolver for MockResolver {
    fn name(&self) -> &str {
        &self.name
    }

    async fn sources(&self, request: &EpisodeSourcesRequest) -> Result<Vec<EpisodeSource>> {
        self.check_failure()?;
        Ok(self.sources.get(request).cloned().unwrap_or_default())
    }

    async fn resolve(&self, request: &EpisodeServerRequest) -> Result<EpisodeServerResponse> {
        self.check_failure()?;
        match self.responses.get(request) {
            Some(response) => Ok(response.clone()),
            None => exn::bail!(ErrorKind::ServerNotFound(request.server_id.clone())),
        }
    }
}
