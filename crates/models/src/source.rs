use crate::Identifiable;
use crate::id::{ServerId, SourceId};

/// A provider of an episode, as enumerated by a module.
///
/// The order of `servers` is the order the module wants them presented in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct EpisodeSource {
    pub id: SourceId,
    pub display_name: String,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub description: Option<String>,
    /// Decodes as empty when the field is absent, leaving a source with
    /// nothing to offer rather than failing the whole listing.
    #[cfg_attr(feature = "serde", serde(default))]
    pub servers: Vec<EpisodeServer>,
}
impl EpisodeSource {
    pub fn new(id: impl Into<SourceId>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            description: None,
            servers: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_servers(mut self, servers: impl IntoIterator<Item = EpisodeServer>) -> Self {
        self.servers = servers.into_iter().collect();
        self
    }

    /// Find one of this source's servers by ID.
    pub fn server(&self, id: &ServerId) -> Option<&EpisodeServer> {
        self.servers.iter().find(|server| &server.id == id)
    }
}
impl Identifiable for EpisodeSource {
    type Id = SourceId;
    fn id(&self) -> SourceId {
        self.id.clone()
    }
}

/// A resolvable endpoint of a source.
///
/// What a server resolves to is not part of the server itself; resolving it
/// produces a separate [`EpisodeServerResponse`](crate::EpisodeServerResponse).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct EpisodeServer {
    pub id: ServerId,
    pub display_name: String,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub description: Option<String>,
}
impl EpisodeServer {
    pub fn new(id: impl Into<ServerId>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
impl Identifiable for EpisodeServer {
    type Id = ServerId;
    fn id(&self) -> ServerId {
        self.id.clone()
    }
}
