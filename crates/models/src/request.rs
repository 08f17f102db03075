//! Request shapes sent to a resolution module.
//!
//! Requests narrow in two steps: first ask which sources exist for an episode,
//! then ask for exactly one server of one of those sources to be resolved. The
//! resolver answers the first with an ordered `Vec<EpisodeSource>` and the
//! second with a single [`EpisodeServerResponse`](crate::EpisodeServerResponse).

use crate::id::{EpisodeId, PlaylistId, ServerId, SourceId};

/// Level one: "what sources exist for this episode?"
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct EpisodeSourcesRequest {
    pub playlist_id: PlaylistId,
    pub episode_id: EpisodeId,
}
impl EpisodeSourcesRequest {
    pub fn new(playlist_id: impl Into<PlaylistId>, episode_id: impl Into<EpisodeId>) -> Self {
        Self {
            playlist_id: playlist_id.into(),
            episode_id: episode_id.into(),
        }
    }

    /// Narrow this request down to one server of one source.
    pub fn server(&self, source_id: impl Into<SourceId>, server_id: impl Into<ServerId>) -> EpisodeServerRequest {
        EpisodeServerRequest {
            playlist_id: self.playlist_id.clone(),
            episode_id: self.episode_id.clone(),
            source_id: source_id.into(),
            server_id: server_id.into(),
        }
    }
}

/// Level two: "resolve exactly this server."
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct EpisodeServerRequest {
    pub playlist_id: PlaylistId,
    pub episode_id: EpisodeId,
    pub source_id: SourceId,
    pub server_id: ServerId,
}
impl EpisodeServerRequest {
    pub fn new(
        playlist_id: impl Into<PlaylistId>,
        episode_id: impl Into<EpisodeId>,
        source_id: impl Into<SourceId>,
        server_id: impl Into<ServerId>,
    ) -> Self {
        Self {
            playlist_id: playlist_id.into(),
            episode_id: episode_id.into(),
            source_id: source_id.into(),
            server_id: server_id.into(),
        }
    }

    /// The level-one request this one was narrowed from.
    pub fn sources(&self) -> EpisodeSourcesRequest {
        EpisodeSourcesRequest {
            playlist_id: self.playlist_id.clone(),
            episode_id: self.episode_id.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn narrowing_keeps_episode_address() {
        let sources = EpisodeSourcesRequest::new("playlist", "episode-12");
        let server = sources.server("source", "server-2");
        assert_eq!(server, EpisodeServerRequest::new("playlist", "episode-12", "source", "server-2"));
        assert_eq!(server.sources(), sources);
    }

    #[rstest]
    #[case(EpisodeServerRequest::new("p", "e", "src", "a"), EpisodeServerRequest::new("p", "e", "src", "b"))]
    #[case(EpisodeServerRequest::new("p", "e", "src-1", "a"), EpisodeServerRequest::new("p", "e", "src-2", "a"))]
    #[case(EpisodeServerRequest::new("p", "e-1", "src", "a"), EpisodeServerRequest::new("p", "e-2", "src", "a"))]
    fn test_server_requests_differ(#[case] a: EpisodeServerRequest, #[case] b: EpisodeServerRequest) {
        assert_ne!(a, b);
        assert_eq!(a.clone(), a);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    #[case(
        EpisodeSourcesRequest::new("p1", "e1"),
        r#"{"playlistId":"p1","episodeId":"e1"}"#
    )]
    fn test_sources_request_serialize(#[case] input: EpisodeSourcesRequest, #[case] expected: &str) {
        assert_eq!(serde_json::to_string(&input).unwrap(), expected);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    #[case(
        EpisodeServerRequest::new("p1", "e1", "s1", "v1"),
        r#"{"playlistId":"p1","episodeId":"e1","sourceId":"s1","serverId":"v1"}"#
    )]
    fn test_server_request_deserialize(#[case] expected: EpisodeServerRequest, #[case] input: &str) {
        assert_eq!(serde_json::from_str::<EpisodeServerRequest>(input).unwrap(), expected);
    }
}
