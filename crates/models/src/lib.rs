//! Addressing and playable media models for pluggable content-resolution
//! modules.
//!
//! A host application talks to resolution modules (published by external
//! repositories) in two steps:
//!
//! 1. An [`EpisodeSourcesRequest`] asks a module which [`EpisodeSource`]s it
//!    offers for an episode. Each source lists its [`EpisodeServer`]s.
//! 2. An [`EpisodeServerRequest`] asks the module to resolve one of those
//!    servers, and it answers with an [`EpisodeServerResponse`]: the playable
//!    [`Link`]s, [`Subtitle`]s, HTTP headers and [`SkipTime`]s.
//!
//! Modules are addressed by [`RepoModuleId`]. Rendition quality travels as an
//! integer, see [`Quality`].
//!
//! Every type here is an immutable value; nothing is persisted, fetched or
//! validated beyond what decoding requires. With the `serde` feature (on by
//! default) records serialize with camelCase field names and enumerations as
//! their integer codes.

#[cfg(feature = "serde")]
mod codec;
pub mod error;
mod id;
mod identity;
mod link;
mod quality;
mod request;
mod response;
mod skip;
mod source;
mod subtitle;

pub use crate::id::{EpisodeId, ModuleId, PlaylistId, RepoId, ServerId, SourceId};
pub use crate::identity::RepoModuleId;
pub use crate::link::{Link, LinkFormat, LinkId};
pub use crate::quality::{CustomResolution, Quality};
pub use crate::request::{EpisodeServerRequest, EpisodeSourcesRequest};
pub use crate::response::EpisodeServerResponse;
pub use crate::skip::{SkipTime, SkipType};
pub use crate::source::{EpisodeServer, EpisodeSource};
pub use crate::subtitle::{Subtitle, SubtitleFormat, SubtitleId};
pub use url::Url;

/// Entities with a stable identity, independent of structural equality.
///
/// Sources and servers are identified by their declared IDs. Links and
/// subtitles have no declared ID: their identity is recomputed from their URL,
/// so two links to the same URL are the same entity regardless of quality or
/// format.
pub trait Identifiable {
    type Id: Clone + Eq + std::hash::Hash;
    fn id(&self) -> Self::Id;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn models_are_shareable_across_threads() {
        assert_send_sync::<RepoModuleId>();
        assert_send_sync::<EpisodeSourcesRequest>();
        assert_send_sync::<EpisodeServerRequest>();
        assert_send_sync::<EpisodeSource>();
        assert_send_sync::<EpisodeServerResponse>();
    }
}
