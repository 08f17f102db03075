//! Tagged string identifiers.
//!
//! Every identifier handed to us by an external subsystem (repositories,
//! modules, playlists, episodes, sources, servers) is opaque text. Each family
//! gets its own newtype so they can't be mixed up, while still serializing as
//! a bare string.

use std::borrow::Borrow;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display, derive_more::From)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }
        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }
        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id! {
    /// Identifier of a repository that distributes resolution modules.
    RepoId
}
string_id! {
    /// Identifier of a module, as declared in its manifest.
    ModuleId
}
string_id! {
    /// Identifier of a playlist (a show, film, or other episode container).
    PlaylistId
}
string_id! {
    /// Identifier of a single item (episode) within a playlist.
    EpisodeId
}
string_id! {
    /// Identifier of an [`EpisodeSource`](crate::EpisodeSource).
    SourceId
}
string_id! {
    /// Identifier of an [`EpisodeServer`](crate::EpisodeServer).
    ServerId
}
