use crate::Identifiable;
use crate::link::{Link, LinkId};
use crate::skip::SkipTime;
use crate::subtitle::{Subtitle, SubtitleId};
use std::collections::BTreeMap;

/// Everything needed to start playing one resolved server.
///
/// An empty `links` list is a valid answer meaning no renditions are
/// available; it is not an error. `headers` must be sent verbatim with every
/// request for the resolved media (referer, cookies, user agent, etc.) and
/// their names are not checked. `skip_times` are kept in the order reported
/// and are not validated.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct EpisodeServerResponse {
    /// Decodes as empty when the field is absent; modules often omit it
    /// when nothing was found.
    #[cfg_attr(feature = "serde", serde(default))]
    pub links: Vec<Link>,
    /// Decodes as empty when the field is absent.
    #[cfg_attr(feature = "serde", serde(default))]
    pub subtitles: Vec<Subtitle>,
    pub headers: BTreeMap<String, String>,
    pub skip_times: Vec<SkipTime>,
}
impl EpisodeServerResponse {
    pub fn new(
        links: Vec<Link>,
        subtitles: Vec<Subtitle>,
        headers: BTreeMap<String, String>,
        skip_times: Vec<SkipTime>,
    ) -> Self {
        Self {
            links,
            subtitles,
            headers,
            skip_times,
        }
    }

    /// A response with nothing to play.
    pub fn unavailable() -> Self {
        Self::default()
    }

    pub fn with_links(mut self, links: impl IntoIterator<Item = Link>) -> Self {
        self.links = links.into_iter().collect();
        self
    }

    pub fn with_subtitles(mut self, subtitles: impl IntoIterator<Item = Subtitle>) -> Self {
        self.subtitles = subtitles.into_iter().collect();
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_skip_times(mut self, skip_times: impl IntoIterator<Item = SkipTime>) -> Self {
        self.skip_times = skip_times.into_iter().collect();
        self
    }

    /// Returns true if no renditions were found.
    pub fn is_unavailable(&self) -> bool {
        self.links.is_empty()
    }

    /// First link with the given identity.
    pub fn link(&self, id: &LinkId) -> Option<&Link> {
        self.links.iter().find(|link| &link.id() == id)
    }

    /// First subtitle with the given identity.
    pub fn subtitle(&self, id: &SubtitleId) -> Option<&Subtitle> {
        self.subtitles.iter().find(|subtitle| &subtitle.id() == id)
    }
}
