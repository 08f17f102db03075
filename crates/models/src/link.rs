use crate::Identifiable;
use crate::error::{Error, ErrorKind};
use crate::quality::Quality;
use std::fmt::{Display, Formatter, Result as FmtResult};
use url::Url;

/// One playable rendition of an episode.
///
/// A link's identity is its URL alone (see [`Link::id`]). Two links pointing
/// at the same URL are the same entity even when they disagree on quality or
/// format; structural equality (`==`) still compares every field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Link {
    pub url: Url,
    pub quality: Quality,
    pub format: LinkFormat,
}
impl Link {
    pub fn new(url: Url, quality: Quality, format: LinkFormat) -> Self {
        Self { url, quality, format }
    }
}
impl Identifiable for Link {
    type Id = LinkId;
    fn id(&self) -> LinkId {
        LinkId(self.url.clone())
    }
}

/// Identity of a [`Link`], recomputed from its URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LinkId(Url);
impl LinkId {
    pub fn url(&self) -> &Url {
        &self.0
    }
}
impl From<Url> for LinkId {
    fn from(url: Url) -> Self {
        Self(url)
    }
}

/// Streaming protocol of a [`Link`].
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkFormat {
    /// HTTP Live Streaming (`.m3u8`)
    Hls = 0,
    /// MPEG-DASH (`.mpd`)
    Dash = 1,
}
impl LinkFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hls => "HLS",
            Self::Dash => "DASH",
        }
    }
}
impl TryFrom<i32> for LinkFormat {
    type Error = Error;
    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Ok(match code {
            0 => Self::Hls,
            1 => Self::Dash,
            _ => exn::bail!(ErrorKind::UnknownCode { field: "link format", code }),
        })
    }
}
impl From<LinkFormat> for i32 {
    fn from(format: LinkFormat) -> Self {
        format as i32
    }
}
impl Display for LinkFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(feature = "serde")]
crate::codec::integer_codec!(LinkFormat, i32);
