use crate::Identifiable;
use crate::error::{Error, ErrorKind};
use std::fmt::{Display, Formatter, Result as FmtResult};
use url::Url;

/// A subtitle track offered alongside the resolved renditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Subtitle {
    pub url: Url,
    /// Track name shown to the user (usually the language).
    pub name: String,
    pub format: SubtitleFormat,
    /// Provider's suggested default track.
    #[cfg_attr(feature = "serde", serde(rename = "default"))]
    pub is_default: bool,
    /// Player may select this track without user interaction.
    pub autoselect: bool,
}
impl Subtitle {
    /// New subtitle track that is neither default nor auto-selected.
    pub fn new(url: Url, name: impl Into<String>, format: SubtitleFormat) -> Self {
        Self {
            url,
            name: name.into(),
            format,
            is_default: false,
            autoselect: false,
        }
    }

    pub fn with_default(mut self, is_default: bool) -> Self {
        self.is_default = is_default;
        self
    }

    pub fn with_autoselect(mut self, autoselect: bool) -> Self {
        self.autoselect = autoselect;
        self
    }
}
impl Identifiable for Subtitle {
    type Id = SubtitleId;
    fn id(&self) -> SubtitleId {
        SubtitleId(self.url.clone())
    }
}

/// Identity of a [`Subtitle`], recomputed from its URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubtitleId(Url);
impl SubtitleId {
    pub fn url(&self) -> &Url {
        &self.0
    }
}
impl From<Url> for SubtitleId {
    fn from(url: Url) -> Self {
        Self(url)
    }
}

/// Subtitle file format.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubtitleFormat {
    /// WebVTT
    Vtt = 0,
    /// Advanced SubStation Alpha
    Ass = 1,
    /// SubRip
    Srt = 2,
}
impl SubtitleFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vtt => "vtt",
            Self::Ass => "ass",
            Self::Srt => "srt",
        }
    }
}
impl TryFrom<i32> for SubtitleFormat {
    type Error = Error;
    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Ok(match code {
            0 => Self::Vtt,
            1 => Self::Ass,
            2 => Self::Srt,
            _ => exn::bail!(ErrorKind::UnknownCode { field: "subtitle format", code }),
        })
    }
}
impl From<SubtitleFormat> for i32 {
    fn from(format: SubtitleFormat) -> Self {
        format as i32
    }
}
impl Display for SubtitleFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(feature = "serde")]
crate::codec::integer_codec!(SubtitleFormat, i32);
