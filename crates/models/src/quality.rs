//! Rendition quality and its transport integer encoding.
//!
//! Providers report renditions either by a well-known tier or by whatever
//! vertical resolution they happen to have. Both travel as a single integer:
//!
//! | Quality      | Transport integer        |
//! |--------------|--------------------------|
//! | `Auto`       | [`Quality::AUTO`] (`i64::MAX`) |
//! | `Q1080`      | `1080`                   |
//! | `Q720`       | `720`                    |
//! | `Q480`       | `480`                    |
//! | `Q360`       | `360`                    |
//! | `Custom(n)`  | `n`                      |
//!
//! Decoding checks the sentinel first, then the tiers (exact match only), then
//! falls back to `Custom` for any other positive integer. Zero and negative
//! integers don't decode.

use crate::error::{Error, ErrorKind, Result};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Playable rendition quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quality {
    /// Adaptive; the player picks.
    Auto,
    Q1080,
    Q720,
    Q480,
    Q360,
    /// Any other provider-reported resolution.
    Custom(CustomResolution),
}
impl Quality {
    /// Transport value reserved for [`Quality::Auto`].
    pub const AUTO: i64 = i64::MAX;

    /// Every named (non-custom) quality, highest tier first.
    pub const NAMED: [Quality; 5] = [Self::Auto, Self::Q1080, Self::Q720, Self::Q480, Self::Q360];

    /// Build a quality from a raw resolution, mapping tier values onto their
    /// named variant so `Quality::custom(720)` is `Q720`, not `Custom(720)`.
    pub fn custom(resolution: i64) -> Result<Self> {
        match Self::named(resolution) {
            Some(named) => Ok(named),
            None => CustomResolution::new(resolution).map(Self::Custom),
        }
    }

    /// Encode to the transport integer.
    pub fn to_raw(self) -> i64 {
        match self {
            Self::Auto => Self::AUTO,
            Self::Q1080 => 1_080,
            Self::Q720 => 720,
            Self::Q480 => 480,
            Self::Q360 => 360,
            Self::Custom(resolution) => resolution.get(),
        }
    }

    /// Human-readable label.
    pub fn as_str(&self) -> Option<&'static str> {
        match self {
            Self::Auto => Some("Auto"),
            Self::Q1080 => Some("1080p"),
            Self::Q720 => Some("720p"),
            Self::Q480 => Some("480p"),
            Self::Q360 => Some("360p"),
            Self::Custom(_) => None,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }

    fn named(raw: i64) -> Option<Self> {
        Self::NAMED.into_iter().find(|named| named.to_raw() == raw)
    }
}
impl TryFrom<i64> for Quality {
    type Error = Error;
    fn try_from(raw: i64) -> std::result::Result<Self, Self::Error> {
        if let Some(named) = Self::named(raw) {
            return Ok(named);
        }
        if raw <= 0 {
            exn::bail!(ErrorKind::MalformedQuality(raw));
        }
        // Anything positive that isn't the sentinel or a tier is a valid custom value.
        CustomResolution::new(raw).map(Self::Custom)
    }
}
impl From<Quality> for i64 {
    fn from(quality: Quality) -> Self {
        quality.to_raw()
    }
}
impl Display for Quality {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.as_str() {
            Some(label) => write!(f, "{label}"),
            None => write!(f, "{}p", self.to_raw()),
        }
    }
}

/// A positive resolution outside the named tiers.
///
/// Only constructible through [`CustomResolution::new`], which refuses
/// anything that would not decode back to `Quality::Custom`: zero, negatives,
/// the auto sentinel, and the named tier values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CustomResolution(i64);
impl CustomResolution {
    pub fn new(resolution: i64) -> Result<Self> {
        if resolution <= 0 || Quality::named(resolution).is_some() {
            exn::bail!(ErrorKind::InvalidResolution(resolution));
        }
        Ok(Self(resolution))
    }

    pub fn get(self) -> i64 {
        self.0
    }
}
impl TryFrom<i64> for CustomResolution {
    type Error = Error;
    fn try_from(value: i64) -> std::result::Result<Self, Self::Error> {
        Self::new(value)
    }
}
impl Display for CustomResolution {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}p", self.0)
    }
}

#[cfg(feature = "serde")]
crate::codec::integer_codec!(Quality, i64);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn custom(resolution: i64) -> Quality {
        Quality::Custom(CustomResolution::new(resolution).unwrap())
    }

    #[rstest]
    #[case(Quality::Auto)]
    #[case(Quality::Q1080)]
    #[case(Quality::Q720)]
    #[case(Quality::Q480)]
    #[case(Quality::Q360)]
    fn test_named_round_trip(#[case] quality: Quality) {
        assert_eq!(Quality::try_from(quality.to_raw()).unwrap(), quality);
    }

    #[rstest]
    #[case(Quality::Auto, i64::MAX)]
    #[case(Quality::Q1080, 1080)]
    #[case(Quality::Q720, 720)]
    #[case(Quality::Q480, 480)]
    #[case(Quality::Q360, 360)]
    fn test_encode_named(#[case] quality: Quality, #[case] expected: i64) {
        assert_eq!(quality.to_raw(), expected);
        assert_eq!(i64::from(quality), expected);
    }

    #[rstest]
    #[case(1)]
    #[case(144)]
    #[case(240)]
    #[case(359)]
    #[case(361)]
    #[case(1081)]
    #[case(1440)]
    #[case(2160)]
    #[case(i64::MAX - 1)]
    fn test_custom_round_trip(#[case] raw: i64) {
        let decoded = Quality::try_from(raw).unwrap();
        assert_eq!(decoded, custom(raw));
        assert_eq!(decoded.to_raw(), raw);
    }

    #[rstest]
    #[case(0)]
    #[case(-1)]
    #[case(-720)]
    #[case(i64::MIN)]
    fn test_non_positive_does_not_decode(#[case] raw: i64) {
        let err = Quality::try_from(raw).unwrap_err();
        assert_eq!(*err, ErrorKind::MalformedQuality(raw));
    }

    #[test]
    fn only_sentinel_decodes_to_auto() {
        assert_eq!(Quality::try_from(Quality::AUTO).unwrap(), Quality::Auto);
        for raw in [1, 360, 1080, 4320, i64::MAX - 1] {
            assert_ne!(Quality::try_from(raw).unwrap(), Quality::Auto);
        }
    }

    #[test]
    fn tiers_match_exactly_without_rounding() {
        assert_eq!(Quality::try_from(720).unwrap(), Quality::Q720);
        assert_eq!(Quality::try_from(1081).unwrap(), custom(1081));
        assert_eq!(Quality::try_from(719).unwrap(), custom(719));
    }

    #[rstest]
    #[case(Quality::Auto, "Auto")]
    #[case(Quality::Q1080, "1080p")]
    #[case(Quality::Q720, "720p")]
    #[case(Quality::Q480, "480p")]
    #[case(Quality::Q360, "360p")]
    #[case(custom(1081), "1081p")]
    #[case(custom(2160), "2160p")]
    fn test_display(#[case] quality: Quality, #[case] expected: &str) {
        assert_eq!(quality.to_string(), expected);
    }

    #[rstest]
    #[case(0)]
    #[case(-4)]
    #[case(360)]
    #[case(480)]
    #[case(720)]
    #[case(1080)]
    #[case(i64::MAX)]
    fn test_custom_resolution_rejects_reserved(#[case] raw: i64) {
        let err = CustomResolution::new(raw).unwrap_err();
        assert_eq!(*err, ErrorKind::InvalidResolution(raw));
    }

    #[test]
    fn custom_constructor_normalizes_tiers() {
        assert_eq!(Quality::custom(720).unwrap(), Quality::Q720);
        assert_eq!(Quality::custom(i64::MAX).unwrap(), Quality::Auto);
        assert_eq!(Quality::custom(900).unwrap(), custom(900));
        assert!(Quality::custom(0).is_err());
        assert!(Quality::custom(900).unwrap().is_custom());
    }

    #[cfg(feature = "serde")]
    #[rstest]
    #[case(Quality::Auto, "9223372036854775807")]
    #[case(Quality::Q720, "720")]
    #[case(custom(1081), "1081")]
    fn test_serialize_as_integer(#[case] quality: Quality, #[case] expected: &str) {
        assert_eq!(serde_json::to_string(&quality).unwrap(), expected);
        assert_eq!(serde_json::from_str::<Quality>(expected).unwrap(), quality);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    #[case("0")]
    #[case("-360")]
    #[case(r#""720p""#)]
    #[case(r#""q720""#)]
    fn test_deserialize_rejects(#[case] input: &str) {
        assert!(serde_json::from_str::<Quality>(input).is_err());
    }
}
