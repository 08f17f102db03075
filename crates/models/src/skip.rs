use crate::error::{Error, ErrorKind};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// A time range the player may offer to skip.
///
/// Intervals are taken as reported: nothing checks that `start_time` precedes
/// `end_time`, or that intervals don't overlap. Times must be finite to be
/// serialized, since JSON has no representation for NaN or infinity.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SkipTime {
    /// Seconds from the start of the episode.
    #[cfg_attr(feature = "serde", serde(serialize_with = "serialize_seconds"))]
    pub start_time: f64,
    /// Seconds from the start of the episode.
    #[cfg_attr(feature = "serde", serde(serialize_with = "serialize_seconds"))]
    pub end_time: f64,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: SkipType,
}
impl SkipTime {
    pub fn new(start_time: f64, end_time: f64, kind: SkipType) -> Self {
        Self { start_time, end_time, kind }
    }
}

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipType {
    Opening = 0,
    Ending = 1,
    Recap = 2,
}
impl SkipType {
    /// Returns the action label for the skip button.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Opening => "Skip Opening",
            Self::Ending => "Skip Ending",
            Self::Recap => "Skip Recap",
        }
    }
}
impl TryFrom<i32> for SkipType {
    type Error = Error;
    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Ok(match code {
            0 => Self::Opening,
            1 => Self::Ending,
            2 => Self::Recap,
            _ => exn::bail!(ErrorKind::UnknownCode { field: "skip type", code }),
        })
    }
}
impl From<SkipType> for i32 {
    fn from(kind: SkipType) -> Self {
        kind as i32
    }
}
impl Display for SkipType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(feature = "serde")]
fn serialize_seconds<S: serde::Serializer>(seconds: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if !seconds.is_finite() {
        return Err(serde::ser::Error::custom(format!("skip time must be finite, got {seconds}")));
    }
    serializer.serialize_f64(*seconds)
}

#[cfg(feature = "serde")]
crate::codec::integer_codec!(SkipType, i32);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(SkipType::Opening, 0, "Skip Opening")]
    #[case(SkipType::Ending, 1, "Skip Ending")]
    #[case(SkipType::Recap, 2, "Skip Recap")]
    fn test_skip_type(#[case] kind: SkipType, #[case] code: i32, #[case] label: &str) {
        assert_eq!(i32::from(kind), code);
        assert_eq!(SkipType::try_from(code).unwrap(), kind);
        assert_eq!(kind.to_string(), label);
    }

    #[test]
    fn unvalidated_interval_is_kept() {
        let backwards = SkipTime::new(90.0, 5.5, SkipType::Recap);
        assert_eq!(backwards.start_time, 90.0);
        assert_eq!(backwards.end_time, 5.5);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    #[case(SkipTime::new(0.0, 89.5, SkipType::Opening), r#"{"startTime":0.0,"endTime":89.5,"type":0}"#)]
    #[case(SkipTime::new(1320.25, 1410.0, SkipType::Ending), r#"{"startTime":1320.25,"endTime":1410.0,"type":1}"#)]
    fn test_skip_time_serialize(#[case] input: SkipTime, #[case] expected: &str) {
        assert_eq!(serde_json::to_string(&input).unwrap(), expected);
        assert_eq!(serde_json::from_str::<SkipTime>(expected).unwrap(), input);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    #[case(SkipTime::new(f64::NAN, 10.0, SkipType::Opening))]
    #[case(SkipTime::new(0.0, f64::INFINITY, SkipType::Ending))]
    #[case(SkipTime::new(f64::NEG_INFINITY, 0.0, SkipType::Recap))]
    fn non_finite_skip_time_refuses_to_serialize(#[case] input: SkipTime) {
        let err = serde_json::to_string(&input).unwrap_err();
        assert!(err.to_string().contains("must be finite"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn unknown_skip_type_fails() {
        assert!(serde_json::from_str::<SkipTime>(r#"{"startTime":0,"endTime":1,"type":3}"#).is_err());
    }
}
