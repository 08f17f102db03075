//! Integer wire codes for enumerations.
//!
//! Enumerations travel as their integer code, never as their name, so that
//! members can be renamed (or added) without breaking stored records. A type
//! opts in by converting into its code with `From` and back with a fallible
//! `TryFrom`; a code that fails to convert fails the whole record.

macro_rules! integer_codec {
    ($ty:ty, $repr:ty) => {
        impl serde::Serialize for $ty {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error> {
                serde::Serialize::serialize(&<$repr>::from(*self), serializer)
            }
        }
        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> ::std::result::Result<Self, D::Error> {
                let raw = <$repr as serde::Deserialize>::deserialize(deserializer)?;
                <$ty>::try_from(raw).map_err(|err| <D::Error as serde::de::Error>::custom(&*err))
            }
        }
    };
}
pub(crate) use integer_codec;
