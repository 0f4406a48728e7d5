use crate::parsers::parse_int;
use serde::{Deserialize, Deserializer};
use std::str::FromStr;

/// A value the device sends as a JSON number on some firmware and as a string on others.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NumberOrString {
    Number(i64),
    String(String),
}

impl NumberOrString {
    /// The value as an integer, zero when it does not fit `T` or is not a number.
    pub fn to_int<T>(&self) -> T
    where
        T: TryFrom<i64> + FromStr + Default,
    {
        match self {
            NumberOrString::Number(n) => T::try_from(*n).unwrap_or_default(),
            NumberOrString::String(s) => parse_int(s),
        }
    }
}

/// Deserializes an integer field that may arrive as a number or a string. `null` is zero.
pub(crate) fn deserialize_int<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64> + FromStr + Default,
{
    Ok(Option::<NumberOrString>::deserialize(deserializer)?.map(|v| v.to_int()).unwrap_or_default())
}

impl Default for NumberOrString {
    fn default() -> Self {
        NumberOrString::String(String::new())
    }
}
