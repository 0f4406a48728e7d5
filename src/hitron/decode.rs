use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use thiserror::Error;
use tracing::warn;

/// Decodes a response body into one of the device records.
///
/// Structural problems (invalid JSON, wrong shapes) and malformed load-bearing fields fail the
/// whole decode. Soft fields fall back to their zero value and invalid list elements are
/// dropped, see [`skip_invalid`].
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, DecodeError> {
    serde_json::from_slice(body).map_err(|source| DecodeError {
        record: record_name::<T>(),
        body: String::from_utf8_lossy(body).into_owned(),
        source,
    })
}

/// Deserializes a list, decoding each element on its own. Elements that fail are logged and
/// left out, so a single malformed entry never fails the enclosing record. A missing or `null`
/// list is empty.
pub(crate) fn skip_invalid<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let values = Option::<Vec<serde_json::Value>>::deserialize(deserializer)?.unwrap_or_default();

    let elements = values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match T::deserialize(value) {
            Ok(element) => Some(element),
            Err(error) => {
                warn!(index, record = record_name::<T>(), %error, "⚠️ Dropped invalid list element");
                None
            }
        })
        .collect();

    Ok(elements)
}

/// Deserializes a field the device sometimes sends as `null`, which is read as the zero value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn record_name<T>() -> &'static str {
    let name = std::any::type_name::<T>();
    name.rsplit("::").next().unwrap_or(name)
}

#[derive(Error, Debug)]
#[error("failed to decode {record} from {body:?}: {source}")]
pub struct DecodeError {
    pub record: &'static str,
    pub body: String,
    #[source]
    pub source: serde_json::Error,
}

/// A load-bearing field that could not be parsed.
#[derive(Error, Debug, PartialEq)]
#[error("invalid {field} {value:?}: {reason}")]
pub struct FieldError {
    pub field: &'static str,
    pub value: String,
    pub reason: String,
}
