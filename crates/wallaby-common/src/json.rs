//! Generic object/JSON round-trip helpers.
//!
//! Thin delegation to `serde_json`: serialization uses its canonical text
//! form and key ordering, deserialization re-associates the parsed data
//! with the target type `T` so all of `T`'s methods are available on the
//! result. Parse failures surface the underlying [`serde_json::Error`]
//! unwrapped.

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Serialize any serde-enabled value to its canonical JSON text.
///
/// # Errors
///
/// Returns an error if the value cannot be represented as JSON (e.g. a map
/// with non-string keys or a non-finite float behind a format that rejects
/// them).
pub fn to_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string(value)
}

/// Parse JSON text back into a typed value.
///
/// The returned value is a full instance of `T`, so inherent methods and
/// trait impls defined on `T` apply to it directly.
///
/// # Errors
///
/// Returns an error if the text is not valid JSON or does not match the
/// shape of `T`.
pub fn from_json<T: DeserializeOwned>(text: &str) -> serde_json::Result<T> {
    serde_json::from_str(text)
}
