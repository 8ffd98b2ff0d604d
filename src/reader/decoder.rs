//! Turning text into a typed record.

use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;

use crate::error::Error;

/// Decodes text into a record.
///
/// `Ok(None)` is the absence marker: the text was well formed but holds no
/// record. Malformed text is an `Err`.
///
/// Any `Fn(&str) -> Result<Option<T>, Error>` is a decoder, which keeps test
/// doubles short.
pub trait Decoder<T>: Send + Sync + 'static {
    /// Decodes `text`.
    ///
    /// # Errors
    ///
    /// Returns an error when `text` is not valid input for the format.
    fn decode(&self, text: &str) -> Result<Option<T>, Error>;
}

impl<T, F> Decoder<T> for F
where
    F: Fn(&str) -> Result<Option<T>, Error> + Send + Sync + 'static,
{
    fn decode(&self, text: &str) -> Result<Option<T>, Error> {
        self(text)
    }
}

/// JSON decoding through `serde_json`.
///
/// A JSON `null` decodes to absent. Syntax and shape errors become
/// [`ErrorKind::DecodeFault`](crate::ErrorKind::DecodeFault) wrapping the
/// `serde_json::Error`, which carries line and column.
///
/// ```rust
/// use twotrack::reader::{Decoder, JsonDecoder};
///
/// #[derive(Debug, PartialEq, serde::Deserialize)]
/// struct Employee { id: String, name: String }
///
/// let decoder = JsonDecoder::<Employee>::new();
/// assert_eq!(decoder.decode("null").unwrap(), None);
/// assert!(decoder.decode("{ \"id\": ").is_err());
/// ```
pub struct JsonDecoder<T> {
    marker: PhantomData<fn() -> T>,
}

impl<T> JsonDecoder<T> {
    /// Creates a JSON decoder for `T`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<T> Default for JsonDecoder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for JsonDecoder<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for JsonDecoder<T> {}

impl<T> fmt::Debug for JsonDecoder<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("JsonDecoder")
            .field("record", &std::any::type_name::<T>())
            .finish()
    }
}

impl<T: DeserializeOwned + 'static> Decoder<T> for JsonDecoder<T> {
    fn decode(&self, text: &str) -> Result<Option<T>, Error> {
        Ok(serde_json::from_str::<Option<T>>(text)?)
    }
}
