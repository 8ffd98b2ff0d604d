//! Error taxonomy shared by every track.
//!
//! Every fallible layer of this crate (`Try`, `AsyncResult`, scoped resources
//! and the reader pipeline) reports failure as an [`Error`]: a kind, a
//! message, an optional numeric code and an optional wrapped fault. Errors are
//! cheap to clone so that re-runnable descriptions can hand the same failure
//! to every observer.
//!
//! # Examples
//!
//! ```rust
//! use twotrack::{Error, ErrorKind};
//!
//! let error = Error::new(ErrorKind::EmptyContent, "empty file content");
//! assert_eq!(error.kind(), ErrorKind::EmptyContent);
//! assert_eq!(error.to_string(), "empty file content");
//! ```

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use thiserror::Error as ThisError;

/// The wrapped underlying fault of an [`Error`].
pub type Source = Arc<dyn std::error::Error + Send + Sync + 'static>;

/// Category of a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ThisError)]
#[cfg_attr(feature = "reader", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "reader", serde(rename_all = "snake_case"))]
#[non_exhaustive]
pub enum ErrorKind {
    /// The underlying resource does not exist.
    #[error("not found")]
    NotFound,
    /// The resource exists but cannot be opened for reading.
    #[error("access denied")]
    AccessDenied,
    /// Reading or releasing failed after a successful open.
    #[error("i/o fault")]
    IoFault,
    /// A read succeeded but produced no usable data.
    #[error("empty content")]
    EmptyContent,
    /// Structured decoding rejected the input.
    #[error("decode fault")]
    DecodeFault,
    /// Decoding succeeded but produced no value of the required shape.
    #[error("type mismatch")]
    TypeMismatch,
    /// A fault captured at a `Try` or `AsyncResult` boundary.
    #[error("fault")]
    Fault,
}

impl ErrorKind {
    /// Stable numeric code of the kind.
    ///
    /// ```rust
    /// use twotrack::ErrorKind;
    ///
    /// assert_eq!(ErrorKind::NotFound.code(), 404);
    /// assert_eq!(ErrorKind::Fault.code(), 500);
    /// ```
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::NotFound => 404,
            Self::AccessDenied => 403,
            Self::IoFault => 502,
            Self::EmptyContent => 204,
            Self::DecodeFault => 400,
            Self::TypeMismatch => 422,
            Self::Fault => 500,
        }
    }
}

/// A structured failure carried on the error track.
///
/// `Display` prints the message only. [`std::error::Error::source`] returns
/// the wrapped fault itself, so callers can downcast it to its concrete type.
#[derive(Debug, Clone)]
pub struct Error {
    kind: ErrorKind,
    message: Cow<'static, str>,
    code: Option<i32>,
    source: Option<Source>,
}

impl fmt::Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.message)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|source| source as &(dyn std::error::Error + 'static))
    }
}

impl Error {
    /// Creates an error of the given kind with a message.
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            code: None,
            source: None,
        }
    }

    /// Wraps an underlying fault, keeping its message.
    ///
    /// The wrapped fault stays reachable through
    /// [`std::error::Error::source`] and [`Error::source_ref`].
    pub fn wrap<S>(kind: ErrorKind, source: S) -> Self
    where
        S: std::error::Error + Send + Sync + 'static,
    {
        Self {
            kind,
            message: Cow::Owned(source.to_string()),
            code: None,
            source: Some(Arc::new(source)),
        }
    }

    /// Creates a catch-all [`ErrorKind::Fault`].
    pub fn fault(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Fault, message)
    }

    /// Builds a fault from a caught panic payload.
    pub(crate) fn from_panic(payload: &(dyn std::any::Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|message| (*message).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "Unknown panic".to_string());
        Self::fault(message)
    }

    /// Attaches an explicit numeric code, replacing the kind's default.
    #[must_use]
    pub const fn with_code(mut self, code: i32) -> Self {
        self.code = Some(code);
        self
    }

    /// Replaces the message, keeping kind, code and source.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }

    /// Returns the kind of the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the message of the error.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the explicit code, or the kind's default code.
    #[must_use]
    pub fn code(&self) -> i32 {
        self.code.unwrap_or_else(|| self.kind.code())
    }

    /// Returns the wrapped fault, if any.
    #[must_use]
    pub fn source_ref(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.source.as_deref()
    }

    /// Attempts to view the wrapped fault as a concrete error type.
    ///
    /// ```rust
    /// use twotrack::{Error, ErrorKind};
    ///
    /// let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    /// let error = Error::from(io);
    /// assert_eq!(error.kind(), ErrorKind::NotFound);
    /// assert!(error.downcast_source::<std::io::Error>().is_some());
    /// ```
    #[must_use]
    pub fn downcast_source<T>(&self) -> Option<&T>
    where
        T: std::error::Error + 'static,
    {
        self.source.as_deref()?.downcast_ref::<T>()
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.message == other.message && self.code() == other.code()
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        let kind = match error.kind() {
            std::io::ErrorKind::NotFound => ErrorKind::NotFound,
            std::io::ErrorKind::PermissionDenied => ErrorKind::AccessDenied,
            _ => ErrorKind::IoFault,
        };
        Self::wrap(kind, error)
    }
}

#[cfg(feature = "reader")]
impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::wrap(ErrorKind::DecodeFault, error)
    }
}

impl From<&'static str> for Error {
    fn from(message: &'static str) -> Self {
        Self::fault(message)
    }
}

impl From<String> for Error {
    fn from(message: String) -> Self {
        Self::fault(message)
    }
}

impl From<std::convert::Infallible> for Error {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::error::Error as _;

    #[rstest]
    #[case(std::io::ErrorKind::NotFound, ErrorKind::NotFound)]
    #[case(std::io::ErrorKind::PermissionDenied, ErrorKind::AccessDenied)]
    #[case(std::io::ErrorKind::UnexpectedEof, ErrorKind::IoFault)]
    fn io_errors_map_to_kinds(#[case] io_kind: std::io::ErrorKind, #[case] expected: ErrorKind) {
        let error = Error::from(std::io::Error::new(io_kind, "boom"));
        assert_eq!(error.kind(), expected);
        assert_eq!(error.message(), "boom");
    }

    #[rstest]
    fn wrapped_source_is_exposed_unchanged() {
        let error = Error::from(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"));
        let source = error.source().expect("source should be present");
        assert_eq!(source.to_string(), "missing");
        assert!(source.is::<std::io::Error>());
        assert_eq!(
            error.downcast_source::<std::io::Error>().map(std::io::Error::kind),
            Some(std::io::ErrorKind::NotFound)
        );
    }

    #[rstest]
    fn explicit_code_overrides_kind_code() {
        let error = Error::new(ErrorKind::NotFound, "customer not found").with_code(4040);
        assert_eq!(error.code(), 4040);
        assert_eq!(Error::new(ErrorKind::NotFound, "x").code(), 404);
    }

    #[rstest]
    fn panic_payloads_become_faults() {
        let from_str = Error::from_panic(&"oops");
        assert_eq!(from_str.kind(), ErrorKind::Fault);
        assert_eq!(from_str.message(), "oops");

        let from_string = Error::from_panic(&"owned".to_string());
        assert_eq!(from_string.message(), "owned");

        let unknown = Error::from_panic(&42_u8);
        assert_eq!(unknown.message(), "Unknown panic");
    }

    #[rstest]
    fn display_prints_message() {
        let error = Error::fault("employee data is invalid");
        assert_eq!(format!("{error}"), "employee data is invalid");
        assert_eq!(ErrorKind::TypeMismatch.to_string(), "type mismatch");
    }
}
