//! Runtime configuration of the reader pipeline.
//!
//! A [`ReaderConfig`] holds one [`AbsencePolicy`] per stage that can find
//! "nothing there": blank text after reading, and an absent record after
//! decoding. A policy decides which [`ErrorKind`] and message the stage
//! reports. The defaults reproduce the stock messages.
//!
//! The configuration is plain data, so it can live in a file:
//!
//! ```rust
//! use twotrack::reader::ReaderConfig;
//! use twotrack::ErrorKind;
//!
//! let config: ReaderConfig = serde_json::from_str(
//!     r#"{ "empty_content": { "kind": "not_found", "message": "no employee data" } }"#,
//! ).unwrap();
//!
//! assert_eq!(config.empty_content.kind, ErrorKind::NotFound);
//! assert_eq!(config.absent_record, ReaderConfig::default().absent_record);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Error, ErrorKind};

/// The error a stage reports when it finds nothing to pass on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbsencePolicy {
    /// Kind of the reported error.
    pub kind: ErrorKind,
    /// Message of the reported error.
    pub message: String,
}

impl AbsencePolicy {
    /// Creates a policy.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Builds the error this policy reports.
    #[must_use]
    pub fn to_error(&self) -> Error {
        Error::new(self.kind, self.message.clone())
    }
}

/// Per-stage policies of a [`DataReader`](super::DataReader).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    /// Reported when the text read is empty or whitespace-only.
    pub empty_content: AbsencePolicy,
    /// Reported when the decoder yields no record.
    pub absent_record: AbsencePolicy,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            empty_content: AbsencePolicy::new(ErrorKind::EmptyContent, "empty file content"),
            absent_record: AbsencePolicy::new(
                ErrorKind::TypeMismatch,
                "cannot deserialize into required type",
            ),
        }
    }
}

impl ReaderConfig {
    /// Replaces the policy for blank text.
    #[must_use]
    pub fn with_empty_content(mut self, policy: AbsencePolicy) -> Self {
        self.empty_content = policy;
        self
    }

    /// Replaces the policy for an absent record.
    #[must_use]
    pub fn with_absent_record(mut self, policy: AbsencePolicy) -> Self {
        self.absent_record = policy;
        self
    }
}
