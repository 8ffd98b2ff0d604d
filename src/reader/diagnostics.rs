//! Reporting failures of the reader pipeline.
//!
//! A [`DiagnosticsSink`] is told about every failure, with the [`Stage`]
//! where it happened and the path being read. Successful reads are never
//! reported.

use std::fmt;

use crate::error::Error;

/// A stage of the reader pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Opening the resource.
    Open,
    /// Reading the resource to the end.
    Read,
    /// Releasing the resource.
    Release,
    /// Rejecting blank text.
    GuardNonEmpty,
    /// Decoding text into a record.
    Decode,
    /// Rejecting an absent record.
    GuardNonNull,
}

impl Stage {
    /// Stable name of the stage, used as a log field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Read => "read",
            Self::Release => "release",
            Self::GuardNonEmpty => "guard_non_empty",
            Self::Decode => "decode",
            Self::GuardNonNull => "guard_non_null",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Receives reader failures.
///
/// Implementations must not panic.
pub trait DiagnosticsSink: Send + Sync + 'static {
    /// Records that `stage` failed with `error` while reading `path`.
    fn record(&self, stage: Stage, path: &str, error: &Error);
}

/// Logs failures with `tracing::error!`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticsSink for TracingSink {
    fn record(&self, stage: Stage, path: &str, error: &Error) {
        tracing::error!(
            %stage,
            path,
            kind = ?error.kind(),
            code = error.code(),
            %error,
            "error occurred when reading the data"
        );
    }
}

/// Discards failures.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl DiagnosticsSink for NoopSink {
    fn record(&self, _stage: Stage, _path: &str, _error: &Error) {}
}
