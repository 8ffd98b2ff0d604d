//! Reading a typed record from a text resource.
//!
//! [`DataReader::read`] builds one [`AsyncResult`] out of five stages:
//!
//! 1. open the resource ([`TextSource::open`])
//! 2. read it to the end, then release it
//! 3. reject blank text
//! 4. decode the text ([`Decoder::decode`])
//! 5. reject an absent record
//!
//! The resource is released before decoding starts, on every exit path of
//! the read stage. The first failing stage ends the pipeline; its error is
//! reported to the reader's [`DiagnosticsSink`] and returned unchanged.
//!
//! | situation                 | kind           | message                                  |
//! |---------------------------|----------------|------------------------------------------|
//! | resource missing          | `NotFound`     | from the source's fault                  |
//! | blank text                | `EmptyContent` | `empty file content`                     |
//! | malformed text            | `DecodeFault`  | from the decoder's fault                 |
//! | text decodes to nothing   | `TypeMismatch` | `cannot deserialize into required type`  |
//!
//! The two absence rows come from [`ReaderConfig`] and can be changed.
//!
//! # Examples
//!
//! ```rust,no_run
//! use serde::Deserialize;
//! use twotrack::reader::DataReader;
//!
//! #[derive(Debug, Deserialize)]
//! struct Employee { id: String, name: String }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let reader = DataReader::<Employee>::json();
//! match reader.read("TestData/valid-employee.json").run().await {
//!     Ok(employee) => println!("{} {}", employee.id, employee.name),
//!     Err(error) => eprintln!("{:?}: {error}", error.kind()),
//! }
//! # }
//! ```

mod config;
mod decoder;
mod diagnostics;
mod source;

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use serde::de::DeserializeOwned;

pub use config::{AbsencePolicy, ReaderConfig};
pub use decoder::{Decoder, JsonDecoder};
pub use diagnostics::{DiagnosticsSink, NoopSink, Stage, TracingSink};
pub use source::{FileSource, TextSource};

use crate::control::{OptionExt, Try};
use crate::effect::{AsyncResult, Scoped, guarded, with_resource};
use crate::error::{Error, ErrorKind};

/// Anything that can read a `T` from a path.
///
/// Callers that only need the behavior depend on
/// `Arc<dyn JsonDataReader<T>>` instead of a concrete [`DataReader`].
pub trait JsonDataReader<T>: Send + Sync {
    /// Describes reading and decoding the record at `path`.
    fn deserialize_data(&self, path: &str) -> AsyncResult<T, Error>;
}

/// Reports a stage failure to the sink and hands the error back.
#[derive(Clone)]
struct Reporter {
    sink: Arc<dyn DiagnosticsSink>,
    path: Arc<str>,
}

impl Reporter {
    fn fail(&self, stage: Stage, error: Error) -> Error {
        self.sink.record(stage, &self.path, &error);
        error
    }

    fn observe(&self, stage: Stage) -> impl Fn(&Error) + Send + Sync + use<> {
        let reporter = self.clone();
        move |error: &Error| reporter.sink.record(stage, &reporter.path, error)
    }
}

/// Reads typed records of `T` from a [`TextSource`] with a [`Decoder`].
pub struct DataReader<T, S = FileSource, D = JsonDecoder<T>> {
    source: Arc<S>,
    decoder: Arc<D>,
    config: Arc<ReaderConfig>,
    sink: Arc<dyn DiagnosticsSink>,
    record: PhantomData<fn() -> T>,
}

impl<T> DataReader<T>
where
    T: DeserializeOwned + Send + 'static,
{
    /// A reader of JSON files.
    #[must_use]
    pub fn json() -> Self {
        Self::new(FileSource, JsonDecoder::new())
    }
}

impl<T, S, D> DataReader<T, S, D>
where
    T: Send + 'static,
    S: TextSource,
    D: Decoder<T>,
{
    /// Creates a reader with the default configuration that logs failures
    /// through `tracing`.
    pub fn new(source: S, decoder: D) -> Self {
        Self {
            source: Arc::new(source),
            decoder: Arc::new(decoder),
            config: Arc::new(ReaderConfig::default()),
            sink: Arc::new(TracingSink),
            record: PhantomData,
        }
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(mut self, config: ReaderConfig) -> Self {
        self.config = Arc::new(config);
        self
    }

    /// Replaces the diagnostics sink.
    #[must_use]
    pub fn with_sink<K: DiagnosticsSink>(mut self, sink: K) -> Self {
        self.sink = Arc::new(sink);
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Describes reading the record at `path`.
    ///
    /// Nothing is opened until the returned description is run, and every
    /// run reads the resource again.
    pub fn read(&self, path: impl Into<String>) -> AsyncResult<T, Error> {
        let path: Arc<str> = Arc::from(path.into());
        let reporter = Reporter {
            sink: Arc::clone(&self.sink),
            path: Arc::clone(&path),
        };

        let empty_content = self.config.empty_content.clone();
        let absent_record = self.config.absent_record.clone();
        let decoder = Arc::clone(&self.decoder);
        let on_empty = reporter.clone();
        let on_decode = reporter.clone();
        let on_absent = reporter.clone();

        self.read_text(&path, &reporter)
            .bind_result(move |text| {
                if text.trim().is_empty() {
                    return Err(on_empty.fail(Stage::GuardNonEmpty, empty_content.to_error()));
                }
                Ok(text)
            })
            .bind_result(move |text| {
                let decoder = Arc::clone(&decoder);
                tracing::debug!(stage = %Stage::Decode, bytes = text.len(), "decoding content");
                Try::new(move || decoder.decode(&text))
                    .run()
                    .map_err(|error| on_decode.fail(Stage::Decode, into_decode_fault(error)))
            })
            .bind_result(move |decoded| {
                decoded.to_result_with(|| on_absent.fail(Stage::GuardNonNull, absent_record.to_error()))
            })
    }

    /// Opens, reads and releases the resource; yields its text.
    ///
    /// Each stage captures its own panics so the sink hears about them.
    fn read_text(&self, path: &Arc<str>, reporter: &Reporter) -> AsyncResult<String, Error> {
        let open_source = Arc::clone(&self.source);
        let read_source = Arc::clone(&self.source);
        let release_source = Arc::clone(&self.source);
        let open_path = Arc::clone(path);
        let on_open = reporter.clone();
        let on_read = reporter.clone();
        let on_release = reporter.clone();

        let acquire = move || {
            let source = Arc::clone(&open_source);
            let path = Arc::clone(&open_path);
            AsyncResult::attempt(move || {
                tracing::debug!(stage = %Stage::Open, path = %path, "opening resource");
                source.open(&path)
            })
            .on_error(on_open.observe(Stage::Open))
        };

        let release = move |resource: S::Resource| {
            tracing::debug!(stage = %Stage::Release, "releasing resource");
            let source = Arc::clone(&release_source);
            AsyncResult::from_future(guarded(move || source.release(resource)))
                .on_error(on_release.observe(Stage::Release))
        };

        let body = move |scoped: Scoped<S::Resource>| {
            let source = Arc::clone(&read_source);
            AsyncResult::attempt(move || {
                let source = Arc::clone(&source);
                let scoped = scoped.clone();
                async move {
                    let mut resource = scoped.lock().await?;
                    source.read_all(&mut resource).await
                }
            })
            .on_error(on_read.observe(Stage::Read))
        };

        with_resource(acquire, release, body)
    }
}

fn into_decode_fault(error: Error) -> Error {
    if error.kind() == ErrorKind::DecodeFault {
        error
    } else {
        Error::wrap(ErrorKind::DecodeFault, error)
    }
}

impl<T, S, D> JsonDataReader<T> for DataReader<T, S, D>
where
    T: Send + 'static,
    S: TextSource,
    D: Decoder<T>,
{
    fn deserialize_data(&self, path: &str) -> AsyncResult<T, Error> {
        self.read(path)
    }
}

impl<T, S, D> Clone for DataReader<T, S, D> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            decoder: Arc::clone(&self.decoder),
            config: Arc::clone(&self.config),
            sink: Arc::clone(&self.sink),
            record: PhantomData,
        }
    }
}

impl<T, S: fmt::Debug, D> fmt::Debug for DataReader<T, S, D> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("DataReader")
            .field("record", &std::any::type_name::<T>())
            .field("source", &self.source)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
