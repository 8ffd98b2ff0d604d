//! Try - a cold synchronous computation whose faults land on the error track.
//!
//! A `Try<T>` describes work; it does nothing until [`Try::run`] is called.
//! Running it executes the wrapped computation and returns a
//! `Result<T, Error>`: an `Err` returned by the computation is converted into
//! an [`Error`], and a panic raised inside it is caught and becomes an
//! [`ErrorKind::Fault`](crate::ErrorKind::Fault). A `Try` is not memoized:
//! every run re-executes the computation.
//!
//! # Examples
//!
//! ```rust
//! use twotrack::control::Try;
//! use twotrack::ErrorKind;
//!
//! fn process_content(content: String) -> Try<usize> {
//!     Try::new(move || {
//!         if content.trim().is_empty() {
//!             return Err("invalid data");
//!         }
//!         Ok(content.len())
//!     })
//! }
//!
//! let read = Try::pure("{\"id\":\"1\"}".to_string());
//! assert_eq!(read.bind(process_content).run(), Ok(10));
//!
//! let empty = Try::pure(String::new()).bind(process_content).run();
//! assert_eq!(empty.map_err(|error| error.kind()), Err(ErrorKind::Fault));
//! ```

use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use crate::control::Either;
use crate::error::Error;
use crate::typeclass::{Foldable, Functor, Monad, Pure, TypeConstructor};

type Computation<T> = Arc<dyn Fn() -> Result<T, Error> + Send + Sync>;

/// A re-runnable description of a synchronous computation that may fault.
pub struct Try<T> {
    computation: Computation<T>,
}

impl<T> Clone for Try<T> {
    fn clone(&self) -> Self {
        Self {
            computation: Arc::clone(&self.computation),
        }
    }
}

impl<T: 'static> Try<T> {
    /// Wraps a computation that reports failure through its own error type.
    ///
    /// The closure is not executed until `run` is called.
    pub fn new<F, X>(computation: F) -> Self
    where
        F: Fn() -> Result<T, X> + Send + Sync + 'static,
        X: Into<Error>,
    {
        Self {
            computation: Arc::new(move || computation().map_err(Into::into)),
        }
    }

    /// Wraps an infallible-looking computation; only its panics are captured.
    ///
    /// ```rust
    /// use twotrack::control::Try;
    ///
    /// let parse = Try::lift(|| "not a number".parse::<i32>().expect("numeric input"));
    /// let error = parse.run().unwrap_err();
    /// assert!(error.message().contains("numeric input"));
    /// ```
    pub fn lift<F>(computation: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self::new(move || Ok::<T, Error>(computation()))
    }

    /// A computation that always succeeds with `value`.
    pub fn pure(value: T) -> Self
    where
        T: Clone + Send + Sync,
    {
        Self::new(move || Ok::<T, Error>(value.clone()))
    }

    /// A computation that always fails with `error`.
    pub fn fail(error: Error) -> Self {
        Self::new(move || Err::<T, Error>(error.clone()))
    }

    /// Executes the computation, capturing any panic into the error track.
    pub fn run(&self) -> Result<T, Error> {
        catch_unwind(AssertUnwindSafe(|| (self.computation)()))
            .unwrap_or_else(|payload| Err(Error::from_panic(payload.as_ref())))
    }

    /// Transforms the success value without executing anything.
    #[must_use]
    pub fn map<U, F>(self, function: F) -> Try<U>
    where
        F: Fn(T) -> U + Send + Sync + 'static,
        U: 'static,
    {
        Try::new(move || self.run().map(&function))
    }

    /// Transforms the error value without executing anything.
    #[must_use]
    pub fn map_error<F>(self, function: F) -> Self
    where
        F: Fn(Error) -> Error + Send + Sync + 'static,
    {
        Self::new(move || self.run().map_err(&function))
    }

    /// Composes with a dependent computation.
    ///
    /// Running the result runs `self`, and only on success builds and runs
    /// the next `Try`. Faults from either stage share the error track.
    #[must_use]
    pub fn bind<U, F>(self, function: F) -> Try<U>
    where
        F: Fn(T) -> Try<U> + Send + Sync + 'static,
        U: 'static,
    {
        Try::new(move || self.run().and_then(|value| function(value).run()))
    }

    /// Recovers from the error track with another computation.
    #[must_use]
    pub fn bind_error<F>(self, function: F) -> Self
    where
        F: Fn(Error) -> Self + Send + Sync + 'static,
    {
        Self::new(move || self.run().or_else(|error| function(error).run()))
    }

    /// Runs the computation and collapses the outcome.
    pub fn match_with<R, OnOk, OnErr>(&self, on_ok: OnOk, on_err: OnErr) -> R
    where
        OnOk: FnOnce(T) -> R,
        OnErr: FnOnce(Error) -> R,
    {
        match self.run() {
            Ok(value) => on_ok(value),
            Err(error) => on_err(error),
        }
    }

    /// Runs the computation, discarding the error.
    pub fn to_option(&self) -> Option<T> {
        self.run().ok()
    }
}

impl<T> fmt::Debug for Try<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("<Try>")
    }
}

impl<T> TypeConstructor for Try<T> {
    type Inner = T;
    type WithType<B> = Try<B>;
}

impl<T: 'static> Functor for Try<T> {
    fn fmap<B, F>(self, function: F) -> Try<B>
    where
        F: Fn(T) -> B + Send + Sync + 'static,
        B: Send + 'static,
    {
        self.map(function)
    }
}

impl<T: 'static> Pure for Try<T> {
    fn pure<B>(value: B) -> Try<B>
    where
        B: Clone + Send + Sync + 'static,
    {
        Try::pure(value)
    }
}

impl<T: 'static> Monad for Try<T> {
    fn flat_map<B, F>(self, function: F) -> Try<B>
    where
        F: Fn(T) -> Try<B> + Send + Sync + 'static,
        B: Send + 'static,
    {
        self.bind(function)
    }
}

impl<T: 'static> Foldable for Try<T> {
    type Other = Error;

    fn fold<S, F>(self, seed: S, combine: F) -> S
    where
        F: FnOnce(S, Either<Error, T>) -> S,
    {
        combine(seed, Either::from(self.run()))
    }
}

static_assertions::assert_impl_all!(Try<String>: Send, Sync, Clone);
