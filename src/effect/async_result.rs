//! `AsyncResult` - a cold, re-runnable asynchronous computation on two tracks.
//!
//! An `AsyncResult<T, E>` describes asynchronous work that produces a
//! `Result<T, E>`. Building or composing one performs no work; the
//! description only executes when the future returned by [`AsyncResult::run`]
//! is awaited, and every run re-executes the whole chain from the start.
//!
//! # Design Philosophy
//!
//! Stage N+1 of a chain starts only after stage N's result is known. Once a
//! stage ends on the error track, the remaining `map` and `bind` stages are
//! skipped and that error is returned unchanged. Errors of different stages
//! are unified with [`AsyncResult::map_error`] or [`AsyncResult::bimap`]
//! before crossing a `bind`.
//!
//! # Examples
//!
//! ```rust
//! use twotrack::effect::AsyncResult;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let find_customer = |id: u32| {
//!     AsyncResult::new(move || async move {
//!         if id == 666 { Err("404".to_string()) } else { Ok(format!("customer-{id}")) }
//!     })
//! };
//!
//! let greeting = find_customer(1).map(|name| format!("hello {name}"));
//! assert_eq!(greeting.run().await, Ok("hello customer-1".to_string()));
//!
//! let missing = find_customer(666).bind(|name| AsyncResult::ok(name.len()));
//! assert_eq!(missing.run().await, Err("404".to_string()));
//! # }
//! ```

use std::fmt;
use std::future::{Future, IntoFuture};
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use futures::FutureExt;
use futures::future::{self, BoxFuture};

use crate::control::{Either, Try};
use crate::error::Error;
use crate::typeclass::{Bifunctor, Functor, Monad, Pure, TypeConstructor};

type Computation<T, E> = Arc<dyn Fn() -> BoxFuture<'static, Result<T, E>> + Send + Sync>;

/// A cold, re-runnable description of asynchronous work yielding
/// `Result<T, E>`.
///
/// # Monad Laws
///
/// 1. **Left Identity**: `AsyncResult::ok(a).bind(f)` runs like `f(a)`
/// 2. **Right Identity**: `m.bind(AsyncResult::ok)` runs like `m`
/// 3. **Associativity**: `m.bind(f).bind(g)` runs like `m.bind(|x| f(x).bind(g))`
pub struct AsyncResult<T, E = Error> {
    computation: Computation<T, E>,
}

impl<T, E> Clone for AsyncResult<T, E> {
    fn clone(&self) -> Self {
        Self {
            computation: Arc::clone(&self.computation),
        }
    }
}

// =============================================================================
// Constructors
// =============================================================================

impl<T, E> AsyncResult<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Creates a description from a closure that starts the work.
    ///
    /// The closure is called once per run; it is not called here.
    pub fn new<F, Fut>(computation: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
    {
        Self {
            computation: Arc::new(move || computation().boxed()),
        }
    }

    /// A description that always succeeds with `value`.
    pub fn ok(value: T) -> Self
    where
        T: Clone + Sync,
    {
        Self::new(move || future::ready(Ok(value.clone())))
    }

    /// A description that always fails with `error`.
    pub fn err(error: E) -> Self
    where
        E: Clone + Sync,
    {
        Self::new(move || future::ready(Err(error.clone())))
    }

    /// Lifts an already known outcome.
    pub fn from_result(result: Result<T, E>) -> Self
    where
        T: Clone + Sync,
        E: Clone + Sync,
    {
        Self::new(move || future::ready(result.clone()))
    }

    /// Wraps a future that must be polled at most once.
    ///
    /// The first run drives `future`; every later run (and every clone)
    /// observes the same outcome without polling it again.
    ///
    /// ```rust
    /// use twotrack::effect::AsyncResult;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let handle = vec![1_u8, 2, 3];
    /// let release = AsyncResult::<usize, String>::from_future(async move { Ok(handle.len()) });
    /// assert_eq!(release.run().await, Ok(3));
    /// assert_eq!(release.run().await, Ok(3));
    /// # }
    /// ```
    pub fn from_future<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = Result<T, E>> + Send + 'static,
        T: Clone + Sync,
        E: Clone + Sync,
    {
        let shared = future.boxed().shared();
        Self::new(move || shared.clone())
    }
}

impl<T: Send + 'static> AsyncResult<T, Error> {
    /// Creates a description whose faults are captured into [`Error`].
    ///
    /// An `Err(X)` produced by the work is converted with `Into<Error>`. A
    /// panic raised while starting the work or while polling it becomes an
    /// [`ErrorKind::Fault`](crate::ErrorKind::Fault) carrying the panic
    /// message.
    ///
    /// ```rust
    /// use twotrack::effect::AsyncResult;
    /// use twotrack::ErrorKind;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let read = AsyncResult::attempt(|| tokio::fs::read_to_string("no/such/file.json"));
    /// assert_eq!(read.run().await.unwrap_err().kind(), ErrorKind::NotFound);
    /// # }
    /// ```
    pub fn attempt<F, Fut, X>(computation: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, X>> + Send + 'static,
        X: Into<Error>,
    {
        Self::new(move || {
            let started = catch_unwind(AssertUnwindSafe(&computation));
            async move {
                let running = match started {
                    Ok(running) => running,
                    Err(payload) => return Err(Error::from_panic(payload.as_ref())),
                };
                match AssertUnwindSafe(running).catch_unwind().await {
                    Ok(result) => result.map_err(Into::into),
                    Err(payload) => Err(Error::from_panic(payload.as_ref())),
                }
            }
        })
    }

    /// Lifts a synchronous [`Try`]; the `Try` runs once per run.
    pub fn from_try(computation: Try<T>) -> Self {
        Self::new(move || future::ready(computation.run()))
    }
}

impl<T: Send + 'static> Try<T> {
    /// Lifts this computation into an [`AsyncResult`].
    ///
    /// ```rust
    /// use twotrack::control::Try;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let length = Try::pure("content".to_string()).map(|text| text.len()).to_async();
    /// assert_eq!(length.run().await, Ok(7));
    /// # }
    /// ```
    pub fn to_async(self) -> AsyncResult<T, Error> {
        AsyncResult::from_try(self)
    }
}

// =============================================================================
// Execution
// =============================================================================

impl<T, E> AsyncResult<T, E> {
    /// Starts a fresh run of the description.
    ///
    /// The returned future owns everything it needs, so it may outlive
    /// `self` or be spawned. Dropping it before completion abandons the run.
    pub fn run(&self) -> BoxFuture<'static, Result<T, E>> {
        (self.computation)()
    }
}

impl<T, E> IntoFuture for AsyncResult<T, E> {
    type Output = Result<T, E>;
    type IntoFuture = BoxFuture<'static, Result<T, E>>;

    fn into_future(self) -> Self::IntoFuture {
        self.run()
    }
}

// =============================================================================
// Combinators
// =============================================================================

impl<T, E> AsyncResult<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Transforms the success value; the error track passes through.
    #[must_use]
    pub fn map<U, F>(self, function: F) -> AsyncResult<U, E>
    where
        F: Fn(T) -> U + Send + Sync + 'static,
        U: Send + 'static,
    {
        let function = Arc::new(function);
        AsyncResult::new(move || {
            let first = self.run();
            let function = Arc::clone(&function);
            async move { first.await.map(|value| function(value)) }
        })
    }

    /// Transforms the error value; the success track passes through.
    #[must_use]
    pub fn map_error<E2, F>(self, function: F) -> AsyncResult<T, E2>
    where
        F: Fn(E) -> E2 + Send + Sync + 'static,
        E2: Send + 'static,
    {
        let function = Arc::new(function);
        AsyncResult::new(move || {
            let first = self.run();
            let function = Arc::clone(&function);
            async move { first.await.map_err(|error| function(error)) }
        })
    }

    /// Sequences a dependent description.
    ///
    /// On `Err` the error is returned without invoking `function`; on
    /// `Ok(value)` the description built by `function(value)` is run and its
    /// result is returned.
    #[must_use]
    pub fn bind<U, F>(self, function: F) -> AsyncResult<U, E>
    where
        F: Fn(T) -> AsyncResult<U, E> + Send + Sync + 'static,
        U: Send + 'static,
    {
        let function = Arc::new(function);
        AsyncResult::new(move || {
            let first = self.run();
            let function = Arc::clone(&function);
            async move {
                match first.await {
                    Ok(value) => function(value).run().await,
                    Err(error) => Err(error),
                }
            }
        })
    }

    /// Sequences a synchronous railway step.
    ///
    /// Like [`bind`](Self::bind) for a function that returns a plain
    /// `Result`; the step runs only when the previous stage succeeded.
    #[must_use]
    pub fn bind_result<U, F>(self, function: F) -> AsyncResult<U, E>
    where
        F: Fn(T) -> Result<U, E> + Send + Sync + 'static,
        U: Send + 'static,
    {
        let function = Arc::new(function);
        AsyncResult::new(move || {
            let first = self.run();
            let function = Arc::clone(&function);
            async move { first.await.and_then(|value| function(value)) }
        })
    }

    /// Recovers from the error track with another description.
    #[must_use]
    pub fn bind_error<E2, F>(self, function: F) -> AsyncResult<T, E2>
    where
        F: Fn(E) -> AsyncResult<T, E2> + Send + Sync + 'static,
        E2: Send + 'static,
    {
        let function = Arc::new(function);
        AsyncResult::new(move || {
            let first = self.run();
            let function = Arc::clone(&function);
            async move {
                match first.await {
                    Ok(value) => Ok(value),
                    Err(error) => function(error).run().await,
                }
            }
        })
    }

    /// Transforms whichever track the run ends on.
    ///
    /// `on_error` sees the error track, `on_ok` the success track, in the
    /// same order as [`Bifunctor::bimap`].
    #[must_use]
    pub fn bimap<U, E2, OnErr, OnOk>(self, on_error: OnErr, on_ok: OnOk) -> AsyncResult<U, E2>
    where
        OnErr: Fn(E) -> E2 + Send + Sync + 'static,
        OnOk: Fn(T) -> U + Send + Sync + 'static,
        U: Send + 'static,
        E2: Send + 'static,
    {
        let functions = Arc::new((on_error, on_ok));
        AsyncResult::new(move || {
            let first = self.run();
            let functions = Arc::clone(&functions);
            async move {
                match first.await {
                    Ok(value) => Ok((functions.1)(value)),
                    Err(error) => Err((functions.0)(error)),
                }
            }
        })
    }

    /// Observes the error track without changing the outcome.
    ///
    /// `callback` is invoked only when the run ends on `Err`. Useful for
    /// logging.
    #[must_use]
    pub fn on_error<F>(self, callback: F) -> Self
    where
        F: Fn(&E) + Send + Sync + 'static,
    {
        let callback = Arc::new(callback);
        Self::new(move || {
            let first = self.run();
            let callback = Arc::clone(&callback);
            async move {
                let result = first.await;
                if let Err(ref error) = result {
                    callback(error);
                }
                result
            }
        })
    }

    /// Runs the description and collapses the outcome.
    pub async fn match_with<R, OnOk, OnErr>(&self, on_ok: OnOk, on_err: OnErr) -> R
    where
        OnOk: FnOnce(T) -> R,
        OnErr: FnOnce(E) -> R,
    {
        match self.run().await {
            Ok(value) => on_ok(value),
            Err(error) => on_err(error),
        }
    }

    /// Runs the description and combines `seed` with the populated track.
    ///
    /// The asynchronous counterpart of
    /// [`Foldable::fold`](crate::typeclass::Foldable::fold).
    pub async fn fold<S, F>(&self, seed: S, combine: F) -> S
    where
        F: FnOnce(S, Either<E, T>) -> S,
    {
        combine(seed, Either::from(self.run().await))
    }
}

impl<T, E> fmt::Debug for AsyncResult<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("<AsyncResult>")
    }
}

// =============================================================================
// Type class instances
// =============================================================================

impl<T, E> TypeConstructor for AsyncResult<T, E> {
    type Inner = T;
    type WithType<B> = AsyncResult<B, E>;
}

impl<T: Send + 'static, E: Send + 'static> Functor for AsyncResult<T, E> {
    fn fmap<B, F>(self, function: F) -> AsyncResult<B, E>
    where
        F: Fn(T) -> B + Send + Sync + 'static,
        B: Send + 'static,
    {
        self.map(function)
    }
}

impl<T: Send + 'static, E: Send + 'static> Pure for AsyncResult<T, E> {
    fn pure<B>(value: B) -> AsyncResult<B, E>
    where
        B: Clone + Send + Sync + 'static,
    {
        AsyncResult::new(move || future::ready(Ok(value.clone())))
    }
}

impl<T: Send + 'static, E: Send + 'static> Monad for AsyncResult<T, E> {
    fn flat_map<B, F>(self, function: F) -> AsyncResult<B, E>
    where
        F: Fn(T) -> AsyncResult<B, E> + Send + Sync + 'static,
        B: Send + 'static,
    {
        self.bind(function)
    }
}

impl<T: Send + 'static, E: Send + 'static> Bifunctor<E, T> for AsyncResult<T, E> {
    type Target<C, D> = AsyncResult<D, C>;

    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> AsyncResult<D, C>
    where
        F: Fn(E) -> C + Send + Sync + 'static,
        G: Fn(T) -> D + Send + Sync + 'static,
        C: Send + 'static,
        D: Send + 'static,
    {
        Self::bimap(self, first_function, second_function)
    }

    fn first<C, F>(self, function: F) -> AsyncResult<T, C>
    where
        F: Fn(E) -> C + Send + Sync + 'static,
        C: Send + 'static,
    {
        self.map_error(function)
    }

    fn second<D, G>(self, function: G) -> AsyncResult<D, E>
    where
        G: Fn(T) -> D + Send + Sync + 'static,
        D: Send + 'static,
    {
        self.map(function)
    }
}

static_assertions::assert_impl_all!(AsyncResult<String, Error>: Send, Sync, Clone);
