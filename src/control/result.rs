//! Railway vocabulary for `Result`.
//!
//! Once a `Result` is `Err`, every later `bind` and `map` is skipped and the
//! original error travels to the end of the chain unchanged. The only ways
//! to leave the error track are the explicit recovery operations
//! ([`ResultExt::bind_error`], [`ResultExt::bi_bind`]).
//!
//! # Examples
//!
//! ```rust
//! use twotrack::control::ResultExt;
//!
//! fn find(id: &str) -> Result<u32, String> {
//!     id.parse().map_err(|_| "404".to_string())
//! }
//! fn send_greeting(id: u32) -> Result<u32, String> {
//!     if id % 2 == 0 { Ok(id) } else { Err("customer is not VIP".to_string()) }
//! }
//!
//! assert_eq!(find("4").bind(send_greeting), Ok(4));
//! assert_eq!(find("3").bind(send_greeting), Err("customer is not VIP".to_string()));
//! assert_eq!(find("x").bind(send_greeting), Err("404".to_string()));
//! ```

/// Extension methods for [`Result`].
pub trait ResultExt<T, E>: Sized {
    /// Chains a fallible step that only runs on the success track.
    fn bind<U, F>(self, function: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Result<U, E>;

    /// Transforms the error track, leaving `Ok` untouched.
    fn map_error<F2, F>(self, function: F) -> Result<T, F2>
    where
        F: FnOnce(E) -> F2;

    /// Recovers from the error track; `Ok` passes through untouched.
    fn bind_error<F2, F>(self, function: F) -> Result<T, F2>
    where
        F: FnOnce(E) -> Result<T, F2>;

    /// Binds both tracks, each to a new `Result`.
    ///
    /// ```rust
    /// use twotrack::control::ResultExt;
    ///
    /// let value: Result<String, i32> = Ok("1".to_string());
    /// let rebound = value.bi_bind(|id| Ok::<_, String>(format!("bibind-{id}")), |code| Err(format!("failed {code}")));
    /// assert_eq!(rebound, Ok("bibind-1".to_string()));
    /// ```
    fn bi_bind<U, F2, OnOk, OnErr>(self, on_ok: OnOk, on_err: OnErr) -> Result<U, F2>
    where
        OnOk: FnOnce(T) -> Result<U, F2>,
        OnErr: FnOnce(E) -> Result<U, F2>;

    /// Tests whichever track is populated with its own predicate.
    fn bi_exists<OnOk, OnErr>(&self, on_ok: OnOk, on_err: OnErr) -> bool
    where
        OnOk: FnOnce(&T) -> bool,
        OnErr: FnOnce(&E) -> bool;

    /// Observes exactly one track for its side effect.
    fn bi_iter<OnOk, OnErr>(self, on_ok: OnOk, on_err: OnErr)
    where
        OnOk: FnOnce(T),
        OnErr: FnOnce(E);

    /// Collapses the result with one function per track.
    fn match_with<R, OnOk, OnErr>(self, on_ok: OnOk, on_err: OnErr) -> R
    where
        OnOk: FnOnce(T) -> R,
        OnErr: FnOnce(E) -> R;

    /// Returns the success value, or `default` on the error track.
    fn if_left(self, default: T) -> T;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    #[inline]
    fn bind<U, F>(self, function: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        self.and_then(function)
    }

    #[inline]
    fn map_error<F2, F>(self, function: F) -> Result<T, F2>
    where
        F: FnOnce(E) -> F2,
    {
        self.map_err(function)
    }

    #[inline]
    fn bind_error<F2, F>(self, function: F) -> Result<T, F2>
    where
        F: FnOnce(E) -> Result<T, F2>,
    {
        self.or_else(function)
    }

    #[inline]
    fn bi_bind<U, F2, OnOk, OnErr>(self, on_ok: OnOk, on_err: OnErr) -> Result<U, F2>
    where
        OnOk: FnOnce(T) -> Result<U, F2>,
        OnErr: FnOnce(E) -> Result<U, F2>,
    {
        match self {
            Ok(value) => on_ok(value),
            Err(error) => on_err(error),
        }
    }

    #[inline]
    fn bi_exists<OnOk, OnErr>(&self, on_ok: OnOk, on_err: OnErr) -> bool
    where
        OnOk: FnOnce(&T) -> bool,
        OnErr: FnOnce(&E) -> bool,
    {
        match self {
            Ok(value) => on_ok(value),
            Err(error) => on_err(error),
        }
    }

    #[inline]
    fn bi_iter<OnOk, OnErr>(self, on_ok: OnOk, on_err: OnErr)
    where
        OnOk: FnOnce(T),
        OnErr: FnOnce(E),
    {
        match self {
            Ok(value) => on_ok(value),
            Err(error) => on_err(error),
        }
    }

    #[inline]
    fn match_with<R, OnOk, OnErr>(self, on_ok: OnOk, on_err: OnErr) -> R
    where
        OnOk: FnOnce(T) -> R,
        OnErr: FnOnce(E) -> R,
    {
        match self {
            Ok(value) => on_ok(value),
            Err(error) => on_err(error),
        }
    }

    #[inline]
    fn if_left(self, default: T) -> T {
        self.unwrap_or(default)
    }
}
