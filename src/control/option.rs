//! Railway vocabulary for `Option`.
//!
//! `Option<T>` already is the "value that may be absent" container. This
//! module adds the operations the rest of the crate speaks in (`bind`,
//! `match_with`, `to_result`) so that absence can be turned into a typed
//! error at the point where it stops being acceptable.
//!
//! # Examples
//!
//! ```rust
//! use twotrack::control::OptionExt;
//!
//! let customers = vec![("1", "customer-1"), ("2", "customer-2")];
//! let find = |id: &str| customers.iter().find(|(key, _)| *key == id).map(|(_, name)| *name);
//!
//! assert_eq!(find("1").to_result("customer not found"), Ok("customer-1"));
//! assert_eq!(find("666").to_result("customer not found"), Err("customer not found"));
//! ```

/// Extension methods for [`Option`].
pub trait OptionExt<T>: Sized {
    /// Applies `function` to the value and flattens, skipping it for `None`.
    fn bind<U, F>(self, function: F) -> Option<U>
    where
        F: FnOnce(T) -> Option<U>;

    /// Collapses the option with one function per case.
    ///
    /// ```rust
    /// use twotrack::control::OptionExt;
    ///
    /// let parsed = "666".parse::<i32>().ok();
    /// assert_eq!(parsed.match_with(|n| n * 2, || 0), 1332);
    /// ```
    fn match_with<R, S, N>(self, on_some: S, on_none: N) -> R
    where
        S: FnOnce(T) -> R,
        N: FnOnce() -> R;

    /// Turns absence into an error.
    fn to_result<E>(self, error_if_none: E) -> Result<T, E>;

    /// Turns absence into a lazily built error.
    fn to_result_with<E, F>(self, error_if_none: F) -> Result<T, E>
    where
        F: FnOnce() -> E;

    /// Returns the value, or `default` for `None`.
    fn if_none(self, default: T) -> T;
}

impl<T> OptionExt<T> for Option<T> {
    #[inline]
    fn bind<U, F>(self, function: F) -> Option<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        self.and_then(function)
    }

    #[inline]
    fn match_with<R, S, N>(self, on_some: S, on_none: N) -> R
    where
        S: FnOnce(T) -> R,
        N: FnOnce() -> R,
    {
        match self {
            Some(value) => on_some(value),
            None => on_none(),
        }
    }

    #[inline]
    fn to_result<E>(self, error_if_none: E) -> Result<T, E> {
        self.ok_or(error_if_none)
    }

    #[inline]
    fn to_result_with<E, F>(self, error_if_none: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        self.ok_or_else(error_if_none)
    }

    #[inline]
    fn if_none(self, default: T) -> T {
        self.unwrap_or(default)
    }
}
