//! Monad type class - sequencing computations on the success track.
//!
//! `flat_map` is the "bind" of the railway: it runs the next step only when
//! the previous one ended on the success track, and otherwise passes the
//! failure through untouched.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use twotrack::typeclass::Monad;
//!
//! fn parse_positive(s: &str) -> Option<i32> {
//!     s.parse::<i32>().ok().filter(|&n| n > 0)
//! }
//!
//! let result = Some("42")
//!     .flat_map(parse_positive)
//!     .flat_map(|n| Some(n * 2));
//! assert_eq!(result, Some(84));
//! ```

use super::pure::Pure;

/// A type class for types that support sequencing of dependent computations.
///
/// See module-level documentation for laws.
pub trait Monad: Pure {
    /// Applies a function to the success value and flattens the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twotrack::typeclass::Monad;
    ///
    /// let x: Result<i32, String> = Ok(5);
    /// assert_eq!(x.flat_map(|n| Ok(n * 2)), Ok(10));
    ///
    /// let failed: Result<i32, String> = Err("stop".to_string());
    /// assert_eq!(failed.flat_map(|n| Ok(n * 2)), Err("stop".to_string()));
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: Fn(Self::Inner) -> Self::WithType<B> + Send + Sync + 'static,
        B: Send + 'static;

    /// Sequences two computations, discarding the first success value.
    ///
    /// If `self` ends on the failure track, `next` is never reached.
    ///
    /// ```rust
    /// use twotrack::typeclass::Monad;
    ///
    /// assert_eq!(Some(5).then(Some("hello")), Some("hello"));
    /// assert_eq!(None::<i32>.then(Some("hello")), None);
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
        Self::WithType<B>: Clone + Send + Sync + 'static,
        B: Send + 'static,
    {
        self.flat_map(move |_| next.clone())
    }
}

impl<A> Monad for Option<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: Fn(A) -> Option<B> + Send + Sync + 'static,
        B: Send + 'static,
    {
        self.and_then(function)
    }
}

impl<T, E> Monad for Result<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Result<B, E>
    where
        F: Fn(T) -> Result<B, E> + Send + Sync + 'static,
        B: Send + 'static,
    {
        self.and_then(function)
    }
}
