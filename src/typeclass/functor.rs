//! Functor type class - mapping over the success track.
//!
//! A `Functor` transforms the value on the success track without changing the
//! shape of the container: `None` stays `None`, `Err` stays `Err`, and a cold
//! description stays cold.
//!
//! Functions passed to `fmap` are `Fn + Send + Sync + 'static` because `Try`
//! and `AsyncResult` are re-runnable descriptions that may call the function
//! once per run, possibly from another thread.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use twotrack::typeclass::Functor;
//!
//! let some_value: Option<i32> = Some(5);
//! assert_eq!(some_value.fmap(|n| n.to_string()), Some("5".to_string()));
//!
//! let none_value: Option<i32> = None;
//! assert_eq!(none_value.fmap(|n| n.to_string()), None);
//! ```

use super::higher::TypeConstructor;

/// A type class for types that can have a function mapped over their
/// success track.
///
/// See module-level documentation for laws.
pub trait Functor: TypeConstructor {
    /// Applies a function to the value on the success track.
    ///
    /// The function is never invoked for `None`, `Err`, or a description
    /// whose run ends on the error track.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use twotrack::typeclass::Functor;
    ///
    /// let x: Result<i32, String> = Ok(5);
    /// assert_eq!(x.fmap(|n| n * 2), Ok(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: Fn(Self::Inner) -> B + Send + Sync + 'static,
        B: Send + 'static;

    /// Replaces the value on the success track with a constant.
    ///
    /// ```rust
    /// use twotrack::typeclass::Functor;
    ///
    /// assert_eq!(Some(5).replace("replaced"), Some("replaced"));
    /// assert_eq!(None::<i32>.replace("replaced"), None);
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
        B: Clone + Send + Sync + 'static,
    {
        self.fmap(move |_| value.clone())
    }

    /// Discards the value on the success track, keeping only the track.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: Fn(A) -> B + Send + Sync + 'static,
        B: Send + 'static,
    {
        self.map(function)
    }
}

impl<T, E> Functor for Result<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Result<B, E>
    where
        F: Fn(T) -> B + Send + Sync + 'static,
        B: Send + 'static,
    {
        self.map(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn option_fmap_some() {
        assert_eq!(Some(21).fmap(|x| x * 2), Some(42));
    }

    #[rstest]
    fn option_fmap_none_never_calls_function() {
        let value: Option<i32> = None;
        let result = value.fmap(|_: i32| -> i32 { panic!("must not be called") });
        assert_eq!(result, None);
    }

    #[rstest]
    fn result_fmap_err_is_identity() {
        let value: Result<i32, String> = Err("boom".to_string());
        assert_eq!(value.fmap(|x| x + 1), Err("boom".to_string()));
    }

    #[rstest]
    fn result_void_keeps_track() {
        let ok: Result<i32, String> = Ok(1);
        assert_eq!(ok.void(), Ok(()));
    }
}
