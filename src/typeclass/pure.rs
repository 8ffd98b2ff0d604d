//! Pure type class - lifting a plain value onto the success track.

use super::functor::Functor;

/// A type class for containers that can lift a plain value onto their
/// success track.
///
/// Values must be `Clone` because a re-runnable description hands a fresh
/// copy to every run.
///
/// # Laws
///
/// Together with `Monad::flat_map`, `pure` must satisfy left and right
/// identity (see [`Monad`](super::Monad)).
///
/// # Examples
///
/// ```rust
/// use twotrack::typeclass::Pure;
///
/// let x: Option<i32> = <Option<()>>::pure(42);
/// assert_eq!(x, Some(42));
///
/// let y: Result<i32, String> = <Result<(), String>>::pure(42);
/// assert_eq!(y, Ok(42));
/// ```
pub trait Pure: Functor {
    /// Lifts a value onto the success track.
    fn pure<B>(value: B) -> Self::WithType<B>
    where
        B: Clone + Send + Sync + 'static;
}

impl<A> Pure for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B>
    where
        B: Clone + Send + Sync + 'static,
    {
        Some(value)
    }
}

impl<T, E> Pure for Result<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Result<B, E>
    where
        B: Clone + Send + Sync + 'static,
    {
        Ok(value)
    }
}
