//! Bifunctor type class - mapping over both tracks.
//!
//! A `Bifunctor` transforms both type parameters of a two-track container at
//! once. In a pipeline it is the tool for normalizing heterogeneous errors
//! from different stages into one error type before binding across stage
//! boundaries.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! bf.bimap(|x| x, |y| y) == bf
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! bf.bimap(|x| f2(f1(x)), |y| g2(g1(y))) == bf.bimap(f1, g1).bimap(f2, g2)
//! ```
//!
//! ## first/second Consistency Law
//!
//! ```text
//! bf.bimap(f, g) == bf.first(f).second(g)
//! ```
//!
//! # Type Parameter Order for Result
//!
//! `Result<T, E>` is implemented as `Bifunctor<E, T>`:
//! - `first`: transforms the error track (E), like `map_err`
//! - `second`: transforms the success track (T), like `map`
//!
//! # Examples
//!
//! ```rust
//! use twotrack::typeclass::Bifunctor;
//!
//! let failed: Result<i32, &str> = Err("not found");
//! let normalized = failed.bimap(|message| message.len(), |value| value * 2);
//! assert_eq!(normalized, Err(9));
//! ```

/// A type class for two-track types that can have functions mapped over both
/// tracks.
///
/// See module-level documentation for laws.
pub trait Bifunctor<A, B> {
    /// The resulting type after both tracks are transformed.
    ///
    /// For `Result<T, E>` (as `Bifunctor<E, T>`), `Target<C, D> = Result<D, C>`.
    type Target<C, D>;

    /// Transforms whichever track is populated.
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: Fn(A) -> C + Send + Sync + 'static,
        G: Fn(B) -> D + Send + Sync + 'static,
        C: Send + 'static,
        D: Send + 'static;

    /// Transforms the first (error) track only.
    fn first<C, F>(self, function: F) -> Self::Target<C, B>
    where
        F: Fn(A) -> C + Send + Sync + 'static,
        C: Send + 'static;

    /// Transforms the second (success) track only.
    fn second<D, G>(self, function: G) -> Self::Target<A, D>
    where
        G: Fn(B) -> D + Send + Sync + 'static,
        D: Send + 'static;
}

impl<T, E> Bifunctor<E, T> for Result<T, E> {
    type Target<C, D> = Result<D, C>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Result<D, C>
    where
        F: Fn(E) -> C + Send + Sync + 'static,
        G: Fn(T) -> D + Send + Sync + 'static,
        C: Send + 'static,
        D: Send + 'static,
    {
        match self {
            Ok(value) => Ok(second_function(value)),
            Err(error) => Err(first_function(error)),
        }
    }

    #[inline]
    fn first<C, F>(self, function: F) -> Result<T, C>
    where
        F: Fn(E) -> C + Send + Sync + 'static,
        C: Send + 'static,
    {
        self.map_err(function)
    }

    #[inline]
    fn second<D, G>(self, function: G) -> Result<D, E>
    where
        G: Fn(T) -> D + Send + Sync + 'static,
        D: Send + 'static,
    {
        self.map(function)
    }
}
