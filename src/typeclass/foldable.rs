//! Foldable type class - single-step reduction over the populated track.
//!
//! A two-track value holds exactly one of two things. `fold` hands the seed
//! and the populated track (as an [`Either`]) to one combining function and
//! returns what it produces, which makes it the uniform way to collapse
//! `Option`, `Result` and `Try` into a plain value.
//!
//! # Examples
//!
//! ```rust
//! use twotrack::control::Either;
//! use twotrack::typeclass::Foldable;
//!
//! let value: Result<&str, i32> = Ok("start");
//! let state = value.fold("InitialState".to_string(), |previous, track| {
//!     let content = match track {
//!         Either::Left(code) => code.to_string(),
//!         Either::Right(text) => text.to_string(),
//!     };
//!     format!("{previous} and {content}")
//! });
//! assert_eq!(state, "InitialState and start");
//! ```

use super::higher::TypeConstructor;
use crate::control::Either;

/// A type class for two-track types that can be reduced in one step.
pub trait Foldable: TypeConstructor {
    /// The payload of the failure track (`()` for `Option`).
    type Other;

    /// Combines `seed` with whichever track is populated.
    ///
    /// The failure track arrives as `Either::Left`, the success track as
    /// `Either::Right`.
    fn fold<S, F>(self, seed: S, combine: F) -> S
    where
        F: FnOnce(S, Either<Self::Other, Self::Inner>) -> S;

    /// Returns `true` if the success track is populated and satisfies
    /// `predicate`.
    #[inline]
    fn exists<P>(self, predicate: P) -> bool
    where
        Self: Sized,
        P: FnOnce(&Self::Inner) -> bool,
    {
        self.fold(false, |_, track| match track {
            Either::Left(_) => false,
            Either::Right(value) => predicate(&value),
        })
    }
}

impl<A> Foldable for Option<A> {
    type Other = ();

    #[inline]
    fn fold<S, F>(self, seed: S, combine: F) -> S
    where
        F: FnOnce(S, Either<(), A>) -> S,
    {
        match self {
            Some(value) => combine(seed, Either::Right(value)),
            None => combine(seed, Either::Left(())),
        }
    }
}

impl<T, E> Foldable for Result<T, E> {
    type Other = E;

    #[inline]
    fn fold<S, F>(self, seed: S, combine: F) -> S
    where
        F: FnOnce(S, Either<E, T>) -> S,
    {
        match self {
            Ok(value) => combine(seed, Either::Right(value)),
            Err(error) => combine(seed, Either::Left(error)),
        }
    }
}
