//! Combinators written once against the type classes.
//!
//! [`lift`] and [`kleisli`] only use [`Functor::fmap`] and
//! [`Monad::flat_map`], so they work unchanged for every container that
//! implements those classes.

use std::sync::Arc;

use crate::typeclass::{Functor, Monad};

/// Lifts a plain function to work on the success track of any [`Functor`].
///
/// ```
/// use twotrack::compose::lift;
///
/// let length = lift(|text: String| text.len());
/// assert_eq!(length(Some("abc".to_string())), Some(3));
/// assert_eq!(length(None), None);
/// ```
pub fn lift<M, B, F>(function: F) -> impl Fn(M) -> M::WithType<B>
where
    M: Functor,
    F: Fn(M::Inner) -> B + Send + Sync + 'static,
    B: Send + 'static,
{
    let function = Arc::new(function);
    move |container| {
        let function = Arc::clone(&function);
        container.fmap(move |value| function(value))
    }
}

/// Composes two railway steps left-to-right.
///
/// The result runs `first`, and only if it lands on the success track feeds
/// the value to `second`. A failure from `first` is returned unchanged and
/// `second` is never invoked.
pub fn kleisli<A, C, M, F, G>(first: F, second: G) -> impl Fn(A) -> M::WithType<C>
where
    M: Monad,
    F: Fn(A) -> M,
    G: Fn(M::Inner) -> M::WithType<C> + Send + Sync + 'static,
    C: Send + 'static,
{
    let second = Arc::new(second);
    move |input| {
        let second = Arc::clone(&second);
        first(input).flat_map(move |value| second(value))
    }
}
