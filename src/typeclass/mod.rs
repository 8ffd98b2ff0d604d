//! Type class traits shared by every two-track container.
//!
//! - [`TypeConstructor`]: GAT-based emulation of higher-kinded types
//! - [`Functor`]: Mapping over the success track
//! - [`Pure`]: Lifting a plain value onto the success track
//! - [`Monad`]: Sequencing with short-circuit on the failure track
//! - [`Bifunctor`]: Mapping over both tracks
//! - [`Foldable`]: Single-step reduction over the populated track
//!
//! `Option` and `Result` implement these here. `Try` and `AsyncResult`
//! implement them next to their definitions, so generic combinators such as
//! [`lift`](crate::compose::lift) and [`kleisli`](crate::compose::kleisli)
//! work unchanged over all four.
//!
//! # Examples
//!
//! ```rust
//! use twotrack::typeclass::Functor;
//!
//! fn double<M: Functor<Inner = i32>>(value: M) -> M::WithType<i32> {
//!     value.fmap(|n| n * 2)
//! }
//!
//! assert_eq!(double(Some(21)), Some(42));
//! assert_eq!(double(Ok::<i32, String>(4)), Ok(8));
//! ```

mod bifunctor;
mod foldable;
mod functor;
mod higher;
mod monad;
mod pure;

pub use bifunctor::Bifunctor;
pub use foldable::Foldable;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
pub use pure::Pure;
