//! # twotrack
//!
//! Two-track composition for Rust: values that may be absent, values that may
//! be errors, and deferred computations that produce either, chained into one
//! pipeline with deterministic short-circuiting.
//!
//! ## Overview
//!
//! - **Type Classes**: `Functor`, `Pure`, `Monad`, `Bifunctor`, `Foldable`
//!   implemented once for `Option`, `Result`, `Try` and `AsyncResult`
//! - **Control Structures**: `OptionExt`, `ResultExt`, `Try`, `Either`, `memoize`
//! - **Function Composition**: `compose!`, `pipe!`, `lift`, `kleisli`
//! - **Effects**: `AsyncResult`, `with_resource`, the `Error` taxonomy
//! - **Reader**: open, read, decode and validate a typed record
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits
//! - `compose`: Function composition utilities
//! - `control`: `Try` and memoization (the extension traits ship with `typeclass`)
//! - `effect`: `AsyncResult` and scoped resources
//! - `reader`: The file-to-record pipeline
//! - `fxhash`: Use `rustc-hash` for memoization caches
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use twotrack::prelude::*;
//!
//! let parsed: Result<i32, String> = Ok("21")
//!     .bind(|text: &str| text.parse::<i32>().map_err(|error| error.to_string()))
//!     .map(|number| number * 2);
//! assert_eq!(parsed, Ok(42));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use twotrack::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "typeclass")]
    pub use crate::control::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;

    #[cfg(feature = "reader")]
    pub use crate::reader::*;
}

pub mod error;

pub use error::{Error, ErrorKind};

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "typeclass")]
pub mod control;

#[cfg(feature = "effect")]
pub mod effect;

#[cfg(feature = "reader")]
pub mod reader;
