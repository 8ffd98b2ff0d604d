//! Control structures for two-track programming.
//!
//! - [`Either`]: the populated-track view handed to `Foldable::fold`
//! - [`OptionExt`]: railway vocabulary for `Option`
//! - [`ResultExt`]: railway vocabulary for `Result`
//! - [`Try`]: a cold synchronous computation with panic capture
//! - [`memoize`]: input-keyed caching of a pure function
//!
//! # Examples
//!
//! ## Absence becomes an error
//!
//! ```rust
//! use twotrack::control::{OptionExt, ResultExt};
//!
//! let content: Option<&str> = Some("  ");
//! let checked = content
//!     .to_result("file not found")
//!     .bind(|text| if text.trim().is_empty() { Err("empty file content") } else { Ok(text) });
//! assert_eq!(checked, Err("empty file content"));
//! ```
//!
//! ## Capturing a fault
//!
//! ```rust
//! use twotrack::control::Try;
//!
//! let divide = |d: i32| Try::lift(move || 100 / d);
//! assert_eq!(divide(4).run(), Ok(25));
//! assert!(divide(0).run().is_err());
//! ```

mod either;
mod option;
mod result;

#[cfg(feature = "control")]
mod memoize;
#[cfg(feature = "control")]
mod try_monad;

pub use either::Either;
pub use option::OptionExt;
pub use result::ResultExt;

#[cfg(feature = "control")]
pub use memoize::{Memoized, memoize, memoize_fn};
#[cfg(feature = "control")]
pub use try_monad::Try;
