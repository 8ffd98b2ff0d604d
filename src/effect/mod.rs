//! Deferred asynchronous computations and scoped resources.
//!
//! - [`AsyncResult`]: a cold, re-runnable description of asynchronous work
//!   yielding `Result<T, E>`
//! - [`with_resource`]: acquire/use/release with release-exactly-once
//!   semantics, handing the body a [`Scoped`] handle
//!
//! Nothing in this module spawns tasks or owns a runtime. A description only
//! does work when the future returned by `run` is awaited.
//!
//! # Examples
//!
//! ```rust
//! use twotrack::control::Try;
//! use twotrack::effect::AsyncResult;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let parse = |text: String| {
//!     Try::new(move || text.trim().parse::<i32>().map_err(|error| error.to_string())).to_async()
//! };
//! let doubled = AsyncResult::ok(" 21 ".to_string()).bind(parse).map(|n| n * 2);
//!
//! assert_eq!(doubled.run().await, Ok(42));
//! # }
//! ```

mod async_result;
mod resource;

pub use async_result::AsyncResult;
pub use resource::{Scoped, with_resource};
#[cfg(feature = "reader")]
pub(crate) use resource::guarded;
