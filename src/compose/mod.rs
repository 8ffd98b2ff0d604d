//! Function composition utilities.
//!
//! Building blocks for wiring independent steps into one pipeline:
//!
//! - [`compose!`]: compose plain functions right-to-left
//! - [`pipe!`]: push a value left-to-right through plain, mapped (`=>`) and
//!   bound (`=>>`) steps
//! - [`partial!`]: fix some arguments of a two- or three-argument function
//! - [`lift`]: turn `A -> B` into `M<A> -> M<B>` for any [`Functor`]
//! - [`kleisli`]: chain `A -> M<B>` and `B -> M<C>` into `A -> M<C>` for any
//!   [`Monad`]
//! - [`identity`], [`constant`], [`flip`]: small helpers
//!
//! `lift` and `kleisli` are written once against the type classes, so the
//! same composed function works for `Option`, `Result`, `Try` and
//! `AsyncResult`.
//!
//! [`Functor`]: crate::typeclass::Functor
//! [`Monad`]: crate::typeclass::Monad
//!
//! # Examples
//!
//! ```rust
//! use twotrack::compose::kleisli;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Customer { id: String, name: String }
//!
//! fn find_customer(id: String) -> Result<Customer, String> {
//!     if id == "666" {
//!         Err("customer not found".to_string())
//!     } else {
//!         Ok(Customer { name: format!("customer-{id}"), id })
//!     }
//! }
//!
//! fn greet(customer: Customer) -> Result<String, String> {
//!     Ok(format!("hello {}", customer.name))
//! }
//!
//! let find_and_greet = kleisli(find_customer, greet);
//! assert_eq!(find_and_greet("1".to_string()), Ok("hello customer-1".to_string()));
//! assert_eq!(find_and_greet("666".to_string()), Err("customer not found".to_string()));
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Identity**: `compose!(identity, f) == f == compose!(f, identity)`
//! - **Kleisli identity**: `kleisli(f, M::pure)` behaves like `f`

mod compose_macro;
mod kleisli;
mod partial_macro;
mod pipe_macro;
mod utils;

pub use kleisli::{kleisli, lift};
pub use utils::{constant, flip, identity};

pub use crate::compose;
pub use crate::partial;
pub use crate::pipe;
