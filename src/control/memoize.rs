//! Memoization keyed by input equality.
//!
//! [`memoize`] wraps a function with an unbounded cache: the first call with
//! a given key computes and stores the output, and every later call with an
//! equal key returns the stored output without calling the function again.
//! There is no eviction.
//!
//! The cache is guarded by a `parking_lot::RwLock`, so a [`Memoized`] can be
//! shared between threads. The function runs while the write lock is held,
//! which guarantees a single evaluation per key even under contention; as a
//! consequence the function must not call the same `Memoized` recursively.
//!
//! # Examples
//!
//! ```rust
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//! use twotrack::control::memoize;
//!
//! let calls = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&calls);
//! let generate_id = memoize(move |name: String| {
//!     counter.fetch_add(1, Ordering::SeqCst);
//!     format!("{}-{}", name.len(), name)
//! });
//!
//! let first = generate_id.call("Cheranga".to_string());
//! let second = generate_id.call("Cheranga".to_string());
//! assert_eq!(first, second);
//! assert_eq!(calls.load(Ordering::SeqCst), 1);
//! ```

use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use parking_lot::RwLock;

#[cfg(not(feature = "fxhash"))]
type Cache<A, B> = std::collections::HashMap<A, B>;

#[cfg(feature = "fxhash")]
type Cache<A, B> = rustc_hash::FxHashMap<A, B>;

/// A function wrapped with an input-keyed cache.
///
/// Cloning a `Memoized` shares the cache.
pub struct Memoized<A, B, F> {
    function: Arc<F>,
    cache: Arc<RwLock<Cache<A, B>>>,
}

/// Wraps `function` with a cache keyed by input equality.
pub fn memoize<A, B, F>(function: F) -> Memoized<A, B, F>
where
    A: Eq + Hash + Clone,
    B: Clone,
    F: Fn(A) -> B,
{
    Memoized {
        function: Arc::new(function),
        cache: Arc::new(RwLock::new(Cache::default())),
    }
}

/// Like [`memoize`], but returns a plain closure.
///
/// ```rust
/// use twotrack::control::memoize_fn;
///
/// let square = memoize_fn(|n: u64| n * n);
/// assert_eq!(square(12), 144);
/// assert_eq!(square(12), 144);
/// ```
pub fn memoize_fn<A, B, F>(function: F) -> impl Fn(A) -> B
where
    A: Eq + Hash + Clone,
    B: Clone,
    F: Fn(A) -> B,
{
    let memoized = memoize(function);
    move |input| memoized.call(input)
}

impl<A, B, F> Memoized<A, B, F>
where
    A: Eq + Hash + Clone,
    B: Clone,
    F: Fn(A) -> B,
{
    /// Returns the cached output for `input`, computing it on first use.
    pub fn call(&self, input: A) -> B {
        if let Some(output) = self.cache.read().get(&input) {
            return output.clone();
        }

        let mut cache = self.cache.write();
        cache
            .entry(input)
            .or_insert_with_key(|key| (self.function)(key.clone()))
            .clone()
    }

    /// Returns the cached output for `input` without computing it.
    pub fn cached(&self, input: &A) -> Option<B> {
        self.cache.read().get(input).cloned()
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.cache.read().len()
    }

    /// Returns `true` if nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.cache.read().is_empty()
    }
}

impl<A, B, F> Clone for Memoized<A, B, F> {
    fn clone(&self) -> Self {
        Self {
            function: Arc::clone(&self.function),
            cache: Arc::clone(&self.cache),
        }
    }
}

impl<A, B, F> fmt::Debug for Memoized<A, B, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Memoized")
            .field("entries", &self.cache.read().len())
            .finish_non_exhaustive()
    }
}
