//! Small combinators used between pipeline stages.

/// Returns the value unchanged.
///
/// The unit of composition: `compose!(identity, f)` and
/// `compose!(f, identity)` both behave like `f`.
///
/// ```
/// use twotrack::compose::identity;
///
/// let recovered: Result<i32, i32> = Err(404);
/// assert_eq!(recovered.unwrap_or_else(identity), 404);
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Returns a function that ignores its input and yields `value`.
///
/// ```
/// use twotrack::compose::constant;
///
/// let unknown = constant("unknown employee");
/// assert_eq!(Some(42).map(unknown), Some("unknown employee"));
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the arguments of a binary function.
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second, first| function(first, second)
}
