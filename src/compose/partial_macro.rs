//! The `partial!` macro for fixing some arguments of a function.

/// Fixes some arguments of a two- or three-argument function.
///
/// Write `__` for every argument that stays open; the macro returns a
/// closure over the open arguments, in order. Fixed arguments are evaluated
/// once and cloned into every call, so they must implement [`Clone`].
///
/// # Examples
///
/// ```
/// use twotrack::partial;
///
/// fn greet(greeting: &str, name: &str) -> String {
///     format!("{greeting} {name}")
/// }
///
/// let hello = partial!(greet, "hello", __);
/// assert_eq!(hello("Cheranga"), "hello Cheranga");
///
/// let to_cheranga = partial!(greet, __, "Cheranga");
/// assert_eq!(to_cheranga("goodbye"), "goodbye Cheranga");
/// ```
#[macro_export]
macro_rules! partial {
    ($function:expr, __, __ $(,)?) => {{
        let function = $function;
        move |first, second| function(first, second)
    }};

    ($function:expr, $first:expr, __ $(,)?) => {{
        let function = $function;
        let first = $first;
        move |second| function(::core::clone::Clone::clone(&first), second)
    }};

    ($function:expr, __, $second:expr $(,)?) => {{
        let function = $function;
        let second = $second;
        move |first| function(first, ::core::clone::Clone::clone(&second))
    }};

    ($function:expr, $first:expr, __, __ $(,)?) => {{
        let function = $function;
        let first = $first;
        move |second, third| function(::core::clone::Clone::clone(&first), second, third)
    }};

    ($function:expr, $first:expr, $second:expr, __ $(,)?) => {{
        let function = $function;
        let first = $first;
        let second = $second;
        move |third| {
            function(
                ::core::clone::Clone::clone(&first),
                ::core::clone::Clone::clone(&second),
                third,
            )
        }
    }};

    ($function:expr, __, $second:expr, $third:expr $(,)?) => {{
        let function = $function;
        let second = $second;
        let third = $third;
        move |first| {
            function(
                first,
                ::core::clone::Clone::clone(&second),
                ::core::clone::Clone::clone(&third),
            )
        }
    }};
}
