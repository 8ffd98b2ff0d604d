//! The `compose!` macro for right-to-left function composition.

/// Composes functions from right to left.
///
/// `compose!(f, g, h)(x)` is `f(g(h(x)))`: the rightmost function runs
/// first. Every function must implement [`Fn`], and each output type must
/// match the input type of the function to its left.
///
/// Composing railway steps (functions returning `Option` or `Result`) is the
/// job of [`kleisli`](crate::compose::kleisli); `compose!` is for the plain
/// steps between them.
///
/// # Examples
///
/// ```
/// use twotrack::compose;
///
/// let trim = |text: String| text.trim().to_string();
/// let is_blank = |text: String| text.is_empty();
///
/// let blank_content = compose!(is_blank, trim);
/// assert!(blank_content("   \n".to_string()));
/// assert!(!blank_content(" {} ".to_string()));
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr $(,)?) => {
        $function
    };

    ($outer:expr, $inner:expr $(,)?) => {{
        let outer = $outer;
        let inner = $inner;
        move |input| outer(inner(input))
    }};

    ($outer:expr, $($rest:expr),+ $(,)?) => {{
        let outer = $outer;
        let rest = $crate::compose!($($rest),+);
        move |input| outer(rest(input))
    }};
}

#[cfg(test)]
mod tests {
    use crate::compose::identity;
    use rstest::rstest;

    fn customer_id(name: &str) -> usize {
        name.len()
    }

    #[rstest]
    fn rightmost_function_runs_first() {
        let describe = compose!(|id: usize| format!("id-{id}"), customer_id);
        assert_eq!(describe("Cheranga"), "id-8");
    }

    #[rstest]
    fn identity_is_neutral_on_both_sides() {
        let left = compose!(identity, customer_id);
        let right = compose!(customer_id, identity);
        assert_eq!(left("abc"), customer_id("abc"));
        assert_eq!(right("abc"), customer_id("abc"));
    }

    #[rstest]
    #[case(0)]
    #[case(7)]
    fn composition_is_associative(#[case] input: i32) {
        let add_one = |x: i32| x + 1;
        let double = |x: i32| x * 2;
        let square = |x: i32| x * x;
        let grouped_left = compose!(compose!(add_one, double), square);
        let grouped_right = compose!(add_one, compose!(double, square));
        assert_eq!(grouped_left(input), grouped_right(input));
    }
}
