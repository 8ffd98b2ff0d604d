//! The `pipe!` macro for left-to-right pipelines over two-track values.

/// Pushes a value through a series of steps from left to right.
///
/// Three kinds of step can be mixed freely:
///
/// - `f`: plain application, `f(value)`
/// - `=> f`: map over the success track, `Functor::fmap(value, f)`
/// - `=>> f`: bind a railway step, `Monad::flat_map(value, f)`
///
/// Mapped and bound steps work for any container implementing the type
/// classes (`Option`, `Result`, `Try`, `AsyncResult`), and once the value is
/// on the failure track the remaining `=>`/`=>>` steps are skipped.
///
/// # Examples
///
/// ```
/// use twotrack::pipe;
///
/// fn parse(text: &str) -> Result<i32, String> {
///     text.trim().parse().map_err(|_| format!("cannot parse {text:?}"))
/// }
/// fn non_negative(n: i32) -> Result<i32, String> {
///     if n < 0 { Err("negative".to_string()) } else { Ok(n) }
/// }
///
/// assert_eq!(pipe!(" 20 ", parse, =>> non_negative, => |n| n + 1), Ok(21));
/// assert_eq!(pipe!("-3", parse, =>> non_negative, => |n| n + 1), Err("negative".to_string()));
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr $(,)?) => {
        $value
    };

    ($value:expr, =>> $function:expr $(,)?) => {
        $crate::typeclass::Monad::flat_map($value, $function)
    };

    ($value:expr, =>> $function:expr, $($rest:tt)+) => {{
        let intermediate = $crate::typeclass::Monad::flat_map($value, $function);
        $crate::pipe!(intermediate, $($rest)+)
    }};

    ($value:expr, => $function:expr $(,)?) => {
        $crate::typeclass::Functor::fmap($value, $function)
    };

    ($value:expr, => $function:expr, $($rest:tt)+) => {{
        let intermediate = $crate::typeclass::Functor::fmap($value, $function);
        $crate::pipe!(intermediate, $($rest)+)
    }};

    ($value:expr, $function:expr $(,)?) => {
        $function($value)
    };

    ($value:expr, $function:expr, $($rest:tt)+) => {{
        let intermediate = $function($value);
        $crate::pipe!(intermediate, $($rest)+)
    }};
}

#[cfg(test)]
mod tests {
    use crate::control::Try;
    use crate::error::ErrorKind;
    use rstest::rstest;

    fn find_customer(id: i32) -> Option<String> {
        (id != 666).then(|| format!("customer-{id}"))
    }

    #[rstest]
    fn plain_steps_apply_in_order() {
        let trim = |text: &'static str| text.trim();
        assert_eq!(pipe!("  abc ", trim, str::len), 3);
    }

    #[rstest]
    #[case(1, Some(10))]
    #[case(666, None)]
    fn bound_steps_short_circuit(#[case] id: i32, #[case] expected: Option<usize>) {
        assert_eq!(pipe!(Some(id), =>> find_customer, => |name: String| name.len()), expected);
    }

    #[rstest]
    fn mapped_steps_work_for_try() {
        let length = pipe!(Try::pure("  ".to_string()), => |text: String| text.trim().len());
        assert_eq!(length.run(), Ok(0));

        let failed = pipe!(Try::<String>::lift(|| panic!("unreadable")), => |text: String| text.len());
        assert_eq!(failed.run().unwrap_err().kind(), ErrorKind::Fault);
    }
}
