/// Asserts that an expression matches a pattern, optionally with a guard.
///
/// Unlike `assert!(matches!(..))` the panic message contains the debug
/// representation of the value that failed to match.
#[macro_export]
macro_rules! assert_matches {
    ($expr:expr, $pat:pat $(,)?) => {
        match ($expr) {
            $pat => (),
            value => ::core::panic!(
                "assertion failed: `{value:?}` does not match `{}`",
                ::core::stringify!($pat)
            ),
        }
    };
    ($expr:expr, $pat:pat if $guard:expr $(,)?) => {{
        let value = $expr;
        match (&value) {
            $pat if $guard => (),
            #[allow(unused_variables, reason = "bindings are only used by the guard")]
            $pat => ::core::panic!(
                "assertion failed: `{value:?}` matches `{}` but not `{}`",
                ::core::stringify!($pat),
                ::core::stringify!($guard)
            ),
            _ => ::core::panic!(
                "assertion failed: `{value:?}` does not match `{}`",
                ::core::stringify!($pat)
            ),
        }
    }};
}
