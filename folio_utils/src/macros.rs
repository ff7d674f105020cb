/// Asserts that an expression matches a pattern, optionally with a guard.
///
/// The expression is matched by reference, so the bindings of a guard are
/// references too.
#[macro_export]
macro_rules! assert_matches {
    ($expr:expr, $pat:pat $(if $guard:expr)? $(,)?) => {
        match &$expr {
            $pat $(if $guard)? => {}
            value => ::core::panic!(
                "assertion failed: {value:?} does not match {}",
                ::core::stringify!($pat $(if $guard)?)
            ),
        }
    };
}
