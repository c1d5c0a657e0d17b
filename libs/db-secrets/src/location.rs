//! Call-site labels for ad hoc diagnostics

use std::panic::Location;

/// Format a call-site label as `"<function> line:<line> "`
pub fn format_location(function: &str, line: u32) -> String {
    format!("{function} line:{line} ")
}

/// Label the caller's line with an explicitly supplied function name
#[track_caller]
pub fn caller_location(function: &str) -> String {
    format_location(function, Location::caller().line())
}

#[doc(hidden)]
pub fn enclosing_function(marker_path: &'static str) -> &'static str {
    let mut name = marker_path.strip_suffix("::__marker").unwrap_or(marker_path);
    while let Some(outer) = name.strip_suffix("::{{closure}}") {
        name = outer;
    }
    name
}

/// Label for the current line, naming the enclosing function by its full path.
///
/// ```
/// fn connect() -> String {
///     db_secrets::current_location!()
/// }
/// assert!(connect().contains("connect line:"));
/// ```
#[macro_export]
macro_rules! current_location {
    () => {{
        fn __marker() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        $crate::location::format_location(
            $crate::location::enclosing_function(__type_name_of(__marker)),
            line!(),
        )
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_location() {
        assert_eq!(format_location("app::connect", 42), "app::connect line:42 ");
    }

    #[test]
    fn test_caller_location_uses_call_site_line() {
        let (label, line) = (caller_location("app::connect"), line!());
        assert_eq!(label, format!("app::connect line:{line} "));
    }

    #[test]
    fn test_enclosing_function_strips_closures() {
        assert_eq!(
            enclosing_function("app::run::{{closure}}::{{closure}}::__marker"),
            "app::run"
        );
    }

    #[test]
    fn test_current_location_names_this_function() {
        let (label, line) = (crate::current_location!(), line!());
        assert_eq!(
            label,
            format!("db_secrets::location::tests::test_current_location_names_this_function line:{line} ")
        );
    }
}
