use scalc::Value;

pub fn int(value: i64) -> Value {
    Value::Int(value)
}

pub fn float(value: f64) -> Value {
    Value::Float(value)
}

pub fn text(value: &str) -> Value {
    Value::str(value)
}

// Helper macro to generate test functions based on field names
#[macro_export]
macro_rules! handle_case {
    ([$($attrs:meta)*] all, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_all() {
            let expected: &[scalc::Value] = &$expected;
            match evaluate_all() {
                Ok(actual) => pretty_assertions::assert_eq!(
                    expected,
                    actual.as_slice(),
                    "input: {:?}",
                    input()
                ),
                Err(err) => panic!("Expected {:?} but got error: {}", expected, err),
            }
        }
    };

    ([$($attrs:meta)*] result, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_result() {
            let expected: scalc::Value = $expected;
            let result = scalc::Engine::default()
                .compile(input())
                .and_then(|expr| expr.run(&params()));
            match result {
                Ok(actual) => pretty_assertions::assert_eq!(expected, actual, "input: {:?}", input()),
                Err(err) => panic!("Expected {:?} but got error: {}", expected, err),
            }
        }
    };

    ([$($attrs:meta)*] fault, $kind:ident) => {
        $(#[$attrs])*
        #[test]
        fn validate_fault() {
            match evaluate_all() {
                Err(err) => pretty_assertions::assert_eq!(
                    scalc::FaultKind::$kind,
                    err.kind(),
                    "input: {:?}, error: {}",
                    input(),
                    err
                ),
                Ok(values) => panic!(
                    "Expected {} fault but got {:?}",
                    stringify!($kind),
                    values
                ),
            }
        }
    };

    ([$($attrs:meta)*] span, $expected:tt) => {
        $(#[$attrs])*
        #[test]
        fn validate_span() {
            let err = match evaluate_all() {
                Err(err) => err,
                Ok(values) => panic!("Expected an error but got {:?}", values),
            };
            let expected: core::ops::Range<usize> = $expected;
            pretty_assertions::assert_eq!(Some(expected), err.span().map(|span| span.0.clone()));
        }
    };

    // Generic case for unknown field names
    ([$($attrs:meta)*] $field_name:ident, $expected:tt) => {
        compile_error!(concat!("Unknown test case field: ", stringify!($field_name)));
    };
}

// Helper macro to recursively parse assertion fields
#[macro_export]
macro_rules! parse_assertions {
    // Base case: no more fields to parse
    (@parse [$($test_functions:tt)*]) => {
        $($test_functions)*
    };

    (@parse [$($test_functions:tt)*] $(#[$attr:meta])* $field_name:ident: $field_value:tt, $($rest:tt)*) => {
        $crate::parse_assertions! {@parse [
            $($test_functions)*
            $crate::handle_case! {[$($attr)*] $field_name, $field_value}
        ] $($rest)*}
    };
}

// Main macro - name first, input second, optional params, then any order
// for assertions
#[macro_export]
macro_rules! test_case {
    (
        name: $name:ident,
        input: $input:expr,
        params: $params:tt,
        $($assertion_fields:tt)*
    ) => {
        mod $name {
            #![allow(unused_imports, dead_code)]

            use super::*;
            use once_cell::sync::OnceCell;

            fn input() -> &'static str {
                static INPUT_CELL: OnceCell<&'static str> = OnceCell::new();
                INPUT_CELL.get_or_init(|| $input)
            }

            fn params() -> scalc::Parameters {
                $params
            }

            fn evaluate_all() -> Result<Vec<scalc::Value>, scalc::Error> {
                scalc::Engine::default()
                    .compile(input())?
                    .run_all(&params())
            }

            $crate::parse_assertions! {@parse [] $($assertion_fields)*}
        }
    };

    (
        name: $name:ident,
        input: $input:expr,
        $($assertion_fields:tt)*
    ) => {
        $crate::test_case! {
            name: $name,
            input: $input,
            params: { scalc::Parameters::new() },
            $($assertion_fields)*
        }
    };
}
