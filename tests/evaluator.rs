use keycalc::calculator::{UnaryOp, parse_operand};
use keycalc::{ERROR_MARKER, evaluate_binary, evaluate_power, evaluate_unary, format_result, is_unary};

fn assert_close(actual: &str, expected: f64) {
    let actual: f64 = actual
        .parse()
        .unwrap_or_else(|_| panic!("'{actual}' is not a number"));
    let tolerance = 1e-9 * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_reciprocal_matches_direct_division() {
    for x in [4.0, -2.0, 0.5, 3.0, 7.25, -1e-3, 1e6] {
        assert_eq!(
            evaluate_unary("1/x", &format_result(x)),
            format_result(1.0 / x),
            "reciprocal of {x}"
        );
    }
    assert_eq!(evaluate_unary("1/x", "0"), ERROR_MARKER);
}

#[test]
fn test_documented_examples() {
    assert_eq!(evaluate_unary("x!", "5"), "120");
    assert_eq!(evaluate_unary("x!", "-1"), ERROR_MARKER);
    assert_eq!(evaluate_unary("x!", "3.5"), ERROR_MARKER);
    assert_eq!(evaluate_unary("x!", "171"), ERROR_MARKER);
    assert_eq!(evaluate_unary("√x", "-4"), ERROR_MARKER);
    assert_eq!(evaluate_unary("√x", "9"), "3");
    assert_eq!(evaluate_unary("sin⁻¹", "2"), ERROR_MARKER);
    assert_eq!(evaluate_unary("sin⁻¹", "1"), "90");
    assert_eq!(evaluate_binary("6", "0", "÷"), ERROR_MARKER);
    assert_eq!(evaluate_binary("6", "3", "÷"), "2");
    assert_eq!(evaluate_binary("x", "50", "%"), "0.5");
    assert_eq!(format_result(3.0), "3");
    assert_eq!(format_result(1.0 / 3.0), "0.3333333333");
    assert_eq!(format_result(2.5), "2.5");
    assert!(is_unary("sin"));
    assert!(!is_unary("+"));
}

#[test]
fn test_every_unary_symbol_is_classified() {
    for op in UnaryOp::ALL {
        assert!(is_unary(op.symbol()), "{} should be unary", op.symbol());
    }
    for symbol in ["+", "—", "×", "÷", "%", "^", "="] {
        assert!(!is_unary(symbol), "{symbol} should not be unary");
    }
}

#[test]
fn test_unary_round_trip_against_std() {
    let cases: &[(&str, f64, fn(f64) -> f64)] = &[
        ("√x", 2.0, f64::sqrt),
        ("sin", 30.0, |x| x.to_radians().sin()),
        ("cos", 45.0, |x| x.to_radians().cos()),
        ("tan", 10.0, |x| x.to_radians().tan()),
        ("sin⁻¹", 0.5, |x| x.asin().to_degrees()),
        ("cos⁻¹", 0.25, |x| x.acos().to_degrees()),
        ("tan⁻¹", 3.0, |x| x.atan().to_degrees()),
        ("log", 42.0, f64::log10),
        ("ln", 42.0, f64::ln),
        ("1/x", 8.0, |x| 1.0 / x),
        ("x!", 10.0, |_| 3_628_800.0),
    ];

    for (symbol, x, direct) in cases {
        let result = evaluate_unary(symbol, &format_result(*x));
        assert_close(&result, direct(*x));
    }
}

#[test]
fn test_format_is_idempotent() {
    for value in [0.0, -1.5, 1.0 / 7.0, 1e-5, 98765.4321, 1e15 + 0.5, -2.0 / 3.0] {
        let once = format_result(value);
        let reparsed = parse_operand(&once).unwrap();
        assert_eq!(format_result(reparsed), once, "value {value}");
    }
}

#[test]
fn test_error_marker_never_leaks_detail() {
    let failures = [
        evaluate_unary("√x", "-1"),
        evaluate_unary("log", "abc"),
        evaluate_binary("1", "0", "÷"),
        evaluate_power("-1", "0.5"),
        evaluate_power("", "2"),
    ];
    for failure in failures {
        assert_eq!(failure, ERROR_MARKER);
    }
}

#[test]
fn test_incomplete_input_passes_through() {
    assert_eq!(evaluate_binary("", "12", "+"), "12");
    assert_eq!(evaluate_binary("5", "", "+"), "");
    assert_eq!(evaluate_binary("5", "3", "?"), "3");
}
