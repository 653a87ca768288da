use small_calc::{add, divide, multiply, subtract, Number};

const TOLERANCE: f64 = 1e-9;

fn sample_operands() -> Vec<Number> {
    vec![
        Number::from(0),
        Number::from(1),
        Number::from(-1),
        Number::from(2),
        Number::from(-7),
        Number::from(123_456),
        Number::from(i64::MAX),
        Number::from(i64::MIN),
        Number::from(0.5),
        Number::from(-2.25),
        Number::from(1e-3),
        Number::from(3.75e6),
    ]
}

#[test]
fn test_add_scenarios() {
    assert_eq!(add(2, 3), 5);
    assert_eq!(add(-1, 1), 0);
    assert_eq!(add(0, 0), 0);
}

#[test]
fn test_subtract_scenarios() {
    assert_eq!(subtract(5, 3), 2);
    assert_eq!(subtract(3, 5), -2);
    assert_eq!(subtract(0, 0), 0);
}

#[test]
fn test_multiply_scenarios() {
    assert_eq!(multiply(2, 3), 6);
    assert_eq!(multiply(-2, 3), -6);
    assert_eq!(multiply(0, 5), 0);
}

#[test]
fn test_divide_scenarios() {
    assert_eq!(divide(6, 3).unwrap(), 2);
    assert_eq!(divide(5, 2).unwrap(), 2.5);
    assert_eq!(divide(-6, 2).unwrap(), -3);

    let err = divide(1, 0).unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn test_add_is_commutative() {
    let operands = sample_operands();
    for &a in &operands {
        for &b in &operands {
            assert_eq!(add(a, b), add(b, a), "add({}, {})", a, b);
        }
    }
}

#[test]
fn test_subtract_is_antisymmetric() {
    let operands = sample_operands();
    for &a in &operands {
        for &b in &operands {
            assert_eq!(subtract(a, b), -subtract(b, a), "subtract({}, {})", a, b);
        }
    }
}

#[test]
fn test_multiply_is_commutative() {
    let operands = sample_operands();
    for &a in &operands {
        for &b in &operands {
            assert_eq!(multiply(a, b), multiply(b, a), "multiply({}, {})", a, b);
        }
    }
}

#[test]
fn test_divide_undoes_multiply() {
    let operands = [
        Number::from(0),
        Number::from(3),
        Number::from(-7),
        Number::from(1024),
        Number::from(0.5),
        Number::from(-2.25),
    ];
    for &a in &operands {
        for &b in operands.iter().filter(|b| !b.is_zero()) {
            let back = divide(multiply(a, b), b).unwrap();
            assert!(
                back.approx_eq(a, TOLERANCE),
                "divide(multiply({}, {}), {}) = {}",
                a,
                b,
                b,
                back
            );
        }
    }
}

#[test]
fn test_divide_by_zero_always_fails() {
    for a in sample_operands() {
        for zero in [Number::from(0), Number::from(0.0), Number::from(-0.0)] {
            let err = divide(a, zero).unwrap_err();
            assert!(err.is_invalid_argument(), "divide({}, {})", a, zero);
        }
    }
}
