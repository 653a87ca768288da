use crate::domain::model::Number;
use crate::domain::ports::Arithmetic;
use crate::utils::error::{CalcError, Result};

/// 整數運算溢位時改用浮點數計算，讓加減乘永遠有結果
fn integer_or_float(
    a: Number,
    b: Number,
    checked: fn(i64, i64) -> Option<i64>,
    float: fn(f64, f64) -> f64,
) -> Number {
    match (a, b) {
        (Number::Integer(x), Number::Integer(y)) => checked(x, y)
            .map(Number::Integer)
            .unwrap_or_else(|| Number::Float(float(x as f64, y as f64))),
        _ => Number::Float(float(a.to_f64(), b.to_f64())),
    }
}

pub fn add(a: impl Into<Number>, b: impl Into<Number>) -> Number {
    integer_or_float(a.into(), b.into(), i64::checked_add, |x, y| x + y)
}

pub fn subtract(a: impl Into<Number>, b: impl Into<Number>) -> Number {
    integer_or_float(a.into(), b.into(), i64::checked_sub, |x, y| x - y)
}

pub fn multiply(a: impl Into<Number>, b: impl Into<Number>) -> Number {
    integer_or_float(a.into(), b.into(), i64::checked_mul, |x, y| x * y)
}

/// 實數除法，結果一律為浮點數；除數為零時回傳 `InvalidArgument`
pub fn divide(a: impl Into<Number>, b: impl Into<Number>) -> Result<Number> {
    let (a, b) = (a.into(), b.into());
    if b.is_zero() {
        return Err(CalcError::invalid_argument(format!(
            "cannot divide {} by zero",
            a
        )));
    }
    Ok(Number::Float(a.to_f64() / b.to_f64()))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StandardArithmetic;

impl Arithmetic for StandardArithmetic {
    fn add(&self, a: Number, b: Number) -> Number {
        add(a, b)
    }

    fn subtract(&self, a: Number, b: Number) -> Number {
        subtract(a, b)
    }

    fn multiply(&self, a: Number, b: Number) -> Number {
        multiply(a, b)
    }

    fn divide(&self, a: Number, b: Number) -> Result<Number> {
        divide(a, b)
    }
}
