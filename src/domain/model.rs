use crate::utils::error::{CalcError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Neg;
use std::str::FromStr;

/// 運算元：整數或浮點數
///
/// 相等比較以數值為準，因此 `Integer(2) == Float(2.0)`；
/// 混合比較是精確的，不經過 f64 轉換。
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    pub fn to_f64(self) -> f64 {
        match self {
            Number::Integer(v) => v as f64,
            Number::Float(v) => v,
        }
    }

    pub fn is_zero(self) -> bool {
        match self {
            Number::Integer(v) => v == 0,
            Number::Float(v) => v == 0.0,
        }
    }

    pub fn is_integer(self) -> bool {
        matches!(self, Number::Integer(_))
    }

    pub fn is_finite(self) -> bool {
        match self {
            Number::Integer(_) => true,
            Number::Float(v) => v.is_finite(),
        }
    }

    /// 在絕對誤差 `tolerance` 內視為相等
    pub fn approx_eq(self, other: Number, tolerance: f64) -> bool {
        match (self, other) {
            (Number::Integer(a), Number::Integer(b)) => a == b,
            _ => (self.to_f64() - other.to_f64()).abs() <= tolerance,
        }
    }
}

/// 整數與浮點數的精確比較：浮點數必須是整數值且落在 i64 範圍內
fn integer_eq_float(i: i64, f: f64) -> bool {
    // 2^63；i64::MAX 無法以 f64 精確表示，上界需用開區間
    const BOUND: f64 = 9_223_372_036_854_775_808.0;
    f.fract() == 0.0 && (-BOUND..BOUND).contains(&f) && f as i64 == i
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Number::Integer(a), Number::Integer(b)) => a == b,
            (Number::Float(a), Number::Float(b)) => a == b,
            (Number::Integer(i), Number::Float(f)) | (Number::Float(f), Number::Integer(i)) => {
                integer_eq_float(i, f)
            }
        }
    }
}

impl PartialEq<i32> for Number {
    fn eq(&self, other: &i32) -> bool {
        *self == Number::from(*other)
    }
}

impl PartialEq<i64> for Number {
    fn eq(&self, other: &i64) -> bool {
        *self == Number::from(*other)
    }
}

impl PartialEq<f64> for Number {
    fn eq(&self, other: &f64) -> bool {
        *self == Number::Float(*other)
    }
}

impl Neg for Number {
    type Output = Number;

    fn neg(self) -> Number {
        match self {
            // i64::MIN 無法取負，改以浮點數表示
            Number::Integer(v) => v
                .checked_neg()
                .map(Number::Integer)
                .unwrap_or(Number::Float(-(v as f64))),
            Number::Float(v) => Number::Float(-v),
        }
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Integer(i64::from(value))
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Integer(value)
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Float(f64::from(value))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(v) => write!(f, "{}", v),
            Number::Float(v) => write!(f, "{}", v),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add" | "+" => Ok(Operator::Add),
            "subtract" | "-" => Ok(Operator::Subtract),
            "multiply" | "*" => Ok(Operator::Multiply),
            "divide" | "/" => Ok(Operator::Divide),
            other => Err(CalcError::invalid_argument(format!(
                "unknown operator '{}'",
                other
            ))),
        }
    }
}

/// 一筆待計算的運算
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Calculation {
    pub name: Option<String>,
    pub op: Operator,
    pub a: Number,
    pub b: Number,
    pub expected: Option<Number>,
}

impl Calculation {
    pub fn new(op: Operator, a: impl Into<Number>, b: impl Into<Number>) -> Self {
        Self {
            name: None,
            op,
            a: a.into(),
            b: b.into(),
            expected: None,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn expecting(mut self, expected: impl Into<Number>) -> Self {
        self.expected = Some(expected.into());
        self
    }

    /// 日誌用標籤：有名稱用名稱，否則用算式本身
    pub fn label(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("{} {} {}", self.a, self.op, self.b),
        }
    }
}

#[derive(Debug)]
pub struct Outcome {
    pub calculation: Calculation,
    pub result: Result<Number>,
    /// 沒有 expected 時為 None
    pub matches_expected: Option<bool>,
}

impl Outcome {
    pub fn passed(&self) -> bool {
        self.result.is_ok() && self.matches_expected != Some(false)
    }
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<Outcome>,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_err()).count()
    }

    pub fn mismatched(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.matches_expected == Some(false))
            .count()
    }

    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(Outcome::passed)
    }
}
