use crate::domain::model::{Number, Operator};
use crate::utils::error::Result;

pub trait Arithmetic: Send + Sync {
    fn add(&self, a: Number, b: Number) -> Number;
    fn subtract(&self, a: Number, b: Number) -> Number;
    fn multiply(&self, a: Number, b: Number) -> Number;
    fn divide(&self, a: Number, b: Number) -> Result<Number>;

    fn apply(&self, op: Operator, a: Number, b: Number) -> Result<Number> {
        match op {
            Operator::Add => Ok(self.add(a, b)),
            Operator::Subtract => Ok(self.subtract(a, b)),
            Operator::Multiply => Ok(self.multiply(a, b)),
            Operator::Divide => self.divide(a, b),
        }
    }
}

pub trait ConfigProvider: Send + Sync {
    fn tolerance(&self) -> f64;
    fn stop_on_error(&self) -> bool;
}
