pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::CalcConfig;
pub use crate::core::arithmetic::{add, divide, multiply, subtract, StandardArithmetic};
pub use crate::core::engine::CalcEngine;
pub use domain::model::{BatchReport, Calculation, Number, Operator, Outcome};
pub use utils::error::{CalcError, Result};
