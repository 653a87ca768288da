pub mod arithmetic;
pub mod engine;

pub use crate::domain::model::{BatchReport, Calculation, Number, Operator, Outcome};
pub use crate::domain::ports::{Arithmetic, ConfigProvider};
pub use crate::utils::error::Result;
