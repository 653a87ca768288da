use crate::core::{Arithmetic, BatchReport, Calculation, ConfigProvider, Number, Outcome};
use crate::utils::error::Result;

pub const DEFAULT_TOLERANCE: f64 = 1e-9;

pub struct CalcEngine<A: Arithmetic> {
    arithmetic: A,
    tolerance: f64,
    stop_on_error: bool,
}

impl<A: Arithmetic> CalcEngine<A> {
    pub fn new(arithmetic: A) -> Self {
        Self {
            arithmetic,
            tolerance: DEFAULT_TOLERANCE,
            stop_on_error: false,
        }
    }

    pub fn with_config<C: ConfigProvider>(arithmetic: A, config: &C) -> Self {
        Self {
            arithmetic,
            tolerance: config.tolerance(),
            stop_on_error: config.stop_on_error(),
        }
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn evaluate(&self, calculation: &Calculation) -> Result<Number> {
        match self
            .arithmetic
            .apply(calculation.op, calculation.a, calculation.b)
        {
            Ok(value) => {
                tracing::debug!("{} = {}", calculation.label(), value);
                Ok(value)
            }
            Err(e) => {
                tracing::warn!("❌ {} failed: {}", calculation.label(), e);
                Err(e)
            }
        }
    }

    /// 計算並與 expected 比對 (在容許誤差內)
    ///
    /// 運算錯誤記錄在 `Outcome.result`，不會由此回傳。
    pub fn check(&self, calculation: &Calculation) -> Outcome {
        let result = self.evaluate(calculation);
        let matches_expected = match (&result, calculation.expected) {
            (Ok(actual), Some(expected)) => {
                let matches = actual.approx_eq(expected, self.tolerance);
                if !matches {
                    tracing::warn!(
                        "⚠️ {}: expected {}, got {}",
                        calculation.label(),
                        expected,
                        actual
                    );
                }
                Some(matches)
            }
            _ => None,
        };

        Outcome {
            calculation: calculation.clone(),
            result,
            matches_expected,
        }
    }

    pub fn run(&self, calculations: &[Calculation]) -> Result<BatchReport> {
        tracing::info!("Evaluating {} calculations", calculations.len());

        let mut report = BatchReport::default();
        for calculation in calculations {
            let outcome = self.check(calculation);
            if self.stop_on_error {
                if let Err(e) = outcome.result {
                    tracing::error!("Stopping at '{}': {}", calculation.label(), e);
                    return Err(e);
                }
            }
            report.outcomes.push(outcome);
        }

        tracing::info!(
            "✅ {} succeeded, {} failed, {} mismatched",
            report.succeeded(),
            report.failed(),
            report.mismatched()
        );
        Ok(report)
    }
}
