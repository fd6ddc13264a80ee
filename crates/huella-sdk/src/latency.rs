use std::thread;
use std::time::Duration;

use tracing::debug;

use huella_core::calc;
use huella_core::model::{CalculationRequest, CalculationResult};

/// Wraps the pure calculator with a fixed artificial delay, for demos
/// that mimic a remote calculation service.
///
/// The delay is purely presentational and never changes the returned
/// values. Callers that want the plain function should use
/// [`huella_core::calc::calculate`] directly.
#[derive(Debug, Clone)]
pub struct DelayedCalculator {
    delay: Duration,
}

impl DelayedCalculator {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn calculate(&self, request: &CalculationRequest) -> CalculationResult {
        debug!("Simulating remote calculation, sleeping {:?}", self.delay);
        thread::sleep(self.delay);
        calc::calculate(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use huella_core::model::{FactorTable, DEFAULT_BASELINE_FACTOR};

    #[test]
    fn test_delay_does_not_change_values() {
        let request = CalculationRequest {
            user_id: "maria".into(),
            category: "transporte".into(),
            mode: "bus".into(),
            distance_km: 10.0,
            factor_baseline: DEFAULT_BASELINE_FACTOR,
            factors: FactorTable::default(),
        };

        let delayed = DelayedCalculator::new(Duration::from_millis(5));
        assert_eq!(delayed.calculate(&request), calc::calculate(&request));
    }
}
