use serde::{Deserialize, Serialize};

use super::factors::FactorTable;

/// A trip description submitted for calculation.
///
/// `distance_km` must be positive; callers validate before submitting.
/// The factor table travels with the request so a calculation is fully
/// reproducible from its inputs alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    pub user_id: String,
    pub category: String,
    pub mode: String,
    pub distance_km: f64,
    pub factor_baseline: f64,
    pub factors: FactorTable,
}

/// Computed savings for a trip, with display-rounded quantities and a
/// step-by-step trace of the arithmetic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// What the trip would have emitted at the baseline factor, kg.
    pub baseline_co2_kg: f64,
    /// What the chosen mode emits over the same distance, kg.
    pub mode_co2_kg: f64,
    /// Baseline minus mode, floored at zero, kg.
    pub saved_co2_kg: f64,
    /// Savings as a share of the baseline, 0–100.
    pub reduction_pct: u8,
    /// One line per arithmetic step, in calculation order.
    pub calculation_steps: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serde_roundtrip() {
        let request = CalculationRequest {
            user_id: "maria".into(),
            category: "transporte".into(),
            mode: "bus".into(),
            distance_km: 10.0,
            factor_baseline: 0.21,
            factors: FactorTable::default(),
        };
        let json = serde_json::to_string(&request).unwrap();
        let parsed: CalculationRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(request, parsed);
    }
}
