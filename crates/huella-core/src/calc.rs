//! Emissions-savings calculation for a single trip.
//!
//! Pure and deterministic: no state, no IO. Safe to call from any number
//! of threads at once.

use tracing::debug;

use crate::model::{CalculationRequest, CalculationResult};

/// Compute the savings estimate for a trip.
///
/// Intermediate arithmetic stays unrounded; only the returned quantities
/// are rounded (2 decimals for kg, nearest integer for the percentage).
/// A mode absent from the factor table counts as zero-emission. A mode
/// that emits more than the baseline yields zero savings, not a loss.
pub fn calculate(request: &CalculationRequest) -> CalculationResult {
    let distance_km = request.distance_km;
    let factor_baseline = request.factor_baseline;

    if !request.factors.contains(&request.mode) {
        debug!("Mode '{}' not in factor table, using factor 0", request.mode);
    }

    let baseline_co2_kg = distance_km * factor_baseline;
    let mode_factor = request.factors.factor_for(&request.mode);
    let mode_co2_kg = distance_km * mode_factor;
    let saved_co2_kg = (baseline_co2_kg - mode_co2_kg).max(0.0);
    let reduction_pct = if baseline_co2_kg > 0.0 {
        saved_co2_kg / baseline_co2_kg * 100.0
    } else {
        0.0
    };

    let baseline_rounded = round_kg(baseline_co2_kg);
    let mode_rounded = round_kg(mode_co2_kg);
    let saved_rounded = round_kg(saved_co2_kg);
    let pct_rounded = reduction_pct.round() as u8;

    let calculation_steps = vec![
        format!("baseline_co2_kg = {distance_km} * {factor_baseline} = {baseline_rounded:.2}"),
        format!("mode_co2_kg = {distance_km} * {mode_factor} = {mode_rounded:.2}"),
        format!("saved_co2_kg = {baseline_rounded:.2} - {mode_rounded:.2} = {saved_rounded:.2}"),
        format!("reduction_pct = ({saved_rounded:.2} / {baseline_rounded:.2}) * 100 = {pct_rounded}%"),
    ];

    CalculationResult {
        baseline_co2_kg: baseline_rounded,
        mode_co2_kg: mode_rounded,
        saved_co2_kg: saved_rounded,
        reduction_pct: pct_rounded,
        calculation_steps,
    }
}

fn round_kg(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FactorTable, DEFAULT_BASELINE_FACTOR};

    fn request(mode: &str, distance_km: f64) -> CalculationRequest {
        CalculationRequest {
            user_id: "maria".into(),
            category: "transporte".into(),
            mode: mode.into(),
            distance_km,
            factor_baseline: DEFAULT_BASELINE_FACTOR,
            factors: FactorTable::default(),
        }
    }

    #[test]
    fn test_bicicleta_saves_full_baseline() {
        let result = calculate(&request("bicicleta", 10.0));
        assert_eq!(result.baseline_co2_kg, 2.10);
        assert_eq!(result.mode_co2_kg, 0.00);
        assert_eq!(result.saved_co2_kg, 2.10);
        assert_eq!(result.reduction_pct, 100);
    }

    #[test]
    fn test_bus_partial_savings() {
        let result = calculate(&request("bus", 10.0));
        assert_eq!(result.baseline_co2_kg, 2.10);
        assert_eq!(result.mode_co2_kg, 0.50);
        assert_eq!(result.saved_co2_kg, 1.60);
        assert_eq!(result.reduction_pct, 76);
    }

    #[test]
    fn test_auto_saves_nothing() {
        let result = calculate(&request("auto", 5.0));
        assert_eq!(result.saved_co2_kg, 0.00);
        assert_eq!(result.reduction_pct, 0);
    }

    #[test]
    fn test_unknown_mode_behaves_like_zero_emission() {
        let unknown = calculate(&request("teleferico", 10.0));
        let bicicleta = calculate(&request("bicicleta", 10.0));
        assert_eq!(unknown.baseline_co2_kg, bicicleta.baseline_co2_kg);
        assert_eq!(unknown.mode_co2_kg, bicicleta.mode_co2_kg);
        assert_eq!(unknown.saved_co2_kg, bicicleta.saved_co2_kg);
        assert_eq!(unknown.reduction_pct, bicicleta.reduction_pct);
    }

    #[test]
    fn test_deterministic() {
        let req = request("bus", 7.3);
        assert_eq!(calculate(&req), calculate(&req));
    }

    #[test]
    fn test_savings_never_negative() {
        // A mode dirtier than the baseline floors at zero savings.
        let mut req = request("auto", 12.0);
        req.factor_baseline = 0.05;
        let result = calculate(&req);
        assert_eq!(result.saved_co2_kg, 0.0);
        assert_eq!(result.reduction_pct, 0);
    }

    #[test]
    fn test_reduction_pct_bounds() {
        for mode in ["auto", "moto", "bus", "tren", "bicicleta", "caminata"] {
            for distance in [0.0, 0.5, 1.0, 10.0, 100.0] {
                let result = calculate(&request(mode, distance));
                assert!(result.saved_co2_kg >= 0.0);
                assert!(result.reduction_pct <= 100);
            }
        }
    }

    #[test]
    fn test_zero_baseline_yields_zero_pct() {
        let mut req = request("bus", 10.0);
        req.factor_baseline = 0.0;
        let result = calculate(&req);
        assert_eq!(result.baseline_co2_kg, 0.0);
        assert_eq!(result.reduction_pct, 0);
    }

    #[test]
    fn test_steps_render_in_fixed_order() {
        let result = calculate(&request("bus", 10.0));
        assert_eq!(result.calculation_steps.len(), 4);
        assert_eq!(
            result.calculation_steps[0],
            "baseline_co2_kg = 10 * 0.21 = 2.10"
        );
        assert_eq!(result.calculation_steps[1], "mode_co2_kg = 10 * 0.05 = 0.50");
        assert_eq!(
            result.calculation_steps[2],
            "saved_co2_kg = 2.10 - 0.50 = 1.60"
        );
        assert_eq!(
            result.calculation_steps[3],
            "reduction_pct = (1.60 / 2.10) * 100 = 76%"
        );
    }

    #[test]
    fn test_intermediates_not_compounded() {
        // 3 * 0.21 = 0.63, 3 * 0.04 = 0.12; pct computed from the raw
        // values, 0.51 / 0.63 = 80.95..., rounds to 81.
        let result = calculate(&request("tren", 3.0));
        assert_eq!(result.saved_co2_kg, 0.51);
        assert_eq!(result.reduction_pct, 81);
    }
}
