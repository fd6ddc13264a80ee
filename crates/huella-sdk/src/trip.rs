use thiserror::Error;

use huella_core::calc;
use huella_core::error::CoreError;
use huella_core::ledger::Ledger;
use huella_core::model::{
    ActionRecord, CalculationRequest, CalculationResult, FactorTable, DEFAULT_BASELINE_FACTOR,
};

#[derive(Error, Debug)]
pub enum TripError {
    #[error("No transport mode selected")]
    MissingMode,

    #[error("Distance must be positive, got {0} km")]
    InvalidDistance(f64),

    #[error(transparent)]
    Core(#[from] CoreError),
}

/// A fluent builder for describing a trip, calculating its savings, and
/// recording it in a ledger.
///
/// The builder owns the caller-side preconditions: a mode must be chosen
/// and the distance must be positive before anything is calculated.
pub struct TripSession {
    user_id: String,
    category: String,
    mode: Option<String>,
    distance_km: f64,
    factor_baseline: f64,
    factors: FactorTable,
}

impl TripSession {
    /// Begin a new session for a given user.
    pub fn begin(user_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            category: "transporte".to_string(),
            mode: None,
            distance_km: 0.0,
            factor_baseline: DEFAULT_BASELINE_FACTOR,
            factors: FactorTable::default(),
        }
    }

    /// Set the category label (informational only).
    pub fn category(&mut self, category: &str) -> &mut Self {
        self.category = category.to_string();
        self
    }

    /// Choose the transport mode.
    pub fn mode(&mut self, mode: &str) -> &mut Self {
        self.mode = Some(mode.to_string());
        self
    }

    /// Set the distance travelled, in kilometers.
    pub fn distance_km(&mut self, distance_km: f64) -> &mut Self {
        self.distance_km = distance_km;
        self
    }

    /// Override the baseline emission factor.
    pub fn factor_baseline(&mut self, factor: f64) -> &mut Self {
        self.factor_baseline = factor;
        self
    }

    /// Replace the emission factor table.
    pub fn factors(&mut self, factors: FactorTable) -> &mut Self {
        self.factors = factors;
        self
    }

    /// Validate the preconditions and build the request.
    pub fn build(&self) -> Result<CalculationRequest, TripError> {
        let mode = match &self.mode {
            Some(mode) if !mode.trim().is_empty() => mode.clone(),
            _ => return Err(TripError::MissingMode),
        };
        if self.distance_km <= 0.0 {
            return Err(TripError::InvalidDistance(self.distance_km));
        }
        Ok(CalculationRequest {
            user_id: self.user_id.clone(),
            category: self.category.clone(),
            mode,
            distance_km: self.distance_km,
            factor_baseline: self.factor_baseline,
            factors: self.factors.clone(),
        })
    }

    /// Calculate the savings without recording anything.
    pub fn calculate(&self) -> Result<CalculationResult, TripError> {
        Ok(calc::calculate(&self.build()?))
    }

    /// Calculate and append the action to the given ledger.
    ///
    /// Returns the stored record.
    pub fn commit_to(self, ledger: &Ledger) -> Result<ActionRecord, TripError> {
        let request = self.build()?;
        let result = calc::calculate(&request);
        Ok(ledger.save_action(&request, &result)?)
    }
}
