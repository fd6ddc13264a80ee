//! Fluent Rust SDK for calculating and recording carbon savings.
//!
//! # Example
//! ```
//! use huella_sdk::{Ledger, TripSession};
//!
//! let ledger = Ledger::in_memory();
//! let mut session = TripSession::begin("maria");
//! session.mode("bicicleta").distance_km(10.0);
//! let record = session.commit_to(&ledger).unwrap();
//! println!("Saved {} kg CO2 ({}%)", record.saved_co2_kg, record.reduction_pct);
//! ```

mod latency;
mod trip;

pub use latency::DelayedCalculator;
pub use trip::{TripError, TripSession};

// Re-export core types that SDK users may need
pub use huella_core::ledger::{JsonStore, Ledger, MemoryStore, RECENT_ACTIONS_LIMIT};
pub use huella_core::model::{
    ActionId, ActionRecord, CalculationRequest, CalculationResult, FactorTable,
    DEFAULT_BASELINE_FACTOR,
};
