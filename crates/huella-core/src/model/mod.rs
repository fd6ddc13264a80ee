pub mod action;
pub mod factors;
pub mod trip;

pub use action::{ActionId, ActionRecord};
pub use factors::{
    FactorTable, TransportMode, DEFAULT_BASELINE_FACTOR, DISTANCE_PRESETS_KM, TRANSPORT_MODES,
};
pub use trip::{CalculationRequest, CalculationResult};
