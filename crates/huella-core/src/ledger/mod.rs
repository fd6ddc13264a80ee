//! Append-only log of accepted actions.
//!
//! Storage is injected through [`ActionStore`]: [`MemoryStore`] for tests
//! and embedded use, [`JsonStore`] for a file-backed log.

pub mod json_store;
pub mod memory;

pub use json_store::JsonStore;
pub use memory::MemoryStore;

use std::path::Path;

use chrono::Utc;

use crate::error::CoreError;
use crate::model::{ActionId, ActionRecord, CalculationRequest, CalculationResult};

/// How many records `recent_actions` returns at most.
pub const RECENT_ACTIONS_LIMIT: usize = 10;

/// Options for listing actions.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub limit: Option<usize>,
    pub user_filter: Option<String>,
    pub mode_filter: Option<String>,
}

/// Backing storage for the ledger. Implementations must serialize appends
/// so insertion order is consistent under concurrent writers.
pub trait ActionStore: Send + Sync {
    /// Append a record to the end of the log.
    fn append(&self, record: &ActionRecord) -> Result<(), CoreError>;

    /// All records, most recent first.
    fn list_all(&self) -> Result<Vec<ActionRecord>, CoreError>;
}

/// The action ledger. Append-only; no update or delete exists.
pub struct Ledger {
    store: Box<dyn ActionStore>,
}

impl Ledger {
    /// A ledger over a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::with_store(Box::new(MemoryStore::new()))
    }

    /// A ledger over an existing JSON file (see [`JsonStore::open`]).
    pub fn open_json(path: &Path) -> Result<Self, CoreError> {
        Ok(Self::with_store(Box::new(JsonStore::open(path)?)))
    }

    pub fn with_store(store: Box<dyn ActionStore>) -> Self {
        Self { store }
    }

    /// Record an accepted calculation. The request/result pair must match;
    /// consistency between the two is the caller's responsibility.
    pub fn save_action(
        &self,
        request: &CalculationRequest,
        result: &CalculationResult,
    ) -> Result<ActionRecord, CoreError> {
        let record = ActionRecord {
            id: ActionId::new(),
            user_id: request.user_id.clone(),
            category: request.category.clone(),
            mode: request.mode.clone(),
            distance_km: request.distance_km,
            saved_co2_kg: result.saved_co2_kg,
            reduction_pct: result.reduction_pct,
            created_at: Utc::now(),
        };
        self.store.append(&record)?;
        Ok(record)
    }

    /// The last [`RECENT_ACTIONS_LIMIT`] records, most recent first.
    pub fn recent_actions(&self) -> Result<Vec<ActionRecord>, CoreError> {
        self.list(&ListOptions {
            limit: Some(RECENT_ACTIONS_LIMIT),
            ..Default::default()
        })
    }

    /// List records, most recent first, optionally filtered.
    pub fn list(&self, opts: &ListOptions) -> Result<Vec<ActionRecord>, CoreError> {
        let mut records = self.store.list_all()?;

        if let Some(user) = &opts.user_filter {
            records.retain(|r| r.user_id == *user);
        }
        if let Some(mode) = &opts.mode_filter {
            records.retain(|r| r.mode == *mode);
        }
        if let Some(limit) = opts.limit {
            records.truncate(limit);
        }

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::calculate;
    use crate::model::{FactorTable, DEFAULT_BASELINE_FACTOR};

    fn request(user: &str, mode: &str, distance_km: f64) -> CalculationRequest {
        CalculationRequest {
            user_id: user.into(),
            category: "transporte".into(),
            mode: mode.into(),
            distance_km,
            factor_baseline: DEFAULT_BASELINE_FACTOR,
            factors: FactorTable::default(),
        }
    }

    #[test]
    fn test_save_then_recent_roundtrip() {
        let ledger = Ledger::in_memory();
        let req = request("maria", "bicicleta", 10.0);
        let result = calculate(&req);
        let saved = ledger.save_action(&req, &result).unwrap();

        let recent = ledger.recent_actions().unwrap();
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].id, saved.id);
        assert_eq!(recent[0].user_id, "maria");
        assert_eq!(recent[0].mode, "bicicleta");
        assert_eq!(recent[0].distance_km, 10.0);
        assert_eq!(recent[0].saved_co2_kg, 2.10);
    }

    #[test]
    fn test_recent_is_reverse_insertion_order() {
        let ledger = Ledger::in_memory();
        let mut ids = Vec::new();
        for mode in ["auto", "bus", "tren"] {
            let req = request("maria", mode, 5.0);
            let result = calculate(&req);
            ids.push(ledger.save_action(&req, &result).unwrap().id);
        }

        let recent = ledger.recent_actions().unwrap();
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].id, ids[2]);
        assert_eq!(recent[1].id, ids[1]);
        assert_eq!(recent[2].id, ids[0]);
    }

    #[test]
    fn test_recent_bounded_to_ten() {
        let ledger = Ledger::in_memory();
        let mut ids = Vec::new();
        for i in 0..15 {
            let req = request("maria", "bus", 1.0 + i as f64);
            let result = calculate(&req);
            ids.push(ledger.save_action(&req, &result).unwrap().id);
        }

        let recent = ledger.recent_actions().unwrap();
        assert_eq!(recent.len(), 10);
        // The 10 most recent, newest first.
        for (i, record) in recent.iter().enumerate() {
            assert_eq!(record.id, ids[14 - i]);
        }
    }

    #[test]
    fn test_list_filters() {
        let ledger = Ledger::in_memory();
        for (user, mode) in [("maria", "bus"), ("juan", "bus"), ("maria", "tren")] {
            let req = request(user, mode, 4.0);
            let result = calculate(&req);
            ledger.save_action(&req, &result).unwrap();
        }

        let by_user = ledger
            .list(&ListOptions {
                user_filter: Some("maria".into()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(by_user.len(), 2);

        let by_mode = ledger
            .list(&ListOptions {
                mode_filter: Some("bus".into()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(by_mode.len(), 2);
    }
}
