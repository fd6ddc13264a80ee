use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Baseline emission factor in kg CO₂ per km: an average automobile.
pub const DEFAULT_BASELINE_FACTOR: f64 = 0.21;

/// Quick-pick distances offered by the trip entry form, in km.
pub const DISTANCE_PRESETS_KM: [f64; 4] = [1.0, 5.0, 10.0, 20.0];

/// Emission factors per transport mode, in kg CO₂ per km.
///
/// Keys are opaque mode identifiers (`auto`, `bus`, ...). A mode missing
/// from the table counts as zero-emission, same as `bicicleta`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FactorTable(BTreeMap<String, f64>);

impl FactorTable {
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    /// Set or replace the factor for a mode.
    pub fn set(&mut self, mode: impl Into<String>, factor: f64) -> &mut Self {
        self.0.insert(mode.into(), factor);
        self
    }

    /// Factor for a mode; unknown modes fall back to 0.0.
    pub fn factor_for(&self, mode: &str) -> f64 {
        self.0.get(mode).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, mode: &str) -> bool {
        self.0.contains_key(mode)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for FactorTable {
    /// The reference table shipped with the app (averages for Argentina).
    fn default() -> Self {
        let mut table = Self::empty();
        table
            .set("auto", 0.21)
            .set("moto", 0.10)
            .set("bus", 0.05)
            .set("tren", 0.04)
            .set("bicicleta", 0.0)
            .set("caminata", 0.0);
        table
    }
}

impl FromIterator<(String, f64)> for FactorTable {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Display metadata for a built-in transport mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportMode {
    pub key: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

/// The built-in mode catalogue, in menu order.
pub const TRANSPORT_MODES: [TransportMode; 6] = [
    TransportMode { key: "auto", label: "Auto", icon: "🚗" },
    TransportMode { key: "moto", label: "Moto", icon: "🏍️" },
    TransportMode { key: "bus", label: "Bus", icon: "🚌" },
    TransportMode { key: "tren", label: "Tren", icon: "🚊" },
    TransportMode { key: "bicicleta", label: "Bicicleta", icon: "🚲" },
    TransportMode { key: "caminata", label: "Caminata", icon: "🚶" },
];
