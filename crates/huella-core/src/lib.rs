//! Core data model, emissions engine, and action ledger for Huella.
//!
//! The calculator in [`calc`] is a pure function over a [`model::CalculationRequest`];
//! the ledger in [`ledger`] is an append-only log of accepted actions behind a
//! pluggable [`ledger::ActionStore`].

pub mod calc;
pub mod config;
pub mod error;
pub mod ledger;
pub mod model;
