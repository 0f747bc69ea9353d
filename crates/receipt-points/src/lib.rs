//! Receipt intake and reward points scoring.
//!
//! The library owns the domain model, the rule engine, and the storage and
//! HTTP seams; the `services/api` binary wires them into a runnable service.

pub mod config;
pub mod error;
pub mod receipts;
pub mod telemetry;
