//! Receipt intake, storage, and reward points scoring.
//!
//! A submitted receipt is stored verbatim under a generated identifier and
//! never mutated afterwards. Scoring runs the six-rule rubric over the stored
//! record on demand; malformed totals, dates, and times were accepted at
//! intake and simply earn nothing from the rules that would read them.

pub mod domain;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{Item, Receipt, ReceiptId};
pub use repository::{ReceiptRecord, ReceiptRepository, RepositoryError};
pub use router::receipt_router;
pub use scoring::{PointsOutcome, RuleKind, ScoreComponent, ScoringConfig, ScoringEngine};
pub use service::{ReceiptService, ReceiptServiceError};
