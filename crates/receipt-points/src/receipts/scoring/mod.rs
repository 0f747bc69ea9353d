mod config;
mod rules;

pub use config::ScoringConfig;

use serde::{Deserialize, Serialize};

use super::domain::ReceiptId;
use super::repository::ReceiptRecord;

/// Stateless engine applying the configured rule weights to a stored receipt.
///
/// The rules share no state and have no side effects, so evaluation order is
/// irrelevant and repeated scoring of the same record returns the same total.
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn score(&self, record: &ReceiptRecord) -> PointsOutcome {
        let (components, total_points) = rules::score_receipt(&record.receipt, &self.config);

        PointsOutcome {
            receipt_id: record.id.clone(),
            total_points,
            components,
        }
    }
}

/// Discrete contribution from a single rule, allowing transparent audits.
///
/// Rules that award nothing are omitted, so the recorded points are always
/// positive and sum to the outcome total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub rule: RuleKind,
    pub points: u64,
    pub notes: String,
}

/// Rules making up the points rubric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    RetailerName,
    RoundDollarTotal,
    QuarterMultipleTotal,
    ItemPairs,
    OddPurchaseDay,
    AfternoonPurchase,
    DescriptionLength,
}

impl RuleKind {
    pub const fn label(self) -> &'static str {
        match self {
            RuleKind::RetailerName => "retailer_name",
            RuleKind::RoundDollarTotal => "round_dollar_total",
            RuleKind::QuarterMultipleTotal => "quarter_multiple_total",
            RuleKind::ItemPairs => "item_pairs",
            RuleKind::OddPurchaseDay => "odd_purchase_day",
            RuleKind::AfternoonPurchase => "afternoon_purchase",
            RuleKind::DescriptionLength => "description_length",
        }
    }
}

/// Scoring output describing the composite total and per-rule trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointsOutcome {
    pub receipt_id: ReceiptId,
    pub total_points: u64,
    pub components: Vec<ScoreComponent>,
}
