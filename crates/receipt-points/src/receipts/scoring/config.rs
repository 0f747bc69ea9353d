use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Rule weights and boundaries for the points rubric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub round_dollar_points: u64,
    pub quarter_multiple_points: u64,
    pub item_pair_points: u64,
    pub odd_day_points: u64,
    pub afternoon_points: u64,
    /// Window boundaries are exclusive on both ends.
    pub afternoon_start: NaiveTime,
    pub afternoon_end: NaiveTime,
    pub description_price_multiplier: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            round_dollar_points: 50,
            quarter_multiple_points: 25,
            item_pair_points: 5,
            odd_day_points: 6,
            afternoon_points: 10,
            afternoon_start: NaiveTime::from_hms_opt(14, 0, 0).expect("valid window start"),
            afternoon_end: NaiveTime::from_hms_opt(16, 0, 0).expect("valid window end"),
            description_price_multiplier: 0.2,
        }
    }
}
