use chrono::{Datelike, NaiveDate, NaiveTime};

use super::config::ScoringConfig;
use super::{RuleKind, ScoreComponent};
use crate::receipts::domain::Receipt;

pub(crate) fn score_receipt(
    receipt: &Receipt,
    config: &ScoringConfig,
) -> (Vec<ScoreComponent>, u64) {
    let mut components = Vec::new();
    let mut total_points: u64 = 0;

    let alphanumeric = receipt
        .retailer
        .chars()
        .filter(|c| c.is_alphanumeric())
        .count() as u64;
    if alphanumeric > 0 {
        components.push(ScoreComponent {
            rule: RuleKind::RetailerName,
            points: alphanumeric,
            notes: format!("{alphanumeric} alphanumeric character(s) in retailer name"),
        });
        total_points += alphanumeric;
    }

    if let Some(cents) = fractional_cents(&receipt.total) {
        if cents == 0 {
            components.push(ScoreComponent {
                rule: RuleKind::RoundDollarTotal,
                points: config.round_dollar_points,
                notes: format!("total {} is a round dollar amount", receipt.total),
            });
            total_points += config.round_dollar_points;
        }
        if cents % 25 == 0 {
            components.push(ScoreComponent {
                rule: RuleKind::QuarterMultipleTotal,
                points: config.quarter_multiple_points,
                notes: format!("total {} is a multiple of 0.25", receipt.total),
            });
            total_points += config.quarter_multiple_points;
        }
    }

    let pairs = (receipt.items.len() / 2) as u64;
    if pairs > 0 {
        let points = pairs * config.item_pair_points;
        components.push(ScoreComponent {
            rule: RuleKind::ItemPairs,
            points,
            notes: format!("{pairs} pair(s) among {} item(s)", receipt.items.len()),
        });
        total_points += points;
    }

    if let Ok(date) = NaiveDate::parse_from_str(&receipt.purchase_date, "%Y-%m-%d") {
        if date.day() % 2 == 1 {
            components.push(ScoreComponent {
                rule: RuleKind::OddPurchaseDay,
                points: config.odd_day_points,
                notes: format!("day {} of the purchase date is odd", date.day()),
            });
            total_points += config.odd_day_points;
        }
    }

    if let Ok(time) = NaiveTime::parse_from_str(&receipt.purchase_time, "%H:%M") {
        if time > config.afternoon_start && time < config.afternoon_end {
            components.push(ScoreComponent {
                rule: RuleKind::AfternoonPurchase,
                points: config.afternoon_points,
                notes: format!(
                    "purchase time {} falls inside the {}-{} window",
                    receipt.purchase_time,
                    config.afternoon_start.format("%H:%M"),
                    config.afternoon_end.format("%H:%M"),
                ),
            });
            total_points += config.afternoon_points;
        }
    }

    for item in &receipt.items {
        let trimmed = item.short_description.trim_matches(' ');
        if trimmed.chars().count() % 3 != 0 {
            continue;
        }
        let points = (config.description_price_multiplier * item.price).ceil();
        if points > 0.0 {
            let points = points as u64;
            components.push(ScoreComponent {
                rule: RuleKind::DescriptionLength,
                points,
                notes: format!(
                    "trimmed description '{trimmed}' has a length divisible by 3"
                ),
            });
            total_points += points;
        }
    }

    (components, total_points)
}

/// Split a currency string on the decimal point and parse the fractional
/// part. Anything that does not split into exactly two pieces, or whose
/// fractional piece is not a non-negative integer, is treated as malformed.
fn fractional_cents(total: &str) -> Option<u64> {
    let parts: Vec<&str> = total.split('.').collect();
    if parts.len() != 2 {
        return None;
    }
    parts[1].parse::<u64>().ok()
}
