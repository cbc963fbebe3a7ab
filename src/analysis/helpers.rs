use std::sync::LazyLock;

use chrono::{DateTime, Duration, Utc};
use regex::Regex;
use uuid::Uuid;

use crate::models::{CareArea, Category, HealthEvent};

use super::types::WeightReading;

const SECONDS_PER_DAY: i64 = 86_400;

/// Namespace for alert ids, so the same condition always gets the same id.
const ALERT_NAMESPACE: Uuid = Uuid::from_bytes([
    0x6b, 0x1f, 0x2a, 0x90, 0x3c, 0x55, 0x4e, 0x0d, 0x9a, 0x41, 0x7e, 0x12, 0xc8, 0x03, 0xb7, 0x5e,
]);

/// Whole days elapsed from `earlier` to `now`, floored. Negative for future
/// timestamps.
pub fn days_between(earlier: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - earlier).num_seconds().div_euclid(SECONDS_PER_DAY)
}

/// Events of one category, most recent first.
pub fn of_category(events: &[HealthEvent], category: Category) -> Vec<&HealthEvent> {
    let mut matching: Vec<&HealthEvent> =
        events.iter().filter(|e| e.category == category).collect();
    matching.sort_by(|a, b| b.occurred_at.cmp(&a.occurred_at));
    matching
}

pub fn most_recent(events: &[HealthEvent], category: Category) -> Option<&HealthEvent> {
    events
        .iter()
        .filter(|e| e.category == category)
        .max_by_key(|e| e.occurred_at)
}

pub fn most_recent_any(events: &[HealthEvent]) -> Option<&HealthEvent> {
    events.iter().max_by_key(|e| e.occurred_at)
}

/// True when `at` is at or after `now - days`. A cutoff earlier than the
/// representable range admits everything.
pub fn within_window(at: DateTime<Utc>, now: DateTime<Utc>, days: i64) -> bool {
    now.checked_sub_signed(Duration::days(days))
        .map_or(true, |cutoff| at >= cutoff)
}

/// Number of events at or after `now - days`.
pub fn count_within(events: &[HealthEvent], now: DateTime<Utc>, days: i64) -> usize {
    events
        .iter()
        .filter(|e| within_window(e.occurred_at, now, days))
        .count()
}

pub fn days_since_last(
    events: &[HealthEvent],
    category: Category,
    now: DateTime<Utc>,
) -> Option<i64> {
    most_recent(events, category).map(|e| days_between(e.occurred_at, now))
}

pub fn alert_id(area: CareArea, condition: &str) -> Uuid {
    Uuid::new_v5(&ALERT_NAMESPACE, format!("{}:{}", area.as_str(), condition).as_bytes())
}

/// Regex for weight readings (compiled once via LazyLock).
static RE_WEIGHT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*(kg|lbs?|pounds?)\b").expect("weight regex is valid")
});

/// Parse "12.5 kg", "30lbs", "22 pounds" out of free text.
/// Handles the first match only.
pub fn parse_weight(text: &str) -> Option<(f64, String)> {
    let caps = RE_WEIGHT.captures(text)?;
    let value = caps.get(1)?.as_str().parse::<f64>().ok()?;
    let unit = match caps.get(2)?.as_str().to_lowercase().as_str() {
        "kg" => "kg",
        _ => "lb",
    };
    Some((value, unit.to_string()))
}

/// Latest weight check whose description carries a readable weight.
pub fn latest_weight_reading(events: &[HealthEvent]) -> Option<WeightReading> {
    of_category(events, Category::WeightCheck)
        .into_iter()
        .find_map(|e| {
            parse_weight(&e.description).map(|(value, unit)| WeightReading {
                value,
                unit,
                recorded_at: e.occurred_at,
            })
        })
}
