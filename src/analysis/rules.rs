//! The one constants table every scoring, classification and projection
//! function reads from. Thresholds are fixed; nothing here is user-configurable.

use crate::models::Category;

use super::types::Compliance;

/// Points subtracted from 100 per area when it fails completely.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    pub vaccination: f64,
    pub weight: f64,
    pub dental: f64,
    pub activity: f64,
    pub checkup: f64,
}

impl ScoreWeights {
    pub fn total(&self) -> f64 {
        self.vaccination + self.weight + self.dental + self.activity + self.checkup
    }
}

pub const WEIGHTS: ScoreWeights = ScoreWeights {
    vaccination: 25.0,
    weight: 20.0,
    dental: 15.0,
    activity: 15.0,
    checkup: 15.0,
};

/// Fraction of an area's weight charged when it is stale or sparse.
pub const PARTIAL_PENALTY: f64 = 0.5;

/// Interval plus grace period for a recurring care category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecurringSchedule {
    pub interval_days: i64,
    pub grace_days: i64,
}

impl RecurringSchedule {
    pub fn overdue_after_days(&self) -> i64 {
        self.interval_days + self.grace_days
    }

    /// Three-way bucket on days since the most recent qualifying event.
    /// Both bounds are inclusive on the lower bucket.
    pub fn compliance(&self, days_since_last: Option<i64>) -> Compliance {
        match days_since_last {
            None => Compliance::NoRecords,
            Some(days) if days <= self.interval_days => Compliance::UpToDate,
            Some(days) if days <= self.overdue_after_days() => Compliance::DueSoon,
            Some(_) => Compliance::Overdue,
        }
    }
}

pub const VACCINATION_SCHEDULE: RecurringSchedule = RecurringSchedule {
    interval_days: 365,
    grace_days: 35,
};

pub const DENTAL_SCHEDULE: RecurringSchedule = RecurringSchedule {
    interval_days: 180,
    grace_days: 185,
};

pub const WEIGHT_CHECK_INTERVAL_DAYS: i64 = 60;

/// Window for the activity (recency) area.
pub const ACTIVITY_WINDOW_DAYS: i64 = 30;
/// Fewer recent events than this is sparse.
pub const ACTIVITY_MIN_RECENT: usize = 2;
/// Fewer weight checks than this is sparse.
pub const WEIGHT_MIN_RECORDS: usize = 3;

/// Split point between "recent" and "older" for the overall trend.
pub const TREND_WINDOW_DAYS: i64 = 90;
/// Minimum history size before an overall trend is reported.
pub const TREND_MIN_EVENTS: usize = 3;
/// Window for the vet-visit frequency insight.
pub const VISIT_WINDOW_DAYS: i64 = 90;

/// A checkup older than this earns a low-priority reminder.
pub const CHECKUP_REFRESH_DAYS: i64 = 180;

pub const LOOKAHEAD_DAYS: i64 = 30;
pub const UPCOMING_LIMIT: usize = 3;

/// Below this score the generic comprehensive-checkup recommendation is emitted.
pub const FALLBACK_RECOMMENDATION_BELOW: u8 = 70;
/// Below this score a general attention alert is raised.
pub const ATTENTION_ALERT_BELOW: u8 = 60;

pub const PUPPY_MAX_AGE_YEARS: f64 = 1.0;
pub const ADULT_MAX_AGE_YEARS: f64 = 7.0;

/// Recurring interval used to project the next due date.
pub fn interval_days(category: Category) -> Option<i64> {
    match category {
        Category::Vaccination => Some(VACCINATION_SCHEDULE.interval_days),
        Category::DentalCleaning => Some(DENTAL_SCHEDULE.interval_days),
        Category::WeightCheck => Some(WEIGHT_CHECK_INTERVAL_DAYS),
        Category::Checkup | Category::Surgery | Category::Medication | Category::Other => None,
    }
}
