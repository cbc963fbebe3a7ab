//! Risk & trend classifier. Every label here comes from counting records in a
//! window or measuring days since the last one; no numeric values inside the
//! events are inspected.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::models::{CareArea, Category, HealthEvent, PetProfile, Priority};

use super::helpers::{count_within, days_between, most_recent_any, of_category, within_window};
use super::profile::{analyze_breed, analyze_life_stage};
use super::reference::BreedReference;
use super::rules::{
    RecurringSchedule, ACTIVITY_WINDOW_DAYS, DENTAL_SCHEDULE, TREND_MIN_EVENTS, TREND_WINDOW_DAYS,
    VACCINATION_SCHEDULE,
};
use super::types::{CategoryStatus, Classification, OverallTrend, Trend};

pub fn classify(
    events: &[HealthEvent],
    pet: &PetProfile,
    reference: &BreedReference,
    now: DateTime<Utc>,
) -> Classification {
    let statuses: BTreeMap<CareArea, CategoryStatus> = [
        recurring_status(
            CareArea::Vaccination,
            events,
            Category::Vaccination,
            &VACCINATION_SCHEDULE,
            vaccination_trend,
            now,
        ),
        recurring_status(
            CareArea::Dental,
            events,
            Category::DentalCleaning,
            &DENTAL_SCHEDULE,
            dental_trend,
            now,
        ),
        activity_status(events, now),
        counted_status(CareArea::Weight, events, Category::WeightCheck, weight_trend, now),
        counted_status(CareArea::Checkup, events, Category::Checkup, checkup_trend, now),
    ]
    .into_iter()
    .map(|s| (s.area, s))
    .collect();

    Classification {
        statuses,
        overall_trend: overall_trend(events, now),
        life_stage: analyze_life_stage(pet),
        breed: analyze_breed(pet, events, reference),
    }
}

// ---------------------------------------------------------------------------
// Trend buckets
// ---------------------------------------------------------------------------

pub fn vaccination_trend(count: usize) -> Trend {
    match count {
        0 => Trend::NoData,
        1 => Trend::NeedsImprovement,
        2 => Trend::Good,
        _ => Trend::Excellent,
    }
}

/// Counts weight-check records only. Recorded weights are not compared.
pub fn weight_trend(count: usize) -> Trend {
    match count {
        0 => Trend::NoData,
        1 => Trend::InsufficientData,
        2..=4 => Trend::Adequate,
        _ => Trend::WellMonitored,
    }
}

pub fn dental_trend(count: usize) -> Trend {
    match count {
        0 => Trend::NoData,
        1 => Trend::NeedsAttention,
        _ => Trend::WellMaintained,
    }
}

pub fn checkup_trend(count: usize) -> Trend {
    dental_trend(count)
}

/// Bucket on events of any category inside the activity window.
pub fn activity_trend(recent_count: usize) -> Trend {
    match recent_count {
        0 => Trend::LowActivity,
        1..=2 => Trend::Moderate,
        3..=4 => Trend::Active,
        _ => Trend::VeryActive,
    }
}

/// Recent (inside the trend window) versus older event volume.
pub fn overall_trend(events: &[HealthEvent], now: DateTime<Utc>) -> OverallTrend {
    if events.len() < TREND_MIN_EVENTS {
        return OverallTrend::InsufficientData;
    }
    let recent = events
        .iter()
        .filter(|e| within_window(e.occurred_at, now, TREND_WINDOW_DAYS))
        .count();
    let older = events.len() - recent;

    match recent.cmp(&older) {
        std::cmp::Ordering::Greater => OverallTrend::Improving,
        std::cmp::Ordering::Less => OverallTrend::Declining,
        std::cmp::Ordering::Equal => OverallTrend::Stable,
    }
}

// ---------------------------------------------------------------------------
// Status builders
// ---------------------------------------------------------------------------

fn never_recorded(count: usize) -> Option<Priority> {
    (count == 0).then_some(Priority::High)
}

fn recurring_status(
    area: CareArea,
    events: &[HealthEvent],
    category: Category,
    schedule: &RecurringSchedule,
    trend_of: fn(usize) -> Trend,
    now: DateTime<Utc>,
) -> CategoryStatus {
    let matching = of_category(events, category);
    let days_since_last = matching.first().map(|e| days_between(e.occurred_at, now));
    let compliance = schedule.compliance(days_since_last);

    CategoryStatus {
        area,
        label: compliance.as_str().to_string(),
        trend: trend_of(matching.len()),
        compliance: Some(compliance),
        risk_level: never_recorded(matching.len()),
        count: matching.len(),
        days_since_last,
    }
}

fn counted_status(
    area: CareArea,
    events: &[HealthEvent],
    category: Category,
    trend_of: fn(usize) -> Trend,
    now: DateTime<Utc>,
) -> CategoryStatus {
    let matching = of_category(events, category);
    let trend = trend_of(matching.len());

    CategoryStatus {
        area,
        label: trend.as_str().to_string(),
        trend,
        compliance: None,
        risk_level: never_recorded(matching.len()),
        count: matching.len(),
        days_since_last: matching.first().map(|e| days_between(e.occurred_at, now)),
    }
}

fn activity_status(events: &[HealthEvent], now: DateTime<Utc>) -> CategoryStatus {
    let recent = count_within(events, now, ACTIVITY_WINDOW_DAYS);
    let trend = activity_trend(recent);

    CategoryStatus {
        area: CareArea::Activity,
        label: trend.as_str().to_string(),
        trend,
        compliance: None,
        risk_level: None,
        count: recent,
        days_since_last: most_recent_any(events).map(|e| days_between(e.occurred_at, now)),
    }
}
