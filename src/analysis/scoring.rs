//! Scoring engine: reduces a care history to a bounded 0-100 score.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{CareArea, Category, HealthEvent, PetProfile};

use super::helpers::{count_within, days_since_last};
use super::rules::{
    RecurringSchedule, ScoreWeights, ACTIVITY_MIN_RECENT, ACTIVITY_WINDOW_DAYS, DENTAL_SCHEDULE,
    PARTIAL_PENALTY, VACCINATION_SCHEDULE, WEIGHTS, WEIGHT_MIN_RECORDS,
};
use super::types::{Compliance, Longevity};

/// Per-area penalties behind a score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub penalties: Vec<(CareArea, f64)>,
    pub score: u8,
}

impl ScoreBreakdown {
    pub fn penalty(&self, area: CareArea) -> f64 {
        self.penalties
            .iter()
            .find(|(a, _)| *a == area)
            .map(|(_, p)| *p)
            .unwrap_or(0.0)
    }
}

/// Health score for the history as of `now`.
///
/// Pet attributes do not shift category weights; the parameter keeps the
/// signature aligned with the rest of the analysis functions.
pub fn compute_score(events: &[HealthEvent], _pet: &PetProfile, now: DateTime<Utc>) -> u8 {
    score_breakdown(events, now).score
}

pub fn score_breakdown(events: &[HealthEvent], now: DateTime<Utc>) -> ScoreBreakdown {
    let w: &ScoreWeights = &WEIGHTS;

    let weight_count = events.iter().filter(|e| e.category == Category::WeightCheck).count();
    let checkup_count = events.iter().filter(|e| e.category == Category::Checkup).count();
    let recent_count = count_within(events, now, ACTIVITY_WINDOW_DAYS);

    let penalties = vec![
        (
            CareArea::Vaccination,
            recurring_penalty(
                w.vaccination,
                &VACCINATION_SCHEDULE,
                days_since_last(events, Category::Vaccination, now),
            ),
        ),
        (
            CareArea::Dental,
            recurring_penalty(
                w.dental,
                &DENTAL_SCHEDULE,
                days_since_last(events, Category::DentalCleaning, now),
            ),
        ),
        (
            CareArea::Activity,
            count_penalty(w.activity, recent_count, ACTIVITY_MIN_RECENT),
        ),
        (
            CareArea::Weight,
            count_penalty(w.weight, weight_count, WEIGHT_MIN_RECORDS),
        ),
        (CareArea::Checkup, count_penalty(w.checkup, checkup_count, 1)),
    ];

    let total: f64 = penalties.iter().map(|(_, p)| p).sum();
    ScoreBreakdown {
        penalties,
        score: clamp_score(100.0 - total),
    }
}

/// Full weight when missing or past the grace period, partial when only
/// past the interval.
fn recurring_penalty(weight: f64, schedule: &RecurringSchedule, days: Option<i64>) -> f64 {
    match schedule.compliance(days) {
        Compliance::UpToDate => 0.0,
        Compliance::DueSoon => weight * PARTIAL_PENALTY,
        Compliance::Overdue | Compliance::NoRecords => weight,
    }
}

/// Full weight when nothing is recorded, partial when fewer than `min`.
fn count_penalty(weight: f64, count: usize, min: usize) -> f64 {
    if count == 0 {
        weight
    } else if count < min {
        weight * PARTIAL_PENALTY
    } else {
        0.0
    }
}

/// Round half up and clamp into [0, 100].
fn clamp_score(raw: f64) -> u8 {
    raw.round().clamp(0.0, 100.0) as u8
}

/// Preventive-care volume score: checkups 10, weight checks 5, vaccinations
/// 15 points each, capped at 100.
pub fn wellness_score(events: &[HealthEvent]) -> u8 {
    let points: usize = events
        .iter()
        .map(|e| match e.category {
            Category::Checkup => 10,
            Category::WeightCheck => 5,
            Category::Vaccination => 15,
            Category::DentalCleaning
            | Category::Surgery
            | Category::Medication
            | Category::Other => 0,
        })
        .sum();
    points.min(100) as u8
}

pub fn longevity(score: u8, wellness: u8) -> Longevity {
    let average = (f64::from(score) + f64::from(wellness)) / 2.0;
    if average >= 90.0 {
        Longevity::Excellent
    } else if average >= 75.0 {
        Longevity::Good
    } else if average >= 60.0 {
        Longevity::Fair
    } else {
        Longevity::BelowAverage
    }
}
