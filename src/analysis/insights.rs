//! Descriptive extras layered on top of the score: wellness, longevity,
//! milestones, seasonal spread, visit and medication history, forecast, next
//! steps and the owner-facing summary. Nothing here feeds back into scoring or
//! recommendations.

use chrono::{DateTime, Datelike, Utc};

use crate::models::{CareArea, Category, HealthEvent, PetProfile};

use super::helpers::{count_within, latest_weight_reading};
use super::messages::MessageTemplates;
use super::rules::{CHECKUP_REFRESH_DAYS, VISIT_WINDOW_DAYS};
use super::scoring::{longevity, wellness_score};
use super::types::{
    Classification, Compliance, Confidence, Grade, Insights, Longevity, LongevityFactors,
    MedicationHistory, Milestone, Outlook, OverallTrend, Season, SeasonalCounts, Summary,
    VetVisitAnalysis, VisitFrequency, WellnessForecast,
};

const CHAMPION_MIN_EVENTS: usize = 10;
const VACCINATION_PRO_MIN: usize = 3;

pub fn build_insights(
    events: &[HealthEvent],
    pet: &PetProfile,
    classification: &Classification,
    score: u8,
    now: DateTime<Utc>,
) -> Insights {
    let wellness = wellness_score(events);
    Insights {
        summary: summarize(pet, classification, score),
        wellness_score: wellness,
        longevity: longevity(score, wellness),
        milestones: milestones(events),
        seasonal: seasonal_counts(events),
        latest_weight: latest_weight_reading(events),
        vet_visits: vet_visits(events, now),
        medication_history: medication_history(events),
        forecast: forecast(score, classification.overall_trend),
        longevity_factors: longevity_factors(events, score),
        next_steps: next_steps(classification),
    }
}

pub fn milestones(events: &[HealthEvent]) -> Vec<Milestone> {
    let mut out = Vec::new();

    if events.len() >= CHAMPION_MIN_EVENTS {
        out.push(Milestone {
            title: "Health Tracking Champion".to_string(),
            description: format!("Recorded {} health events", events.len()),
        });
    }

    let vaccinations = count_of(events, Category::Vaccination);
    if vaccinations >= VACCINATION_PRO_MIN {
        out.push(Milestone {
            title: "Vaccination Pro".to_string(),
            description: format!("Completed {} vaccinations", vaccinations),
        });
    }

    out
}

fn count_of(events: &[HealthEvent], category: Category) -> usize {
    events.iter().filter(|e| e.category == category).count()
}

/// Meteorological season for a calendar month (1-12).
pub fn season_of(month: u32) -> Season {
    match month {
        3..=5 => Season::Spring,
        6..=8 => Season::Summer,
        9..=11 => Season::Fall,
        _ => Season::Winter,
    }
}

pub fn seasonal_counts(events: &[HealthEvent]) -> SeasonalCounts {
    events
        .iter()
        .fold(SeasonalCounts::default(), |mut acc, e| {
            match season_of(e.occurred_at.month()) {
                Season::Spring => acc.spring += 1,
                Season::Summer => acc.summer += 1,
                Season::Fall => acc.fall += 1,
                Season::Winter => acc.winter += 1,
            }
            acc
        })
}

/// Every record counts as a visit; the frequency looks at the last 90 days.
pub fn vet_visits(events: &[HealthEvent], now: DateTime<Utc>) -> VetVisitAnalysis {
    let recent_visits = count_within(events, now, VISIT_WINDOW_DAYS);
    let (frequency, vet_score) = if recent_visits >= 3 {
        (VisitFrequency::Excellent, 95)
    } else if recent_visits >= 1 {
        (VisitFrequency::Good, 70)
    } else {
        (VisitFrequency::NeedsImprovement, 30)
    };

    VetVisitAnalysis {
        total_visits: events.len(),
        recent_visits,
        frequency,
        vet_score,
        recommendation: (frequency == VisitFrequency::NeedsImprovement)
            .then(|| "Schedule regular vet visits".to_string()),
    }
}

pub fn medication_history(events: &[HealthEvent]) -> MedicationHistory {
    let medication_records = events
        .iter()
        .filter(|e| {
            e.category == Category::Medication
                || e.description.to_lowercase().contains("medication")
        })
        .count();

    let (medication_score, recommendation) = if medication_records > 0 {
        (80, "Continue medication monitoring")
    } else {
        (100, "No medications needed - good health")
    };

    MedicationHistory {
        medication_records,
        surgery_records: count_of(events, Category::Surgery),
        medication_score,
        recommendation: recommendation.to_string(),
    }
}

/// Outlook from the score and the overall record trend.
pub fn forecast(score: u8, trend: OverallTrend) -> WellnessForecast {
    let outlook = if trend == OverallTrend::Improving && score > 80 {
        Outlook::Excellent
    } else if trend == OverallTrend::Declining || score < 60 {
        Outlook::Concerning
    } else if score > 75 {
        Outlook::Good
    } else {
        Outlook::Stable
    };

    WellnessForecast {
        outlook,
        confidence: if score > 75 {
            Confidence::High
        } else {
            Confidence::Medium
        },
    }
}

pub fn longevity_factors(events: &[HealthEvent], score: u8) -> LongevityFactors {
    let vaccinations = count_of(events, Category::Vaccination);
    let weight_checks = count_of(events, Category::WeightCheck);

    let mut positive = Vec::new();
    let mut negative = Vec::new();

    if vaccinations >= 2 {
        positive.push("Good vaccination history".to_string());
    }
    if weight_checks >= 3 {
        positive.push("Regular weight monitoring".to_string());
    }
    if vaccinations == 0 {
        negative.push("No vaccination records".to_string());
    }
    if weight_checks == 0 {
        negative.push("No weight monitoring".to_string());
    }

    let assessment = if score >= 85 && negative.is_empty() {
        Longevity::Excellent
    } else if score >= 70 && negative.len() <= 1 {
        Longevity::Good
    } else if score < 60 {
        Longevity::BelowAverage
    } else {
        Longevity::Fair
    };

    LongevityFactors {
        positive,
        negative,
        assessment,
    }
}

pub fn next_steps(classification: &Classification) -> Vec<String> {
    let mut steps = Vec::new();

    if classification.compliance(CareArea::Vaccination) != Some(Compliance::UpToDate) {
        steps.push("Schedule vaccination appointment");
    }
    if matches!(
        classification.compliance(CareArea::Dental),
        Some(Compliance::Overdue | Compliance::NoRecords)
    ) {
        steps.push("Book dental cleaning appointment");
    }

    let checkup_days = classification
        .status(CareArea::Checkup)
        .and_then(|s| s.days_since_last);
    if checkup_days.map_or(true, |days| days > CHECKUP_REFRESH_DAYS) {
        steps.push("Schedule annual health checkup");
    }

    let weight_checks = classification.status(CareArea::Weight).map_or(0, |s| s.count);
    if weight_checks < 2 {
        steps.push("Start regular weight monitoring");
    }

    steps.into_iter().map(String::from).collect()
}

pub fn summarize(pet: &PetProfile, classification: &Classification, score: u8) -> Summary {
    let mut key_points = Vec::new();

    if let Some(activity) = classification.status(CareArea::Activity) {
        key_points.push(format!("Activity Level: {}", activity.label));
    }
    if let Some(vaccination) = classification.status(CareArea::Vaccination) {
        key_points.push(format!("Vaccination Status: {}", vaccination.label));
    }
    key_points.push(format!(
        "Overall Health: {} ({}%)",
        Grade::from_score(score),
        score
    ));

    Summary {
        title: MessageTemplates::summary_title(pet.display_name()),
        description: MessageTemplates::summary_description(pet.normalized_breed().as_deref()),
        key_points,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;
    use crate::analysis::classify::classify;
    use crate::analysis::reference::BreedReference;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 1, 9, 0, 0).unwrap()
    }

    fn on(month: u32, category: Category) -> HealthEvent {
        HealthEvent::new(
            category,
            Utc.with_ymd_and_hms(2025, month, 15, 12, 0, 0).unwrap(),
            "",
        )
    }

    fn ev(category: Category, days_ago: i64) -> HealthEvent {
        HealthEvent::new(category, now() - Duration::days(days_ago), "")
    }

    fn classify_events(events: &[HealthEvent]) -> Classification {
        classify(events, &PetProfile::default(), &BreedReference::builtin(), now())
    }

    #[test]
    fn seasons_by_month() {
        assert_eq!(season_of(3), Season::Spring);
        assert_eq!(season_of(8), Season::Summer);
        assert_eq!(season_of(11), Season::Fall);
        assert_eq!(season_of(12), Season::Winter);
        assert_eq!(season_of(2), Season::Winter);
    }

    #[test]
    fn seasonal_counts_cover_every_event() {
        let events: Vec<HealthEvent> = (1..=12).map(|m| on(m, Category::Other)).collect();
        let counts = seasonal_counts(&events);
        assert_eq!(counts.spring, 3);
        assert_eq!(counts.winter, 3);
        assert_eq!(counts.total(), 12);
    }

    #[test]
    fn milestones_need_thresholds() {
        let two = [on(1, Category::Vaccination), on(2, Category::Vaccination)];
        assert!(milestones(&two).is_empty());

        let mut events: Vec<HealthEvent> = (1..=3).map(|m| on(m, Category::Vaccination)).collect();
        let titles: Vec<String> = milestones(&events).into_iter().map(|m| m.title).collect();
        assert_eq!(titles, vec!["Vaccination Pro"]);

        events.extend((4..=10).map(|m| on(m, Category::Checkup)));
        assert_eq!(milestones(&events).len(), 2);
    }

    #[test]
    fn vet_visit_frequency_buckets() {
        let none = vet_visits(&[ev(Category::Checkup, 120)], now());
        assert_eq!(none.total_visits, 1);
        assert_eq!(none.recent_visits, 0);
        assert_eq!(none.frequency, VisitFrequency::NeedsImprovement);
        assert_eq!(none.vet_score, 30);
        assert_eq!(none.recommendation.as_deref(), Some("Schedule regular vet visits"));

        let some = vet_visits(&[ev(Category::Checkup, 90), ev(Category::Other, 91)], now());
        assert_eq!(some.recent_visits, 1);
        assert_eq!((some.frequency, some.vet_score), (VisitFrequency::Good, 70));
        assert!(some.recommendation.is_none());

        let many: Vec<HealthEvent> = (0..3).map(|d| ev(Category::Surgery, d)).collect();
        assert_eq!(vet_visits(&many, now()).frequency, VisitFrequency::Excellent);
    }

    #[test]
    fn medication_history_counts_mentions() {
        let empty = medication_history(&[]);
        assert_eq!((empty.medication_records, empty.medication_score), (0, 100));

        let events = vec![
            ev(Category::Medication, 4),
            HealthEvent::new(Category::Checkup, now(), "Started new Medication for itching"),
            ev(Category::Surgery, 30),
        ];
        let history = medication_history(&events);
        assert_eq!(history.medication_records, 2);
        assert_eq!(history.surgery_records, 1);
        assert_eq!(history.medication_score, 80);
        assert_eq!(history.recommendation, "Continue medication monitoring");
    }

    #[test]
    fn forecast_combines_score_and_trend() {
        let f = forecast(85, OverallTrend::Improving);
        assert_eq!((f.outlook, f.confidence), (Outlook::Excellent, Confidence::High));
        assert_eq!(forecast(95, OverallTrend::Declining).outlook, Outlook::Concerning);
        assert_eq!(forecast(59, OverallTrend::Stable).outlook, Outlook::Concerning);
        assert_eq!(forecast(80, OverallTrend::Stable).outlook, Outlook::Good);
        let f = forecast(70, OverallTrend::InsufficientData);
        assert_eq!((f.outlook, f.confidence), (Outlook::Stable, Confidence::Medium));
    }

    #[test]
    fn longevity_factor_lists_and_assessment() {
        let empty = longevity_factors(&[], 10);
        assert!(empty.positive.is_empty());
        assert_eq!(empty.negative, vec!["No vaccination records", "No weight monitoring"]);
        assert_eq!(empty.assessment, Longevity::BelowAverage);

        let events = vec![
            ev(Category::Vaccination, 10),
            ev(Category::Vaccination, 300),
            ev(Category::WeightCheck, 5),
            ev(Category::WeightCheck, 50),
            ev(Category::WeightCheck, 100),
        ];
        let good = longevity_factors(&events, 90);
        assert_eq!(good.positive, vec!["Good vaccination history", "Regular weight monitoring"]);
        assert!(good.negative.is_empty());
        assert_eq!(good.assessment, Longevity::Excellent);

        let one_gap = longevity_factors(&[ev(Category::Vaccination, 10)], 72);
        assert_eq!(one_gap.assessment, Longevity::Good);
        assert_eq!(longevity_factors(&[], 65).assessment, Longevity::Fair);
    }

    #[test]
    fn next_steps_for_empty_history() {
        assert_eq!(
            next_steps(&classify_events(&[])),
            vec![
                "Schedule vaccination appointment",
                "Book dental cleaning appointment",
                "Schedule annual health checkup",
                "Start regular weight monitoring",
            ]
        );
    }

    #[test]
    fn next_steps_clear_with_current_care() {
        let events = vec![
            ev(Category::Vaccination, 20),
            ev(Category::DentalCleaning, 200),
            ev(Category::Checkup, 180),
            ev(Category::WeightCheck, 5),
            ev(Category::WeightCheck, 60),
        ];
        assert!(next_steps(&classify_events(&events)).is_empty());

        let stale = vec![ev(Category::Vaccination, 380), ev(Category::Checkup, 181)];
        assert_eq!(
            next_steps(&classify_events(&stale)),
            vec![
                "Schedule vaccination appointment",
                "Book dental cleaning appointment",
                "Schedule annual health checkup",
                "Start regular weight monitoring",
            ]
        );
    }

    #[test]
    fn summary_key_points() {
        let events = vec![ev(Category::Vaccination, 10)];
        let pet = PetProfile {
            name: Some("Luna".into()),
            breed: Some("Pug".into()),
            ..PetProfile::default()
        };
        let c = classify(&events, &pet, &BreedReference::builtin(), now());
        let summary = summarize(&pet, &c, 43);

        assert_eq!(summary.title, "Luna's Health Overview");
        assert!(summary.description.contains("pug"));
        assert_eq!(
            summary.key_points,
            vec![
                "Activity Level: Moderate".to_string(),
                "Vaccination Status: Up to Date".to_string(),
                "Overall Health: Needs Attention (43%)".to_string(),
            ]
        );
    }

    #[test]
    fn insights_for_empty_history() {
        let c = classify_events(&[]);
        let insights = build_insights(&[], &PetProfile::default(), &c, 10, now());
        assert_eq!(insights.wellness_score, 0);
        assert!(insights.milestones.is_empty());
        assert_eq!(insights.seasonal.total(), 0);
        assert!(insights.latest_weight.is_none());
        assert_eq!(insights.summary.title, "Your pet's Health Overview");
        assert_eq!(insights.vet_visits.frequency, VisitFrequency::NeedsImprovement);
        assert_eq!(insights.medication_history.medication_score, 100);
        assert_eq!(insights.forecast.outlook, Outlook::Concerning);
        assert_eq!(insights.next_steps.len(), 4);
    }
}
