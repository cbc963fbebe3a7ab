//! Recommendation generator: a fixed decision table from classifier outputs to
//! action items. No ranking beyond (priority, area) order.

use crate::models::{CareArea, LifeStage, Priority};

use super::messages::MessageTemplates;
use super::rules::{CHECKUP_REFRESH_DAYS, FALLBACK_RECOMMENDATION_BELOW};
use super::types::{Classification, Compliance, Recommendation, Trend};

/// One row of the decision table.
struct Rule {
    area: CareArea,
    priority: Priority,
    applies: fn(&Classification) -> bool,
    title: &'static str,
    text: &'static str,
    action: &'static str,
}

const RULES: &[Rule] = &[
    Rule {
        area: CareArea::Vaccination,
        priority: Priority::High,
        applies: vaccination_overdue,
        title: "Schedule Vaccination",
        text: "Your pet's vaccination is overdue. Please schedule an appointment soon.",
        action: "Contact your veterinarian",
    },
    Rule {
        area: CareArea::Vaccination,
        priority: Priority::High,
        applies: vaccination_missing,
        title: "Start Vaccinations",
        text: "No vaccination records were found for your pet.",
        action: "Schedule initial vaccination consultation",
    },
    Rule {
        area: CareArea::Vaccination,
        priority: Priority::Medium,
        applies: vaccination_due_soon,
        title: "Vaccination Due Soon",
        text: "The yearly vaccination interval has passed. Book before it becomes overdue.",
        action: "Schedule vaccination appointment",
    },
    Rule {
        area: CareArea::Dental,
        priority: Priority::High,
        applies: dental_overdue,
        title: "Dental Cleaning Needed",
        text: "It's been over a year since the last dental cleaning.",
        action: "Schedule dental appointment",
    },
    Rule {
        area: CareArea::Dental,
        priority: Priority::Medium,
        applies: dental_missing,
        title: "Consider Dental Care",
        text: "No dental cleaning has been recorded yet.",
        action: "Consider dental cleaning appointment",
    },
    Rule {
        area: CareArea::Dental,
        priority: Priority::Medium,
        applies: dental_due_soon,
        title: "Dental Cleaning Due",
        text: "The last dental cleaning was more than six months ago.",
        action: "Schedule dental cleaning",
    },
    Rule {
        area: CareArea::Activity,
        priority: Priority::Medium,
        applies: activity_low,
        title: "Increase Health Monitoring",
        text: "Consider more frequent health checkups and monitoring.",
        action: "Schedule regular checkups",
    },
    Rule {
        area: CareArea::Weight,
        priority: Priority::Medium,
        applies: weight_missing,
        title: "Start Weight Monitoring",
        text: "Regular weight checks help track your pet's health.",
        action: "Start regular weight monitoring",
    },
    Rule {
        area: CareArea::Weight,
        priority: Priority::Low,
        applies: weight_sparse,
        title: "Continue Weight Monitoring",
        text: "More weight records are needed before weight can be assessed.",
        action: "Record another weight check",
    },
    Rule {
        area: CareArea::Checkup,
        priority: Priority::Medium,
        applies: checkup_missing,
        title: "Schedule Annual Checkup",
        text: "No general health checkup has been recorded.",
        action: "Schedule annual health checkup",
    },
    Rule {
        area: CareArea::Checkup,
        priority: Priority::Low,
        applies: checkup_stale,
        title: "Checkup Reminder",
        text: "The last general checkup was more than six months ago.",
        action: "Schedule annual health checkup",
    },
    Rule {
        area: CareArea::LifeStage,
        priority: Priority::High,
        applies: senior,
        title: "Senior Care",
        text: "Senior pet care protocols are recommended.",
        action: "Schedule senior health assessment",
    },
];

pub const FALLBACK_TITLE: &str = "Comprehensive Checkup";
pub const FALLBACK_TEXT: &str = "Schedule a comprehensive health checkup";

fn vaccination_overdue(c: &Classification) -> bool {
    c.compliance(CareArea::Vaccination) == Some(Compliance::Overdue)
}

fn vaccination_missing(c: &Classification) -> bool {
    c.compliance(CareArea::Vaccination) == Some(Compliance::NoRecords)
}

fn vaccination_due_soon(c: &Classification) -> bool {
    c.compliance(CareArea::Vaccination) == Some(Compliance::DueSoon)
}

fn dental_overdue(c: &Classification) -> bool {
    c.compliance(CareArea::Dental) == Some(Compliance::Overdue)
}

fn dental_missing(c: &Classification) -> bool {
    c.compliance(CareArea::Dental) == Some(Compliance::NoRecords)
}

fn dental_due_soon(c: &Classification) -> bool {
    c.compliance(CareArea::Dental) == Some(Compliance::DueSoon)
}

fn activity_low(c: &Classification) -> bool {
    c.trend(CareArea::Activity) == Some(Trend::LowActivity)
}

fn weight_missing(c: &Classification) -> bool {
    c.trend(CareArea::Weight) == Some(Trend::NoData)
}

fn weight_sparse(c: &Classification) -> bool {
    c.trend(CareArea::Weight) == Some(Trend::InsufficientData)
}

fn checkup_missing(c: &Classification) -> bool {
    c.trend(CareArea::Checkup) == Some(Trend::NoData)
}

fn checkup_stale(c: &Classification) -> bool {
    c.status(CareArea::Checkup)
        .and_then(|s| s.days_since_last)
        .is_some_and(|days| days > CHECKUP_REFRESH_DAYS)
}

fn senior(c: &Classification) -> bool {
    c.life_stage.as_ref().is_some_and(|l| l.stage == LifeStage::Senior)
}

/// Collect every matching rule, add the breed row and the low-score fallback,
/// then order by priority with area declaration order inside a tier.
pub fn recommend(classification: &Classification, score: u8) -> Vec<Recommendation> {
    let mut out: Vec<Recommendation> = RULES
        .iter()
        .filter(|rule| (rule.applies)(classification))
        .map(|rule| Recommendation {
            priority: rule.priority,
            area: rule.area,
            title: rule.title.to_string(),
            text: rule.text.to_string(),
            action: rule.action.to_string(),
        })
        .collect();

    if let Some(breed) = classification.breed.as_ref().filter(|b| b.specific) {
        out.push(Recommendation {
            priority: Priority::Low,
            area: CareArea::Breed,
            title: "Breed-Specific Care".to_string(),
            text: MessageTemplates::breed_monitoring(&breed.breed, &breed.risks),
            action: breed
                .recommendations
                .first()
                .cloned()
                .unwrap_or_else(|| "Research breed-specific health needs".to_string()),
        });
    }

    if score < FALLBACK_RECOMMENDATION_BELOW {
        out.push(Recommendation {
            priority: Priority::Medium,
            area: CareArea::General,
            title: FALLBACK_TITLE.to_string(),
            text: FALLBACK_TEXT.to_string(),
            action: "Contact your veterinarian".to_string(),
        });
    }

    // stable: rows keep table order inside the same (priority, area)
    out.sort_by_key(|r| (r.priority, r.area));
    out
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, TimeZone, Utc};

    use super::*;
    use crate::analysis::classify::classify;
    use crate::analysis::reference::BreedReference;
    use crate::models::{Category, HealthEvent, PetProfile};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 1, 9, 0, 0).unwrap()
    }

    fn ev(category: Category, days_ago: i64) -> HealthEvent {
        HealthEvent::new(category, now() - Duration::days(days_ago), "")
    }

    fn classify_with(events: &[HealthEvent], pet: &PetProfile) -> Classification {
        classify(events, pet, &BreedReference::builtin(), now())
    }

    fn well_kept_history() -> Vec<HealthEvent> {
        vec![
            ev(Category::Vaccination, 20),
            ev(Category::DentalCleaning, 10),
            ev(Category::WeightCheck, 5),
            ev(Category::WeightCheck, 60),
            ev(Category::WeightCheck, 120),
            ev(Category::Checkup, 3),
        ]
    }

    /// `well_kept_history` with one category's events replaced.
    fn replacing(category: Category, days_ago: &[i64]) -> Vec<HealthEvent> {
        let mut events = well_kept_history();
        events.retain(|e| e.category != category);
        events.extend(days_ago.iter().map(|&d| ev(category, d)));
        events
    }

    #[test]
    fn each_table_row_fires_alone() {
        let senior = PetProfile {
            age_years: Some(10.0),
            ..PetProfile::default()
        };
        let no_recent_activity = vec![
            ev(Category::Vaccination, 40),
            ev(Category::DentalCleaning, 40),
            ev(Category::WeightCheck, 40),
            ev(Category::WeightCheck, 60),
            ev(Category::WeightCheck, 120),
            ev(Category::Checkup, 40),
        ];

        let cases: Vec<(Vec<HealthEvent>, PetProfile, Priority, CareArea, &str)> = vec![
            (
                replacing(Category::Vaccination, &[500]),
                PetProfile::default(),
                Priority::High,
                CareArea::Vaccination,
                "Schedule Vaccination",
            ),
            (
                replacing(Category::Vaccination, &[]),
                PetProfile::default(),
                Priority::High,
                CareArea::Vaccination,
                "Start Vaccinations",
            ),
            (
                replacing(Category::Vaccination, &[380]),
                PetProfile::default(),
                Priority::Medium,
                CareArea::Vaccination,
                "Vaccination Due Soon",
            ),
            (
                replacing(Category::DentalCleaning, &[400]),
                PetProfile::default(),
                Priority::High,
                CareArea::Dental,
                "Dental Cleaning Needed",
            ),
            (
                replacing(Category::DentalCleaning, &[]),
                PetProfile::default(),
                Priority::Medium,
                CareArea::Dental,
                "Consider Dental Care",
            ),
            (
                replacing(Category::DentalCleaning, &[200]),
                PetProfile::default(),
                Priority::Medium,
                CareArea::Dental,
                "Dental Cleaning Due",
            ),
            (
                no_recent_activity,
                PetProfile::default(),
                Priority::Medium,
                CareArea::Activity,
                "Increase Health Monitoring",
            ),
            (
                replacing(Category::WeightCheck, &[]),
                PetProfile::default(),
                Priority::Medium,
                CareArea::Weight,
                "Start Weight Monitoring",
            ),
            (
                replacing(Category::WeightCheck, &[5]),
                PetProfile::default(),
                Priority::Low,
                CareArea::Weight,
                "Continue Weight Monitoring",
            ),
            (
                replacing(Category::Checkup, &[]),
                PetProfile::default(),
                Priority::Medium,
                CareArea::Checkup,
                "Schedule Annual Checkup",
            ),
            (
                replacing(Category::Checkup, &[200]),
                PetProfile::default(),
                Priority::Low,
                CareArea::Checkup,
                "Checkup Reminder",
            ),
            (
                well_kept_history(),
                senior,
                Priority::High,
                CareArea::LifeStage,
                "Senior Care",
            ),
        ];

        for (events, pet, priority, area, title) in cases {
            let recs = recommend(&classify_with(&events, &pet), 100);
            let got: Vec<(Priority, CareArea, &str)> = recs
                .iter()
                .map(|r| (r.priority, r.area, r.title.as_str()))
                .collect();
            assert_eq!(got, vec![(priority, area, title)]);
        }
    }

    #[test]
    fn adequate_weight_history_needs_no_row() {
        for days in [&[5, 60][..], &[5, 60, 120, 200][..]] {
            let events = replacing(Category::WeightCheck, days);
            let c = classify_with(&events, &PetProfile::default());
            assert_eq!(c.trend(CareArea::Weight), Some(Trend::Adequate));
            assert!(recommend(&c, 100).is_empty());
        }
    }

    #[test]
    fn fallback_emitted_once_below_seventy() {
        let c = classify_with(&well_kept_history(), &PetProfile::default());
        let recs = recommend(&c, 65);
        let fallbacks = recs.iter().filter(|r| r.text == FALLBACK_TEXT).count();
        assert_eq!(fallbacks, 1);
        assert_eq!(recs.len(), 1, "no other rule should fire: {recs:?}");
    }

    #[test]
    fn no_fallback_at_seventy() {
        let c = classify_with(&well_kept_history(), &PetProfile::default());
        assert!(recommend(&c, 70).is_empty());
    }

    #[test]
    fn overdue_vaccination_is_high_and_first() {
        let events = vec![ev(Category::Vaccination, 500)];
        let c = classify_with(&events, &PetProfile::default());
        let recs = recommend(&c, 30);
        assert_eq!(recs[0].area, CareArea::Vaccination);
        assert_eq!(recs[0].priority, Priority::High);
        assert_eq!(recs[0].action, "Contact your veterinarian");
    }

    #[test]
    fn ordering_is_priority_then_area() {
        let c = classify_with(&[], &PetProfile::default());
        let recs = recommend(&c, 10);
        let keys: Vec<(Priority, CareArea)> = recs.iter().map(|r| (r.priority, r.area)).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
        assert_eq!(keys.first(), Some(&(Priority::High, CareArea::Vaccination)));
        let mediums: Vec<CareArea> = recs
            .iter()
            .filter(|r| r.priority == Priority::Medium)
            .map(|r| r.area)
            .collect();
        assert_eq!(
            mediums,
            vec![
                CareArea::Dental,
                CareArea::Activity,
                CareArea::Weight,
                CareArea::Checkup,
                CareArea::General,
            ]
        );
    }

    #[test]
    fn senior_and_breed_rows() {
        let pet = PetProfile {
            name: Some("Max".into()),
            breed: Some("German Shepherd".into()),
            age_years: Some(9.0),
            weight: None,
        };
        let c = classify_with(&well_kept_history(), &pet);
        let recs = recommend(&c, 100);
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].area, CareArea::LifeStage);
        assert_eq!(recs[0].priority, Priority::High);
        assert_eq!(recs[1].area, CareArea::Breed);
        assert_eq!(recs[1].action, "Hip screening");
    }

    #[test]
    fn stale_checkup_gets_low_reminder() {
        let mut events = well_kept_history();
        events.retain(|e| e.category != Category::Checkup);
        events.push(ev(Category::Checkup, 200));
        let c = classify_with(&events, &PetProfile::default());
        let recs = recommend(&c, 100);
        assert!(recs
            .iter()
            .any(|r| r.area == CareArea::Checkup && r.priority == Priority::Low));
    }
}
