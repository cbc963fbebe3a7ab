//! Prediction projector: next-due dates for recurring care categories.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};

use crate::models::{Category, HealthEvent};

use super::helpers::{days_between, most_recent};
use super::rules::{interval_days, LOOKAHEAD_DAYS};
use super::types::{Projection, UpcomingItem};

/// Categories the projector reports on, in output order.
pub const PROJECTED_CATEGORIES: [Category; 3] =
    [Category::Vaccination, Category::DentalCleaning, Category::WeightCheck];

/// Project the next due date for `category` from its most recent event.
///
/// A caller-supplied `next_due_at` on that event wins over the interval
/// table. Returns `None` when the category has no events, has neither an
/// interval nor a supplied date, or the computed date is out of range.
pub fn project(
    events: &[HealthEvent],
    category: Category,
    now: DateTime<Utc>,
) -> Option<Projection> {
    let last = most_recent(events, category)?;

    let (next_due_at, caller_supplied) = match last.next_due_at {
        Some(supplied) => (supplied, true),
        None => {
            let interval = Duration::days(interval_days(category)?);
            (last.occurred_at.checked_add_signed(interval)?, false)
        }
    };

    Some(Projection {
        category,
        last_occurred_at: last.occurred_at,
        next_due_at,
        days_until_due: days_between(now, next_due_at),
        within_lookahead: next_due_at - now <= Duration::days(LOOKAHEAD_DAYS),
        caller_supplied,
    })
}

pub fn project_all(
    events: &[HealthEvent],
    now: DateTime<Utc>,
) -> BTreeMap<Category, Option<Projection>> {
    PROJECTED_CATEGORIES
        .iter()
        .map(|&category| (category, project(events, category, now)))
        .collect()
}

/// Caller-supplied due dates still ahead of `now`, earliest first.
pub fn upcoming(events: &[HealthEvent], now: DateTime<Utc>, limit: usize) -> Vec<UpcomingItem> {
    let mut items: Vec<UpcomingItem> = events
        .iter()
        .filter_map(|e| {
            let due_at = e.next_due_at.filter(|due| *due > now)?;
            Some(UpcomingItem {
                category: e.category,
                due_at,
                description: e.description.clone(),
            })
        })
        .collect();

    items.sort_by(|a, b| a.due_at.cmp(&b.due_at).then(a.category.cmp(&b.category)));
    items.truncate(limit);
    items
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 1, 9, 0, 0).unwrap()
    }

    fn ev(category: Category, days_ago: i64) -> HealthEvent {
        HealthEvent::new(category, now() - Duration::days(days_ago), "")
    }

    #[test]
    fn no_events_no_projection() {
        assert!(project(&[], Category::Vaccination, now()).is_none());
    }

    #[test]
    fn category_without_interval_has_no_projection() {
        assert!(project(&[ev(Category::Surgery, 5)], Category::Surgery, now()).is_none());
    }

    #[test]
    fn vaccination_projection_outside_lookahead() {
        let p = project(&[ev(Category::Vaccination, 100)], Category::Vaccination, now()).unwrap();
        assert_eq!(p.next_due_at, now() + Duration::days(265));
        assert_eq!(p.days_until_due, 265);
        assert!(!p.within_lookahead);
        assert!(!p.caller_supplied);
    }

    #[test]
    fn lookahead_boundary_is_inclusive() {
        let p = project(&[ev(Category::Vaccination, 335)], Category::Vaccination, now()).unwrap();
        assert_eq!(p.days_until_due, 30);
        assert!(p.within_lookahead);

        let p = project(&[ev(Category::Vaccination, 334)], Category::Vaccination, now()).unwrap();
        assert_eq!(p.days_until_due, 31);
        assert!(!p.within_lookahead);
    }

    #[test]
    fn past_due_is_negative_and_within_lookahead() {
        let events = [ev(Category::DentalCleaning, 200)];
        let p = project(&events, Category::DentalCleaning, now()).unwrap();
        assert_eq!(p.days_until_due, -20);
        assert!(p.within_lookahead);
    }

    #[test]
    fn due_date_past_the_calendar_has_no_projection() {
        let events = vec![HealthEvent::new(Category::Vaccination, DateTime::<Utc>::MAX_UTC, "")];
        assert!(project(&events, Category::Vaccination, now()).is_none());
    }

    #[test]
    fn uses_most_recent_event() {
        let events = vec![ev(Category::DentalCleaning, 300), ev(Category::DentalCleaning, 10)];
        let p = project(&events, Category::DentalCleaning, now()).unwrap();
        assert_eq!(p.days_until_due, 170);
    }

    #[test]
    fn caller_supplied_due_date_wins() {
        let due = now() + Duration::days(12);
        let events = vec![ev(Category::Vaccination, 5).with_next_due(due)];
        let p = project(&events, Category::Vaccination, now()).unwrap();
        assert_eq!(p.next_due_at, due);
        assert!(p.caller_supplied);
        assert!(p.within_lookahead);
    }

    #[test]
    fn project_all_reports_each_category() {
        let all = project_all(&[ev(Category::WeightCheck, 50)], now());
        assert_eq!(all.len(), 3);
        assert!(all[&Category::Vaccination].is_none());
        assert_eq!(all[&Category::WeightCheck].as_ref().unwrap().days_until_due, 10);
    }

    #[test]
    fn upcoming_sorted_and_limited() {
        let events = vec![
            ev(Category::Checkup, 1).with_next_due(now() + Duration::days(40)),
            ev(Category::Vaccination, 2).with_next_due(now() + Duration::days(5)),
            ev(Category::Medication, 3).with_next_due(now() - Duration::days(1)),
            ev(Category::DentalCleaning, 4).with_next_due(now() + Duration::days(20)),
            ev(Category::WeightCheck, 5).with_next_due(now() + Duration::days(60)),
        ];
        let items = upcoming(&events, now(), 3);
        let cats: Vec<Category> = items.iter().map(|i| i.category).collect();
        assert_eq!(cats, vec![Category::Vaccination, Category::DentalCleaning, Category::Checkup]);
    }
}
