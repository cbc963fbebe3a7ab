use crate::models::{CareArea, Priority};

use super::helpers::alert_id;
use super::messages::MessageTemplates;
use super::rules::{ATTENTION_ALERT_BELOW, VACCINATION_SCHEDULE};
use super::types::{Classification, Compliance, HealthAlert, RiskEntry};

/// One High risk entry per area that has never been recorded.
pub fn assess_risks(classification: &Classification) -> Vec<RiskEntry> {
    classification
        .statuses
        .values()
        .filter_map(|status| {
            let level = status.risk_level?;
            let (message, mitigation) = MessageTemplates::no_records(status.area);
            Some(RiskEntry {
                area: status.area,
                level,
                message,
                mitigation,
            })
        })
        .collect()
}

/// Alerts for areas that crossed a threshold. Missing data is a risk, not an
/// alert, so areas with no records never alert here.
pub fn detect_alerts(classification: &Classification, score: u8) -> Vec<HealthAlert> {
    let mut alerts = Vec::new();

    let vaccination = classification.status(CareArea::Vaccination);
    let dental = classification.status(CareArea::Dental);

    if let Some(status) = vaccination {
        match (status.compliance, status.days_since_last) {
            (Some(Compliance::Overdue), Some(days)) => alerts.push(HealthAlert {
                id: alert_id(CareArea::Vaccination, "overdue"),
                area: CareArea::Vaccination,
                severity: Priority::High,
                message: MessageTemplates::vaccination_overdue(days),
            }),
            (Some(Compliance::DueSoon), Some(days)) => alerts.push(HealthAlert {
                id: alert_id(CareArea::Vaccination, "due_soon"),
                area: CareArea::Vaccination,
                severity: Priority::Medium,
                message: MessageTemplates::vaccination_due_soon(
                    VACCINATION_SCHEDULE.overdue_after_days() - days,
                ),
            }),
            _ => {}
        }
    }

    if let Some(status) = dental {
        if let (Some(Compliance::Overdue), Some(days)) =
            (status.compliance, status.days_since_last)
        {
            alerts.push(HealthAlert {
                id: alert_id(CareArea::Dental, "overdue"),
                area: CareArea::Dental,
                severity: Priority::Medium,
                message: MessageTemplates::dental_overdue(days),
            });
        }
    }

    if score < ATTENTION_ALERT_BELOW {
        alerts.push(HealthAlert {
            id: alert_id(CareArea::General, "low_score"),
            area: CareArea::General,
            severity: Priority::High,
            message: MessageTemplates::low_score(score),
        });
    }

    alerts
}
