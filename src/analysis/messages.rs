use crate::models::CareArea;

/// Message template builder for the owner-facing text that depends on data.
/// Static recommendation text lives in the decision table.
pub struct MessageTemplates;

impl MessageTemplates {
    /// RISK: area never recorded.
    pub fn no_records(area: CareArea) -> (String, String) {
        let (message, mitigation) = match area {
            CareArea::Vaccination => (
                "No vaccination records found. Your pet may be susceptible to preventable diseases.",
                "Schedule immediate vaccination consultation",
            ),
            CareArea::Weight => (
                "No weight monitoring records. Weight-related issues may go unnoticed.",
                "Start regular weight tracking",
            ),
            CareArea::Dental => (
                "No dental care records. There is a risk of dental disease and related issues.",
                "Schedule dental examination",
            ),
            CareArea::Checkup => (
                "No checkup records. Routine examinations catch problems early.",
                "Book a general health checkup",
            ),
            CareArea::Activity | CareArea::Breed | CareArea::LifeStage | CareArea::General => (
                "No records found for this area.",
                "Start recording care events",
            ),
        };
        (message.to_string(), mitigation.to_string())
    }

    /// ALERT: vaccination past the grace period.
    pub fn vaccination_overdue(days_since: i64) -> String {
        format!(
            "The last vaccination was {} days ago and is significantly overdue. \
             Please schedule a vaccination immediately.",
            days_since,
        )
    }

    /// ALERT: vaccination inside the grace period.
    pub fn vaccination_due_soon(days_left: i64) -> String {
        format!(
            "Vaccination is past its yearly interval. It becomes overdue in {} days.",
            days_left,
        )
    }

    /// ALERT: dental cleaning past the grace period.
    pub fn dental_overdue(days_since: i64) -> String {
        format!(
            "It has been {} days since the last dental cleaning. Dental care is overdue.",
            days_since,
        )
    }

    /// ALERT: overall score below the attention threshold.
    pub fn low_score(score: u8) -> String {
        format!(
            "Your pet's health score is {}, which is below optimal. \
             Please consult with your veterinarian.",
            score,
        )
    }

    /// RECOMMENDATION: breed-specific monitoring.
    pub fn breed_monitoring(breed: &str, risks: &[String]) -> String {
        format!(
            "Based on {} breed characteristics, keep an eye on: {}.",
            breed,
            risks.join(", "),
        )
    }

    pub fn summary_title(pet_name: &str) -> String {
        format!("{}'s Health Overview", pet_name)
    }

    pub fn summary_description(breed: Option<&str>) -> String {
        match breed {
            Some(b) => format!(
                "Based on {} breed characteristics and health records, here's your pet's current health status.",
                b,
            ),
            None => {
                "Based on your pet's health records, here's the current health status.".to_string()
            }
        }
    }
}
