//! Raw input shapes as a route layer receives them, and their validation
//! into model types. This is the only place that raises `ValidationError`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::models::{Category, HealthEvent, PetProfile};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid {field} {value:?}: {reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub value: String,
    pub reason: &'static str,
}

impl ValidationError {
    fn new(field: &'static str, value: impl Into<String>, reason: &'static str) -> Self {
        Self {
            field,
            value: value.into(),
            reason,
        }
    }
}

/// A health event as submitted, before validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthEventInput {
    #[serde(default)]
    pub id: Option<Uuid>,
    /// Category label. Unknown labels become `Other`.
    #[serde(alias = "type")]
    pub category: String,
    #[serde(alias = "date")]
    pub occurred_at: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, alias = "nextDueDate")]
    pub next_due_at: Option<String>,
}

/// A pet profile as submitted. Age arrives as a number or a numeric string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetProfileInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub breed: Option<String>,
    #[serde(default, alias = "ageYears")]
    pub age: Option<serde_json::Value>,
    #[serde(default)]
    pub weight: Option<serde_json::Value>,
}

/// Parse RFC 3339, a naive `YYYY-MM-DDTHH:MM:SS` (read as UTC), or a bare
/// `YYYY-MM-DD` (midnight UTC).
pub fn parse_timestamp(field: &'static str, raw: &str) -> Result<DateTime<Utc>, ValidationError> {
    let s = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(naive.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }

    Err(ValidationError::new(field, raw, "not a recognized date"))
}

fn optional_timestamp(
    field: &'static str,
    raw: Option<&str>,
) -> Result<Option<DateTime<Utc>>, ValidationError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(s) => parse_timestamp(field, s).map(Some),
        None => Ok(None),
    }
}

/// Blank or missing age is `None`; anything present must be a finite,
/// non-negative number.
pub fn parse_age(raw: Option<&serde_json::Value>) -> Result<Option<f64>, ValidationError> {
    use serde_json::Value;

    let age = match raw {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) if s.trim().is_empty() => return Ok(None),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(_) => None,
    };

    let value = raw.map(|v| v.to_string()).unwrap_or_default();
    match age {
        Some(a) if a.is_finite() && a >= 0.0 => Ok(Some(a)),
        Some(_) => Err(ValidationError::new("ageYears", value, "must be a non-negative number")),
        None => Err(ValidationError::new("ageYears", value, "not a number")),
    }
}

fn blank_to_none(s: Option<String>) -> Option<String> {
    s.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

impl TryFrom<HealthEventInput> for HealthEvent {
    type Error = ValidationError;

    fn try_from(input: HealthEventInput) -> Result<Self, Self::Error> {
        Ok(Self {
            id: input.id.unwrap_or_else(Uuid::new_v4),
            category: Category::from_label(&input.category),
            occurred_at: parse_timestamp("occurredAt", &input.occurred_at)?,
            description: input.description,
            next_due_at: optional_timestamp("nextDueAt", input.next_due_at.as_deref())?,
        })
    }
}

impl TryFrom<PetProfileInput> for PetProfile {
    type Error = ValidationError;

    fn try_from(input: PetProfileInput) -> Result<Self, Self::Error> {
        let weight = match input.weight {
            Some(serde_json::Value::String(s)) => blank_to_none(Some(s)),
            Some(serde_json::Value::Null) | None => None,
            Some(other) => Some(other.to_string()),
        };

        Ok(Self {
            age_years: parse_age(input.age.as_ref())?,
            name: blank_to_none(input.name),
            breed: blank_to_none(input.breed),
            weight,
        })
    }
}

/// Validate a batch. Fails on the first invalid event.
pub fn validate_events(inputs: Vec<HealthEventInput>) -> Result<Vec<HealthEvent>, ValidationError> {
    inputs.into_iter().map(HealthEvent::try_from).collect()
}
