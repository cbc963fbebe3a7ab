use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::Category;

/// One recorded care action. Immutable once created; the engine only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthEvent {
    pub id: Uuid,
    pub category: Category,
    /// When the care action happened, not when it was recorded.
    pub occurred_at: DateTime<Utc>,
    pub description: String,
    /// Caller-supplied due date for the next instance, if known.
    pub next_due_at: Option<DateTime<Utc>>,
}

impl HealthEvent {
    pub fn new(
        category: Category,
        occurred_at: DateTime<Utc>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            category,
            occurred_at,
            description: description.into(),
            next_due_at: None,
        }
    }

    pub fn with_next_due(mut self, next_due_at: DateTime<Utc>) -> Self {
        self.next_due_at = Some(next_due_at);
        self
    }
}
