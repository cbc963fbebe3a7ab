use std::collections::HashMap;
use std::sync::RwLock;

use uuid::Uuid;

use crate::models::{HealthEvent, PetProfile};

use super::types::{AnalysisError, HealthRecordSource};

/// In-memory pet and event store backed by RwLock.
/// Used by tests and by embedders that have no event store of their own.
#[derive(Default)]
pub struct InMemoryRecordStore {
    pub(crate) pets: RwLock<HashMap<Uuid, PetProfile>>,
    pub(crate) events: RwLock<HashMap<Uuid, Vec<HealthEvent>>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the owner's pet profile.
    pub fn put_pet(&self, owner_id: Uuid, pet: PetProfile) -> Result<(), AnalysisError> {
        let mut pets = self.pets.write().map_err(|_| AnalysisError::LockFailed)?;
        pets.insert(owner_id, pet);
        Ok(())
    }

    pub fn append_event(&self, owner_id: Uuid, event: HealthEvent) -> Result<(), AnalysisError> {
        let mut events = self.events.write().map_err(|_| AnalysisError::LockFailed)?;
        tracing::debug!(
            owner_id = %owner_id,
            category = event.category.as_str(),
            "Health event recorded"
        );
        events.entry(owner_id).or_default().push(event);
        Ok(())
    }

    /// Remove one event. Errors if the owner has no event with that id.
    pub fn delete_event(
        &self,
        owner_id: &Uuid,
        event_id: &Uuid,
    ) -> Result<HealthEvent, AnalysisError> {
        let mut events = self.events.write().map_err(|_| AnalysisError::LockFailed)?;
        let owned = events
            .get_mut(owner_id)
            .ok_or(AnalysisError::EventNotFound(*event_id))?;
        let pos = owned
            .iter()
            .position(|e| e.id == *event_id)
            .ok_or(AnalysisError::EventNotFound(*event_id))?;
        Ok(owned.remove(pos))
    }

    pub fn event_count(&self, owner_id: &Uuid) -> Result<usize, AnalysisError> {
        let events = self.events.read().map_err(|_| AnalysisError::LockFailed)?;
        Ok(events.get(owner_id).map_or(0, Vec::len))
    }
}

impl HealthRecordSource for InMemoryRecordStore {
    fn pet_profile(&self, owner_id: &Uuid) -> Result<Option<PetProfile>, AnalysisError> {
        let pets = self.pets.read().map_err(|_| AnalysisError::LockFailed)?;
        Ok(pets.get(owner_id).cloned())
    }

    /// Newest first.
    fn events_for_owner(&self, owner_id: &Uuid) -> Result<Vec<HealthEvent>, AnalysisError> {
        let events = self.events.read().map_err(|_| AnalysisError::LockFailed)?;
        let mut out = events.get(owner_id).cloned().unwrap_or_default();
        out.sort_by(|a, b| b.occurred_at.cmp(&a.occurred_at));
        Ok(out)
    }
}
