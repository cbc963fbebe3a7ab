use std::path::Path;
use std::time::Instant;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::config;
use crate::models::{HealthEvent, PetProfile};
use crate::validation::{validate_events, HealthEventInput, PetProfileInput};

use super::alerts::{assess_risks, detect_alerts};
use super::classify::classify;
use super::insights::build_insights;
use super::projection::{project_all, upcoming};
use super::recommend::recommend;
use super::reference::BreedReference;
use super::rules::UPCOMING_LIMIT;
use super::scoring::compute_score;
use super::types::{AnalysisError, AnalysisResult, Grade, HealthAnalyzer, HealthRecordSource};

/// Default implementation of the health analyzer.
/// Runs scoring, classification, recommendations, alerts and projections over
/// one pet's history. Holds only immutable reference data.
pub struct DefaultHealthEngine {
    pub(crate) reference: BreedReference,
}

impl DefaultHealthEngine {
    pub fn new(reference: BreedReference) -> Self {
        Self { reference }
    }

    /// Engine backed by the compiled-in breed table.
    pub fn builtin() -> Self {
        Self::new(BreedReference::builtin())
    }

    pub fn from_resources(resources_dir: &Path) -> Result<Self, AnalysisError> {
        Ok(Self::new(BreedReference::load(resources_dir)?))
    }

    /// Engine loaded from [`config::resources_dir`].
    pub fn from_configured_resources() -> Result<Self, AnalysisError> {
        let dir = config::resources_dir();
        tracing::info!(path = %dir.display(), "Loading health reference data");
        Self::from_resources(&dir)
    }

    pub fn reference(&self) -> &BreedReference {
        &self.reference
    }

    /// Validate raw route-layer input, then analyze. The first invalid field
    /// is returned as [`AnalysisError::Validation`].
    pub fn analyze_inputs(
        &self,
        pet: PetProfileInput,
        events: Vec<HealthEventInput>,
        now: DateTime<Utc>,
    ) -> Result<AnalysisResult, AnalysisError> {
        let pet = PetProfile::try_from(pet)?;
        let events = validate_events(events)?;
        Ok(self.analyze(&pet, &events, now))
    }

    /// Read the owner's pet and events from `source`, then analyze.
    pub fn analyze_owner(
        &self,
        source: &dyn HealthRecordSource,
        owner_id: &Uuid,
        now: DateTime<Utc>,
    ) -> Result<AnalysisResult, AnalysisError> {
        let pet = source
            .pet_profile(owner_id)?
            .ok_or(AnalysisError::PetNotFound(*owner_id))?;
        let events = source.events_for_owner(owner_id)?;

        tracing::debug!(owner_id = %owner_id, events = events.len(), "Loaded owner records");

        Ok(self.analyze(&pet, &events, now))
    }

    /// Like [`analyze_owner`](Self::analyze_owner), but any source failure
    /// yields the fallback result instead of an error.
    pub fn analyze_owner_or_fallback(
        &self,
        source: &dyn HealthRecordSource,
        owner_id: &Uuid,
        now: DateTime<Utc>,
    ) -> AnalysisResult {
        match self.analyze_owner(source, owner_id, now) {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!(
                    owner_id = %owner_id,
                    error = %e,
                    "Health analysis fell back to default result"
                );
                AnalysisResult::fallback(now)
            }
        }
    }
}

impl Default for DefaultHealthEngine {
    fn default() -> Self {
        Self::builtin()
    }
}

impl HealthAnalyzer for DefaultHealthEngine {
    fn analyze(
        &self,
        pet: &PetProfile,
        events: &[HealthEvent],
        now: DateTime<Utc>,
    ) -> AnalysisResult {
        let start = Instant::now();

        let score = compute_score(events, pet, now);
        tracing::debug!(score, "Scored history");

        let classification = classify(events, pet, &self.reference, now);
        tracing::debug!(
            overall_trend = classification.overall_trend.as_str(),
            "Classified history"
        );

        let recommendations = recommend(&classification, score);
        let risks = assess_risks(&classification);
        let alerts = detect_alerts(&classification, score);
        let projections = project_all(events, now);
        let upcoming = upcoming(events, now, UPCOMING_LIMIT);
        let insights = build_insights(events, pet, &classification, score, now);

        tracing::info!(
            events = events.len(),
            score,
            recommendations = recommendations.len(),
            risks = risks.len(),
            alerts = alerts.len(),
            processing_us = u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX),
            "Health analysis complete"
        );

        AnalysisResult {
            score,
            grade: Grade::from_score(score),
            category_statuses: classification.statuses,
            overall_trend: classification.overall_trend,
            life_stage: classification.life_stage,
            breed: classification.breed,
            recommendations,
            risks,
            alerts,
            projections,
            upcoming,
            insights,
            analyzed_at: now,
            is_fallback: false,
        }
    }
}

/// Analyze with the built-in reference data.
pub fn analyze(pet: &PetProfile, events: &[HealthEvent], now: DateTime<Utc>) -> AnalysisResult {
    DefaultHealthEngine::builtin().analyze(pet, events, now)
}

impl AnalysisResult {
    /// Stand-in result when the owner's records could not be read: the
    /// empty-history analysis of an unnamed pet.
    pub fn fallback(now: DateTime<Utc>) -> Self {
        Self {
            is_fallback: true,
            ..analyze(&PetProfile::default(), &[], now)
        }
    }
}
