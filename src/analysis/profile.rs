//! Pet-attribute analysis: life-stage bracket and breed-group match.

use crate::models::{HealthEvent, LifeStage, PetProfile};

use super::reference::BreedReference;
use super::types::{BreedAnalysis, LifeStageAnalysis};

pub fn analyze_life_stage(pet: &PetProfile) -> Option<LifeStageAnalysis> {
    let stage = pet.life_stage()?;
    let (risks, recommendations): (&[&str], &[&str]) = match stage {
        LifeStage::Puppy => (
            &["Parasite susceptibility", "Vaccination needs", "Growth monitoring"],
            &["Frequent vet visits", "Puppy vaccinations", "Growth tracking"],
        ),
        LifeStage::Adult => (
            &["Weight management", "Dental care", "Preventive care"],
            &["Annual checkups", "Dental cleaning", "Weight monitoring"],
        ),
        LifeStage::Senior => (
            &["Arthritis risk", "Cognitive decline", "Organ function"],
            &["Bi-annual checkups", "Joint supplements", "Cognitive monitoring"],
        ),
    };

    Some(LifeStageAnalysis {
        stage,
        risks: risks.iter().map(|s| s.to_string()).collect(),
        recommendations: recommendations.iter().map(|s| s.to_string()).collect(),
    })
}

/// Match the pet's breed against the reference groups.
///
/// The breed score starts at 100, loses 10 per group risk and gains 5 per
/// event whose description mentions the breed's first word.
pub fn analyze_breed(
    pet: &PetProfile,
    events: &[HealthEvent],
    reference: &BreedReference,
) -> Option<BreedAnalysis> {
    let breed = pet.normalized_breed()?;
    let (group, specific) = reference.match_breed(&breed);

    let first_word = breed.split_whitespace().next().unwrap_or(&breed);
    let mentions = events
        .iter()
        .filter(|e| e.description.to_lowercase().contains(first_word))
        .count() as i64;

    let raw = 100 - 10 * group.risks.len() as i64 + 5 * mentions;

    Some(BreedAnalysis {
        breed,
        group: group.name.clone(),
        specific,
        risks: group.risks.clone(),
        recommendations: group.recommendations.clone(),
        breed_score: raw.clamp(0, 100) as u8,
    })
}
