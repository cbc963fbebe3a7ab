use serde::{Deserialize, Serialize};

use super::enums::LifeStage;

/// The single pet an analysis is about.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PetProfile {
    pub name: Option<String>,
    /// Free-text breed, matched case-insensitively against breed groups.
    pub breed: Option<String>,
    pub age_years: Option<f64>,
    /// Descriptive only. No numeric computation is done with it.
    pub weight: Option<String>,
}

impl PetProfile {
    /// `None` when the age is missing or not a usable number.
    pub fn life_stage(&self) -> Option<LifeStage> {
        self.age_years.and_then(LifeStage::from_age)
    }

    /// Display name, falling back to a neutral phrase.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or("Your pet")
    }

    /// Lowercased, trimmed breed, or `None` when blank.
    pub fn normalized_breed(&self) -> Option<String> {
        self.breed
            .as_deref()
            .map(|b| b.trim().to_lowercase())
            .filter(|b| !b.is_empty())
    }
}
