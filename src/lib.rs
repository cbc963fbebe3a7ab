pub mod config;
pub mod models;
pub mod validation;
pub mod analysis; // Scoring, classification, recommendations, projections

pub use analysis::{
    analyze, AnalysisError, AnalysisResult, DefaultHealthEngine, HealthAnalyzer,
    HealthRecordSource, InMemoryRecordStore,
};
pub use models::{CareArea, Category, HealthEvent, LifeStage, PetProfile, Priority};
pub use validation::{HealthEventInput, PetProfileInput, ValidationError};
