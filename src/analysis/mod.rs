pub mod rules;
pub mod types;
pub mod helpers;
pub mod scoring;
pub mod classify;
pub mod profile;
pub mod reference;
pub mod recommend;
pub mod alerts;
pub mod projection;
pub mod insights;
pub mod messages;
pub mod engine;
pub mod store;

pub use engine::{analyze, DefaultHealthEngine};
pub use reference::{BreedGroup, BreedReference};
pub use store::InMemoryRecordStore;
pub use types::{
    AnalysisError, AnalysisResult, CategoryStatus, Classification, Compliance, Grade,
    HealthAlert, HealthAnalyzer, HealthRecordSource, Insights, OverallTrend, Projection,
    Recommendation, RiskEntry, Trend, UpcomingItem,
};
