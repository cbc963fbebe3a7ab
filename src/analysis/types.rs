use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::models::enums::label_enum;
use crate::models::{CareArea, Category, HealthEvent, LifeStage, PetProfile, Priority};
use crate::validation::ValidationError;

// ---------------------------------------------------------------------------
// Classifier labels
// ---------------------------------------------------------------------------

label_enum!(
    /// Count-based trend label. Despite the names, no numeric differencing is
    /// done: every label comes from how many records exist.
    Trend {
        NoData => "No Data",
        NeedsImprovement => "Needs Improvement",
        Good => "Good",
        Excellent => "Excellent",
        InsufficientData => "Insufficient Data",
        Adequate => "Adequate",
        WellMonitored => "Well Monitored",
        NeedsAttention => "Needs Attention",
        WellMaintained => "Well Maintained",
        LowActivity => "Low Activity",
        Moderate => "Moderate",
        Active => "Active",
        VeryActive => "Very Active",
    }
);

label_enum!(Compliance {
    UpToDate => "Up to Date",
    DueSoon => "Due Soon",
    Overdue => "Overdue",
    NoRecords => "No Records",
});

label_enum!(OverallTrend {
    InsufficientData => "Insufficient Data",
    Improving => "Improving",
    Declining => "Declining",
    Stable => "Stable",
});

label_enum!(Grade {
    Excellent => "Excellent",
    Good => "Good",
    Fair => "Fair",
    NeedsAttention => "Needs Attention",
});

impl Grade {
    pub fn from_score(score: u8) -> Self {
        match score {
            90..=u8::MAX => Self::Excellent,
            75..=89 => Self::Good,
            60..=74 => Self::Fair,
            _ => Self::NeedsAttention,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Excellent => "Your pet is in excellent health with comprehensive care",
            Self::Good => "Your pet is in good health with regular monitoring",
            Self::Fair => "Your pet's health is fair, some areas need attention",
            Self::NeedsAttention => "Your pet's health needs immediate attention and care",
        }
    }
}

label_enum!(Longevity {
    Excellent => "Excellent - Above Average",
    Good => "Good - Average to Above Average",
    Fair => "Fair - Average",
    BelowAverage => "Below Average - Needs Attention",
});

label_enum!(VisitFrequency {
    Excellent => "Excellent",
    Good => "Good",
    NeedsImprovement => "Needs Improvement",
});

label_enum!(Outlook {
    Excellent => "Excellent - Health improving",
    Good => "Good - Maintaining health",
    Stable => "Stable",
    Concerning => "Concerning - Needs attention",
});

label_enum!(Confidence {
    High => "High",
    Medium => "Medium",
});

label_enum!(Season {
    Spring => "Spring",
    Summer => "Summer",
    Fall => "Fall",
    Winter => "Winter",
});

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Per-area classifier output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryStatus {
    pub area: CareArea,
    /// Compliance label for recurring areas, trend label otherwise.
    pub label: String,
    pub trend: Trend,
    pub compliance: Option<Compliance>,
    /// `Some(High)` only when the area has never been recorded.
    pub risk_level: Option<Priority>,
    /// Supporting record count (window count for Activity).
    pub count: usize,
    pub days_since_last: Option<i64>,
}

/// Life-stage bracket with its typical risks and care suggestions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifeStageAnalysis {
    pub stage: LifeStage,
    pub risks: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Breed-group match for the pet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreedAnalysis {
    pub breed: String,
    pub group: String,
    /// False when the breed fell through to the general group.
    pub specific: bool,
    pub risks: Vec<String>,
    pub recommendations: Vec<String>,
    pub breed_score: u8,
}

/// Everything the recommendation generator keys on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub statuses: BTreeMap<CareArea, CategoryStatus>,
    pub overall_trend: OverallTrend,
    pub life_stage: Option<LifeStageAnalysis>,
    pub breed: Option<BreedAnalysis>,
}

impl Classification {
    pub fn status(&self, area: CareArea) -> Option<&CategoryStatus> {
        self.statuses.get(&area)
    }

    pub fn compliance(&self, area: CareArea) -> Option<Compliance> {
        self.status(area).and_then(|s| s.compliance)
    }

    pub fn trend(&self, area: CareArea) -> Option<Trend> {
        self.status(area).map(|s| s.trend)
    }
}

// ---------------------------------------------------------------------------
// Outputs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub priority: Priority,
    pub area: CareArea,
    pub title: String,
    pub text: String,
    pub action: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskEntry {
    pub area: CareArea,
    pub level: Priority,
    pub message: String,
    pub mitigation: String,
}

/// A threshold failure worth surfacing on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthAlert {
    /// Stable for the same area and condition, so repeated runs agree.
    pub id: Uuid,
    pub area: CareArea,
    pub severity: Priority,
    pub message: String,
}

/// Projected next due date for a recurring category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    pub category: Category,
    pub last_occurred_at: DateTime<Utc>,
    pub next_due_at: DateTime<Utc>,
    /// Negative once the due date has passed.
    pub days_until_due: i64,
    pub within_lookahead: bool,
    /// True when the due date came from the event instead of the interval table.
    pub caller_supplied: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpcomingItem {
    pub category: Category,
    pub due_at: DateTime<Utc>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonalCounts {
    pub spring: usize,
    pub summer: usize,
    pub fall: usize,
    pub winter: usize,
}

impl SeasonalCounts {
    pub fn total(&self) -> usize {
        self.spring + self.summer + self.fall + self.winter
    }
}

/// Weight parsed out of a weight-check description. Descriptive only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightReading {
    pub value: f64,
    pub unit: String,
    pub recorded_at: DateTime<Utc>,
}

/// Any-category record volume over the trend window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VetVisitAnalysis {
    pub total_visits: usize,
    pub recent_visits: usize,
    pub frequency: VisitFrequency,
    pub vet_score: u8,
    pub recommendation: Option<String>,
}

/// Medication and surgery records. Counts only; dosages are not tracked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicationHistory {
    /// Medication records plus any record whose description mentions medication.
    pub medication_records: usize,
    pub surgery_records: usize,
    pub medication_score: u8,
    pub recommendation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellnessForecast {
    pub outlook: Outlook,
    pub confidence: Confidence,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LongevityFactors {
    pub positive: Vec<String>,
    pub negative: Vec<String>,
    pub assessment: Longevity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub title: String,
    pub description: String,
    pub key_points: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insights {
    pub summary: Summary,
    pub wellness_score: u8,
    pub longevity: Longevity,
    pub milestones: Vec<Milestone>,
    pub seasonal: SeasonalCounts,
    pub latest_weight: Option<WeightReading>,
    pub vet_visits: VetVisitAnalysis,
    pub medication_history: MedicationHistory,
    pub forecast: WellnessForecast,
    pub longevity_factors: LongevityFactors,
    /// Short owner-facing to-do list, in fixed order.
    pub next_steps: Vec<String>,
}

/// Aggregate result of one analysis. Not persisted by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub score: u8,
    pub grade: Grade,
    pub category_statuses: BTreeMap<CareArea, CategoryStatus>,
    pub overall_trend: OverallTrend,
    pub life_stage: Option<LifeStageAnalysis>,
    pub breed: Option<BreedAnalysis>,
    pub recommendations: Vec<Recommendation>,
    pub risks: Vec<RiskEntry>,
    pub alerts: Vec<HealthAlert>,
    /// `None` means no prediction is available, not "not yet due".
    pub projections: BTreeMap<Category, Option<Projection>>,
    pub upcoming: Vec<UpcomingItem>,
    pub insights: Insights,
    pub analyzed_at: DateTime<Utc>,
    /// Set when the result stands in for a failed upstream read.
    pub is_fallback: bool,
}

// ---------------------------------------------------------------------------
// AnalysisError
// ---------------------------------------------------------------------------

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("No pet profile found for owner {0}")]
    PetNotFound(Uuid),

    #[error("Health event not found: {0}")]
    EventNotFound(Uuid),

    #[error("Reference data load failed ({0}): {1}")]
    ReferenceDataLoad(String, String),

    #[error("Reference data parse failed ({0}): {1}")]
    ReferenceDataParse(String, String),

    #[error("Internal lock failed")]
    LockFailed,
}

// ---------------------------------------------------------------------------
// Seams
// ---------------------------------------------------------------------------

/// The analysis entry point.
pub trait HealthAnalyzer {
    /// Analyze one pet's history as of `now`. Never fails: sparse or missing
    /// data degrades to worst-case values.
    fn analyze(
        &self,
        pet: &PetProfile,
        events: &[HealthEvent],
        now: DateTime<Utc>,
    ) -> AnalysisResult;
}

/// Reader for the event store and pet profiles, owned by the application.
pub trait HealthRecordSource {
    fn pet_profile(&self, owner_id: &Uuid) -> Result<Option<PetProfile>, AnalysisError>;

    /// All events for the owner, in any order.
    fn events_for_owner(&self, owner_id: &Uuid) -> Result<Vec<HealthEvent>, AnalysisError>;
}
