/// Macro to generate a closed enum whose variants carry a fixed display label.
/// The label doubles as the serde representation, so results serialize to the
/// same strings the route layer shows.
macro_rules! label_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            ::serde::Serialize, ::serde::Deserialize,
        )]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$(Self::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub(crate) use label_enum;

use crate::analysis::rules::{ADULT_MAX_AGE_YEARS, PUPPY_MAX_AGE_YEARS};

label_enum!(
    /// Kind of recorded care action.
    Category {
        Vaccination => "Vaccination",
        WeightCheck => "Weight Check",
        DentalCleaning => "Dental Cleaning",
        Checkup => "Checkup",
        Surgery => "Surgery",
        Medication => "Medication",
        Other => "Other",
    }
);

impl Category {
    /// Lenient label lookup. Case, spaces, dashes and underscores are ignored;
    /// anything unrecognized is `Other`.
    pub fn from_label(label: &str) -> Self {
        let wanted = squash(label);
        Self::ALL
            .iter()
            .copied()
            .find(|c| squash(c.as_str()) == wanted)
            .unwrap_or(Self::Other)
    }
}

fn squash(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

label_enum!(
    /// Analysis area. Declaration order is the tie-break order for
    /// recommendations sharing a priority.
    CareArea {
        Vaccination => "Vaccination",
        Dental => "Dental",
        Activity => "Activity",
        Weight => "Weight",
        Checkup => "Checkup",
        Breed => "Breed",
        LifeStage => "Life Stage",
        General => "General",
    }
);

impl CareArea {
    /// Areas backed by a single event category.
    pub fn for_category(category: Category) -> Option<Self> {
        match category {
            Category::Vaccination => Some(Self::Vaccination),
            Category::WeightCheck => Some(Self::Weight),
            Category::DentalCleaning => Some(Self::Dental),
            Category::Checkup => Some(Self::Checkup),
            Category::Surgery | Category::Medication | Category::Other => None,
        }
    }
}

label_enum!(
    /// Ordered High < Medium < Low so an ascending sort puts urgent items first.
    Priority {
        High => "High",
        Medium => "Medium",
        Low => "Low",
    }
);

label_enum!(LifeStage {
    Puppy => "Puppy",
    Adult => "Adult",
    Senior => "Senior",
});

impl LifeStage {
    /// Bracket for an age in years. `None` for NaN, infinite or negative ages.
    pub fn from_age(age_years: f64) -> Option<Self> {
        if !age_years.is_finite() || age_years < 0.0 {
            return None;
        }
        let stage = if age_years <= PUPPY_MAX_AGE_YEARS {
            Self::Puppy
        } else if age_years <= ADULT_MAX_AGE_YEARS {
            Self::Adult
        } else {
            Self::Senior
        };
        Some(stage)
    }
}
