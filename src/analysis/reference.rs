use std::path::Path;

use serde::{Deserialize, Serialize};

use super::types::AnalysisError;

pub const BREED_GROUPS_FILE: &str = "breed_groups.json";

/// A family of breeds sharing typical risks (loaded from breed_groups.json).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreedGroup {
    pub name: String,
    /// Lowercase substrings matched against the pet's breed.
    pub keywords: Vec<String>,
    pub risks: Vec<String>,
    pub recommendations: Vec<String>,
}

impl BreedGroup {
    pub fn matches(&self, breed_lower: &str) -> bool {
        self.keywords.iter().any(|k| breed_lower.contains(k.as_str()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct BreedGroupsFile {
    groups: Vec<BreedGroup>,
    general: BreedGroup,
}

/// Loaded breed reference data.
#[derive(Debug, Clone, PartialEq)]
pub struct BreedReference {
    pub groups: Vec<BreedGroup>,
    /// Used when no group matches.
    pub general: BreedGroup,
}

impl BreedReference {
    /// Load reference data from a resources directory.
    pub fn load(resources_dir: &Path) -> Result<Self, AnalysisError> {
        let path = resources_dir.join(BREED_GROUPS_FILE);

        let json = std::fs::read_to_string(&path).map_err(|e| {
            AnalysisError::ReferenceDataLoad(path.display().to_string(), e.to_string())
        })?;
        let file: BreedGroupsFile = serde_json::from_str(&json).map_err(|e| {
            AnalysisError::ReferenceDataParse(BREED_GROUPS_FILE.into(), e.to_string())
        })?;

        tracing::debug!(
            groups = file.groups.len(),
            path = %path.display(),
            "Loaded breed reference data"
        );

        Ok(Self {
            groups: file.groups,
            general: file.general,
        })
    }

    /// Built-in table, identical to the bundled breed_groups.json.
    pub fn builtin() -> Self {
        Self {
            groups: vec![
                group(
                    "Retriever",
                    &["labrador", "retriever"],
                    &["Hip dysplasia risk", "Obesity tendency", "Joint issues"],
                    &["Regular joint monitoring", "Weight management", "Low-impact exercise"],
                ),
                group(
                    "Shepherd",
                    &["german shepherd"],
                    &["Hip dysplasia", "Bloat risk", "Degenerative myelopathy"],
                    &["Hip screening", "Feeding management", "Neurological monitoring"],
                ),
                group(
                    "Brachycephalic",
                    &["bulldog", "pug"],
                    &["Breathing issues", "Skin problems", "Heat sensitivity"],
                    &["Temperature monitoring", "Skin care", "Exercise moderation"],
                ),
            ],
            general: group(
                "General",
                &[],
                &["General breed monitoring recommended"],
                &["Regular health checkups", "Breed-specific research"],
            ),
        }
    }

    /// First group whose keyword appears in the breed, else the general group.
    pub fn match_breed(&self, breed_lower: &str) -> (&BreedGroup, bool) {
        match self.groups.iter().find(|g| g.matches(breed_lower)) {
            Some(g) => (g, true),
            None => (&self.general, false),
        }
    }
}

impl Default for BreedReference {
    fn default() -> Self {
        Self::builtin()
    }
}

fn group(name: &str, keywords: &[&str], risks: &[&str], recommendations: &[&str]) -> BreedGroup {
    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    BreedGroup {
        name: name.into(),
        keywords: owned(keywords),
        risks: owned(risks),
        recommendations: owned(recommendations),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn labrador_matches_retriever_group() {
        let reference = BreedReference::builtin();
        let (g, specific) = reference.match_breed("labrador retriever");
        assert_eq!(g.name, "Retriever");
        assert!(specific);
    }

    #[test]
    fn pug_matches_brachycephalic() {
        let reference = BreedReference::builtin();
        assert_eq!(reference.match_breed("pug").0.name, "Brachycephalic");
        assert_eq!(reference.match_breed("french bulldog").0.name, "Brachycephalic");
    }

    #[test]
    fn unknown_breed_is_general() {
        let reference = BreedReference::builtin();
        let (g, specific) = reference.match_breed("beagle");
        assert_eq!(g.name, "General");
        assert!(!specific);
    }

    #[test]
    fn bundled_file_matches_builtin() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("resources");
        let loaded = BreedReference::load(&dir).unwrap();
        assert_eq!(loaded, BreedReference::builtin());
    }

    #[test]
    fn load_missing_file_is_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = BreedReference::load(dir.path()).unwrap_err();
        assert!(matches!(err, AnalysisError::ReferenceDataLoad(_, _)));
    }

    #[test]
    fn load_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut f = std::fs::File::create(dir.path().join(BREED_GROUPS_FILE)).unwrap();
        f.write_all(b"{ not json").unwrap();
        let err = BreedReference::load(dir.path()).unwrap_err();
        assert!(matches!(err, AnalysisError::ReferenceDataParse(_, _)));
    }
}
