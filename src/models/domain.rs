use serde::{Deserialize, Serialize};

/// Student profile being matched against job postings
///
/// Every field is optional on the wire. Use the accessor methods rather than
/// the raw fields so missing values resolve to the same defaults everywhere.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    #[serde(rename = "preferredLocations", default)]
    pub preferred_locations: Option<Vec<String>>,
    #[serde(rename = "remotePref", default)]
    pub remote_pref: Option<String>,
    #[serde(default)]
    pub cgpa: Option<f64>,
}

impl Candidate {
    /// Lowercased, deduplicated skills in the order the student listed them
    pub fn skill_set(&self) -> Vec<String> {
        normalize_skills(self.skills.as_deref())
    }

    /// Preferred locations, empty when none were given
    pub fn preferred_locations(&self) -> &[String] {
        self.preferred_locations.as_deref().unwrap_or(&[])
    }

    /// Whether the student asked for remote work
    pub fn prefers_remote(&self) -> bool {
        self.remote_pref.as_deref() == Some(REMOTE_PREFERENCE)
    }

    /// CGPA, defaulting to 0 when absent
    pub fn cgpa(&self) -> f64 {
        self.cgpa.unwrap_or(0.0)
    }
}

/// Value of `remotePref` that earns the remote location score
pub const REMOTE_PREFERENCE: &str = "remote";

/// Job posting evaluated for fit
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Opportunity {
    /// Opaque identifier, echoed back as-is
    #[serde(rename = "_id", default)]
    pub id: serde_json::Value,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(rename = "skillsRequired", default)]
    pub skills_required: Option<Vec<String>>,
    #[serde(default)]
    pub location: Option<String>,
}

impl Opportunity {
    /// Lowercased, deduplicated required skills in posting order
    pub fn required_skill_set(&self) -> Vec<String> {
        normalize_skills(self.skills_required.as_deref())
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }
}

fn normalize_skills(skills: Option<&[String]>) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::new();
    for skill in skills.unwrap_or(&[]) {
        let lower = skill.to_lowercase();
        if !normalized.contains(&lower) {
            normalized.push(lower);
        }
    }
    normalized
}

/// Qualitative tier derived from a match score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchCategory {
    #[serde(rename = "Top Match")]
    TopMatch,
    #[serde(rename = "Good Match")]
    GoodMatch,
    #[serde(rename = "Near Miss")]
    NearMiss,
    #[serde(rename = "Not Suitable")]
    NotSuitable,
}

impl MatchCategory {
    pub fn label(&self) -> &'static str {
        match self {
            MatchCategory::TopMatch => "Top Match",
            MatchCategory::GoodMatch => "Good Match",
            MatchCategory::NearMiss => "Near Miss",
            MatchCategory::NotSuitable => "Not Suitable",
        }
    }
}

impl std::fmt::Display for MatchCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-attribute scores, each in 0-100
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubScores {
    pub skills: f64,
    pub location: f64,
    pub cgpa: f64,
}

/// Outcome of scoring one candidate against one opportunity
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    /// Composite score in 0-100, rounded to one decimal place
    pub score: f64,
    pub sub_scores: SubScores,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub category: MatchCategory,
}

/// Ranked output item: opportunity identity joined with its match result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub job_id: serde_json::Value,
    pub job_title: Option<String>,
    pub match_score: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub category: MatchCategory,
}

impl Recommendation {
    pub fn from_match(opportunity: Opportunity, result: MatchResult) -> Self {
        Self {
            job_id: opportunity.id,
            job_title: opportunity.title,
            match_score: result.score,
            matched_skills: result.matched_skills,
            missing_skills: result.missing_skills,
            category: result.category,
        }
    }
}

/// Recommendation counts per tier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub top_matches: usize,
    pub good_matches: usize,
    pub near_misses: usize,
}

impl CategorySummary {
    pub fn from_recommendations(recommendations: &[Recommendation]) -> Self {
        recommendations
            .iter()
            .fold(Self::default(), |mut summary, rec| {
                match rec.category {
                    MatchCategory::TopMatch => summary.top_matches += 1,
                    MatchCategory::GoodMatch => summary.good_matches += 1,
                    MatchCategory::NearMiss => summary.near_misses += 1,
                    MatchCategory::NotSuitable => {}
                }
                summary
            })
    }
}
