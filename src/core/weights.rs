/// Fixed weights for the composite score
///
/// The three weights must sum to 1.0 so the composite stays within 0-100.
pub const SCORING_WEIGHTS: ScoringWeights = ScoringWeights {
    skills: 0.70,
    location: 0.20,
    cgpa: 0.10,
};

/// Opportunities scoring below this are dropped from the recommendations
pub const MIN_RECOMMENDATION_SCORE: f64 = 40.0;

/// Lower bounds of the category tiers
pub const TOP_MATCH_MIN: f64 = 80.0;
pub const GOOD_MATCH_MIN: f64 = 60.0;
pub const NEAR_MISS_MIN: f64 = MIN_RECOMMENDATION_SCORE;

/// Sub-score used when an attribute carries no signal either way
pub const NEUTRAL_SCORE: f64 = 50.0;

pub const PREFERRED_LOCATION_SCORE: f64 = 100.0;
pub const REMOTE_LOCATION_SCORE: f64 = 70.0;

/// CGPA at or above which the CGPA sub-score is full marks
pub const CGPA_FULL_MARKS: f64 = 6.0;
pub const CGPA_SCALE: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub skills: f64,
    pub location: f64,
    pub cgpa: f64,
}

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.skills + self.location + self.cgpa
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        SCORING_WEIGHTS
    }
}
