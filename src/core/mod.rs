// Core algorithm exports
pub mod category;
pub mod matcher;
pub mod scoring;
pub mod skills;
pub mod weights;

pub use category::categorize;
pub use matcher::{Matcher, MatchError, RankedRecommendations};
pub use scoring::{calculate_match_score, calculate_location_score, calculate_cgpa_score};
pub use skills::{calculate_skill_overlap, SkillOverlap};
pub use weights::{ScoringWeights, SCORING_WEIGHTS, MIN_RECOMMENDATION_SCORE};
