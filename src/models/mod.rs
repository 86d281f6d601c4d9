// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Candidate, Opportunity, MatchCategory, MatchResult, SubScores, Recommendation, CategorySummary};
pub use requests::RecommendRequest;
pub use responses::{RecommendResponse, HealthResponse, ErrorResponse};
