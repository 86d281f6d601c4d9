use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{Candidate, Opportunity};

/// Request to rank a batch of job postings for one student
///
/// Missing `student` or `jobs` keys fall back to an empty profile and an
/// empty batch.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RecommendRequest {
    #[serde(default)]
    pub student: Candidate,
    #[serde(default)]
    pub jobs: Vec<Opportunity>,
    /// Keep only the first `limit` ranked recommendations
    #[validate(range(min = 1, max = 100))]
    #[serde(default)]
    pub limit: Option<usize>,
}
