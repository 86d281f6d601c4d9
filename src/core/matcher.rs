use thiserror::Error;
use validator::Validate;
use crate::models::{
    Candidate, Opportunity, Recommendation, CategorySummary, RecommendRequest, RecommendResponse,
};
use crate::core::{
    scoring::calculate_match_score,
    weights::{MIN_RECOMMENDATION_SCORE, SCORING_WEIGHTS},
};

/// Default cap on the number of postings accepted in one request
pub const DEFAULT_MAX_JOBS: usize = 10_000;

/// Errors that fail a whole recommend request
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("Malformed payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Too many jobs: {count} submitted, at most {max} allowed")]
    TooManyJobs { count: usize, max: usize },
}

/// Result of the ranking process
#[derive(Debug, Clone, PartialEq)]
pub struct RankedRecommendations {
    pub recommendations: Vec<Recommendation>,
    /// Every posting considered, including the ones filtered out
    pub total_analyzed: usize,
    /// Tier counts over all retained postings, before any limit
    pub summary: CategorySummary,
}

impl From<RankedRecommendations> for RecommendResponse {
    fn from(ranked: RankedRecommendations) -> Self {
        Self {
            recommendations: ranked.recommendations,
            total_analyzed: ranked.total_analyzed,
            summary: ranked.summary,
        }
    }
}

/// Ranking orchestrator
///
/// # Pipeline Stages
/// 1. Score every posting
/// 2. Drop postings below the recommendation threshold
/// 3. Stable sort by score, descending
/// 4. Count tiers, then apply the optional limit
///
/// Holds no per-request state, so one instance is shared by every worker.
#[derive(Debug, Clone)]
pub struct Matcher {
    max_jobs: usize,
}

impl Matcher {
    pub fn new(max_jobs: usize) -> Self {
        Self { max_jobs }
    }

    pub fn max_jobs(&self) -> usize {
        self.max_jobs
    }

    /// Rank job postings for a student
    ///
    /// # Arguments
    /// * `candidate` - The student profile
    /// * `opportunities` - Postings in the order received
    /// * `limit` - Maximum number of recommendations to return, if any
    pub fn rank(
        &self,
        candidate: &Candidate,
        opportunities: Vec<Opportunity>,
        limit: Option<usize>,
    ) -> RankedRecommendations {
        let total_analyzed = opportunities.len();

        let mut recommendations: Vec<Recommendation> = opportunities
            .into_iter()
            .filter_map(|opportunity| {
                let result = calculate_match_score(candidate, &opportunity, &SCORING_WEIGHTS);

                tracing::debug!(
                    job_id = %opportunity.id,
                    skills = result.sub_scores.skills,
                    location = result.sub_scores.location,
                    cgpa = result.sub_scores.cgpa,
                    score = result.score,
                    "Scored job"
                );

                if result.score >= MIN_RECOMMENDATION_SCORE {
                    Some(Recommendation::from_match(opportunity, result))
                } else {
                    None
                }
            })
            .collect();

        // sort_by is stable, so equal scores keep their input order
        recommendations.sort_by(|a, b| {
            b.match_score
                .partial_cmp(&a.match_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let summary = CategorySummary::from_recommendations(&recommendations);

        if let Some(limit) = limit {
            recommendations.truncate(limit);
        }

        RankedRecommendations {
            recommendations,
            total_analyzed,
            summary,
        }
    }

    /// Rank postings from a raw JSON payload
    ///
    /// Missing `student` or `jobs` keys default to empty values. Any field of
    /// the wrong type fails the whole request; no partial results are returned.
    pub fn recommend(&self, payload: serde_json::Value) -> Result<RecommendResponse, MatchError> {
        let request: RecommendRequest = serde_json::from_value(payload)?;
        request.validate()?;

        if request.jobs.len() > self.max_jobs {
            return Err(MatchError::TooManyJobs {
                count: request.jobs.len(),
                max: self.max_jobs,
            });
        }

        let ranked = self.rank(&request.student, request.jobs, request.limit);
        Ok(ranked.into())
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_JOBS)
    }
}
