//! Placement Match - weighted job recommendation service
//!
//! This library scores a student profile against a batch of job postings,
//! combining skill overlap, location preference and CGPA into one match
//! score, then filters, tiers and ranks the postings.

pub mod config;
pub mod core;
pub mod logging;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use core::{Matcher, MatchError, RankedRecommendations, calculate_match_score, categorize};
pub use models::{Candidate, Opportunity, MatchCategory, MatchResult, Recommendation, RecommendRequest, RecommendResponse};
