use crate::models::{Candidate, Opportunity, MatchResult, SubScores};
use crate::core::{
    category::categorize,
    skills::calculate_skill_overlap,
    weights::{
        ScoringWeights, CGPA_FULL_MARKS, CGPA_SCALE, NEUTRAL_SCORE, PREFERRED_LOCATION_SCORE,
        REMOTE_LOCATION_SCORE,
    },
};

/// Calculate a match score (0-100) for a job posting against a student profile
///
/// Scoring formula:
/// score = (
///     skills_score * 0.70 +      # Share of required skills the student has
///     location_score * 0.20 +    # Preferred city > remote > unknown
///     cgpa_score * 0.10          # Full marks from 6.0, floor of 50
/// )
///
/// The result is rounded to one decimal place. Missing fields on either side
/// fall back to neutral defaults, so this never fails.
pub fn calculate_match_score(
    candidate: &Candidate,
    opportunity: &Opportunity,
    weights: &ScoringWeights,
) -> MatchResult {
    let overlap = calculate_skill_overlap(candidate, opportunity);
    let location_score = calculate_location_score(candidate, opportunity);
    let cgpa_score = calculate_cgpa_score(candidate.cgpa());

    let sub_scores = SubScores {
        skills: overlap.score,
        location: location_score,
        cgpa: cgpa_score,
    };

    let score = round_to_tenth(combine(&sub_scores, weights));

    MatchResult {
        score,
        sub_scores,
        matched_skills: overlap.matched,
        missing_skills: overlap.missing,
        category: categorize(score),
    }
}

/// Weighted combination of the sub-scores, unrounded
#[inline]
pub fn combine(sub_scores: &SubScores, weights: &ScoringWeights) -> f64 {
    sub_scores.skills * weights.skills
        + sub_scores.location * weights.location
        + sub_scores.cgpa * weights.cgpa
}

/// Calculate location score (0-100)
///
/// First rule that applies wins: the posting is in one of the student's
/// preferred locations, then the student prefers remote work, then neutral.
#[inline]
pub fn calculate_location_score(candidate: &Candidate, opportunity: &Opportunity) -> f64 {
    let preferred = candidate.preferred_locations();
    let in_preferred = match opportunity.location() {
        Some(location) => preferred.iter().any(|p| p == location),
        None => false,
    };

    if in_preferred {
        PREFERRED_LOCATION_SCORE
    } else if candidate.prefers_remote() {
        REMOTE_LOCATION_SCORE
    } else {
        NEUTRAL_SCORE
    }
}

/// Calculate CGPA score (0-100)
/// Full marks from 6.0 upwards, linear below with a floor of 50
#[inline]
pub fn calculate_cgpa_score(cgpa: f64) -> f64 {
    if cgpa >= CGPA_FULL_MARKS {
        return 100.0;
    }

    (cgpa / CGPA_SCALE * 100.0).max(NEUTRAL_SCORE)
}

/// Round to one decimal place by the exact binary value, ties to even
#[inline]
pub fn round_to_tenth(value: f64) -> f64 {
    format!("{:.1}", value).parse().unwrap_or(value)
}
