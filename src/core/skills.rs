use crate::core::weights::NEUTRAL_SCORE;
use crate::models::{Candidate, Opportunity};

/// Skill overlap between a student and a posting
#[derive(Debug, Clone, PartialEq)]
pub struct SkillOverlap {
    /// Sub-score in 0-100
    pub score: f64,
    /// Shared skills, in the student's order
    pub matched: Vec<String>,
    /// Required skills the student lacks, in the posting's order
    pub missing: Vec<String>,
}

/// Calculate the skills sub-score
///
/// Skills are compared by exact lowercase equality. A posting with no
/// required skills scores neutral with empty matched/missing lists.
pub fn calculate_skill_overlap(candidate: &Candidate, opportunity: &Opportunity) -> SkillOverlap {
    let required = opportunity.required_skill_set();
    if required.is_empty() {
        return SkillOverlap {
            score: NEUTRAL_SCORE,
            matched: Vec::new(),
            missing: Vec::new(),
        };
    }

    let held = candidate.skill_set();

    let matched: Vec<String> = held
        .iter()
        .filter(|skill| required.contains(skill))
        .cloned()
        .collect();

    let missing: Vec<String> = required
        .iter()
        .filter(|skill| !held.contains(skill))
        .cloned()
        .collect();

    let score = matched.len() as f64 / required.len() as f64 * 100.0;

    SkillOverlap { score, matched, missing }
}
