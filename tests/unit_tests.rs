// Unit tests for Placement Match

use placement_match::core::{
    categorize,
    scoring::{calculate_cgpa_score, calculate_location_score, calculate_match_score},
    skills::calculate_skill_overlap,
    weights::{ScoringWeights, SCORING_WEIGHTS},
};
use placement_match::models::{Candidate, MatchCategory, Opportunity};

fn strings(values: &[&str]) -> Option<Vec<String>> {
    Some(values.iter().map(|s| s.to_string()).collect())
}

fn create_test_candidate() -> Candidate {
    Candidate {
        skills: strings(&["Python", "SQL", "Excel"]),
        preferred_locations: strings(&["Bangalore", "Pune"]),
        remote_pref: None,
        cgpa: Some(8.2),
    }
}

fn create_test_opportunity(skills: &[&str], location: &str) -> Opportunity {
    Opportunity {
        id: serde_json::json!("job-1"),
        title: Some("Analyst".to_string()),
        skills_required: strings(skills),
        location: Some(location.to_string()),
    }
}

#[test]
fn test_weights_sum_to_one() {
    assert!((SCORING_WEIGHTS.sum() - 1.0).abs() < 1e-9);
    assert_eq!(ScoringWeights::default(), SCORING_WEIGHTS);
}

#[test]
fn test_case_insensitive_skill_match() {
    let candidate = Candidate {
        skills: strings(&["Python"]),
        ..Default::default()
    };
    let opportunity = create_test_opportunity(&["python"], "Pune");

    let overlap = calculate_skill_overlap(&candidate, &opportunity);

    assert_eq!(overlap.score, 100.0);
    assert!(overlap.missing.is_empty());
}

#[test]
fn test_empty_requirements_neutral() {
    let overlap = calculate_skill_overlap(&create_test_candidate(), &create_test_opportunity(&[], "Pune"));
    assert_eq!(overlap.score, 50.0);
}

#[test]
fn test_preferred_location_full_marks() {
    let candidate = create_test_candidate();
    assert_eq!(calculate_location_score(&candidate, &create_test_opportunity(&[], "Pune")), 100.0);
    assert_eq!(calculate_location_score(&candidate, &create_test_opportunity(&[], "Chennai")), 50.0);
}

#[test]
fn test_remote_does_not_stack_with_preferred() {
    let mut candidate = create_test_candidate();
    candidate.remote_pref = Some("remote".to_string());

    assert_eq!(calculate_location_score(&candidate, &create_test_opportunity(&[], "Pune")), 100.0);
    assert_eq!(calculate_location_score(&candidate, &create_test_opportunity(&[], "Chennai")), 70.0);
}

#[test]
fn test_cgpa_floor() {
    assert_eq!(calculate_cgpa_score(0.0), 50.0);
    assert_eq!(calculate_cgpa_score(4.9), 50.0);
    assert!((calculate_cgpa_score(5.8) - 58.0).abs() < 1e-9);
    assert_eq!(calculate_cgpa_score(6.0), 100.0);
}

#[test]
fn test_composite_score_and_category() {
    let candidate = create_test_candidate();
    // 2 of 3 skills, preferred city, cgpa above 6
    let opportunity = create_test_opportunity(&["python", "sql", "tableau"], "Bangalore");

    let result = calculate_match_score(&candidate, &opportunity, &SCORING_WEIGHTS);

    // 66.67 * 0.7 + 100 * 0.2 + 100 * 0.1 = 76.67
    assert_eq!(result.score, 76.7);
    assert_eq!(result.category, MatchCategory::GoodMatch);
    assert_eq!(result.matched_skills, vec!["python", "sql"]);
    assert_eq!(result.missing_skills, vec!["tableau"]);
}

#[test]
fn test_score_within_bounds() {
    let candidates = vec![Candidate::default(), create_test_candidate()];
    let opportunities = vec![
        Opportunity::default(),
        create_test_opportunity(&["python"], "Pune"),
        create_test_opportunity(&["cobol", "fortran"], "Mars"),
    ];

    for candidate in &candidates {
        for opportunity in &opportunities {
            let result = calculate_match_score(candidate, opportunity, &SCORING_WEIGHTS);
            assert!(
                result.score >= 0.0 && result.score <= 100.0,
                "Score {} is out of range [0, 100]",
                result.score
            );
        }
    }
}

#[test]
fn test_category_boundaries() {
    assert_eq!(categorize(40.0), MatchCategory::NearMiss);
    assert_eq!(categorize(60.0), MatchCategory::GoodMatch);
    assert_eq!(categorize(80.0), MatchCategory::TopMatch);
    assert_eq!(categorize(39.9), MatchCategory::NotSuitable);
}
