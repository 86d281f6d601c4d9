use crate::core::weights::{GOOD_MATCH_MIN, NEAR_MISS_MIN, TOP_MATCH_MIN};
use crate::models::MatchCategory;

/// Map a composite score onto its tier
///
/// Lower bounds are inclusive: 80 is a top match, 60 a good match and 40 a
/// near miss.
#[inline]
pub fn categorize(score: f64) -> MatchCategory {
    if score >= TOP_MATCH_MIN {
        MatchCategory::TopMatch
    } else if score >= GOOD_MATCH_MIN {
        MatchCategory::GoodMatch
    } else if score >= NEAR_MISS_MIN {
        MatchCategory::NearMiss
    } else {
        MatchCategory::NotSuitable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert_eq!(categorize(80.0), MatchCategory::TopMatch);
        assert_eq!(categorize(79.9), MatchCategory::GoodMatch);
        assert_eq!(categorize(60.0), MatchCategory::GoodMatch);
        assert_eq!(categorize(59.9), MatchCategory::NearMiss);
        assert_eq!(categorize(40.0), MatchCategory::NearMiss);
        assert_eq!(categorize(39.9), MatchCategory::NotSuitable);
    }

    #[test]
    fn test_extremes() {
        assert_eq!(categorize(100.0), MatchCategory::TopMatch);
        assert_eq!(categorize(0.0), MatchCategory::NotSuitable);
    }
}
