use solace_types::{EmotionalScore, RiskLevel};

use crate::signals::CRISIS_WEIGHT;

/// Map a score to a risk level; the first matching rule wins
pub fn classify(score: &EmotionalScore) -> RiskLevel {
    let total = score.total();

    if score.crisis >= CRISIS_WEIGHT {
        RiskLevel::Crisis
    } else if total >= 8 || score.anxiety >= 4 || score.depression >= 4 {
        RiskLevel::High
    } else if total >= 4 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crisis_wins_over_everything() {
        let score = EmotionalScore {
            crisis: 5,
            ..Default::default()
        };
        assert_eq!(classify(&score), RiskLevel::Crisis);
    }

    #[test]
    fn test_single_category_at_four_is_high() {
        let score = EmotionalScore {
            depression: 4,
            ..Default::default()
        };
        assert_eq!(classify(&score), RiskLevel::High);
    }

    #[test]
    fn test_total_thresholds() {
        let medium = EmotionalScore {
            anger: 2,
            stress: 2,
            ..Default::default()
        };
        assert_eq!(classify(&medium), RiskLevel::Medium);

        let high = EmotionalScore {
            anxiety: 2,
            anger: 2,
            loneliness: 2,
            stress: 2,
            ..Default::default()
        };
        assert_eq!(classify(&high), RiskLevel::High);
    }

    #[test]
    fn test_zero_is_low() {
        assert_eq!(classify(&EmotionalScore::default()), RiskLevel::Low);
    }
}
