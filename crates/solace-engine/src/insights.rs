use solace_types::{Concern, MoodTrend, RiskLevel, MAX_INSIGHTS};

pub const DISTRESS_INSIGHT: &str =
    "User is experiencing significant distress and may need immediate support";
pub const SLEEP_INSIGHT: &str = "Anxiety appears to be affecting sleep patterns";
pub const CONNECTION_INSIGHT: &str = "Social connection may help alleviate depressive symptoms";
pub const WORSENING_INSIGHT: &str =
    "Emotional state appears to be worsening - increased support may be needed";
pub const POSITIVE_INSIGHT: &str =
    "Positive trend observed - current coping strategies may be effective";

/// Observations for the current turn, most urgent first, at most [`MAX_INSIGHTS`]
pub fn generate_insights(concerns: &[Concern], risk: RiskLevel, trend: MoodTrend) -> Vec<String> {
    let has = |concern: Concern| concerns.contains(&concern);

    let candidates = [
        (risk.is_elevated(), DISTRESS_INSIGHT),
        (has(Concern::Anxiety) && has(Concern::Sleep), SLEEP_INSIGHT),
        (has(Concern::Depression) && has(Concern::Loneliness), CONNECTION_INSIGHT),
        (trend == MoodTrend::Declining, WORSENING_INSIGHT),
        (trend == MoodTrend::Improving, POSITIVE_INSIGHT),
    ];

    candidates
        .into_iter()
        .filter(|(applies, _)| *applies)
        .map(|(_, insight)| insight.to_string())
        .take(MAX_INSIGHTS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_insights_for_calm_conversation() {
        assert!(generate_insights(&[], RiskLevel::Low, MoodTrend::Stable).is_empty());
    }

    #[test]
    fn test_sleep_insight() {
        let insights = generate_insights(
            &[Concern::Anxiety, Concern::Sleep],
            RiskLevel::Low,
            MoodTrend::Stable,
        );
        assert_eq!(insights, vec![SLEEP_INSIGHT.to_string()]);
    }

    #[test]
    fn test_truncated_to_three_in_priority_order() {
        let insights = generate_insights(
            &[
                Concern::Anxiety,
                Concern::Sleep,
                Concern::Depression,
                Concern::Loneliness,
            ],
            RiskLevel::Crisis,
            MoodTrend::Declining,
        );
        assert_eq!(
            insights,
            vec![
                DISTRESS_INSIGHT.to_string(),
                SLEEP_INSIGHT.to_string(),
                CONNECTION_INSIGHT.to_string(),
            ]
        );
    }

    #[test]
    fn test_medium_risk_is_not_distress() {
        let insights = generate_insights(&[], RiskLevel::Medium, MoodTrend::Improving);
        assert_eq!(insights, vec![POSITIVE_INSIGHT.to_string()]);
    }
}
