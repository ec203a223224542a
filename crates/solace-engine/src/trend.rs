use solace_types::{EmotionalScore, LastSample, MoodTrend};

use crate::signals::extract;

/// Compare this turn's intensity with the previous turn's.
///
/// The baseline is re-extracted from the previous raw message rather than
/// read from its stored score, and is 0 on the first turn. The final
/// `Fluctuating` arm cannot be reached: the three comparisons above it cover
/// every integer difference.
pub fn estimate_trend(current: &EmotionalScore, prior: Option<&LastSample>) -> MoodTrend {
    let current = i64::from(current.total());
    let prior = prior
        .map(|sample| i64::from(extract(&sample.message).total()))
        .unwrap_or(0);

    if current > prior + 2 {
        MoodTrend::Declining
    } else if current < prior - 2 {
        MoodTrend::Improving
    } else if (current - prior).abs() <= 2 {
        MoodTrend::Stable
    } else {
        MoodTrend::Fluctuating
    }
}
