// Rolling concern and coping-strategy lists

use regex::Regex;
use solace_types::{Concern, CopingStrategy, MAX_TRACKED};
use std::sync::LazyLock;

use crate::patterns::keywords;

static CONCERN_PATTERNS: LazyLock<Vec<(Concern, Regex)>> = LazyLock::new(|| {
    vec![
        (Concern::Anxiety, keywords("anxious|anxiety|worried|panic|nervous|scared|fear")),
        (Concern::Depression, keywords("sad|depressed|hopeless|empty|numb|down|blue")),
        (Concern::Anger, keywords("angry|frustrated|irritated|mad|rage")),
        (Concern::Loneliness, keywords("lonely|alone|isolated|no one understands")),
        (Concern::Stress, keywords("stress|stressed|pressure|burnout|overwhelmed")),
        (Concern::Sleep, keywords("can't sleep|insomnia|tired but can't sleep")),
        (
            Concern::Relationships,
            keywords("friend|family|partner|boyfriend|girlfriend|husband|wife"),
        ),
        (Concern::Work, keywords("work|job|career|boss|colleague|office")),
        (Concern::School, keywords("school|college|university|exam|test|study")),
    ]
});

static STRATEGY_PATTERNS: LazyLock<Vec<(CopingStrategy, Regex)>> = LazyLock::new(|| {
    vec![
        (
            CopingStrategy::Breathing,
            keywords("breathe|breathing|calm breath|box breathing|4-7-8"),
        ),
        (
            CopingStrategy::Grounding,
            keywords("grounding|5-4-3-2-1|present moment|here and now"),
        ),
        (
            CopingStrategy::Mindfulness,
            keywords("mindful|meditation|present|observe|notice"),
        ),
        (CopingStrategy::Relaxation, keywords("relax|muscle relaxation|calm|peace")),
        (CopingStrategy::SelfCare, keywords("self.?care|rest|break|pause|slow down")),
    ]
});

/// Concerns after folding in a user message
pub fn update_concerns(text: &str, prior: &[Concern]) -> Vec<Concern> {
    update_tags(text, prior, &CONCERN_PATTERNS)
}

/// Strategies after folding in an assistant reply
pub fn update_strategies(assistant_text: &str, prior: &[CopingStrategy]) -> Vec<CopingStrategy> {
    update_tags(assistant_text, prior, &STRATEGY_PATTERNS)
}

fn update_tags<T: Copy + PartialEq>(text: &str, prior: &[T], patterns: &[(T, Regex)]) -> Vec<T> {
    let text = text.to_lowercase();
    let mut tags = prior.to_vec();
    for (tag, pattern) in patterns {
        if pattern.is_match(&text) {
            push_bounded(&mut tags, *tag);
        }
    }
    tags
}

/// Append unless present, evicting the oldest entry past [`MAX_TRACKED`]
fn push_bounded<T: PartialEq>(tags: &mut Vec<T>, tag: T) {
    if tags.contains(&tag) {
        return;
    }
    tags.push(tag);
    if tags.len() > MAX_TRACKED {
        tags.remove(0);
    }
}
