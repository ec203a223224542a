// Local reply bank used when remote generation is unavailable

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

use crate::crisis::{random_technique, CRISIS_PHRASES};
use crate::patterns::{keywords, phrases};
use crate::random::{choose, RandomSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FallbackCategory {
    Crisis,
    Urgent,
    Sadness,
    Anxiety,
    Anger,
    Loneliness,
    Stress,
    Sleep,
    General,
}

impl FallbackCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            FallbackCategory::Crisis => "crisis",
            FallbackCategory::Urgent => "urgent",
            FallbackCategory::Sadness => "sadness",
            FallbackCategory::Anxiety => "anxiety",
            FallbackCategory::Anger => "anger",
            FallbackCategory::Loneliness => "loneliness",
            FallbackCategory::Stress => "stress",
            FallbackCategory::Sleep => "sleep",
            FallbackCategory::General => "general",
        }
    }

    pub fn surfaces_crisis_resources(self) -> bool {
        matches!(self, FallbackCategory::Crisis | FallbackCategory::Urgent)
    }
}

impl fmt::Display for FallbackCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

static CATEGORY_PATTERNS: LazyLock<Vec<(FallbackCategory, Regex)>> = LazyLock::new(|| {
    vec![
        (FallbackCategory::Crisis, phrases(CRISIS_PHRASES)),
        (
            FallbackCategory::Urgent,
            keywords("help|emergency|crisis|urgent|can't cope|overwhelmed"),
        ),
        (
            FallbackCategory::Sadness,
            keywords("sad|depressed|hopeless|empty|numb|down|blue"),
        ),
        (
            FallbackCategory::Anxiety,
            keywords("anxious|anxiety|worried|panic|overwhelmed|nervous"),
        ),
        (
            FallbackCategory::Anger,
            keywords("angry|frustrated|irritated|mad|rage|annoyed"),
        ),
        (
            FallbackCategory::Loneliness,
            keywords("lonely|alone|isolated|no one understands|empty"),
        ),
        (
            FallbackCategory::Stress,
            keywords("stress|stressed|pressure|burnout|tired|exhausted"),
        ),
        (
            FallbackCategory::Sleep,
            keywords("can't sleep|insomnia|tired but can't sleep|exhausted but awake"),
        ),
    ]
});

const URGENT_REPLY: &str = "It sounds like you're feeling completely overwhelmed right now. Let's try something together: take 3 deep breaths with me. Breathe in slowly... hold... and breathe out. When you're ready, try the 5-4-3-2-1 grounding technique: look around and name 5 things you can see. I'm here with you, and there are people ready to support you immediately.";

const SADNESS_REPLIES: &[&str] = &[
    "I'm sorry you're carrying this heaviness. When everything feels flat, one small action can help: pick something that takes under five minutes, like making tea or opening a window, and do just that. You don't have to fix the whole day. What's one tiny thing you could try?",
    "Sadness can make everything feel slower and heavier, and that's okay. Try a self-compassion break: put a hand on your chest and say to yourself, this is a hard moment, and I'm allowed to be gentle with myself. How does that feel?",
    "Thank you for telling me how low you feel. Let's set one tiny goal for the next hour, even just drinking a glass of water or stepping outside for a minute. Small wins add up. Would you like to pick one together?",
];

const ANXIETY_REPLIES: &[&str] = &[
    "Anxiety can make your body feel like it's on high alert. Let's try box breathing: breathe in for 4 counts, hold for 4, breathe out for 4, hold for 4. Repeat that a few times and notice how your shoulders feel afterwards.",
    "I hear how worried you are. Let's bring you back to the present with the 5-4-3-2-1 technique: name 5 things you can see, 4 you can touch, 3 you can hear, 2 you can smell and 1 you can taste. Take your time.",
    "When anxious thoughts race, it can help to label them. Try saying, I'm having the thought that something bad will happen. Naming the thought puts a little distance between you and it. What thought is the loudest right now?",
];

const ANGER_REPLIES: &[&str] = &[
    "It makes sense to feel angry when things feel unfair. Try the STOP skill: Stop, Take a breath, Observe what you're feeling in your body, then Proceed with intention. What's underneath the anger right now?",
    "Anger carries a lot of energy. A quick temperature change can help reset it: splash cold water on your face or hold something cold for thirty seconds. Once your body settles a little, we can talk through what happened.",
    "Your frustration is valid. Try urge surfing: notice the urge to react, picture it as a wave that rises, peaks and then falls, and breathe through it without acting. Urges pass more quickly than they seem to.",
];

const LONELINESS_REPLIES: &[&str] = &[
    "Feeling alone is really painful, and I'm glad you reached out here. Is there one person you could send a short message to today, even just saying hi? Connection often starts small.",
    "Loneliness can make it feel like no one understands. Try writing a short letter to yourself a year from now, describing what you hope is different. It can help to remember that this moment is not forever.",
    "You matter, even when it feels like no one notices. Try placing a hand on your heart and saying, I'm here for myself right now. Self-compassion can be a bridge while you find connection with others.",
];

const STRESS_REPLIES: &[&str] = &[
    "That sounds like a lot of pressure. Let's do a two-minute reset: stand up, roll your shoulders, take three slow breaths and drink some water. Then pick just one task to focus on next.",
    "When everything feels urgent, try the Pomodoro approach: work on one thing for 25 minutes, then take a 5 minute break. It keeps the load manageable and gives your mind regular rest.",
    "Stress tends to settle in the body. Try progressive muscle relaxation: tense your feet for five seconds, release, then move up through your legs, stomach, shoulders and face. Notice the difference between tension and release.",
];

const SLEEP_REPLIES: &[&str] = &[
    "Not being able to sleep is exhausting. Try 4-7-8 breathing: breathe in for 4 counts, hold for 7, and breathe out slowly for 8. It signals to your body that it's safe to rest.",
    "If you've been lying awake for more than 20 minutes, it can help to get up and do something calm in dim light, like reading, until you feel sleepy. Your bed stays a place for rest rather than worry.",
    "Racing thoughts at night are common. Try setting a short worry time earlier in the evening: write down what's on your mind and one next step for each item, then tell yourself it can wait until tomorrow.",
];

const GENERAL_REPLIES: &[&str] = &[
    "Thank you for sharing that with me. Take a slow breath and notice how you're feeling right now, without judging it. What would feel most supportive for you in this moment?",
    "I'm here and listening. Sometimes it helps to pause and name the feeling underneath: is it worry, sadness, frustration, or something else? There's no wrong answer.",
    "It takes courage to open up. Let's take a moment together: breathe in slowly through your nose, and out through your mouth. What's been on your mind the most today?",
    "I appreciate you telling me this. A quick grounding exercise can help: press your feet into the floor and notice the support underneath you. How are you feeling after that?",
    "Whatever you're going through, your feelings make sense. Would it help to talk through what happened, or would you rather try a short calming exercise first?",
    "You don't have to have everything figured out. Let's focus on the next small step. What's one thing that would make the next hour a little easier?",
    "I'm glad you're here. Try placing a hand on your chest and taking three slow breaths, feeling it rise and fall. Then tell me a bit more about what's going on.",
    "Taking time to check in with yourself is a form of self-care. What's one kind thing you could do for yourself today, even something small?",
];

/// Reply drawn from the bank
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackReply {
    pub category: FallbackCategory,
    pub text: String,
}

/// First category whose keywords match, in bank order
pub fn classify_message(message: &str) -> FallbackCategory {
    let message = message.trim().to_lowercase();
    CATEGORY_PATTERNS
        .iter()
        .find(|(_, pattern)| pattern.is_match(&message))
        .map(|(category, _)| *category)
        .unwrap_or(FallbackCategory::General)
}

pub fn fallback_reply(message: &str, random: &dyn RandomSource) -> FallbackReply {
    let category = classify_message(message);
    let text = match category {
        FallbackCategory::Crisis => crisis_reply(random),
        FallbackCategory::Urgent => URGENT_REPLY.to_string(),
        FallbackCategory::Sadness => choose(random, SADNESS_REPLIES).to_string(),
        FallbackCategory::Anxiety => choose(random, ANXIETY_REPLIES).to_string(),
        FallbackCategory::Anger => choose(random, ANGER_REPLIES).to_string(),
        FallbackCategory::Loneliness => choose(random, LONELINESS_REPLIES).to_string(),
        FallbackCategory::Stress => choose(random, STRESS_REPLIES).to_string(),
        FallbackCategory::Sleep => choose(random, SLEEP_REPLIES).to_string(),
        FallbackCategory::General => choose(random, GENERAL_REPLIES).to_string(),
    };
    FallbackReply { category, text }
}

fn crisis_reply(random: &dyn RandomSource) -> String {
    let technique = random_technique(random);
    format!(
        "I hear the immense pain in your words, and I want you to know your life matters deeply. \
         Please hold on and try this right now: \"{}\". This can help ground you while we connect \
         you with immediate support. I've shared crisis resources above - would you be willing to \
         reach out? I'm here with you every step of the way.",
        technique.steps
    )
}
