pub mod emotion;
pub mod history;
pub mod summary;
pub mod tags;

pub use emotion::{Emotion, EmotionalScore, EmotionalState};
pub use history::HistoryEntry;
pub use summary::{ConversationSummary, LastSample, MoodTrend, RiskLevel, MAX_INSIGHTS, MAX_TRACKED};
pub use tags::{Concern, CopingStrategy};
