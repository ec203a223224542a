use regex::Regex;
use solace_types::HistoryEntry;
use std::sync::LazyLock;

pub const SYSTEM_PREAMBLE: &str = "You are a compassionate mental health supporter. Provide warm, validating responses that include practical coping strategies, grounding techniques, or mindfulness exercises. Focus on immediate, actionable tips that can help in the moment. Be supportive, caring, and offer concrete suggestions.";

/// Transcript lines carried into the prompt
pub const HISTORY_WINDOW: usize = 4;

/// Generated text must be longer than this many characters
pub const MIN_REPLY_CHARS: usize = 10;

static SPEAKER_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:Assistant|Response):\s*").unwrap_or_else(|e| panic!("invalid label pattern: {e}"))
});

pub fn build_prompt(user_message: &str, history: &[HistoryEntry]) -> String {
    let start = history.len().saturating_sub(HISTORY_WINDOW);
    let transcript = history[start..]
        .iter()
        .map(|entry| format!("{}: {}", entry.speaker(), entry.text))
        .collect::<Vec<_>>()
        .join("\n");

    if transcript.is_empty() {
        format!("{SYSTEM_PREAMBLE}\nUser: {user_message}\nAssistant:")
    } else {
        format!("{SYSTEM_PREAMBLE}\n\n{transcript}\nUser: {user_message}\nAssistant:")
    }
}

/// Strip speaker labels and quotes from model output
pub fn clean_generated(text: &str) -> String {
    let without_labels = SPEAKER_LABEL.replace_all(text.trim(), "");
    without_labels.replace('"', "").trim().to_string()
}

pub fn is_acceptable(cleaned: &str) -> bool {
    cleaned.chars().count() > MIN_REPLY_CHARS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_without_history() {
        let prompt = build_prompt("hi", &[]);
        assert_eq!(prompt, format!("{SYSTEM_PREAMBLE}\nUser: hi\nAssistant:"));
    }

    #[test]
    fn test_prompt_keeps_last_four_lines() {
        let history = vec![
            HistoryEntry::user("one"),
            HistoryEntry::assistant("two"),
            HistoryEntry::user("three"),
            HistoryEntry::assistant("four"),
            HistoryEntry::user("five"),
            HistoryEntry::assistant("six"),
        ];
        let prompt = build_prompt("seven", &history);
        assert_eq!(
            prompt,
            format!(
                "{SYSTEM_PREAMBLE}\n\nUser: three\nAssistant: four\nUser: five\nAssistant: six\nUser: seven\nAssistant:"
            )
        );
    }

    #[test]
    fn test_clean_strips_labels_and_quotes() {
        let cleaned = clean_generated("  Assistant: \"Take a slow breath.\" Response:  Then notice your feet.  ");
        assert_eq!(cleaned, "Take a slow breath. Then notice your feet.");
    }

    #[test]
    fn test_short_output_rejected() {
        assert!(!is_acceptable("Okay then"));
        assert!(!is_acceptable("0123456789"));
        assert!(is_acceptable("01234567890"));
    }
}
