/// Chat titles are cut to this many characters
pub const TITLE_MAX_CHARS: usize = 30;

/// Chat previews are cut to this many characters
pub const PREVIEW_MAX_CHARS: usize = 50;

/// Keep the first `max_chars` characters, appending `...` only when
/// something was cut.
pub fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}

pub fn chat_title(first_message: &str) -> String {
    truncate_with_ellipsis(first_message, TITLE_MAX_CHARS)
}

pub fn chat_preview(message: &str) -> String {
    truncate_with_ellipsis(message, PREVIEW_MAX_CHARS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forty_char_message() {
        let message = "I have been feeling off for a few days..";
        assert_eq!(message.chars().count(), 40);

        assert_eq!(chat_preview(message), message);
        assert_eq!(chat_title(message), "I have been feeling off for a ...");
        assert_eq!(chat_title(message).chars().count(), 33);
    }

    #[test]
    fn test_exact_limit_is_not_truncated() {
        let message = "a".repeat(30);
        assert_eq!(chat_title(&message), message);
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let message = "é".repeat(31);
        let title = chat_title(&message);
        assert_eq!(title, format!("{}...", "é".repeat(30)));
    }

    #[test]
    fn test_empty_message() {
        assert_eq!(chat_preview(""), "");
    }
}
