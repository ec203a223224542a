use serde::{Deserialize, Serialize};

/// One line of the in-memory transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub from_user: bool,
    pub text: String,
}

impl HistoryEntry {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            from_user: true,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            from_user: false,
            text: text.into(),
        }
    }

    /// Speaker label used when rendering prompts
    pub fn speaker(&self) -> &'static str {
        if self.from_user {
            "User"
        } else {
            "Assistant"
        }
    }
}
