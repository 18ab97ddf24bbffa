use serde::{Deserialize, Serialize};

use super::ContentType;

/// One detected clipboard fragment, supplied once at popup creation.
///
/// The fragment is immutable for the whole session. It is injected as an
/// explicit constructor parameter by the collaborator that created the
/// popup window; nothing in this crate reads ambient global state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentFragment {
    pub content: String,
    pub content_type: ContentType,

    /// Advisory sizing hint from the window collaborator. Never consulted
    /// by the suggestion merger; `None` means "derive one".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_count_hint: Option<u32>,
}

impl ContentFragment {
    pub fn new(content: impl Into<String>, content_type: ContentType) -> Self {
        Self {
            content: content.into(),
            content_type,
            action_count_hint: None,
        }
    }

    /// Expected number of deterministic actions, for window sizing.
    ///
    /// Uses the injected hint when present, otherwise derives one from the
    /// content type and length.
    pub fn action_count_hint(&self) -> u32 {
        if let Some(hint) = self.action_count_hint {
            return hint;
        }
        match self.content_type {
            ContentType::Code => 5,
            ContentType::Url => 4,
            ContentType::PlainText => {
                if self.content.chars().count() > 100 {
                    6
                } else {
                    4
                }
            }
            _ => 3,
        }
    }

    /// Short preview of the content for log lines.
    ///
    /// Truncation backs off to the nearest char boundary so multi-byte
    /// text never splits a code point.
    pub fn preview(&self, max_len: usize) -> String {
        let s = &self.content;
        if s.len() <= max_len {
            return s.clone();
        }

        let mut end = max_len;
        while end > 0 && !s.is_char_boundary(end) {
            end -= 1;
        }

        if end == 0 {
            return String::new();
        }

        format!("{}...", &s[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_hint_wins() {
        let mut fragment = ContentFragment::new("fn main() {}", ContentType::Code);
        assert_eq!(fragment.action_count_hint(), 5);
        fragment.action_count_hint = Some(2);
        assert_eq!(fragment.action_count_hint(), 2);
    }

    #[test]
    fn test_plain_text_hint_depends_on_length() {
        let short = ContentFragment::new("hello", ContentType::PlainText);
        assert_eq!(short.action_count_hint(), 4);

        let long = ContentFragment::new("x".repeat(101), ContentType::PlainText);
        assert_eq!(long.action_count_hint(), 6);
    }

    #[test]
    fn test_preview_respects_char_boundaries() {
        let fragment = ContentFragment::new("日本語のテキスト", ContentType::PlainText);
        // 4 bytes lands in the middle of the second code point
        let preview = fragment.preview(4);
        assert_eq!(preview, "日...");
    }

    #[test]
    fn test_preview_short_content_unchanged() {
        let fragment = ContentFragment::new("short", ContentType::PlainText);
        assert_eq!(fragment.preview(50), "short");
    }
}
