use url::Url;

use crate::rewrite::rewrite_url;
use crate::types::TextFragmentParts;

/// Transient editor state: the raw URL input, its validity, the most
/// recently seen hash and the editable parts derived from it.
///
/// Every operation recomputes eagerly; there is no persistent mode and no
/// state beyond the current input. The output URL is re-derived from the
/// current parts and base URL on demand.
#[derive(Debug, Default, Clone)]
pub struct EditorSession {
    url_input: String,
    valid: bool,
    hash: String,
    parts: TextFragmentParts,
}

impl EditorSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the URL input. The input is trimmed, then the parts are
    /// re-derived from its hash - but only when the hash value actually
    /// changed, so in-flight component edits survive retyping an
    /// equivalent URL.
    pub fn set_url(&mut self, input: &str) {
        self.url_input = input.trim().to_string();

        let hash = match Url::parse(&self.url_input) {
            Ok(url) => {
                self.valid = true;
                url.fragment()
                    .map(|fragment| format!("#{fragment}"))
                    .unwrap_or_default()
            }
            Err(_) => {
                self.valid = false;
                String::new()
            }
        };

        if hash != self.hash {
            self.parts = TextFragmentParts::from_hash(&hash);
            self.hash = hash;
        }
    }

    pub fn set_prefix(&mut self, prefix: impl Into<String>) {
        self.parts.set_prefix(prefix);
    }

    pub fn set_text_start(&mut self, text_start: impl Into<String>) {
        self.parts.set_text_start(text_start);
    }

    pub fn set_text_end(&mut self, text_end: impl Into<String>) {
        self.parts.set_text_end(text_end);
    }

    pub fn set_suffix(&mut self, suffix: impl Into<String>) {
        self.parts.set_suffix(suffix);
    }

    /// Drop the whole directive (the "remove text fragment" action)
    pub fn clear_text_fragment(&mut self) {
        self.parts.clear();
    }

    /// Whether the current input parses as an absolute URL
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    #[must_use]
    pub fn url_input(&self) -> &str {
        &self.url_input
    }

    #[must_use]
    pub fn parts(&self) -> &TextFragmentParts {
        &self.parts
    }

    /// The composed output URL. Empty when the base URL is invalid; all
    /// downstream output is suppressed in that case.
    #[must_use]
    pub fn output(&self) -> String {
        if !self.valid {
            return String::new();
        }

        rewrite_url(&self.url_input, &self.parts).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::EditorSession;

    #[test]
    fn test_set_url_derives_parts() {
        let mut session = EditorSession::new();
        session.set_url("https://example.com/#:~:text=foo-,hello,world,-bar");

        assert!(session.is_valid());
        assert_eq!(session.parts().prefix(), "foo");
        assert_eq!(session.parts().text_start(), "hello");
        assert_eq!(session.parts().text_end(), "world");
        assert_eq!(session.parts().suffix(), "bar");
    }

    #[test]
    fn test_set_url_trims_input() {
        let mut session = EditorSession::new();
        session.set_url("  https://example.com/page  ");

        assert!(session.is_valid());
        assert_eq!(session.url_input(), "https://example.com/page");
    }

    #[test]
    fn test_invalid_url_suppresses_output() {
        let mut session = EditorSession::new();
        session.set_url("not-a-url");

        assert!(!session.is_valid());
        assert_eq!(session.output(), "");
    }

    #[test]
    fn test_component_edit_recomputes_output() {
        let mut session = EditorSession::new();
        session.set_url("https://example.com/#:~:text=hello");
        session.set_text_end("world");

        assert_eq!(session.output(), "https://example.com/#:~:text=hello,world");

        session.set_text_start("goodbye");
        assert_eq!(
            session.output(),
            "https://example.com/#:~:text=goodbye,world"
        );
    }

    #[test]
    fn test_clear_removes_text_fragment() {
        let mut session = EditorSession::new();
        session.set_url("https://example.com/#:~:text=hello");
        session.clear_text_fragment();

        assert_eq!(session.output(), "https://example.com/");
    }

    #[test]
    fn test_clear_keeps_plain_hash() {
        let mut session = EditorSession::new();
        session.set_url("https://example.com/#section1");
        session.clear_text_fragment();

        assert_eq!(session.output(), "https://example.com/#section1");
    }

    #[test]
    fn test_edits_survive_same_hash_url_change() {
        let mut session = EditorSession::new();
        session.set_url("https://example.com/#:~:text=hello");
        session.set_text_start("edited");

        // Same hash, different path: the parts are not re-derived
        session.set_url("https://example.com/other#:~:text=hello");
        assert_eq!(session.parts().text_start(), "edited");

        // A changed hash overwrites the in-flight edit
        session.set_url("https://example.com/other#:~:text=fresh");
        assert_eq!(session.parts().text_start(), "fresh");
    }
}
