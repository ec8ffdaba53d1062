use std::sync::OnceLock;

use regex::Regex;

/// Inline code: a single backtick, non-backtick text, a single backtick.
///
/// Neither delimiter may touch another backtick, so the runs that make up a
/// fence never produce inline code.
pub struct InlineCode;

impl InlineCode {
    /// The backtick character that delimits inline code.
    pub const TICK: char = '`';

    /// Group 1 is the inline span including both backticks. The surrounding
    /// non-capturing groups consume the neighbouring character, so callers
    /// must resume searching at the end of group 1, not the end of the match.
    const PATTERN: &'static str = r"(?:^|[^`])(`[^`]*`)(?:$|[^`])";

    pub(crate) fn regex() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(Self::PATTERN).expect("Invalid inline code regex"))
    }

    /// Strips the delimiting backticks from a matched span.
    pub fn inner(full: &str) -> &str {
        full.strip_prefix(Self::TICK)
            .and_then(|s| s.strip_suffix(Self::TICK))
            .unwrap_or(full)
    }
}
