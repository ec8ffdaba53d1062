use std::sync::OnceLock;

use regex::Regex;

/// Fenced code block: a run of three or more backticks, any content, and the
/// next run of three or more backticks.
pub struct CodeBlock;

impl CodeBlock {
    /// Shortest delimiter that opens or closes a block.
    pub const FENCE: &'static str = "```";

    /// Group 1 is the content between the fences. The lazy body stops at the
    /// first closing run and the closing run swallows any extra backticks, so
    /// a four-backtick fence closes cleanly.
    const PATTERN: &'static str = r"(?s)```+(.*?)```+";

    pub(crate) fn regex() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(Self::PATTERN).expect("Invalid code block regex"))
    }

    /// Splits fenced content into `(language, body)`.
    ///
    /// The first line is the language tag, kept verbatim except for
    /// trailing `\r`s. A blank first line means no tag. Content without a
    /// newline is all tag.
    pub fn split_content(content: &str) -> (Option<&str>, &str) {
        let (first, rest) = content.split_once('\n').unwrap_or((content, ""));
        let first = first.trim_end_matches('\r');
        let language = (!first.trim().is_empty()).then_some(first);
        (language, rest.trim())
    }
}
