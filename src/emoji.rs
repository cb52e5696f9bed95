use crate::error::{Error, Result};

/// Emoji argument: a single string or an ordered list.
///
/// The string form may already contain a comma-separated list
/// (`"👍,❤️"`); normalization cleans up whitespace around the commas.
/// `From` impls let callers pass `&str`, `String`, `Vec<String>`,
/// `Vec<&str>`, or `&[&str]` directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmojiInput {
    Text(String),
    List(Vec<String>),
}

impl EmojiInput {
    /// Collapse the input into the comma-joined wire form.
    ///
    /// List entries and string pieces are trimmed; empty entries are
    /// dropped. A list with no surviving entries or an all-whitespace
    /// string fails with [`Error::Validation`]. Normalization is
    /// idempotent on its own output.
    pub fn normalize(&self) -> Result<String> {
        match self {
            EmojiInput::List(entries) => {
                let clean: Vec<&str> = entries
                    .iter()
                    .map(|emoji| emoji.trim())
                    .filter(|emoji| !emoji.is_empty())
                    .collect();

                if clean.is_empty() {
                    return Err(Error::Validation(
                        "emoji list contains no usable emoji".to_string(),
                    ));
                }

                Ok(clean.join(","))
            }
            EmojiInput::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return Err(Error::Validation(
                        "emoji string must not be empty".to_string(),
                    ));
                }

                Ok(trimmed
                    .split(',')
                    .map(str::trim)
                    .filter(|piece| !piece.is_empty())
                    .collect::<Vec<_>>()
                    .join(","))
            }
        }
    }

    /// True for an exactly-empty string input, which counts as "no emoji
    /// given" and is rejected before URL validation or normalization.
    pub(crate) fn is_unset(&self) -> bool {
        matches!(self, EmojiInput::Text(text) if text.is_empty())
    }
}

impl From<&str> for EmojiInput {
    fn from(text: &str) -> Self {
        EmojiInput::Text(text.to_string())
    }
}

impl From<String> for EmojiInput {
    fn from(text: String) -> Self {
        EmojiInput::Text(text)
    }
}

impl From<Vec<String>> for EmojiInput {
    fn from(entries: Vec<String>) -> Self {
        EmojiInput::List(entries)
    }
}

impl From<Vec<&str>> for EmojiInput {
    fn from(entries: Vec<&str>) -> Self {
        EmojiInput::List(entries.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for EmojiInput {
    fn from(entries: &[&str]) -> Self {
        EmojiInput::List(entries.iter().map(|e| e.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::single("👍", "👍")]
    #[case::already_joined("👍,❤️", "👍,❤️")]
    #[case::spaces_around_commas("👍 , ❤️ ,🔥", "👍,❤️,🔥")]
    #[case::leading_trailing_whitespace("  👍  ", "👍")]
    #[case::empty_pieces_dropped("👍,,❤️", "👍,❤️")]
    fn test_normalize_text(#[case] input: &str, #[case] expected: &str) {
        let normalized = EmojiInput::from(input).normalize().unwrap();
        assert_eq!(normalized, expected);
    }

    #[rstest]
    #[case::simple(vec!["👍", "❤️"], "👍,❤️")]
    #[case::empty_entries_dropped(vec!["👍", "", "❤️"], "👍,❤️")]
    #[case::whitespace_entries_dropped(vec!["👍", "   ", "❤️"], "👍,❤️")]
    #[case::entries_trimmed(vec![" 👍 ", "❤️ "], "👍,❤️")]
    fn test_normalize_list(#[case] input: Vec<&str>, #[case] expected: &str) {
        let normalized = EmojiInput::from(input).normalize().unwrap();
        assert_eq!(normalized, expected);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = EmojiInput::from("👍 , ❤️").normalize().unwrap();
        let twice = EmojiInput::from(once.as_str()).normalize().unwrap();
        assert_eq!(once, twice);
    }

    #[rstest]
    #[case::empty_string(EmojiInput::from(""))]
    #[case::whitespace_string(EmojiInput::from("   "))]
    #[case::empty_list(EmojiInput::from(Vec::<String>::new()))]
    #[case::list_of_empties(EmojiInput::from(vec!["", "  "]))]
    fn test_normalize_rejects_empty_input(#[case] input: EmojiInput) {
        let result = input.normalize();
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn test_is_unset_only_for_exactly_empty_text() {
        assert!(EmojiInput::from("").is_unset());
        assert!(!EmojiInput::from(" ").is_unset());
        assert!(!EmojiInput::from(Vec::<String>::new()).is_unset());
    }
}
