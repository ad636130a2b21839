//! Wire models for the quote service.

use serde::{Deserialize, Serialize};

/// A named emotional category used to filter quotes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mood {
    pub id: u64,
    pub name: String,
}

impl Mood {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A quote as served by the API.
///
/// Replaced wholesale on every fetch. For favoriting purposes two quotes are
/// the same when their `(text, author)` pair matches; the `mood` tag does not
/// participate in identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
}

impl Quote {
    pub fn new(
        text: impl Into<String>,
        author: impl Into<String>,
        mood: Option<&str>,
    ) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
            mood: mood.map(str::to_string),
        }
    }

    /// Favorite-identity comparison: `(text, author)` only.
    pub fn same_quote(&self, other_text: &str, other_author: &str) -> bool {
        self.text == other_text && self.author == other_author
    }

    /// The shareable one-line rendering of this quote.
    pub fn formatted(&self) -> String {
        format!("\"{}\" - {}", self.text, self.author)
    }

    /// The spoken rendering of this quote.
    pub fn spoken(&self) -> String {
        format!("{} by {}", self.text, self.author)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_identity_ignores_mood_tag() {
        let tagged = Quote::new("Stay curious.", "Anonymous", Some("happy"));
        let untagged = Quote::new("Stay curious.", "Anonymous", None);
        assert!(tagged.same_quote(&untagged.text, &untagged.author));
    }

    #[test]
    fn quote_identity_requires_both_fields() {
        let quote = Quote::new("Stay curious.", "Anonymous", None);
        assert!(!quote.same_quote("Stay curious.", "Someone Else"));
        assert!(!quote.same_quote("Stay busy.", "Anonymous"));
    }

    #[test]
    fn missing_mood_deserializes_as_none() {
        let quote: Quote =
            serde_json::from_str(r#"{"text":"t","author":"a"}"#).expect("valid quote body");
        assert_eq!(quote.mood, None);
    }

    #[test]
    fn formatted_wraps_text_in_quotes() {
        let quote = Quote::new("Stay curious.", "Anonymous", None);
        assert_eq!(quote.formatted(), "\"Stay curious.\" - Anonymous");
    }
}
