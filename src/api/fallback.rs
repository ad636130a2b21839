//! Built-in catalog shown when the quote service is unreachable.
//!
//! Every network failure in the app degrades to content from this module;
//! nothing here ever touches the network.

use once_cell::sync::Lazy;

use super::model::{Mood, Quote};

/// Mood names the app knows how to style. Also the offline mood catalog.
const FALLBACK_MOOD_NAMES: [&str; 7] = [
    "happy",
    "sad",
    "tired",
    "motivated",
    "calm",
    "angry",
    "excited",
];

static FALLBACK_QUOTES: Lazy<Vec<Quote>> = Lazy::new(|| {
    vec![
        Quote::new(
            "Happiness is a journey, not a destination. Enjoy every moment!",
            "Anonymous",
            Some("happy"),
        ),
        Quote::new(
            "Even the darkest night will end and the sun will rise.",
            "Victor Hugo",
            Some("sad"),
        ),
        Quote::new(
            "Rest when you're weary. Refresh and renew yourself.",
            "Ralph Marston",
            Some("tired"),
        ),
        Quote::new(
            "The only way to do great work is to love what you do.",
            "Steve Jobs",
            Some("motivated"),
        ),
        Quote::new(
            "Peace comes from within. Do not seek it without.",
            "Buddha",
            Some("calm"),
        ),
        Quote::new(
            "Anger is an acid that can do more harm to the vessel than anything it is poured on.",
            "Mark Twain",
            Some("angry"),
        ),
        Quote::new(
            "The biggest adventure you can take is to live the life of your dreams.",
            "Oprah Winfrey",
            Some("excited"),
        ),
    ]
});

/// The offline mood catalog, substituted when `GET /moods` fails.
pub fn fallback_moods() -> Vec<Mood> {
    FALLBACK_MOOD_NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| Mood::new(i as u64 + 1, *name))
        .collect()
}

/// The per-mood fallback quote, substituted when a mood-filtered fetch fails.
///
/// Unrecognized mood names get the happy entry.
pub fn fallback_quote(mood_name: &str) -> Quote {
    FALLBACK_QUOTES
        .iter()
        .find(|q| q.mood.as_deref() == Some(mood_name))
        .unwrap_or(&FALLBACK_QUOTES[0])
        .clone()
}

/// The generic quote shown when an unfiltered fetch fails.
pub fn welcome_quote() -> Quote {
    Quote::new(
        "Welcome to your advanced mood dashboard! Select your mood to begin your inspirational journey.",
        "Mood Quotes",
        Some("happy"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_exactly_seven_moods() {
        let moods = fallback_moods();
        assert_eq!(moods.len(), 7);
        let names: Vec<&str> = moods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(
            names,
            ["happy", "sad", "tired", "motivated", "calm", "angry", "excited"]
        );
    }

    #[test]
    fn mood_ids_start_at_one() {
        let moods = fallback_moods();
        assert_eq!(moods[0].id, 1);
        assert_eq!(moods[6].id, 7);
    }

    #[test]
    fn every_catalog_mood_has_its_own_quote() {
        for mood in fallback_moods() {
            let quote = fallback_quote(&mood.name);
            assert_eq!(quote.mood.as_deref(), Some(mood.name.as_str()));
        }
    }

    #[test]
    fn sad_fallback_is_the_victor_hugo_line() {
        let quote = fallback_quote("sad");
        assert_eq!(
            quote.text,
            "Even the darkest night will end and the sun will rise."
        );
        assert_eq!(quote.author, "Victor Hugo");
    }

    #[test]
    fn unknown_mood_falls_back_to_happy() {
        let quote = fallback_quote("melancholic");
        assert_eq!(quote.mood.as_deref(), Some("happy"));
    }
}
