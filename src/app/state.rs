//! Application state definitions

use crate::api::{Mood, Quote, QuotesApi};
use crate::app::message::Tab;
use crate::features::{FavoritesStore, Settings, SpeechEngine};
use crate::ui::effects::ParticleField;
use crate::ui::widgets::Toast;

/// Main application state
pub struct App {
    /// Core infrastructure (settings, API client, speech)
    pub core: CoreState,
    /// Business data (mood catalog, current quote, favorites)
    pub library: LibraryState,
    /// UI state (tab, loading flag, toast, particles)
    pub ui: UiState,
}

/// Core infrastructure & services
pub struct CoreState {
    pub settings: Settings,
    pub api: QuotesApi,
    pub speech: SpeechEngine,
}

impl CoreState {
    /// Initialize core services with loaded settings
    pub fn new(settings: Settings) -> Self {
        let api = QuotesApi::new(settings.network.api_base.clone());
        let speech = SpeechEngine::detect();
        Self {
            settings,
            api,
            speech,
        }
    }
}

/// Business data
pub struct LibraryState {
    /// Mood catalog; the built-in fallback set when the service is down
    pub moods: Vec<Mood>,
    /// Name of the selected mood ("random" after an unfiltered fetch)
    pub current_mood: Option<String>,
    /// The quote on display, replaced wholesale per fetch
    pub current_quote: Option<Quote>,
    /// Persistent favorites list
    pub favorites: FavoritesStore,
    /// Sequence number of the most recent quote request - responses carrying
    /// an older number are stale and get dropped
    pub quote_seq: u64,
}

impl LibraryState {
    pub fn new(favorites: FavoritesStore) -> Self {
        Self {
            moods: Vec::new(),
            current_mood: None,
            current_quote: None,
            favorites,
            quote_seq: 0,
        }
    }

    /// Whether the quote on display is favorited.
    pub fn current_is_favorited(&self) -> bool {
        self.current_quote
            .as_ref()
            .map(|q| self.favorites.contains(q))
            .unwrap_or(false)
    }
}

/// UI view state, reset on every launch
pub struct UiState {
    pub active_tab: Tab,
    pub is_loading: bool,
    pub auto_play: bool,
    pub toast: Option<Toast>,
    pub toast_visible: bool,
    pub particles: ParticleField,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            active_tab: Tab::Dashboard,
            is_loading: false,
            auto_play: false,
            toast: None,
            toast_visible: false,
            // Sized to the default window; corrected by the first resize event
            particles: ParticleField::new(1280.0, 800.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_is_favorited_tracks_the_store() {
        let mut library = LibraryState::new(FavoritesStore::in_memory());
        let quote = Quote::new("A", "a", None);
        library.current_quote = Some(quote.clone());
        assert!(!library.current_is_favorited());

        library.favorites.toggle(&quote);
        assert!(library.current_is_favorited());
    }

    #[test]
    fn no_quote_is_never_favorited() {
        let library = LibraryState::new(FavoritesStore::in_memory());
        assert!(!library.current_is_favorited());
    }
}
