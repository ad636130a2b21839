//! Application messages

use crate::api::{Mood, Quote};
use crate::features::ShareOutcome;

/// Main view tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Dashboard,
    Favorites,
    History,
}

impl Tab {
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Favorites => "Favorites",
            Tab::History => "History",
        }
    }
}

/// What a quote fetch was asked for; decides the fallback and toast when the
/// response lands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuoteRequest {
    /// The silent startup fetch
    Initial,
    /// An unfiltered fetch (random button or auto-play)
    Random,
    /// A fetch filtered by mood name
    Mood(String),
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // ============ Quotes ============
    /// Mood catalog response (any failure degrades to the built-in catalog)
    MoodsLoaded(Result<Vec<Mood>, String>),
    /// A mood card was picked
    SelectMood(Mood),
    /// The random-quote quick action
    RandomQuote,
    /// Auto-play interval fired
    AutoPlayTick,
    /// A quote response landed; `seq` identifies the request so stale
    /// responses can be discarded
    QuoteLoaded {
        seq: u64,
        request: QuoteRequest,
        result: Result<Quote, String>,
    },

    // ============ Favorites ============
    /// Toggle the current quote in the favorites list
    ToggleFavorite,
    /// Remove a favorite by id
    RemoveFavorite(u64),

    // ============ Capabilities ============
    /// Speak the current quote aloud
    SpeakQuote,
    /// Hand the current quote to the platform share endpoint
    ShareQuote,
    /// Share attempt finished
    ShareFinished(ShareOutcome),
    /// Copy the current quote to the clipboard
    CopyQuote,

    // ============ View ============
    /// Switch the active tab
    SelectTab(Tab),
    /// Flip dark/light mode (persisted)
    ToggleTheme,
    /// Flip the auto-play flag
    ToggleAutoPlay,
    /// Show a transient toast
    ShowToast(String),
    /// Show an error-styled toast
    ShowErrorToast(String),
    /// Hide the toast (fired by its timer)
    HideToast,
    /// Advance the particle field one frame
    AnimationTick,
    /// Window was resized; the particle field follows
    WindowResized(iced::Size),
}
