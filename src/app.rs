//! Main application module

mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

pub use message::{Message, QuoteRequest, Tab};
pub use state::{App, CoreState, LibraryState, UiState};

use crate::features::{FavoritesStore, Settings};

/// Auto-play cadence while enabled and a mood is selected
const AUTO_PLAY_SECS: u64 = 10;

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        // 1. Load persisted state first: theme/API address and favorites
        let settings = Settings::load();
        let favorites = FavoritesStore::load();

        // 2. Initialize sub-states
        let core = CoreState::new(settings);
        let mut library = LibraryState::new(favorites);
        let mut ui = UiState::new();

        // 3. Kick off the startup fetches. The initial quote request is
        //    sequence 1; any response older than the latest sequence is
        //    dropped by the update handler.
        library.quote_seq = 1;
        ui.is_loading = true;

        let moods_api = core.api.clone();
        let moods_task = Task::perform(
            async move { moods_api.moods().await.map_err(|e| e.to_string()) },
            Message::MoodsLoaded,
        );

        let quote_api = core.api.clone();
        let quote_task = Task::perform(
            async move {
                let result = quote_api.random_quote(None).await.map_err(|e| e.to_string());
                (QuoteRequest::Initial, result)
            },
            |(request, result)| Message::QuoteLoaded {
                seq: 1,
                request,
                result,
            },
        );

        let app = Self { core, library, ui };
        (app, Task::batch([moods_task, quote_task]))
    }

    /// Window title reflecting the selected mood
    pub fn title(&self) -> String {
        match &self.library.current_mood {
            Some(mood) => format!("MoodScape - {} mood", mood),
            None => "MoodScape".to_string(),
        }
    }

    /// Application theme from the persisted flag
    pub fn theme(&self) -> Theme {
        if self.core.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Subscriptions for auto-play, particle frames and window resizes
    pub fn subscription(&self) -> iced::Subscription<Message> {
        use iced::time::Duration;

        // 1. Auto-play: only while enabled AND a mood is selected. Dropping
        //    the subscription cancels the timer, so disabling auto-play or
        //    clearing the mood stops further automatic fetches.
        let auto_play_sub = if subscription_logic::needs_auto_play(
            self.ui.auto_play,
            self.library.current_mood.is_some(),
        ) {
            iced::time::every(Duration::from_secs(AUTO_PLAY_SECS)).map(|_| Message::AutoPlayTick)
        } else {
            iced::Subscription::none()
        };

        // 2. Particle animation frames (vsync rate), for the life of the view
        let frames_sub = iced::window::frames().map(|_| Message::AnimationTick);

        // 3. Window resize keeps the particle bounds current
        let resize_sub =
            iced::window::resize_events().map(|(_id, size)| Message::WindowResized(size));

        iced::Subscription::batch([auto_play_sub, frames_sub, resize_sub])
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new().0
    }
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    /// The auto-play timer exists only while the flag is on and a mood is
    /// selected.
    pub fn needs_auto_play(auto_play: bool, has_mood: bool) -> bool {
        auto_play && has_mood
    }
}

#[cfg(test)]
mod tests {
    use super::subscription_logic::*;

    mod property_auto_play_gating {
        use super::*;

        #[test]
        fn enabled_with_mood_runs_the_timer() {
            assert!(needs_auto_play(true, true));
        }

        #[test]
        fn disabling_auto_play_stops_the_timer() {
            // No subscription means no further automatic quote changes,
            // however long we wait.
            assert!(!needs_auto_play(false, true));
        }

        #[test]
        fn no_selected_mood_means_no_timer() {
            assert!(!needs_auto_play(true, false));
            assert!(!needs_auto_play(false, false));
        }

        #[test]
        fn timer_requires_both_conditions() {
            for auto_play in [false, true] {
                for has_mood in [false, true] {
                    assert_eq!(
                        needs_auto_play(auto_play, has_mood),
                        auto_play && has_mood,
                        "auto_play={}, has_mood={}",
                        auto_play,
                        has_mood
                    );
                }
            }
        }
    }
}
