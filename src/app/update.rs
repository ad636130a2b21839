//! Message update handlers - thin dispatcher delegating to submodules

mod capabilities;
mod favorites;
mod navigation;
mod quotes;

use iced::Task;

use super::{App, Message};

impl App {
    /// Handle messages by delegating to appropriate submodule handlers
    pub fn update(&mut self, message: Message) -> Task<Message> {
        // Try each handler in order until one handles the message
        if let Some(task) = self.handle_quotes(&message) {
            return task;
        }
        if let Some(task) = self.handle_favorites(&message) {
            return task;
        }
        if let Some(task) = self.handle_capabilities(&message) {
            return task;
        }
        if let Some(task) = self.handle_navigation(&message) {
            return task;
        }

        // Default: no task
        Task::none()
    }
}

/// Build an offline App for handler tests: in-memory favorites, no speech
/// backend, an API client pointed at a port nobody listens on.
#[cfg(test)]
pub(super) fn test_app() -> App {
    use crate::api::QuotesApi;
    use crate::app::state::{CoreState, LibraryState, UiState};
    use crate::features::{FavoritesStore, Settings, SpeechEngine};

    App {
        core: CoreState {
            settings: Settings::default(),
            api: QuotesApi::new("http://127.0.0.1:9/api"),
            speech: SpeechEngine::disabled(),
        },
        library: LibraryState::new(FavoritesStore::in_memory()),
        ui: UiState::new(),
    }
}
