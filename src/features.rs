//! Feature modules - business logic separated from UI
//!
//! Each feature module contains the core logic for a specific functionality.
//! Features should not depend on UI components directly.

pub mod favorites;
pub mod settings;
pub mod share;
pub mod speech;

pub use favorites::{FavoriteQuote, FavoritesStore, ToggleOutcome};
pub use settings::Settings;
pub use share::ShareOutcome;
pub use speech::SpeechEngine;
