//! Quote service API - remote client, models and offline fallback catalog.

mod fallback;
pub mod model;
mod quotes;

pub use fallback::{fallback_moods, fallback_quote, welcome_quote};
pub use model::{Mood, Quote};
pub use quotes::QuotesApi;
