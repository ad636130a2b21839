//! Persistent favorites list.
//!
//! Favorites are a user's saved quotes, deduplicated by `(text, author)` and
//! kept in insertion order. The whole list is serialized as one JSON array in
//! a single file under the platform data dir; it is read once at startup and
//! rewritten after every mutation. A write failure keeps the in-memory state
//! and is only logged - the data is low-value by design.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::api::Quote;
use crate::utils::format_saved_date;

/// A saved quote with its generated id and a human-readable save date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteQuote {
    pub id: u64,
    pub text: String,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
    /// Formatted date the favorite was saved, e.g. "Thursday, Aug 7, 2025"
    pub saved_at: String,
}

impl FavoriteQuote {
    /// Whether this favorite stands for the given quote (`(text, author)` key).
    pub fn matches(&self, quote: &Quote) -> bool {
        quote.same_quote(&self.text, &self.author)
    }
}

/// Result of a favorite toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
}

/// The favorites list plus its backing file.
///
/// `path: None` makes an in-memory store; mutations then skip the disk
/// entirely, which is what unit tests use.
#[derive(Debug)]
pub struct FavoritesStore {
    path: Option<PathBuf>,
    entries: Vec<FavoriteQuote>,
    last_id: u64,
}

impl FavoritesStore {
    /// Get the favorites file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "moodscape", "MoodScape")
            .map(|dirs| dirs.data_dir().join("favorites.json"))
    }

    /// Load the favorites list from the default file.
    ///
    /// A missing or malformed file resets to an empty list.
    pub fn load() -> Self {
        let Some(path) = Self::file_path() else {
            return Self::in_memory();
        };
        let entries = match Self::read_entries(&path) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("resetting favorites, could not read {}: {}", path.display(), e);
                Vec::new()
            }
        };
        let last_id = entries.iter().map(|f| f.id).max().unwrap_or(0);
        Self {
            path: Some(path),
            entries,
            last_id,
        }
    }

    /// A store with no backing file.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            entries: Vec::new(),
            last_id: 0,
        }
    }

    fn read_entries(path: &Path) -> Result<Vec<FavoriteQuote>, FavoritesError> {
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content =
            std::fs::read_to_string(path).map_err(|e| FavoritesError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| FavoritesError::Parse(e.to_string()))
    }

    pub fn entries(&self) -> &[FavoriteQuote] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether an equal `(text, author)` favorite exists.
    pub fn contains(&self, quote: &Quote) -> bool {
        self.entries.iter().any(|f| f.matches(quote))
    }

    /// Add the quote, or remove it if an equal favorite already exists.
    /// Persists after the change.
    pub fn toggle(&mut self, quote: &Quote) -> ToggleOutcome {
        let outcome = if self.contains(quote) {
            self.entries.retain(|f| !f.matches(quote));
            ToggleOutcome::Removed
        } else {
            let now = chrono::Local::now();
            let id = self.mint_id(now.timestamp_millis().max(0) as u64);
            self.entries.push(FavoriteQuote {
                id,
                text: quote.text.clone(),
                author: quote.author.clone(),
                mood: quote.mood.clone(),
                saved_at: format_saved_date(now),
            });
            ToggleOutcome::Added
        };
        self.persist();
        outcome
    }

    /// Remove a favorite by id. Returns false when no entry had that id.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|f| f.id != id);
        let removed = self.entries.len() < before;
        if removed {
            self.persist();
        }
        removed
    }

    /// Mint a fresh id from the wall clock, strictly greater than any id
    /// handed out before so rapid toggles can't collide.
    fn mint_id(&mut self, now_millis: u64) -> u64 {
        let id = now_millis.max(self.last_id + 1);
        self.last_id = id;
        id
    }

    fn persist(&self) {
        let Some(path) = self.path.as_deref() else {
            return;
        };
        if let Err(e) = self.save_to_file(path) {
            tracing::error!("failed to persist favorites to {}: {}", path.display(), e);
        }
    }

    fn save_to_file(&self, path: &Path) -> Result<(), FavoritesError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| FavoritesError::Io(e.to_string()))?;
        }
        let content = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| FavoritesError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| FavoritesError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Errors that can occur with the favorites file
#[derive(Debug, Clone)]
pub enum FavoritesError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for FavoritesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FavoritesError::Io(e) => write!(f, "IO error: {}", e),
            FavoritesError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for FavoritesError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(text: &str, author: &str) -> Quote {
        Quote::new(text, author, None)
    }

    mod property_toggle_pair {
        use super::*;

        #[test]
        fn toggling_twice_restores_the_original_list() {
            let mut store = FavoritesStore::in_memory();
            let keeper = quote("A", "a");
            store.toggle(&keeper);
            let baseline: Vec<FavoriteQuote> = store.entries().to_vec();

            let q = quote("B", "b");
            store.toggle(&q);
            store.toggle(&q);
            assert_eq!(store.entries(), baseline.as_slice());
        }

        #[test]
        fn toggle_reports_added_then_removed() {
            let mut store = FavoritesStore::in_memory();
            let q = quote("A", "a");
            assert_eq!(store.toggle(&q), ToggleOutcome::Added);
            assert_eq!(store.toggle(&q), ToggleOutcome::Removed);
            assert!(store.entries().is_empty());
        }
    }

    mod property_identity {
        use super::*;

        #[test]
        fn favoriting_keys_on_text_and_author_only() {
            let mut store = FavoritesStore::in_memory();
            store.toggle(&Quote::new("A", "a", Some("happy")));
            // Same pair with different metadata is the same favorite.
            assert_eq!(
                store.toggle(&Quote::new("A", "a", Some("calm"))),
                ToggleOutcome::Removed
            );
            assert!(store.entries().is_empty());
        }

        #[test]
        fn different_author_is_a_different_favorite() {
            let mut store = FavoritesStore::in_memory();
            store.toggle(&quote("A", "a"));
            assert_eq!(store.toggle(&quote("A", "b")), ToggleOutcome::Added);
            assert_eq!(store.len(), 2);
        }
    }

    mod property_removal {
        use super::*;

        #[test]
        fn remove_by_id_drops_exactly_one_and_keeps_order() {
            let mut store = FavoritesStore::in_memory();
            store.toggle(&quote("A", "a"));
            store.toggle(&quote("B", "b"));
            store.toggle(&quote("C", "c"));
            let middle = store.entries()[1].id;

            assert!(store.remove(middle));
            let texts: Vec<&str> = store.entries().iter().map(|f| f.text.as_str()).collect();
            assert_eq!(texts, ["A", "C"]);
        }

        #[test]
        fn removing_an_unknown_id_is_a_noop() {
            let mut store = FavoritesStore::in_memory();
            store.toggle(&quote("A", "a"));
            assert!(!store.remove(42));
            assert_eq!(store.len(), 1);
        }

        #[test]
        fn favorite_a_then_b_then_unfavorite_a_leaves_b() {
            let mut store = FavoritesStore::in_memory();
            let a = quote("A", "a");
            let b = quote("B", "b");
            store.toggle(&a);
            store.toggle(&b);
            store.toggle(&a);

            assert_eq!(store.len(), 1);
            assert_eq!(store.entries()[0].text, "B");
        }
    }

    mod property_ids {
        use super::*;

        #[test]
        fn ids_are_strictly_increasing_within_one_millisecond() {
            let mut store = FavoritesStore::in_memory();
            let now = 1_700_000_000_000u64;
            let first = store.mint_id(now);
            let second = store.mint_id(now);
            let third = store.mint_id(now);
            assert!(first < second && second < third);
        }

        #[test]
        fn ids_track_the_clock_when_it_moves_forward() {
            let mut store = FavoritesStore::in_memory();
            let first = store.mint_id(1_000);
            let later = store.mint_id(5_000);
            assert_eq!(first, 1_000);
            assert_eq!(later, 5_000);
        }
    }

    mod persistence {
        use super::*;

        fn temp_path(name: &str) -> PathBuf {
            std::env::temp_dir().join(format!(
                "moodscape-favorites-{}-{}.json",
                name,
                std::process::id()
            ))
        }

        #[test]
        fn round_trips_through_disk() {
            let path = temp_path("roundtrip");
            let mut store = FavoritesStore {
                path: Some(path.clone()),
                entries: Vec::new(),
                last_id: 0,
            };
            store.toggle(&quote("A", "a"));
            store.toggle(&quote("B", "b"));

            let loaded = FavoritesStore::read_entries(&path).expect("read favorites");
            assert_eq!(loaded.len(), 2);
            assert_eq!(loaded[0].text, "A");
            let _ = std::fs::remove_file(&path);
        }

        #[test]
        fn malformed_file_is_a_parse_error() {
            let path = temp_path("malformed");
            std::fs::write(&path, "[{broken").expect("write file");
            assert!(matches!(
                FavoritesStore::read_entries(&path),
                Err(FavoritesError::Parse(_))
            ));
            let _ = std::fs::remove_file(&path);
        }

        #[test]
        fn missing_file_is_an_empty_list() {
            let path = temp_path("missing-never-created");
            let _ = std::fs::remove_file(&path);
            let entries = FavoritesStore::read_entries(&path).expect("missing file tolerated");
            assert!(entries.is_empty());
        }
    }
}
