//! Favorites toggle and removal handlers.

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::ToggleOutcome;

impl App {
    /// Handle favorites-related messages
    pub fn handle_favorites(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::ToggleFavorite => {
                let Some(quote) = self.library.current_quote.clone() else {
                    return Some(Task::none());
                };
                let toast = match self.library.favorites.toggle(&quote) {
                    ToggleOutcome::Added => "Added to favorites! ❤️",
                    ToggleOutcome::Removed => "Removed from favorites 💔",
                };
                Some(Task::done(Message::ShowToast(toast.to_string())))
            }

            Message::RemoveFavorite(id) => {
                if self.library.favorites.remove(*id) {
                    Some(Task::done(Message::ShowToast(
                        "Favorite removed 🗑️".to_string(),
                    )))
                } else {
                    Some(Task::none())
                }
            }

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Quote;
    use crate::app::update::test_app;

    #[test]
    fn toggling_without_a_quote_is_a_noop() {
        let mut app = test_app();
        let _ = app.update(Message::ToggleFavorite);
        assert!(app.library.favorites.entries().is_empty());
    }

    #[test]
    fn toggle_pair_restores_the_list() {
        let mut app = test_app();
        app.library.current_quote = Some(Quote::new("A", "a", None));
        let _ = app.update(Message::ToggleFavorite);
        assert_eq!(app.library.favorites.len(), 1);
        let _ = app.update(Message::ToggleFavorite);
        assert!(app.library.favorites.entries().is_empty());
    }

    #[test]
    fn favorite_a_then_b_then_unfavorite_a_leaves_b() {
        let mut app = test_app();
        app.library.current_quote = Some(Quote::new("A", "a", None));
        let _ = app.update(Message::ToggleFavorite);
        app.library.current_quote = Some(Quote::new("B", "b", None));
        let _ = app.update(Message::ToggleFavorite);
        app.library.current_quote = Some(Quote::new("A", "a", None));
        let _ = app.update(Message::ToggleFavorite);

        let texts: Vec<&str> = app
            .library
            .favorites
            .entries()
            .iter()
            .map(|f| f.text.as_str())
            .collect();
        assert_eq!(texts, ["B"]);
    }

    #[test]
    fn remove_by_id_drops_exactly_that_entry() {
        let mut app = test_app();
        app.library.current_quote = Some(Quote::new("A", "a", None));
        let _ = app.update(Message::ToggleFavorite);
        app.library.current_quote = Some(Quote::new("B", "b", None));
        let _ = app.update(Message::ToggleFavorite);

        let first_id = app.library.favorites.entries()[0].id;
        let _ = app.update(Message::RemoveFavorite(first_id));

        let texts: Vec<&str> = app
            .library
            .favorites
            .entries()
            .iter()
            .map(|f| f.text.as_str())
            .collect();
        assert_eq!(texts, ["B"]);
    }
}
