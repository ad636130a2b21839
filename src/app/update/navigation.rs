//! View state handlers: tabs, theme, auto-play, toasts and the particle
//! field's frame/resize plumbing.

use iced::Task;
use tracing::warn;

use crate::app::message::Message;
use crate::app::state::App;
use crate::ui::widgets::Toast;

impl App {
    /// Handle view-state messages
    pub fn handle_navigation(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::SelectTab(tab) => {
                self.ui.active_tab = *tab;
                Some(Task::none())
            }

            Message::ToggleTheme => {
                self.core.settings.display.dark_mode = !self.core.settings.display.dark_mode;
                if let Err(e) = self.core.settings.save() {
                    warn!("failed to save settings: {}", e);
                }
                Some(Task::none())
            }

            Message::ToggleAutoPlay => {
                self.ui.auto_play = !self.ui.auto_play;
                Some(Task::none())
            }

            Message::ShowToast(msg) => {
                self.ui.toast = Some(Toast::success(msg.clone()));
                self.ui.toast_visible = true;
                // Auto-hide toast after 3 seconds
                Some(Task::perform(
                    async {
                        tokio::time::sleep(std::time::Duration::from_secs(3)).await;
                    },
                    |_| Message::HideToast,
                ))
            }

            Message::ShowErrorToast(msg) => {
                self.ui.toast = Some(Toast::error(msg.clone()));
                self.ui.toast_visible = true;
                // Auto-hide error toast after 4 seconds
                Some(Task::perform(
                    async {
                        tokio::time::sleep(std::time::Duration::from_secs(4)).await;
                    },
                    |_| Message::HideToast,
                ))
            }

            Message::HideToast => {
                self.ui.toast_visible = false;
                Some(Task::none())
            }

            Message::AnimationTick => {
                self.ui.particles.advance();
                Some(Task::none())
            }

            Message::WindowResized(size) => {
                self.ui.particles.resize(*size);
                Some(Task::none())
            }

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::message::Tab;
    use crate::app::update::test_app;

    #[test]
    fn tab_selection_is_applied() {
        let mut app = test_app();
        let _ = app.update(Message::SelectTab(Tab::Favorites));
        assert_eq!(app.ui.active_tab, Tab::Favorites);
    }

    #[test]
    fn auto_play_flag_flips() {
        let mut app = test_app();
        assert!(!app.ui.auto_play);
        let _ = app.update(Message::ToggleAutoPlay);
        assert!(app.ui.auto_play);
        let _ = app.update(Message::ToggleAutoPlay);
        assert!(!app.ui.auto_play);
    }

    #[test]
    fn toast_shows_then_hides() {
        let mut app = test_app();
        let _ = app.update(Message::ShowToast("hello".to_string()));
        assert!(app.ui.toast_visible);
        assert_eq!(
            app.ui.toast.as_ref().map(|t| t.message.as_str()),
            Some("hello")
        );

        let _ = app.update(Message::HideToast);
        assert!(!app.ui.toast_visible);
    }
}
