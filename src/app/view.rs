//! Application view rendering

use iced::widget::canvas::Canvas;
use iced::widget::{Space, column, container, stack};
use iced::{Alignment, Element, Fill};

use super::App;
use super::message::{Message, Tab};
use crate::ui::{components, pages, theme, widgets};

impl App {
    /// Build the full window view
    pub fn view(&self) -> Element<'_, Message> {
        // Decorative particle layer behind everything
        let particles: Element<'_, Message> = Canvas::new(&self.ui.particles)
            .width(Fill)
            .height(Fill)
            .into();

        let header = components::header::view(
            self.ui.active_tab,
            self.library.favorites.len(),
            self.core.settings.display.dark_mode,
        );

        let page: Element<'_, Message> = match self.ui.active_tab {
            Tab::Dashboard => pages::dashboard::view(
                &self.library.moods,
                self.library.current_mood.as_deref(),
                self.library.current_quote.as_ref(),
                self.ui.is_loading,
                self.library.current_is_favorited(),
                self.ui.auto_play,
                self.library.favorites.len(),
            ),
            Tab::Favorites => pages::favorites::view(self.library.favorites.entries()),
            Tab::History => pages::history::view(),
        };

        let chrome = column![header, page].width(Fill).height(Fill);

        // Toast overlay, bottom center
        let toast_overlay: Element<'_, Message> = if self.ui.toast_visible {
            if let Some(toast) = &self.ui.toast {
                container(widgets::view_toast(toast))
                    .width(Fill)
                    .height(Fill)
                    .align_x(Alignment::Center)
                    .align_y(Alignment::End)
                    .padding(iced::Padding::new(0.0).bottom(24.0))
                    .into()
            } else {
                Space::new().width(0).height(0).into()
            }
        } else {
            Space::new().width(0).height(0).into()
        };

        container(
            stack![particles, chrome, toast_overlay]
                .width(Fill)
                .height(Fill),
        )
        .width(Fill)
        .height(Fill)
        .style(theme::main_content)
        .into()
    }
}
