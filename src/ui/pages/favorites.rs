//! Favorites page - saved quotes grid.

use iced::widget::{Space, column, container, scrollable, text};
use iced::{Element, Fill, Padding};

use crate::app::Message;
use crate::features::FavoriteQuote;
use crate::ui::components::favorites_grid;
use crate::ui::theme;

/// Build the favorites page.
pub fn view<'a>(favorites: &'a [FavoriteQuote]) -> Element<'a, Message> {
    let subtitle = format!(
        "{} saved inspiration{}",
        favorites.len(),
        if favorites.len() == 1 { "" } else { "s" }
    );

    let content = column![
        text("Your Favorite Quotes").size(22),
        Space::new().height(4),
        text(subtitle).size(13).style(|theme| text::Style {
            color: Some(theme::text_secondary(theme)),
        }),
        Space::new().height(20),
        favorites_grid::view(favorites),
        Space::new().height(40),
    ]
    .padding(Padding::new(24.0).top(0.0));

    container(
        scrollable(content)
            .width(Fill)
            .height(Fill)
            .style(theme::page_scrollable),
    )
    .width(Fill)
    .height(Fill)
    .into()
}
