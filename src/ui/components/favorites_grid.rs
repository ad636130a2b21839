//! Favorites grid with its explicit empty state.

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Fill};

use crate::app::{Message, Tab};
use crate::features::FavoriteQuote;
use crate::ui::theme;

/// Cards per row
const COLUMNS: usize = 3;

fn empty_state<'a>() -> Element<'a, Message> {
    let explore = button(text("Explore Quotes").size(14))
        .on_press(Message::SelectTab(Tab::Dashboard))
        .padding(iced::Padding::new(10.0).left(24.0).right(24.0))
        .style(theme::primary_button);

    container(
        column![
            text("🤍").size(44),
            Space::new().height(10),
            text("No favorites yet").size(18),
            Space::new().height(6),
            text("Start liking quotes to see them here!")
                .size(14)
                .style(|theme| text::Style {
                    color: Some(theme::text_secondary(theme)),
                }),
            Space::new().height(18),
            explore,
        ]
        .align_x(Alignment::Center),
    )
    .width(Fill)
    .padding(48)
    .center_x(Fill)
    .into()
}

fn favorite_card<'a>(favorite: &'a FavoriteQuote) -> Element<'a, Message> {
    let remove = button(text("🗑️").size(15))
        .on_press(Message::RemoveFavorite(favorite.id))
        .padding(8)
        .style(theme::icon_button);

    let body = column![
        text(format!("\"{}\"", favorite.text)).size(15),
        Space::new().height(8),
        text(format!("— {}", favorite.author))
            .size(13)
            .style(|theme| text::Style {
                color: Some(theme::text_secondary(theme)),
            }),
        Space::new().height(6),
        text(favorite.saved_at.clone())
            .size(11)
            .style(|theme| text::Style {
                color: Some(theme::text_muted(theme)),
            }),
    ]
    .width(Fill);

    container(
        row![body, remove]
            .align_y(Alignment::Start)
            .width(Fill),
    )
    .padding(18)
    .width(Fill)
    .style(theme::card)
    .into()
}

/// Build the favorites grid; insertion order is display order.
pub fn view<'a>(favorites: &'a [FavoriteQuote]) -> Element<'a, Message> {
    if favorites.is_empty() {
        return empty_state();
    }

    let mut rows: Vec<Element<'a, Message>> = Vec::new();
    for chunk in favorites.chunks(COLUMNS) {
        let mut cards: Vec<Element<'a, Message>> = Vec::new();
        for favorite in chunk {
            cards.push(favorite_card(favorite));
            cards.push(Space::new().width(16).into());
        }
        cards.pop();

        for _ in chunk.len()..COLUMNS {
            cards.push(Space::new().width(16).into());
            cards.push(Space::new().width(Fill).into());
        }

        rows.push(row(cards).into());
        rows.push(Space::new().height(16).into());
    }
    rows.pop();

    column(rows).width(Fill).into()
}
