//! Dashboard page - mood picker, quote card and quick actions.

use iced::widget::{Space, button, column, container, row, scrollable, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::api::{Mood, Quote};
use crate::app::{Message, Tab};
use crate::ui::components::{mood_grid, quote_card};
use crate::ui::theme;

fn section_title<'a>(title: &'a str) -> Element<'a, Message> {
    text(title).size(18).into()
}

fn quick_action<'a>(icon: &'a str, label: String, message: Message) -> Element<'a, Message> {
    button(
        row![
            text(icon).size(18),
            Space::new().width(10),
            text(label).size(14),
        ]
        .align_y(Alignment::Center),
    )
    .on_press(message)
    .padding(Padding::new(14.0).left(18.0).right(18.0))
    .width(Fill)
    .style(theme::action_card)
    .into()
}

/// Build the dashboard page.
pub fn view<'a>(
    moods: &'a [Mood],
    current_mood: Option<&'a str>,
    quote: Option<&'a Quote>,
    is_loading: bool,
    is_favorited: bool,
    auto_play: bool,
    favorites_count: usize,
) -> Element<'a, Message> {
    let favorites_label = if favorites_count > 0 {
        format!("Favorites ({})", favorites_count)
    } else {
        "Favorites".to_string()
    };

    let quick_actions = row![
        quick_action("🎲", "Random Quote".to_string(), Message::RandomQuote),
        Space::new().width(14),
        quick_action("⭐", favorites_label, Message::SelectTab(Tab::Favorites)),
        Space::new().width(14),
        quick_action(
            if auto_play { "⏸️" } else { "▶️" },
            if auto_play {
                "Auto-Play On".to_string()
            } else {
                "Auto-Play".to_string()
            },
            Message::ToggleAutoPlay,
        ),
    ];

    let content = column![
        section_title("How are you feeling today?"),
        Space::new().height(16),
        mood_grid::view(moods, current_mood),
        Space::new().height(28),
        quote_card::view(quote, is_loading, is_favorited, auto_play),
        Space::new().height(28),
        quick_actions,
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
