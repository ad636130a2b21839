//! Quote display card with the per-quote action row.

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Fill};

use crate::api::Quote;
use crate::app::Message;
use crate::ui::theme;

fn action_button<'a>(icon: &'a str, on_press: Message) -> Element<'a, Message> {
    button(text(icon).size(18))
        .on_press(on_press)
        .padding(10)
        .style(theme::icon_button)
        .into()
}

fn loading_state<'a>() -> Element<'a, Message> {
    column![
        text("⏳").size(30),
        Space::new().height(8),
        text("Finding your perfect quote...")
            .size(14)
            .style(|theme| text::Style {
                color: Some(theme::text_secondary(theme)),
            }),
    ]
    .align_x(Alignment::Center)
    .into()
}

fn quote_body<'a>(
    quote: &'a Quote,
    is_favorited: bool,
    auto_play: bool,
) -> Element<'a, Message> {
    let quote_text = text(format!("\"{}\"", quote.text)).size(22);

    let author = text(format!("— {}", quote.author))
        .size(15)
        .style(|theme| text::Style {
            color: Some(theme::text_secondary(theme)),
        });

    let actions = row![
        action_button(if is_favorited { "❤️" } else { "🤍" }, Message::ToggleFavorite),
        Space::new().width(8),
        action_button("🔊", Message::SpeakQuote),
        Space::new().width(8),
        action_button("📤", Message::ShareQuote),
        Space::new().width(8),
        action_button(if auto_play { "⏸️" } else { "▶️" }, Message::ToggleAutoPlay),
    ]
    .align_y(Alignment::Center);

    column![
        quote_text,
        Space::new().height(12),
        author,
        Space::new().height(20),
        actions,
    ]
    .align_x(Alignment::Center)
    .into()
}

/// Build the quote card: spinner while loading, otherwise the current quote
/// (or a nudge to pick a mood when nothing is loaded yet).
pub fn view<'a>(
    quote: Option<&'a Quote>,
    is_loading: bool,
    is_favorited: bool,
    auto_play: bool,
) -> Element<'a, Message> {
    let content: Element<'a, Message> = if is_loading {
        loading_state()
    } else if let Some(quote) = quote {
        quote_body(quote, is_favorited, auto_play)
    } else {
        text("Pick a mood to get started")
            .size(16)
            .style(|theme| text::Style {
                color: Some(theme::text_muted(theme)),
            })
            .into()
    };

    container(content)
        .width(Fill)
        .padding(32)
        .style(theme::card)
        .into()
}
