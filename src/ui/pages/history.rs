//! History page - mood tracking placeholder.

use iced::widget::{Space, column, container, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::ui::theme;

/// Build the history page. Analytics are not built yet; this is the
/// placeholder panel.
pub fn view<'a>() -> Element<'a, Message> {
    let panel = container(
        column![
            text("📊").size(44),
            Space::new().height(10),
            text("Analytics Coming Soon").size(18),
            Space::new().height(6),
            text("Mood tracking and insights will be available in the next update!")
                .size(14)
                .style(|theme| text::Style {
                    color: Some(theme::text_secondary(theme)),
                }),
        ]
        .align_x(Alignment::Center),
    )
    .width(Fill)
    .padding(48)
    .style(theme::card);

    let content = column![
        text("Your Mood History").size(22),
        Space::new().height(4),
        text("Track your emotional journey")
            .size(13)
            .style(|theme| text::Style {
                color: Some(theme::text_secondary(theme)),
            }),
        Space::new().height(20),
        panel,
    ]
    .padding(Padding::new(24.0).top(0.0));

    container(content).width(Fill).height(Fill).into()
}
