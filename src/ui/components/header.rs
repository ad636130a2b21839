//! App header: title, view tabs and the theme toggle.

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Fill};

use crate::app::{Message, Tab};
use crate::ui::theme;

fn tab_button<'a>(tab: Tab, active: Tab, favorites_count: usize) -> Element<'a, Message> {
    let mut label = tab.label().to_string();
    if tab == Tab::Favorites && favorites_count > 0 {
        label = format!("{} {}", label, favorites_count);
    }

    button(text(label).size(14))
        .on_press(Message::SelectTab(tab))
        .padding(iced::Padding::new(8.0).left(18.0).right(18.0))
        .style(theme::nav_tab(tab == active))
        .into()
}

pub fn view<'a>(active: Tab, favorites_count: usize, dark_mode: bool) -> Element<'a, Message> {
    let title = column![
        text("🌈 MoodScape").size(28),
        text("Your Personal Emotional Companion")
            .size(13)
            .style(|theme| text::Style {
                color: Some(theme::text_secondary(theme)),
            }),
    ];

    let tabs = row![
        tab_button(Tab::Dashboard, active, favorites_count),
        Space::new().width(6),
        tab_button(Tab::Favorites, active, favorites_count),
        Space::new().width(6),
        tab_button(Tab::History, active, favorites_count),
    ]
    .align_y(Alignment::Center);

    let theme_toggle = button(text(if dark_mode { "☀️" } else { "🌙" }).size(18))
        .on_press(Message::ToggleTheme)
        .padding(10)
        .style(theme::icon_button);

    container(
        row![
            title,
            Space::new().width(Fill),
            tabs,
            Space::new().width(16),
            theme_toggle,
        ]
        .align_y(Alignment::Center)
        .padding(iced::Padding::new(20.0).bottom(12.0)),
    )
    .width(Fill)
    .into()
}
