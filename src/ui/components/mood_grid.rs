//! Mood picker grid
//!
//! One card per mood from the catalog, styled by the mood's visual mapping
//! (emoji, gradient, accent color). The active mood gets the full gradient;
//! everything else sits on a plain surface.

use iced::widget::{Space, button, column, row, text};
use iced::{Alignment, Color, Element, Fill, color};

use crate::api::Mood;
use crate::app::Message;
use crate::ui::theme;

/// Cards per row
const COLUMNS: usize = 4;

/// Visual identity of a mood name: emoji plus gradient stops and accent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoodVisual {
    pub emoji: &'static str,
    pub accent: Color,
    pub gradient: [Color; 3],
}

/// Map a mood name to its visual identity. Unrecognized names get the happy
/// visual so a server-side catalog change can never break rendering.
pub fn mood_visual(name: &str) -> MoodVisual {
    match name {
        "sad" => MoodVisual {
            emoji: "😢",
            accent: color!(0x4682b4),
            gradient: [color!(0x4682b4), color!(0x6a5acd), color!(0x87ceeb)],
        },
        "tired" => MoodVisual {
            emoji: "😴",
            accent: color!(0x696969),
            gradient: [color!(0x696969), color!(0x2f4f4f), color!(0x778899)],
        },
        "motivated" => MoodVisual {
            emoji: "💪",
            accent: color!(0x32cd32),
            gradient: [color!(0x32cd32), color!(0x00fa9a), color!(0x98fb98)],
        },
        "calm" => MoodVisual {
            emoji: "😌",
            accent: color!(0x87ceeb),
            gradient: [color!(0x87ceeb), color!(0xe6e6fa), color!(0xafeeee)],
        },
        "angry" => MoodVisual {
            emoji: "😠",
            accent: color!(0xff4500),
            gradient: [color!(0xff4500), color!(0xdc143c), color!(0xb22222)],
        },
        "excited" => MoodVisual {
            emoji: "🎉",
            accent: color!(0xff69b4),
            gradient: [color!(0xff69b4), color!(0xff1493), color!(0xda70d6)],
        },
        // "happy" and anything unknown
        _ => MoodVisual {
            emoji: "😊",
            accent: color!(0xffd700),
            gradient: [color!(0xffd700), color!(0xff8c00), color!(0xff69b4)],
        },
    }
}

fn mood_card_style(
    visual: MoodVisual,
    active: bool,
) -> impl Fn(&iced::Theme, iced::widget::button::Status) -> iced::widget::button::Style {
    move |theme, status| {
        let hovered = matches!(status, iced::widget::button::Status::Hovered);

        let background = if active {
            // 135 degree three-stop gradient, the mood's signature look
            iced::Background::Gradient(iced::Gradient::Linear(
                iced::gradient::Linear::new(std::f32::consts::PI * 0.75)
                    .add_stop(0.0, visual.gradient[0])
                    .add_stop(0.5, visual.gradient[1])
                    .add_stop(1.0, visual.gradient[2]),
            ))
        } else {
            iced::Background::Color(theme::surface(theme))
        };

        iced::widget::button::Style {
            background: Some(background),
            text_color: if active {
                Color::WHITE
            } else {
                theme::text_primary(theme)
            },
            border: iced::Border {
                radius: 14.0.into(),
                width: 1.0,
                color: if active || hovered {
                    visual.accent
                } else {
                    theme::border_color(theme)
                },
            },
            shadow: iced::Shadow {
                color: theme::shadow_color(theme),
                offset: iced::Vector::new(0.0, if hovered { 6.0 } else { 2.0 }),
                blur_radius: if hovered { 14.0 } else { 6.0 },
            },
            ..Default::default()
        }
    }
}

fn mood_card<'a>(mood: &Mood, active: bool) -> Element<'a, Message> {
    let visual = mood_visual(&mood.name);

    let content = column![
        text(visual.emoji).size(30),
        Space::new().height(6),
        text(mood.name.clone()).size(13),
    ]
    .align_x(Alignment::Center)
    .width(Fill);

    button(content)
        .on_press(Message::SelectMood(mood.clone()))
        .padding(14)
        .width(Fill)
        .style(mood_card_style(visual, active))
        .into()
}

/// Build the mood grid for the current catalog.
pub fn view<'a>(moods: &'a [Mood], current_mood: Option<&'a str>) -> Element<'a, Message> {
    let mut rows: Vec<Element<'a, Message>> = Vec::new();

    for chunk in moods.chunks(COLUMNS) {
        let mut cards: Vec<Element<'a, Message>> = Vec::new();
        for mood in chunk {
            let active = current_mood == Some(mood.name.as_str());
            cards.push(mood_card(mood, active));
            cards.push(Space::new().width(14).into());
        }
        cards.pop();

        // Pad short rows so cards keep their width
        for _ in chunk.len()..COLUMNS {
            cards.push(Space::new().width(14).into());
            cards.push(Space::new().width(Fill).into());
        }

        rows.push(row(cards).into());
        rows.push(Space::new().height(14).into());
    }
    rows.pop();

    column(rows).width(Fill).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_catalog_mood_has_a_distinct_emoji() {
        let names = ["happy", "sad", "tired", "motivated", "calm", "angry", "excited"];
        let mut emojis: Vec<&str> = names.iter().map(|n| mood_visual(n).emoji).collect();
        emojis.sort();
        emojis.dedup();
        assert_eq!(emojis.len(), names.len());
    }

    #[test]
    fn unknown_mood_gets_the_happy_visual() {
        assert_eq!(mood_visual("nostalgic"), mood_visual("happy"));
    }
}
