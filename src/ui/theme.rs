//! Theme system for the mood dashboard
//! Supports both dark and light modes with a consistent color palette

use iced::color;
use iced::widget::{button, container, scrollable};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

// ============================================================================
// Color Palette - Dynamic based on theme
// ============================================================================

/// Check if theme is dark mode
fn is_dark(theme: &Theme) -> bool {
    matches!(theme, Theme::Dark)
}

/// Public function to check if theme is dark mode
pub fn is_dark_theme(theme: &Theme) -> bool {
    is_dark(theme)
}

// Dark mode colors (slate, matching the particle veil)
mod dark {
    use super::*;
    pub const BACKGROUND: Color = color!(0x0f172a);
    pub const SURFACE: Color = color!(0x1e293b);
    pub const SURFACE_ELEVATED: Color = color!(0x273449);
    pub const BORDER: Color = color!(0x334155);
    pub const TEXT_MUTED: Color = color!(0x64748b);
    pub const TEXT_SECONDARY: Color = color!(0x94a3b8);
    pub const TEXT_PRIMARY: Color = color!(0xf8fafc);
}

// Light mode colors
mod light {
    use super::*;
    pub const BACKGROUND: Color = color!(0xf1f5f9);
    pub const SURFACE: Color = color!(0xffffff);
    pub const SURFACE_ELEVATED: Color = color!(0xffffff);
    pub const BORDER: Color = color!(0xcbd5e1);
    pub const TEXT_MUTED: Color = color!(0x94a3b8);
    pub const TEXT_SECONDARY: Color = color!(0x475569);
    pub const TEXT_PRIMARY: Color = color!(0x0f172a);
}

/// Get background color based on theme
pub fn background(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BACKGROUND
    } else {
        light::BACKGROUND
    }
}

/// Get surface color based on theme
pub fn surface(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::SURFACE
    } else {
        light::SURFACE
    }
}

/// Get elevated surface color based on theme
pub fn surface_elevated(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::SURFACE_ELEVATED
    } else {
        light::SURFACE_ELEVATED
    }
}

/// Get border color based on theme
pub fn border_color(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BORDER
    } else {
        light::BORDER
    }
}

/// Get muted text color based on theme
pub fn text_muted(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_MUTED
    } else {
        light::TEXT_MUTED
    }
}

/// Get secondary text color based on theme
pub fn text_secondary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_SECONDARY
    } else {
        light::TEXT_SECONDARY
    }
}

/// Get primary text color based on theme
pub fn text_primary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_PRIMARY
    } else {
        light::TEXT_PRIMARY
    }
}

/// Shadow color for floating elements
pub fn shadow_color(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgba(0.0, 0.0, 0.0, 0.5)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, 0.15)
    }
}

/// Primary accent (violet)
pub const ACCENT: Color = color!(0x8b5cf6);

/// Hover state for primary accent
pub const ACCENT_HOVER: Color = color!(0xa78bfa);

pub fn success(_theme: &Theme) -> Color {
    color!(0x22c55e)
}

pub fn danger(_theme: &Theme) -> Color {
    color!(0xef4444)
}

// ============================================================================
// Container Styles
// ============================================================================

/// Main content area background
pub fn main_content(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background(theme))),
        text_color: Some(text_primary(theme)),
        ..Default::default()
    }
}

/// Card surface with border and soft shadow
pub fn card(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface(theme))),
        border: Border {
            radius: 16.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        shadow: Shadow {
            color: shadow_color(theme),
            offset: Vector::new(0.0, 4.0),
            blur_radius: 12.0,
        },
        ..Default::default()
    }
}

// ============================================================================
// Button Styles
// ============================================================================

/// Primary button - filled accent
pub fn primary_button(_theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(ACCENT)),
        text_color: Color::WHITE,
        border: Border {
            radius: 24.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(ACCENT_HOVER)),
            ..base
        },
        _ => base,
    }
}

/// Icon button (circular, transparent until hovered)
pub fn icon_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: text_secondary(theme),
        border: Border {
            radius: 50.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(surface_elevated(theme))),
            text_color: text_primary(theme),
            ..base
        },
        _ => base,
    }
}

/// Navigation tab button
pub fn nav_tab(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme, status| {
        let base = button::Style {
            background: Some(Background::Color(if active {
                ACCENT
            } else {
                Color::TRANSPARENT
            })),
            text_color: if active {
                Color::WHITE
            } else {
                text_secondary(theme)
            },
            border: Border {
                radius: 18.0.into(),
                ..Default::default()
            },
            ..Default::default()
        };

        match status {
            button::Status::Hovered if !active => button::Style {
                background: Some(Background::Color(surface_elevated(theme))),
                text_color: text_primary(theme),
                ..base
            },
            _ => base,
        }
    }
}

/// Action card button (quick actions row)
pub fn action_card(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(surface(theme))),
        text_color: text_primary(theme),
        border: Border {
            radius: 12.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(surface_elevated(theme))),
            border: Border {
                color: ACCENT,
                ..base.border
            },
            ..base
        },
        _ => base,
    }
}

/// Scrollbar style for page content
pub fn page_scrollable(theme: &Theme, _status: scrollable::Status) -> scrollable::Style {
    let scrollbar = scrollable::Rail {
        background: Some(Background::Color(Color::TRANSPARENT)),
        border: Border::default(),
        scroller: scrollable::Scroller {
            background: Background::Color(border_color(theme)),
            border: Border {
                radius: 4.0.into(),
                ..Default::default()
            },
        },
    };

    scrollable::Style {
        container: container::Style::default(),
        vertical_rail: scrollbar.clone(),
        horizontal_rail: scrollbar,
        gap: None,
        auto_scroll: scrollable::AutoScroll {
            background: Background::Color(surface(theme)),
            border: Border::default(),
            shadow: Shadow::default(),
            icon: text_muted(theme),
        },
    }
}
