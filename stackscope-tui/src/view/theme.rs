//! Theme and style definitions

use ratatui::style::{Color, Modifier, Style};

/// Common styles
pub struct Styles;

impl Styles {
    /// Normal border style
    pub fn border() -> Style {
        Style::default().fg(Color::Rgb(62, 62, 62))
    }

    /// Focused border style
    pub fn border_focused() -> Style {
        Style::default().fg(Color::Rgb(0, 122, 204))
    }

    /// Selected item style
    pub fn selected() -> Style {
        Style::default()
            .bg(Color::Rgb(38, 79, 120))
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    /// Title style
    pub fn title() -> Style {
        Style::default()
            .fg(Color::Rgb(212, 212, 212))
            .add_modifier(Modifier::BOLD)
    }

    /// Title bar style
    pub fn titlebar() -> Style {
        Style::default()
            .bg(Color::Rgb(0, 122, 204))
            .fg(Color::White)
    }

    /// Status bar style
    pub fn statusbar() -> Style {
        Style::default()
            .bg(Color::Rgb(0, 122, 204))
            .fg(Color::White)
    }

    /// Key hint style
    pub fn hint_key() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    /// Key hint description style
    pub fn hint_desc() -> Style {
        Style::default().fg(Color::Rgb(180, 180, 180))
    }

    /// Section header style in the sidebar
    pub fn section() -> Style {
        Style::default()
            .fg(Color::Rgb(128, 128, 128))
            .add_modifier(Modifier::BOLD)
    }
}

/// Maps raw API status strings onto traffic-light colors.
pub fn status_color(status: &str) -> Color {
    match status.to_ascii_uppercase().as_str() {
        "ACTIVE" | "UP" | "IN-USE" | "AVAILABLE" | "ENABLED" => Color::Green,
        "SHUTOFF" | "DOWN" | "DISABLED" => Color::Yellow,
        "ERROR" => Color::Red,
        _ => Color::Gray,
    }
}
