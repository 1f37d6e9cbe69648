//! Bottom status bar component

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::{App, Mode};
use crate::view::theme::Styles;

/// Renders the status bar
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // Status messages go on the right of the hints
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// Key hints for the current mode
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    match app.mode {
        Mode::Sidebar => vec![
            ("↑↓", "Navigate"),
            ("Enter", "Open"),
            ("/", "Search"),
            (":", "Command"),
            ("c", "Clouds"),
            ("q", "Quit"),
        ],
        Mode::List => vec![
            ("↑↓", "Select"),
            ("Enter", "Detail"),
            ("g", "Graph"),
            ("r", "Refresh"),
            ("Esc", "Back"),
        ],
        Mode::Detail => vec![
            ("y", "Raw"),
            ("g", "Graph"),
            ("r", "Refresh"),
            ("Esc", "Back"),
        ],
        Mode::Graph => vec![("g", "Close"), ("r", "Refresh"), ("Esc", "Back")],
        Mode::Topology => vec![("↑↓", "Scroll"), ("r", "Refresh"), ("Esc", "Back")],
        Mode::Search => vec![("↑↓", "Select"), ("Enter", "Detail"), ("Esc", "Back")],
        Mode::Command => vec![("Tab", "Complete"), ("Enter", "Run"), ("Esc", "Cancel")],
        Mode::Help => vec![("Esc", "Close")],
        Mode::Shell => vec![("↑↓", "Scroll"), ("Esc", "Back")],
        Mode::CloudSelect => vec![("↑↓", "Select"), ("Enter", "Switch"), ("Esc", "Cancel")],
    }
}
