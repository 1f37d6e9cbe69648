//! Help overlay

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::view::layout::centered_rect;
use crate::view::theme::Styles;

const BINDINGS: &[(&str, &str)] = &[
    ("↑/↓, j/k", "Move selection / scroll"),
    ("Enter", "Open the selected item"),
    ("Esc", "Back / close"),
    ("g", "Toggle relationship graph"),
    ("t", "Topology tree"),
    ("/", "Search everything"),
    (":", "Command line (:srv, :net, :!cmd ...)"),
    ("y", "Raw record (in detail view)"),
    ("r", "Refresh the current view"),
    ("c", "Switch cloud"),
    ("q", "Quit (Ctrl+C anywhere)"),
];

/// Renders the help overlay
pub fn render(frame: &mut Frame) {
    let height = BINDINGS.len() as u16 + 4;
    let area = centered_rect(52, height, frame.area());

    let mut lines = vec![Line::from("")];
    for (key, desc) in BINDINGS {
        lines.push(Line::from(vec![
            Span::styled(format!("  {key:<12}"), Styles::hint_key()),
            Span::styled(*desc, Style::default().fg(Color::White)),
        ]));
    }

    let block = Block::default()
        .title(" Help ")
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border_focused());

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
