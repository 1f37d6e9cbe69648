//! Command-line overlay

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::model::App;
use crate::view::layout::centered_rect;
use crate::view::theme::Styles;

/// Renders the command prompt
pub fn render(app: &App, frame: &mut Frame) {
    let width = frame.area().width.saturating_sub(8).min(60);
    let area = centered_rect(width, 3, frame.area());

    let line = Line::from(vec![
        Span::styled(":", Style::default().fg(Color::Yellow)),
        Span::styled(
            app.command.input.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("▏", Style::default().fg(Color::DarkGray)),
    ]);

    let block = Block::default()
        .title(" Command ")
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border_focused());

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(line).block(block), area);
}
