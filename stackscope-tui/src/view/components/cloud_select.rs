//! Cloud selector overlay

use ratatui::{
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

use crate::model::App;
use crate::view::layout::centered_rect;
use crate::view::theme::Styles;

/// Renders the cloud profile selector
pub fn render(app: &App, frame: &mut Frame) {
    let height = (app.cloud_select.clouds.len() as u16 + 2).max(3);
    let area = centered_rect(36, height, frame.area());

    let block = Block::default()
        .title(" Switch cloud ")
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border_focused());

    frame.render_widget(Clear, area);

    if app.cloud_select.clouds.is_empty() {
        frame.render_widget(
            Paragraph::new(" No cloud profiles found")
                .style(Style::default().fg(Color::Gray))
                .block(block),
            area,
        );
        return;
    }

    let active = app.backend.cloud.name();
    let items: Vec<ListItem> = app
        .cloud_select
        .clouds
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let marker = if name == active { "●" } else { " " };
            let style = if i == app.cloud_select.selected {
                Styles::selected()
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::styled(format!(" {marker} {name}"), style))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
