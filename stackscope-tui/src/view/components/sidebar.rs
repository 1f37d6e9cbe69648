//! Left navigation sidebar

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use crate::model::{App, Mode, SidebarEntry};
use crate::view::theme::Styles;

/// Renders the sidebar
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let is_focused = app.mode == Mode::Sidebar;
    let border_style = if is_focused {
        Styles::border_focused()
    } else {
        Styles::border()
    };

    let block = Block::default()
        .title(" Resources ")
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(border_style);

    let items: Vec<ListItem> = app
        .sidebar
        .entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let selected = is_focused && i == app.sidebar.selected;
            let line = match entry {
                SidebarEntry::Section(name) => {
                    Line::styled(format!(" {name}"), Styles::section())
                }
                SidebarEntry::Kind(kind) => styled_entry(kind.label(), selected),
                SidebarEntry::Topology => styled_entry("Topology", selected),
                SidebarEntry::Quit => styled_entry("Quit", selected),
            };
            ListItem::new(line)
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

fn styled_entry(label: &str, selected: bool) -> Line<'static> {
    let style = if selected {
        Styles::selected()
    } else {
        Style::default().fg(Color::White)
    };
    Line::styled(format!("   {label}"), style)
}
