//! Main layout rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::{App, Mode};

use super::components;
use super::theme::Styles;

/// Renders the main layout
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // Three bands: title bar + main content + status bar
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title bar
            Constraint::Min(1),    // main content
            Constraint::Length(1), // status bar
        ])
        .split(size);

    let title_area = main_layout[0];
    let content_area = main_layout[1];
    let status_area = main_layout[2];

    render_title_bar(app, frame, title_area);

    // Two columns: navigation sidebar + content
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(20), Constraint::Percentage(80)])
        .split(content_area);

    components::sidebar::render(app, frame, columns[0]);
    render_page_content(app, frame, columns[1]);

    components::statusbar::render(app, frame, status_area);

    // Overlays go on top
    match app.mode {
        Mode::Help => components::help::render(frame),
        Mode::Command => components::command::render(app, frame),
        Mode::CloudSelect => components::cloud_select::render(app, frame),
        _ => {}
    }
}

/// Renders the title bar
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(format!(
        " stackscope — {}",
        app.backend.cloud.name()
    ))
    .style(Styles::titlebar());
    frame.render_widget(title, area);
}

/// Renders the content column for the current mode
fn render_page_content(app: &App, frame: &mut Frame, area: Rect) {
    let is_focused = app.mode != Mode::Sidebar;
    let border_style = if is_focused {
        Styles::border_focused()
    } else {
        Styles::border()
    };

    let block = Block::default()
        .title(format!(" {} ", page_title(app)))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    match &app.child {
        Some(child) => child.draw(frame, inner_area),
        None => render_home(frame, inner_area),
    }
}

/// Title of the content column for the current mode
fn page_title(app: &App) -> String {
    match app.mode {
        Mode::List => app
            .current_kind
            .map(|k| k.label().to_owned())
            .unwrap_or_else(|| app.mode.title().to_owned()),
        Mode::Graph => match &app.focal {
            Some(focal) => format!("Graph: {} ({})", focal.name, focal.short_id()),
            None => Mode::Graph.title().to_owned(),
        },
        // Overlays keep the underlying view's title.
        Mode::Help | Mode::Command | Mode::CloudSelect => app
            .current_kind
            .map_or_else(|| "Overview".to_owned(), |k| k.label().to_owned()),
        mode => mode.title().to_owned(),
    }
}

/// Welcome text shown before any view is opened
fn render_home(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::styled(
            "  Welcome to stackscope",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::styled(
            "  Pick a resource family on the left, or:",
            Style::default().fg(Color::Gray),
        ),
        Line::from(""),
        Line::styled("    /   search everything", Style::default().fg(Color::DarkGray)),
        Line::styled("    t   topology tree", Style::default().fg(Color::DarkGray)),
        Line::styled("    :   command line", Style::default().fg(Color::DarkGray)),
        Line::styled("    ?   help", Style::default().fg(Color::DarkGray)),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

/// Centers a popup of the given size inside `area`.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use tokio::runtime::Runtime;

    use stackscope_core::types::{ResourceKind, ResourceRef};

    use super::*;
    use crate::backend::{Backend, CloudService, Dispatcher};

    fn test_app() -> (App, Runtime) {
        let runtime = Runtime::new().unwrap();
        let (tx, _rx_keepalive) = mpsc::channel();
        let dispatcher = Dispatcher::new(runtime.handle().clone(), tx);
        let backend = Backend::new(dispatcher, CloudService::demo("demo"), vec!["demo".into()]);
        (App::new(backend), runtime)
    }

    #[test]
    fn graph_title_names_the_focal_resource() {
        let (mut app, _rt) = test_app();
        app.mode = Mode::Graph;
        app.focal = Some(ResourceRef::new(
            ResourceKind::Server,
            "0ea61465-7a25-4f53-b0b1-21a1f2ba133c",
            "web1",
        ));
        assert_eq!(page_title(&app), "Graph: web1 (0ea61465)");
    }

    #[test]
    fn list_title_uses_the_kind_label() {
        let (mut app, _rt) = test_app();
        app.mode = Mode::List;
        app.current_kind = Some(ResourceKind::FloatingIp);
        assert_eq!(page_title(&app), "Floating IP");
    }
}
