//! Whole-cloud topology view
//!
//! Renders the core topology text and colors each line by the resource
//! it names and the status tag it carries.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use stackscope_core::render::render_topology;
use stackscope_core::RelationshipSnapshot;

use crate::backend::Backend;
use crate::message::{LoadPayload, RequestId};
use crate::view::theme::status_color;

use super::{ChildOutcome, ChildView};

pub struct TopologyModel {
    snapshot: Option<RelationshipSnapshot>,
    scroll: u16,
    loading: bool,
    error: Option<String>,
    pending: Option<RequestId>,
}

impl TopologyModel {
    pub fn new() -> Self {
        Self {
            snapshot: None,
            scroll: 0,
            loading: true,
            error: None,
            pending: None,
        }
    }

    fn line_style(line: &str) -> Style {
        let content = line.trim_start_matches(['├', '└', '│', '─', ' ']);
        if let Some(status) = line.split('[').nth(1).and_then(|s| s.split(']').next()) {
            return Style::default().fg(status_color(status));
        }
        if content.starts_with("Network:") {
            Style::default().fg(Color::Cyan)
        } else if content.starts_with("FIP:") {
            Style::default().fg(Color::Magenta)
        } else if content.starts_with("Vol:") {
            Style::default().fg(Color::Yellow)
        } else if content.starts_with("Router:") {
            Style::default().fg(Color::Blue)
        } else if content.starts_with("Unattached") {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::White)
        }
    }
}

impl Default for TopologyModel {
    fn default() -> Self {
        Self::new()
    }
}

impl ChildView for TopologyModel {
    fn init(&mut self, backend: &Backend) {
        self.loading = true;
        self.error = None;
        let aggregator = backend.cloud.aggregator();
        self.pending = Some(backend.dispatcher.dispatch(async move {
            LoadPayload::Topology(aggregator.build_full_topology().await)
        }));
    }

    fn handle_key(&mut self, key: KeyEvent, _backend: &Backend) -> Option<ChildOutcome> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll = self.scroll.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll = self.scroll.saturating_add(1);
            }
            KeyCode::Home => self.scroll = 0,
            _ => {}
        }
        None
    }

    fn on_load(&mut self, payload: LoadPayload) {
        self.pending = None;
        self.loading = false;
        if let LoadPayload::Topology(result) = payload {
            match result {
                Ok(snapshot) => self.snapshot = Some(snapshot),
                Err(err) => self.error = Some(err.to_string()),
            }
        }
    }

    fn pending_request(&self) -> Option<RequestId> {
        self.pending
    }

    fn draw(&self, frame: &mut Frame, area: Rect) {
        if self.loading {
            frame.render_widget(
                Paragraph::new("  Loading...").style(Style::default().fg(Color::DarkGray)),
                area,
            );
            return;
        }
        if let Some(ref err) = self.error {
            frame.render_widget(
                Paragraph::new(format!("  Error: {err}")).style(Style::default().fg(Color::Red)),
                area,
            );
            return;
        }
        let Some(ref snapshot) = self.snapshot else {
            return;
        };

        let text = render_topology(snapshot);
        let lines: Vec<Line> = text
            .lines()
            .map(|l| Line::styled(format!(" {l}"), Self::line_style(l)))
            .collect();
        frame.render_widget(Paragraph::new(lines).scroll((self.scroll, 0)), area);
    }
}
