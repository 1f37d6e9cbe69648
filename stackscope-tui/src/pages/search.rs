//! Live cross-service search
//!
//! Each keystroke schedules a debounced fetch; only the newest request
//! ID is remembered, so results from superseded keystrokes are dropped
//! by the staleness check before they reach this view.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use stackscope_core::types::SearchHit;

use crate::backend::Backend;
use crate::message::{LoadPayload, RequestId};

use super::{ChildOutcome, ChildView};

const DEBOUNCE: Duration = Duration::from_millis(300);

pub struct SearchModel {
    query: String,
    hits: Vec<SearchHit>,
    selected: usize,
    searching: bool,
    error: Option<String>,
    pending: Option<RequestId>,
}

impl SearchModel {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            hits: Vec::new(),
            selected: 0,
            searching: false,
            error: None,
            pending: None,
        }
    }

    fn schedule(&mut self, backend: &Backend) {
        self.error = None;
        let query = self.query.clone();
        if query.trim().is_empty() {
            self.hits.clear();
            self.selected = 0;
            self.searching = false;
            self.pending = None;
            return;
        }
        self.searching = true;
        let aggregator = backend.cloud.aggregator();
        self.pending = Some(backend.dispatcher.dispatch_after(DEBOUNCE, async move {
            LoadPayload::Search(aggregator.search(&query).await)
        }));
    }
}

impl Default for SearchModel {
    fn default() -> Self {
        Self::new()
    }
}

impl ChildView for SearchModel {
    fn init(&mut self, _backend: &Backend) {
        // Nothing to fetch until the user types.
    }

    fn handle_key(&mut self, key: KeyEvent, backend: &Backend) -> Option<ChildOutcome> {
        match key.code {
            KeyCode::Char(c) => {
                self.query.push(c);
                self.schedule(backend);
                None
            }
            KeyCode::Backspace => {
                self.query.pop();
                self.schedule(backend);
                None
            }
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            KeyCode::Down => {
                if self.selected + 1 < self.hits.len() {
                    self.selected += 1;
                }
                None
            }
            KeyCode::Enter => self
                .hits
                .get(self.selected)
                .map(|hit| ChildOutcome::OpenDetail(hit.to_ref())),
            _ => None,
        }
    }

    fn on_load(&mut self, payload: LoadPayload) {
        self.pending = None;
        self.searching = false;
        if let LoadPayload::Search(result) = payload {
            match result {
                Ok(hits) => {
                    self.hits = hits;
                    self.selected = 0;
                }
                Err(err) => self.error = Some(err.to_string()),
            }
        }
    }

    fn pending_request(&self) -> Option<RequestId> {
        self.pending
    }

    fn draw(&self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![
            Line::from(vec![
                Span::styled("  / ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    self.query.clone(),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ),
                Span::styled("▏", Style::default().fg(Color::DarkGray)),
            ]),
            Line::from(""),
        ];

        if let Some(ref err) = self.error {
            lines.push(Line::styled(
                format!("  Error: {err}"),
                Style::default().fg(Color::Red),
            ));
        } else if self.searching {
            lines.push(Line::styled(
                "  Searching...",
                Style::default().fg(Color::DarkGray),
            ));
        } else if self.hits.is_empty() && !self.query.trim().is_empty() {
            lines.push(Line::styled(
                "  No matches",
                Style::default().fg(Color::Gray),
            ));
        }

        let mut last_kind = None;
        for (i, hit) in self.hits.iter().enumerate() {
            // Hits arrive sorted by kind, so a change starts a section.
            if last_kind != Some(hit.kind) {
                lines.push(Line::styled(
                    format!("  {}", hit.kind.label()),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ));
                last_kind = Some(hit.kind);
            }
            let style = if i == self.selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            lines.push(Line::from(vec![
                Span::raw("    "),
                Span::styled(hit.name.clone(), style),
                Span::styled(
                    format!("  {}", hit.extra),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
        }

        frame.render_widget(Paragraph::new(lines), area);
    }
}
