//! Resource list view

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, List, ListItem, ListState, Paragraph},
    Frame,
};

use stackscope_core::types::{ResourceKind, ResourceRef};

use crate::backend::{Backend, ResourceRow};
use crate::message::{LoadPayload, RequestId};
use crate::view::theme::status_color;

use super::{ChildOutcome, ChildView};

pub struct ListModel {
    kind: ResourceKind,
    rows: Vec<ResourceRow>,
    selected: usize,
    loading: bool,
    error: Option<String>,
    pending: Option<RequestId>,
}

impl ListModel {
    pub fn new(kind: ResourceKind) -> Self {
        Self {
            kind,
            rows: Vec::new(),
            selected: 0,
            loading: true,
            error: None,
            pending: None,
        }
    }

    fn selected_row(&self) -> Option<&ResourceRow> {
        self.rows.get(self.selected)
    }
}

impl ChildView for ListModel {
    fn init(&mut self, backend: &Backend) {
        self.loading = true;
        self.error = None;
        let kind = self.kind;
        let cloud = backend.cloud.clone();
        self.pending = Some(
            backend
                .dispatcher
                .dispatch(async move { LoadPayload::Rows(cloud.list_rows(kind).await) }),
        );
    }

    fn handle_key(&mut self, key: KeyEvent, _backend: &Backend) -> Option<ChildOutcome> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < self.rows.len() {
                    self.selected += 1;
                }
                None
            }
            KeyCode::Home => {
                self.selected = 0;
                None
            }
            KeyCode::End => {
                self.selected = self.rows.len().saturating_sub(1);
                None
            }
            KeyCode::Enter => self
                .selected_row()
                .map(|row| ChildOutcome::OpenDetail(row.reference.clone())),
            _ => None,
        }
    }

    fn on_load(&mut self, payload: LoadPayload) {
        self.pending = None;
        self.loading = false;
        if let LoadPayload::Rows(result) = payload {
            match result {
                Ok(rows) => {
                    self.rows = rows;
                    self.selected = self.selected.min(self.rows.len().saturating_sub(1));
                }
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
        if self.rows.is_empty() {
            frame.render_widget(
                Paragraph::new(format!("  No {}s found", self.kind.label().to_lowercase()))
                    .style(Style::default().fg(Color::Gray)),
                area,
            );
            return;
        }

        let items: Vec<ListItem> = self
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let is_selected = i == self.selected;
                let style = if is_selected {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                let dim_style = if is_selected {
                    Style::default().fg(Color::Black).bg(Color::Cyan)
                } else {
                    Style::default().fg(Color::DarkGray)
                };

                let mut spans = vec![Span::raw("  ")];
                if !row.status.is_empty() {
                    let color = status_color(&row.status);
                    let dot_style = if is_selected {
                        Style::default().fg(color).bg(Color::Cyan)
                    } else {
                        Style::default().fg(color)
                    };
                    spans.push(Span::styled("●", dot_style));
                    spans.push(Span::raw(" "));
                }
                spans.push(Span::styled(row.reference.name.clone(), style));
                if !row.summary.is_empty() {
                    spans.push(Span::styled(format!("  {}", row.summary), dim_style));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        let list = List::new(items)
            .block(Block::default())
            .highlight_style(Style::default());

        let mut state = ListState::default();
        state.select(Some(self.selected));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn graph_focal(&self) -> Option<ResourceRef> {
        let row = self.selected_row()?;
        match row.reference.kind {
            ResourceKind::Server
            | ResourceKind::Network
            | ResourceKind::Volume
            | ResourceKind::FloatingIp
            | ResourceKind::LoadBalancer => Some(row.reference.clone()),
            _ => None,
        }
    }
}
