//! Resource detail view
//!
//! Key/value fields by default; `y` toggles the pretty-printed raw
//! record.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use stackscope_core::types::ResourceRef;

use crate::backend::{Backend, ResourceDetail};
use crate::message::{LoadPayload, RequestId};
use crate::view::theme::status_color;

use super::{ChildOutcome, ChildView};

pub struct DetailModel {
    reference: ResourceRef,
    detail: Option<ResourceDetail>,
    show_json: bool,
    scroll: u16,
    loading: bool,
    error: Option<String>,
    pending: Option<RequestId>,
}

impl DetailModel {
    pub fn new(reference: ResourceRef) -> Self {
        Self {
            reference,
            detail: None,
            show_json: false,
            scroll: 0,
            loading: true,
            error: None,
            pending: None,
        }
    }
}

impl ChildView for DetailModel {
    fn init(&mut self, backend: &Backend) {
        self.loading = true;
        self.error = None;
        let reference = self.reference.clone();
        let cloud = backend.cloud.clone();
        self.pending = Some(backend.dispatcher.dispatch(async move {
            LoadPayload::Detail(cloud.fetch_detail(&reference).await)
        }));
    }

    fn handle_key(&mut self, key: KeyEvent, _backend: &Backend) -> Option<ChildOutcome> {
        match key.code {
            KeyCode::Char('y') => {
                self.show_json = !self.show_json;
                self.scroll = 0;
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll = self.scroll.saturating_sub(1);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll = self.scroll.saturating_add(1);
                None
            }
            _ => None,
        }
    }

    fn on_load(&mut self, payload: LoadPayload) {
        self.pending = None;
        self.loading = false;
        if let LoadPayload::Detail(result) = payload {
            match result {
                Ok(detail) => self.detail = Some(detail),
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
        let Some(ref detail) = self.detail else {
            return;
        };

        let lines: Vec<Line> = if self.show_json {
            detail
                .json
                .lines()
                .map(|l| Line::from(format!("  {l}")))
                .collect()
        } else {
            let mut lines = vec![Line::from("")];
            let label_width = detail
                .fields
                .iter()
                .map(|(name, _)| name.len())
                .max()
                .unwrap_or(0);
            for (name, value) in &detail.fields {
                let value_style = if name == "Status" {
                    Style::default().fg(status_color(value))
                } else {
                    Style::default().fg(Color::White)
                };
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("  {name:label_width$}  "),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(value.clone(), value_style),
                ]));
            }
            lines.push(Line::from(""));
            lines.push(Line::styled(
                "  y: raw record",
                Style::default().fg(Color::DarkGray),
            ));
            lines
        };

        frame.render_widget(Paragraph::new(lines).scroll((self.scroll, 0)), area);
    }

    fn graph_focal(&self) -> Option<ResourceRef> {
        self.detail.as_ref().and_then(|d| d.graph_ref.clone())
    }
}
