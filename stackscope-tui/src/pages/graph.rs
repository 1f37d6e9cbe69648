//! Neighborhood graph view
//!
//! Holds the snapshot, not pre-rendered text, so a terminal resize
//! re-lays the graph out at draw time.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use stackscope_core::render::render_neighborhood;
use stackscope_core::types::ResourceRef;
use stackscope_core::RelationshipSnapshot;

use crate::backend::Backend;
use crate::message::{LoadPayload, RequestId};

use super::{ChildOutcome, ChildView};

pub struct GraphModel {
    focal: ResourceRef,
    snapshot: Option<RelationshipSnapshot>,
    scroll: u16,
    loading: bool,
    error: Option<String>,
    pending: Option<RequestId>,
}

impl GraphModel {
    pub fn new(focal: ResourceRef) -> Self {
        Self {
            focal,
            snapshot: None,
            scroll: 0,
            loading: true,
            error: None,
            pending: None,
        }
    }
}

impl ChildView for GraphModel {
    fn init(&mut self, backend: &Backend) {
        self.loading = true;
        self.error = None;
        let focal = self.focal.clone();
        let aggregator = backend.cloud.aggregator();
        self.pending = Some(backend.dispatcher.dispatch(async move {
            LoadPayload::Graph(aggregator.build_neighborhood(&focal).await)
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
            _ => {}
        }
        None
    }

    fn on_load(&mut self, payload: LoadPayload) {
        self.pending = None;
        self.loading = false;
        if let LoadPayload::Graph(result) = payload {
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

        // Lay out against the current viewport width on every draw.
        let text = render_neighborhood(snapshot, &self.focal, area.width.saturating_sub(2));
        let lines: Vec<Line> = text.lines().map(|l| Line::from(format!(" {l}"))).collect();
        frame.render_widget(Paragraph::new(lines).scroll((self.scroll, 0)), area);
    }
}
