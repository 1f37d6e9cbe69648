//! Shell passthrough view
//!
//! Runs one `:!command` through the user's shell in the background and
//! shows the captured output.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::backend::Backend;
use crate::message::{LoadPayload, RequestId};

use super::{ChildOutcome, ChildView};

pub struct ShellModel {
    command: String,
    output: Option<Result<String, String>>,
    scroll: u16,
    pending: Option<RequestId>,
}

impl ShellModel {
    pub fn new(command: String) -> Self {
        Self {
            command,
            output: None,
            scroll: 0,
            pending: None,
        }
    }
}

impl ChildView for ShellModel {
    fn init(&mut self, backend: &Backend) {
        self.output = None;
        let command = self.command.clone();
        self.pending = Some(backend.dispatcher.dispatch(async move {
            LoadPayload::Shell(run_shell(&command).await)
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
        if let LoadPayload::Shell(result) = payload {
            self.output = Some(result);
        }
    }

    fn pending_request(&self) -> Option<RequestId> {
        self.pending
    }

    fn draw(&self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![
            Line::styled(
                format!("  $ {}", self.command),
                Style::default().fg(Color::Yellow),
            ),
            Line::from(""),
        ];
        match &self.output {
            None => lines.push(Line::styled(
                "  Running...",
                Style::default().fg(Color::DarkGray),
            )),
            Some(Ok(output)) => {
                lines.extend(output.lines().map(|l| Line::from(format!("  {l}"))));
            }
            Some(Err(err)) => lines.push(Line::styled(
                format!("  Error: {err}"),
                Style::default().fg(Color::Red),
            )),
        }
        frame.render_widget(Paragraph::new(lines).scroll((self.scroll, 0)), area);
    }
}

async fn run_shell(command: &str) -> Result<String, String> {
    let output = tokio::process::Command::new("sh")
        .arg("-c")
        .arg(command)
        .output()
        .await
        .map_err(|e| e.to_string())?;

    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    if !output.stderr.is_empty() {
        text.push_str(&String::from_utf8_lossy(&output.stderr));
    }
    if !output.status.success() && text.is_empty() {
        return Err(format!("command exited with {}", output.status));
    }
    Ok(text)
}
