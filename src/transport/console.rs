//! Line-oriented console transport.
//!
//! Turns stdin lines into inbound events and renders outbound actions as plain text, so
//! the navigation flow can be driven without a messaging service.
//!
//! Line grammar:
//! * `/name` → command `name` (`/quit` ends the session)
//! * `@text` → inline query `text`
//! * anything else → callback token, taken verbatim
//! * blank lines are ignored

use crate::error::Result;
use crate::menu::Keyboard;
use crate::transport::protocol::{EventId, InboundEvent, OutboundAction};
use crate::transport::Transport;
use async_trait::async_trait;
use std::fmt::Write as _;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::Mutex;

/// Result of parsing one console line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleInput {
    Event(InboundEvent),
    Quit,
    NoAction,
}

/// Parse a console line into an input.
pub fn parse_line(line: &str) -> ConsoleInput {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return ConsoleInput::NoAction;
    }

    if let Some(command) = line.strip_prefix('/') {
        let name = command.split_whitespace().next().unwrap_or_default();
        return match name {
            "" => ConsoleInput::NoAction,
            "quit" => ConsoleInput::Quit,
            name => ConsoleInput::Event(InboundEvent::Command {
                name: name.to_string(),
            }),
        };
    }

    if let Some(text) = line.strip_prefix('@') {
        return ConsoleInput::Event(InboundEvent::InlineQuery {
            text: text.to_string(),
        });
    }

    ConsoleInput::Event(InboundEvent::Callback {
        token: line.trim().to_string(),
    })
}

/// Render an outbound action as console text, one trailing newline included.
pub fn render_action(event_id: EventId, action: &OutboundAction) -> String {
    let mut out = String::new();
    match action {
        OutboundAction::ReplyText { text, keyboard } => {
            let _ = writeln!(out, "[#{}] reply:", event_id);
            push_indented(&mut out, text);
            if let Some(keyboard) = keyboard {
                push_keyboard(&mut out, keyboard);
            }
        }
        OutboundAction::EditMessage { text, keyboard } => {
            let _ = writeln!(out, "[#{}] edit:", event_id);
            push_indented(&mut out, text);
            push_keyboard(&mut out, keyboard);
        }
        OutboundAction::AnswerCallback { toast: Some(toast) } => {
            let _ = writeln!(out, "[#{}] toast: {}", event_id, toast);
        }
        OutboundAction::AnswerCallback { toast: None } => {
            let _ = writeln!(out, "[#{}] ack", event_id);
        }
        OutboundAction::AnswerInlineQuery { results } => {
            let _ = writeln!(out, "[#{}] inline ({} results)", event_id, results.len());
            for article in results {
                let _ = writeln!(out, "  {}. {}", article.id, article.title);
            }
        }
    }
    out
}

fn push_indented(out: &mut String, text: &str) {
    for line in text.lines() {
        let _ = writeln!(out, "  {}", line);
    }
}

fn push_keyboard(out: &mut String, keyboard: &Keyboard) {
    for row in keyboard.rows() {
        out.push_str("  ");
        let cells: Vec<String> = row
            .iter()
            .map(|button| format!("[{}]({})", button.label, button.token))
            .collect();
        out.push_str(&cells.join(" "));
        out.push('\n');
    }
}

/// Console transport writing rendered actions to an async writer (stdout by default).
pub struct ConsoleTransport<W = tokio::io::Stdout> {
    writer: Mutex<W>,
}

impl ConsoleTransport<tokio::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(tokio::io::stdout())
    }
}

impl<W> ConsoleTransport<W>
where
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

#[async_trait]
impl<W> Transport for ConsoleTransport<W>
where
    W: AsyncWrite + Unpin + Send,
{
    async fn deliver(&self, event_id: EventId, action: OutboundAction) -> Result<()> {
        let rendered = render_action(event_id, &action);
        let mut writer = self.writer.lock().await;
        writer.write_all(rendered.as_bytes()).await?;
        writer.flush().await?;
        Ok(())
    }
}
