//! Protocol definitions shared between transports and the dispatcher.

use crate::menu::Keyboard;

/// Identifier attached to inbound events so outbound actions can be correlated.
pub type EventId = u64;

/// Events consumed from the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundEvent {
    /// A slash command, without the slash (`start`, `help`, ...)
    Command { name: String },
    /// A button press carrying its callback token
    Callback { token: String },
    /// Inline search-as-you-type text
    InlineQuery { text: String },
}

/// One inline search result offered to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineArticle {
    pub id: String,
    pub title: String,
    pub body: String,
}

/// Actions handed back to the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutboundAction {
    /// Send a new message, optionally with buttons
    ReplyText {
        text: String,
        keyboard: Option<Keyboard>,
    },
    /// Replace the text and buttons of the message whose button was pressed
    EditMessage { text: String, keyboard: Keyboard },
    /// Acknowledge a button press, optionally with a short toast
    AnswerCallback { toast: Option<String> },
    /// Answer an inline query
    AnswerInlineQuery { results: Vec<InlineArticle> },
}
