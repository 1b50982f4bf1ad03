//! Event dispatcher
//!
//! Maps one inbound event to the outbound actions answering it. The dispatcher holds only
//! read-only state, so it is shared between concurrently running handlers.

use crate::glossary::Glossary;
use crate::menu::{MenuBuilder, MenuSignal};
use crate::search::{SearchEngine, SubstringEngine};
use crate::token::{self, NavigationIntent};
use crate::transport::{InboundEvent, InlineArticle, OutboundAction};
use std::sync::Arc;

/// Greeting sent in reply to `/start` and `/help`.
pub const DEFAULT_GREETING: &str = "Привет! Саджест для поиска терминов работает от 4-х символов.";

pub struct Dispatcher {
    glossary: Arc<Glossary>,
    search_engine: Arc<dyn SearchEngine>,
    greeting: String,
}

impl Dispatcher {
    /// Dispatcher with the substring search engine and default greeting.
    pub fn new(glossary: Arc<Glossary>) -> Self {
        let search_engine = Arc::new(SubstringEngine::new(Arc::clone(&glossary)));
        Self {
            glossary,
            search_engine,
            greeting: DEFAULT_GREETING.to_string(),
        }
    }

    pub fn with_greeting(mut self, greeting: impl Into<String>) -> Self {
        self.greeting = greeting.into();
        self
    }

    /// Compute the actions answering `event`, in delivery order.
    ///
    /// An empty list means no response at all (unknown command, too-short inline query).
    pub fn dispatch(&self, event: &InboundEvent) -> Vec<OutboundAction> {
        match event {
            InboundEvent::Command { name } => self.handle_command(name),
            InboundEvent::Callback { token } => self.handle_callback(token),
            InboundEvent::InlineQuery { text } => self.handle_inline_query(text),
        }
    }

    fn handle_command(&self, name: &str) -> Vec<OutboundAction> {
        match name {
            "start" => {
                log::info!("/start command received");
                vec![
                    OutboundAction::ReplyText {
                        text: self.greeting.clone(),
                        keyboard: None,
                    },
                    self.alphabet_reply(),
                ]
            }
            "help" => vec![OutboundAction::ReplyText {
                text: self.greeting.clone(),
                keyboard: None,
            }],
            other => {
                log::debug!("Ignoring unknown command /{}", other);
                Vec::new()
            }
        }
    }

    fn handle_callback(&self, raw_token: &str) -> Vec<OutboundAction> {
        let builder = MenuBuilder::new(&self.glossary);

        match token::decode(raw_token) {
            NavigationIntent::ShowLetterPage { letter, page }
            | NavigationIntent::PaginateRequest {
                letter,
                target_page: page,
                ..
            } => {
                log::info!("Showing terms for letter {} (page {})", letter, page);
                match builder.build_letter_page(letter, page) {
                    Ok(letter_page) => vec![
                        OutboundAction::EditMessage {
                            text: letter_page.screen.text,
                            keyboard: letter_page.screen.keyboard,
                        },
                        ack(),
                    ],
                    Err(signal) => toast(signal),
                }
            }
            NavigationIntent::TermSelected { term } => {
                if self.glossary.resolve(&term).is_none() {
                    if self.glossary.is_token_ambiguous(&term) {
                        log::warn!("Token '{}' is shared by several terms", term);
                    } else {
                        log::info!("Term not found for token '{}'", term);
                    }
                }
                self.detail_reply(builder.build_term_detail(&term))
            }
            NavigationIntent::TermAt { letter, index } => {
                let detail = match builder.term_at(letter, index) {
                    Some(entry) => builder.build_term_detail(&entry.term),
                    None => {
                        log::info!("No term #{} under letter {}", index, letter);
                        builder.build_term_detail(raw_token)
                    }
                };
                self.detail_reply(detail)
            }
            NavigationIntent::Back | NavigationIntent::ShowAlphabet => {
                log::info!("Back to the alphabet menu");
                vec![self.alphabet_reply(), ack()]
            }
        }
    }

    fn handle_inline_query(&self, text: &str) -> Vec<OutboundAction> {
        match self.search_engine.search(text) {
            Some(hits) => vec![OutboundAction::AnswerInlineQuery {
                results: hits
                    .into_iter()
                    .map(|hit| InlineArticle {
                        id: hit.id,
                        title: hit.term,
                        body: hit.detail,
                    })
                    .collect(),
            }],
            None => Vec::new(),
        }
    }

    fn alphabet_reply(&self) -> OutboundAction {
        let screen = MenuBuilder::new(&self.glossary).build_alphabet_menu();
        OutboundAction::ReplyText {
            text: screen.text,
            keyboard: Some(screen.keyboard),
        }
    }

    fn detail_reply(&self, detail: String) -> Vec<OutboundAction> {
        vec![
            OutboundAction::ReplyText {
                text: detail,
                keyboard: None,
            },
            ack(),
        ]
    }
}

fn ack() -> OutboundAction {
    OutboundAction::AnswerCallback { toast: None }
}

fn toast(signal: MenuSignal) -> Vec<OutboundAction> {
    vec![OutboundAction::AnswerCallback {
        toast: Some(signal.toast().to_string()),
    }]
}
