//! Menu builder
//!
//! Computes the next screen for a navigation intent. Letter pages are 0-indexed windows of
//! [`ITEMS_PER_PAGE`] terms over the letter's entries in store order.
//!
//! Navigation controls on a letter page:
//! * "Назад" is always present. On page 0 it returns to the alphabet menu, on later pages it
//!   goes to the previous page. A second "Назад" is never added.
//! * "Далее" is present only while terms remain after the current window.

use crate::glossary::{Entry, Glossary, NOT_FOUND_DESCRIPTION};
use crate::menu::keyboard::{Button, Keyboard};
use crate::token::{self, NavigationIntent, PageDirection, FIRST_LETTER, LAST_LETTER};

/// Terms shown on one letter page.
pub const ITEMS_PER_PAGE: usize = 9;

/// Letters per row in the alphabet menu.
pub const ALPHABET_COLUMNS: usize = 7;

/// Buttons per row on a letter page.
pub const TERM_COLUMNS: usize = 2;

pub const ALPHABET_HEADER: &str = "Выберите букву:";
pub const BACK_LABEL: &str = "Назад";
pub const NEXT_LABEL: &str = "Далее";

/// Closing rule of a term detail message.
pub const DETAIL_RULE: &str = "___________________________";

/// Display text plus its controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub text: String,
    pub keyboard: Keyboard,
}

/// Conditions answered with a short toast and no screen change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuSignal {
    InvalidLetter,
    NoTermsForLetter,
}

impl MenuSignal {
    /// Toast text shown to the user.
    pub fn toast(self) -> &'static str {
        match self {
            MenuSignal::InvalidLetter => "Некорректная буква.",
            MenuSignal::NoTermsForLetter => "Нет терминов на эту букву.",
        }
    }
}

/// A rendered letter page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterPage {
    pub screen: Screen,
    pub letter: char,
    pub page: u32,
    /// Term buttons on this page (navigation controls excluded)
    pub term_count: usize,
    pub has_next: bool,
}

/// Builds screens over a borrowed glossary.
pub struct MenuBuilder<'a> {
    glossary: &'a Glossary,
}

impl<'a> MenuBuilder<'a> {
    pub fn new(glossary: &'a Glossary) -> Self {
        Self { glossary }
    }

    /// The 32-letter alphabet menu, А through Я.
    pub fn build_alphabet_menu(&self) -> Screen {
        let buttons = (FIRST_LETTER..=LAST_LETTER)
            .map(|letter| {
                Button::new(
                    letter.to_string(),
                    token::encode(&NavigationIntent::ShowLetterPage { letter, page: 0 }),
                )
            })
            .collect();

        Screen {
            text: ALPHABET_HEADER.to_string(),
            keyboard: Keyboard::from_buttons(buttons, ALPHABET_COLUMNS),
        }
    }

    /// Page `page` of the terms under `letter`.
    ///
    /// A page past the end of a non-empty letter is valid and simply carries no term
    /// buttons.
    pub fn build_letter_page(
        &self,
        letter: char,
        page: u32,
    ) -> std::result::Result<LetterPage, MenuSignal> {
        if !letter.is_alphabetic() {
            return Err(MenuSignal::InvalidLetter);
        }

        let terms = self.glossary.lookup_by_prefix(letter);
        log::debug!("Letter {} has {} terms", letter, terms.len());
        if terms.is_empty() {
            return Err(MenuSignal::NoTermsForLetter);
        }

        let start = (page as usize).saturating_mul(ITEMS_PER_PAGE);
        let end = start.saturating_add(ITEMS_PER_PAGE);
        let window = terms.get(start..end.min(terms.len())).unwrap_or(&[]);
        let has_next = end < terms.len();

        let mut buttons: Vec<Button> = window
            .iter()
            .enumerate()
            .map(|(offset, entry)| self.term_button(letter, start + offset, entry))
            .collect();
        let term_count = buttons.len();

        let back = match page.checked_sub(1) {
            Some(previous) => NavigationIntent::PaginateRequest {
                letter,
                direction: PageDirection::Prev,
                target_page: previous,
            },
            None => NavigationIntent::Back,
        };
        buttons.push(Button::new(BACK_LABEL, token::encode(&back)));

        if has_next {
            buttons.push(Button::new(
                NEXT_LABEL,
                token::encode(&NavigationIntent::PaginateRequest {
                    letter,
                    direction: PageDirection::Next,
                    target_page: page.saturating_add(1),
                }),
            ));
        }

        Ok(LetterPage {
            screen: Screen {
                text: format!("Термины на букву {}:", letter),
                keyboard: Keyboard::from_buttons(buttons, TERM_COLUMNS),
            },
            letter,
            page,
            term_count,
            has_next,
        })
    }

    /// Button for the `index`-th term under `letter`.
    ///
    /// The sanitized term is used as the token when it resolves back to this very term and
    /// cannot be mistaken for a navigation token; otherwise the positional `TermAt` token
    /// is used.
    fn term_button(&self, letter: char, index: usize, entry: &Entry) -> Button {
        let token = token::encode(&NavigationIntent::TermSelected {
            term: entry.term.clone(),
        });

        let round_trips = matches!(
            token::decode(token.as_str()),
            NavigationIntent::TermSelected { .. }
        ) && self
            .glossary
            .resolve(token.as_str())
            .map_or(false, |resolved| resolved.term == entry.term);

        if round_trips {
            return Button::new(entry.term.clone(), token);
        }

        match u32::try_from(index) {
            Ok(index) => Button::new(
                entry.term.clone(),
                token::encode(&NavigationIntent::TermAt { letter, index }),
            ),
            Err(_) => Button::new(entry.term.clone(), token),
        }
    }

    /// Entry selected by a positional token.
    pub fn term_at(&self, letter: char, index: u32) -> Option<&'a Entry> {
        self.glossary
            .lookup_by_prefix(letter)
            .get(index as usize)
            .copied()
    }

    /// Detail message for a selected term token.
    pub fn build_term_detail(&self, term: &str) -> String {
        match self.glossary.resolve(term) {
            Some(entry) => format_detail(&entry.term, &entry.description),
            None => format_detail(term, NOT_FOUND_DESCRIPTION),
        }
    }
}

/// `"<term>:\n<description>\n<rule>"`
pub fn format_detail(term: &str, description: &str) -> String {
    format!("{}:\n{}\n{}", term, description, DETAIL_RULE)
}
