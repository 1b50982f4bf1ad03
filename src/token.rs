//! Callback token codec.
//!
//! All navigation state lives in the callback tokens attached to buttons; nothing is kept
//! on the server between events. This module turns a [`NavigationIntent`] into a
//! transport-safe [`Token`] and classifies incoming token strings back into intents.
//!
//! Token shapes:
//!
//! | Intent                               | Token              |
//! |--------------------------------------|--------------------|
//! | `ShowLetterPage { 'А', 0 }`          | `А`                |
//! | `PaginateRequest { 'А', Next, 2 }`   | `А_next_2`         |
//! | `PaginateRequest { 'А', Prev, 0 }`   | `А_prev_0`         |
//! | `TermAt { 'А', 12 }`                 | `А_at_12`          |
//! | `TermSelected { "Big Data" }`        | `Big_Data`         |
//! | `Back` / `ShowAlphabet`              | `back`             |

use std::fmt;

/// Literal token that returns to the alphabet menu.
pub const BACK_TOKEN: &str = "back";

/// Transport limit on callback data, in bytes.
pub const MAX_TOKEN_BYTES: usize = 64;

/// First and last letter of the alphabet menu (U+0410..=U+042F, no Ё).
pub const FIRST_LETTER: char = 'А';
pub const LAST_LETTER: char = 'Я';

/// Direction carried by a pagination token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageDirection {
    Next,
    Prev,
}

impl PageDirection {
    /// Segment used inside the token.
    pub fn as_str(self) -> &'static str {
        match self {
            PageDirection::Next => "next",
            PageDirection::Prev => "prev",
        }
    }
}

/// Decoded meaning of a callback token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NavigationIntent {
    ShowAlphabet,
    ShowLetterPage {
        letter: char,
        page: u32,
    },
    /// `target_page` is the page to display, not the page the request came from.
    PaginateRequest {
        letter: char,
        direction: PageDirection,
        target_page: u32,
    },
    TermSelected {
        term: String,
    },
    /// Positional selection of the `index`-th term under `letter`, used for terms whose
    /// sanitized token is shared with another term.
    TermAt {
        letter: char,
        index: u32,
    },
    Back,
}

/// Opaque callback payload guaranteed to satisfy the transport contract: at most
/// [`MAX_TOKEN_BYTES`] bytes of alphanumerics, `_` and `-`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token(String);

impl Token {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Whether `c` is one of the 32 letters offered by the alphabet menu.
pub fn is_menu_letter(c: char) -> bool {
    (FIRST_LETTER..=LAST_LETTER).contains(&c)
}

/// Whether `c` may appear in a token.
pub fn is_token_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-'
}

/// Make raw term text usable as callback data.
///
/// Spaces become underscores, everything outside alphanumerics/`_`/`-` is dropped and the
/// result is cut to [`MAX_TOKEN_BYTES`] on a char boundary. The mapping is lossy.
pub fn sanitize(raw: &str) -> String {
    let mut out: String = raw
        .chars()
        .map(|c| if c == ' ' { '_' } else { c })
        .filter(|&c| is_token_char(c))
        .collect();
    truncate_on_boundary(&mut out, MAX_TOKEN_BYTES);
    out
}

fn truncate_on_boundary(s: &mut String, max_bytes: usize) {
    if s.len() <= max_bytes {
        return;
    }
    let mut end = max_bytes;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    s.truncate(end);
}

/// Encode an intent as a transport-safe token.
pub fn encode(intent: &NavigationIntent) -> Token {
    let raw = match intent {
        NavigationIntent::ShowAlphabet | NavigationIntent::Back => BACK_TOKEN.to_string(),
        NavigationIntent::ShowLetterPage { letter, page: 0 } => letter.to_string(),
        NavigationIntent::ShowLetterPage { letter, page } => {
            pagination_token(*letter, PageDirection::Next, *page)
        }
        NavigationIntent::PaginateRequest {
            letter,
            direction,
            target_page,
        } => pagination_token(*letter, *direction, *target_page),
        NavigationIntent::TermAt { letter, index } => format!("{}_at_{}", letter, index),
        NavigationIntent::TermSelected { term } => return Token(sanitize(term)),
    };
    // Letters come from the menu alphabet, so only a foreign letter could break the
    // charset here; run it through the sanitizer all the same.
    Token(sanitize(&raw))
}

fn pagination_token(letter: char, direction: PageDirection, page: u32) -> String {
    format!("{}_{}_{}", letter, direction.as_str(), page)
}

/// Classify an incoming token. Never fails: unrecognized shapes become a raw term lookup.
///
/// Precedence, first match wins:
/// 1. a single menu letter
/// 2. the literal `back`
/// 3. `<letter>_next_<n>` / `<letter>_prev_<n>`
/// 4. `<letter>_at_<n>`
/// 5. anything else, as `TermSelected`
pub fn decode(token: &str) -> NavigationIntent {
    let mut chars = token.chars();
    if let (Some(letter), None) = (chars.next(), chars.next()) {
        if is_menu_letter(letter) {
            return NavigationIntent::ShowLetterPage { letter, page: 0 };
        }
    }

    if token == BACK_TOKEN {
        return NavigationIntent::Back;
    }

    if let Some(intent) = decode_structured(token) {
        return intent;
    }

    NavigationIntent::TermSelected {
        term: token.to_string(),
    }
}

fn decode_structured(token: &str) -> Option<NavigationIntent> {
    let mut parts = token.splitn(3, '_');
    let letter = single_menu_letter(parts.next()?)?;
    let kind = parts.next()?;
    let number = parse_page_number(parts.next()?)?;

    match kind {
        "next" => Some(NavigationIntent::PaginateRequest {
            letter,
            direction: PageDirection::Next,
            target_page: number,
        }),
        "prev" => Some(NavigationIntent::PaginateRequest {
            letter,
            direction: PageDirection::Prev,
            target_page: number,
        }),
        "at" => Some(NavigationIntent::TermAt {
            letter,
            index: number,
        }),
        _ => None,
    }
}

fn single_menu_letter(segment: &str) -> Option<char> {
    let mut chars = segment.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if is_menu_letter(c) => Some(c),
        _ => None,
    }
}

/// Digits, optionally negative. Negative pages clamp to 0; values past `u32` are rejected.
fn parse_page_number(segment: &str) -> Option<u32> {
    let (negative, digits) = match segment.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, segment),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if negative {
        return Some(0);
    }
    digits.parse().ok()
}
