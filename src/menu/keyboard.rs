//! Inline keyboard layout types.

use crate::token::Token;

/// A selectable control: visible label plus the token sent back when pressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    pub token: Token,
}

impl Button {
    pub fn new(label: impl Into<String>, token: Token) -> Self {
        Self {
            label: label.into(),
            token,
        }
    }
}

/// Buttons laid out in rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keyboard {
    rows: Vec<Vec<Button>>,
}

impl Keyboard {
    /// Lay `buttons` out left to right, `per_row` to a row. The last row may be shorter.
    pub fn from_buttons(buttons: Vec<Button>, per_row: usize) -> Self {
        let per_row = per_row.max(1);
        let mut rows = Vec::with_capacity(buttons.len().div_ceil(per_row));
        let mut row = Vec::with_capacity(per_row);

        for button in buttons {
            row.push(button);
            if row.len() == per_row {
                rows.push(std::mem::replace(&mut row, Vec::with_capacity(per_row)));
            }
        }
        if !row.is_empty() {
            rows.push(row);
        }

        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<Button>] {
        &self.rows
    }

    /// All buttons in reading order.
    pub fn buttons(&self) -> impl Iterator<Item = &Button> {
        self.rows.iter().flatten()
    }

    pub fn button_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{encode, NavigationIntent};

    fn button(label: &str) -> Button {
        Button::new(
            label,
            encode(&NavigationIntent::TermSelected {
                term: label.to_string(),
            }),
        )
    }

    #[test]
    fn test_rows_are_filled_left_to_right() {
        let keyboard = Keyboard::from_buttons(
            vec![button("a"), button("b"), button("c"), button("d"), button("e")],
            2,
        );
        let shape: Vec<usize> = keyboard.rows().iter().map(Vec::len).collect();
        assert_eq!(shape, vec![2, 2, 1]);
        assert_eq!(keyboard.button_count(), 5);

        let labels: Vec<_> = keyboard.buttons().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_empty_keyboard() {
        let keyboard = Keyboard::from_buttons(Vec::new(), 7);
        assert!(keyboard.is_empty());
        assert_eq!(keyboard.button_count(), 0);
    }
}
