//! Digit-by-digit entry of a 4-digit share code.
//!
//! Models the four input boxes of the receive screens: one digit per cell,
//! focus auto-advance, backspace stepping back over empty cells, paste
//! distribution and a short-lived error "shake" after a failed lookup.

use crate::error::ValidationError;
use crate::ids::{ShareCode, SHARE_CODE_LEN};

/// How long the error shake stays visible.
pub const SHAKE_DURATION_MS: i64 = 500;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeEntry {
    cells: [Option<char>; SHARE_CODE_LEN],
    focus: usize,
    shake_started_at_ms: Option<i64>,
}

impl CodeEntry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cells(&self) -> [Option<char>; SHARE_CODE_LEN] {
        self.cells
    }

    /// Cell contents as strings, empty for unfilled cells.
    pub fn cell_values(&self) -> [String; SHARE_CODE_LEN] {
        self.cells.map(|c| c.map(String::from).unwrap_or_default())
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn set_focus(&mut self, index: usize) {
        self.focus = index.min(SHARE_CODE_LEN - 1);
    }

    /// Text typed into cell `index`. Only the last digit typed is kept.
    pub fn input(&mut self, index: usize, text: &str) {
        if index >= SHARE_CODE_LEN {
            return;
        }
        let digit = text.chars().filter(char::is_ascii_digit).last();
        self.cells[index] = digit;
        self.focus = index;
        if digit.is_some() && index < SHARE_CODE_LEN - 1 {
            self.focus = index + 1;
        }
    }

    /// Backspace pressed while cell `index` has focus.
    pub fn backspace(&mut self, index: usize) {
        if index >= SHARE_CODE_LEN {
            return;
        }
        if self.cells[index].is_some() {
            self.cells[index] = None;
            self.focus = index;
        } else if index > 0 {
            self.focus = index - 1;
        }
    }

    /// Distributes the digits of pasted text across the cells from the left.
    pub fn paste(&mut self, text: &str) {
        let mut digits = text.chars().filter(char::is_ascii_digit);
        for cell in self.cells.iter_mut() {
            *cell = digits.next();
        }
        self.focus = self
            .cells
            .iter()
            .position(Option::is_none)
            .unwrap_or(SHARE_CODE_LEN - 1);
    }

    /// Builds an entry from a code typed as one argument. Unlike
    /// [`CodeEntry::paste`] nothing is dropped: the input must hold exactly
    /// four digits, optionally split by spaces or dashes.
    pub fn from_argument(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        let well_formed = trimmed
            .chars()
            .all(|c| c.is_ascii_digit() || c == '-' || c == ' ');
        let digits = trimmed.chars().filter(char::is_ascii_digit).count();
        if !well_formed || digits != SHARE_CODE_LEN {
            return Err(ValidationError::MalformedCode);
        }
        let mut entry = Self::new();
        entry.paste(trimmed);
        Ok(entry)
    }

    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// The entered code, once all cells are filled.
    pub fn code(&self) -> Option<ShareCode> {
        if !self.is_complete() {
            return None;
        }
        let raw: String = self.cells.iter().flatten().collect();
        ShareCode::parse(&raw).ok()
    }

    /// Enter key: behaves like the submit button, and does nothing while
    /// the code is incomplete.
    pub fn enter(&self) -> Option<ShareCode> {
        self.code()
    }

    pub fn clear(&mut self) {
        self.cells = [None; SHARE_CODE_LEN];
        self.focus = 0;
    }

    /// Marks every cell with the error shake, starting at `now_ms`.
    pub fn flag_error(&mut self, now_ms: i64) {
        self.shake_started_at_ms = Some(now_ms);
    }

    /// The shake clears on its own after [`SHAKE_DURATION_MS`]; typing does
    /// not clear it.
    pub fn is_shaking(&self, now_ms: i64) -> bool {
        self.shake_started_at_ms
            .is_some_and(|started| now_ms >= started && now_ms - started < SHAKE_DURATION_MS)
    }
}
