//! Selection cursor over a displayed list.
//!
//! `None` means nothing is selected. Movement wraps around the current list
//! length and does nothing on an empty list.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor(Option<usize>);

impl Cursor {
    pub fn new() -> Self {
        Self(None)
    }

    pub fn index(&self) -> Option<usize> {
        self.0
    }

    /// The selected index, only if it is still inside a list of `len` entries.
    pub fn selected(&self, len: usize) -> Option<usize> {
        self.0.filter(|&i| i < len)
    }

    pub fn advance(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.0 = Some(match self.0 {
            Some(i) => (i + 1) % len,
            None => 0,
        });
    }

    /// Steps back one entry. From no selection this lands on the last entry.
    pub fn retreat(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.0 = Some(match self.0 {
            Some(i) => (i.min(len - 1) + len - 1) % len,
            None => len - 1,
        });
    }

    pub fn reset(&mut self) {
        self.0 = None;
    }
}
