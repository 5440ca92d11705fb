//! Meal id sequence
//!
//! Monotonically increasing ids, unique within the current list. Reset after
//! a full clear so a fresh list starts back at 0.

/// Stateful id counter
#[derive(Debug, Clone, Default)]
pub struct IdSource {
    next: u32,
}

impl IdSource {
    /// Sequence starting at 0
    pub fn new() -> Self {
        Self { next: 0 }
    }

    /// Sequence starting at `n` (used to seed past ids loaded from storage)
    pub fn starting_at(n: u32) -> Self {
        Self { next: n }
    }

    /// Hand out the next id
    pub fn next(&mut self) -> u32 {
        let id = self.next;
        self.next += 1;
        id
    }

    /// Restart the sequence at 0
    pub fn reset(&mut self) {
        self.next = 0;
    }
}
