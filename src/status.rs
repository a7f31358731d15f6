//! Pass bookkeeping and game termination.
//!
//! The consecutive-pass counter and the derived "is the game over" question
//! live together in [`PassStreak`], so the end-of-game threshold is checked
//! in exactly one place.

use crate::constants::PASSES_TO_END;

/// Whether the game still accepts meaningful play.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// Both players passed in succession. Terminal.
    Over,
}

/// Count of passes since the last accepted placement.
///
/// Saturates at [`PASSES_TO_END`]. Once that value is reached the streak is
/// frozen: [`PassStreak::reset`] no longer clears it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PassStreak(u8);

impl PassStreak {
    pub fn new() -> Self {
        Self(0)
    }

    /// Passes since the last placement, in `0..=PASSES_TO_END`.
    pub fn count(self) -> u8 {
        self.0
    }

    pub fn status(self) -> GameStatus {
        if self.0 >= PASSES_TO_END {
            GameStatus::Over
        } else {
            GameStatus::InProgress
        }
    }

    /// Record a pass. Returns the resulting status.
    pub fn record_pass(&mut self) -> GameStatus {
        self.0 = (self.0 + 1).min(PASSES_TO_END);
        self.status()
    }

    /// Clear the streak after an accepted placement.
    pub fn reset(&mut self) {
        if self.status() == GameStatus::InProgress {
            self.0 = 0;
        }
    }
}
