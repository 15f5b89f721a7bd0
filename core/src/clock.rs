//! Turn clock: owns the turn counter and the bootstrap phase.

use crate::types::Turn;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TurnClock {
    /// The turn currently being played. Starts at 1.
    pub current_turn: Turn,
    pub phase: TurnPhase,
}

impl TurnClock {
    pub fn new() -> Self {
        Self {
            current_turn: 1,
            phase: TurnPhase::Uninitialized,
        }
    }

    /// Close the current turn. Returns the turn that just ended.
    pub fn advance(&mut self) -> Turn {
        let ended = self.current_turn;
        self.current_turn += 1;
        ended
    }

    pub fn turns_completed(&self) -> Turn {
        self.current_turn - 1
    }

    /// Uninitialized → Active. One way; calling it again is a no-op.
    pub fn activate(&mut self) {
        self.phase = TurnPhase::Active;
    }

    pub fn is_initialized(&self) -> bool {
        self.phase == TurnPhase::Active
    }
}

impl Default for TurnClock {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TurnPhase {
    Uninitialized, // no valuation yet
    Active,        // bootstrap has run
}
