//! Turn ownership, game phase, scores, and outcomes.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Which side currently holds the turn. Exactly one owner at any instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnOwner {
    Player,
    Computer,
}

/// Lifecycle phase of a game.
///
/// `GameOver` is entered exactly when the matched-set covers every position
/// and is only exited by another `setup`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Setup,
    InProgress,
    GameOver,
}

/// Match counters, one per side. Each confirmed match increments exactly one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    pub player: u32,
    pub computer: u32,
}

impl Scores {
    /// Score comparison for the game-over screen.
    #[must_use]
    pub fn outcome(self) -> Outcome {
        match self.player.cmp(&self.computer) {
            Ordering::Greater => Outcome::PlayerWins,
            Ordering::Less => Outcome::ComputerWins,
            Ordering::Equal => Outcome::Tie,
        }
    }
}

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    PlayerWins,
    ComputerWins,
    Tie,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Outcome::PlayerWins => "You won!",
            Outcome::ComputerWins => "Computer won!",
            Outcome::Tie => "It's a tie!",
        };
        f.write_str(message)
    }
}
