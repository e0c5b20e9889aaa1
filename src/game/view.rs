//! Serializable snapshot of everything the presentation layer may observe.

use serde::{Deserialize, Serialize};

use crate::core::{Card, Phase, Tier, TurnOwner};

/// One-call snapshot of the observable game state.
///
/// Position sets are sorted so snapshots of equal states compare equal and
/// serialize stably.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    pub tier: Tier,
    pub cards: Vec<Card>,
    pub flipped: Vec<usize>,
    pub matched: Vec<usize>,
    pub player_score: u32,
    pub computer_score: u32,
    pub turn: TurnOwner,
    pub phase: Phase,
    pub elapsed_secs: u64,
}
