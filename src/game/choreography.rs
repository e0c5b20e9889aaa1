//! The computer's timed reveal sequence.
//!
//! A turn is an explicit step sequence consumed by the timer queue rather
//! than nested callbacks: `FlipFirst` → `FlipSecond` → `Evaluate` → `Clear`,
//! plus `NextCycle` when the pair matched and the computer keeps the turn.
//! The in-flight record doubles as the reentrancy guard: while the engine
//! holds one, no second choreography can start.

/// Delay before the first card is revealed, measured from the turn start.
pub const FIRST_FLIP_DELAY_MS: u64 = 500;
/// Delay between the first and second reveal.
pub const SECOND_FLIP_DELAY_MS: u64 = 1000;
/// Delay between the second reveal and the match check.
pub const MATCH_CHECK_DELAY_MS: u64 = 1000;
/// Delay between the match check and the flipped-set clearing.
pub const CLEAR_DELAY_MS: u64 = 1000;
/// Pause before the computer's next cycle after a successful match.
pub const NEXT_CYCLE_DELAY_MS: u64 = 1000;

/// One step of the reveal sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ChoreoStep {
    FlipFirst,
    FlipSecond,
    Evaluate,
    Clear,
    NextCycle,
}

impl ChoreoStep {
    /// Delay between the previous step and this one.
    #[must_use]
    pub const fn delay_ms(self) -> u64 {
        match self {
            ChoreoStep::FlipFirst => FIRST_FLIP_DELAY_MS,
            ChoreoStep::FlipSecond => SECOND_FLIP_DELAY_MS,
            ChoreoStep::Evaluate => MATCH_CHECK_DELAY_MS,
            ChoreoStep::Clear => CLEAR_DELAY_MS,
            ChoreoStep::NextCycle => NEXT_CYCLE_DELAY_MS,
        }
    }
}

/// An in-flight computer turn: the chosen pair in reveal order, and the
/// evaluation outcome once the `Evaluate` step has run.
#[derive(Clone, Copy, Debug)]
pub struct Choreography {
    pub first: usize,
    pub second: usize,
    pub matched: bool,
}

impl Choreography {
    /// Start a choreography for the chosen pair.
    #[must_use]
    pub fn new(first: usize, second: usize) -> Self {
        Self {
            first,
            second,
            matched: false,
        }
    }
}
