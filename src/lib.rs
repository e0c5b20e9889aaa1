//! # culinary-flip
//!
//! A turn-based memory-matching card game engine: a human player against a
//! computer opponent with deliberately imperfect memory.
//!
//! ## Design Principles
//!
//! 1. **Engine only**: authoritative game state and a small intent surface
//!    (`setup`, `select_card`, `tick`). Rendering, audio, and layout are
//!    external collaborators fed by observable state and the flip listener.
//!
//! 2. **Deterministic**: every shuffle and opponent decision draws from one
//!    seedable RNG stream, so a whole game replays from its seed.
//!
//! 3. **Single-threaded time**: no threads, no awaiting. The caller drives
//!    the engine with monotonic `tick` timestamps; delayed steps (the
//!    computer's reveal choreography, player display delays) fire from an
//!    explicit timer queue at their due times. Conflicting intents during a
//!    delay are dropped, not queued.
//!
//! ## Modules
//!
//! - `core`: cards, decks, tiers, scores, phases, RNG
//! - `opponent`: the computer's memory model and error-prone policy
//! - `game`: the state machine, timer queue, and turn choreography

pub mod core;
pub mod game;
pub mod opponent;

// Re-export commonly used types
pub use crate::core::{
    Card, Deck, GameRng, Identity, Outcome, ParseTierError, Phase, Scores, Tier, TurnOwner,
};

pub use crate::opponent::{choose, choose_with_roll, OpponentMemory, ERROR_RATE};

pub use crate::game::{
    ChoreoStep, FlipListener, GameEngine, GameView, NullListener, CLEAR_DELAY_MS,
    COMPUTER_HANDOFF_DELAY_MS, FIRST_FLIP_DELAY_MS, MATCH_CHECK_DELAY_MS, NEXT_CYCLE_DELAY_MS,
    PLAYER_RESOLVE_DELAY_MS, SECOND_FLIP_DELAY_MS,
};
