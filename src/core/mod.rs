//! Core engine types: cards, decks, tiers, scores, phases, RNG.
//!
//! These are the building blocks the state machine and opponent subsystem
//! are composed from, with no timing or turn logic of their own.

pub mod card;
pub mod rng;
pub mod state;

pub use card::{Card, Deck, Identity, ParseTierError, Tier};
pub use rng::GameRng;
pub use state::{Outcome, Phase, Scores, TurnOwner};
