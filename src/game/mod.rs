//! The game state machine, its timer queue, and the computer's turn
//! choreography.

pub mod choreography;
pub mod engine;
pub mod listener;
pub mod scheduler;
pub mod view;

pub use choreography::{
    ChoreoStep, Choreography, CLEAR_DELAY_MS, FIRST_FLIP_DELAY_MS, MATCH_CHECK_DELAY_MS,
    NEXT_CYCLE_DELAY_MS, SECOND_FLIP_DELAY_MS,
};
pub use engine::{GameEngine, COMPUTER_HANDOFF_DELAY_MS, PLAYER_RESOLVE_DELAY_MS};
pub use listener::{FlipListener, NullListener};
pub use scheduler::{EngineEvent, TimerQueue};
pub use view::GameView;
