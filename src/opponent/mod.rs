//! The computer opponent: imperfect memory plus an error-prone policy.
//!
//! Memory is owned here and exposed read-only to the policy; the engine
//! refreshes it before every computer choice and purges it on matches.

pub mod memory;
pub mod policy;

pub use memory::OpponentMemory;
pub use policy::{choose, choose_with_roll, ERROR_RATE};
