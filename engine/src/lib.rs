//! Baize round resolution engine.
//!
//! This crate contains the bet ledger, the outcome resolver, and the table session
//! state machine consumed by the browser bindings.
//!
//! ## Determinism requirements
//! - Do not use wall-clock time inside resolution.
//! - Only draw randomness from the provided [`WheelRng`].
//! - Avoid iteration order of hash-based collections influencing outputs.
//!
//! The primary entrypoint is [`Table`].

pub mod ledger;
pub mod resolver;
pub mod rng;
pub mod table;


pub use ledger::BetLedger;
pub use resolver::{bet_wins, evaluate, Evaluation};
pub use rng::WheelRng;
pub use table::{Phase, Table, TableError};
