//! Baize domain types.
//!
//! Defines the pockets, wheel layout, bet targets, and round results shared by the
//! engine and clients.

mod bet;
mod constants;
mod pocket;
mod round;
mod wheel;

pub use bet::*;
pub use constants::*;
pub use pocket::*;
pub use round::*;
pub use wheel::*;

#[cfg(test)]
mod tests;
