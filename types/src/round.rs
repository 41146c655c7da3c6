//! Round results returned to clients.

use serde::{Deserialize, Serialize};

use crate::bet::BetTarget;
use crate::pocket::Pocket;

/// Outcome of a single bet after a spin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BetOutcome {
    pub target: BetTarget,
    pub stake: u64,
    /// Total returned on a win (stake plus profit), 0 on a loss.
    pub winnings: u64,
}

/// Result of a resolved round.
///
/// `outcomes` holds one entry per placed bet, targets unique, in table order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    /// The drawn pocket.
    pub pocket: Pocket,
    pub outcomes: Vec<BetOutcome>,
    pub total_staked: u64,
    pub total_winnings: u64,
    /// `total_winnings - total_staked`.
    pub net: i64,
    /// Session balance after the round settled.
    pub balance: u64,
}

impl RoundResult {
    /// Winnings credited to `target` this round, if it was bet on.
    pub fn winnings_for(&self, target: &BetTarget) -> Option<u64> {
        self.outcomes
            .iter()
            .find(|outcome| outcome.target == *target)
            .map(|outcome| outcome.winnings)
    }
}
