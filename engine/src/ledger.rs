//! Bet ledger for the active round.

use std::collections::BTreeMap;

use baize_types::{Bet, BetTarget};

use crate::table::TableError;

/// Accumulated stakes for the active round, keyed by target.
///
/// Invariant: the committed total never exceeds the balance passed to [`place`],
/// and a rejected placement leaves the ledger unchanged.
///
/// [`place`]: BetLedger::place
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BetLedger {
    stakes: BTreeMap<BetTarget, u64>,
}

impl BetLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commit `stake` to `target`, accumulating with any stake already on it.
    pub fn place(
        &mut self,
        target: BetTarget,
        stake: u64,
        balance: u64,
    ) -> Result<(), TableError> {
        if stake == 0 {
            return Err(TableError::InvalidStake);
        }
        let committed = self.total_staked();
        if committed.saturating_add(stake) > balance {
            return Err(TableError::InsufficientFunds {
                available: balance.saturating_sub(committed),
                required: stake,
            });
        }
        *self.stakes.entry(target).or_insert(0) += stake;
        Ok(())
    }

    /// Discard every bet.
    pub fn clear(&mut self) {
        self.stakes.clear();
    }

    /// Sum of all committed stakes.
    pub fn total_staked(&self) -> u64 {
        self.stakes.values().sum()
    }

    /// Stake committed to `target`, 0 when none.
    pub fn stake_on(&self, target: &BetTarget) -> u64 {
        self.stakes.get(target).copied().unwrap_or(0)
    }

    /// Current bets in table order.
    pub fn bets(&self) -> impl Iterator<Item = Bet> + '_ {
        self.stakes
            .iter()
            .map(|(&target, &stake)| Bet { target, stake })
    }

    pub fn is_empty(&self) -> bool {
        self.stakes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.stakes.len()
    }
}
