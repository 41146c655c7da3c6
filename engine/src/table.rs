//! Table session state machine.
//!
//! Lifecycle per round: `Idle` (accepting bets) -> `Resolving` (spin in flight) ->
//! `Idle` with a fresh ledger. Resolution is synchronous, so `Resolving` is entered
//! and exited within [`Table::spin`]. The session becomes `GameOver` when the
//! balance hits zero with nothing staked; only [`Table::reset`] leaves that state.

use std::collections::VecDeque;

use baize_types::{Bet, BetTarget, Pocket, RoundResult, HISTORY_LIMIT, STARTING_BALANCE};
use thiserror::Error as ThisError;
use tracing::{debug, info};

use crate::ledger::BetLedger;
use crate::resolver;
use crate::rng::WheelRng;

#[derive(Debug, ThisError, PartialEq, Eq)]
pub enum TableError {
    #[error("stake must be positive")]
    InvalidStake,
    #[error("insufficient balance (available={available}, required={required})")]
    InsufficientFunds { available: u64, required: u64 },
    #[error("no bets placed")]
    NoBets,
    #[error("spin already in progress")]
    SpinInProgress,
    #[error("session is over")]
    GameOver,
}

/// Session phases.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle = 0,
    Resolving = 1,
    GameOver = 2,
}

/// A single-player roulette session.
///
/// Owns the balance, the active round's ledger, and the draw history; every
/// mutation goes through its methods. Placement never touches the balance, it only
/// checks affordability; the debit and credit both happen inside [`Table::spin`].
pub struct Table {
    balance: u64,
    ledger: BetLedger,
    history: VecDeque<Pocket>,
    last_result: Option<RoundResult>,
    phase: Phase,
    rng: WheelRng,
}

impl Table {
    /// Session with the standard starting balance.
    pub fn new(rng: WheelRng) -> Self {
        Self::with_balance(STARTING_BALANCE, rng)
    }

    /// Session with a custom starting balance.
    pub fn with_balance(balance: u64, rng: WheelRng) -> Self {
        Self {
            balance,
            ledger: BetLedger::new(),
            history: VecDeque::with_capacity(HISTORY_LIMIT),
            last_result: None,
            phase: if balance == 0 {
                Phase::GameOver
            } else {
                Phase::Idle
            },
            rng,
        }
    }

    /// Commit `stake` to `target` for the current round.
    pub fn place_bet(&mut self, target: BetTarget, stake: u64) -> Result<(), TableError> {
        match self.phase {
            Phase::GameOver => return Err(TableError::GameOver),
            Phase::Resolving => return Err(TableError::SpinInProgress),
            Phase::Idle => {}
        }
        self.ledger.place(target, stake, self.balance)?;
        debug!(
            bet = %target,
            stake,
            total_staked = self.ledger.total_staked(),
            "bet placed"
        );
        Ok(())
    }

    /// Discard all bets for the current round.
    pub fn clear_bets(&mut self) {
        self.ledger.clear();
    }

    /// Spin the wheel and settle every bet.
    ///
    /// Atomic: the drawn pocket, per-bet winnings, the balance update, the history
    /// entry, and the ledger reset are all applied before this returns.
    pub fn spin(&mut self) -> Result<RoundResult, TableError> {
        match self.phase {
            Phase::GameOver => return Err(TableError::GameOver),
            Phase::Resolving => return Err(TableError::SpinInProgress),
            Phase::Idle => {}
        }
        if self.ledger.is_empty() {
            return Err(TableError::NoBets);
        }
        self.phase = Phase::Resolving;

        let pocket = self.rng.spin();
        let evaluation = resolver::evaluate(&self.ledger, pocket);
        self.balance = self
            .balance
            .saturating_sub(evaluation.total_staked)
            .saturating_add(evaluation.total_winnings);

        self.history.push_front(pocket);
        self.history.truncate(HISTORY_LIMIT);
        self.ledger.clear();

        let result = RoundResult {
            pocket,
            outcomes: evaluation.outcomes,
            total_staked: evaluation.total_staked,
            total_winnings: evaluation.total_winnings,
            net: evaluation.net,
            balance: self.balance,
        };
        info!(
            pocket = pocket.value(),
            color = %pocket.color(),
            total_staked = result.total_staked,
            total_winnings = result.total_winnings,
            net = result.net,
            balance = self.balance,
            "round resolved"
        );
        self.last_result = Some(result.clone());
        self.phase = if self.balance == 0 {
            Phase::GameOver
        } else {
            Phase::Idle
        };
        Ok(result)
    }

    /// Restore the session to its starting state.
    pub fn reset(&mut self) {
        self.balance = STARTING_BALANCE;
        self.ledger.clear();
        self.history.clear();
        self.last_result = None;
        self.phase = Phase::Idle;
    }

    pub fn balance(&self) -> u64 {
        self.balance
    }

    /// Balance not yet committed to bets.
    pub fn available_balance(&self) -> u64 {
        self.balance.saturating_sub(self.ledger.total_staked())
    }

    pub fn total_staked(&self) -> u64 {
        self.ledger.total_staked()
    }

    /// Current bets in table order.
    pub fn bets(&self) -> impl Iterator<Item = Bet> + '_ {
        self.ledger.bets()
    }

    /// Past draws, most recent first, at most [`HISTORY_LIMIT`] entries.
    pub fn history(&self) -> impl Iterator<Item = Pocket> + '_ {
        self.history.iter().copied()
    }

    pub fn last_result(&self) -> Option<&RoundResult> {
        self.last_result.as_ref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }
}
