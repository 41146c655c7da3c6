//! Outcome resolution for a drawn pocket.
//!
//! A winning bet returns `stake * (multiplier + 1)`, so the original stake comes
//! back as part of the win. A losing bet simply forfeits the stake, which the
//! table debits separately.

use baize_types::{BetOutcome, BetTarget, Color, Pocket};

use crate::ledger::BetLedger;

/// Check if a bet wins for a given pocket.
pub fn bet_wins(target: BetTarget, pocket: Pocket) -> bool {
    // Zero loses everything except a straight bet on 0.
    if pocket.is_zero() {
        return matches!(target, BetTarget::Straight(chosen) if chosen.is_zero());
    }

    let value = pocket.value();
    match target {
        BetTarget::Straight(chosen) => chosen == pocket,
        BetTarget::Red => pocket.color() == Color::Red,
        BetTarget::Black => pocket.color() == Color::Black,
        BetTarget::Even => value % 2 == 0,
        BetTarget::Odd => value % 2 == 1,
        BetTarget::Low => (1..=18).contains(&value),
        BetTarget::High => (19..=36).contains(&value),
        BetTarget::Dozen(dozen) => (value - 1) / 12 == dozen as u8,
        BetTarget::Column(column) => {
            // Column 0: 1, 4, 7, 10, 13, 16, 19, 22, 25, 28, 31, 34
            // Column 1: 2, 5, 8, 11, 14, 17, 20, 23, 26, 29, 32, 35
            // Column 2: 3, 6, 9, 12, 15, 18, 21, 24, 27, 30, 33, 36
            (value - 1) % 3 == column as u8
        }
    }
}

/// Financial outcome of evaluating a ledger against a drawn pocket.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Evaluation {
    pub outcomes: Vec<BetOutcome>,
    pub total_staked: u64,
    pub total_winnings: u64,
    pub net: i64,
}

/// Evaluate every bet in `ledger` against `pocket`.
///
/// Pure: neither the ledger nor any balance is mutated here; the table applies
/// the debit and credit.
pub fn evaluate(ledger: &BetLedger, pocket: Pocket) -> Evaluation {
    let mut outcomes = Vec::with_capacity(ledger.len());
    let mut total_winnings: u64 = 0;
    for bet in ledger.bets() {
        let winnings = if bet_wins(bet.target, pocket) {
            bet.stake * (bet.target.payout_multiplier() + 1)
        } else {
            0
        };
        total_winnings += winnings;
        outcomes.push(BetOutcome {
            target: bet.target,
            stake: bet.stake,
            winnings,
        });
    }
    let total_staked = ledger.total_staked();
    Evaluation {
        outcomes,
        total_staked,
        total_winnings,
        net: total_winnings as i64 - total_staked as i64,
    }
}
