//! Bet targets and payout table.
//!
//! Payout multipliers exclude the returned stake:
//! Straight 35:1, even-money bets 1:1, Dozen/Column 2:1.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::pocket::Pocket;

/// Dozen groups on the table layout (1-12, 13-24, 25-36).
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dozen {
    First = 0,
    Second = 1,
    Third = 2,
}

/// Table columns (1-4-7..., 2-5-8..., 3-6-9...).
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Column {
    First = 0,
    Second = 1,
    Third = 2,
}

/// A bettable target on the table layout.
///
/// The set is closed: anything representable here is a valid bet, and the straight
/// pocket is range-checked at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum BetTarget {
    /// Single pocket (35:1).
    Straight(Pocket),
    /// Red (1:1).
    Red,
    /// Black (1:1).
    Black,
    /// Even, zero excluded (1:1).
    Even,
    /// Odd, zero excluded (1:1).
    Odd,
    /// 1-18 (1:1).
    Low,
    /// 19-36 (1:1).
    High,
    /// 1-12, 13-24, 25-36 (2:1).
    Dozen(Dozen),
    /// First, second, third column (2:1).
    Column(Column),
}

impl BetTarget {
    /// Payout multiplier for this target (excludes the returned stake).
    pub fn payout_multiplier(&self) -> u64 {
        match self {
            BetTarget::Straight(_) => 35,
            BetTarget::Red
            | BetTarget::Black
            | BetTarget::Even
            | BetTarget::Odd
            | BetTarget::Low
            | BetTarget::High => 1,
            BetTarget::Dozen(_) | BetTarget::Column(_) => 2,
        }
    }
}

impl fmt::Display for BetTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BetTarget::Straight(pocket) => write!(f, "Number {}", pocket),
            BetTarget::Red => write!(f, "Red"),
            BetTarget::Black => write!(f, "Black"),
            BetTarget::Even => write!(f, "Even"),
            BetTarget::Odd => write!(f, "Odd"),
            BetTarget::Low => write!(f, "1-18"),
            BetTarget::High => write!(f, "19-36"),
            BetTarget::Dozen(Dozen::First) => write!(f, "1st Dozen"),
            BetTarget::Dozen(Dozen::Second) => write!(f, "2nd Dozen"),
            BetTarget::Dozen(Dozen::Third) => write!(f, "3rd Dozen"),
            BetTarget::Column(column) => write!(f, "Column {}", *column as u8 + 1),
        }
    }
}

/// A stake committed to a single target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bet {
    pub target: BetTarget,
    pub stake: u64,
}
