//! Wheel pockets and their fixed color assignment.

use std::fmt;

use rand::distributions::{Distribution, Standard};
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

use crate::constants::POCKET_COUNT;

/// Red pockets on a European wheel.
const RED_NUMBERS: [u8; 18] = [1, 3, 5, 7, 9, 12, 14, 16, 18, 19, 21, 23, 25, 27, 30, 32, 34, 36];

#[derive(Debug, ThisError, PartialEq, Eq)]
pub enum TargetError {
    #[error("pocket out of range (got={got}, max={max})")]
    PocketOutOfRange { got: u8, max: u8 },
}

/// Pocket color. Zero is green; the red set is fixed by the European layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Green,
    Red,
    Black,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Green => "green",
            Color::Red => "red",
            Color::Black => "black",
        };
        write!(f, "{}", name)
    }
}

/// A single pocket on the wheel (0-36).
///
/// Construction validates the range, so a `Pocket` held anywhere in the system is
/// always a real pocket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Pocket(u8);

impl Pocket {
    /// Highest pocket number on the wheel.
    pub const MAX: u8 = 36;

    /// The zero pocket.
    pub const ZERO: Pocket = Pocket(0);

    pub fn new(value: u8) -> Result<Self, TargetError> {
        if value > Self::MAX {
            return Err(TargetError::PocketOutOfRange {
                got: value,
                max: Self::MAX,
            });
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn color(&self) -> Color {
        if self.0 == 0 {
            Color::Green
        } else if RED_NUMBERS.contains(&self.0) {
            Color::Red
        } else {
            Color::Black
        }
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl TryFrom<u8> for Pocket {
    type Error = TargetError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Pocket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for Pocket {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = u8::deserialize(deserializer)?;
        Pocket::new(value).map_err(serde::de::Error::custom)
    }
}

impl Distribution<Pocket> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Pocket {
        Pocket(rng.gen_range(0..POCKET_COUNT as u8))
    }
}
