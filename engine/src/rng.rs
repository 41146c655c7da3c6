//! Randomness source for wheel spins.

use baize_types::Pocket;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

#[cfg(any(test, feature = "mocks"))]
use std::collections::VecDeque;

/// Draws winning pockets uniformly from the 37-pocket wheel.
///
/// Production tables seed from OS entropy; tests inject a fixed seed (or a scripted
/// sequence) so rounds are reproducible.
pub struct WheelRng(Source);

enum Source {
    Chacha(ChaCha20Rng),
    #[cfg(any(test, feature = "mocks"))]
    Script(VecDeque<Pocket>),
}

impl WheelRng {
    /// RNG seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self(Source::Chacha(ChaCha20Rng::from_entropy()))
    }

    /// RNG with a fixed seed. Draws are identical across runs for the same seed.
    pub fn seeded(seed: u64) -> Self {
        Self(Source::Chacha(ChaCha20Rng::seed_from_u64(seed)))
    }

    /// RNG replaying a fixed sequence of pockets, repeating the final one once the
    /// sequence is exhausted. An empty sequence draws zero forever.
    #[cfg(any(test, feature = "mocks"))]
    pub fn scripted(pockets: impl IntoIterator<Item = Pocket>) -> Self {
        Self(Source::Script(pockets.into_iter().collect()))
    }

    /// Draw the next winning pocket.
    pub fn spin(&mut self) -> Pocket {
        match &mut self.0 {
            Source::Chacha(rng) => rng.gen(),
            #[cfg(any(test, feature = "mocks"))]
            Source::Script(sequence) => {
                let next = sequence.pop_front().unwrap_or(Pocket::ZERO);
                if sequence.is_empty() {
                    sequence.push_back(next);
                }
                next
            }
        }
    }
}
