//! Deterministic random number generation.
//!
//! RULE: Nothing in the simulation may call any platform RNG.
//! All randomness flows through one `RandomSource`, seeded from the
//! master seed and advanced monotonically across every draw in a run.
//! Slot spins, roulette spins, and extra-bet stop decisions all pull
//! from the same stream, so a seed fully reproduces a campaign.

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;

/// The randomness seam.
///
/// Production code uses [`TableRng`]; tests may implement this
/// directly to replay a scripted sequence of draws.
pub trait RandomSource {
    /// Roll a float in [0.0, 1.0).
    fn next_f64(&mut self) -> f64;

    /// Roll a u64 in [0, n). Panics if n == 0.
    fn next_u64_below(&mut self, n: u64) -> u64;

    /// Bernoulli trial: returns true with probability p.
    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}

/// The production stream, seeded from the master seed.
pub struct TableRng {
    inner: Pcg64Mcg,
}

impl TableRng {
    pub fn new(master_seed: u64) -> Self {
        Self {
            inner: Pcg64Mcg::seed_from_u64(master_seed),
        }
    }
}

impl RandomSource for TableRng {
    fn next_f64(&mut self) -> f64 {
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    fn next_u64_below(&mut self, n: u64) -> u64 {
        assert!(n > 0, "n must be > 0");
        self.inner.next_u64() % n
    }
}
