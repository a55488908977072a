//! Randomness sources.
//!
//! Generation takes any [`rand::Rng`]. The binary picks one of three
//! sources: the timer-entropy mixer [`HwRng`] (default), the operating
//! system generator, or a seeded generator for reproducible output.

mod hw;

use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng, TryRngCore};
use rand_core::impls;
use zeroize::Zeroize;

// Odd 64-bit multipliers, one picked per step from the mixed state.
const MULTIPLIERS: [u64; 8] = [
    0x9e37_79b9_7f4a_7c15,
    0xbf58_476d_1ce4_e5b9,
    0x94d0_49bb_1331_11eb,
    0xd6e8_feb8_6659_fd93,
    0xff51_afd7_ed55_8ccd,
    0xc4ce_b9fe_1a85_ec53,
    0x2545_f491_4f6c_dd1d,
    0x5851_f42d_4c95_7f2d,
];

/// Mixes a hardware timer reading into its state on every draw.
pub struct HwRng {
    state: u64,
}

impl HwRng {
    pub fn new() -> Self {
        Self {
            state: hw::entropy(),
        }
    }

    #[inline(always)]
    fn step(&mut self) -> u64 {
        let ent = hw::entropy();

        let mixed = self.state ^ ent;
        let idx = ((mixed ^ (mixed >> 32)) % MULTIPLIERS.len() as u64) as usize;

        // rotate, multiply, xor fresh entropy
        self.state = self.state.rotate_left(17).wrapping_mul(MULTIPLIERS[idx]) ^ ent;

        // SplitMix64 output finalizer
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }
}

impl Default for HwRng {
    fn default() -> Self {
        Self::new()
    }
}

impl RngCore for HwRng {
    fn next_u32(&mut self) -> u32 {
        (self.step() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.step()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        impls::fill_bytes_via_next(self, dst)
    }
}

impl Drop for HwRng {
    fn drop(&mut self) {
        self.state.zeroize();
    }
}

/// Where random draws come from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Source {
    #[default]
    Hardware,
    Urandom,
    Seeded(u64),
}

impl Source {
    pub fn name(&self) -> &'static str {
        match self {
            Source::Hardware => hw::source_name(),
            Source::Urandom => "os",
            Source::Seeded(_) => "seeded",
        }
    }

    pub fn into_rng(self) -> Box<dyn RngCore> {
        match self {
            Source::Hardware => Box::new(HwRng::new()),
            Source::Urandom => Box::new(OsRng.unwrap_err()),
            Source::Seeded(seed) => Box::new(StdRng::seed_from_u64(seed)),
        }
    }
}
