//! Character pools for the random runs.

use rand::Rng;

pub const DIGITS: &[u8] = b"0123456789";
pub const SPECIAL_CHARS: &[u8] = b"!@#$%^&*";

/// Pick one character uniformly from an ASCII pool.
#[inline]
pub fn random_char<R: Rng + ?Sized>(pool: &[u8], rng: &mut R) -> char {
    pool[rng.random_range(0..pool.len())] as char
}

/// Build a run of `count` characters drawn from `pool`.
pub fn random_run<R: Rng + ?Sized>(pool: &[u8], count: usize, rng: &mut R) -> String {
    (0..count).map(|_| random_char(pool, rng)).collect()
}

pub fn random_digits<R: Rng + ?Sized>(count: usize, rng: &mut R) -> String {
    random_run(DIGITS, count, rng)
}

pub fn random_symbols<R: Rng + ?Sized>(count: usize, rng: &mut R) -> String {
    random_run(SPECIAL_CHARS, count, rng)
}
