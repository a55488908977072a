//! Password generation.

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;
use zeroize::Zeroize;

use super::charset::{self, DIGITS};
use super::identity::IdentityInfo;
use super::strength::Strength;
use crate::error::{Error, Result};

/// Characters taken from the start of each name.
pub const PREFIX_LEN: usize = 3;

/// One generation request. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    length: usize,
    strength: Strength,
    identity: IdentityInfo,
}

impl GeneratorConfig {
    /// Fails with [`Error::ZeroLength`] when `length` is 0.
    pub fn new(length: usize, strength: Strength, identity: IdentityInfo) -> Result<Self> {
        if length == 0 {
            return Err(Error::ZeroLength);
        }
        Ok(Self {
            length,
            strength,
            identity,
        })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn strength(&self) -> Strength {
        self.strength
    }

    pub fn identity(&self) -> &IdentityInfo {
        &self.identity
    }
}

/// The intermediate state of one generation, wiped on drop.
#[derive(Debug)]
pub struct Composition {
    /// Fragments in assembly order.
    pub fragments: Vec<String>,
    /// The same fragments after shuffling.
    pub shuffled: Vec<String>,
    pub password: String,
}

impl Drop for Composition {
    fn drop(&mut self) {
        self.fragments.zeroize();
        self.shuffled.zeroize();
        self.password.zeroize();
    }
}

/// Generate a single password.
pub fn generate<R: Rng + ?Sized>(config: &GeneratorConfig, rng: &mut R) -> String {
    let mut composition = compose(config, rng);
    std::mem::take(&mut composition.password)
}

/// Generate `count` independent passwords from the same config.
pub fn generate_batch<R: Rng + ?Sized>(
    config: &GeneratorConfig,
    count: usize,
    rng: &mut R,
) -> Vec<String> {
    (0..count).map(|_| generate(config, rng)).collect()
}

/// Run every generation step, keeping the fragments for inspection.
pub fn compose<R: Rng + ?Sized>(config: &GeneratorConfig, rng: &mut R) -> Composition {
    let fragments = fragments(config, rng);
    let natural = natural_length(&fragments);

    let mut shuffled = fragments.clone();
    shuffled.shuffle(rng);

    debug!(
        fragments = fragments.len(),
        natural_length = natural,
        target_length = config.length,
        "composing password"
    );

    let password = normalize_length(shuffled.concat(), config.length, rng);
    Composition {
        fragments,
        shuffled,
        password,
    }
}

/// Identity fragments in fixed order, then the digit run and the symbol run.
pub fn fragments<R: Rng + ?Sized>(config: &GeneratorConfig, rng: &mut R) -> Vec<String> {
    let identity = &config.identity;
    let mut parts = Vec::with_capacity(7);

    if let Some(name) = present(&identity.first_name) {
        parts.push(prefix(name, PREFIX_LEN));
    }
    if let Some(name) = present(&identity.last_name) {
        parts.push(prefix(name, PREFIX_LEN));
    }
    if let Some(date) = &identity.birth_date {
        if !date.year.is_empty() {
            parts.push(date.year.clone());
        }
        let month_day = date.month_day();
        if !month_day.is_empty() {
            parts.push(month_day);
        }
    }
    if let Some(number) = present(&identity.lucky_number) {
        parts.push(number.to_string());
    }

    let budget = config.strength.random_budget();
    parts.push(charset::random_digits(budget, rng));
    parts.push(charset::random_symbols(budget, rng));
    parts
}

/// Total characters across all fragments.
pub fn natural_length(fragments: &[String]) -> usize {
    fragments.iter().map(|f| f.chars().count()).sum()
}

/// Cut to `length` characters, or pad with random digits up to it.
pub fn normalize_length<R: Rng + ?Sized>(
    mut password: String,
    length: usize,
    rng: &mut R,
) -> String {
    let current = password.chars().count();

    if current > length {
        let cut = password
            .char_indices()
            .nth(length)
            .map_or(password.len(), |(i, _)| i);
        let mut tail = password.split_off(cut);
        tail.zeroize();
        return password;
    }

    password.reserve(length - current);
    for _ in current..length {
        password.push(charset::random_char(DIGITS, rng));
    }
    password
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

fn prefix(s: &str, n: usize) -> String {
    s.chars().take(n).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::charset::SPECIAL_CHARS;
    use crate::pass::identity::BirthDate;
    use rand::{SeedableRng, rngs::StdRng};

    fn ann_lee() -> IdentityInfo {
        IdentityInfo::default()
            .with_first_name("Ann")
            .with_last_name("Lee")
            .with_birth_date(BirthDate::new("1990", "05", "02"))
            .with_lucky_number("7")
    }

    fn config(length: usize, strength: Strength, identity: IdentityInfo) -> GeneratorConfig {
        GeneratorConfig::new(length, strength, identity).unwrap()
    }

    fn is_digits(s: &str) -> bool {
        s.bytes().all(|b| DIGITS.contains(&b))
    }

    fn is_symbols(s: &str) -> bool {
        s.bytes().all(|b| SPECIAL_CHARS.contains(&b))
    }

    #[test]
    fn zero_length_is_rejected() {
        assert!(matches!(
            GeneratorConfig::new(0, Strength::Normal, ann_lee()),
            Err(Error::ZeroLength)
        ));
    }

    #[test]
    fn fragments_follow_field_order() {
        let mut rng = StdRng::seed_from_u64(1);
        let parts = fragments(&config(12, Strength::Normal, ann_lee()), &mut rng);

        assert_eq!(parts.len(), 7);
        assert_eq!(&parts[..5], ["Ann", "Lee", "1990", "0502", "7"]);
        assert_eq!(parts[5].len(), 1);
        assert!(is_digits(&parts[5]));
        assert_eq!(parts[6].len(), 1);
        assert!(is_symbols(&parts[6]));
    }

    #[test]
    fn names_contribute_at_most_three_chars() {
        let identity = IdentityInfo::default()
            .with_first_name("Jonathan")
            .with_last_name("Li");
        let mut rng = StdRng::seed_from_u64(1);
        let parts = fragments(&config(10, Strength::Normal, identity), &mut rng);
        assert_eq!(&parts[..2], ["Jon", "Li"]);
    }

    #[test]
    fn prefixes_count_characters_not_bytes() {
        let identity = IdentityInfo::default().with_first_name("Zoë-Ångström");
        let mut rng = StdRng::seed_from_u64(1);
        let parts = fragments(&config(10, Strength::Normal, identity), &mut rng);
        assert_eq!(parts[0], "Zoë");
    }

    #[test]
    fn missing_and_empty_fields_contribute_nothing() {
        let identity = IdentityInfo {
            first_name: Some("Ann".into()),
            last_name: Some(String::new()),
            birth_date: None,
            lucky_number: None,
        };
        let mut rng = StdRng::seed_from_u64(1);
        let parts = fragments(&config(10, Strength::Strong, identity), &mut rng);

        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "Ann");
        assert_eq!(parts[1].len(), 3);
        assert_eq!(parts[2].len(), 3);
    }

    #[test]
    fn strength_sets_random_run_length() {
        for strength in Strength::ALL {
            let mut rng = StdRng::seed_from_u64(9);
            let parts = fragments(&config(12, strength, IdentityInfo::default()), &mut rng);
            assert_eq!(parts.len(), 2);
            assert_eq!(parts[0].len(), strength.random_budget());
            assert_eq!(parts[1].len(), strength.random_budget());
        }
    }

    #[test]
    fn truncates_to_prefix_of_shuffle() {
        let mut rng = StdRng::seed_from_u64(5);
        let composition = compose(&config(6, Strength::Normal, ann_lee()), &mut rng);
        let joined = composition.shuffled.concat();

        assert_eq!(composition.password.chars().count(), 6);
        assert!(joined.starts_with(&composition.password));
    }

    #[test]
    fn pads_with_digits_when_short() {
        let identity = IdentityInfo::default().with_first_name("Al");
        let mut rng = StdRng::seed_from_u64(5);
        let composition = compose(&config(15, Strength::Normal, identity), &mut rng);
        let joined = composition.shuffled.concat();

        assert_eq!(joined.chars().count(), 4);
        assert_eq!(composition.password.chars().count(), 15);
        assert!(composition.password.starts_with(&joined));
        assert!(is_digits(&composition.password[joined.len()..]));
    }

    #[test]
    fn shuffle_moves_whole_fragments() {
        let mut rng = StdRng::seed_from_u64(21);
        let composition = compose(&config(40, Strength::Strong, ann_lee()), &mut rng);

        let mut before = composition.fragments.clone();
        let mut after = composition.shuffled.clone();
        before.sort();
        after.sort();
        assert_eq!(before, after);
    }

    #[test]
    fn same_seed_same_password() {
        let config = config(12, Strength::Medium, ann_lee());
        let a = generate(&config, &mut StdRng::seed_from_u64(77));
        let b = generate(&config, &mut StdRng::seed_from_u64(77));
        assert_eq!(a, b);
    }

    #[test]
    fn batch_draws_fresh_passwords() {
        let config = config(12, Strength::Strong, ann_lee());
        let mut rng = StdRng::seed_from_u64(8);
        let batch = generate_batch(&config, 20, &mut rng);

        assert_eq!(batch.len(), 20);
        assert!(batch.iter().all(|p| p.chars().count() == 12));
        assert!(batch.iter().any(|p| p != &batch[0]));
    }

    #[test]
    fn normalize_truncates_on_char_boundary() {
        let mut rng = StdRng::seed_from_u64(1);
        let out = normalize_length("ÅÅÅÅ".to_string(), 2, &mut rng);
        assert_eq!(out, "ÅÅ");
    }

    #[test]
    fn normalize_leaves_exact_length_alone() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(normalize_length("abc".to_string(), 3, &mut rng), "abc");
    }
}
