//! Property tests for password composition.

use persopass::entropy::Source;
use persopass::pass::{
    BirthDate, GeneratorConfig, IdentityInfo, Strength, charset, compose, fragments, generate,
    natural_length,
};
use proptest::prelude::*;
use rand::{SeedableRng, rngs::StdRng};

fn ann_lee() -> IdentityInfo {
    IdentityInfo::default()
        .with_first_name("Ann")
        .with_last_name("Lee")
        .with_birth_date(BirthDate::new("1990", "05", "02"))
        .with_lucky_number("7")
}

fn strength() -> impl Strategy<Value = Strength> {
    prop_oneof![
        Just(Strength::Normal),
        Just(Strength::Medium),
        Just(Strength::Strong),
    ]
}

fn identity() -> impl Strategy<Value = IdentityInfo> {
    (
        proptest::option::of("\\PC{0,8}"),
        proptest::option::of("[a-zA-Z]{0,8}"),
        proptest::option::of((1900u32..2024, 1u32..13, 1u32..29)),
        proptest::option::of("[0-9]{0,6}"),
    )
        .prop_map(|(first, last, date, lucky)| IdentityInfo {
            first_name: first,
            last_name: last,
            birth_date: date.map(|(y, m, d)| {
                BirthDate::new(y.to_string(), format!("{m:02}"), format!("{d:02}"))
            }),
            lucky_number: lucky,
        })
}

proptest! {
    #[test]
    fn output_has_exact_length(
        length in 1usize..64,
        strength in strength(),
        identity in identity(),
        seed in any::<u64>(),
    ) {
        let config = GeneratorConfig::new(length, strength, identity).unwrap();
        let password = generate(&config, &mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(password.chars().count(), length);
    }

    #[test]
    fn output_is_shuffle_prefix_or_digit_padded(
        length in 1usize..64,
        strength in strength(),
        identity in identity(),
        seed in any::<u64>(),
    ) {
        let config = GeneratorConfig::new(length, strength, identity).unwrap();
        let composition = compose(&config, &mut StdRng::seed_from_u64(seed));
        let joined = composition.shuffled.concat();
        let natural = natural_length(&composition.shuffled);

        if natural >= length {
            let prefix: String = joined.chars().take(length).collect();
            prop_assert_eq!(&composition.password, &prefix);
        } else {
            prop_assert!(composition.password.starts_with(&joined));
            let padding = &composition.password[joined.len()..];
            prop_assert!(padding.bytes().all(|b| charset::DIGITS.contains(&b)));
        }
    }

    #[test]
    fn shuffle_is_a_permutation_of_fragments(
        strength in strength(),
        identity in identity(),
        seed in any::<u64>(),
    ) {
        let config = GeneratorConfig::new(15, strength, identity).unwrap();
        let composition = compose(&config, &mut StdRng::seed_from_u64(seed));
        let mut before = composition.fragments.clone();
        let mut after = composition.shuffled.clone();
        before.sort();
        after.sort();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn random_runs_match_strength(strength in strength(), seed in any::<u64>()) {
        let config = GeneratorConfig::new(12, strength, ann_lee()).unwrap();
        let parts = fragments(&config, &mut StdRng::seed_from_u64(seed));
        let budget = strength.random_budget();

        prop_assert_eq!(parts.len(), 7);
        prop_assert_eq!(parts[5].len(), budget);
        prop_assert!(parts[5].bytes().all(|b| charset::DIGITS.contains(&b)));
        prop_assert_eq!(parts[6].len(), budget);
        prop_assert!(parts[6].bytes().all(|b| charset::SPECIAL_CHARS.contains(&b)));
    }
}

#[test]
fn ann_lee_normal_twelve() {
    let config = GeneratorConfig::new(12, Strength::Normal, ann_lee()).unwrap();
    let composition = compose(&config, &mut StdRng::seed_from_u64(2024));

    for expected in ["Ann", "Lee", "1990", "0502", "7"] {
        assert!(composition.fragments.iter().any(|f| f == expected));
    }
    assert_eq!(natural_length(&composition.fragments), 17);
    assert_eq!(composition.password.chars().count(), 12);

    let joined = composition.shuffled.concat();
    assert_eq!(composition.password, joined[..12]);
}

#[test]
fn ann_lee_heavy_truncation() {
    let config = GeneratorConfig::new(6, Strength::Normal, ann_lee()).unwrap();
    for seed in 0..20 {
        let composition = compose(&config, &mut StdRng::seed_from_u64(seed));
        assert_eq!(composition.password.len(), 6);
        assert!(composition.shuffled.concat().starts_with(&composition.password));
    }
}

#[test]
fn missing_last_name_leaves_no_fragment() {
    let identity = IdentityInfo {
        last_name: None,
        ..ann_lee()
    };
    let config = GeneratorConfig::new(15, Strength::Strong, identity).unwrap();
    for seed in 0..20 {
        let parts = fragments(&config, &mut StdRng::seed_from_u64(seed));
        assert!(!parts.iter().any(|f| f == "Lee"));
        assert_eq!(parts.len(), 6);
    }
}

#[test]
fn strength_budget_is_monotonic() {
    let natural = |strength: Strength| {
        let config = GeneratorConfig::new(12, strength, ann_lee()).unwrap();
        natural_length(&fragments(&config, &mut StdRng::seed_from_u64(0)))
    };
    assert!(natural(Strength::Normal) < natural(Strength::Medium));
    assert!(natural(Strength::Medium) < natural(Strength::Strong));
}

#[test]
fn repeated_calls_differ() {
    let config = GeneratorConfig::new(12, Strength::Normal, ann_lee()).unwrap();
    for source in [Source::Hardware, Source::Urandom] {
        let mut rng = source.into_rng();
        let outputs: Vec<String> = (0..20).map(|_| generate(&config, rng.as_mut())).collect();
        assert!(
            outputs.iter().any(|p| p != &outputs[0]),
            "{} source produced 20 identical passwords",
            source.name()
        );
    }
}
