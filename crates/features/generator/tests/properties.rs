use pgen_generator::{Alphabet, DIGITS, GeneratorConfig, PasswordGenerator, SYMBOLS};
use proptest::prelude::*;

fn config_strategy() -> impl Strategy<Value = GeneratorConfig> {
    (6usize..=30, any::<bool>(), any::<bool>())
        .prop_map(|(length, digits, symbols)| GeneratorConfig::new(length, digits, symbols))
}

proptest! {
    #[test]
    fn output_has_exact_length(config in config_strategy(), seed in any::<u64>()) {
        let password = PasswordGenerator::seeded(seed).generate(&config);
        prop_assert_eq!(password.len(), config.length());
    }

    #[test]
    fn every_char_belongs_to_the_alphabet(config in config_strategy(), seed in any::<u64>()) {
        let alphabet = Alphabet::for_config(&config);
        let password = PasswordGenerator::seeded(seed).generate(&config);
        prop_assert!(password.as_str().chars().all(|c| alphabet.contains(c)));
    }

    #[test]
    fn letters_only_when_both_flags_off(length in 6usize..=30, seed in any::<u64>()) {
        let config = GeneratorConfig::new(length, false, false);
        let password = PasswordGenerator::seeded(seed).generate(&config);
        prop_assert!(password.as_str().chars().all(|c| c.is_ascii_alphabetic()));
        prop_assert!(!password.as_str().chars().any(|c| DIGITS.contains(c) || SYMBOLS.contains(c)));
    }

    #[test]
    fn enabling_symbols_keeps_length(config in config_strategy(), seed in any::<u64>()) {
        let mut generator = PasswordGenerator::seeded(seed);
        let before = generator.generate(&config.with_symbols(false));
        let after = generator.generate(&config.with_symbols(true));
        prop_assert_eq!(before.len(), after.len());
    }

    #[test]
    fn raw_lengths_are_clamped(length in any::<usize>(), seed in any::<u64>()) {
        let config = GeneratorConfig::new(length, true, false);
        let password = PasswordGenerator::seeded(seed).generate(&config);
        prop_assert!((6..=30).contains(&password.len()));
    }
}

#[test]
fn boundary_lengths() {
    let mut generator = PasswordGenerator::from_entropy();
    assert_eq!(generator.generate(&GeneratorConfig::new(6, false, false)).len(), 6);
    assert_eq!(generator.generate(&GeneratorConfig::new(30, true, true)).len(), 30);
    assert_eq!(generator.generate(&GeneratorConfig::new(31, true, true)).len(), 30);
    assert_eq!(pgen_generator::clamp_length(31), 30);
}
