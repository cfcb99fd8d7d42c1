use crate::alphabet::Alphabet;
use crate::password::GeneratedPassword;
use pgen_domain::GeneratorConfig;
use rand::rngs::{SmallRng, StdRng};
use rand::{RngCore, SeedableRng};
use std::fmt;
use tracing::debug;

/// Generates a password of exactly `config.length()` characters.
///
/// Each character is drawn independently and uniformly, with replacement, from
/// [`Alphabet::for_config`]. Indices are sampled from the half-open range
/// `0..alphabet.len()`.
pub fn generate<R>(config: &GeneratorConfig, rng: &mut R) -> GeneratedPassword
where
    R: RngCore + ?Sized,
{
    let alphabet = Alphabet::for_config(config);
    let password: String = (0..config.length()).map(|_| alphabet.sample(rng)).collect();

    debug!(
        length = config.length(),
        alphabet = alphabet.len(),
        digits = config.include_digits(),
        symbols = config.include_symbols(),
        "Password generated"
    );

    GeneratedPassword::from(password)
}

/// A [`generate`] front-end that owns its random source.
///
/// **Not cryptographically secure.** See the crate docs.
pub struct PasswordGenerator {
    rng: Box<dyn RngCore + Send>,
}

impl PasswordGenerator {
    /// Small fast PRNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::with_rng(SmallRng::from_os_rng())
    }

    /// Deterministic generator: equal seeds yield equal password sequences.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    #[must_use]
    pub fn with_rng<R>(rng: R) -> Self
    where
        R: RngCore + Send + 'static,
    {
        Self { rng: Box::new(rng) }
    }

    pub fn generate(&mut self, config: &GeneratorConfig) -> GeneratedPassword {
        generate(config, self.rng.as_mut())
    }

    /// Generates `count` independent passwords for the same config.
    pub fn generate_many(
        &mut self,
        config: &GeneratorConfig,
        count: usize,
    ) -> Vec<GeneratedPassword> {
        (0..count).map(|_| self.generate(config)).collect()
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl fmt::Debug for PasswordGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordGenerator").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pgen_domain::constants::{MAX_LENGTH, MIN_LENGTH};
    use std::collections::HashSet;

    /// Always yields the largest possible word.
    struct SaturatedRng;

    impl RngCore for SaturatedRng {
        fn next_u32(&mut self) -> u32 {
            u32::MAX
        }

        fn next_u64(&mut self) -> u64 {
            u64::MAX
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            dst.fill(u8::MAX);
        }
    }

    #[test]
    fn test_exact_length_over_bounds() {
        let mut generator = PasswordGenerator::seeded(1);
        for length in [6, 8, 17, 30] {
            let config = GeneratorConfig::new(length, true, true);
            assert_eq!(generator.generate(&config).len(), length);
        }
        assert_eq!(generator.generate(&GeneratorConfig::new(31, false, false)).len(), 30);
    }

    #[test]
    fn test_letters_only_example() {
        let password = PasswordGenerator::seeded(42).generate(&GeneratorConfig::default());
        assert_eq!(password.len(), 8);
        assert!(password.as_str().chars().all(|c| c.is_ascii_alphabetic()));
    }

    #[test]
    fn test_seeded_generators_agree() {
        let config = GeneratorConfig::new(20, true, true);
        let first = PasswordGenerator::seeded(99).generate_many(&config, 5);
        let second = PasswordGenerator::seeded(99).generate_many(&config, 5);
        let other = PasswordGenerator::seeded(100).generate_many(&config, 5);

        assert_eq!(first, second);
        assert_ne!(first, other);
    }

    #[test]
    fn test_every_index_is_reachable() {
        let config = GeneratorConfig::new(30, true, true);
        let alphabet = Alphabet::for_config(&config);
        let mut generator = PasswordGenerator::seeded(2024);

        let seen: HashSet<char> = generator
            .generate_many(&config, 1_000)
            .iter()
            .flat_map(|p| p.as_str().chars().collect::<Vec<_>>())
            .collect();

        assert_eq!(seen.len(), alphabet.len());
        assert!(seen.iter().all(|&c| alphabet.contains(c)));
    }

    #[test]
    fn test_extreme_rng_values_stay_in_range() {
        let mut rng = SaturatedRng;
        let config = GeneratorConfig::new(10, true, true);
        let alphabet = Alphabet::for_config(&config);

        let password = generate(&config, &mut rng);
        assert_eq!(password.len(), 10);
        assert!(password.as_str().chars().all(|c| alphabet.contains(c)));
    }

    #[test]
    fn test_saturated_rng_never_shortens_password() {
        let mut rng = SaturatedRng;
        for length in MIN_LENGTH..=MAX_LENGTH {
            let config = GeneratorConfig::new(length, true, true);
            assert_eq!(generate(&config, &mut rng).len(), length);
        }
    }
}
