use pgen_domain::GeneratorConfig;
use rand::{Rng, RngCore};
use std::fmt;

/// Base character class, always present.
pub const LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
/// Appended when `include_digits` is set.
pub const DIGITS: &str = "0123456789";
/// Appended when `include_symbols` is set.
pub const SYMBOLS: &str = "!@#$%^&*?><_+";

/// The ordered set of characters eligible for sampling.
///
/// Order is letters, then digits, then symbols. Every class is ASCII, so an index
/// into the alphabet is an index into its bytes.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Alphabet {
    bytes: Vec<u8>,
}

impl Alphabet {
    /// Composes the alphabet implied by the config flags.
    #[must_use]
    pub fn for_config(config: &GeneratorConfig) -> Self {
        let mut bytes = Vec::with_capacity(LETTERS.len() + DIGITS.len() + SYMBOLS.len());
        bytes.extend_from_slice(LETTERS.as_bytes());
        if config.include_digits() {
            bytes.extend_from_slice(DIGITS.as_bytes());
        }
        if config.include_symbols() {
            bytes.extend_from_slice(SYMBOLS.as_bytes());
        }
        Self { bytes }
    }

    /// Number of characters in the alphabet: 52, 62, 65 or 75.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        u8::try_from(c).is_ok_and(|b| self.bytes.contains(&b))
    }

    /// Returns the character at `index`, or `None` past the end.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<char> {
        self.bytes.get(index).copied().map(char::from)
    }

    /// Draws one character uniformly from `0..len()`.
    pub fn sample<R>(&self, rng: &mut R) -> char
    where
        R: RngCore + ?Sized,
    {
        char::from(self.bytes[rng.random_range(0..self.bytes.len())])
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.bytes.iter().copied().map(char::from)
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Alphabet").field("len", &self.len()).finish_non_exhaustive()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars().try_for_each(|c| fmt::Write::write_char(f, c))
    }
}
