use crate::constants::{DEFAULT_LENGTH, MAX_LENGTH, MIN_LENGTH};
use serde::de::{self, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::num::IntErrorKind;

/// Clamps a requested length into `MIN_LENGTH..=MAX_LENGTH`.
#[must_use]
pub const fn clamp_length(length: usize) -> usize {
    if length < MIN_LENGTH {
        MIN_LENGTH
    } else if length > MAX_LENGTH {
        MAX_LENGTH
    } else {
        length
    }
}

/// Clamps a signed request (negative or far beyond `usize`) into `MIN_LENGTH..=MAX_LENGTH`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn clamp_requested_length(length: i128) -> usize {
    if length < MIN_LENGTH as i128 {
        MIN_LENGTH
    } else if length > MAX_LENGTH as i128 {
        MAX_LENGTH
    } else {
        length as usize
    }
}

/// Parses a typed length as an integer, saturating instead of failing on overflow.
///
/// `"-3"` yields `-3` and a hundred nines yields `i128::MAX`; only non-integers are rejected.
#[must_use]
pub fn parse_requested_length(input: &str) -> Option<i128> {
    match input.trim().parse::<i128>() {
        Ok(length) => Some(length),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i128::MAX),
            IntErrorKind::NegOverflow => Some(i128::MIN),
            _ => None,
        },
    }
}

/// User-chosen parameters controlling the shape of a generated password.
///
/// The length is clamped on every path that can set it (constructor, builders,
/// deserialization), so a value outside `MIN_LENGTH..=MAX_LENGTH` cannot exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawGeneratorConfig")]
pub struct GeneratorConfig {
    length: usize,
    include_digits: bool,
    include_symbols: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self { length: DEFAULT_LENGTH, include_digits: false, include_symbols: false }
    }
}

impl GeneratorConfig {
    #[must_use]
    pub const fn new(length: usize, include_digits: bool, include_symbols: bool) -> Self {
        Self { length: clamp_length(length), include_digits, include_symbols }
    }

    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    #[must_use]
    pub const fn include_digits(&self) -> bool {
        self.include_digits
    }

    #[must_use]
    pub const fn include_symbols(&self) -> bool {
        self.include_symbols
    }

    #[must_use]
    pub const fn with_length(mut self, length: usize) -> Self {
        self.length = clamp_length(length);
        self
    }

    #[must_use]
    pub const fn with_digits(mut self, enabled: bool) -> Self {
        self.include_digits = enabled;
        self
    }

    #[must_use]
    pub const fn with_symbols(mut self, enabled: bool) -> Self {
        self.include_symbols = enabled;
        self
    }
}

#[derive(Deserialize)]
#[serde(default)]
struct RawGeneratorConfig {
    #[serde(deserialize_with = "deserialize_length")]
    length: usize,
    include_digits: bool,
    include_symbols: bool,
}

impl Default for RawGeneratorConfig {
    fn default() -> Self {
        let defaults = GeneratorConfig::default();
        Self {
            length: defaults.length,
            include_digits: defaults.include_digits,
            include_symbols: defaults.include_symbols,
        }
    }
}

impl From<RawGeneratorConfig> for GeneratorConfig {
    fn from(raw: RawGeneratorConfig) -> Self {
        Self::new(raw.length, raw.include_digits, raw.include_symbols)
    }
}

/// Accepts any integer-valued length (signed, unsigned, integral float or numeric string)
/// and clamps it, so settings files and environment overrides behave like the CLI.
fn deserialize_length<'de, D: Deserializer<'de>>(deserializer: D) -> Result<usize, D::Error> {
    deserializer.deserialize_any(LengthVisitor)
}

struct LengthVisitor;

impl Visitor<'_> for LengthVisitor {
    type Value = usize;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer password length")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<usize, E> {
        Ok(clamp_requested_length(i128::from(v)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<usize, E> {
        Ok(clamp_requested_length(i128::from(v)))
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> Result<usize, E> {
        Ok(clamp_requested_length(v))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<usize, E> {
        Ok(clamp_requested_length(i128::try_from(v).unwrap_or(i128::MAX)))
    }

    // Integers past i64 arrive as floats from both JSON and `try_parsing` environment values.
    #[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
    fn visit_f64<E: de::Error>(self, v: f64) -> Result<usize, E> {
        if !v.is_finite() || v.trunc() != v {
            return Err(E::invalid_value(Unexpected::Float(v), &self));
        }
        // `as` saturates at the i128 bounds.
        Ok(clamp_requested_length(v as i128))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<usize, E> {
        parse_requested_length(v)
            .map(clamp_requested_length)
            .ok_or_else(|| E::invalid_value(Unexpected::Str(v), &self))
    }
}
