//! Password generator feature slice.
//!
//! Maps a [`GeneratorConfig`] to a [`GeneratedPassword`] by sampling characters
//! independently and uniformly from an [`Alphabet`] of letters, optionally extended
//! with digits and symbols.
//!
//! # Security
//!
//! **The random source is not cryptographically secure.** Passwords produced here
//! come from a small, fast PRNG and are a usability aid only. Do not use them as
//! real secrets.
//!
//! ## Example
//!
//! ```rust
//! use pgen_generator::{GeneratorConfig, PasswordGenerator};
//!
//! let mut generator = PasswordGenerator::seeded(7);
//! let password = generator.generate(&GeneratorConfig::new(12, true, false));
//!
//! assert_eq!(password.len(), 12);
//! assert!(password.as_str().chars().all(|c| c.is_ascii_alphanumeric()));
//! ```

mod alphabet;
mod generator;
mod password;

pub use crate::alphabet::{Alphabet, DIGITS, LETTERS, SYMBOLS};
pub use crate::generator::{PasswordGenerator, generate};
pub use crate::password::GeneratedPassword;
pub use pgen_domain::generator::clamp_length;
pub use pgen_domain::GeneratorConfig;
