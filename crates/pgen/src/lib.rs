//! Facade crate for the password generator features and shared modules.
//! Re-exports domain/kernel primitives and wires a form session together.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `pgen` (optionally with `system-clipboard`).
//! - Call [`init`] to get a [`Session`]: event bus, form and toaster sharing one bus.
//!
//! ## Security
//! Passwords are drawn from a **non-cryptographic** PRNG. They are a usability aid,
//! not real secrets.

pub use pgen_domain as domain;
use pgen_domain::config::AppConfig;
pub use pgen_event_bus as event_bus;
use pgen_event_bus::EventBus;
pub use pgen_kernel as kernel;

/// Feature registry for runtime introspection.
pub mod features {
    pub use pgen_form as form;
    pub use pgen_generator as generator;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        "generator",
        "form",
        #[cfg(feature = "system-clipboard")]
        "system-clipboard",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

use features::form::{FormError, PasswordForm, Toaster};
use features::generator::PasswordGenerator;

/// A wired-up form session. Every part publishes on the same [`EventBus`].
#[derive(Debug)]
pub struct Session {
    pub bus: EventBus,
    pub form: PasswordForm,
    pub toaster: Toaster,
}

/// Builds a session from settings.
///
/// `seed` makes the password sequence deterministic; `None` seeds from OS entropy.
///
/// # Errors
/// Returns an error if the initial form snapshot cannot be published.
pub fn init(config: &AppConfig, seed: Option<u64>) -> Result<Session, FormError> {
    let bus = EventBus::new();
    let generator = seed.map_or_else(PasswordGenerator::from_entropy, PasswordGenerator::seeded);
    let form = PasswordForm::with_generator(bus.clone(), config.generator, generator)?;
    let toaster = Toaster::new(bus.clone(), &config.notification);

    Ok(Session { bus, form, toaster })
}
