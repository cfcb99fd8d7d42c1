use crate::clipboard::Clipboard;
use crate::error::{FormError, FormErrorExt};
use crate::toast::{Toast, Toaster};
use pgen_domain::GeneratorConfig;
use pgen_domain::constants::SELECTION_HIGHLIGHT_LIMIT;
use pgen_domain::generator::clamp_requested_length;
use pgen_event_bus::EventBus;
use pgen_generator::{GeneratedPassword, PasswordGenerator};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, trace, warn};

/// What caused a regeneration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegenerationReason {
    Initial,
    LengthChanged,
    DigitsToggled,
    SymbolsToggled,
    ConfigReplaced,
    Requested,
}

/// The form state published after every regeneration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSnapshot {
    pub config: GeneratorConfig,
    pub password: GeneratedPassword,
    pub revision: u64,
    pub reason: RegenerationReason,
}

impl FormSnapshot {
    /// See [`split_highlight`].
    #[must_use]
    pub fn highlight(&self) -> (&str, &str) {
        split_highlight(self.password.as_str())
    }
}

/// Result of a copy action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Copied and confirmed with a toast.
    Copied(Toast),
    /// Copied, but the toast could not be shown.
    CopiedUnnotified,
    /// The clipboard rejected the write. No toast was shown.
    ClipboardFailed,
}

impl CopyOutcome {
    #[must_use]
    pub const fn is_copied(&self) -> bool {
        !matches!(self, Self::ClipboardFailed)
    }
}

/// Splits `password` into the highlighted prefix (at most
/// [`SELECTION_HIGHLIGHT_LIMIT`] characters) and the remainder.
///
/// Cosmetic only; copying always uses the whole password.
#[must_use]
pub fn split_highlight(password: &str) -> (&str, &str) {
    let end = password
        .char_indices()
        .nth(SELECTION_HIGHLIGHT_LIMIT)
        .map_or(password.len(), |(index, _)| index);
    password.split_at(end)
}

/// Writes `password` to `clipboard` unchanged and confirms with a toast.
///
/// Clipboard failures are logged and swallowed; no toast is shown for them.
pub fn copy_to_clipboard(
    password: &GeneratedPassword,
    clipboard: &mut dyn Clipboard,
    toaster: &Toaster,
) -> CopyOutcome {
    if let Err(e) = clipboard.write_text(password.as_str()) {
        warn!(backend = clipboard.backend(), error = %e, "Copy failed, skipping notification");
        return CopyOutcome::ClipboardFailed;
    }

    debug!(backend = clipboard.backend(), "Password copied");
    match toaster.notify() {
        Ok(toast) => CopyOutcome::Copied(toast),
        Err(e) => {
            warn!(error = %e, "Password copied but the toast could not be shown");
            CopyOutcome::CopiedUnnotified
        },
    }
}

/// Reactive password form.
///
/// Holds the current [`GeneratorConfig`] and password. Any change to a watched
/// field regenerates the password and publishes a [`FormSnapshot`] on the
/// [`EventBus`] watch channel. Setting a field to its current value is a no-op.
#[derive(Debug)]
pub struct PasswordForm {
    config: GeneratorConfig,
    password: GeneratedPassword,
    generator: PasswordGenerator,
    revision: u64,
    reason: RegenerationReason,
    bus: EventBus,
}

impl PasswordForm {
    /// Creates the form with an entropy-seeded generator and generates the first password.
    ///
    /// # Errors
    /// Returns [`FormError::Bus`] if the initial snapshot cannot be published.
    pub fn new(bus: EventBus, config: GeneratorConfig) -> Result<Self, FormError> {
        Self::with_generator(bus, config, PasswordGenerator::from_entropy())
    }

    /// # Errors
    /// See [`PasswordForm::new`].
    pub fn with_generator(
        bus: EventBus,
        config: GeneratorConfig,
        mut generator: PasswordGenerator,
    ) -> Result<Self, FormError> {
        let password = generator.generate(&config);
        let form = Self {
            config,
            password,
            generator,
            revision: 0,
            reason: RegenerationReason::Initial,
            bus,
        };
        form.publish().context("Failed to publish initial snapshot")?;
        debug!(length = config.length(), "Password form initialized");
        Ok(form)
    }

    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    #[must_use]
    pub const fn password(&self) -> &GeneratedPassword {
        &self.password
    }

    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    #[must_use]
    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            config: self.config,
            password: self.password.clone(),
            revision: self.revision,
            reason: self.reason,
        }
    }

    /// Registers an observer. The receiver starts at the current snapshot, marked as seen.
    ///
    /// # Errors
    /// Returns [`FormError::Bus`] if `FormSnapshot` is registered as a broadcast channel.
    pub fn subscribe(&self) -> Result<watch::Receiver<Arc<FormSnapshot>>, FormError> {
        self.bus.subscribe_watch(self.snapshot()).context("Failed to subscribe to form snapshots")
    }

    /// Sets the length, clamping it into range. Returns whether the password was regenerated.
    ///
    /// Takes a signed value so negative or oversized requests clamp instead of being refused.
    ///
    /// # Errors
    /// Returns [`FormError::Bus`] if the snapshot cannot be published.
    pub fn set_length(&mut self, length: i128) -> Result<bool, FormError> {
        let applied = clamp_requested_length(length);
        if i128::try_from(applied).ok() != Some(length) {
            warn!(requested = length, applied, "Length out of range, clamped");
        }
        self.update(self.config.with_length(applied), RegenerationReason::LengthChanged)
    }

    /// # Errors
    /// See [`PasswordForm::set_length`].
    pub fn set_include_digits(&mut self, enabled: bool) -> Result<bool, FormError> {
        self.update(self.config.with_digits(enabled), RegenerationReason::DigitsToggled)
    }

    /// # Errors
    /// See [`PasswordForm::set_length`].
    pub fn set_include_symbols(&mut self, enabled: bool) -> Result<bool, FormError> {
        self.update(self.config.with_symbols(enabled), RegenerationReason::SymbolsToggled)
    }

    /// # Errors
    /// See [`PasswordForm::set_length`].
    pub fn toggle_digits(&mut self) -> Result<bool, FormError> {
        self.set_include_digits(!self.config.include_digits())
    }

    /// # Errors
    /// See [`PasswordForm::set_length`].
    pub fn toggle_symbols(&mut self) -> Result<bool, FormError> {
        self.set_include_symbols(!self.config.include_symbols())
    }

    /// Replaces the whole config, regenerating only if it differs.
    ///
    /// # Errors
    /// See [`PasswordForm::set_length`].
    pub fn apply(&mut self, config: GeneratorConfig) -> Result<bool, FormError> {
        self.update(config, RegenerationReason::ConfigReplaced)
    }

    /// Regenerates unconditionally.
    ///
    /// # Errors
    /// See [`PasswordForm::set_length`].
    pub fn regenerate(&mut self) -> Result<(), FormError> {
        self.refresh(RegenerationReason::Requested)
    }

    /// See [`split_highlight`].
    #[must_use]
    pub fn highlight(&self) -> (&str, &str) {
        split_highlight(self.password.as_str())
    }

    /// Copies the current password. See [`copy_to_clipboard`].
    pub fn copy(&self, clipboard: &mut dyn Clipboard, toaster: &Toaster) -> CopyOutcome {
        copy_to_clipboard(&self.password, clipboard, toaster)
    }

    fn update(
        &mut self,
        config: GeneratorConfig,
        reason: RegenerationReason,
    ) -> Result<bool, FormError> {
        if config == self.config {
            trace!(?reason, "Config unchanged, keeping password");
            return Ok(false);
        }
        self.config = config;
        self.refresh(reason)?;
        Ok(true)
    }

    fn refresh(&mut self, reason: RegenerationReason) -> Result<(), FormError> {
        self.password = self.generator.generate(&self.config);
        self.revision += 1;
        self.reason = reason;
        debug!(
            revision = self.revision,
            ?reason,
            length = self.config.length(),
            digits = self.config.include_digits(),
            symbols = self.config.include_symbols(),
            "Password regenerated"
        );
        self.publish()
    }

    fn publish(&self) -> Result<(), FormError> {
        self.bus.publish_watch(self.snapshot()).context("Failed to publish form snapshot")
    }
}
