//! Reactive password form.
//!
//! Wraps the generator in a small stateful form: every change to the length or
//! to a character-class flag regenerates the password, and observers learn about
//! it through a watch channel on the [`pgen_event_bus::EventBus`]. A copy action
//! writes the password to a [`Clipboard`] and confirms it with a [`Toast`] that
//! hides itself after a fixed duration.
//!
//! ## Example
//!
//! ```rust
//! use pgen_domain::config::NotificationConfig;
//! use pgen_event_bus::EventBus;
//! use pgen_form::{CopyOutcome, MemoryClipboard, PasswordForm, Toaster};
//! use pgen_generator::GeneratorConfig;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), pgen_form::FormError> {
//!     let bus = EventBus::new();
//!     let mut form = PasswordForm::new(bus.clone(), GeneratorConfig::default())?;
//!     let mut snapshots = form.subscribe()?;
//!
//!     form.toggle_digits()?;
//!     assert!(snapshots.has_changed().unwrap_or(false));
//!
//!     let mut clipboard = MemoryClipboard::new();
//!     let toaster = Toaster::new(bus, &NotificationConfig::default());
//!     let outcome = form.copy(&mut clipboard, &toaster);
//!
//!     assert!(matches!(outcome, CopyOutcome::Copied(_)));
//!     assert_eq!(clipboard.contents().as_deref(), Some(form.password().as_str()));
//!     Ok(())
//! }
//! ```

mod clipboard;
mod error;
mod form;
mod toast;

#[cfg(feature = "system-clipboard")]
pub use crate::clipboard::SystemClipboard;
pub use crate::clipboard::{Clipboard, MemoryClipboard, UnavailableClipboard, system_clipboard};
pub use crate::error::{ClipboardError, FormError, FormErrorExt, NotifyError};
pub use crate::form::{
    CopyOutcome, FormSnapshot, PasswordForm, RegenerationReason, copy_to_clipboard,
    split_highlight,
};
pub use crate::toast::{DismissReason, Toast, ToastEvent, Toaster};
