use crate::error::ClipboardError;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::trace;

/// A destination for copied text.
pub trait Clipboard {
    /// Replaces the clipboard contents with `text`.
    ///
    /// # Errors
    /// Returns [`ClipboardError`] when the backend cannot take the write.
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;

    /// Short backend name for logs.
    fn backend(&self) -> &'static str;
}

/// In-process clipboard. Clones share the same contents.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Arc<Mutex<Option<String>>>,
}

impl MemoryClipboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The last text written, if any.
    #[must_use]
    pub fn contents(&self) -> Option<String> {
        self.contents.lock().clone()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        *self.contents.lock() = Some(text.to_owned());
        trace!(chars = text.chars().count(), "Memory clipboard written");
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

/// Stand-in used when no system clipboard is available. Every write fails.
#[derive(Debug, Clone, Default)]
pub struct UnavailableClipboard {
    reason: Option<String>,
}

impl UnavailableClipboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn because(reason: impl Into<String>) -> Self {
        Self { reason: Some(reason.into()) }
    }
}

impl Clipboard for UnavailableClipboard {
    fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable {
            message: self
                .reason
                .clone()
                .map_or("no system clipboard compiled in".into(), Into::into),
            context: None,
        })
    }

    fn backend(&self) -> &'static str {
        "unavailable"
    }
}

#[cfg(feature = "system-clipboard")]
pub use system::SystemClipboard;

#[cfg(feature = "system-clipboard")]
mod system {
    use super::Clipboard;
    use crate::error::ClipboardError;
    use clipboard::{ClipboardContext, ClipboardProvider};
    use std::fmt;

    /// The operating system clipboard.
    pub struct SystemClipboard {
        context: ClipboardContext,
    }

    impl SystemClipboard {
        /// Connects to the OS clipboard.
        ///
        /// # Errors
        /// Returns [`ClipboardError::Unavailable`] when no clipboard can be reached
        /// (e.g. no display server).
        pub fn new() -> Result<Self, ClipboardError> {
            let context: ClipboardContext =
                ClipboardProvider::new().map_err(|e| ClipboardError::Unavailable {
                    message: e.to_string().into(),
                    context: Some("Failed to open system clipboard".into()),
                })?;
            Ok(Self { context })
        }
    }

    impl Clipboard for SystemClipboard {
        fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            self.context.set_contents(text.to_owned()).map_err(|e| ClipboardError::Write {
                message: e.to_string().into(),
                context: None,
            })
        }

        fn backend(&self) -> &'static str {
            "system"
        }
    }

    impl fmt::Debug for SystemClipboard {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.debug_struct("SystemClipboard").finish_non_exhaustive()
        }
    }
}

/// Returns the best clipboard this build can offer: the OS clipboard when it is
/// reachable, otherwise an [`UnavailableClipboard`] carrying the reason.
#[cfg(feature = "system-clipboard")]
#[must_use]
pub fn system_clipboard() -> Box<dyn Clipboard> {
    match SystemClipboard::new() {
        Ok(clipboard) => Box::new(clipboard),
        Err(e) => {
            tracing::warn!(error = %e, "Falling back to unavailable clipboard");
            Box::new(UnavailableClipboard::because(e.to_string()))
        },
    }
}

/// Returns the best clipboard this build can offer.
///
/// Built without the `system-clipboard` feature, so writes fail with
/// [`ClipboardError::Unavailable`].
#[cfg(not(feature = "system-clipboard"))]
#[must_use]
pub fn system_clipboard() -> Box<dyn Clipboard> {
    Box::new(UnavailableClipboard::new())
}
