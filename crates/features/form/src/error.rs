use pgen_event_bus::EventBusError;
use std::borrow::Cow;

/// Clipboard write failures. Never fatal to the form.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    /// No clipboard backend is compiled in or reachable.
    #[error("Clipboard unavailable{}: {message}", format_context(.context))]
    Unavailable { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The backend rejected the write.
    #[error("Clipboard write failed{}: {message}", format_context(.context))]
    Write { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Toast scheduling and delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    /// `show` was called outside a Tokio runtime, so no hide timer can be scheduled.
    #[error("No async runtime{}: {message}", format_context(.context))]
    NoRuntime { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Toast event error{}: {source}", format_context(.context))]
    Bus { source: EventBusError, context: Option<Cow<'static, str>> },
}

/// A specialized [`FormError`] enum of this crate.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// Snapshot publication failed.
    #[error("Form event error{}: {source}", format_context(.context))]
    Bus { source: EventBusError, context: Option<Cow<'static, str>> },
}

/// Attaches a human-readable context to form failures.
pub trait FormErrorExt<T> {
    /// # Errors
    /// Returns the original error with the context attached.
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, FormError>;
}

impl<T> FormErrorExt<T> for Result<T, FormError> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            let FormError::Bus { context: c, .. } = &mut e;
            *c = Some(context.into());
            e
        })
    }
}

impl<T> FormErrorExt<T> for Result<T, EventBusError> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, FormError> {
        self.map_err(|source| FormError::Bus { source, context: Some(context.into()) })
    }
}

impl From<EventBusError> for FormError {
    fn from(source: EventBusError) -> Self {
        Self::Bus { source, context: None }
    }
}

impl From<EventBusError> for NotifyError {
    fn from(source: EventBusError) -> Self {
        Self::Bus { source, context: None }
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}
