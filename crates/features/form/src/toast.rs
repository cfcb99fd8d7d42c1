use crate::error::NotifyError;
use parking_lot::Mutex;
use pgen_domain::config::NotificationConfig;
use pgen_event_bus::EventBus;
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::{debug, trace, warn};

/// A visible, self-dismissing notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    id: u64,
    message: String,
    duration: Duration,
}

impl Toast {
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DismissReason {
    /// The hide timer fired.
    Expired,
    /// A newer toast took its place.
    Replaced,
    /// [`Toaster::dismiss`] was called.
    Manual,
}

/// Toast lifecycle, published as broadcast events on the [`EventBus`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToastEvent {
    Shown(Toast),
    Dismissed { id: u64, reason: DismissReason },
}

#[derive(Debug, Default)]
struct ToastState {
    active: Option<Toast>,
    timer: Option<JoinHandle<()>>,
    next_id: u64,
}

#[derive(Debug)]
struct ToasterInner {
    bus: EventBus,
    message: String,
    duration: Duration,
    state: Mutex<ToastState>,
}

impl ToasterInner {
    fn emit(&self, event: ToastEvent) -> Result<usize, NotifyError> {
        Ok(self.bus.publish(event)?)
    }

    fn expire(&self, id: u64) {
        {
            let mut state = self.state.lock();
            if state.active.as_ref().map(Toast::id) != Some(id) {
                trace!(id, "Stale hide timer ignored");
                return;
            }
            state.active = None;
            state.timer = None;
        }

        debug!(id, "Toast expired");
        if let Err(e) = self.emit(ToastEvent::Dismissed { id, reason: DismissReason::Expired }) {
            warn!(id, error = %e, "Failed to publish toast expiry");
        }
    }
}

impl Drop for ToasterInner {
    fn drop(&mut self) {
        if let Some(timer) = self.state.get_mut().timer.take() {
            timer.abort();
        }
    }
}

/// Shows one toast at a time and hides it after a fixed duration.
///
/// Clones share the same visible toast. Showing a toast needs a Tokio runtime for
/// the hide timer.
#[derive(Debug, Clone)]
pub struct Toaster {
    inner: Arc<ToasterInner>,
}

impl Toaster {
    /// Creates a toaster whose default message and duration come from `config`.
    #[must_use]
    pub fn new(bus: EventBus, config: &NotificationConfig) -> Self {
        Self {
            inner: Arc::new(ToasterInner {
                bus,
                message: config.message.clone(),
                duration: config.duration(),
                state: Mutex::new(ToastState::default()),
            }),
        }
    }

    /// Receives every [`ToastEvent`] published after this call.
    ///
    /// # Errors
    /// Returns [`NotifyError::Bus`] if `ToastEvent` is registered with another channel kind.
    pub fn subscribe(&self) -> Result<broadcast::Receiver<Arc<ToastEvent>>, NotifyError> {
        Ok(self.inner.bus.subscribe::<ToastEvent>()?)
    }

    /// Shows the configured default message.
    ///
    /// # Errors
    /// See [`Toaster::show`].
    pub fn notify(&self) -> Result<Toast, NotifyError> {
        self.show(self.inner.message.clone())
    }

    /// Shows `message`, replacing any visible toast and cancelling its hide timer.
    ///
    /// Once the toast is visible it stays so; lifecycle events that fail to publish
    /// are logged, not returned.
    ///
    /// # Errors
    /// Returns [`NotifyError::NoRuntime`] outside a Tokio runtime.
    pub fn show(&self, message: impl Into<String>) -> Result<Toast, NotifyError> {
        let handle = Handle::try_current().map_err(|e| NotifyError::NoRuntime {
            message: e.to_string().into(),
            context: Some("Toast hide timer".into()),
        })?;

        let (toast, replaced) = {
            let mut state = self.inner.state.lock();
            state.next_id = state.next_id.wrapping_add(1);

            let toast =
                Toast { id: state.next_id, message: message.into(), duration: self.inner.duration };
            let replaced = state.active.replace(toast.clone()).map(|previous| previous.id);

            if let Some(timer) = state.timer.take() {
                timer.abort();
            }

            let (id, duration) = (toast.id, toast.duration);
            let inner: Weak<ToasterInner> = Arc::downgrade(&self.inner);
            state.timer = Some(handle.spawn(async move {
                tokio::time::sleep(duration).await;
                if let Some(inner) = inner.upgrade() {
                    inner.expire(id);
                }
            }));

            (toast, replaced)
        };

        if let Some(id) = replaced {
            trace!(id, "Toast replaced");
            if let Err(e) =
                self.inner.emit(ToastEvent::Dismissed { id, reason: DismissReason::Replaced })
            {
                warn!(id, error = %e, "Failed to publish toast replacement");
            }
        }
        if let Err(e) = self.inner.emit(ToastEvent::Shown(toast.clone())) {
            warn!(id = toast.id, error = %e, "Failed to publish toast");
        }
        debug!(id = toast.id, message = toast.message(), duration = ?toast.duration, "Toast shown");

        Ok(toast)
    }

    /// Hides the visible toast now and cancels its timer.
    pub fn dismiss(&self) -> Option<Toast> {
        let toast = {
            let mut state = self.inner.state.lock();
            if let Some(timer) = state.timer.take() {
                timer.abort();
            }
            state.active.take()
        }?;

        debug!(id = toast.id, "Toast dismissed");
        if let Err(e) =
            self.inner.emit(ToastEvent::Dismissed { id: toast.id, reason: DismissReason::Manual })
        {
            warn!(id = toast.id, error = %e, "Failed to publish toast dismissal");
        }
        Some(toast)
    }

    /// The visible toast, if any.
    #[must_use]
    pub fn active(&self) -> Option<Toast> {
        self.inner.state.lock().active.clone()
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.inner.duration
    }
}
