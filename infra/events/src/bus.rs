use crate::error::EventBusError;
use fxhash::FxHashMap;
use parking_lot::RwLock;
use std::any::{Any, TypeId, type_name};
use std::sync::Arc;
use tokio::sync::{broadcast, watch};
use tracing::{trace, warn};

/// Default broadcast buffer. UI events are sparse, so a small buffer is plenty.
const DEFAULT_CAPACITY: usize = 64;
const MIN_CAPACITY: usize = 1;

/// Supported channel kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    /// Broadcast (fan-out) semantics.
    Broadcast { capacity: usize },
    /// Watch (latest-value) semantics.
    Watch,
}

/// Marker trait for types that can be sent across the [`EventBus`].
///
/// Any type that is `Send + Sync + 'static` automatically implements this trait.
pub trait Event: Any + Send + Sync + 'static {}
impl<T: Any + Send + Sync + 'static> Event for T {}

#[derive(Debug)]
struct ChannelState {
    kind: ChannelKind,
    sender: Box<dyn Any + Send + Sync>,
}

impl ChannelState {
    fn broadcast<T: Event>(
        &self,
        requested: Option<usize>,
    ) -> Result<broadcast::Sender<Arc<T>>, EventBusError> {
        let ChannelKind::Broadcast { capacity } = self.kind else {
            return Err(kind_mismatch::<T>(
                ChannelKind::Broadcast { capacity: requested.unwrap_or(DEFAULT_CAPACITY) },
                self.kind,
            ));
        };

        if let Some(requested) = requested.filter(|&r| r != capacity) {
            warn!(
                event = type_name::<T>(),
                existing_capacity = capacity,
                requested_capacity = requested,
                "Broadcast channel already initialized with a different capacity"
            );
        }

        self.downcast::<broadcast::Sender<Arc<T>>>().cloned()
    }

    fn watch<T: Event>(&self) -> Result<watch::Sender<Arc<T>>, EventBusError> {
        if self.kind != ChannelKind::Watch {
            return Err(kind_mismatch::<T>(ChannelKind::Watch, self.kind));
        }
        self.downcast::<watch::Sender<Arc<T>>>().cloned()
    }

    fn downcast<S: 'static>(&self) -> Result<&S, EventBusError> {
        self.sender.downcast_ref::<S>().ok_or_else(|| EventBusError::TypeMismatch {
            message: type_name::<S>().into(),
            context: Some("Unexpected event type".into()),
        })
    }
}

/// A thread-safe, type-indexed event bus.
///
/// Cloning is cheap: clones share the same channel registry.
#[derive(Debug, Clone, Default)]
pub struct EventBus {
    channels: Arc<RwLock<FxHashMap<TypeId, ChannelState>>>,
}

impl EventBus {
    /// Creates a new, empty `EventBus`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribes to broadcast events of type `T` with the default capacity.
    ///
    /// # Errors
    /// Returns [`EventBusError::ChannelKindMismatch`] if `T` is already registered as a
    /// watch channel.
    pub fn subscribe<T: Event>(&self) -> Result<broadcast::Receiver<Arc<T>>, EventBusError> {
        self.subscribe_with_capacity::<T>(DEFAULT_CAPACITY)
    }

    /// Subscribes to broadcast events of type `T` with a specific buffer capacity.
    ///
    /// The capacity only takes effect if this call creates the channel.
    ///
    /// # Errors
    /// Returns [`EventBusError::InvalidCapacity`] if `capacity` is zero, or
    /// [`EventBusError::ChannelKindMismatch`] if `T` is registered as a watch channel.
    pub fn subscribe_with_capacity<T: Event>(
        &self,
        capacity: usize,
    ) -> Result<broadcast::Receiver<Arc<T>>, EventBusError> {
        let capacity = validate_capacity(capacity)?;
        Ok(self.broadcast_sender::<T>(capacity, Some(capacity))?.subscribe())
    }

    /// Publishes an event to every current broadcast subscriber of `T`.
    ///
    /// Returns the number of subscribers that received the event. Publishing without
    /// subscribers is not an error; the event is dropped.
    ///
    /// # Errors
    /// Returns [`EventBusError::ChannelKindMismatch`] if `T` is registered as a watch channel.
    pub fn publish<T: Event>(&self, event: T) -> Result<usize, EventBusError> {
        self.publish_arc(Arc::new(event))
    }

    /// Publishes a shared event instance without re-wrapping.
    ///
    /// # Errors
    /// See [`EventBus::publish`].
    pub fn publish_arc<T: Event>(&self, event: Arc<T>) -> Result<usize, EventBusError> {
        let sender = self.broadcast_sender::<T>(DEFAULT_CAPACITY, None)?;
        let count = sender.send(event).unwrap_or_else(|_| {
            trace!(event = type_name::<T>(), "Event dropped: no active subscribers");
            0
        });
        if count > 0 {
            trace!(event = type_name::<T>(), count, "Event dispatched");
        }
        Ok(count)
    }

    /// Subscribes to the latest value of `T`.
    ///
    /// If the channel does not exist yet, it is created holding `initial`. Otherwise
    /// `initial` is discarded and the receiver starts at the current value, which
    /// counts as already seen.
    ///
    /// # Errors
    /// Returns [`EventBusError::ChannelKindMismatch`] if `T` is registered as a
    /// broadcast channel.
    pub fn subscribe_watch<T: Event>(
        &self,
        initial: T,
    ) -> Result<watch::Receiver<Arc<T>>, EventBusError> {
        Ok(self.watch_sender::<T>(|| Arc::new(initial))?.subscribe())
    }

    /// Replaces the latest value of `T` and wakes every watcher.
    ///
    /// # Errors
    /// Returns [`EventBusError::ChannelKindMismatch`] if `T` is registered as a
    /// broadcast channel.
    pub fn publish_watch<T: Event>(&self, value: T) -> Result<(), EventBusError> {
        self.publish_watch_arc(Arc::new(value))
    }

    /// Replaces the latest value of `T` without re-wrapping.
    ///
    /// # Errors
    /// See [`EventBus::publish_watch`].
    pub fn publish_watch_arc<T: Event>(&self, value: Arc<T>) -> Result<(), EventBusError> {
        let sender = self.watch_sender::<T>(|| Arc::clone(&value))?;
        sender.send_replace(value);
        trace!(event = type_name::<T>(), "Watch value replaced");
        Ok(())
    }

    /// Returns the latest watched value of `T`, if a watch channel exists.
    #[must_use]
    pub fn latest<T: Event>(&self) -> Option<Arc<T>> {
        let channels = self.channels.read();
        let state = channels.get(&TypeId::of::<T>())?;
        state.watch::<T>().ok().map(|tx| Arc::clone(&tx.borrow()))
    }

    /// Gracefully shuts down the bus by dropping all underlying channels.
    ///
    /// Receivers observe closure once every clone of a sender is gone.
    /// Returns the number of event channels that were closed.
    #[must_use]
    pub fn shutdown(&self) -> usize {
        let mut channels = self.channels.write();
        let count = channels.len();
        channels.clear();
        count
    }

    fn broadcast_sender<T: Event>(
        &self,
        capacity: usize,
        requested: Option<usize>,
    ) -> Result<broadcast::Sender<Arc<T>>, EventBusError> {
        let id = TypeId::of::<T>();

        if let Some(state) = self.channels.read().get(&id) {
            return state.broadcast::<T>(requested);
        }

        let mut channels = self.channels.write();
        let state = channels.entry(id).or_insert_with(|| {
            trace!(event = type_name::<T>(), capacity, "Initializing new broadcast channel");
            let (tx, _) = broadcast::channel::<Arc<T>>(capacity);
            ChannelState { kind: ChannelKind::Broadcast { capacity }, sender: Box::new(tx) }
        });
        state.broadcast::<T>(requested)
    }

    fn watch_sender<T: Event>(
        &self,
        initial: impl FnOnce() -> Arc<T>,
    ) -> Result<watch::Sender<Arc<T>>, EventBusError> {
        let id = TypeId::of::<T>();

        if let Some(state) = self.channels.read().get(&id) {
            return state.watch::<T>();
        }

        let mut channels = self.channels.write();
        let state = channels.entry(id).or_insert_with(|| {
            trace!(event = type_name::<T>(), "Initializing new watch channel");
            let (tx, _) = watch::channel::<Arc<T>>(initial());
            ChannelState { kind: ChannelKind::Watch, sender: Box::new(tx) }
        });
        state.watch::<T>()
    }
}

fn kind_mismatch<T: Event>(expected: ChannelKind, found: ChannelKind) -> EventBusError {
    EventBusError::ChannelKindMismatch {
        message: format!("Expected {expected:?} but found {found:?} for {}", type_name::<T>())
            .into(),
        context: None,
    }
}

fn validate_capacity(capacity: usize) -> Result<usize, EventBusError> {
    if capacity < MIN_CAPACITY {
        return Err(EventBusError::InvalidCapacity {
            message: format!("capacity must be >= {MIN_CAPACITY}").into(),
            context: None,
        });
    }
    Ok(capacity)
}
