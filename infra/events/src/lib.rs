//! # Event Bus
//!
//! A small, type-safe event bus used to connect the password form with whatever
//! renders it.
//!
//! ## Overview
//!
//! Provides a shared `EventBus` with two channel kinds:
//!
//! * **Broadcast**: fan-out of discrete events (e.g. a toast was shown).
//! * **Watch**: the latest value of some state (e.g. the current form snapshot).
//!   Observers are woken on change and always read the newest value.
//!
//! Events are identified by their Rust type. Channels are created lazily on first
//! use and live until [`EventBus::shutdown`] or until the last bus handle is dropped.
//!
//! # Example
//!
//! ```rust
//! use pgen_event_bus::{EventBus, EventReceiverExt, EventBusError};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Regenerated { revision: u64 }
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), EventBusError> {
//!     let bus = EventBus::new();
//!
//!     let mut rx = bus.subscribe::<Regenerated>()?;
//!     bus.publish(Regenerated { revision: 1 })?;
//!
//!     let event = rx.recv_event().await.expect("bus is open");
//!     assert_eq!(event.revision, 1);
//!     Ok(())
//! }
//! ```

mod bus;
mod error;
mod receiver;

pub use bus::{ChannelKind, Event, EventBus};
pub use error::EventBusError;
pub use receiver::EventReceiverExt;
