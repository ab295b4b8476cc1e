//! Process-wide event bus.
//!
//! `init_event_bus()` runs once at startup. After that any code can
//! `publish()`, and the panel's window procedure calls `drain_events()`.

use std::sync::{Mutex, OnceLock, PoisonError};

use tracing::warn;

use super::bus::{EventBus, EventPublisher};
use super::types::AppEvent;

static PUBLISHER: OnceLock<EventPublisher> = OnceLock::new();

static BUS: OnceLock<Mutex<EventBus>> = OnceLock::new();

/// Creates the global bus. Returns false if it already exists; the
/// existing bus is kept.
pub fn init_event_bus() -> bool {
    let bus = EventBus::new();
    if PUBLISHER.set(bus.publisher()).is_err() {
        return false;
    }
    BUS.set(Mutex::new(bus)).is_ok()
}

/// A publisher for the global bus, once it exists.
pub fn publisher() -> Option<EventPublisher> {
    PUBLISHER.get().cloned()
}

/// Queues `event` on the global bus. Dropped with a warning before
/// `init_event_bus()`.
pub fn publish(event: AppEvent) {
    match PUBLISHER.get() {
        Some(publisher) => publisher.publish(event),
        None => warn!("Event bus not initialized, dropping {:?}", event),
    }
}

/// Takes every pending event off the global bus.
pub fn drain_events() -> Vec<AppEvent> {
    match BUS.get() {
        Some(bus) => bus.lock().unwrap_or_else(PoisonError::into_inner).drain(),
        None => Vec::new(),
    }
}
