//! Channel-backed queue of `AppEvent`s.

use std::sync::mpsc::{self, Receiver, Sender};

use super::types::AppEvent;

/// Owns both ends of the channel; hand out `EventPublisher`s to producers
/// and drain on the UI thread.
///
/// ```
/// use desktop_mirror::events::{AppEvent, EventBus};
///
/// let bus = EventBus::new();
/// bus.publisher().publish(AppEvent::TogglePanel);
/// assert_eq!(bus.drain(), vec![AppEvent::TogglePanel]);
/// ```
pub struct EventBus {
    sender: Sender<AppEvent>,
    receiver: Receiver<AppEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self { sender, receiver }
    }

    pub fn publisher(&self) -> EventPublisher {
        EventPublisher {
            sender: self.sender.clone(),
        }
    }

    /// Everything queued so far, oldest first. Never blocks; the bus holds
    /// a sender itself so the channel cannot disconnect under it.
    pub fn drain(&self) -> Vec<AppEvent> {
        self.receiver.try_iter().collect()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Producer handle. Cheap to clone and usable from any thread.
#[derive(Clone)]
pub struct EventPublisher {
    sender: Sender<AppEvent>,
}

impl EventPublisher {
    /// Queues `event`. A dropped bus means shutdown, so the event is lost.
    pub fn publish(&self, event: AppEvent) {
        let _ = self.sender.send(event);
    }
}
