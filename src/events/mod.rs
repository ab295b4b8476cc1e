//! Application events.
//!
//! The hotkey, the tray menu and the panel's controls only publish
//! `AppEvent`s; the Windows dispatcher drains the bus from the message loop
//! and runs the matching action.
//!
//! ```text
//!  hotkey ─┐
//!  tray ───┼─ publish ─▶ EventBus ─ drain ─▶ dispatcher ─▶ actions
//!  panel ──┘
//! ```

pub mod bus;
pub mod global;
pub mod types;

pub use bus::{EventBus, EventPublisher};
pub use global::{drain_events, init_event_bus, publish, publisher};
pub use types::AppEvent;
