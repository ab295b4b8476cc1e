//! Event handling for Windows.

pub mod dispatcher;

pub use dispatcher::{dispatch_events, post_event, WM_DISPATCH_EVENTS};
