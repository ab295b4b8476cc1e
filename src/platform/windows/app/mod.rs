//! Windows application state and the actions behind each event.

pub mod actions;
pub mod state;

pub use state::{panel_handles, PanelHandles, WindowsRuntimeState, STATE};
