//! Configuration storage for Windows.
//!
//! Keeps the settings document in memory on the UI thread and writes it
//! through `ConfigStore` on every change.

mod config;

pub use config::*;
