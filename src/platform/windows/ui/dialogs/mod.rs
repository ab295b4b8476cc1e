//! Dialog windows for Windows.

mod error_dialog;

pub use error_dialog::*;
