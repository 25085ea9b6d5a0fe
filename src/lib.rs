//! UI for the Folio portfolio site.
pub mod app;
pub mod common;
pub mod components;
pub mod constants;
pub mod error;
pub mod hooks;
pub mod types;
pub mod widgets;

// Re-exports
pub use app::App;
pub use error::{Error, Result};
