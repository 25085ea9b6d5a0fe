//! UI components.
pub mod icon_link;
pub mod motion;

// Re-exports
pub use icon_link::IconLink;
pub use motion::Motion;
