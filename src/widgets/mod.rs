//! UI widgets.
pub mod project;
pub mod tags;

// Re-exports
pub use project::{ProjectCard, ProjectDeck};
pub use tags::Tags;
