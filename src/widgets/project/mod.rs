//! Project related UI widgets.
pub mod project_card;
pub mod project_deck;

// Re-exports
pub use project_card::ProjectCard;
pub use project_deck::ProjectDeck;
