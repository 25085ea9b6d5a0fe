//! Custom hooks.
pub mod dom_loaded;
pub mod in_view;

// Re-exports
pub use dom_loaded::use_dom_loaded;
pub use in_view::use_in_view;
