//! Common types.
pub mod motion;
pub mod project;
pub mod to_key;

// Re-exports
pub use motion::{MotionConfig, Variants};
pub use project::Project;
pub use to_key::ToKey;
