//! Derived, per-mount view state.
//!
//! Nothing here is fetched; it is computed from the entities a screen loaded
//! and dropped with the screen.

pub mod category;
pub mod load;
pub mod overlay;
pub mod projects;

pub use category::{CategoryProjection, SkillStats};
pub use load::LoadState;
pub use overlay::{Detail, DetailOverlay};
pub use projects::partition_projects;
