//! Utility modules for the Vitae application.
//!
//! - [`color`] - Hex parsing and color blending used by the reveal animations
//! - [`tags`] - Comma-delimited technology tag parsing

pub mod color;
pub mod tags;
