//! Side effects that leave the terminal: opening links and haptic feedback.

pub mod contact;
pub mod haptics;
pub mod links;

pub use contact::{contact_actions, ContactAction};
pub use haptics::Haptics;
pub use links::{LinkOpener, OpenError, SystemLinkOpener};
