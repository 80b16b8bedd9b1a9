//! Reusable UI components

pub mod cards;

// Component architecture
pub mod dialog_component;
pub mod dialogs;
pub mod status_bar;
pub mod tab_bar;

// Component exports
pub use dialog_component::DialogComponent;
pub use status_bar::{StatusBar, StatusInfo};
pub use tab_bar::TabBar;
