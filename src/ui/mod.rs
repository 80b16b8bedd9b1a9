//! UI module for Vitae
//!
//! This module handles the tab bar, the five resume screens, dialogs, and the
//! render loop that drives them.

pub mod app_component;
pub mod components;
pub mod core;
pub mod layout;
pub mod renderer;
pub mod screens;

pub use app_component::AppComponent;
pub use layout::LayoutManager;
pub use renderer::run_app;
