//! Core UI functionality for the Vitae application.
//!
//! This module contains the fundamental building blocks for the user interface,
//! including event handling, component abstractions, shared render context and
//! background loading.
//!
//! # Module Components
//!
//! - [`actions`] - Action definitions, tabs and load results
//! - [`component`] - Base component trait and rendering abstractions
//! - [`context`] - Theme, icons and animation settings shared while rendering
//! - [`event_handler`] - Keyboard input and frame-rate ticks
//! - [`task_manager`] - Fetch-on-mount and outbound link tasks
//!
//! # Architecture
//!
//! 1. **Components** implement the [`Component`] trait for consistent rendering
//! 2. **Actions** define state transitions and user interactions
//! 3. **Context** carries the theme and icons, built once at startup
//! 4. **Events** are processed through the [`EventHandler`] system
//! 5. **Loads** run on tokio tasks via the [`TaskManager`] and report back
//!    as actions tagged with the mount id of the screen that asked for them

pub mod actions;
pub mod component;
pub mod context;
pub mod event_handler;
pub mod task_manager;

pub use actions::{Action, DialogType, HomeData, MountId, ScreenData, Tab};
pub use component::Component;
pub use context::{AppContext, Motion};
pub use event_handler::{EventHandler, EventType};
pub use task_manager::{load_screen, TaskId, TaskManager};
