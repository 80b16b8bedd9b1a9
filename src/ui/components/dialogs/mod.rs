//! Modal dialogs drawn over the active screen

pub mod common;
pub mod detail_dialog;
pub mod scroll_behavior;
pub mod system_dialogs;

pub use detail_dialog::render_detail_dialog;
pub use scroll_behavior::ScrollState;
