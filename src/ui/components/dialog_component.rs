//! Modal dialog component for messages, help and logs.
//!
//! Only one dialog is shown at a time. While it is visible it receives every
//! key before the active screen does.

use crate::logger::Logger;
use crate::ui::core::{
    actions::{Action, DialogType},
    AppContext, Component,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, Frame};

use crate::ui::components::dialogs::{system_dialogs, ScrollState};

/// Modal dialog component.
///
/// # Dialog Types
/// - **Error** - a failure the user should know about
/// - **Notice** - e.g. a link the platform could not open
/// - **Help** - key bindings
/// - **Logs** - the in-memory log buffer
pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    scroll: ScrollState,
    logger: Logger,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new(Logger::default())
    }
}

impl DialogComponent {
    pub fn new(logger: Logger) -> Self {
        Self {
            dialog_type: None,
            scroll: ScrollState::new(),
            logger,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    fn clear_dialog(&mut self) {
        self.dialog_type = None;
        self.scroll.reset();
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let Some(dialog_type) = &self.dialog_type else {
            return Action::None;
        };

        if self.scroll.handle_key(key) {
            return Action::None;
        }

        match dialog_type {
            // Any other key dismisses a message
            DialogType::Error(_) | DialogType::Notice(_) => Action::HideDialog,
            DialogType::Help => match key.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('h') => Action::HideDialog,
                _ => Action::None,
            },
            DialogType::Logs => match key.code {
                KeyCode::Esc | KeyCode::Char('G') | KeyCode::Char('q') => Action::HideDialog,
                _ => Action::None,
            },
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.scroll.reset();
                self.dialog_type = Some(dialog_type);
                Action::None
            }
            Action::HideDialog => {
                self.clear_dialog();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, ctx: &AppContext) {
        let Some(dialog_type) = self.dialog_type.clone() else {
            return;
        };
        match dialog_type {
            DialogType::Error(message) => {
                system_dialogs::render_error_dialog(f, rect, ctx, &message, &mut self.scroll);
            }
            DialogType::Notice(message) => {
                system_dialogs::render_notice_dialog(f, rect, ctx, &message, &mut self.scroll);
            }
            DialogType::Help => system_dialogs::render_help_dialog(f, rect, ctx, &mut self.scroll),
            DialogType::Logs => system_dialogs::render_logs_dialog(f, rect, ctx, &self.logger, &mut self.scroll),
        }
    }
}
