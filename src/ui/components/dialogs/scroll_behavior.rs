use crossterm::event::{KeyCode, KeyEvent};
use ratatui::widgets::ScrollbarState;

/// Rows moved by PageUp/PageDown
const PAGE: usize = 10;

/// Scroll offset of a text panel plus the scrollbar that mirrors it.
///
/// The offset may run past the end of the content; [`ScrollState::clamp`]
/// pulls it back once the renderer knows how much content there is.
#[derive(Debug, Default, Clone)]
pub struct ScrollState {
    offset: usize,
    scrollbar: ScrollbarState,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn scroll_up(&mut self) {
        self.set(self.offset.saturating_sub(1));
    }

    pub fn scroll_down(&mut self) {
        self.set(self.offset.saturating_add(1));
    }

    pub fn page_up(&mut self) {
        self.set(self.offset.saturating_sub(PAGE));
    }

    pub fn page_down(&mut self) {
        self.set(self.offset.saturating_add(PAGE));
    }

    pub fn scroll_to_top(&mut self) {
        self.set(0);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.set(usize::MAX);
    }

    fn set(&mut self, offset: usize) {
        self.offset = offset;
        self.scrollbar = self.scrollbar.position(offset);
    }

    /// Apply the shared scrolling keys (j/k, arrows, paging, Home/End).
    ///
    /// Returns whether the key was a scrolling key.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll_up(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_down(),
            KeyCode::PageUp => self.page_up(),
            KeyCode::PageDown => self.page_down(),
            KeyCode::Home => self.scroll_to_top(),
            KeyCode::End => self.scroll_to_bottom(),
            _ => return false,
        }
        true
    }

    /// Clamp to `total` lines shown `visible` at a time and return the offset to draw from.
    pub fn clamp(&mut self, total: usize, visible: usize) -> usize {
        let max_scroll = total.saturating_sub(visible);
        self.offset = self.offset.min(max_scroll);
        self.scrollbar = self
            .scrollbar
            .content_length(total)
            .viewport_content_length(visible)
            .position(self.offset);
        self.offset
    }

    pub fn scrollbar_mut(&mut self) -> &mut ScrollbarState {
        &mut self.scrollbar
    }
}
