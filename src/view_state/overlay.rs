//! Detail overlay controller.

use crate::entities::{Experience, Project};

/// The record a detail overlay is showing
#[derive(Debug, Clone, PartialEq)]
pub enum Detail {
    Experience(Experience),
    Project(Project),
}

impl Detail {
    pub fn title(&self) -> &str {
        match self {
            Detail::Experience(experience) => &experience.role,
            Detail::Project(project) => &project.title,
        }
    }
}

/// Holds at most one selected record; the overlay is visible iff one is held.
///
/// The close key and the back gesture both go through [`DetailOverlay::dismiss`].
#[derive(Debug, Clone, Default)]
pub struct DetailOverlay {
    selection: Option<Detail>,
    scroll: u16,
}

impl DetailOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `detail`, replacing whatever was shown before.
    pub fn select(&mut self, detail: Detail) {
        self.selection = Some(detail);
        self.scroll = 0;
    }

    pub fn dismiss(&mut self) {
        self.selection = None;
        self.scroll = 0;
    }

    pub fn is_visible(&self) -> bool {
        self.selection.is_some()
    }

    pub fn selection(&self) -> Option<&Detail> {
        self.selection.as_ref()
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn scroll_down(&mut self) {
        if self.is_visible() {
            self.scroll = self.scroll.saturating_add(1);
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    /// Keep the scroll offset within content that can scroll `max` rows.
    pub fn clamp_scroll(&mut self, max: u16) -> u16 {
        self.scroll = self.scroll.min(max);
        self.scroll
    }
}
