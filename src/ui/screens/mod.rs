//! The five resume screens.
//!
//! A screen is created every time its tab is entered and dropped when the
//! user leaves it. Its data, selection and animation clock go with it, so a
//! revisit fetches again and replays every entrance animation.

pub mod contact;
pub mod experience;
pub mod profile;
pub mod projects;
pub mod skills;

pub use contact::ContactScreen;
pub use experience::ExperienceScreen;
pub use profile::ProfileScreen;
pub use projects::ProjectsScreen;
pub use skills::SkillsScreen;

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent};

use crate::animation::MountClock;
use crate::constants::ANIMATION_HORIZON_MS;
use crate::logger::Logger;
use crate::ui::core::{Component, Motion, ScreenData, Tab};
use crate::view_state::{DetailOverlay, LoadState};

pub trait Screen: Component {
    fn tab(&self) -> Tab;

    /// Hand the screen the result of its fetch-on-mount.
    fn apply(&mut self, data: ScreenData);

    fn fail(&mut self, error: String);

    fn is_loading(&self) -> bool;

    fn error(&self) -> Option<&str>;

    /// Whether the screen holds a modal (detail overlay) that must see every key
    fn captures_input(&self) -> bool {
        false
    }
}

/// Create a fresh screen for `tab`, in its loading state.
pub fn mount(tab: Tab, motion: Motion, logger: Logger) -> Box<dyn Screen> {
    match tab {
        Tab::Profile => Box::new(ProfileScreen::new(motion, logger)),
        Tab::Experience => Box::new(ExperienceScreen::new(motion, logger)),
        Tab::Skills => Box::new(SkillsScreen::new(motion, logger)),
        Tab::Projects => Box::new(ProjectsScreen::new(motion, logger)),
        Tab::Contact => Box::new(ContactScreen::new(motion, logger)),
    }
}

/// Load state plus the clock that drives the entrance animations.
///
/// The clock restarts when the fetch settles, so content animates in when it
/// appears rather than when the empty screen was created.
#[derive(Debug)]
pub(crate) struct Mounted<T> {
    pub load: LoadState<T>,
    pub clock: MountClock,
    motion: Motion,
}

impl<T> Mounted<T> {
    pub fn new(motion: Motion) -> Self {
        Self {
            load: LoadState::Loading,
            clock: motion.clock(),
            motion,
        }
    }

    pub fn settle(&mut self, data: T) {
        self.load = LoadState::Ready(data);
        self.clock = self.motion.clock();
    }

    pub fn fail(&mut self, error: String) {
        self.load = LoadState::Failed(error);
        self.clock = self.motion.clock();
    }

    pub fn elapsed(&self) -> Duration {
        self.clock.elapsed()
    }

    /// Spinner while loading, entrance animations for a while after settling
    pub fn is_animating(&self) -> bool {
        if self.load.is_loading() {
            return self.motion.enabled;
        }
        self.clock.is_running(Duration::from_millis(ANIMATION_HORIZON_MS))
    }
}

/// Keys shared by every detail overlay: scrolling and the close gesture.
pub(crate) fn overlay_key(overlay: &mut DetailOverlay, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Enter | KeyCode::Char('x') => overlay.dismiss(),
        KeyCode::Down | KeyCode::Char('j') => overlay.scroll_down(),
        KeyCode::Up | KeyCode::Char('k') => overlay.scroll_up(),
        _ => {}
    }
}

/// Move a list cursor for j/k, arrows and Home/End. Returns whether it moved.
pub(crate) fn move_selection(selected: &mut usize, len: usize, key: KeyEvent) -> bool {
    if len == 0 {
        return false;
    }
    let next = match key.code {
        KeyCode::Down | KeyCode::Char('j') => (*selected + 1).min(len - 1),
        KeyCode::Up | KeyCode::Char('k') => selected.saturating_sub(1),
        KeyCode::Home => 0,
        KeyCode::End => len - 1,
        _ => return false,
    };
    let moved = next != *selected;
    *selected = next;
    moved
}

/// Log a payload that was routed to the wrong screen and drop it
pub(crate) fn mismatched(logger: &Logger, expected: Tab, data: &ScreenData) {
    logger.log(format!(
        "Screens: {} screen ignored data for {}",
        expected.title(),
        data.tab().title()
    ));
}
