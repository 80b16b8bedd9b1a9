use std::time::Duration;

use crate::{
    animation::{Direction, MountClock, RevealSpec},
    config::{AnimationConfig, Config},
    icons::IconService,
    theme::Theme,
};

/// Animation settings shared by every screen
#[derive(Debug, Clone, Copy)]
pub struct Motion {
    pub enabled: bool,
    pub duration: Duration,
    pub distance: f32,
}

impl Default for Motion {
    fn default() -> Self {
        Self::from_config(&AnimationConfig::default())
    }
}

impl Motion {
    pub fn from_config(config: &AnimationConfig) -> Self {
        Self {
            enabled: config.enabled,
            duration: Duration::from_millis(config.duration_ms),
            distance: config.offset_units,
        }
    }

    /// A new clock for a screen that is being mounted now
    pub fn clock(&self) -> MountClock {
        MountClock::start(self.enabled)
    }

    /// Section reveal with the configured duration and distance
    pub fn reveal(&self, delay_ms: u64) -> RevealSpec {
        self.reveal_from(Direction::Up, delay_ms)
    }

    pub fn reveal_from(&self, direction: Direction, delay_ms: u64) -> RevealSpec {
        RevealSpec {
            duration: self.duration,
            distance: self.distance,
            ..RevealSpec::new(direction)
        }
        .delay_ms(delay_ms)
    }
}

/// Read-only services handed to every component while rendering
pub struct AppContext {
    pub theme: Theme,
    pub icons: IconService,
    pub motion: Motion,
}

impl AppContext {
    pub fn new(config: &Config) -> Self {
        Self {
            theme: Theme::dark(),
            icons: IconService::new(config.display.icon_theme),
            motion: Motion::from_config(&config.animation),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
