//! Staggered list choreography.
//!
//! Items keep their order; only the animation parameters are derived from
//! their position: `delay(i) = base + i * step`.

use std::time::Duration;

use super::{Direction, Grow, RevealSpec};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StaggerMode {
    /// Same direction for every item
    Uniform(Direction),
    /// Even indices slide in from the left, odd ones from the right
    Alternating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stagger {
    base: Duration,
    step: Duration,
    mode: StaggerMode,
}

impl Stagger {
    /// A uniform upward stagger. `step` is raised to 1 ms so delays strictly increase.
    pub const fn new(base_ms: u64, step_ms: u64) -> Self {
        let step_ms = if step_ms == 0 { 1 } else { step_ms };
        Self {
            base: Duration::from_millis(base_ms),
            step: Duration::from_millis(step_ms),
            mode: StaggerMode::Uniform(Direction::Up),
        }
    }

    pub const fn uniform(mut self, direction: Direction) -> Self {
        self.mode = StaggerMode::Uniform(direction);
        self
    }

    pub const fn alternating(mut self) -> Self {
        self.mode = StaggerMode::Alternating;
        self
    }

    pub fn delay(&self, index: usize) -> Duration {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.base.saturating_add(self.step.saturating_mul(index))
    }

    pub fn direction(&self, index: usize) -> Direction {
        match self.mode {
            StaggerMode::Uniform(direction) => direction,
            StaggerMode::Alternating if index % 2 == 0 => Direction::Left,
            StaggerMode::Alternating => Direction::Right,
        }
    }

    /// Apply this position's delay and direction to a reveal template.
    pub fn reveal(&self, index: usize, template: RevealSpec) -> RevealSpec {
        template.with_delay(self.delay(index)).direction(self.direction(index))
    }

    pub fn grow(&self, index: usize, proficiency: u8) -> Grow {
        Grow::new(self.delay(index), proficiency)
    }
}

/// Stagger settings used by each screen.
pub mod presets {
    use super::{Direction, Stagger};

    pub const CONTACT_ACTIONS: Stagger = Stagger::new(300, 100).alternating();
    pub const EDUCATION: Stagger = Stagger::new(300, 150);
    pub const ACHIEVEMENTS: Stagger = Stagger::new(300, 120);
    pub const OTHER_PROJECTS: Stagger = Stagger::new(400, 100);
    pub const TIMELINE: Stagger = Stagger::new(0, 150).uniform(Direction::Left);
    pub const SKILL_BARS: Stagger = Stagger::new(0, 80);
    pub const PROJECT_CARDS: Stagger = Stagger::new(0, 100);
    pub const STAT_CARDS: Stagger = Stagger::new(800, 100);
}
