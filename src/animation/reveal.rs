//! Fade + offset entrance primitive.

use std::time::Duration;

use ratatui::layout::Rect;

use super::{linear_progress, Easing};
use crate::constants::{REVEAL_DEFAULT_DURATION_MS, REVEAL_DEFAULT_OFFSET, UNITS_PER_COLUMN, UNITS_PER_ROW};

/// Where a block slides in from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Rises into place from below
    #[default]
    Up,
    /// Drops into place from above
    Down,
    /// Slides in from the left
    Left,
    /// Slides in from the right
    Right,
}

impl Direction {
    /// Starting displacement for a reveal of the given magnitude.
    pub fn initial_offset(self, distance: f32) -> Offset {
        match self {
            Direction::Left => Offset { dx: -distance, dy: 0.0 },
            Direction::Right => Offset { dx: distance, dy: 0.0 },
            Direction::Up => Offset { dx: 0.0, dy: distance },
            Direction::Down => Offset { dx: 0.0, dy: -distance },
        }
    }
}

/// Positional displacement in logical units
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub dx: f32,
    pub dy: f32,
}

impl Offset {
    pub const ZERO: Offset = Offset { dx: 0.0, dy: 0.0 };

    pub fn scaled(self, factor: f32) -> Offset {
        Offset {
            dx: self.dx * factor,
            dy: self.dy * factor,
        }
    }

    /// Displacement rounded to whole terminal cells.
    pub fn cells(self) -> (i32, i32) {
        (
            (self.dx / UNITS_PER_COLUMN).round() as i32,
            (self.dy / UNITS_PER_ROW).round() as i32,
        )
    }
}

/// Parameters of a reveal. Cheap to copy and build per render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealSpec {
    pub delay: Duration,
    pub duration: Duration,
    pub direction: Direction,
    pub distance: f32,
    pub easing: Easing,
}

impl Default for RevealSpec {
    fn default() -> Self {
        Self {
            delay: Duration::ZERO,
            duration: Duration::from_millis(REVEAL_DEFAULT_DURATION_MS),
            direction: Direction::Up,
            distance: REVEAL_DEFAULT_OFFSET,
            easing: Easing::default(),
        }
    }
}

impl RevealSpec {
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            ..Self::default()
        }
    }

    pub fn delay_ms(mut self, delay: u64) -> Self {
        self.delay = Duration::from_millis(delay);
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn duration_ms(mut self, duration: u64) -> Self {
        self.duration = Duration::from_millis(duration);
        self
    }

    pub fn distance(mut self, distance: f32) -> Self {
        self.distance = distance;
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Sample both channels `elapsed` after mount.
    ///
    /// Before `delay` the frame is exactly the initial one; from
    /// `delay + duration` on it is exactly the terminal one.
    pub fn sample(&self, elapsed: Duration) -> RevealFrame {
        let t = self.easing.apply(linear_progress(elapsed, self.delay, self.duration));
        let start = self.direction.initial_offset(self.distance);
        RevealFrame {
            opacity: t,
            offset: start.scaled(1.0 - t),
        }
    }
}

/// One sampled state of a reveal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealFrame {
    /// 0.0 (invisible) to 1.0 (opaque)
    pub opacity: f32,
    pub offset: Offset,
}

impl RevealFrame {
    pub const SETTLED: RevealFrame = RevealFrame {
        opacity: 1.0,
        offset: Offset::ZERO,
    };

    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }

    /// Move `area` by the frame's offset, clipped to `bounds`.
    ///
    /// Returns `None` when the shifted block falls entirely outside `bounds`.
    pub fn shift(&self, area: Rect, bounds: Rect) -> Option<Rect> {
        let (dx, dy) = self.offset.cells();
        let x = area.x as i32 + dx;
        let y = area.y as i32 + dy;
        let left = x.max(bounds.x as i32);
        let top = y.max(bounds.y as i32);
        let right = (x + area.width as i32).min(bounds.right() as i32);
        let bottom = (y + area.height as i32).min(bounds.bottom() as i32);
        if right <= left || bottom <= top {
            return None;
        }
        Some(Rect::new(
            left as u16,
            top as u16,
            (right - left) as u16,
            (bottom - top) as u16,
        ))
    }
}
