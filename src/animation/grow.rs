//! Width-grow variant for proficiency bars.

use std::time::Duration;

use super::{linear_progress, Easing};

/// Opacity fades in at `delay`; the bar starts growing `grow_lag` later.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grow {
    pub delay: Duration,
    pub fade: Duration,
    pub grow_lag: Duration,
    pub grow: Duration,
    /// Final fill in percent, already clamped to 0..=100
    pub target: f32,
}

impl Grow {
    pub fn new(delay: Duration, proficiency: u8) -> Self {
        Self {
            delay,
            fade: Duration::from_millis(400),
            grow_lag: Duration::from_millis(200),
            grow: Duration::from_millis(800),
            target: f32::from(proficiency.min(100)),
        }
    }

    pub fn sample(&self, elapsed: Duration) -> GrowFrame {
        let opacity = Easing::EaseInOut.apply(linear_progress(elapsed, self.delay, self.fade));
        let grown = Easing::EaseOut.apply(linear_progress(elapsed, self.delay + self.grow_lag, self.grow));
        GrowFrame {
            opacity,
            percent: self.target * grown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowFrame {
    pub opacity: f32,
    /// Current fill in percent
    pub percent: f32,
}

impl GrowFrame {
    /// Filled cells for a track `width` cells wide.
    pub fn filled_cells(&self, width: u16) -> u16 {
        ((self.percent / 100.0) * width as f32).round().clamp(0.0, width as f32) as u16
    }
}
