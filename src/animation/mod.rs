//! Entrance animations for the resume screens.
//!
//! Nothing in this module owns a timer. Every animation is a pure function of
//! the time elapsed since its screen was mounted, sampled while rendering.
//! Dropping a screen drops its [`MountClock`], so there is nothing left that
//! could fire after the view is gone, and remounting starts every animation
//! again from zero.
//!
//! - [`reveal`] - fade + offset primitive used by every section and card
//! - [`spring`] - damped spring and the scale-in variant for cards
//! - [`grow`] - width-grow variant for skill bars
//! - [`stagger`] - per-index delay/direction policy and call-site presets

pub mod easing;
pub mod grow;
pub mod reveal;
pub mod spring;
pub mod stagger;

pub use easing::Easing;
pub use grow::{Grow, GrowFrame};
pub use reveal::{Direction, Offset, RevealFrame, RevealSpec};
pub use spring::{ScaleFrame, ScaleIn, Spring};
pub use stagger::{presets, Stagger};

use std::time::{Duration, Instant};

/// Time source for one screen mount.
///
/// When animations are disabled the clock reports an elapsed time far past
/// any animation, so every sample lands on its terminal frame.
#[derive(Debug, Clone, Copy)]
pub struct MountClock {
    mounted_at: Instant,
    enabled: bool,
}

/// Elapsed time reported by a disabled clock
const SETTLED: Duration = Duration::from_secs(3600);

impl MountClock {
    pub fn start(enabled: bool) -> Self {
        Self::started_at(Instant::now(), enabled)
    }

    pub fn started_at(mounted_at: Instant, enabled: bool) -> Self {
        Self { mounted_at, enabled }
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed_at(Instant::now())
    }

    pub fn elapsed_at(&self, now: Instant) -> Duration {
        if self.enabled {
            now.saturating_duration_since(self.mounted_at)
        } else {
            SETTLED
        }
    }

    /// Whether anything started within `horizon` of the mount may still be moving.
    pub fn is_running(&self, horizon: Duration) -> bool {
        self.enabled && self.elapsed() < horizon
    }
}

/// Linear progress of a timed channel: 0 before `delay`, 1 after `delay + duration`.
pub fn linear_progress(elapsed: Duration, delay: Duration, duration: Duration) -> f32 {
    if elapsed <= delay {
        return 0.0;
    }
    if duration.is_zero() {
        return 1.0;
    }
    let run = (elapsed - delay).as_secs_f32() / duration.as_secs_f32();
    run.min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_progress_bounds() {
        let delay = Duration::from_millis(100);
        let duration = Duration::from_millis(200);
        assert_eq!(linear_progress(Duration::ZERO, delay, duration), 0.0);
        assert_eq!(linear_progress(delay, delay, duration), 0.0);
        assert!((linear_progress(Duration::from_millis(200), delay, duration) - 0.5).abs() < 1e-6);
        assert_eq!(linear_progress(Duration::from_millis(400), delay, duration), 1.0);
    }

    #[test]
    fn test_disabled_clock_is_settled() {
        let clock = MountClock::start(false);
        assert!(clock.elapsed() >= Duration::from_secs(60));
        assert!(!clock.is_running(Duration::from_secs(5)));
    }
}
