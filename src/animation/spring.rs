//! Damped spring and the scale-in card variant.

use std::time::Duration;

use ratatui::layout::Rect;

use super::{linear_progress, Easing};

/// Displacement and speed below which a spring counts as settled
const REST_THRESHOLD: f32 = 0.001;

/// A mass-spring-damper driven from rest toward a target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl Default for Spring {
    fn default() -> Self {
        Self::from_tension_friction(50.0, 7.0)
    }
}

impl Spring {
    pub fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness: stiffness.max(f32::EPSILON),
            damping: damping.max(0.0),
            mass: mass.max(f32::EPSILON),
        }
    }

    /// Build from the tension/friction pair used by design tools.
    pub fn from_tension_friction(tension: f32, friction: f32) -> Self {
        let stiffness = (tension - 30.0) * 3.62 + 194.0;
        let damping = (friction - 8.0) * 3.0 + 25.0;
        Self::new(stiffness, damping, 1.0)
    }

    fn natural_frequency(&self) -> f32 {
        (self.stiffness / self.mass).sqrt()
    }

    fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Displacement from the target and velocity `t` seconds after release.
    fn state(&self, x0: f32, t: f32) -> (f32, f32) {
        let w0 = self.natural_frequency();
        let zeta = self.damping_ratio();

        if zeta < 1.0 {
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            let decay = (-zeta * w0 * t).exp();
            let a = x0;
            let b = zeta * w0 * x0 / wd;
            let (sin, cos) = (wd * t).sin_cos();
            let x = decay * (a * cos + b * sin);
            let v = decay * ((b * wd - zeta * w0 * a) * cos - (a * wd + zeta * w0 * b) * sin);
            (x, v)
        } else if (zeta - 1.0).abs() < f32::EPSILON {
            let decay = (-w0 * t).exp();
            let x = decay * (x0 + w0 * x0 * t);
            let v = -decay * w0 * w0 * x0 * t;
            (x, v)
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -w0 * (zeta - root);
            let r2 = -w0 * (zeta + root);
            let c1 = -r2 * x0 / (r1 - r2);
            let c2 = x0 - c1;
            let x = c1 * (r1 * t).exp() + c2 * (r2 * t).exp();
            let v = c1 * r1 * (r1 * t).exp() + c2 * r2 * (r2 * t).exp();
            (x, v)
        }
    }

    /// Value `elapsed` after release from `from` toward `to`.
    ///
    /// Snaps to `to` once displacement and speed fall under the rest threshold.
    pub fn value(&self, from: f32, to: f32, elapsed: Duration) -> f32 {
        let (x, v) = self.state(from - to, elapsed.as_secs_f32());
        if x.abs() <= REST_THRESHOLD && v.abs() <= REST_THRESHOLD {
            to
        } else {
            to + x
        }
    }
}

/// Scale + fade entrance for cards
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleIn {
    pub delay: Duration,
    pub from_scale: f32,
    pub spring: Spring,
    pub fade: Duration,
}

impl ScaleIn {
    /// Carousel project cards start at 90%.
    pub fn card(delay: Duration) -> Self {
        Self {
            delay,
            from_scale: 0.9,
            spring: Spring::default(),
            fade: Duration::from_millis(500),
        }
    }

    /// Stat cards start at 80%.
    pub fn stat(delay: Duration) -> Self {
        Self {
            from_scale: 0.8,
            ..Self::card(delay)
        }
    }

    pub fn sample(&self, elapsed: Duration) -> ScaleFrame {
        let opacity = Easing::EaseInOut.apply(linear_progress(elapsed, self.delay, self.fade));
        let scale = match elapsed.checked_sub(self.delay) {
            Some(since) if !since.is_zero() => self.spring.value(self.from_scale, 1.0, since),
            _ => self.from_scale,
        };
        ScaleFrame { scale, opacity }
    }
}

/// One sampled state of a [`ScaleIn`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleFrame {
    pub scale: f32,
    pub opacity: f32,
}

impl ScaleFrame {
    /// Shrink (or grow) `area` around its center by the frame's scale.
    pub fn apply(&self, area: Rect) -> Rect {
        let width = ((area.width as f32) * self.scale).round().clamp(1.0, area.width.max(1) as f32) as u16;
        let height = ((area.height as f32) * self.scale).round().clamp(1.0, area.height.max(1) as f32) as u16;
        let x = area.x as i32 + (area.width as i32 - width as i32) / 2;
        let y = area.y as i32 + (area.height as i32 - height as i32) / 2;
        Rect::new(x.max(0) as u16, y.max(0) as u16, width, height)
    }
}
