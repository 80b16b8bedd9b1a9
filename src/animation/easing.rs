/// Easing curves for timed channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    /// Cubic ease-in-out, the default for timed reveals
    #[default]
    EaseInOut,
    /// Cubic ease-out
    EaseOut,
}

impl Easing {
    /// Map linear progress `t` in `0.0..=1.0` onto the curve.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_are_fixed() {
        for easing in [Easing::Linear, Easing::EaseInOut, Easing::EaseOut] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
        }
    }

    #[test]
    fn test_ease_in_out_is_monotonic() {
        let mut last = 0.0;
        for step in 1..=100 {
            let value = Easing::EaseInOut.apply(step as f32 / 100.0);
            assert!(value >= last);
            last = value;
        }
    }
}
