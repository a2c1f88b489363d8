//! Easing functions for camera transitions.
//!
//! All curves map `[0, 1]` onto `[0, 1]` with `f(0) = 0` and `f(1) = 1`.

/// Easing function variants for transition curves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Cubic ease-out: `1 - (1 - t)³`. Used for restore and showcase moves.
    CubicOut,
    /// Cubic ease-in-out (slow start and end).
    CubicInOut,
}

impl EasingFunction {
    /// Default easing function for camera moves.
    pub const DEFAULT: EasingFunction = EasingFunction::CubicOut;

    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            EasingFunction::Linear => t,
            EasingFunction::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            EasingFunction::CubicOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt * omt
            }
            EasingFunction::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let k = -2.0 * t + 2.0;
                    1.0 - k * k * k / 2.0
                }
            }
        }
    }
}

impl Default for EasingFunction {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [EasingFunction; 4] = [
        EasingFunction::Linear,
        EasingFunction::QuadraticOut,
        EasingFunction::CubicOut,
        EasingFunction::CubicInOut,
    ];

    #[test]
    fn test_endpoints() {
        for f in ALL {
            assert_eq!(f.evaluate(0.0), 0.0, "{f:?}");
            assert!((f.evaluate(1.0) - 1.0).abs() < 1e-6, "{f:?}");
        }
    }

    #[test]
    fn test_cubic_out_shape() {
        let f = EasingFunction::CubicOut;
        assert_eq!(f.evaluate(0.5), 0.875); // 1 - 0.5³
        assert!(f.evaluate(0.25) > 0.25);
    }

    #[test]
    fn test_input_clamping() {
        for f in ALL {
            assert_eq!(f.evaluate(-0.5), 0.0);
            assert!((f.evaluate(1.5) - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_cubic_in_out_is_symmetric() {
        let f = EasingFunction::CubicInOut;
        assert_eq!(f.evaluate(0.5), 0.5);
        assert!((f.evaluate(0.2) + f.evaluate(0.8) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_default_is_cubic_out() {
        assert_eq!(EasingFunction::default(), EasingFunction::CubicOut);
    }
}
