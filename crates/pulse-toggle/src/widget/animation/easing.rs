//! Easing functions for smooth animations.
//!
//! Easing functions map a linear progress value (0.0 to 1.0) to a transformed
//! value that creates smoother, more natural-looking animations.

/// Available easing functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Linear interpolation (no easing).
    #[default]
    Linear,
    /// Quadratic ease-in (starts slow, accelerates).
    EaseIn,
    /// Quadratic ease-out (starts fast, decelerates).
    EaseOut,
    /// Quadratic ease-in-out (smooth start and end).
    EaseInOut,
    /// Strong deceleration: `1 - (1 - t)^4`.
    ///
    /// This is the classic "decelerate" curve with a factor of 2, used by the
    /// shadow pulse and the press feedback.
    Decelerate,
}

/// Apply an easing function to a progress value.
///
/// # Arguments
///
/// * `easing` - The easing function to apply
/// * `t` - Progress value from 0.0 to 1.0
///
/// # Returns
///
/// The eased value, in the range 0.0 to 1.0.
///
/// # Example
///
/// ```
/// use pulse_toggle::widget::animation::{ease, Easing};
///
/// // Linear: output equals input
/// assert_eq!(ease(Easing::Linear, 0.5), 0.5);
///
/// // Decelerate: most of the distance is covered early
/// assert!(ease(Easing::Decelerate, 0.5) > 0.9);
/// ```
#[inline]
pub fn ease(easing: Easing, t: f32) -> f32 {
    // Clamp input to valid range
    let t = t.clamp(0.0, 1.0);

    match easing {
        Easing::Linear => t,
        Easing::EaseIn => t * t,
        Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
        Easing::EaseInOut => {
            if t < 0.5 {
                2.0 * t * t
            } else {
                1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
            }
        }
        Easing::Decelerate => 1.0 - (1.0 - t).powi(4),
    }
}

/// Interpolate between two values using an easing function.
#[inline]
pub fn lerp_eased(easing: Easing, start: f32, end: f32, t: f32) -> f32 {
    let eased_t = ease(easing, t);
    start + (end - start) * eased_t
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 5] = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::Decelerate,
    ];

    #[test]
    fn test_endpoints() {
        for easing in ALL {
            assert_eq!(ease(easing, 0.0), 0.0, "{easing:?} at 0");
            assert_eq!(ease(easing, 1.0), 1.0, "{easing:?} at 1");
        }
    }

    #[test]
    fn test_ease_in_out_midpoint() {
        assert_eq!(ease(Easing::EaseInOut, 0.5), 0.5);
    }

    #[test]
    fn test_decelerate_shape() {
        // 1 - 0.5^4
        assert!((ease(Easing::Decelerate, 0.5) - 0.9375).abs() < 1e-6);
        // Faster than quadratic ease-out early on
        assert!(ease(Easing::Decelerate, 0.25) > ease(Easing::EaseOut, 0.25));
    }

    #[test]
    fn test_monotonic() {
        for easing in ALL {
            let mut last = 0.0;
            for i in 1..=20 {
                let v = ease(easing, i as f32 / 20.0);
                assert!(v >= last, "{easing:?} not monotonic at step {i}");
                last = v;
            }
        }
    }

    #[test]
    fn test_clamp() {
        // Values outside 0-1 should be clamped
        assert_eq!(ease(Easing::Linear, -0.5), 0.0);
        assert_eq!(ease(Easing::Decelerate, 1.5), 1.0);
    }

    #[test]
    fn test_lerp_eased() {
        assert_eq!(lerp_eased(Easing::Linear, 1.0, 2.5, 0.0), 1.0);
        assert_eq!(lerp_eased(Easing::Linear, 1.0, 2.5, 1.0), 2.5);
        assert_eq!(lerp_eased(Easing::Linear, 100.0, 200.0, 0.5), 150.0);
    }
}
