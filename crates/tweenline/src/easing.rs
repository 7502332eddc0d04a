//! Easing functions for tween segments.
//!
//! An easing is any plain function with the [`EasingFn`] shape: it receives
//! the normalized progress of a segment plus the segment's start and end
//! values, and returns the interpolated value. The catalog below covers the
//! classic curve families; callers can pass their own function or
//! non-capturing closure anywhere an `EasingFn` is accepted.
//!
//! [`linear`] is the engine default: every key frame is created with it in
//! each component slot, so a timeline that never calls `via` interpolates
//! linearly (with rounding for integral components).

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use crate::value::TweenValue;

/// The easing capability consumed by the engine:
/// `(progress, start, end) -> value`.
pub type EasingFn<V> = fn(f32, V, V) -> V;

/// Straight interpolation from `start` to `end`. The default easing.
pub fn linear<V: TweenValue>(t: f32, start: V, end: V) -> V {
    V::interpolate(t, start, end)
}

/// Holds `start` for the whole segment; the segment's end value only
/// appears once the next key frame is reached.
pub fn stepped<V: TweenValue>(_t: f32, start: V, _end: V) -> V {
    start
}

// --- Quadratic ---

pub fn quadratic_in<V: TweenValue>(t: f32, start: V, end: V) -> V {
    V::interpolate(t * t, start, end)
}

pub fn quadratic_out<V: TweenValue>(t: f32, start: V, end: V) -> V {
    V::interpolate(t * (2.0 - t), start, end)
}

pub fn quadratic_in_out<V: TweenValue>(t: f32, start: V, end: V) -> V {
    let curve = if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    };
    V::interpolate(curve, start, end)
}

// --- Cubic ---

pub fn cubic_in<V: TweenValue>(t: f32, start: V, end: V) -> V {
    V::interpolate(t * t * t, start, end)
}

pub fn cubic_out<V: TweenValue>(t: f32, start: V, end: V) -> V {
    V::interpolate(1.0 - (1.0 - t).powi(3), start, end)
}

pub fn cubic_in_out<V: TweenValue>(t: f32, start: V, end: V) -> V {
    let curve = if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    };
    V::interpolate(curve, start, end)
}

// --- Quintic ---

pub fn quintic_in<V: TweenValue>(t: f32, start: V, end: V) -> V {
    V::interpolate(t.powi(5), start, end)
}

pub fn quintic_out<V: TweenValue>(t: f32, start: V, end: V) -> V {
    V::interpolate(1.0 - (1.0 - t).powi(5), start, end)
}

pub fn quintic_in_out<V: TweenValue>(t: f32, start: V, end: V) -> V {
    let curve = if t < 0.5 {
        16.0 * t.powi(5)
    } else {
        1.0 - (-2.0 * t + 2.0).powi(5) / 2.0
    };
    V::interpolate(curve, start, end)
}

// --- Sinusoidal ---

pub fn sinusoidal_in<V: TweenValue>(t: f32, start: V, end: V) -> V {
    V::interpolate(1.0 - (t * FRAC_PI_2).cos(), start, end)
}

pub fn sinusoidal_out<V: TweenValue>(t: f32, start: V, end: V) -> V {
    V::interpolate((t * FRAC_PI_2).sin(), start, end)
}

pub fn sinusoidal_in_out<V: TweenValue>(t: f32, start: V, end: V) -> V {
    V::interpolate(-((PI * t).cos() - 1.0) / 2.0, start, end)
}

// --- Exponential ---

pub fn exponential_in<V: TweenValue>(t: f32, start: V, end: V) -> V {
    if t <= 0.0 {
        return start;
    }
    V::interpolate(2f32.powf(10.0 * (t - 1.0)), start, end)
}

pub fn exponential_out<V: TweenValue>(t: f32, start: V, end: V) -> V {
    if t >= 1.0 {
        return end;
    }
    V::interpolate(1.0 - 2f32.powf(-10.0 * t), start, end)
}

pub fn exponential_in_out<V: TweenValue>(t: f32, start: V, end: V) -> V {
    if t <= 0.0 {
        return start;
    }
    if t >= 1.0 {
        return end;
    }
    let curve = if t < 0.5 {
        2f32.powf(20.0 * t - 10.0) / 2.0
    } else {
        (2.0 - 2f32.powf(-20.0 * t + 10.0)) / 2.0
    };
    V::interpolate(curve, start, end)
}

// --- Circular ---

pub fn circular_in<V: TweenValue>(t: f32, start: V, end: V) -> V {
    V::interpolate(1.0 - (1.0 - t * t).max(0.0).sqrt(), start, end)
}

pub fn circular_out<V: TweenValue>(t: f32, start: V, end: V) -> V {
    V::interpolate((1.0 - (t - 1.0).powi(2)).max(0.0).sqrt(), start, end)
}

pub fn circular_in_out<V: TweenValue>(t: f32, start: V, end: V) -> V {
    let curve = if t < 0.5 {
        (1.0 - (1.0 - (2.0 * t).powi(2)).max(0.0).sqrt()) / 2.0
    } else {
        ((1.0 - (-2.0 * t + 2.0).powi(2)).max(0.0).sqrt() + 1.0) / 2.0
    };
    V::interpolate(curve, start, end)
}

// --- Back (overshoots past the endpoints) ---

const BACK_OVERSHOOT: f32 = 1.70158;

pub fn back_in<V: TweenValue>(t: f32, start: V, end: V) -> V {
    let s = BACK_OVERSHOOT;
    V::interpolate(t * t * ((s + 1.0) * t - s), start, end)
}

pub fn back_out<V: TweenValue>(t: f32, start: V, end: V) -> V {
    let s = BACK_OVERSHOOT;
    let t = t - 1.0;
    V::interpolate(t * t * ((s + 1.0) * t + s) + 1.0, start, end)
}

pub fn back_in_out<V: TweenValue>(t: f32, start: V, end: V) -> V {
    let s = BACK_OVERSHOOT * 1.525;
    let t = t * 2.0;
    let curve = if t < 1.0 {
        t * t * ((s + 1.0) * t - s) / 2.0
    } else {
        let t = t - 2.0;
        (t * t * ((s + 1.0) * t + s) + 2.0) / 2.0
    };
    V::interpolate(curve, start, end)
}

// --- Elastic ---

const ELASTIC_PERIOD: f32 = 0.3;

pub fn elastic_in<V: TweenValue>(t: f32, start: V, end: V) -> V {
    if t <= 0.0 {
        return start;
    }
    if t >= 1.0 {
        return end;
    }
    let p = ELASTIC_PERIOD;
    let t = t - 1.0;
    let curve = -(2f32.powf(10.0 * t) * ((t - p / 4.0) * TAU / p).sin());
    V::interpolate(curve, start, end)
}

pub fn elastic_out<V: TweenValue>(t: f32, start: V, end: V) -> V {
    if t <= 0.0 {
        return start;
    }
    if t >= 1.0 {
        return end;
    }
    let p = ELASTIC_PERIOD;
    let curve = 2f32.powf(-10.0 * t) * ((t - p / 4.0) * TAU / p).sin() + 1.0;
    V::interpolate(curve, start, end)
}

pub fn elastic_in_out<V: TweenValue>(t: f32, start: V, end: V) -> V {
    if t <= 0.0 {
        return start;
    }
    if t >= 1.0 {
        return end;
    }
    let p = ELASTIC_PERIOD * 1.5;
    let t = t * 2.0 - 1.0;
    let curve = if t < 0.0 {
        -0.5 * (2f32.powf(10.0 * t) * ((t - p / 4.0) * TAU / p).sin())
    } else {
        2f32.powf(-10.0 * t) * ((t - p / 4.0) * TAU / p).sin() * 0.5 + 1.0
    };
    V::interpolate(curve, start, end)
}

// --- Bounce ---

fn bounce_out_curve(t: f32) -> f32 {
    if t < 1.0 / 2.75 {
        7.5625 * t * t
    } else if t < 2.0 / 2.75 {
        let t = t - 1.5 / 2.75;
        7.5625 * t * t + 0.75
    } else if t < 2.5 / 2.75 {
        let t = t - 2.25 / 2.75;
        7.5625 * t * t + 0.9375
    } else {
        let t = t - 2.625 / 2.75;
        7.5625 * t * t + 0.984375
    }
}

pub fn bounce_in<V: TweenValue>(t: f32, start: V, end: V) -> V {
    V::interpolate(1.0 - bounce_out_curve(1.0 - t), start, end)
}

pub fn bounce_out<V: TweenValue>(t: f32, start: V, end: V) -> V {
    V::interpolate(bounce_out_curve(t), start, end)
}

pub fn bounce_in_out<V: TweenValue>(t: f32, start: V, end: V) -> V {
    let curve = if t < 0.5 {
        (1.0 - bounce_out_curve(1.0 - 2.0 * t)) * 0.5
    } else {
        bounce_out_curve(2.0 * t - 1.0) * 0.5 + 0.5
    };
    V::interpolate(curve, start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() <= EPS
    }

    #[test]
    fn test_every_curve_hits_both_endpoints() {
        let catalog: &[EasingFn<f32>] = &[
            linear,
            quadratic_in,
            quadratic_out,
            quadratic_in_out,
            cubic_in,
            cubic_out,
            cubic_in_out,
            quintic_in,
            quintic_out,
            quintic_in_out,
            sinusoidal_in,
            sinusoidal_out,
            sinusoidal_in_out,
            exponential_in,
            exponential_out,
            exponential_in_out,
            circular_in,
            circular_out,
            circular_in_out,
            back_in,
            back_out,
            back_in_out,
            elastic_in,
            elastic_out,
            elastic_in_out,
            bounce_in,
            bounce_out,
            bounce_in_out,
        ];

        for ease in catalog {
            assert!(approx(ease(0.0, 3.0, 9.0), 3.0));
            assert!(approx(ease(1.0, 3.0, 9.0), 9.0));
        }
    }

    #[test]
    fn test_linear_midpoint() {
        assert!(approx(linear(0.5, 0.0, 100.0), 50.0));
    }

    #[test]
    fn test_linear_rounds_integral_components() {
        assert_eq!(linear(0.5, 0i32, 10i32), 5);
        assert_eq!(linear(0.55, 0i32, 10i32), 6);
    }

    #[test]
    fn test_stepped_holds_start_until_the_end() {
        assert_eq!(stepped(0.0, 1.0, 2.0), 1.0);
        assert_eq!(stepped(0.999, 1.0, 2.0), 1.0);
        assert_eq!(stepped(1.0, 1.0, 2.0), 1.0);
    }

    #[test]
    fn test_quadratic_in_quarter_point() {
        // curve(0.5) = 0.25
        assert!(approx(quadratic_in(0.5, 0.0, 100.0), 25.0));
    }

    #[test]
    fn test_back_in_dips_below_start() {
        assert!(back_in(0.3, 0.0, 100.0) < 0.0);
    }

    #[test]
    fn test_bounce_out_first_hump() {
        // 7.5625 * 0.2^2 = 0.3025
        assert!(approx(bounce_out(0.2, 0.0, 1.0), 0.3025));
    }
}
