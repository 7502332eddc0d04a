//! Numeric capability required of tweened components.
//!
//! Anything that can sit in a timeline slot implements [`TweenValue`]: it
//! knows its zero and how to move a fraction of the way from one value to
//! another. Floats interpolate exactly; integers round to the nearest value
//! so that a tween from 0 to 10 passes through 5, not 4.999.

/// A value that can be interpolated by the engine.
pub trait TweenValue: Copy + PartialEq + std::fmt::Debug {
    /// The additive identity, used as the fallback for an empty timeline.
    const ZERO: Self;

    /// Computes `start + (end - start) * factor`.
    ///
    /// `factor` is usually in `[0, 1]` but overshooting easing curves (back,
    /// elastic) pass factors outside that range; implementations must
    /// extrapolate rather than clamp.
    fn interpolate(factor: f32, start: Self, end: Self) -> Self;
}

macro_rules! impl_tween_value_float {
    ($($float:ty),*) => {$(
        impl TweenValue for $float {
            const ZERO: Self = 0.0;

            #[inline]
            fn interpolate(factor: f32, start: Self, end: Self) -> Self {
                start + (end - start) * factor as $float
            }
        }
    )*};
}

macro_rules! impl_tween_value_int {
    ($($int:ty),*) => {$(
        impl TweenValue for $int {
            const ZERO: Self = 0;

            #[inline]
            fn interpolate(factor: f32, start: Self, end: Self) -> Self {
                // Widen to f64 so large 64-bit values survive the round trip.
                // The float-to-int cast saturates, which keeps unsigned
                // components at 0 when an overshooting curve dips below it.
                let interpolated = (end as f64 - start as f64) * factor as f64 + start as f64;
                interpolated.round() as $int
            }
        }
    )*};
}

impl_tween_value_float!(f32, f64);
impl_tween_value_int!(i8, i16, i32, i64, u8, u16, u32, u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_interpolation_is_exact() {
        assert_eq!(f32::interpolate(0.25, 0.0, 100.0), 25.0);
        assert_eq!(f64::interpolate(0.5, -10.0, 10.0), 0.0);
        assert_eq!(f32::interpolate(0.0, 3.0, 7.0), 3.0);
        assert_eq!(f32::interpolate(1.0, 3.0, 7.0), 7.0);
    }

    #[test]
    fn test_integers_round_to_nearest() {
        assert_eq!(i32::interpolate(0.5, 0, 10), 5);
        assert_eq!(i32::interpolate(0.26, 0, 10), 3);
        assert_eq!(u8::interpolate(0.5, 0, 255), 128);
        assert_eq!(i64::interpolate(0.5, 0, 1), 1);
    }

    #[test]
    fn test_extrapolation_outside_unit_range() {
        // Overshooting curves hand out factors beyond [0, 1].
        assert_eq!(f32::interpolate(1.5, 0.0, 10.0), 15.0);
        assert_eq!(f32::interpolate(-0.5, 0.0, 10.0), -5.0);
    }

    #[test]
    fn test_unsigned_saturates_instead_of_wrapping() {
        assert_eq!(u32::interpolate(-0.5, 0, 10), 0);
        assert_eq!(u8::interpolate(2.0, 0, 200), 255);
    }
}
