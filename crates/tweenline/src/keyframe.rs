//! Key frames: the waypoints of a timeline.

use crate::easing::{self, EasingFn};
use crate::value::TweenValue;

/// A single waypoint on a timeline.
///
/// A key frame stores the target values for each of the `N` components, plus
/// the easing function and frame count each component uses for the segment
/// *starting* at this key frame. The final key frame of a timeline has no
/// outgoing segment, so its easings and frame counts are inert.
///
/// `position` is the absolute frame index of the key frame. It is assigned
/// by the timeline builder as a running prefix sum of
/// [`highest_frame_count`](Self::highest_frame_count) and is never mutated
/// afterwards.
#[derive(Clone, Copy, Debug)]
pub struct KeyFrame<V: TweenValue, const N: usize> {
    /// Absolute frame index within the timeline.
    pub position: u32,
    /// Target component values at this key frame.
    pub values: [V; N],
    /// Per-component easing for the outgoing segment. Defaults to
    /// [`easing::linear`].
    pub easings: [EasingFn<V>; N],
    /// Per-component duration, in frames, of the outgoing segment. A count
    /// of 0 means that component jumps to its target instantly.
    pub frame_counts: [u32; N],
}

impl<V: TweenValue, const N: usize> KeyFrame<V, N> {
    pub(crate) fn new(values: [V; N]) -> Self {
        Self {
            position: 0,
            values,
            easings: [easing::linear::<V>; N],
            frame_counts: [0; N],
        }
    }

    /// The largest per-component frame count of the outgoing segment.
    ///
    /// The slowest component governs where the next key frame's position
    /// lands; faster components finish early and hold their target value.
    pub fn highest_frame_count(&self) -> u32 {
        self.frame_counts.iter().copied().max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_key_frame_defaults() {
        let kf = KeyFrame::new([1.0f32, 2.0]);
        assert_eq!(kf.position, 0);
        assert_eq!(kf.values, [1.0, 2.0]);
        assert_eq!(kf.frame_counts, [0, 0]);
    }

    #[test]
    fn test_highest_frame_count_takes_the_max() {
        let mut kf = KeyFrame::new([0.0f32, 0.0, 0.0]);
        kf.frame_counts = [50, 200, 125];
        assert_eq!(kf.highest_frame_count(), 200);
    }

    #[test]
    fn test_default_easing_is_linear() {
        let kf = KeyFrame::new([0.0f32]);
        assert_eq!((kf.easings[0])(0.5, 0.0, 10.0), 5.0);
    }
}
