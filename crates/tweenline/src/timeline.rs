//! Fluent timeline construction.
//!
//! A timeline is built by chaining key frames and then configuring the
//! segment between the last two of them:
//!
//! ```
//! use tweenline::{easing, from};
//!
//! let mut tween = from([0.0f32, 0.0])
//!     .to([100.0, 50.0])
//!     .via(easing::quadratic_in_out)
//!     .during(60)
//!     .build();
//!
//! let halfway = tween.seek(30);
//! assert!(halfway[0] > 0.0 && halfway[0] < 100.0);
//! ```
//!
//! `via` and `during` always target the segment *starting at the
//! second-to-last key frame*: the outgoing segment of the key frame that
//! was completed by the most recent `to` call. Component count is part of
//! the builder's type, so supplying the wrong number of easings or
//! durations fails to compile.

use crate::easing::EasingFn;
use crate::keyframe::KeyFrame;
use crate::tween::Tween;
use crate::value::TweenValue;

/// Starts a timeline with one key frame holding the given component values.
///
/// The component count `N` is fixed for the lifetime of the builder and the
/// tween it produces.
pub fn from<V: TweenValue, const N: usize>(values: [V; N]) -> Timeline<V, N> {
    Timeline {
        key_frames: vec![KeyFrame::new(values)],
    }
}

/// Accumulates key frames and segment configuration, then seals them into a
/// [`Tween`] with [`build`](Timeline::build).
#[derive(Clone, Debug)]
pub struct Timeline<V: TweenValue, const N: usize> {
    key_frames: Vec<KeyFrame<V, N>>,
}

impl<V: TweenValue, const N: usize> Timeline<V, N> {
    /// Appends a key frame with the given target values.
    ///
    /// Subsequent `via`/`during` calls configure the segment leading to it.
    pub fn to(mut self, values: [V; N]) -> Self {
        self.key_frames.push(KeyFrame::new(values));
        self
    }

    /// Sets one easing function for every component of the segment starting
    /// at the second-to-last key frame.
    ///
    /// # Panics
    ///
    /// Panics if no segment exists yet (fewer than two key frames).
    pub fn via(mut self, easing: EasingFn<V>) -> Self {
        self.segment_start("via").easings = [easing; N];
        self
    }

    /// Sets a distinct easing function per component for the segment
    /// starting at the second-to-last key frame.
    ///
    /// # Panics
    ///
    /// Panics if no segment exists yet (fewer than two key frames).
    pub fn via_each(mut self, easings: [EasingFn<V>; N]) -> Self {
        self.segment_start("via_each").easings = easings;
        self
    }

    /// Sets a uniform duration, in frames, for every component of the
    /// segment starting at the second-to-last key frame, then recomputes the
    /// absolute position of every key frame.
    ///
    /// # Panics
    ///
    /// Panics if no segment exists yet (fewer than two key frames).
    pub fn during(mut self, frames: u32) -> Self {
        self.segment_start("during").frame_counts = [frames; N];
        self.fix_positions();
        self
    }

    /// Sets a distinct duration per component for the segment starting at
    /// the second-to-last key frame, then recomputes absolute positions.
    ///
    /// Components with shorter durations reach their target value early and
    /// hold it; the longest duration decides where the next key frame lands.
    /// A duration of 0 makes that component jump to its target instantly.
    ///
    /// # Panics
    ///
    /// Panics if no segment exists yet (fewer than two key frames).
    pub fn during_each(mut self, frames: [u32; N]) -> Self {
        self.segment_start("during_each").frame_counts = frames;
        self.fix_positions();
        self
    }

    /// Seals the accumulated key frames into a [`Tween`] positioned at
    /// frame 0.
    pub fn build(self) -> Tween<V, N> {
        tracing::debug!(
            key_frames = self.key_frames.len(),
            duration = self.key_frames.last().map(|kf| kf.position).unwrap_or(0),
            "timeline sealed into tween"
        );
        Tween::new(self.key_frames)
    }

    fn segment_start(&mut self, operation: &str) -> &mut KeyFrame<V, N> {
        assert!(
            self.key_frames.len() >= 2,
            "`{operation}` needs a segment to configure: call `to()` first"
        );
        let index = self.key_frames.len() - 2;
        &mut self.key_frames[index]
    }

    /// Reassigns every key frame's absolute position as a prefix sum of
    /// `highest_frame_count()`. Runs after each `during*` call so a duration
    /// change on an earlier segment shifts all later key frames.
    fn fix_positions(&mut self) {
        let mut position = 0u32;
        for key_frame in &mut self.key_frames {
            key_frame.position = position;
            position += key_frame.highest_frame_count();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing;

    #[test]
    fn test_positions_are_a_prefix_sum_of_durations() {
        let timeline = from([0.0f32])
            .to([100.0])
            .during(200)
            .to([200.0])
            .during(400)
            .to([300.0])
            .during(400);

        let tween = timeline.build();
        assert_eq!(tween.key_frame(0).unwrap().position, 0);
        assert_eq!(tween.key_frame(1).unwrap().position, 200);
        assert_eq!(tween.key_frame(2).unwrap().position, 600);
        assert_eq!(tween.key_frame(3).unwrap().position, 1000);
        assert_eq!(tween.duration(), 1000);
    }

    #[test]
    fn test_slowest_component_governs_positions() {
        let tween = from([0.0f32, 0.0])
            .to([10.0, 10.0])
            .during_each([50, 200])
            .to([20.0, 20.0])
            .during(100)
            .build();

        assert_eq!(tween.key_frame(1).unwrap().position, 200);
        assert_eq!(tween.key_frame(2).unwrap().position, 300);
    }

    #[test]
    fn test_during_overrides_previous_durations_and_reshifts() {
        let tween = from([0.0f32])
            .to([1.0])
            .during(100)
            .during(30)
            .to([2.0])
            .during(50)
            .build();

        assert_eq!(tween.key_frame(1).unwrap().position, 30);
        assert_eq!(tween.key_frame(2).unwrap().position, 80);
    }

    #[test]
    fn test_zero_duration_segment_is_legal() {
        let tween = from([0.0f32]).to([5.0]).during(0).to([9.0]).during(10).build();
        assert_eq!(tween.key_frame(1).unwrap().position, 0);
        assert_eq!(tween.key_frame(2).unwrap().position, 10);
    }

    #[test]
    fn test_via_each_assigns_per_component_easing() {
        let mut tween = from([0.0f32, 0.0])
            .to([100.0, 100.0])
            .via_each([easing::linear, easing::stepped])
            .during(100)
            .build();

        let values = tween.seek(50);
        assert_eq!(values[0], 50.0);
        assert_eq!(values[1], 0.0);
    }

    #[test]
    #[should_panic(expected = "needs a segment")]
    fn test_via_without_a_segment_panics() {
        let _ = from([0.0f32]).via(easing::linear);
    }

    #[test]
    #[should_panic(expected = "needs a segment")]
    fn test_during_without_a_segment_panics() {
        let _ = from([0.0f32]).during(10);
    }
}
