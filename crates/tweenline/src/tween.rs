//! The tween engine: interpolation over a sealed key-frame sequence plus
//! the step/seek/jump event mechanism.

use smallvec::SmallVec;

use crate::event::{Event, Response};
use crate::keyframe::KeyFrame;
use crate::value::TweenValue;

/// A callback invoked after a mutating operation.
///
/// The listener receives the tween itself and may re-enter it (read values,
/// step further, register more listeners). Returning
/// [`Response::Unsubscribe`] removes the listener once the current dispatch
/// pass completes.
pub type Listener<V, const N: usize> = Box<dyn FnMut(&mut Tween<V, N>) -> Response>;

type ListenerList<V, const N: usize> = SmallVec<[Listener<V, N>; 2]>;

/// A sealed, playable timeline.
///
/// Created by [`Timeline::build`](crate::Timeline::build). The key-frame
/// sequence is immutable in shape; only the current frame, the cached value
/// and the listener lists mutate.
///
/// The current frame is saturated at 0 but deliberately *not* clamped at the
/// upper end: `seek`ing past the last key frame stores the literal frame, and
/// clamping happens only when the value is computed. A later relative
/// [`step`](Self::step) therefore continues from wherever the caller went.
pub struct Tween<V: TweenValue, const N: usize> {
    key_frames: Vec<KeyFrame<V, N>>,
    current_frame: u32,
    current_value: [V; N],
    step_listeners: ListenerList<V, N>,
    seek_listeners: ListenerList<V, N>,
    jump_listeners: ListenerList<V, N>,
}

impl<V: TweenValue, const N: usize> Tween<V, N> {
    pub(crate) fn new(key_frames: Vec<KeyFrame<V, N>>) -> Self {
        debug_assert!(!key_frames.is_empty());
        let current_value = interpolate_at(&key_frames, 0);
        Self {
            key_frames,
            current_frame: 0,
            current_value,
            step_listeners: SmallVec::new(),
            seek_listeners: SmallVec::new(),
            jump_listeners: SmallVec::new(),
        }
    }

    /// Moves the current frame by `delta` frames, saturating at frame 0,
    /// then recomputes the value and fires [`Event::Step`] listeners.
    pub fn step(&mut self, delta: i32) -> [V; N] {
        self.current_frame = self.current_frame.saturating_add_signed(delta);
        self.refresh();
        self.dispatch(Event::Step);
        self.current_value
    }

    /// Sets the current frame to `frame` literally, even past the last key
    /// frame, then recomputes the value and fires [`Event::Seek`]
    /// listeners.
    pub fn seek(&mut self, frame: u32) -> [V; N] {
        self.current_frame = frame;
        self.refresh();
        self.dispatch(Event::Seek);
        self.current_value
    }

    /// Moves the current frame to the position of the key frame at `index`,
    /// clamping the index into range, then recomputes the value and fires
    /// [`Event::Jump`] listeners.
    pub fn jump(&mut self, index: usize) -> [V; N] {
        let clamped = index.min(self.key_frames.len() - 1);
        if clamped != index {
            tracing::trace!(requested = index, clamped, "jump index past the last key frame");
        }
        self.current_frame = self.key_frames[clamped].position;
        self.refresh();
        self.dispatch(Event::Jump);
        self.current_value
    }

    /// Registers a listener for one event kind.
    ///
    /// Listeners fire in registration order. A listener registered while its
    /// own event is being dispatched first fires on the *next* occurrence of
    /// that event.
    pub fn on<F>(&mut self, event: Event, listener: F) -> &mut Self
    where
        F: FnMut(&mut Tween<V, N>) -> Response + 'static,
    {
        self.listeners_mut(event).push(Box::new(listener));
        self
    }

    /// The cached current value. Does not recompute or fire listeners.
    pub fn peek(&self) -> [V; N] {
        self.current_value
    }

    /// The value the tween would have at `frame`, without mutating state.
    pub fn peek_at(&self, frame: u32) -> [V; N] {
        interpolate_at(&self.key_frames, frame)
    }

    /// The current frame, exactly as last set by `step`/`seek`/`jump`.
    pub fn current_frame(&self) -> u32 {
        self.current_frame
    }

    /// Total timeline length in frames: the last key frame's position.
    pub fn duration(&self) -> u32 {
        self.key_frames.last().map(|kf| kf.position).unwrap_or(0)
    }

    /// Overall progress in `[0, 1]`. A single-key-frame timeline reports 0.
    pub fn progress(&self) -> f32 {
        let duration = self.duration();
        if duration == 0 {
            return 0.0;
        }
        (self.current_frame as f32 / duration as f32).min(1.0)
    }

    /// Index of the key frame the current frame is based on: the greatest
    /// index whose position does not exceed the current frame. Saturates at
    /// the last index once the current frame passes the end.
    pub fn point(&self) -> usize {
        base_index(&self.key_frames, self.current_frame)
    }

    /// Number of key frames in the timeline.
    pub fn len(&self) -> usize {
        self.key_frames.len()
    }

    /// Always false for a built tween; present for completeness.
    pub fn is_empty(&self) -> bool {
        self.key_frames.is_empty()
    }

    /// The key frame at `index`, if in range.
    pub fn key_frame(&self, index: usize) -> Option<&KeyFrame<V, N>> {
        self.key_frames.get(index)
    }

    fn refresh(&mut self) {
        self.current_value = interpolate_at(&self.key_frames, self.current_frame);
    }

    /// Runs one dispatch pass over the listeners of `event`.
    ///
    /// The list is moved out of the tween for the duration of the pass, so
    /// listeners can safely re-enter the tween. Unsubscriptions take effect
    /// only after the full pass, keeping invocation order stable; listeners
    /// registered mid-pass land behind the survivors.
    fn dispatch(&mut self, event: Event) {
        let mut active = std::mem::take(self.listeners_mut(event));
        if active.is_empty() {
            return;
        }
        let mut kept: ListenerList<V, N> = SmallVec::new();
        for mut listener in active.drain(..) {
            if listener(self) == Response::Continue {
                kept.push(listener);
            }
        }
        let live = self.listeners_mut(event);
        kept.append(live);
        *live = kept;
    }

    fn listeners_mut(&mut self, event: Event) -> &mut ListenerList<V, N> {
        match event {
            Event::Step => &mut self.step_listeners,
            Event::Seek => &mut self.seek_listeners,
            Event::Jump => &mut self.jump_listeners,
        }
    }
}

impl<V: TweenValue> Tween<V, 1> {
    /// The current value of a single-component tween, unwrapped.
    pub fn single(&self) -> V {
        self.current_value[0]
    }
}

/// Greatest key-frame index whose position does not exceed `frame`.
///
/// Positions are non-decreasing and start at 0, so the search never comes up
/// empty. When consecutive key frames share a position (an all-zero-duration
/// segment), the later one wins, which skips the degenerate segment.
fn base_index<V: TweenValue, const N: usize>(key_frames: &[KeyFrame<V, N>], frame: u32) -> usize {
    key_frames
        .partition_point(|kf| kf.position <= frame)
        .saturating_sub(1)
}

/// Computes the interpolated component values at `frame`.
///
/// Before the first key frame and from the last key frame onward the
/// boundary values are returned verbatim; there is no extrapolation. Within
/// a segment, each component measures its completion fraction against its
/// *own* configured frame count and saturates at 1.0 once that count has
/// elapsed. A component with a shorter duration than its siblings reaches
/// its target early and holds it until the next segment begins. A frame
/// count of 0 counts as already complete.
fn interpolate_at<V: TweenValue, const N: usize>(
    key_frames: &[KeyFrame<V, N>],
    frame: u32,
) -> [V; N] {
    let Some(first) = key_frames.first() else {
        return [V::ZERO; N];
    };
    if frame <= first.position {
        return first.values;
    }

    let index = base_index(key_frames, frame);
    if index + 1 >= key_frames.len() {
        return key_frames[index].values;
    }

    let base = &key_frames[index];
    let next = &key_frames[index + 1];
    let elapsed = frame - base.position;

    let mut values = [V::ZERO; N];
    for component in 0..N {
        let frames = base.frame_counts[component];
        let t = if frames == 0 {
            1.0
        } else {
            (elapsed as f32 / frames as f32).min(1.0)
        };
        values[component] = (base.easings[component])(t, base.values[component], next.values[component]);
    }
    values
}
