//! Tweenline
//!
//! Frame-based in-betweening: key-frame timelines, per-component easing,
//! and step/seek/jump events.
//!
//! # Features
//!
//! - **Fluent timelines**: `from(..).to(..).via(..).during(..).build()`
//! - **Per-component control**: each component gets its own easing function
//!   and frame count; shorter components finish early and hold
//! - **Pure and synchronous**: the caller owns time and drives the tween
//!   with `step`, `seek` and `jump`
//! - **Listeners**: per-operation callback lists with one-shot removal
//!
//! ```
//! use tweenline::{easing, from, Event, Response};
//!
//! let mut tween = from([0.0f32])
//!     .to([100.0])
//!     .via(easing::cubic_in_out)
//!     .during(60)
//!     .build();
//!
//! tween.on(Event::Step, |t| {
//!     if t.progress() >= 1.0 {
//!         Response::Unsubscribe
//!     } else {
//!         Response::Continue
//!     }
//! });
//!
//! let value = tween.step(16);
//! assert!(value[0] > 0.0);
//! ```

pub mod easing;
pub mod event;
pub mod keyframe;
pub mod timeline;
pub mod tween;
pub mod value;

pub use easing::EasingFn;
pub use event::{Event, Response};
pub use keyframe::KeyFrame;
pub use timeline::{from, Timeline};
pub use tween::{Listener, Tween};
pub use value::TweenValue;
