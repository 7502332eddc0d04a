//! Event kinds and listener responses.

/// The mutating operations a listener can subscribe to.
///
/// Each kind has its own independent listener list; a `Step` listener never
/// fires for `seek` or `jump`, and vice versa.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Event {
    /// Fired after [`Tween::step`](crate::Tween::step).
    Step,
    /// Fired after [`Tween::seek`](crate::Tween::seek).
    Seek,
    /// Fired after [`Tween::jump`](crate::Tween::jump).
    Jump,
}

/// Returned by a listener to control its own subscription.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Response {
    /// Keep the listener registered.
    #[default]
    Continue,
    /// Remove the listener once the current dispatch pass completes.
    Unsubscribe,
}
