use super::event::InputEvent;

/// Receiver of platform-agnostic input events.
///
/// Subscribers never forward events to one another; the host hands each
/// event to all of them through [`dispatch`].
pub trait InputSubscriber {
    /// React to `event`. Returns `true` if the subscriber acted on it.
    fn handle_event(&mut self, event: &InputEvent) -> bool;
}

/// Deliver `event` to every subscriber in order.
///
/// Delivery does not stop at the first consumer. Returns `true` if any
/// subscriber consumed the event.
pub fn dispatch(
    event: &InputEvent,
    subscribers: &mut [&mut dyn InputSubscriber],
) -> bool {
    subscribers
        .iter_mut()
        .fold(false, |consumed, subscriber| {
            subscriber.handle_event(event) || consumed
        })
}
