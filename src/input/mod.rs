//! Input handling: platform-agnostic event types, key actions, and the
//! subscription model that fans window events out to interested parties.

/// Event subscription and fan-out.
pub mod dispatch;
/// Platform-agnostic input events.
pub mod event;
/// Key-bindable viewer actions.
pub mod keyboard;

pub use dispatch::{dispatch, InputSubscriber};
pub use event::{InputEvent, MouseButton};
pub use keyboard::KeyAction;
