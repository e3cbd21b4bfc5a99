use glam::DMat4;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::keyboard::KeyAction;

/// Platform-agnostic input events.
///
/// The host window layer translates its native events into these and
/// hands each one to every [`InputSubscriber`](super::InputSubscriber)
/// through [`dispatch`](super::dispatch).
///
/// # Example
///
/// ```
/// use arcball::input::{dispatch, InputEvent};
/// use arcball::ArcballController;
/// use glam::DMat4;
///
/// let mut arcball = ArcballController::new(&(512_u32, 512_u32), DMat4::IDENTITY);
/// let consumed = dispatch(
///     &InputEvent::CursorMoved { x: 100.0, y: 200.0 },
///     &mut [&mut arcball],
/// );
/// assert!(!consumed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute window position.
    CursorMoved {
        /// Horizontal position in physical pixels, from the left edge.
        x: f64,
        /// Vertical position in physical pixels, from the top edge.
        y: f64,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Framebuffer resized; carries the projection rebuilt for the new
    /// size.
    ViewportChanged {
        /// New framebuffer width in pixels.
        width: f64,
        /// New framebuffer height in pixels.
        height: f64,
        /// Projection matrix matching the new size.
        projection: DMat4,
    },
    /// A key binding fired.
    Action(KeyAction),
}

/// Platform-agnostic mouse button identifier.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}

#[cfg(feature = "viewer")]
impl MouseButton {
    /// Map a winit button; back/forward/other buttons have no equivalent.
    #[must_use]
    pub fn from_winit(button: winit::event::MouseButton) -> Option<Self> {
        match button {
            winit::event::MouseButton::Left => Some(Self::Left),
            winit::event::MouseButton::Right => Some(Self::Right),
            winit::event::MouseButton::Middle => Some(Self::Middle),
            _ => None,
        }
    }
}
