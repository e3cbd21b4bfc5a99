use serde::{Deserialize, Serialize};

/// Viewer actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML files stay readable:
/// ```toml
/// [keybindings.bindings]
/// KeyR = "reset_rotation"
/// F11 = "toggle_fullscreen"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Drop the committed rotation back to identity.
    ResetRotation,
    /// Switch between windowed and borderless fullscreen.
    ToggleFullscreen,
    /// Close the viewer.
    Quit,
}
