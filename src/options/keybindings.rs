use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping key codes to actions.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format: `"KeyR"`,
/// `"F11"`, `"Escape"`. Several keys may trigger the same action.
pub struct KeybindingOptions {
    /// Maps key string → action (e.g. `"KeyR"` → `ResetRotation`).
    pub bindings: HashMap<String, KeyAction>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            ("KeyR".into(), KeyAction::ResetRotation),
            ("KeyF".into(), KeyAction::ToggleFullscreen),
            ("F11".into(), KeyAction::ToggleFullscreen),
            ("Escape".into(), KeyAction::Quit),
            ("KeyQ".into(), KeyAction::Quit),
        ]);
        Self { bindings }
    }
}

impl KeybindingOptions {
    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.bindings.get(key).copied()
    }
}
