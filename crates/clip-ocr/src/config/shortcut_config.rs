use crate::{AppError, AppResult, config::default_shortcut};

use std::panic::Location;

use error_location::ErrorLocation;
use global_hotkey::hotkey::HotKey;
use serde::{Deserialize, Serialize};

/// Global shortcut configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortcutConfig {
    /// Binding in `global-hotkey` syntax, e.g. `control+super+shift+Digit1`.
    #[serde(default = "default_shortcut")]
    pub binding: String,
}

impl ShortcutConfig {
    /// Parse the binding into a registrable hotkey.
    #[track_caller]
    pub fn hotkey(&self) -> AppResult<HotKey> {
        self.binding
            .parse::<HotKey>()
            .map_err(|e| AppError::ConfigError {
                reason: format!("Invalid shortcut binding {:?}: {}", self.binding, e),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

impl Default for ShortcutConfig {
    fn default() -> Self {
        Self {
            binding: default_shortcut(),
        }
    }
}
