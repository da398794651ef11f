#[allow(clippy::module_inception)]
mod config;
mod ocr_config;
mod shortcut_config;
mod status_config;

pub(crate) use {
    config::Config, ocr_config::OcrConfig, shortcut_config::ShortcutConfig,
    status_config::StatusConfig,
};

use clip_ocr_core::{DEFAULT_DWELL, DEFAULT_ENDPOINT, DEFAULT_MODEL};

/// Control+Command+Shift+1.
pub(crate) const DEFAULT_SHORTCUT: &str = "control+super+shift+Digit1";

pub(crate) fn default_shortcut() -> String {
    DEFAULT_SHORTCUT.to_string()
}

pub(crate) fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

pub(crate) fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

pub(crate) fn default_dwell_secs() -> u64 {
    DEFAULT_DWELL.as_secs()
}
