use crate::config::{default_endpoint, default_model};

use clip_ocr_core::OcrOptions;
use serde::{Deserialize, Serialize};

/// Remote OCR model configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OcrConfig {
    /// Gemini REST base URL.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Gemini model name.
    #[serde(default = "default_model")]
    pub model: String,
}

impl OcrConfig {
    /// Client options for this configuration.
    pub fn to_options(&self) -> OcrOptions {
        OcrOptions {
            endpoint: self.endpoint.clone(),
            model: self.model.clone(),
        }
    }
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
        }
    }
}
