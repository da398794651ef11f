//! Gemini `generateContent` client used as the OCR engine.

use crate::{
    ClipboardImage, CoreError, CoreResult, Credential,
    ocr::{
        DEFAULT_ENDPOINT, DEFAULT_MODEL, GenerateContentRequest, GenerateContentResponse,
        OcrEngine,
    },
};

use std::{panic::Location, time::Instant};

use async_trait::async_trait;
use base64::{Engine, engine::general_purpose::STANDARD};
use error_location::ErrorLocation;
use tracing::{debug, instrument, warn};

/// Header carrying the API key.
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Where requests go and which model answers them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OcrOptions {
    /// REST base, e.g. `https://generativelanguage.googleapis.com/v1beta`.
    pub endpoint: String,
    /// Model name, e.g. `gemini-2.0-flash`.
    pub model: String,
}

impl Default for OcrOptions {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

/// OCR engine backed by a Gemini multimodal model.
#[derive(Debug, Clone)]
pub struct GeminiOcrClient {
    http: reqwest::Client,
    credential: Credential,
    options: OcrOptions,
}

impl GeminiOcrClient {
    /// Client against the default endpoint and model.
    pub fn new(credential: Credential) -> Self {
        Self::with_options(credential, OcrOptions::default())
    }

    /// Client against a specific endpoint and model.
    pub fn with_options(credential: Credential, options: OcrOptions) -> Self {
        Self {
            http: reqwest::Client::new(),
            credential,
            options,
        }
    }

    /// Full `generateContent` URL for the configured model.
    pub fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.options.endpoint.trim_end_matches('/'),
            self.options.model
        )
    }
}

#[async_trait]
impl OcrEngine for GeminiOcrClient {
    #[instrument(
        skip(self, image),
        fields(model = %self.options.model, width = image.width(), height = image.height())
    )]
    async fn extract_text(&self, image: &ClipboardImage) -> CoreResult<Option<String>> {
        let png = image.to_png()?;
        let body = GenerateContentRequest::ocr(STANDARD.encode(&png));

        let start = Instant::now();

        let response = self
            .http
            .post(self.url())
            .header(API_KEY_HEADER, self.credential.expose())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            warn!(status = %status, "OCR service rejected the request");
            return Err(CoreError::OcrRequestFailed {
                reason: format!("{} returned {}: {}", self.options.model, status, detail),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        let text = parsed.text();

        debug!(
            png_len = png.len(),
            duration_ms = start.elapsed().as_millis(),
            text_len = text.as_ref().map_or(0, String::len),
            "OCR response received"
        );

        Ok(text)
    }
}
