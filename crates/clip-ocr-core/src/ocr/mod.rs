mod gemini;
mod request;

pub use gemini::{GeminiOcrClient, OcrOptions};

pub(crate) use request::{GenerateContentRequest, GenerateContentResponse};

use crate::{ClipboardImage, CoreResult};

use async_trait::async_trait;

/// Gemini REST endpoint base.
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Multimodal model used for OCR.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// System instruction sent with every request.
pub const OCR_SYSTEM_INSTRUCTION: &str = "Perform OCR on the provided image. \
    Respond with the extracted text only, exactly as it appears, \
    without commentary, explanations, or formatting.";

pub(crate) const TEMPERATURE: f64 = 1.0;
pub(crate) const TOP_P: f64 = 0.95;
pub(crate) const TOP_K: u32 = 40;
pub(crate) const MAX_OUTPUT_TOKENS: u32 = 8192;
pub(crate) const RESPONSE_MIME_TYPE: &str = "text/plain";
pub(crate) const IMAGE_MIME_TYPE: &str = "image/png";

/// Something that turns an image into text.
#[async_trait]
pub trait OcrEngine: Send + Sync {
    /// Extract the text shown in `image`.
    ///
    /// `Ok(None)` means the call succeeded but returned no text; transport and
    /// remote failures are errors.
    async fn extract_text(&self, image: &ClipboardImage) -> CoreResult<Option<String>>;
}
