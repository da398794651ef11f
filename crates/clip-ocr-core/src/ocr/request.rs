use crate::ocr::{
    IMAGE_MIME_TYPE, MAX_OUTPUT_TOKENS, OCR_SYSTEM_INSTRUCTION, RESPONSE_MIME_TYPE, TEMPERATURE,
    TOP_K, TOP_P,
};

use serde::{Deserialize, Serialize};

/// Body of a `models/{model}:generateContent` call.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateContentRequest {
    pub(crate) contents: Vec<Content>,
    pub(crate) system_instruction: Content,
    pub(crate) generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    /// OCR request: an empty prompt followed by the base64 PNG.
    pub(crate) fn ocr(png_base64: String) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![
                    Part::text(""),
                    Part {
                        text: None,
                        inline_data: Some(InlineData {
                            mime_type: IMAGE_MIME_TYPE.to_string(),
                            data: png_base64,
                        }),
                    },
                ],
            }],
            system_instruction: Content {
                role: None,
                parts: vec![Part::text(OCR_SYSTEM_INSTRUCTION)],
            },
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                top_p: TOP_P,
                top_k: TOP_K,
                max_output_tokens: MAX_OUTPUT_TOKENS,
                response_mime_type: RESPONSE_MIME_TYPE.to_string(),
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) role: Option<String>,
    #[serde(default)]
    pub(crate) parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) inline_data: Option<InlineData>,
}

impl Part {
    fn text(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            inline_data: None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InlineData {
    pub(crate) mime_type: String,
    pub(crate) data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerationConfig {
    pub(crate) temperature: f64,
    pub(crate) top_p: f64,
    pub(crate) top_k: u32,
    pub(crate) max_output_tokens: u32,
    pub(crate) response_mime_type: String,
}

/// The subset of the `generateContent` response we read.
#[derive(Debug, Deserialize)]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    pub(crate) candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Candidate {
    #[serde(default)]
    pub(crate) content: Option<Content>,
}

impl GenerateContentResponse {
    /// Text of the first candidate, with its text parts concatenated.
    ///
    /// `None` when there is no candidate or the text is empty.
    pub(crate) fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;

        let text: String = content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();

        (!text.is_empty()).then_some(text)
    }
}
