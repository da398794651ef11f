//! Clipboard integration.
//!
//! Reads the clipboard image for OCR and replaces the clipboard contents with
//! the extracted text. Lives on the main thread next to the tray icon.

use crate::AppResult;

use clip_ocr_core::{ClipboardImage, CoreError, CoreResult};

use std::panic::Location;

use arboard::Clipboard;
use error_location::ErrorLocation;
use tracing::{debug, info, instrument};

/// Clipboard handler backed by `arboard`.
pub struct ClipboardHandler {
    pub(crate) clipboard: Clipboard,
}

impl ClipboardHandler {
    /// Create a new clipboard handler.
    #[track_caller]
    #[instrument]
    pub fn new() -> AppResult<Self> {
        let clipboard = Clipboard::new().map_err(|e| CoreError::Clipboard {
            reason: format!("Failed to initialize clipboard: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!("ClipboardHandler initialized");

        Ok(Self { clipboard })
    }

    /// Read the current clipboard image as RGBA.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn read_image(&mut self) -> CoreResult<ClipboardImage> {
        let image = self.clipboard.get_image().map_err(|e| match e {
            arboard::Error::ContentNotAvailable => CoreError::NoClipboardImage {
                location: ErrorLocation::from(Location::caller()),
            },
            other => CoreError::Clipboard {
                reason: format!("Failed to read clipboard image: {}", other),
                location: ErrorLocation::from(Location::caller()),
            },
        })?;

        let width = u32::try_from(image.width).map_err(|_| CoreError::Clipboard {
            reason: format!("Clipboard image too wide: {}", image.width),
            location: ErrorLocation::from(Location::caller()),
        })?;
        let height = u32::try_from(image.height).map_err(|_| CoreError::Clipboard {
            reason: format!("Clipboard image too tall: {}", image.height),
            location: ErrorLocation::from(Location::caller()),
        })?;

        debug!(width, height, "Clipboard image read");

        Ok(ClipboardImage::new(width, height, image.bytes.into_owned()))
    }

    /// Clear the clipboard, then set `text` as plain text.
    #[track_caller]
    #[instrument(skip(self, text))]
    pub fn write_text(&mut self, text: &str) -> CoreResult<()> {
        self.clipboard.clear().map_err(|e| CoreError::Clipboard {
            reason: format!("Failed to clear clipboard: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        self.clipboard
            .set_text(text)
            .map_err(|e| CoreError::Clipboard {
                reason: format!("Failed to set clipboard: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        debug!(text_len = text.len(), "Text copied to clipboard");

        Ok(())
    }
}
