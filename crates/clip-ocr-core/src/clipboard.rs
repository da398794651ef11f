//! Clipboard capability and the bitmap type read from it.

use crate::{CoreError, CoreResult};

use std::{fmt, panic::Location};

use async_trait::async_trait;
use error_location::ErrorLocation;
use image::{ExtendedColorType, ImageEncoder, codecs::png::PngEncoder};

/// Bytes per RGBA pixel.
const RGBA_CHANNELS: usize = 4;

/// An RGBA bitmap taken from the system clipboard.
///
/// Owned by a single invocation and dropped once the OCR request is built.
#[derive(Clone, PartialEq, Eq)]
pub struct ClipboardImage {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl ClipboardImage {
    /// Wrap raw RGBA8 pixels. The buffer is validated when it is encoded.
    pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> Self {
        Self {
            width,
            height,
            rgba,
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA8 pixels, row-major.
    pub fn as_rgba(&self) -> &[u8] {
        &self.rgba
    }

    /// Encode the bitmap as PNG for upload.
    #[track_caller]
    pub fn to_png(&self) -> CoreResult<Vec<u8>> {
        let expected = self.width as usize * self.height as usize * RGBA_CHANNELS;

        if self.width == 0 || self.height == 0 || self.rgba.len() != expected {
            return Err(CoreError::ImageEncodingFailed {
                reason: format!(
                    "{}x{} image needs {} bytes, got {}",
                    self.width,
                    self.height,
                    expected,
                    self.rgba.len()
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let mut png = Vec::new();
        PngEncoder::new(&mut png)
            .write_image(
                &self.rgba,
                self.width,
                self.height,
                ExtendedColorType::Rgba8,
            )
            .map_err(|e| CoreError::ImageEncodingFailed {
                reason: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(png)
    }
}

impl fmt::Debug for ClipboardImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClipboardImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.rgba.len())
            .finish()
    }
}

/// Access to the shared system clipboard.
///
/// Implementations decide which thread actually touches the platform API;
/// the flow only awaits the result.
#[async_trait]
pub trait ClipboardAccess: Send {
    /// Read the current clipboard image.
    ///
    /// Returns [`CoreError::NoClipboardImage`] when the clipboard holds
    /// something other than an image (or nothing at all).
    async fn read_image(&mut self) -> CoreResult<ClipboardImage>;

    /// Clear the clipboard, then set `text` as its plain-text content.
    async fn write_text(&mut self, text: String) -> CoreResult<()>;
}
