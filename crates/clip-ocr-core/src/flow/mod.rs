//! The shortcut flow: clipboard image in, OCR text out.
//!
//! One [`ShortcutFlow::run`] per accepted shortcut press. Every failure is
//! absorbed here and turned into a Failure marker plus a log line.

mod gate;

pub use gate::{InvocationGate, InvocationPermit};

use crate::{ClipboardAccess, CoreError, OcrEngine, StatusIndicator, StatusState, StatusTracker};

use std::time::Duration;

use tracing::{debug, error, instrument, warn};

/// How long a terminal marker stays visible before it is cleared.
pub const DEFAULT_DWELL: Duration = Duration::from_secs(5);

/// How an invocation ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowOutcome {
    /// Clipboard now holds the extracted text.
    Copied {
        /// Length in bytes of the text written.
        text_len: usize,
    },
    /// Nothing image-like on the clipboard.
    NoClipboardImage,
    /// The clipboard could not be read at all.
    ClipboardReadFailed,
    /// The OCR call failed.
    OcrFailed,
    /// The OCR call succeeded but returned no text.
    EmptyResult,
    /// Text came back but could not be written to the clipboard.
    ClipboardWriteFailed,
}

impl FlowOutcome {
    /// The marker shown for this outcome.
    pub fn terminal_state(&self) -> StatusState {
        match self {
            FlowOutcome::Copied { .. } => StatusState::Success,
            _ => StatusState::Failure,
        }
    }
}

/// Clipboard, OCR engine and status marker for one shortcut.
pub struct ShortcutFlow<C, O, S> {
    clipboard: C,
    ocr: O,
    status: StatusTracker<S>,
    dwell: Duration,
}

impl<C, O, S> ShortcutFlow<C, O, S>
where
    C: ClipboardAccess,
    O: OcrEngine,
    S: StatusIndicator,
{
    /// Flow with the default dwell interval.
    pub fn new(clipboard: C, ocr: O, indicator: S) -> Self {
        Self {
            clipboard,
            ocr,
            status: StatusTracker::new(indicator),
            dwell: DEFAULT_DWELL,
        }
    }

    /// Override how long the terminal marker stays up.
    pub fn with_dwell(mut self, dwell: Duration) -> Self {
        self.dwell = dwell;
        self
    }

    /// The status tracker owned by this flow.
    pub fn status(&self) -> &StatusTracker<S> {
        &self.status
    }

    /// The clipboard this flow reads from and writes to.
    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    /// Run one invocation to completion, including the dwell and clear.
    #[instrument(skip(self), fields(dwell_ms = self.dwell.as_millis()))]
    pub async fn run(&mut self) -> FlowOutcome {
        self.status.transition(StatusState::Processing);

        let outcome = self.extract_and_copy().await;
        self.status.transition(outcome.terminal_state());

        debug!(outcome = ?outcome, "Terminal marker shown");

        tokio::time::sleep(self.dwell).await;
        self.status.reset();

        outcome
    }

    async fn extract_and_copy(&mut self) -> FlowOutcome {
        let image = match self.clipboard.read_image().await {
            Ok(image) => image,
            Err(e @ CoreError::NoClipboardImage { .. }) => {
                warn!(error = %e, "Nothing to OCR");
                return FlowOutcome::NoClipboardImage;
            }
            Err(e) => {
                error!(error = ?e, "Failed to read clipboard image");
                return FlowOutcome::ClipboardReadFailed;
            }
        };

        let text = match self.ocr.extract_text(&image).await {
            Ok(Some(text)) => text,
            Ok(None) => {
                warn!("OCR returned no text");
                return FlowOutcome::EmptyResult;
            }
            Err(e) => {
                error!(error = ?e, "OCR request failed");
                return FlowOutcome::OcrFailed;
            }
        };
        drop(image);

        let text_len = text.len();
        match self.clipboard.write_text(text).await {
            Ok(()) => FlowOutcome::Copied { text_len },
            Err(e) => {
                error!(error = ?e, "Failed to write OCR text to clipboard");
                FlowOutcome::ClipboardWriteFailed
            }
        }
    }
}
