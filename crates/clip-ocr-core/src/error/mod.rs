use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Core errors with source location tracking.
#[derive(Error, Debug)]
pub enum CoreError {
    /// No API key in the environment or the credential file.
    #[error("No API credential found in environment or config file {location}")]
    MissingCredential {
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The clipboard does not currently hold an image.
    #[error("Clipboard holds no image {location}")]
    NoClipboardImage {
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Transport or remote failure while calling the OCR service.
    #[error("OCR request failed: {reason} {location}")]
    OcrRequestFailed {
        /// Description of the failure (network, auth, quota, ...).
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The clipboard bitmap could not be encoded for upload.
    #[error("Failed to encode clipboard image: {reason} {location}")]
    ImageEncodingFailed {
        /// Description of the encoding error.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Clipboard read or write failed for a reason other than a missing image.
    #[error("Clipboard error: {reason} {location}")]
    Clipboard {
        /// Description of the clipboard error.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A shortcut press arrived while another invocation was still running.
    #[error("An OCR invocation is already in flight {location}")]
    InvocationInFlight {
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

impl From<reqwest::Error> for CoreError {
    #[track_caller]
    fn from(source: reqwest::Error) -> Self {
        CoreError::OcrRequestFailed {
            reason: source.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Result type alias using [`CoreError`].
pub type Result<T> = std::result::Result<T, CoreError>;
