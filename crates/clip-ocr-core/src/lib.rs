//! Clip-OCR Core Library
//!
//! Platform-independent pieces of the clipboard OCR accessory: credential
//! resolution, the Gemini OCR client, the status indicator state machine and
//! the shortcut flow that ties them together. Platform primitives (clipboard,
//! menu-bar marker) are supplied by the caller through [`ClipboardAccess`] and
//! [`StatusIndicator`].
//!
//! # Example
//!
//! ```no_run
//! use clip_ocr_core::{
//!     ClipboardAccess, CoreResult, CredentialSources, GeminiOcrClient, ShortcutFlow,
//!     StatusIndicator,
//! };
//!
//! async fn run_once<C, S>(clipboard: C, indicator: S) -> CoreResult<()>
//! where
//!     C: ClipboardAccess,
//!     S: StatusIndicator,
//! {
//!     let credential = CredentialSources::from_env().resolve()?;
//!     let ocr = GeminiOcrClient::new(credential);
//!
//!     let mut flow = ShortcutFlow::new(clipboard, ocr, indicator);
//!     let outcome = flow.run().await;
//!
//!     println!("Finished: {:?}", outcome);
//!     Ok(())
//! }
//! ```

mod clipboard;
mod credential;
mod error;
mod flow;
mod ocr;
mod status;

pub use {
    clipboard::{ClipboardAccess, ClipboardImage},
    credential::{
        API_KEY_ENV, CONFIG_HOME_ENV, CREDENTIAL_FILE, CREDENTIAL_KEY, Credential,
        CredentialSources,
    },
    error::{CoreError, Result as CoreResult},
    flow::{DEFAULT_DWELL, FlowOutcome, InvocationGate, InvocationPermit, ShortcutFlow},
    ocr::{
        DEFAULT_ENDPOINT, DEFAULT_MODEL, GeminiOcrClient, OCR_SYSTEM_INSTRUCTION, OcrEngine,
        OcrOptions,
    },
    status::{StatusIndicator, StatusState, StatusTracker},
};

#[cfg(test)]
mod tests;
