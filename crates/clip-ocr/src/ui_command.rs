use clip_ocr_core::{ClipboardImage, CoreResult, StatusState};

use tokio::sync::oneshot;

/// Commands sent from the async runtime to the main UI thread.
///
/// The main thread owns `TrayManager` (because `TrayIcon` is `!Send`) and the
/// clipboard, so every marker and clipboard operation flows through this enum.
#[derive(Debug)]
pub enum UiCommand {
    /// Replace the menu-bar marker with one for this state.
    ShowStatus(StatusState),
    /// Remove the menu-bar marker.
    ClearStatus,
    /// Read the clipboard image and send it back.
    ReadClipboardImage {
        /// Where the result goes.
        reply: oneshot::Sender<CoreResult<ClipboardImage>>,
    },
    /// Clear the clipboard and set plain text.
    WriteClipboardText {
        /// Text to place on the clipboard.
        text: String,
        /// Where the result goes.
        reply: oneshot::Sender<CoreResult<()>>,
    },
    /// Shut down the application. The main thread will exit the event loop.
    Shutdown,
}
