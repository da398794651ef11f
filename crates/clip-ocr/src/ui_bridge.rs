//! Core capability traits implemented by posting to the UI thread.

use crate::UiCommand;

use clip_ocr_core::{
    ClipboardAccess, ClipboardImage, CoreError, CoreResult, StatusIndicator, StatusState,
};

use std::panic::Location;

use async_trait::async_trait;
use error_location::ErrorLocation;
use tao::event_loop::EventLoopProxy;
use tokio::sync::oneshot;
use tracing::warn;

/// Clipboard access executed on the main thread.
pub struct UiClipboard {
    proxy: EventLoopProxy<UiCommand>,
}

impl UiClipboard {
    /// Clipboard bridge posting to `proxy`.
    pub fn new(proxy: EventLoopProxy<UiCommand>) -> Self {
        Self { proxy }
    }

    #[track_caller]
    fn dispatch(&self, command: UiCommand) -> CoreResult<()> {
        self.proxy
            .send_event(command)
            .map_err(|_| CoreError::Clipboard {
                reason: "UI event loop is closed".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

#[track_caller]
fn reply_dropped() -> CoreError {
    CoreError::Clipboard {
        reason: "UI thread dropped the clipboard request".to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}

#[async_trait]
impl ClipboardAccess for UiClipboard {
    async fn read_image(&mut self) -> CoreResult<ClipboardImage> {
        let (reply, response) = oneshot::channel();
        self.dispatch(UiCommand::ReadClipboardImage { reply })?;
        response.await.map_err(|_| reply_dropped())?
    }

    async fn write_text(&mut self, text: String) -> CoreResult<()> {
        let (reply, response) = oneshot::channel();
        self.dispatch(UiCommand::WriteClipboardText { text, reply })?;
        response.await.map_err(|_| reply_dropped())?
    }
}

/// Menu-bar marker driven from the runtime thread.
pub struct TrayStatus {
    proxy: EventLoopProxy<UiCommand>,
}

impl TrayStatus {
    /// Marker bridge posting to `proxy`.
    pub fn new(proxy: EventLoopProxy<UiCommand>) -> Self {
        Self { proxy }
    }

    fn post(&self, command: UiCommand) {
        if self.proxy.send_event(command).is_err() {
            warn!("UI event loop is closed, marker not updated");
        }
    }
}

impl StatusIndicator for TrayStatus {
    fn show(&mut self, state: StatusState) {
        self.post(UiCommand::ShowStatus(state));
    }

    fn clear(&mut self) {
        self.post(UiCommand::ClearStatus);
    }
}
