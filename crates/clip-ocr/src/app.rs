use crate::{AppCommand, AppResult, TrayStatus, UiClipboard, UiCommand};

use clip_ocr_core::{GeminiOcrClient, InvocationGate, ShortcutFlow};

use std::time::Instant;

use tao::event_loop::EventLoopProxy;
use tokio::sync::{mpsc, watch};
use tracing::{Instrument, error, info, info_span, instrument, warn};
use uuid::Uuid;

/// The flow as wired in the running application.
pub(crate) type AppFlow = ShortcutFlow<UiClipboard, GeminiOcrClient, TrayStatus>;

/// Main application state.
///
/// Runs on the async runtime thread. Marker and clipboard work is posted back
/// to the main thread through `ui_proxy` because `TrayIcon` is `!Send` and
/// must remain on the UI thread.
pub struct App {
    pub(crate) flow: InvocationGate<AppFlow>,
    pub(crate) ui_proxy: EventLoopProxy<UiCommand>,
    pub(crate) command_rx: mpsc::Receiver<AppCommand>,
    pub(crate) shutdown_tx: watch::Sender<bool>,
}

impl App {
    /// Run the main application event loop.
    #[instrument(skip(self))]
    pub(crate) async fn run(mut self) -> AppResult<()> {
        info!("Clip-OCR starting");

        loop {
            tokio::select! {
                Some(cmd) = self.command_rx.recv() => {
                    match cmd {
                        AppCommand::RunOcr { session_id } => self.start_invocation(session_id),
                    }
                }

                signal = tokio::signal::ctrl_c() => {
                    if let Err(e) = signal {
                        error!(error = ?e, "Failed to listen for interrupt");
                    }
                    info!("Shutdown requested");
                    break;
                }
            }
        }

        let _ = self.shutdown_tx.send(true);

        if self.ui_proxy.send_event(UiCommand::Shutdown).is_err() {
            warn!("UI event loop already closed");
        }

        info!("Clip-OCR shut down successfully");

        Ok(())
    }

    /// Run one OCR invocation in the background.
    ///
    /// Presses arriving while an invocation (including its dwell) is still in
    /// flight are dropped.
    fn start_invocation(&self, session_id: Uuid) {
        let mut flow = match self.flow.try_acquire() {
            Ok(flow) => flow,
            Err(e) => {
                info!(session_id = %session_id, reason = %e, "Shortcut ignored");
                return;
            }
        };

        let span = info_span!("ocr_invocation", session_id = %session_id);

        tokio::task::spawn(
            async move {
                let start = Instant::now();
                let outcome = flow.run().await;

                info!(
                    duration_ms = start.elapsed().as_millis(),
                    outcome = ?outcome,
                    "Invocation complete"
                );
            }
            .instrument(span),
        );
    }
}
