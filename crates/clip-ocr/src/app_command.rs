use uuid::Uuid;

/// Commands sent from hotkey handler to main application.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// OCR the clipboard image.
    RunOcr {
        /// Unique ID correlating the log lines of this invocation.
        session_id: Uuid,
    },
}
