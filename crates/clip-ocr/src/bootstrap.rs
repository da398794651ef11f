//! Startup checks that run before any UI or shortcut exists.

use crate::{AppError, AppResult, config::Config};

use clip_ocr_core::{Credential, CredentialSources};

use global_hotkey::hotkey::HotKey;
use tracing::{info, instrument};

/// Exit status when no API credential could be found.
pub(crate) const EXIT_MISSING_CREDENTIAL: u8 = 2;

/// Exit status for every other startup failure.
pub(crate) const EXIT_STARTUP_FAILED: u8 = 1;

/// Everything the event loop needs, resolved up front.
#[derive(Debug)]
pub(crate) struct Startup {
    pub(crate) credential: Credential,
    pub(crate) config: Config,
    pub(crate) hotkey: HotKey,
}

impl Startup {
    /// Resolve the credential, then load settings.
    ///
    /// The credential comes first: without it `load_config` is never called,
    /// so the settings file is not created.
    #[instrument(skip_all)]
    pub(crate) fn prepare<F>(sources: &CredentialSources, load_config: F) -> AppResult<Self>
    where
        F: FnOnce() -> AppResult<Config>,
    {
        let credential = sources.resolve()?;
        let config = load_config()?;
        let hotkey = config.shortcut.hotkey()?;

        info!(
            shortcut = %config.shortcut.binding,
            model = %config.ocr.model,
            dwell_secs = config.status.dwell_secs,
            "Startup checks passed"
        );

        Ok(Self {
            credential,
            config,
            hotkey,
        })
    }
}

/// Process exit status for a startup failure.
pub(crate) fn exit_status(error: &AppError) -> u8 {
    if error.is_missing_credential() {
        EXIT_MISSING_CREDENTIAL
    } else {
        EXIT_STARTUP_FAILED
    }
}
