//! Credential resolution from the environment or a `KEY=VALUE` file.
//!
//! The environment variable always wins. The file is optional; a missing or
//! unreadable file is just a fallback miss.

use crate::{
    CoreError, CoreResult,
    credential::{API_KEY_ENV, CONFIG_HOME_ENV, CREDENTIAL_FILE, CREDENTIAL_KEY, Credential},
};

use std::{env, fmt, fs, panic::Location, path::PathBuf};

use directories::BaseDirs;
use error_location::ErrorLocation;
use tracing::{debug, info, instrument};

/// Snapshot of every place a credential may come from.
///
/// Built from the process environment with [`CredentialSources::from_env`];
/// tests construct it directly instead of mutating the environment.
#[derive(Clone, Default)]
pub struct CredentialSources {
    /// Value of `GEMINI_API_KEY`, if set.
    pub api_key: Option<String>,
    /// Value of `XDG_CONFIG_HOME`, if set and non-empty.
    pub config_home: Option<PathBuf>,
    /// The user's home directory, used for the `~/.config` default.
    pub home_dir: Option<PathBuf>,
}

impl CredentialSources {
    /// Capture the sources from the current process environment.
    pub fn from_env() -> Self {
        Self {
            api_key: env::var(API_KEY_ENV).ok(),
            config_home: env::var_os(CONFIG_HOME_ENV)
                .filter(|value| !value.is_empty())
                .map(PathBuf::from),
            home_dir: BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf()),
        }
    }

    /// Path of the credential file, if a config base directory is known.
    pub fn config_file(&self) -> Option<PathBuf> {
        self.config_home
            .clone()
            .or_else(|| self.home_dir.as_ref().map(|home| home.join(".config")))
            .map(|base| base.join(CREDENTIAL_FILE))
    }

    /// Resolve the credential: environment first, then the credential file.
    ///
    /// Fails with [`CoreError::MissingCredential`] when neither yields a
    /// non-empty value.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn resolve(&self) -> CoreResult<Credential> {
        if let Some(key) = self
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
        {
            info!(source = API_KEY_ENV, "API credential resolved");
            return Ok(Credential::new(key.to_string()));
        }

        if let Some(path) = self.config_file() {
            match fs::read_to_string(&path) {
                Ok(contents) => {
                    if let Some(key) = parse_credential_file(&contents) {
                        info!(source = ?path, "API credential resolved");
                        return Ok(Credential::new(key));
                    }
                    debug!(path = ?path, "Credential file has no {} entry", CREDENTIAL_KEY);
                }
                Err(e) => debug!(path = ?path, error = %e, "Credential file not readable"),
            }
        }

        Err(CoreError::MissingCredential {
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

impl fmt::Debug for CredentialSources {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialSources")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("config_home", &self.config_home)
            .field("home_dir", &self.home_dir)
            .finish()
    }
}

/// First non-empty `GEMINI_API_KEY=...` value in `contents`.
///
/// Lines without `=` and lines with other keys are skipped.
pub(crate) fn parse_credential_file(contents: &str) -> Option<String> {
    contents
        .lines()
        .filter_map(|line| line.split_once('='))
        .filter(|(key, _)| key.trim() == CREDENTIAL_KEY)
        .map(|(_, value)| value.trim())
        .find(|value| !value.is_empty())
        .map(str::to_string)
}
