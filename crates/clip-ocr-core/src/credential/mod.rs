mod sources;

pub use sources::CredentialSources;

pub(crate) use sources::parse_credential_file;

use std::fmt;

/// Environment variable holding the API key directly.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Environment variable overriding the config base directory.
pub const CONFIG_HOME_ENV: &str = "XDG_CONFIG_HOME";

/// Credential file path, relative to the config base directory.
pub const CREDENTIAL_FILE: &str = "clip-ocr/config";

/// Key looked up in the credential file.
pub const CREDENTIAL_KEY: &str = "GEMINI_API_KEY";

/// API key authorizing calls to the OCR model.
///
/// Read once at startup and never written anywhere. `Debug` output is
/// redacted so the key cannot leak through tracing fields.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub(crate) fn new(secret: String) -> Self {
        Self(secret)
    }

    /// The raw secret, for building request headers.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}
