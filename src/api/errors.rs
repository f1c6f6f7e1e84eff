use thiserror::Error;
use url::Url;

use crate::errors::ConfigError;

#[derive(Debug, Error)]
pub enum ApiClientError {
    #[error("[E006] Invalid endpoint URL: {0}\n\nSuggestions:\n  • Provide a valid HTTP or HTTPS URL\n  • Ensure the URL includes the protocol (http:// or https://)")]
    CannotBeBase(Url),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ApiClientError {
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::CannotBeBase(_) => "E006",
            Self::Config(config) => config.error_code(),
        }
    }
}
