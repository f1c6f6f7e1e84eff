use reqwest::StatusCode;
use std::fmt::{self, Formatter};
use thiserror::Error;
use url::Url;

/// Caller contract violations, raised before any request is built.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("[E001] Malformed remapping rule: '{0}'\n\nSuggestions:\n  • Remapping rules have the form 'prefix=replacement'\n  • Both sides must be non-empty\n  • Example: @openzeppelin/=lib/openzeppelin-contracts/")]
    MalformedRemapping(String),

    #[error("[E010] Unsupported chain id: {0}\n\nSuggestions:\n  • Use 314 for the Filecoin mainnet\n  • Use 314159 for the Calibration testnet")]
    UnsupportedChainId(u64),

    #[error("[E011] Invalid endpoint URL")]
    Url(#[from] url::ParseError),
}

impl ConfigError {
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::MalformedRemapping(_) => "E001",
            Self::UnsupportedChainId(_) => "E010",
            Self::Url(_) => "E011",
        }
    }
}

#[derive(Debug, Error)]
pub struct RequestFailure {
    pub url: Url,
    pub status: StatusCode,
    pub msg: String,
}

impl RequestFailure {
    pub fn new(url: Url, status: StatusCode, msg: impl Into<String>) -> Self {
        Self {
            url,
            status,
            msg: msg.into(),
        }
    }
}

impl fmt::Display for RequestFailure {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(
            formatter,
            "{:?}\n returned {}, with:\n{}",
            self.url, self.status, self.msg
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_remapping_display() {
        let error = ConfigError::MalformedRemapping("@oz/lib/oz/".to_string());
        let message = format!("{error}");
        assert!(message.contains("[E001]"));
        assert!(message.contains("@oz/lib/oz/"));
        assert!(message.contains("prefix=replacement"));
        assert_eq!(error.error_code(), "E001");
    }

    #[test]
    fn test_unsupported_chain_id_display() {
        let error = ConfigError::UnsupportedChainId(1);
        let message = format!("{error}");
        assert!(message.contains("[E010]"));
        assert!(message.contains("314"));
        assert_eq!(error.error_code(), "E010");
    }

    #[test]
    fn test_request_failure_display() {
        let url = Url::parse("https://filfox.info/api/v1/tools/verifyContract").unwrap();
        let failure = RequestFailure::new(url, StatusCode::BAD_GATEWAY, "upstream down");
        let message = format!("{failure}");
        assert!(message.contains("502"));
        assert!(message.contains("upstream down"));
    }
}
