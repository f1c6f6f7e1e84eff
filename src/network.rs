use url::Url;

use crate::errors::ConfigError;

pub const MAINNET_CHAIN_ID: u64 = 314;
pub const CALIBRATION_CHAIN_ID: u64 = 314_159;

const MAINNET_ENDPOINT: &str = "https://filfox.info/api/v1/tools/verifyContract";
const CALIBRATION_ENDPOINT: &str = "https://calibration.filfox.info/api/v1/tools/verifyContract";

/// Immutable chain id to verification endpoint binding, handed to the
/// API client at construction.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Network {
    chain_id: u64,
    endpoint: Url,
}

impl Network {
    /// # Errors
    ///
    /// Will return `Err` for any chain id other than Filecoin mainnet
    /// (314) or the Calibration testnet (314159), before any request
    /// is built.
    pub fn from_chain_id(chain_id: u64) -> Result<Self, ConfigError> {
        let endpoint = match chain_id {
            MAINNET_CHAIN_ID => MAINNET_ENDPOINT,
            CALIBRATION_CHAIN_ID => CALIBRATION_ENDPOINT,
            other => return Err(ConfigError::UnsupportedChainId(other)),
        };

        Ok(Self {
            chain_id,
            endpoint: Url::parse(endpoint)?,
        })
    }

    #[must_use]
    pub const fn chain_id(&self) -> u64 {
        self.chain_id
    }

    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}
