//! Transfer configuration.
//!
//! Defaults come from the embedded constants. Callers override fields
//! explicitly; nothing here reads the environment.

use std::time::Duration;

use solana_program::pubkey::Pubkey;
use solana_sdk::commitment_config::CommitmentConfig;
use url::Url;

use crate::constants::{
    default_collection, mpl_core_program_id, DEFAULT_CONFIRM_POLL_INTERVAL_MS, DEFAULT_CONFIRM_TIMEOUT_SECS,
    DEFAULT_RPC_URL,
};
use crate::error::ConfigError;

#[derive(Debug, Clone)]
pub struct TransferConfig {
    pub rpc_url: String,
    pub program_id: Pubkey,
    pub collection: Pubkey,
    /// Level a submitted transaction must reach before the run succeeds.
    pub commitment: CommitmentConfig,
    /// How long to wait for `commitment` after submission.
    pub confirm_timeout: Duration,
    pub poll_interval: Duration,
}

impl Default for TransferConfig {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            program_id: mpl_core_program_id(),
            collection: default_collection(),
            commitment: CommitmentConfig::confirmed(),
            confirm_timeout: Duration::from_secs(DEFAULT_CONFIRM_TIMEOUT_SECS),
            poll_interval: Duration::from_millis(DEFAULT_CONFIRM_POLL_INTERVAL_MS),
        }
    }
}

impl TransferConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.rpc_url).map_err(|e| ConfigError::InvalidRpcUrl {
            url: self.rpc_url.clone(),
            reason: e.to_string(),
        })?;
        match url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(ConfigError::InvalidRpcUrl {
                    url: self.rpc_url.clone(),
                    reason: format!("unsupported scheme {other:?}"),
                })
            }
        }
        if self.poll_interval.is_zero() || self.confirm_timeout < self.poll_interval {
            return Err(ConfigError::InvalidTiming {
                timeout_ms: self.confirm_timeout.as_millis(),
                interval_ms: self.poll_interval.as_millis(),
            });
        }
        Ok(())
    }
}

/// Parse a base58 pubkey supplied for `field`.
pub fn parse_pubkey(field: &'static str, value: &str) -> Result<Pubkey, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidPubkey { field, value: value.to_string() })
}
