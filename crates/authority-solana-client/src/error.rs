//! Error types for the authority client.

use std::path::PathBuf;

use solana_client::client_error::{ClientError, ClientErrorKind};
use solana_client::rpc_request::{RpcError, RpcResponseErrorData};
use solana_sdk::transaction::TransactionError;
use thiserror::Error;

/// Failure to turn a key file into a keypair.
#[derive(Debug, Error)]
pub enum KeyLoadError {
    #[error("key file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read key file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("key file {} is not a JSON array of bytes: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("key file {} holds {len} bytes, expected {expected}", path.display())]
    InvalidLength { path: PathBuf, len: usize, expected: usize },

    #[error("key file {} does not hold a valid keypair: {reason}", path.display())]
    InvalidKeypair { path: PathBuf, reason: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid rpc url {url:?}: {reason}")]
    InvalidRpcUrl { url: String, reason: String },

    #[error("invalid pubkey for {field}: {value:?}")]
    InvalidPubkey { field: &'static str, value: String },

    #[error("confirmation timeout {timeout_ms}ms must be at least the poll interval {interval_ms}ms (> 0)")]
    InvalidTiming { timeout_ms: u128, interval_ms: u128 },
}

/// Failure of a transfer run, tagged with the step that failed.
#[derive(Debug, Error)]
pub enum TransferError {
    #[error(transparent)]
    KeyLoad(#[from] KeyLoadError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to encode instruction data")]
    Encode(#[source] std::io::Error),

    #[error("failed to fetch latest blockhash")]
    Blockhash(#[source] ClientError),

    #[error("failed to submit transaction")]
    Submit(#[source] ClientError),

    #[error("transaction {signature} was not confirmed")]
    Confirm {
        signature: String,
        #[source]
        source: ClientError,
    },

    #[error("transaction {signature} failed on chain")]
    Failed {
        signature: String,
        #[source]
        source: TransactionError,
    },

    #[error("transaction {signature} did not reach {commitment} within {waited_secs}s")]
    Unconfirmed { signature: String, commitment: String, waited_secs: u64 },
}

impl TransferError {
    /// Underlying RPC error, if the failure came from the endpoint.
    pub fn client_error(&self) -> Option<&ClientError> {
        match self {
            Self::Blockhash(e) | Self::Submit(e) => Some(e),
            Self::Confirm { source, .. } => Some(source),
            Self::KeyLoad(_)
            | Self::Config(_)
            | Self::Encode(_)
            | Self::Failed { .. }
            | Self::Unconfirmed { .. } => None,
        }
    }

    /// Program logs from a failed preflight simulation.
    pub fn program_logs(&self) -> Vec<String> {
        self.client_error().map(preflight_logs).unwrap_or_default()
    }
}

#[derive(Debug, Error)]
pub enum CollectionError {
    #[error("failed to fetch collection account {address}")]
    FetchAccount {
        address: String,
        #[source]
        source: ClientError,
    },

    #[error("account {address} is owned by {owner}, expected {expected}")]
    WrongOwner { address: String, owner: String, expected: String },

    #[error("account is not a collection (key byte {0}, expected 5)")]
    NotACollection(u8),

    #[error("unexpected plugin header key byte {0}, expected 3")]
    BadPluginHeader(u8),

    #[error("plugin registry offset {offset} is outside the {len}-byte account")]
    RegistryOutOfBounds { offset: u64, len: usize },

    #[error("unexpected plugin registry key byte {0}, expected 4")]
    BadPluginRegistry(u8),

    #[error("collection account data is truncated or malformed: {0}")]
    Decode(#[from] std::io::Error),
}

/// Extract program logs attached to a preflight simulation failure.
pub fn preflight_logs(err: &ClientError) -> Vec<String> {
    match err.kind() {
        ClientErrorKind::RpcError(RpcError::RpcResponseError {
            data: RpcResponseErrorData::SendTransactionPreflightFailure(sim),
            ..
        }) => sim.logs.clone().unwrap_or_default(),
        _ => Vec::new(),
    }
}
