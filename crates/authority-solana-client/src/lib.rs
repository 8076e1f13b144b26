//! authority-solana-client
//!
//! Off-chain wiring for transferring the update authority of a Metaplex Core
//! collection.
//!
//! It includes:
//! - program constants and the `UpdateV1` discriminator
//! - keypair file loading
//! - instruction encoding and the fixed account layout
//! - an RPC seam and the sequential transfer runner
//! - a read-only decoder for collection accounts and their plugin registry

pub mod collection;
pub mod config;
pub mod constants;
pub mod error;
pub mod instruction;
pub mod keys;
pub mod rpc;
pub mod transfer;

pub use collection::{decode_collection, decode_collection_account, inspect_collection, CollectionHeader, PluginEntry};
pub use config::TransferConfig;
pub use constants::*;
pub use error::{preflight_logs, CollectionError, ConfigError, KeyLoadError, TransferError};
pub use instruction::{update_authority_accounts, update_authority_data, update_authority_instruction};
pub use keys::{load_authority_keys, load_keypair, AuthorityKeys};
pub use rpc::{connect, AuthorityRpc};
pub use transfer::{TransferReceipt, TransferRunner};

pub use solana_sdk::signature::{Keypair, Signer};
