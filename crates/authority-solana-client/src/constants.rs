//! Constants shared with the target on-chain program.
//!
//! Keep these stable because they are part of the program's calling convention.

use solana_program::pubkey::Pubkey;

/// Metaplex Core program id.
pub const MPL_CORE_PROGRAM_ID: &str = "CoREENxT6tW1HoK8ypY1SxRMZTcVPm7R94rH4PZNhX7d";

/// Collection whose update authority is transferred by default.
pub const DEFAULT_COLLECTION: &str = "5NR4dajELRkLdAPj9ebmW8YrowY61ZX75ugRAvYj7C8i";

/// Public mainnet RPC endpoint.
pub const DEFAULT_RPC_URL: &str = "https://api.mainnet-beta.solana.com";

/// Default key file holding the current update authority.
pub const DEFAULT_CURRENT_AUTHORITY_FILE: &str = "./current-authority.json";

/// Default key file holding the new update authority (also the fee payer).
pub const DEFAULT_NEW_AUTHORITY_FILE: &str = "./new-authority.json";

/// Discriminator of the `UpdateV1` instruction.
pub const UPDATE_V1_DISCRIMINATOR: [u8; 8] = [0x32, 0xc2, 0x9a, 0x1e, 0x7b, 0x4f, 0x1e, 0x3a];

/// Length of the encoded update-authority instruction data.
pub const UPDATE_AUTHORITY_DATA_LEN: usize = 42;

/// Account key byte identifying a `CollectionV1` account.
pub const COLLECTION_V1_KEY: u8 = 5;

/// Account key byte of the plugin header that may follow a collection.
pub const PLUGIN_HEADER_V1_KEY: u8 = 3;

/// Account key byte of the plugin registry.
pub const PLUGIN_REGISTRY_V1_KEY: u8 = 4;

/// Upper bound on waiting for a submitted transaction to reach the
/// configured commitment.
pub const DEFAULT_CONFIRM_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_CONFIRM_POLL_INTERVAL_MS: u64 = 500;

pub const SOLSCAN_TX_URL: &str = "https://solscan.io/tx";
pub const SOLANA_FM_TX_URL: &str = "https://solana.fm/tx";
pub const EXPLORER_ADDRESS_URL: &str = "https://explorer.solana.com/address";

pub fn mpl_core_program_id() -> Pubkey {
    solana_program::pubkey!("CoREENxT6tW1HoK8ypY1SxRMZTcVPm7R94rH4PZNhX7d")
}

pub fn default_collection() -> Pubkey {
    solana_program::pubkey!("5NR4dajELRkLdAPj9ebmW8YrowY61ZX75ugRAvYj7C8i")
}
