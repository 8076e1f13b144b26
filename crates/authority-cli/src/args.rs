use clap::{Args, Parser, Subcommand};

use authority_solana_client::constants::{
    DEFAULT_COLLECTION, DEFAULT_CONFIRM_TIMEOUT_SECS, DEFAULT_CURRENT_AUTHORITY_FILE, DEFAULT_NEW_AUTHORITY_FILE,
    DEFAULT_RPC_URL, MPL_CORE_PROGRAM_ID,
};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "collection-authority",
    version,
    about = "Transfer the update authority of a Metaplex Core collection"
)]
pub struct Cli {
    /// Emit JSON output on stdout.
    #[arg(long, global = true)]
    pub json: bool,

    /// Log debug detail (instruction bytes, account list).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// JSON-RPC endpoint.
    #[arg(long, global = true, default_value = DEFAULT_RPC_URL)]
    pub rpc_url: String,

    /// Collection whose update authority is transferred.
    #[arg(long, global = true, default_value = DEFAULT_COLLECTION)]
    pub collection: String,

    /// Program that owns the collection.
    #[arg(long, global = true, default_value = MPL_CORE_PROGRAM_ID)]
    pub program_id: String,

    /// Seconds to wait for the transaction to be confirmed.
    #[arg(long, global = true, default_value_t = DEFAULT_CONFIRM_TIMEOUT_SECS)]
    pub confirm_timeout: u64,

    /// Defaults to `transfer` with default key files.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Transfer the update authority to the new key (new key pays fees).
    Transfer(TransferArgs),

    /// Print the collection's on-chain header and current update authority.
    Inspect {
        /// Key file to compare against the on-chain update authority.
        #[arg(long)]
        current_authority: Option<String>,
    },
}

#[derive(Args, Debug, Clone)]
pub struct TransferArgs {
    /// Key file of the current update authority.
    #[arg(long, default_value = DEFAULT_CURRENT_AUTHORITY_FILE)]
    pub current_authority: String,

    /// Key file of the new update authority.
    #[arg(long, default_value = DEFAULT_NEW_AUTHORITY_FILE)]
    pub new_authority: String,
}

impl Default for TransferArgs {
    fn default() -> Self {
        Self {
            current_authority: DEFAULT_CURRENT_AUTHORITY_FILE.to_string(),
            new_authority: DEFAULT_NEW_AUTHORITY_FILE.to_string(),
        }
    }
}
