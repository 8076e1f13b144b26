use std::time::Duration;

use anyhow::{Context, Result};
use authority_solana_client::config::parse_pubkey;
use authority_solana_client::{TransferConfig, TransferError};

use crate::args::{Cli, Command, TransferArgs};
use crate::output;

mod inspect;
mod transfer;

pub fn dispatch(cli: Cli) -> Result<()> {
    let config = config_from_cli(&cli)?;
    match cli.command {
        None => transfer::run(&config, &TransferArgs::default()),
        Some(Command::Transfer(args)) => transfer::run(&config, &args),
        Some(Command::Inspect { current_authority }) => inspect::run(&config, current_authority.as_deref()),
    }
}

fn config_from_cli(cli: &Cli) -> Result<TransferConfig> {
    let config = TransferConfig {
        rpc_url: cli.rpc_url.clone(),
        program_id: parse_pubkey("program id", &cli.program_id)?,
        collection: parse_pubkey("collection", &cli.collection)?,
        confirm_timeout: Duration::from_secs(cli.confirm_timeout),
        ..TransferConfig::default()
    };
    config.validate().context("invalid configuration")?;
    Ok(config)
}

/// Print a failed run: the message, any program logs, then the full cause
/// chain (with a backtrace when `RUST_BACKTRACE` is set).
pub fn report_failure(err: &anyhow::Error) {
    output::failure(&format!("error: {err:#}"));

    if let Some(transfer_err) = err.downcast_ref::<TransferError>() {
        let logs = transfer_err.program_logs();
        if !logs.is_empty() {
            output::eprintln_line("\nprogram logs:");
            for line in logs {
                output::eprintln_line(&format!("    {line}"));
            }
        }
        if matches!(transfer_err, TransferError::Submit(_) | TransferError::Failed { .. }) {
            output::eprintln_line("\ncommon causes:");
            output::eprintln_line("    - wrong collection address");
            output::eprintln_line("    - current authority key does not match the on-chain update authority");
            output::eprintln_line("    - insufficient SOL in the new authority wallet for fees");
            output::eprintln_line("    - collection has plugins that require additional accounts");
        }
    }

    output::eprintln_line(&format!("\n{err:?}"));
}
