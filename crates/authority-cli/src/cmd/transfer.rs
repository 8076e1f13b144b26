use anyhow::Result;
use authority_solana_client::{connect, load_authority_keys, AuthorityKeys, TransferConfig, TransferReceipt, TransferRunner};
use tracing::info;

use crate::args::TransferArgs;
use crate::output;

pub fn run(config: &TransferConfig, args: &TransferArgs) -> Result<()> {
    // Keys are loaded before any RPC client exists.
    info!("loading keypairs");
    let keys = load_authority_keys(&args.current_authority, &args.new_authority)?;

    if !output::is_json() {
        print_details(config, &keys);
    }

    let rpc = connect(&config.rpc_url, config.commitment);
    let receipt = TransferRunner::new(&rpc, config).run(&keys)?;

    if output::is_json() {
        output::print_json(&receipt)?;
    } else {
        print_receipt(&receipt)?;
    }
    Ok(())
}

fn print_details(config: &TransferConfig, keys: &AuthorityKeys) {
    output::rule();
    output::field("Collection", config.collection);
    output::field("Current authority", keys.current_authority());
    output::field("New authority", keys.new_authority());
    output::field("Fee payer", keys.payer());
    output::field("RPC", &config.rpc_url);
    output::rule();
}

fn print_receipt(receipt: &TransferReceipt) -> Result<()> {
    output::success("Update authority transferred")?;
    output::rule();
    output::field("Signature", &receipt.signature);
    output::field("New authority", &receipt.new_authority);
    output::field("Solscan", &receipt.solscan_url);
    output::field("SolanaFM", &receipt.solana_fm_url);
    output::field("Explorer", &receipt.explorer_url);
    output::rule();
    Ok(())
}
