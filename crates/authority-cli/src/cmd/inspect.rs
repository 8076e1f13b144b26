use anyhow::Result;
use authority_solana_client::{connect, inspect_collection, load_keypair, CollectionHeader, Signer, TransferConfig};
use serde::Serialize;

use crate::output;

#[derive(Debug, Serialize)]
pub struct InspectOut {
    pub collection: String,
    #[serde(flatten)]
    pub header: CollectionHeader,
    /// Whether the supplied key file is the on-chain update authority.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_matches_authority: Option<bool>,
}

pub fn run(config: &TransferConfig, current_authority: Option<&str>) -> Result<()> {
    let key = current_authority.map(load_keypair).transpose()?;

    let rpc = connect(&config.rpc_url, config.commitment);
    let header = inspect_collection(&rpc, config)?;

    let key_matches_authority = key.map(|kp| header.update_authority_pubkey() == Some(kp.pubkey()));
    let out = InspectOut { collection: config.collection.to_string(), header, key_matches_authority };

    if output::is_json() {
        return output::print_json(&out);
    }

    output::rule();
    output::field("Collection", &out.collection);
    output::field("Name", &out.header.name);
    output::field("URI", &out.header.uri);
    output::field("Update authority", &out.header.update_authority);
    output::field("Minted", out.header.num_minted);
    output::field("Current size", out.header.current_size);
    if out.header.plugins.is_empty() {
        output::field("Plugins", "none");
    } else {
        output::field("Plugins", out.header.plugins.len());
        for plugin in &out.header.plugins {
            output::field(&format!("  {}", plugin.plugin_type), format!("authority {}", plugin.authority));
        }
    }
    if let Some(matches) = out.key_matches_authority {
        output::field("Key is authority", if matches { "yes" } else { "no" });
    }
    output::rule();
    Ok(())
}
