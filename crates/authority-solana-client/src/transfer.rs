//! End-to-end update-authority transfer.
//!
//! A run is strictly sequential: blockhash, sign, submit, confirm. Any failure
//! aborts the run; nothing is retried. The current authority is not checked
//! against on-chain state before submitting.
//!
//! Confirmation polls the signature status until it reaches the configured
//! commitment. A transaction that lands but fails on chain is an error, as is
//! one still pending when `confirm_timeout` runs out.

use std::thread;
use std::time::Instant;

use serde::Serialize;
use solana_program::hash::Hash;
use solana_program::instruction::Instruction;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::Transaction;
use tracing::{debug, info};

use crate::config::TransferConfig;
use crate::constants::{EXPLORER_ADDRESS_URL, SOLANA_FM_TX_URL, SOLSCAN_TX_URL};
use crate::error::TransferError;
use crate::instruction::update_authority_instruction;
use crate::keys::AuthorityKeys;
use crate::rpc::AuthorityRpc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferReceipt {
    pub signature: String,
    pub collection: String,
    pub previous_authority: String,
    pub new_authority: String,
    pub solscan_url: String,
    pub solana_fm_url: String,
    pub explorer_url: String,
}

impl TransferReceipt {
    fn new(signature: &Signature, config: &TransferConfig, keys: &AuthorityKeys) -> Self {
        Self {
            signature: signature.to_string(),
            collection: config.collection.to_string(),
            previous_authority: keys.current_authority().to_string(),
            new_authority: keys.new_authority().to_string(),
            solscan_url: format!("{SOLSCAN_TX_URL}/{signature}"),
            solana_fm_url: format!("{SOLANA_FM_TX_URL}/{signature}"),
            explorer_url: format!("{EXPLORER_ADDRESS_URL}/{}", config.collection),
        }
    }
}

pub struct TransferRunner<'a, R: AuthorityRpc> {
    rpc: &'a R,
    config: &'a TransferConfig,
}

impl<'a, R: AuthorityRpc> TransferRunner<'a, R> {
    pub fn new(rpc: &'a R, config: &'a TransferConfig) -> Self {
        Self { rpc, config }
    }

    pub fn instruction(&self, keys: &AuthorityKeys) -> Result<Instruction, TransferError> {
        update_authority_instruction(
            &self.config.program_id,
            &self.config.collection,
            &keys.current_authority(),
            &keys.new_authority(),
        )
        .map_err(TransferError::Encode)
    }

    pub fn run(&self, keys: &AuthorityKeys) -> Result<TransferReceipt, TransferError> {
        let ix = self.instruction(keys)?;
        debug!(data = %hex::encode(&ix.data), "instruction data");
        for (i, meta) in ix.accounts.iter().enumerate() {
            debug!(index = i, pubkey = %meta.pubkey, signer = meta.is_signer, writable = meta.is_writable, "account");
        }

        info!("fetching recent blockhash");
        let blockhash = self.rpc.latest_blockhash().map_err(TransferError::Blockhash)?;
        debug!(%blockhash, "got blockhash");

        let tx = signed_transaction(ix, keys, blockhash);

        info!("sending transaction (signers: new authority, current authority)");
        let signature = self.rpc.submit_transaction(&tx).map_err(TransferError::Submit)?;
        info!(%signature, "transaction sent");

        info!(commitment = %self.config.commitment.commitment, "waiting for confirmation");
        self.await_confirmation(&signature)?;
        info!("transaction confirmed");

        Ok(TransferReceipt::new(&signature, self.config, keys))
    }

    fn await_confirmation(&self, signature: &Signature) -> Result<(), TransferError> {
        let commitment = self.config.commitment;
        let started = Instant::now();
        loop {
            let status = self
                .rpc
                .signature_status(signature, commitment)
                .map_err(|source| TransferError::Confirm { signature: signature.to_string(), source })?;
            match status {
                Some(Ok(())) => return Ok(()),
                Some(Err(source)) => {
                    return Err(TransferError::Failed { signature: signature.to_string(), source });
                }
                None if started.elapsed() >= self.config.confirm_timeout => {
                    return Err(TransferError::Unconfirmed {
                        signature: signature.to_string(),
                        commitment: commitment.commitment.to_string(),
                        waited_secs: started.elapsed().as_secs(),
                    });
                }
                None => {
                    debug!(elapsed_ms = started.elapsed().as_millis() as u64, "not yet confirmed");
                    thread::sleep(self.config.poll_interval);
                }
            }
        }
    }
}

/// Single-instruction transaction paid by the new authority and signed by
/// both authorities.
pub fn signed_transaction(ix: Instruction, keys: &AuthorityKeys, blockhash: Hash) -> Transaction {
    Transaction::new_signed_with_payer(&[ix], Some(&keys.payer()), &[&keys.new, &keys.current], blockhash)
}
