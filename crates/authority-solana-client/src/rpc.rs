//! The RPC calls a transfer needs, behind a trait so runs can be driven
//! against a mock endpoint.

#[cfg(test)]
use mockall::automock;
use solana_client::client_error::Result as ClientResult;
use solana_client::rpc_client::RpcClient;
use solana_client::rpc_config::RpcSendTransactionConfig;
use solana_program::pubkey::Pubkey;
use solana_sdk::account::Account;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::hash::Hash;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::{Result as TransactionResult, Transaction};

#[cfg_attr(test, automock)]
pub trait AuthorityRpc {
    /// Latest blockhash at the client's commitment.
    fn latest_blockhash(&self) -> ClientResult<Hash>;

    /// Submit with preflight simulation enabled.
    fn submit_transaction(&self, transaction: &Transaction) -> ClientResult<Signature>;

    /// Status of `signature` once it has reached `commitment`: `None` while it
    /// has not, `Some(Err(_))` if the transaction executed and failed.
    fn signature_status(
        &self,
        signature: &Signature,
        commitment: CommitmentConfig,
    ) -> ClientResult<Option<TransactionResult<()>>>;

    fn fetch_account(&self, address: &Pubkey) -> ClientResult<Account>;
}

impl AuthorityRpc for RpcClient {
    fn latest_blockhash(&self) -> ClientResult<Hash> {
        self.get_latest_blockhash()
    }

    fn submit_transaction(&self, transaction: &Transaction) -> ClientResult<Signature> {
        let config = RpcSendTransactionConfig {
            skip_preflight: false,
            preflight_commitment: Some(self.commitment().commitment),
            ..RpcSendTransactionConfig::default()
        };
        self.send_transaction_with_config(transaction, config)
    }

    fn signature_status(
        &self,
        signature: &Signature,
        commitment: CommitmentConfig,
    ) -> ClientResult<Option<TransactionResult<()>>> {
        self.get_signature_status_with_commitment(signature, commitment)
    }

    fn fetch_account(&self, address: &Pubkey) -> ClientResult<Account> {
        self.get_account(address)
    }
}

pub fn connect(rpc_url: &str, commitment: CommitmentConfig) -> RpcClient {
    RpcClient::new_with_commitment(rpc_url.to_string(), commitment)
}
