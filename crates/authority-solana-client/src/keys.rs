//! Keypair file loading.
//!
//! Key files use the Solana CLI layout: a JSON array of 64 integers, the
//! 32-byte secret seed followed by the 32-byte public key.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use solana_program::pubkey::Pubkey;
use solana_sdk::signature::{keypair_from_seed, Keypair, Signer};

use crate::error::KeyLoadError;

/// Byte length of a serialized keypair.
pub const KEYPAIR_LEN: usize = 64;

/// The two signers of an update-authority transfer.
pub struct AuthorityKeys {
    /// Key that currently holds the update authority.
    pub current: Keypair,
    /// Key that receives the update authority and pays fees.
    pub new: Keypair,
}

impl AuthorityKeys {
    pub fn current_authority(&self) -> Pubkey {
        self.current.pubkey()
    }

    pub fn new_authority(&self) -> Pubkey {
        self.new.pubkey()
    }

    pub fn payer(&self) -> Pubkey {
        self.new.pubkey()
    }
}

pub fn load_authority_keys(
    current_path: impl AsRef<Path>,
    new_path: impl AsRef<Path>,
) -> Result<AuthorityKeys, KeyLoadError> {
    let current = load_keypair(current_path)?;
    let new = load_keypair(new_path)?;
    Ok(AuthorityKeys { current, new })
}

pub fn load_keypair(path: impl AsRef<Path>) -> Result<Keypair, KeyLoadError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => KeyLoadError::NotFound { path: path.to_path_buf() },
        _ => KeyLoadError::Io { path: path.to_path_buf(), source },
    })?;
    let bytes: Vec<u8> = serde_json::from_str(&raw)
        .map_err(|source| KeyLoadError::Malformed { path: path.to_path_buf(), source })?;
    keypair_from_bytes(path, &bytes)
}

fn keypair_from_bytes(path: &Path, bytes: &[u8]) -> Result<Keypair, KeyLoadError> {
    if bytes.len() != KEYPAIR_LEN {
        return Err(KeyLoadError::InvalidLength {
            path: path.to_path_buf(),
            len: bytes.len(),
            expected: KEYPAIR_LEN,
        });
    }
    // The signer is derived from the secret half; the stored public half must
    // agree with it.
    let keypair = keypair_from_seed(&bytes[..32]).map_err(|e| KeyLoadError::InvalidKeypair {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    if keypair.pubkey().as_ref() != &bytes[32..] {
        return Err(KeyLoadError::InvalidKeypair {
            path: path.to_path_buf(),
            reason: format!("public key half does not match secret key (derives {})", keypair.pubkey()),
        });
    }
    Ok(keypair)
}
