//! `UpdateV1` instruction encoding for the update-authority transfer.
//!
//! Only the update-authority field is set. The layout must match the
//! program's ABI byte for byte:
//!
//! ```text
//! [0..8)   discriminator
//! [8]      1  (new_update_authority: Some)
//! [9]      0  (UpdateAuthority::Address)
//! [10..42) new authority pubkey
//! ```

use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::instruction::{AccountMeta, Instruction};
use solana_program::pubkey::Pubkey;

use crate::constants::{UPDATE_AUTHORITY_DATA_LEN, UPDATE_V1_DISCRIMINATOR};

/// New update authority of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub enum UpdateAuthority {
    /// Plain address.
    Address([u8; 32]),
    /// Authority delegated to a collection address.
    Collection([u8; 32]),
}

/// Arguments following the discriminator.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct UpdateAuthorityPayload {
    pub new_update_authority: Option<UpdateAuthority>,
}

impl UpdateAuthorityPayload {
    pub fn to_address(new_authority: &Pubkey) -> Self {
        Self { new_update_authority: Some(UpdateAuthority::Address(new_authority.to_bytes())) }
    }

    pub fn to_vec(&self) -> std::io::Result<Vec<u8>> {
        let mut out = Vec::with_capacity(UPDATE_AUTHORITY_DATA_LEN);
        out.extend_from_slice(&UPDATE_V1_DISCRIMINATOR);
        borsh::to_writer(&mut out, self)?;
        Ok(out)
    }

    pub fn from_slice(data: &[u8]) -> Option<Self> {
        let args = data.strip_prefix(&UPDATE_V1_DISCRIMINATOR[..])?;
        Self::try_from_slice(args).ok()
    }
}

/// Instruction data assigning `new_authority` as a plain-address update authority.
pub fn update_authority_data(new_authority: &Pubkey) -> std::io::Result<Vec<u8>> {
    UpdateAuthorityPayload::to_address(new_authority).to_vec()
}

/// Accounts in the order the program expects them.
pub fn update_authority_accounts(
    collection: &Pubkey,
    current_authority: &Pubkey,
    new_authority: &Pubkey,
) -> Vec<AccountMeta> {
    vec![
        AccountMeta::new(*collection, false),
        AccountMeta::new_readonly(*current_authority, true),
        AccountMeta::new_readonly(*new_authority, false),
    ]
}

pub fn update_authority_instruction(
    program_id: &Pubkey,
    collection: &Pubkey,
    current_authority: &Pubkey,
    new_authority: &Pubkey,
) -> std::io::Result<Instruction> {
    Ok(Instruction {
        program_id: *program_id,
        accounts: update_authority_accounts(collection, current_authority, new_authority),
        data: update_authority_data(new_authority)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_is_fixed_length_with_discriminator_prefix() {
        for _ in 0..8 {
            let data = update_authority_data(&Pubkey::new_unique()).unwrap();
            assert_eq!(data.len(), UPDATE_AUTHORITY_DATA_LEN);
            assert_eq!(data[..8], UPDATE_V1_DISCRIMINATOR);
        }
    }

    #[test]
    fn payload_sets_field_flag_and_address_variant() {
        let data = update_authority_data(&Pubkey::new_unique()).unwrap();
        assert_eq!(data[8], 1);
        assert_eq!(data[9], 0);
    }

    #[test]
    fn payload_ends_with_new_authority_bytes() {
        let new_authority = Pubkey::new_unique();
        let data = update_authority_data(&new_authority).unwrap();
        assert_eq!(&data[10..], new_authority.as_ref());
    }

    #[test]
    fn payload_matches_literal_layout() {
        let new_authority = Pubkey::new_from_array([7u8; 32]);
        let mut expected = vec![0x32, 0xc2, 0x9a, 0x1e, 0x7b, 0x4f, 0x1e, 0x3a, 1, 0];
        expected.extend_from_slice(&[7u8; 32]);
        assert_eq!(update_authority_data(&new_authority).unwrap(), expected);
    }

    #[test]
    fn collection_variant_uses_selector_one() {
        let payload = UpdateAuthorityPayload {
            new_update_authority: Some(UpdateAuthority::Collection([3u8; 32])),
        };
        let data = payload.to_vec().unwrap();
        assert_eq!(data[9], 1);
        assert_eq!(UpdateAuthorityPayload::from_slice(&data), Some(payload));
    }

    #[test]
    fn from_slice_rejects_foreign_discriminator() {
        let mut data = update_authority_data(&Pubkey::new_unique()).unwrap();
        data[0] ^= 0xff;
        assert_eq!(UpdateAuthorityPayload::from_slice(&data), None);
    }

    #[test]
    fn payload_without_new_authority_encodes_none_flag() {
        let data = UpdateAuthorityPayload { new_update_authority: None }.to_vec().unwrap();
        assert_eq!(data.len(), 9);
        assert_eq!(data[8], 0);
    }

    #[test]
    fn account_list_has_fixed_order_and_flags() {
        let collection = Pubkey::new_unique();
        let current = Pubkey::new_unique();
        let new = Pubkey::new_unique();
        let accounts = update_authority_accounts(&collection, &current, &new);

        assert_eq!(accounts.len(), 3);
        assert_eq!(accounts[0], AccountMeta { pubkey: collection, is_signer: false, is_writable: true });
        assert_eq!(accounts[1], AccountMeta { pubkey: current, is_signer: true, is_writable: false });
        assert_eq!(accounts[2], AccountMeta { pubkey: new, is_signer: false, is_writable: false });
    }

    #[test]
    fn instruction_targets_program() {
        let program_id = crate::constants::mpl_core_program_id();
        let new = Pubkey::new_unique();
        let ix = update_authority_instruction(&program_id, &Pubkey::new_unique(), &Pubkey::new_unique(), &new).unwrap();
        assert_eq!(ix.program_id, program_id);
        assert_eq!(ix.data, update_authority_data(&new).unwrap());
        assert_eq!(ix.accounts.len(), 3);
    }
}
