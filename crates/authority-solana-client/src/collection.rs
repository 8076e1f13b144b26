//! Read-only view of a `CollectionV1` account.
//!
//! ```text
//! CollectionV1 header | PluginHeaderV1 | plugin data ... | PluginRegistryV1
//!                       key, registry offset ──────────────^
//! ```
//!
//! Everything after the collection header is optional. When present, the
//! plugin header points at the registry, whose records name each plugin,
//! its authority, and where its data starts.

use borsh::BorshDeserialize;
use serde::Serialize;
use solana_program::pubkey::Pubkey;
use solana_sdk::account::Account;

use crate::config::TransferConfig;
use crate::constants::{COLLECTION_V1_KEY, PLUGIN_HEADER_V1_KEY, PLUGIN_REGISTRY_V1_KEY};
use crate::error::CollectionError;
use crate::rpc::AuthorityRpc;

/// Fixed header of a collection account. Plugin data follows it.
#[derive(Debug, Clone, PartialEq, Eq, BorshDeserialize)]
struct CollectionV1Header {
    key: u8,
    update_authority: [u8; 32],
    name: String,
    uri: String,
    num_minted: u32,
    current_size: u32,
}

#[derive(BorshDeserialize)]
struct PluginHeaderV1 {
    key: u8,
    plugin_registry_offset: u64,
}

#[derive(BorshDeserialize)]
enum RegistryAuthority {
    None,
    Owner,
    UpdateAuthority,
    Address { address: [u8; 32] },
}

#[derive(BorshDeserialize)]
struct RegistryRecord {
    plugin_type: u8,
    authority: RegistryAuthority,
    offset: u64,
}

/// Registry up to the internal plugin records. External plugin records
/// follow and are not read.
#[derive(BorshDeserialize)]
struct PluginRegistryV1 {
    key: u8,
    registry: Vec<RegistryRecord>,
}

/// One plugin attached to the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginEntry {
    pub plugin_type: String,
    pub authority: String,
    /// Start of the plugin's data within the account.
    pub offset: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionHeader {
    pub update_authority: String,
    pub name: String,
    pub uri: String,
    pub num_minted: u32,
    pub current_size: u32,
    pub plugins: Vec<PluginEntry>,
}

impl CollectionHeader {
    pub fn update_authority_pubkey(&self) -> Option<Pubkey> {
        self.update_authority.parse().ok()
    }
}

pub fn decode_collection(data: &[u8]) -> Result<CollectionHeader, CollectionError> {
    let mut rest = data;
    let raw = CollectionV1Header::deserialize(&mut rest)?;
    if raw.key != COLLECTION_V1_KEY {
        return Err(CollectionError::NotACollection(raw.key));
    }
    let plugins = if rest.is_empty() { Vec::new() } else { decode_plugins(data, rest)? };
    Ok(CollectionHeader {
        update_authority: Pubkey::new_from_array(raw.update_authority).to_string(),
        name: raw.name,
        uri: raw.uri,
        num_minted: raw.num_minted,
        current_size: raw.current_size,
        plugins,
    })
}

/// Decode the plugin registry. `tail` starts at the plugin header; registry
/// offsets are relative to the whole account `data`.
fn decode_plugins(data: &[u8], mut tail: &[u8]) -> Result<Vec<PluginEntry>, CollectionError> {
    let header = PluginHeaderV1::deserialize(&mut tail)?;
    if header.key != PLUGIN_HEADER_V1_KEY {
        return Err(CollectionError::BadPluginHeader(header.key));
    }
    let mut registry_data = usize::try_from(header.plugin_registry_offset)
        .ok()
        .and_then(|offset| data.get(offset..))
        .filter(|slice| !slice.is_empty())
        .ok_or(CollectionError::RegistryOutOfBounds { offset: header.plugin_registry_offset, len: data.len() })?;
    let registry = PluginRegistryV1::deserialize(&mut registry_data)?;
    if registry.key != PLUGIN_REGISTRY_V1_KEY {
        return Err(CollectionError::BadPluginRegistry(registry.key));
    }
    tracing::debug!(count = registry.registry.len(), offset = header.plugin_registry_offset, "decoded plugin registry");

    Ok(registry
        .registry
        .into_iter()
        .map(|record| PluginEntry {
            plugin_type: plugin_type_name(record.plugin_type),
            authority: match record.authority {
                RegistryAuthority::None => "None".to_string(),
                RegistryAuthority::Owner => "Owner".to_string(),
                RegistryAuthority::UpdateAuthority => "UpdateAuthority".to_string(),
                RegistryAuthority::Address { address } => Pubkey::new_from_array(address).to_string(),
            },
            offset: record.offset,
        })
        .collect())
}

/// Name of a plugin type by its registry tag.
pub fn plugin_type_name(tag: u8) -> String {
    let name = match tag {
        0 => "Royalties",
        1 => "FreezeDelegate",
        2 => "BurnDelegate",
        3 => "TransferDelegate",
        4 => "UpdateDelegate",
        5 => "PermanentFreezeDelegate",
        6 => "Attributes",
        7 => "PermanentTransferDelegate",
        8 => "PermanentBurnDelegate",
        9 => "Edition",
        10 => "MasterEdition",
        11 => "AddBlocker",
        12 => "ImmutableMetadata",
        13 => "VerifiedCreators",
        14 => "Autograph",
        other => return format!("Unknown({other})"),
    };
    name.to_string()
}

/// Decode `account`, requiring it to be owned by `program_id`.
pub fn decode_collection_account(
    address: &Pubkey,
    account: &Account,
    program_id: &Pubkey,
) -> Result<CollectionHeader, CollectionError> {
    if account.owner != *program_id {
        return Err(CollectionError::WrongOwner {
            address: address.to_string(),
            owner: account.owner.to_string(),
            expected: program_id.to_string(),
        });
    }
    decode_collection(&account.data)
}

/// Fetch and decode the configured collection.
pub fn inspect_collection<R: AuthorityRpc>(rpc: &R, config: &TransferConfig) -> Result<CollectionHeader, CollectionError> {
    let account = rpc.fetch_account(&config.collection).map_err(|source| CollectionError::FetchAccount {
        address: config.collection.to_string(),
        source,
    })?;
    tracing::debug!(len = account.data.len(), owner = %account.owner, "fetched collection account");
    decode_collection_account(&config.collection, &account, &config.program_id)
}

#[cfg(test)]
mod tests {
    use solana_client::client_error::ClientErrorKind;

    use super::*;
    use crate::rpc::MockAuthorityRpc;

    fn encode_header(key: u8, authority: &Pubkey, name: &str, uri: &str, minted: u32, size: u32) -> Vec<u8> {
        let mut out = vec![key];
        out.extend_from_slice(authority.as_ref());
        out.extend_from_slice(&(name.len() as u32).to_le_bytes());
        out.extend_from_slice(name.as_bytes());
        out.extend_from_slice(&(uri.len() as u32).to_le_bytes());
        out.extend_from_slice(uri.as_bytes());
        out.extend_from_slice(&minted.to_le_bytes());
        out.extend_from_slice(&size.to_le_bytes());
        out
    }

    /// Append a plugin header, `plugin_data`, and a registry with `records`
    /// (`(type, authority bytes, data offset)`) to `data`.
    fn append_plugins(data: &mut Vec<u8>, plugin_data: &[u8], records: &[(u8, Vec<u8>, u64)]) {
        let registry_offset = (data.len() + 9 + plugin_data.len()) as u64;
        data.push(3);
        data.extend_from_slice(&registry_offset.to_le_bytes());
        data.extend_from_slice(plugin_data);
        data.push(4);
        data.extend_from_slice(&(records.len() as u32).to_le_bytes());
        for (plugin_type, authority, offset) in records {
            data.push(*plugin_type);
            data.extend_from_slice(authority);
            data.extend_from_slice(&offset.to_le_bytes());
        }
        // external registry
        data.extend_from_slice(&0u32.to_le_bytes());
    }

    #[test]
    fn decodes_header_without_plugins() {
        let authority = Pubkey::new_unique();
        let data = encode_header(5, &authority, "Drops", "https://example.com/c.json", 120, 118);

        let header = decode_collection(&data).unwrap();
        assert_eq!(header.update_authority_pubkey(), Some(authority));
        assert_eq!(header.name, "Drops");
        assert_eq!(header.uri, "https://example.com/c.json");
        assert_eq!(header.num_minted, 120);
        assert_eq!(header.current_size, 118);
        assert!(header.plugins.is_empty());
    }

    #[test]
    fn empty_registry_yields_no_plugins() {
        let mut data = encode_header(5, &Pubkey::new_unique(), "a", "b", 0, 0);
        append_plugins(&mut data, &[], &[]);
        assert!(decode_collection(&data).unwrap().plugins.is_empty());
    }

    #[test]
    fn decodes_plugin_registry_records() {
        let delegate = Pubkey::new_unique();
        let mut data = encode_header(5, &Pubkey::new_unique(), "Drops", "uri", 3, 3);
        let first_plugin = (data.len() + 9) as u64;
        let mut address_authority = vec![3];
        address_authority.extend_from_slice(delegate.as_ref());
        append_plugins(
            &mut data,
            &[0xaa; 12],
            &[(0, vec![2], first_plugin), (4, address_authority, first_plugin + 6), (40, vec![1], first_plugin + 9)],
        );

        let plugins = decode_collection(&data).unwrap().plugins;
        assert_eq!(
            plugins,
            vec![
                PluginEntry { plugin_type: "Royalties".into(), authority: "UpdateAuthority".into(), offset: first_plugin },
                PluginEntry {
                    plugin_type: "UpdateDelegate".into(),
                    authority: delegate.to_string(),
                    offset: first_plugin + 6
                },
                PluginEntry { plugin_type: "Unknown(40)".into(), authority: "Owner".into(), offset: first_plugin + 9 },
            ]
        );
    }

    #[test]
    fn rejects_foreign_plugin_header() {
        let mut data = encode_header(5, &Pubkey::new_unique(), "a", "b", 0, 0);
        data.extend_from_slice(&[4, 0, 0, 0, 0, 0, 0, 0, 0]);
        assert!(matches!(decode_collection(&data), Err(CollectionError::BadPluginHeader(4))));
    }

    #[test]
    fn rejects_registry_offset_past_end() {
        let mut data = encode_header(5, &Pubkey::new_unique(), "a", "b", 0, 0);
        data.push(3);
        data.extend_from_slice(&10_000u64.to_le_bytes());
        assert!(matches!(
            decode_collection(&data),
            Err(CollectionError::RegistryOutOfBounds { offset: 10_000, .. })
        ));
    }

    #[test]
    fn rejects_registry_with_wrong_key() {
        let mut data = encode_header(5, &Pubkey::new_unique(), "a", "b", 0, 0);
        append_plugins(&mut data, &[], &[]);
        let registry_at = data.len() - 9;
        data[registry_at] = 7;
        assert!(matches!(decode_collection(&data), Err(CollectionError::BadPluginRegistry(7))));
    }

    #[test]
    fn rejects_asset_accounts() {
        let data = encode_header(1, &Pubkey::new_unique(), "a", "b", 0, 0);
        assert!(matches!(decode_collection(&data), Err(CollectionError::NotACollection(1))));
    }

    #[test]
    fn rejects_truncated_data() {
        let data = encode_header(5, &Pubkey::new_unique(), "a", "b", 0, 0);
        assert!(matches!(decode_collection(&data[..20]), Err(CollectionError::Decode(_))));
    }

    #[test]
    fn rejects_foreign_owner() {
        let address = Pubkey::new_unique();
        let account = Account {
            lamports: 1,
            data: encode_header(5, &Pubkey::new_unique(), "a", "b", 0, 0),
            owner: Pubkey::new_unique(),
            executable: false,
            rent_epoch: 0,
        };
        let err = decode_collection_account(&address, &account, &crate::constants::mpl_core_program_id()).unwrap_err();
        assert!(matches!(err, CollectionError::WrongOwner { .. }));
    }

    #[test]
    fn inspect_fetches_configured_collection() {
        let config = TransferConfig::default();
        let authority = Pubkey::new_unique();
        let data = encode_header(5, &authority, "Drops", "uri", 1, 1);
        let owner = config.program_id;
        let mut rpc = MockAuthorityRpc::new();
        rpc.expect_fetch_account()
            .with(mockall::predicate::eq(config.collection))
            .times(1)
            .returning(move |_| Ok(Account { lamports: 1, data: data.clone(), owner, executable: false, rent_epoch: 0 }));

        let header = inspect_collection(&rpc, &config).unwrap();
        assert_eq!(header.update_authority_pubkey(), Some(authority));
    }

    #[test]
    fn inspect_surfaces_fetch_failure() {
        let config = TransferConfig::default();
        let mut rpc = MockAuthorityRpc::new();
        rpc.expect_fetch_account()
            .returning(|_| Err(ClientErrorKind::Custom("AccountNotFound".to_string()).into()));
        assert!(matches!(inspect_collection(&rpc, &config), Err(CollectionError::FetchAccount { .. })));
    }
}
