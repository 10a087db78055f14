//! Read-side helpers for the christmas-pool program.
//!
//! The on-chain program owns all record mutation; this crate covers the
//! marketplace discovery scan and the address derivations a caller needs to
//! build instructions. No signing, confirmation polling, or retry logic
//! lives here.

use anchor_lang::AccountDeserialize;
use christmas_pool::state::MarketplaceTokenPda;
use solana_account_decoder::UiAccountEncoding;
use solana_client::client_error::ClientError as RpcError;
use solana_client::rpc_client::RpcClient;
use solana_client::rpc_config::{RpcAccountInfoConfig, RpcProgramAccountsConfig};
use solana_client::rpc_filter::RpcFilterType;
use solana_sdk::pubkey::Pubkey;

pub use anchor_spl::associated_token::get_associated_token_address;
pub use christmas_pool::pda::{
    find_christmas_account_address, find_marketplace_token_address, find_user_account_address,
};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("rpc request failed: {0}")]
    Rpc(#[from] RpcError),
    #[error("account {address} is not a marketplace token record: {message}")]
    Decode { address: Pubkey, message: String },
}

/// A marketplace record together with the address it lives at.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketplaceToken {
    pub address: Pubkey,
    pub record: MarketplaceTokenPda,
}

/// Custody address for a marketplace record: the record PDA's associated
/// token account for its mint.
pub fn find_marketplace_custody_address(owner: &Pubkey, mint: &Pubkey) -> Pubkey {
    let (record, _) = find_marketplace_token_address(owner, mint);
    get_associated_token_address(&record, mint)
}

/// Enumerate every marketplace token record under the program.
///
/// Records are fixed-size, so the scan filters on the schema length derived
/// from the account definition. Results come back in whatever order the RPC
/// node enumerates them; zero records is a valid outcome.
pub fn list_marketplace_tokens(client: &RpcClient) -> Result<Vec<MarketplaceToken>, ClientError> {
    let config = RpcProgramAccountsConfig {
        filters: Some(vec![RpcFilterType::DataSize(
            MarketplaceTokenPda::LEN as u64,
        )]),
        account_config: RpcAccountInfoConfig {
            encoding: Some(UiAccountEncoding::Base64),
            ..Default::default()
        },
        ..Default::default()
    };
    let accounts = client.get_program_accounts_with_config(&christmas_pool::ID, config)?;
    accounts
        .into_iter()
        .map(|(address, account)| decode_marketplace_token(address, &account.data))
        .collect()
}

/// Decode one record account's raw bytes, discriminator included.
pub fn decode_marketplace_token(
    address: Pubkey,
    data: &[u8],
) -> Result<MarketplaceToken, ClientError> {
    let mut slice = data;
    let record =
        MarketplaceTokenPda::try_deserialize(&mut slice).map_err(|err| ClientError::Decode {
            address,
            message: err.to_string(),
        })?;
    Ok(MarketplaceToken { address, record })
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::AccountSerialize;
    use christmas_pool::state::MAX_DESCRIPTION_LEN;

    /// Serialize a record the way the program stores it: borsh fields behind
    /// the discriminator, zero-padded out to the fixed allocation.
    fn record_bytes(record: &MarketplaceTokenPda) -> Vec<u8> {
        let mut data = Vec::new();
        record.try_serialize(&mut data).unwrap();
        data.resize(MarketplaceTokenPda::LEN, 0);
        data
    }

    #[test]
    fn decodes_a_stored_record() {
        let record = MarketplaceTokenPda {
            owner: Pubkey::new_unique(),
            mint: Pubkey::new_unique(),
            bump: 253,
            description: "wool socks".to_string(),
        };
        let address = find_marketplace_token_address(&record.owner, &record.mint).0;
        let data = record_bytes(&record);
        assert_eq!(data.len(), MarketplaceTokenPda::LEN);

        let decoded = decode_marketplace_token(address, &data).unwrap();
        assert_eq!(decoded.address, address);
        assert_eq!(decoded.record, record);
    }

    #[test]
    fn decodes_a_record_with_max_length_description() {
        let record = MarketplaceTokenPda {
            owner: Pubkey::new_unique(),
            mint: Pubkey::new_unique(),
            bump: 255,
            description: "x".repeat(MAX_DESCRIPTION_LEN),
        };
        let data = record_bytes(&record);
        let decoded = decode_marketplace_token(Pubkey::new_unique(), &data).unwrap();
        assert_eq!(decoded.record.description.len(), MAX_DESCRIPTION_LEN);
    }

    #[test]
    fn rejects_foreign_account_bytes() {
        // Same length as a record but the wrong discriminator.
        let data = vec![0u8; MarketplaceTokenPda::LEN];
        let err = decode_marketplace_token(Pubkey::new_unique(), &data).unwrap_err();
        assert!(matches!(err, ClientError::Decode { .. }));
    }

    #[test]
    fn custody_address_tracks_owner_and_mint() {
        let owner = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        assert_eq!(
            find_marketplace_custody_address(&owner, &mint),
            find_marketplace_custody_address(&owner, &mint)
        );
        assert_ne!(
            find_marketplace_custody_address(&owner, &mint),
            find_marketplace_custody_address(&Pubkey::new_unique(), &mint)
        );
    }
}
