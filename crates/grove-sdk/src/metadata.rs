//! Metadata shapes for the collection NFT and the compressed NFTs minted
//! into it.
//!
//! Both are built once and treated as read only afterwards: the collection
//! params feed a single `CreateV1`, and the template stamps out identical
//! `MetadataArgs` for every mint. The recipient never appears in the
//! metadata, only in the mint instruction's leaf-owner account.

use mpl_bubblegum::types::{
    Collection, Creator as BubblegumCreator, MetadataArgs, TokenProgramVersion,
    TokenStandard as BubblegumTokenStandard,
};
use mpl_token_metadata::types::Creator as MetadataCreator;
use solana_sdk::pubkey::Pubkey;

use crate::errors::{SdkError, SdkResult};

/// One entry in a creator list. Shares are percentages and must sum to 100
/// across the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreatorShare {
    pub address: Pubkey,
    pub share: u8,
}

/// Parameters for the collection NFT (a regular, uncompressed NFT that
/// compressed mints point at).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionParams {
    pub name: String,
    pub symbol: String,
    pub uri: String,
    pub seller_fee_basis_points: u16,
    pub creators: Vec<CreatorShare>,
    pub is_mutable: bool,
}

impl CollectionParams {
    pub fn validate(&self) -> SdkResult<()> {
        validate_creators(&self.creators)
    }

    pub(crate) fn metadata_creators(&self) -> Vec<MetadataCreator> {
        self.creators
            .iter()
            .map(|c| MetadataCreator {
                address: c.address,
                verified: false,
                share: c.share,
            })
            .collect()
    }
}

/// Template for the compressed NFTs. Produces the same `MetadataArgs` for
/// every mint; callers vary only the leaf owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NftTemplate {
    pub name: String,
    pub symbol: String,
    pub uri: String,
    pub seller_fee_basis_points: u16,
    pub creators: Vec<CreatorShare>,
    pub collection_mint: Pubkey,
}

impl NftTemplate {
    pub fn validate(&self) -> SdkResult<()> {
        validate_creators(&self.creators)
    }

    /// Bubblegum metadata for one mint. The collection pointer is left
    /// unverified; Bubblegum verifies it during `MintToCollectionV1`.
    pub fn metadata_args(&self) -> MetadataArgs {
        MetadataArgs {
            name: self.name.clone(),
            symbol: self.symbol.clone(),
            uri: self.uri.clone(),
            seller_fee_basis_points: self.seller_fee_basis_points,
            primary_sale_happened: false,
            is_mutable: false,
            edition_nonce: None,
            token_standard: Some(BubblegumTokenStandard::NonFungible),
            collection: Some(Collection {
                verified: false,
                key: self.collection_mint,
            }),
            uses: None,
            token_program_version: TokenProgramVersion::Original,
            creators: self
                .creators
                .iter()
                .map(|c| BubblegumCreator {
                    address: c.address,
                    verified: false,
                    share: c.share,
                })
                .collect(),
        }
    }
}

fn validate_creators(creators: &[CreatorShare]) -> SdkResult<()> {
    if creators.is_empty() {
        return Ok(());
    }
    let total: u32 = creators.iter().map(|c| c.share as u32).sum();
    if total != 100 {
        return Err(SdkError::InvalidMetadata(format!(
            "creator shares must sum to 100, got {}",
            total
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_template() -> NftTemplate {
        NftTemplate {
            name: "Grove #1".to_string(),
            symbol: "GROVE".to_string(),
            uri: "https://example.com/nft.json".to_string(),
            seller_fee_basis_points: 0,
            creators: vec![
                CreatorShare {
                    address: Pubkey::new_unique(),
                    share: 100,
                },
                CreatorShare {
                    address: Pubkey::new_unique(),
                    share: 0,
                },
            ],
            collection_mint: Pubkey::new_unique(),
        }
    }

    #[test]
    fn template_args_are_identical_across_mints() {
        let template = test_template();
        // One template, many mints: the metadata never varies per recipient.
        assert_eq!(template.metadata_args(), template.metadata_args());
    }

    #[test]
    fn template_collection_pointer_starts_unverified() {
        let template = test_template();
        let args = template.metadata_args();
        let collection = args.collection.expect("collection pointer");
        assert!(!collection.verified);
        assert_eq!(collection.key, template.collection_mint);
        assert_eq!(args.token_standard, Some(BubblegumTokenStandard::NonFungible));
    }

    #[test]
    fn creator_shares_must_sum_to_one_hundred() {
        let mut template = test_template();
        assert!(template.validate().is_ok());

        template.creators[1].share = 50;
        assert!(matches!(
            template.validate(),
            Err(SdkError::InvalidMetadata(_))
        ));
    }

    #[test]
    fn collection_params_validate_shares() {
        let params = CollectionParams {
            name: "Grove Collection".to_string(),
            symbol: "GROVE".to_string(),
            uri: "https://example.com/collection.json".to_string(),
            seller_fee_basis_points: 100,
            creators: vec![CreatorShare {
                address: Pubkey::new_unique(),
                share: 100,
            }],
            is_mutable: true,
        };
        assert!(params.validate().is_ok());
    }
}
