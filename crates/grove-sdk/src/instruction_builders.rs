//! Instruction builders for the three on-chain operations the demo performs:
//! allocating a tree, creating the collection NFT, and minting compressed
//! NFTs into the tree. All builders are pure; the caller supplies rent
//! figures and sends the results.

use mpl_bubblegum::instructions::CreateTreeConfigBuilder;
use mpl_bubblegum::instructions::MintToCollectionV1Builder;
use mpl_bubblegum::programs::{SPL_ACCOUNT_COMPRESSION_ID, SPL_NOOP_ID};
use mpl_token_metadata::ID as MPL_TOKEN_METADATA_ID;
use mpl_token_metadata::instructions::{CreateV1Builder, MintV1Builder};
use mpl_token_metadata::types::{PrintSupply, TokenStandard};
use solana_sdk::{instruction::Instruction, pubkey::Pubkey, system_instruction, system_program};
use spl_associated_token_account::get_associated_token_address;

use crate::errors::{SdkError, SdkResult};
use crate::metadata::{CollectionParams, NftTemplate};
use crate::pdas::{
    find_bubblegum_signer_address, find_master_edition_address, find_metadata_address,
    find_tree_config_address,
};
use crate::tree_spec::TreeSpec;

/// Depth ceiling the account-compression program supports.
const MAX_SUPPORTED_DEPTH: u32 = 30;

/// Instructions to allocate a merkle tree account and hand it to Bubblegum.
///
/// Returns the system `create_account` (the tree keypair must co-sign), the
/// `CreateTreeConfig` instruction, and the derived tree-config PDA.
pub fn build_create_tree_ixs(
    payer: Pubkey,
    merkle_tree: Pubkey,
    spec: &TreeSpec,
    rent_lamports: u64,
) -> SdkResult<(Instruction, Instruction, Pubkey)> {
    if spec.max_depth == 0 || spec.max_depth > MAX_SUPPORTED_DEPTH {
        return Err(SdkError::InvalidTreeParams(format!(
            "max depth must be in 1..={}, got {}",
            MAX_SUPPORTED_DEPTH, spec.max_depth
        )));
    }
    if spec.max_buffer_size == 0 {
        return Err(SdkError::InvalidTreeParams(
            "max buffer size must be nonzero".to_string(),
        ));
    }

    let (tree_config, _) = find_tree_config_address(&merkle_tree);

    let alloc_ix = system_instruction::create_account(
        &payer,
        &merkle_tree,
        rent_lamports,
        spec.account_size(),
        &SPL_ACCOUNT_COMPRESSION_ID,
    );

    let create_tree_ix = CreateTreeConfigBuilder::new()
        .tree_config(tree_config)
        .merkle_tree(merkle_tree)
        .payer(payer)
        .tree_creator(payer)
        .log_wrapper(SPL_NOOP_ID)
        .compression_program(SPL_ACCOUNT_COMPRESSION_ID)
        .system_program(system_program::ID)
        .max_depth(spec.max_depth)
        .max_buffer_size(spec.max_buffer_size)
        .instruction();

    Ok((alloc_ix, create_tree_ix, tree_config))
}

/// Instructions to create the collection NFT: `CreateV1` initializes the
/// mint plus metadata and master edition in one shot, `MintV1` mints the
/// single collection token into the payer's associated token account.
///
/// The mint keypair must co-sign alongside the payer.
pub fn build_create_collection_ixs(
    payer: Pubkey,
    mint: Pubkey,
    params: &CollectionParams,
) -> SdkResult<Vec<Instruction>> {
    params.validate()?;

    let (metadata, _) = find_metadata_address(&mint);
    let (master_edition, _) = find_master_edition_address(&mint);
    let token_account = get_associated_token_address(&payer, &mint);

    let create_ix = CreateV1Builder::new()
        .metadata(metadata)
        .master_edition(Some(master_edition))
        .mint(mint, true)
        .authority(payer)
        .payer(payer)
        .update_authority(payer, true)
        .name(params.name.clone())
        .symbol(params.symbol.clone())
        .uri(params.uri.clone())
        .seller_fee_basis_points(params.seller_fee_basis_points)
        .creators(params.metadata_creators())
        .is_mutable(params.is_mutable)
        .primary_sale_happened(false)
        .token_standard(TokenStandard::NonFungible)
        .print_supply(PrintSupply::Zero)
        .spl_token_program(Some(spl_token::ID))
        .instruction();

    let mint_ix = MintV1Builder::new()
        .token(token_account)
        .token_owner(Some(payer))
        .metadata(metadata)
        .master_edition(Some(master_edition))
        .mint(mint)
        .authority(payer)
        .payer(payer)
        .amount(1)
        .instruction();

    Ok(vec![create_ix, mint_ix])
}

/// Instruction minting one compressed NFT from the template into the tree,
/// owned by `recipient`. Bubblegum verifies the collection pointer during
/// the mint, so the payer must be the collection update authority.
pub fn build_mint_compressed_nft_ix(
    payer: Pubkey,
    merkle_tree: Pubkey,
    recipient: Pubkey,
    template: &NftTemplate,
) -> SdkResult<Instruction> {
    template.validate()?;

    let (tree_config, _) = find_tree_config_address(&merkle_tree);
    let (collection_metadata, _) = find_metadata_address(&template.collection_mint);
    let (collection_edition, _) = find_master_edition_address(&template.collection_mint);
    let (bubblegum_signer, _) = find_bubblegum_signer_address();

    let ix = MintToCollectionV1Builder::new()
        .tree_config(tree_config)
        .leaf_owner(recipient)
        .leaf_delegate(recipient)
        .merkle_tree(merkle_tree)
        .payer(payer)
        .tree_creator_or_delegate(payer)
        .collection_authority(payer)
        .collection_mint(template.collection_mint)
        .collection_metadata(collection_metadata)
        .collection_edition(collection_edition)
        .bubblegum_signer(bubblegum_signer)
        .log_wrapper(SPL_NOOP_ID)
        .compression_program(SPL_ACCOUNT_COMPRESSION_ID)
        .token_metadata_program(MPL_TOKEN_METADATA_ID)
        .system_program(system_program::ID)
        .metadata(template.metadata_args())
        .instruction();

    Ok(ix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::CreatorShare;

    fn test_collection_params() -> CollectionParams {
        CollectionParams {
            name: "Grove Collection".to_string(),
            symbol: "GROVE".to_string(),
            uri: "https://example.com/collection.json".to_string(),
            seller_fee_basis_points: 100,
            creators: vec![CreatorShare {
                address: Pubkey::new_unique(),
                share: 100,
            }],
            is_mutable: true,
        }
    }

    fn test_template(collection_mint: Pubkey) -> NftTemplate {
        NftTemplate {
            name: "Grove #1".to_string(),
            symbol: "GROVE".to_string(),
            uri: "https://example.com/nft.json".to_string(),
            seller_fee_basis_points: 0,
            creators: vec![],
            collection_mint,
        }
    }

    #[test]
    fn create_tree_allocates_for_the_compression_program() {
        let payer = Pubkey::new_unique();
        let tree = Pubkey::new_unique();
        let spec = TreeSpec::default();

        let (alloc_ix, create_ix, tree_config) =
            build_create_tree_ixs(payer, tree, &spec, 1_000_000).unwrap();

        assert_eq!(alloc_ix.program_id, system_program::ID);
        // create_account data: u32 tag, u64 lamports, u64 space, 32-byte owner
        let space = u64::from_le_bytes(alloc_ix.data[12..20].try_into().unwrap());
        assert_eq!(space, spec.account_size());
        assert_eq!(&alloc_ix.data[20..52], SPL_ACCOUNT_COMPRESSION_ID.as_ref());

        assert_eq!(create_ix.program_id, mpl_bubblegum::ID);
        assert!(create_ix.accounts.iter().any(|a| a.pubkey == tree));
        assert!(create_ix.accounts.iter().any(|a| a.pubkey == tree_config));
        assert_eq!(tree_config, find_tree_config_address(&tree).0);
    }

    #[test]
    fn create_tree_rejects_out_of_range_depth() {
        let payer = Pubkey::new_unique();
        let tree = Pubkey::new_unique();

        let too_deep = TreeSpec::new(31, 64);
        assert!(matches!(
            build_create_tree_ixs(payer, tree, &too_deep, 0),
            Err(SdkError::InvalidTreeParams(_))
        ));

        let no_buffer = TreeSpec {
            max_buffer_size: 0,
            ..TreeSpec::default()
        };
        assert!(matches!(
            build_create_tree_ixs(payer, tree, &no_buffer, 0),
            Err(SdkError::InvalidTreeParams(_))
        ));
    }

    #[test]
    fn collection_ixs_target_token_metadata() {
        let payer = Pubkey::new_unique();
        let mint = Pubkey::new_unique();

        let ixs = build_create_collection_ixs(payer, mint, &test_collection_params()).unwrap();
        assert_eq!(ixs.len(), 2);
        for ix in &ixs {
            assert_eq!(ix.program_id, mpl_token_metadata::ID);
            assert!(ix.accounts.iter().any(|a| a.pubkey == mint));
        }
    }

    #[test]
    fn compressed_mint_targets_bubblegum_with_recipient_leaf() {
        let payer = Pubkey::new_unique();
        let tree = Pubkey::new_unique();
        let recipient = Pubkey::new_unique();
        let template = test_template(Pubkey::new_unique());

        let ix = build_mint_compressed_nft_ix(payer, tree, recipient, &template).unwrap();

        assert_eq!(ix.program_id, mpl_bubblegum::ID);
        assert!(ix.accounts.iter().any(|a| a.pubkey == recipient));
        assert!(ix.accounts.iter().any(|a| a.pubkey == tree));
        assert!(ix
            .accounts
            .iter()
            .any(|a| a.pubkey == template.collection_mint));
    }

    #[test]
    fn compressed_mint_varies_only_by_recipient() {
        let payer = Pubkey::new_unique();
        let tree = Pubkey::new_unique();
        let template = test_template(Pubkey::new_unique());

        let a = build_mint_compressed_nft_ix(payer, tree, Pubkey::new_unique(), &template).unwrap();
        let b = build_mint_compressed_nft_ix(payer, tree, Pubkey::new_unique(), &template).unwrap();

        // Identical payload (the serialized MetadataArgs), different accounts.
        assert_eq!(a.data, b.data);
        assert_ne!(a.accounts, b.accounts);
    }
}
