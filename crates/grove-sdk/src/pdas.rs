//! PDA lookups for the program accounts the demo touches.
//!
//! These delegate to the generated program clients where they expose a
//! `find_pda`, so seeds stay in one place (the client crates) and this module
//! is just the demo's address vocabulary.

use mpl_bubblegum::accounts::TreeConfig;
use mpl_token_metadata::accounts::{MasterEdition, Metadata};
use solana_sdk::pubkey::Pubkey;

/// Bubblegum tree-config PDA for a merkle tree account.
pub fn find_tree_config_address(merkle_tree: &Pubkey) -> (Pubkey, u8) {
    TreeConfig::find_pda(merkle_tree)
}

/// Token-metadata account PDA for a mint.
pub fn find_metadata_address(mint: &Pubkey) -> (Pubkey, u8) {
    Metadata::find_pda(mint)
}

/// Master-edition PDA for a mint.
pub fn find_master_edition_address(mint: &Pubkey) -> (Pubkey, u8) {
    MasterEdition::find_pda(mint)
}

/// PDA Bubblegum signs collection-verification CPIs with.
pub fn find_bubblegum_signer_address() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[b"collection_cpi"], &mpl_bubblegum::ID)
}

/// Asset id of the compressed NFT at `nonce` in `merkle_tree`.
pub fn find_asset_id(merkle_tree: &Pubkey, nonce: u64) -> Pubkey {
    mpl_bubblegum::utils::get_asset_id(merkle_tree, nonce)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tree_config_pda_is_owned_by_bubblegum_seeds() {
        let tree = Pubkey::new_unique();
        let (pda, bump) = find_tree_config_address(&tree);
        let expected = Pubkey::find_program_address(&[tree.as_ref()], &mpl_bubblegum::ID);
        assert_eq!((pda, bump), expected);
    }

    #[test]
    fn metadata_pdas_differ_per_mint() {
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();
        assert_ne!(find_metadata_address(&a).0, find_metadata_address(&b).0);
        assert_ne!(
            find_metadata_address(&a).0,
            find_master_edition_address(&a).0
        );
    }
}
