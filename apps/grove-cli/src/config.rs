//! Demo configuration: RPC endpoint resolution, default file locations, and
//! the fixed metadata the demo mints with.

use grove_sdk::{CollectionParams, CreatorShare, NftTemplate};
use solana_sdk::pubkey::Pubkey;

/// Env var consulted when no `--rpc-url` flag is given.
pub const RPC_URL_ENV: &str = "RPC_URL";

/// Public devnet endpoint used when neither flag nor env is set.
pub const DEVNET_RPC_URL: &str = "https://api.devnet.solana.com";

/// Default locations for generated keypairs and the address book.
pub const DEFAULT_PAYER_PATH: &str = ".local_keys/payer.json";
pub const DEFAULT_WALLET_PATH: &str = ".local_keys/wallet.json";
pub const DEFAULT_TREE_PATH: &str = ".local_keys/tree.json";
pub const DEFAULT_MINT_PATH: &str = ".local_keys/collection-mint.json";
pub const DEFAULT_ADDRESS_BOOK_PATH: &str = ".local_keys/addresses.json";

/// Flag wins over the `RPC_URL` env var, which wins over the devnet default.
pub fn resolve_rpc_url(flag: Option<String>) -> String {
    flag.filter(|s| !s.is_empty())
        .or_else(|| std::env::var(RPC_URL_ENV).ok().filter(|s| !s.is_empty()))
        .unwrap_or_else(|| DEVNET_RPC_URL.to_string())
}

/// Collection metadata for the demo: 1% royalty, payer takes the full
/// creator share, the second wallet is listed with zero.
pub fn demo_collection_params(payer: Pubkey, wallet: Pubkey) -> CollectionParams {
    CollectionParams {
        name: "Grove Collection".to_string(),
        symbol: "GROVE".to_string(),
        uri: "https://example.com/grove/collection.json".to_string(),
        seller_fee_basis_points: 100,
        creators: vec![
            CreatorShare {
                address: payer,
                share: 100,
            },
            CreatorShare {
                address: wallet,
                share: 0,
            },
        ],
        is_mutable: true,
    }
}

/// Compressed-NFT template: same creator list as the collection, no royalty.
pub fn demo_nft_template(collection_mint: Pubkey, payer: Pubkey, wallet: Pubkey) -> NftTemplate {
    NftTemplate {
        name: "Grove NFT".to_string(),
        symbol: "GROVE".to_string(),
        uri: "https://example.com/grove/nft.json".to_string(),
        seller_fee_basis_points: 0,
        creators: vec![
            CreatorShare {
                address: payer,
                share: 100,
            },
            CreatorShare {
                address: wallet,
                share: 0,
            },
        ],
        collection_mint,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_beats_env_beats_default() {
        assert_eq!(
            resolve_rpc_url(Some("http://localhost:8899".to_string())),
            "http://localhost:8899"
        );
        // Empty flag falls through
        let resolved = resolve_rpc_url(Some(String::new()));
        assert!(!resolved.is_empty());
    }

    #[test]
    fn default_is_devnet() {
        std::env::remove_var(RPC_URL_ENV);
        assert_eq!(resolve_rpc_url(None), DEVNET_RPC_URL);
    }

    #[test]
    fn demo_metadata_is_valid() {
        let payer = Pubkey::new_unique();
        let wallet = Pubkey::new_unique();

        let params = demo_collection_params(payer, wallet);
        assert!(params.validate().is_ok());
        assert_eq!(params.seller_fee_basis_points, 100);

        let template = demo_nft_template(Pubkey::new_unique(), payer, wallet);
        assert!(template.validate().is_ok());
        assert_eq!(template.seller_fee_basis_points, 0);
    }
}
