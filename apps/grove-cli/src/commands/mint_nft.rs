use crate::config;
use crate::error::{CliError, CliResult};
use crate::wallet::{load_or_generate_keypair, AddressBook};
use grove_client::GroveClient;
use grove_sdk::{build_mint_compressed_nft_ix, NftTemplate};
use solana_sdk::{pubkey::Pubkey, signature::Keypair, signer::Signer};
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub fn execute(
    rpc_url: Option<String>,
    keypair: PathBuf,
    wallet_keypair: PathBuf,
    recipient: Option<String>,
    dry_run: bool,
) -> CliResult<()> {
    let rpc_url = config::resolve_rpc_url(rpc_url);
    println!("🍃 Minting compressed NFT...");
    println!("RPC URL: {}", rpc_url);

    let payer = load_or_generate_keypair(&keypair)?;
    let wallet = load_or_generate_keypair(&wallet_keypair)?;

    let book = AddressBook::load(Path::new(config::DEFAULT_ADDRESS_BOOK_PATH))?;
    let tree = book.require_tree()?;
    let collection_mint = book.require_collection_mint()?;

    let recipient = match recipient {
        Some(s) => Pubkey::from_str(&s)
            .map_err(|e| CliError::InvalidAddress(format!("recipient '{}': {}", s, e)))?,
        None => payer.pubkey(),
    };

    let client = GroveClient::new(rpc_url)?;
    let template = config::demo_nft_template(collection_mint, payer.pubkey(), wallet.pubkey());
    mint_one(&client, &payer, tree, recipient, &template, dry_run)
}

/// Mint one compressed NFT from the template into `tree`, owned by
/// `recipient`.
pub(crate) fn mint_one(
    client: &GroveClient,
    payer: &Keypair,
    tree: Pubkey,
    recipient: Pubkey,
    template: &NftTemplate,
    dry_run: bool,
) -> CliResult<()> {
    println!("  🌱 Recipient: {}", recipient);

    let ix = build_mint_compressed_nft_ix(payer.pubkey(), tree, recipient, template)?;
    client.simulate_and_send(&[ix], payer, &[], dry_run)?;

    Ok(())
}
