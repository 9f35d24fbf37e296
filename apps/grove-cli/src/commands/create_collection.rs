use crate::config;
use crate::error::CliResult;
use crate::wallet::{load_or_generate_keypair, AddressBook};
use grove_client::GroveClient;
use grove_sdk::{build_create_collection_ixs, CollectionParams};
use solana_sdk::{signature::Keypair, signer::Signer};
use std::path::{Path, PathBuf};

pub fn execute(
    rpc_url: Option<String>,
    keypair: PathBuf,
    wallet_keypair: PathBuf,
    mint_keypair: PathBuf,
    dry_run: bool,
) -> CliResult<()> {
    let rpc_url = config::resolve_rpc_url(rpc_url);
    println!("🎨 Creating NFT collection...");
    println!("RPC URL: {}", rpc_url);

    let payer = load_or_generate_keypair(&keypair)?;
    let wallet = load_or_generate_keypair(&wallet_keypair)?;
    let mint = load_or_generate_keypair(&mint_keypair)?;
    println!("🔑 Payer: {}", payer.pubkey());
    println!("🔑 Collection mint: {}", mint.pubkey());

    let client = GroveClient::new(rpc_url)?;
    let params = config::demo_collection_params(payer.pubkey(), wallet.pubkey());
    ensure_collection(&client, &payer, &mint, &params, dry_run)?;

    if !dry_run {
        let book_path = Path::new(config::DEFAULT_ADDRESS_BOOK_PATH);
        let mut book = AddressBook::load(book_path)?;
        book.set_collection_mint(&mint.pubkey());
        book.save(book_path)?;
    }

    Ok(())
}

/// Create the collection NFT unless the mint already carries metadata from
/// a previous run.
pub(crate) fn ensure_collection(
    client: &GroveClient,
    payer: &Keypair,
    mint: &Keypair,
    params: &CollectionParams,
    dry_run: bool,
) -> CliResult<()> {
    if client.collection_exists(&mint.pubkey())? {
        println!("⚠️  Collection already exists, skipping...");
        return Ok(());
    }

    println!("  🏷️  {} ({})", params.name, params.symbol);

    let ixs = build_create_collection_ixs(payer.pubkey(), mint.pubkey(), params)?;
    client.simulate_and_send(&ixs, payer, &[mint as &dyn Signer], dry_run)?;

    println!("✅ Collection ready: {}", mint.pubkey());
    Ok(())
}
