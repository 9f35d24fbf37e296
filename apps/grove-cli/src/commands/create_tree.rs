use crate::config;
use crate::error::CliResult;
use crate::wallet::{load_or_generate_keypair, AddressBook};
use grove_client::GroveClient;
use grove_sdk::{build_create_tree_ixs, TreeSpec};
use solana_sdk::{signature::Keypair, signer::Signer};
use std::path::{Path, PathBuf};

pub fn execute(
    rpc_url: Option<String>,
    keypair: PathBuf,
    tree_keypair: PathBuf,
    max_depth: u32,
    max_buffer_size: u32,
    dry_run: bool,
) -> CliResult<()> {
    let rpc_url = config::resolve_rpc_url(rpc_url);
    println!("🌳 Creating merkle tree account...");
    println!("RPC URL: {}", rpc_url);

    let payer = load_or_generate_keypair(&keypair)?;
    let tree = load_or_generate_keypair(&tree_keypair)?;
    println!("🔑 Payer: {}", payer.pubkey());
    println!("🔑 Tree: {}", tree.pubkey());

    let client = GroveClient::new(rpc_url)?;
    let spec = TreeSpec::new(max_depth, max_buffer_size);
    ensure_tree(&client, &payer, &tree, &spec, dry_run)?;

    if !dry_run {
        let book_path = Path::new(config::DEFAULT_ADDRESS_BOOK_PATH);
        let mut book = AddressBook::load(book_path)?;
        book.set_tree(&tree.pubkey());
        book.save(book_path)?;
    }

    Ok(())
}

/// Allocate the tree account and hand it to Bubblegum, skipping when a
/// previous run already created it.
pub(crate) fn ensure_tree(
    client: &GroveClient,
    payer: &Keypair,
    tree: &Keypair,
    spec: &TreeSpec,
    dry_run: bool,
) -> CliResult<()> {
    if client.tree_exists(&tree.pubkey())? {
        println!("⚠️  Tree already exists, skipping...");
        return Ok(());
    }

    println!(
        "  📐 depth {}, buffer {}, canopy {} ({} leaves, {} bytes)",
        spec.max_depth,
        spec.max_buffer_size,
        spec.canopy_depth,
        spec.capacity(),
        spec.account_size()
    );

    let rent = client.rent_exempt_minimum(spec.account_size())?;
    let (alloc_ix, create_tree_ix, tree_config) =
        build_create_tree_ixs(payer.pubkey(), tree.pubkey(), spec, rent)?;
    println!("  📍 Tree config PDA: {}", tree_config);

    client.simulate_and_send(
        &[alloc_ix, create_tree_ix],
        payer,
        &[tree as &dyn Signer],
        dry_run,
    )?;

    println!("✅ Tree ready: {}", tree.pubkey());
    Ok(())
}
