use crate::commands::{create_collection, create_tree, mint_nft, print_separator};
use crate::config;
use crate::error::CliResult;
use crate::wallet::{load_or_generate_keypair, AddressBook};
use grove_client::GroveClient;
use grove_sdk::TreeSpec;
use solana_sdk::{
    native_token::{lamports_to_sol, LAMPORTS_PER_SOL},
    signer::Signer,
};
use std::path::{Path, PathBuf};

/// The full demo, end to end: two keypairs, a tree, a collection, and one
/// compressed mint per wallet, bracketed by balance reads so the SOL cost
/// of the whole run can be reported.
pub fn execute(
    rpc_url: Option<String>,
    keypair: PathBuf,
    wallet_keypair: PathBuf,
    tree_keypair: PathBuf,
    mint_keypair: PathBuf,
) -> CliResult<()> {
    let rpc_url = config::resolve_rpc_url(rpc_url);
    println!("🌲 Grove demo - compressed NFT minting");
    println!("RPC URL: {}", rpc_url);

    let payer = load_or_generate_keypair(&keypair)?;
    let wallet = load_or_generate_keypair(&wallet_keypair)?;
    let tree = load_or_generate_keypair(&tree_keypair)?;
    let mint = load_or_generate_keypair(&mint_keypair)?;
    println!("🔑 Payer: {}", payer.pubkey());
    println!("🔑 Second wallet: {}", wallet.pubkey());

    let client = GroveClient::new(rpc_url)?;

    if let Some(signature) =
        client.request_airdrop_if_below(&payer.pubkey(), LAMPORTS_PER_SOL, 2 * LAMPORTS_PER_SOL)?
    {
        println!("💧 Airdropped 2 SOL to payer: {}", signature);
    }

    let starting_balance = client.balance(&payer.pubkey())?;
    println!(
        "💳 Starting balance: {} SOL",
        lamports_to_sol(starting_balance)
    );

    print_separator();
    create_tree::ensure_tree(&client, &payer, &tree, &TreeSpec::default(), false)?;

    print_separator();
    let params = config::demo_collection_params(payer.pubkey(), wallet.pubkey());
    create_collection::ensure_collection(&client, &payer, &mint, &params, false)?;

    print_separator();
    let template = config::demo_nft_template(mint.pubkey(), payer.pubkey(), wallet.pubkey());
    mint_nft::mint_one(&client, &payer, tree.pubkey(), payer.pubkey(), &template, false)?;
    mint_nft::mint_one(&client, &payer, tree.pubkey(), wallet.pubkey(), &template, false)?;

    let book_path = Path::new(config::DEFAULT_ADDRESS_BOOK_PATH);
    let mut book = AddressBook::load(book_path)?;
    book.set_tree(&tree.pubkey());
    book.set_collection_mint(&mint.pubkey());
    book.save(book_path)?;

    let ending_balance = client.balance(&payer.pubkey())?;

    print_separator();
    println!("📊 Summary:");
    println!("  🌳 Tree: {}", tree.pubkey());
    println!("  🎨 Collection: {}", mint.pubkey());
    println!(
        "  💳 Ending balance: {} SOL",
        lamports_to_sol(ending_balance)
    );
    println!(
        "  💰 Total cost: {:.7} SOL",
        cost_in_sol(starting_balance, ending_balance)
    );

    Ok(())
}

/// SOL spent across the run. Reporting only; an ending balance above the
/// starting one (devnet airdrop landing mid-run) reads as zero cost.
fn cost_in_sol(starting_lamports: u64, ending_lamports: u64) -> f64 {
    lamports_to_sol(starting_lamports.saturating_sub(ending_lamports))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_is_balance_delta_in_sol() {
        assert_eq!(cost_in_sol(2 * LAMPORTS_PER_SOL, LAMPORTS_PER_SOL), 1.0);
        assert_eq!(cost_in_sol(LAMPORTS_PER_SOL, LAMPORTS_PER_SOL / 2), 0.5);
    }

    #[test]
    fn cost_never_goes_negative() {
        assert_eq!(cost_in_sol(LAMPORTS_PER_SOL, 2 * LAMPORTS_PER_SOL), 0.0);
    }
}
