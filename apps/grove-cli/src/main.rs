use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod error;
mod wallet;

use error::CliResult;

#[derive(Parser)]
#[command(name = "grove")]
#[command(about = "Grove - compressed NFT minting demo on Solana")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Allocate a concurrent merkle tree account sized for compressed NFTs
    CreateTree {
        /// Solana RPC URL (falls back to $RPC_URL, then public devnet)
        #[arg(short, long)]
        rpc_url: Option<String>,

        /// Payer keypair file (generated when missing)
        #[arg(short, long, default_value = config::DEFAULT_PAYER_PATH)]
        keypair: PathBuf,

        /// Tree keypair file (generated when missing)
        #[arg(long, default_value = config::DEFAULT_TREE_PATH)]
        tree_keypair: PathBuf,

        /// Tree depth; capacity is 2^depth leaves
        #[arg(long, default_value = "14")]
        max_depth: u32,

        /// Changelog ring-buffer size
        #[arg(long, default_value = "64")]
        max_buffer_size: u32,

        /// Simulate only, do not send
        #[arg(long)]
        dry_run: bool,
    },

    /// Create the demo NFT collection
    CreateCollection {
        /// Solana RPC URL (falls back to $RPC_URL, then public devnet)
        #[arg(short, long)]
        rpc_url: Option<String>,

        /// Payer keypair file (generated when missing)
        #[arg(short, long, default_value = config::DEFAULT_PAYER_PATH)]
        keypair: PathBuf,

        /// Second wallet keypair file, listed as a zero-share creator
        #[arg(long, default_value = config::DEFAULT_WALLET_PATH)]
        wallet_keypair: PathBuf,

        /// Collection mint keypair file (generated when missing)
        #[arg(long, default_value = config::DEFAULT_MINT_PATH)]
        mint_keypair: PathBuf,

        /// Simulate only, do not send
        #[arg(long)]
        dry_run: bool,
    },

    /// Mint one compressed NFT into the recorded tree
    Mint {
        /// Recipient address (defaults to the payer)
        recipient: Option<String>,

        /// Solana RPC URL (falls back to $RPC_URL, then public devnet)
        #[arg(short, long)]
        rpc_url: Option<String>,

        /// Payer keypair file (generated when missing)
        #[arg(short, long, default_value = config::DEFAULT_PAYER_PATH)]
        keypair: PathBuf,

        /// Second wallet keypair file, listed as a zero-share creator
        #[arg(long, default_value = config::DEFAULT_WALLET_PATH)]
        wallet_keypair: PathBuf,

        /// Simulate only, do not send
        #[arg(long)]
        dry_run: bool,
    },

    /// Run the full demo: tree, collection, two mints, cost report
    Run {
        /// Solana RPC URL (falls back to $RPC_URL, then public devnet)
        #[arg(short, long)]
        rpc_url: Option<String>,

        /// Payer keypair file (generated when missing)
        #[arg(short, long, default_value = config::DEFAULT_PAYER_PATH)]
        keypair: PathBuf,

        /// Second wallet keypair file, receives the second mint
        #[arg(long, default_value = config::DEFAULT_WALLET_PATH)]
        wallet_keypair: PathBuf,

        /// Tree keypair file (generated when missing)
        #[arg(long, default_value = config::DEFAULT_TREE_PATH)]
        tree_keypair: PathBuf,

        /// Collection mint keypair file (generated when missing)
        #[arg(long, default_value = config::DEFAULT_MINT_PATH)]
        mint_keypair: PathBuf,
    },
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::CreateTree {
            rpc_url,
            keypair,
            tree_keypair,
            max_depth,
            max_buffer_size,
            dry_run,
        } => commands::create_tree::execute(
            rpc_url,
            keypair,
            tree_keypair,
            max_depth,
            max_buffer_size,
            dry_run,
        ),

        Commands::CreateCollection {
            rpc_url,
            keypair,
            wallet_keypair,
            mint_keypair,
            dry_run,
        } => commands::create_collection::execute(
            rpc_url,
            keypair,
            wallet_keypair,
            mint_keypair,
            dry_run,
        ),

        Commands::Mint {
            recipient,
            rpc_url,
            keypair,
            wallet_keypair,
            dry_run,
        } => commands::mint_nft::execute(rpc_url, keypair, wallet_keypair, recipient, dry_run),

        Commands::Run {
            rpc_url,
            keypair,
            wallet_keypair,
            tree_keypair,
            mint_keypair,
        } => commands::run_demo::execute(rpc_url, keypair, wallet_keypair, tree_keypair, mint_keypair),
    }
}
