pub mod create_collection;
pub mod create_tree;
pub mod mint_nft;
pub mod run_demo;

/// Console separator between demo phases.
pub(crate) fn print_separator() {
    println!("\n{}\n", "=".repeat(60));
}
