//! Keypair files and the local address book.
//!
//! Keypairs live as the standard JSON byte-array files the rest of the
//! tooling understands: loaded when present, generated and saved otherwise,
//! so re-running any command reuses the same keys. The address book carries
//! the tree and collection addresses between commands.

use serde::{Deserialize, Serialize};
use solana_sdk::{
    pubkey::Pubkey,
    signature::{read_keypair_file, write_keypair_file, Keypair},
};
use std::{fs, path::Path, str::FromStr};

use crate::error::{CliError, CliResult};

/// Load the keypair at `path`, generating and saving a fresh one when the
/// file does not exist yet.
pub fn load_or_generate_keypair(path: &Path) -> CliResult<Keypair> {
    if path.exists() {
        return read_keypair_file(path)
            .map_err(|e| CliError::InvalidKeypair(format!("{}: {}", path.display(), e)));
    }

    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)?;
        }
    }

    let keypair = Keypair::new();
    write_keypair_file(&keypair, path)
        .map_err(|e| CliError::InvalidKeypair(format!("{}: {}", path.display(), e)))?;
    Ok(keypair)
}

/// Addresses created by earlier commands, persisted as base58 strings so the
/// file stays readable next to the keypairs.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct AddressBook {
    pub tree: Option<String>,
    pub collection_mint: Option<String>,
}

impl AddressBook {
    pub fn load(path: &Path) -> CliResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn save(&self, path: &Path) -> CliResult<()> {
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn set_tree(&mut self, tree: &Pubkey) {
        self.tree = Some(tree.to_string());
    }

    pub fn set_collection_mint(&mut self, mint: &Pubkey) {
        self.collection_mint = Some(mint.to_string());
    }

    /// Tree address recorded by `create-tree`, required before minting.
    pub fn require_tree(&self) -> CliResult<Pubkey> {
        self.parse_required(self.tree.as_deref(), "tree", "create-tree")
    }

    /// Collection mint recorded by `create-collection`.
    pub fn require_collection_mint(&self) -> CliResult<Pubkey> {
        self.parse_required(
            self.collection_mint.as_deref(),
            "collection mint",
            "create-collection",
        )
    }

    fn parse_required(&self, value: Option<&str>, what: &str, command: &str) -> CliResult<Pubkey> {
        let value = value.ok_or_else(|| {
            CliError::InvalidConfig(format!("no {} recorded yet - run `grove {}` first", what, command))
        })?;
        Pubkey::from_str(value)
            .map_err(|e| CliError::InvalidAddress(format!("{} '{}': {}", what, value, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::signer::Signer;
    use tempfile::tempdir;

    #[test]
    fn keypair_generation_is_idempotent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("keys/payer.json");

        let first = load_or_generate_keypair(&path).unwrap();
        assert!(path.exists());

        // Re-running with an existing file reuses the same key.
        let second = load_or_generate_keypair(&path).unwrap();
        assert_eq!(first.pubkey(), second.pubkey());
    }

    #[test]
    fn rejects_garbage_keypair_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "not a keypair").unwrap();

        assert!(matches!(
            load_or_generate_keypair(&path),
            Err(CliError::InvalidKeypair(_))
        ));
    }

    #[test]
    fn address_book_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("addresses.json");

        let tree = Pubkey::new_unique();
        let mint = Pubkey::new_unique();

        let mut book = AddressBook::load(&path).unwrap();
        assert!(book.require_tree().is_err());

        book.set_tree(&tree);
        book.set_collection_mint(&mint);
        book.save(&path).unwrap();

        let reloaded = AddressBook::load(&path).unwrap();
        assert_eq!(reloaded.require_tree().unwrap(), tree);
        assert_eq!(reloaded.require_collection_mint().unwrap(), mint);
    }

    #[test]
    fn missing_book_is_empty() {
        let dir = tempdir().unwrap();
        let book = AddressBook::load(&dir.path().join("nope.json")).unwrap();
        assert!(book.tree.is_none());
        assert!(book.collection_mint.is_none());
    }
}
