/*!
# Grove Client Implementation

Main client providing the RPC operations the demo needs: balances, rent,
airdrops, and transaction submission.
*/

use crate::{
    errors::{ClientError, ClientResult},
    types::{SimulationSummary, TxOutcome},
};
use solana_client::{
    rpc_client::RpcClient,
    rpc_config::{RpcSendTransactionConfig, RpcSimulateTransactionConfig},
};
use solana_sdk::{
    commitment_config::CommitmentConfig, instruction::Instruction, pubkey::Pubkey,
    signature::Signature, signer::Signer, transaction::Transaction,
};

/// RPC client for the grove demo operations
pub struct GroveClient {
    rpc_url: String,
    rpc_client: RpcClient,
}

impl GroveClient {
    /// Create new client with default commitment (confirmed)
    pub fn new(rpc_url: String) -> ClientResult<Self> {
        Self::new_with_commitment(rpc_url, CommitmentConfig::confirmed())
    }

    /// Create new client with specific commitment level
    pub fn new_with_commitment(
        rpc_url: String,
        commitment: CommitmentConfig,
    ) -> ClientResult<Self> {
        if rpc_url.is_empty() {
            return Err(ClientError::InvalidConfig("RPC URL is empty".to_string()));
        }
        let rpc_client = RpcClient::new_with_commitment(rpc_url.clone(), commitment);

        Ok(Self {
            rpc_url,
            rpc_client,
        })
    }

    // ================================================================================================
    // Account & Balance Operations
    // ================================================================================================

    /// Current balance of `address` in lamports.
    pub fn balance(&self, address: &Pubkey) -> ClientResult<u64> {
        Ok(self.rpc_client.get_balance(address)?)
    }

    /// Minimum lamports to keep an account of `bytes` rent exempt.
    pub fn rent_exempt_minimum(&self, bytes: u64) -> ClientResult<u64> {
        Ok(self
            .rpc_client
            .get_minimum_balance_for_rent_exemption(bytes as usize)?)
    }

    /// Whether an account exists with data at `address`.
    pub fn account_exists(&self, address: &Pubkey) -> ClientResult<bool> {
        match self.rpc_client.get_account(address) {
            Ok(account) => Ok(!account.data.is_empty() || account.lamports > 0),
            Err(solana_client::client_error::ClientError {
                kind:
                    solana_client::client_error::ClientErrorKind::RpcError(
                        solana_client::rpc_request::RpcError::ForUser(_),
                    ),
                ..
            }) => Ok(false),
            Err(e) => Err(ClientError::Rpc(e)),
        }
    }

    /// Whether `merkle_tree` has already been handed to Bubblegum, judged by
    /// its tree-config PDA.
    pub fn tree_exists(&self, merkle_tree: &Pubkey) -> ClientResult<bool> {
        let (tree_config, _) = grove_sdk::find_tree_config_address(merkle_tree);
        self.account_exists(&tree_config)
    }

    /// Whether `mint` already carries token metadata, i.e. the collection
    /// NFT was created in a previous run.
    pub fn collection_exists(&self, mint: &Pubkey) -> ClientResult<bool> {
        let (metadata, _) = grove_sdk::find_metadata_address(mint);
        self.account_exists(&metadata)
    }

    /// Request an airdrop when `address` holds less than `threshold` lamports,
    /// then wait for it to land. Devnet convenience; mainnet RPCs reject it.
    pub fn request_airdrop_if_below(
        &self,
        address: &Pubkey,
        threshold: u64,
        lamports: u64,
    ) -> ClientResult<Option<Signature>> {
        if self.balance(address)? >= threshold {
            return Ok(None);
        }

        let signature = self.rpc_client.request_airdrop(address, lamports)?;
        self.rpc_client.poll_for_signature(&signature)?;
        Ok(Some(signature))
    }

    // ================================================================================================
    // Transaction Management (Simulation + Execution + Logging)
    // ================================================================================================

    /// Simulate transaction without executing
    pub fn simulate_transaction(&self, tx: &Transaction) -> ClientResult<SimulationSummary> {
        let config = RpcSimulateTransactionConfig {
            sig_verify: true,
            replace_recent_blockhash: false,
            commitment: Some(self.rpc_client.commitment()),
            encoding: None,
            accounts: None,
            min_context_slot: None,
            inner_instructions: false,
        };

        let result = self
            .rpc_client
            .simulate_transaction_with_config(tx, config)?;
        Ok(SimulationSummary::from_rpc_result(result.value))
    }

    /// Sign `instructions` with a fresh blockhash and send, waiting for
    /// confirmation. `extra_signers` covers freshly created accounts (tree
    /// and mint keypairs) that must co-sign their own allocation.
    pub fn send_instructions(
        &self,
        instructions: &[Instruction],
        payer: &dyn Signer,
        extra_signers: &[&dyn Signer],
    ) -> ClientResult<Signature> {
        let tx = self.sign_transaction(instructions, payer, extra_signers)?;

        let config = RpcSendTransactionConfig {
            skip_preflight: false,
            preflight_commitment: Some(self.rpc_client.commitment().commitment),
            encoding: None,
            max_retries: Some(5),
            min_context_slot: None,
        };

        let signature = self
            .rpc_client
            .send_and_confirm_transaction_with_spinner_and_config(
                &tx,
                self.rpc_client.commitment(),
                config,
            )
            .map_err(|e| ClientError::TransactionFailed(e.to_string()))?;

        println!("✅ Transaction: {}", self.explorer_url(&signature));

        Ok(signature)
    }

    /// Simulate first, then send unless `dry_run` is set.
    pub fn simulate_and_send(
        &self,
        instructions: &[Instruction],
        payer: &dyn Signer,
        extra_signers: &[&dyn Signer],
        dry_run: bool,
    ) -> ClientResult<TxOutcome> {
        let tx = self.sign_transaction(instructions, payer, extra_signers)?;
        let sim_result = self.simulate_transaction(&tx)?;

        if !sim_result.success {
            return Err(ClientError::SimulationFailed(
                sim_result
                    .error
                    .unwrap_or_else(|| "Unknown error".to_string()),
            ));
        }

        if dry_run {
            println!(
                "🧪 Dry run successful - transaction would consume {} compute units",
                sim_result.compute_units.unwrap_or(0)
            );
            return Ok(TxOutcome::Simulated(sim_result.raw));
        }

        let signature = self.send_instructions(instructions, payer, extra_signers)?;
        Ok(TxOutcome::Executed(signature))
    }

    fn sign_transaction(
        &self,
        instructions: &[Instruction],
        payer: &dyn Signer,
        extra_signers: &[&dyn Signer],
    ) -> ClientResult<Transaction> {
        let recent_blockhash = self.rpc_client.get_latest_blockhash()?;

        let mut signers: Vec<&dyn Signer> = vec![payer];
        signers.extend_from_slice(extra_signers);

        Ok(Transaction::new_signed_with_payer(
            instructions,
            Some(&payer.pubkey()),
            &signers,
            recent_blockhash,
        ))
    }

    // ================================================================================================
    // Utility Methods
    // ================================================================================================

    /// Explorer link for a signature, tagged with the cluster when the RPC
    /// URL makes it obvious.
    pub fn explorer_url(&self, signature: &Signature) -> String {
        let cluster = if self.rpc_url.contains("devnet") {
            "?cluster=devnet"
        } else if self.rpc_url.contains("testnet") {
            "?cluster=testnet"
        } else {
            ""
        };
        format!("https://explorer.solana.com/tx/{}{}", signature, cluster)
    }

    /// Get the RPC client (for advanced operations)
    pub fn rpc_client(&self) -> &RpcClient {
        &self.rpc_client
    }

    /// The URL this client talks to.
    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }
}
