/*!
# Client Data Types

Data structures for transaction management and simulation results.
*/

use solana_client::rpc_response::RpcSimulateTransactionResult;
use solana_sdk::signature::Signature;

/// Result of transaction operations
#[derive(Debug)]
pub enum TxOutcome {
    /// Transaction was only simulated (dry-run mode)
    Simulated(RpcSimulateTransactionResult),
    /// Transaction was executed successfully
    Executed(Signature),
}

impl TxOutcome {
    /// Signature of the landed transaction, if one was sent.
    pub fn signature(&self) -> Option<&Signature> {
        match self {
            TxOutcome::Simulated(_) => None,
            TxOutcome::Executed(sig) => Some(sig),
        }
    }
}

/// Result of transaction simulation
#[derive(Debug)]
pub struct SimulationSummary {
    /// Whether the simulation succeeded
    pub success: bool,
    /// Compute units consumed
    pub compute_units: Option<u64>,
    /// Error message if simulation failed
    pub error: Option<String>,
    /// Raw simulation result
    pub raw: RpcSimulateTransactionResult,
}

impl SimulationSummary {
    pub fn from_rpc_result(result: RpcSimulateTransactionResult) -> Self {
        let success = result.err.is_none();
        let compute_units = result.units_consumed;
        let error = result.err.as_ref().map(|e| e.to_string());

        Self {
            success,
            compute_units,
            error,
            raw: result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::transaction::TransactionError;

    fn empty_rpc_result(err: Option<TransactionError>) -> RpcSimulateTransactionResult {
        RpcSimulateTransactionResult {
            err,
            logs: None,
            accounts: None,
            units_consumed: Some(5_000),
            loaded_accounts_data_size: None,
            return_data: None,
            inner_instructions: None,
            replacement_blockhash: None,
        }
    }

    #[test]
    fn summary_reflects_simulation_error() {
        let ok = SimulationSummary::from_rpc_result(empty_rpc_result(None));
        assert!(ok.success);
        assert_eq!(ok.compute_units, Some(5_000));
        assert!(ok.error.is_none());

        let failed = SimulationSummary::from_rpc_result(empty_rpc_result(Some(
            TransactionError::AccountNotFound,
        )));
        assert!(!failed.success);
        assert!(failed.error.is_some());
    }

    #[test]
    fn simulated_outcome_has_no_signature() {
        let outcome = TxOutcome::Simulated(empty_rpc_result(None));
        assert!(outcome.signature().is_none());

        let sig = Signature::default();
        let executed = TxOutcome::Executed(sig);
        assert_eq!(executed.signature(), Some(&sig));
    }
}
