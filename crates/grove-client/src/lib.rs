/*!
# Grove Client

RPC wrapper for the grove compressed-NFT demo.

One properly configured blocking [`solana_client::rpc_client::RpcClient`]
behind a small surface: balance and rent queries, account-existence checks,
a devnet airdrop convenience, and transaction sending with simulation,
retries, and explorer links.

## Usage

```rust,no_run
use grove_client::{GroveClient, ClientResult};
use solana_sdk::pubkey::Pubkey;

fn example(payer: Pubkey) -> ClientResult<()> {
    let client = GroveClient::new("https://api.devnet.solana.com".to_string())?;
    let lamports = client.balance(&payer)?;
    println!("payer holds {} lamports", lamports);
    Ok(())
}
```
*/

pub mod client;
pub mod errors;
pub mod types;

pub use client::GroveClient;
pub use errors::{ClientError, ClientResult};
pub use types::{SimulationSummary, TxOutcome};
