/*!
# Grove SDK

Offline building blocks for the grove compressed-NFT demo: concurrent-merkle-tree
account sizing, PDA lookups, NFT metadata construction, and instruction builders
over the Bubblegum and Token Metadata program clients.

Nothing in this crate touches the network; everything here can be unit tested
without a validator.
*/

mod errors;
mod instruction_builders;
mod metadata;
mod pdas;
mod tree_spec;

pub use errors::{SdkError, SdkResult};
pub use instruction_builders::*;
pub use metadata::{CollectionParams, CreatorShare, NftTemplate};
pub use pdas::*;
pub use tree_spec::TreeSpec;

// Re-export the program IDs callers need for account checks
pub use mpl_bubblegum::ID as BUBBLEGUM_PROGRAM_ID;
pub use mpl_token_metadata::ID as TOKEN_METADATA_PROGRAM_ID;
