//! Fixed deployment parameters for the mint terminal.
//!
//! The drop this build mints from is baked in; there is no config-file or
//! environment surface for it. Point these constants at another deployment
//! and rebuild.

use shared::dto::wallet::Cluster;

// Put your NFT Drop contract address from the dashboard here
//pub const DROP_CONTRACT_ADDRESS: &str = "So11111111111111111111111111111111111111112";
pub const DROP_CONTRACT_ADDRESS: &str = "8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL";

/// Cluster the drop contract is deployed on; wallet sessions on any other
/// cluster are asked to switch before a claim is submitted
pub const EXPECTED_CLUSTER: Cluster = Cluster::Devnet;

/// How often the drop read queries are refreshed
pub const DROP_POLL_SECS: u64 = 10;
