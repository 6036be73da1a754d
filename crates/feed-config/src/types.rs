//! Configuration types for the price feed.

use feed_types::common::{Address, BlockNumber};
use serde::{Deserialize, Serialize};

/// Complete feed configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeedConfig {
	/// Chain connection settings
	pub chain: ChainSettings,
	/// Price aggregate contract deployments
	pub oracle: OracleSettings,
	/// Fallback price source
	pub fallback: FallbackSettings,
	/// Pools currently recognized by the protocol
	pub whitelist: WhitelistSettings,
}

/// Chain connection settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChainSettings {
	/// Chain name for logging
	pub name: String,
	/// RPC endpoint URL
	pub rpc_url: String,
}

/// Price aggregate contract settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OracleSettings {
	/// Historical deployments, matched to blocks by starting block
	pub deployments: Vec<DeploymentSettings>,
}

/// One contract deployment
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DeploymentSettings {
	/// First block this deployment serves
	pub from_block: BlockNumber,
	/// Contract address
	pub address: Address,
}

/// Fallback price source settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FallbackSettings {
	/// Curve-style pricing contract address
	pub address: Address,
}

/// Whitelist settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WhitelistSettings {
	/// Eligible pool addresses
	pub pools: Vec<Address>,
}
