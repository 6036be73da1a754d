//! The oracle call boundary.

use alloy::eips::BlockId;
use alloy::providers::RootProvider;
use async_trait::async_trait;
use feed_types::{BlockNumber, FeedError, OracleCallOutcome, PriceOracle, Result};
use tracing::debug;

use crate::contracts::IPriceAggregate;
use crate::deployments::DeploymentSchedule;

/// Creates an HTTP provider for the configured RPC endpoint.
pub fn connect(rpc_url: &str) -> Result<RootProvider> {
	Ok(RootProvider::new_http(rpc_url.parse().map_err(|e| {
		FeedError::Config(format!("Invalid RPC URL: {}", e))
	})?))
}

/// [`PriceOracle`] backed by the on-chain price aggregate contract.
///
/// Each query resolves the deployment in effect at the block, pins the call
/// to that block, and classifies a contract-level revert as a first-class
/// outcome. Transport faults stay errors so a flaky RPC is never mistaken
/// for a revert.
pub struct OnchainPriceOracle {
	provider: RootProvider,
	deployments: DeploymentSchedule,
}

impl OnchainPriceOracle {
	pub fn new(provider: RootProvider, deployments: DeploymentSchedule) -> Self {
		Self {
			provider,
			deployments,
		}
	}
}

#[async_trait]
impl PriceOracle for OnchainPriceOracle {
	async fn price_at(&self, block: BlockNumber) -> Result<OracleCallOutcome> {
		let address = self.deployments.address_at(block).ok_or_else(|| {
			FeedError::Oracle(format!("no price contract deployed at block {}", block))
		})?;

		let contract = IPriceAggregate::new(address, self.provider.clone());
		match contract.price().block(BlockId::number(block)).call().await {
			Ok(prices) => Ok(OracleCallOutcome::Priced(prices.into())),
			Err(err) if is_revert(&err) => {
				debug!(block, %address, "price call reverted");
				Ok(OracleCallOutcome::Reverted)
			}
			Err(err) => Err(FeedError::Oracle(format!(
				"price call at block {} failed: {}",
				block, err
			))),
		}
	}
}

/// True when the error response carries revert data from the contract.
fn is_revert(err: &alloy::contract::Error) -> bool {
	err.as_revert_data().is_some()
}
