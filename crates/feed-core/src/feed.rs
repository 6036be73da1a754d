//! The price feed service.

use std::sync::Arc;

use feed_config::FeedConfig;
use feed_oracle::{connect, CurveFallbackSource, DeploymentSchedule, OnchainPriceOracle, OracleDeployment};
use feed_types::{
	BlockNumber, FallbackPriceSource, PriceOracle, PriceSnapshot, Result, WhitelistProvider, U256,
};
use tracing::{debug, info, warn};

use crate::whitelist::StaticWhitelist;

/// Price feed service over the oracle, whitelist, and fallback seams.
pub struct PriceFeed {
	oracle: Arc<dyn PriceOracle>,
	whitelist: Arc<dyn WhitelistProvider>,
	fallback: Arc<dyn FallbackPriceSource>,
}

impl PriceFeed {
	pub fn new(
		oracle: Arc<dyn PriceOracle>,
		whitelist: Arc<dyn WhitelistProvider>,
		fallback: Arc<dyn FallbackPriceSource>,
	) -> Self {
		Self {
			oracle,
			whitelist,
			fallback,
		}
	}

	/// Wires the on-chain adapters and static whitelist from configuration.
	pub fn from_config(config: &FeedConfig) -> Result<Self> {
		let provider = connect(&config.chain.rpc_url)?;

		let deployments = DeploymentSchedule::new(
			config
				.oracle
				.deployments
				.iter()
				.map(|d| OracleDeployment {
					from_block: d.from_block,
					address: d.address,
				})
				.collect(),
		)?;

		info!(
			chain = %config.chain.name,
			deployments = config.oracle.deployments.len(),
			whitelisted = config.whitelist.pools.len(),
			"price feed configured"
		);

		Ok(Self::new(
			Arc::new(OnchainPriceOracle::new(provider.clone(), deployments)),
			Arc::new(StaticWhitelist::new(config.whitelist.pools.iter().copied())),
			Arc::new(CurveFallbackSource::new(provider, config.fallback.address)),
		))
	}

	/// Builds a whitelist-aware snapshot for the given block.
	pub async fn snapshot_at(&self, block: BlockNumber) -> Result<PriceSnapshot> {
		let outcome = self.oracle.price_at(block).await?;
		let whitelist = self.whitelist.whitelisted_pools().await?;
		let snapshot = PriceSnapshot::build(outcome, &whitelist)?;

		match &snapshot {
			PriceSnapshot::Reverted => warn!(block, "oracle price call reverted"),
			PriceSnapshot::Priced {
				eligible,
				ineligible,
				..
			} => debug!(
				block,
				eligible = eligible.len(),
				ineligible = ineligible.len(),
				"built price snapshot"
			),
		}

		Ok(snapshot)
	}

	/// The overall price at `block`, falling back to the secondary source
	/// when the oracle call reverted.
	///
	/// A failure of the fallback source itself propagates unchanged.
	pub async fn price_at(&self, block: BlockNumber) -> Result<U256> {
		let snapshot = self.snapshot_at(block).await?;
		if snapshot.is_reverted() {
			debug!(block, "reading fallback price source");
			return self.fallback.current_price().await;
		}
		Ok(snapshot.value()?.price)
	}
}
