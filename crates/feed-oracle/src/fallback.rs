//! Secondary price source, read only when the aggregate call reverts.

use alloy::providers::RootProvider;
use async_trait::async_trait;
use feed_types::{Address, FallbackPriceSource, FeedError, Result, U256};
use tracing::debug;

use crate::contracts::ICurvePrice;

/// [`FallbackPriceSource`] backed by the curve-style pricing contract.
///
/// Reads the contract's current state rather than a historical block; the
/// fallback only runs for blocks where the aggregate contract cannot answer.
pub struct CurveFallbackSource {
	provider: RootProvider,
	address: Address,
}

impl CurveFallbackSource {
	pub fn new(provider: RootProvider, address: Address) -> Self {
		Self { provider, address }
	}
}

#[async_trait]
impl FallbackPriceSource for CurveFallbackSource {
	async fn current_price(&self) -> Result<U256> {
		let contract = ICurvePrice::new(self.address, self.provider.clone());
		let curve = contract
			.getCurve()
			.call()
			.await
			.map_err(|e| FeedError::Fallback(format!("getCurve call failed: {}", e)))?;

		debug!(address = %self.address, price = %curve.price, "fallback price read");
		Ok(curve.price)
	}
}
