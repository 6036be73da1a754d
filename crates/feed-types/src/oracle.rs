//! Trait boundaries between the normalizer and its collaborators.

use crate::common::{Address, BlockNumber, U256};
use crate::errors::Result;
use crate::price::OracleCallOutcome;
use async_trait::async_trait;
use std::collections::HashSet;

/// Transport boundary for the price aggregate contract.
///
/// Implementations resolve the correct contract deployment for the block,
/// issue the call, and classify a contract-level revert as
/// [`OracleCallOutcome::Reverted`]. No retries; resilience belongs to the
/// transport, failure semantics to the caller.
#[async_trait]
pub trait PriceOracle: Send + Sync {
	/// Query the oracle pinned to the given block.
	async fn price_at(&self, block: BlockNumber) -> Result<OracleCallOutcome>;
}

/// Source of the pool set the protocol currently recognizes.
#[async_trait]
pub trait WhitelistProvider: Send + Sync {
	/// The set of pool addresses eligible for aggregate calculations.
	async fn whitelisted_pools(&self) -> Result<HashSet<Address>>;
}

/// Secondary price source, consulted only when the primary call reverted.
#[async_trait]
pub trait FallbackPriceSource: Send + Sync {
	/// Current scalar price at the protocol's 6-decimal USD scale.
	async fn current_price(&self) -> Result<U256>;
}
