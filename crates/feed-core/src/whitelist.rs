//! Config-backed whitelist provider.

use async_trait::async_trait;
use feed_types::{Address, Result, WhitelistProvider};
use std::collections::HashSet;

/// [`WhitelistProvider`] over a fixed pool set supplied at construction.
///
/// Used where the eligible set is maintained out of band (configuration,
/// governance exports). Deployments that track whitelist events live should
/// implement the trait over their own store instead.
pub struct StaticWhitelist {
	pools: HashSet<Address>,
}

impl StaticWhitelist {
	pub fn new(pools: impl IntoIterator<Item = Address>) -> Self {
		Self {
			pools: pools.into_iter().collect(),
		}
	}
}

#[async_trait]
impl WhitelistProvider for StaticWhitelist {
	async fn whitelisted_pools(&self) -> Result<HashSet<Address>> {
		Ok(self.pools.clone())
	}
}
