//! Historical deployments of the price aggregate contract.
//!
//! The consuming indexer replays history, so a query must land on the
//! contract instance that actually existed at the queried block.

use feed_types::{Address, BlockNumber, FeedError, Result};

/// One deployment: effective from `from_block` until superseded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OracleDeployment {
	pub from_block: BlockNumber,
	pub address: Address,
}

/// Block-ordered table of price contract deployments.
#[derive(Debug, Clone)]
pub struct DeploymentSchedule {
	entries: Vec<OracleDeployment>,
}

impl DeploymentSchedule {
	/// Builds a schedule, ordering entries by starting block.
	pub fn new(mut entries: Vec<OracleDeployment>) -> Result<Self> {
		if entries.is_empty() {
			return Err(FeedError::Config(
				"deployment schedule must contain at least one entry".to_string(),
			));
		}
		entries.sort_by_key(|e| e.from_block);
		Ok(Self { entries })
	}

	/// The deployment in effect at `block`, if any existed yet.
	pub fn address_at(&self, block: BlockNumber) -> Option<Address> {
		self.entries
			.iter()
			.rev()
			.find(|e| e.from_block <= block)
			.map(|e| e.address)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn addr(tag: u8) -> Address {
		Address::from([tag; 20])
	}

	fn schedule() -> DeploymentSchedule {
		// Deliberately out of order; new() sorts
		DeploymentSchedule::new(vec![
			OracleDeployment {
				from_block: 500,
				address: addr(2),
			},
			OracleDeployment {
				from_block: 100,
				address: addr(1),
			},
		])
		.unwrap()
	}

	#[test]
	fn test_address_at_picks_latest_effective_deployment() {
		let schedule = schedule();
		assert_eq!(schedule.address_at(100), Some(addr(1)));
		assert_eq!(schedule.address_at(499), Some(addr(1)));
		assert_eq!(schedule.address_at(500), Some(addr(2)));
		assert_eq!(schedule.address_at(u64::MAX), Some(addr(2)));
	}

	#[test]
	fn test_address_at_before_first_deployment_is_none() {
		assert_eq!(schedule().address_at(99), None);
	}

	#[test]
	fn test_empty_schedule_is_rejected() {
		assert!(DeploymentSchedule::new(Vec::new()).is_err());
	}
}
