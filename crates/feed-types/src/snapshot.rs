//! Whitelist-aware normalization of one oracle response.
//!
//! The oracle reports every pool it knows about; the consuming protocol may
//! have dewhitelisted some of them since that contract was deployed. A
//! [`PriceSnapshot`] partitions the response against the current whitelist
//! and recomputes the overall figures when only part of the pool set
//! survived.

use std::collections::HashSet;

use crate::common::{Address, I256, U256};
use crate::errors::SnapshotError;
use crate::price::{OracleCallOutcome, PoolPrice, PriceAggregate};

/// One oracle response, partitioned against the caller's whitelist.
///
/// Immutable once built and scoped to a single query; every pool the oracle
/// reported lives in exactly one of the two partitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PriceSnapshot {
	/// The oracle call reverted; no data is available.
	Reverted,
	/// The call succeeded.
	Priced {
		aggregate: PriceAggregate,
		/// Whitelisted pools, in oracle order.
		eligible: Vec<PoolPrice>,
		/// Dewhitelisted pools, in oracle order.
		ineligible: Vec<PoolPrice>,
	},
}

impl PriceSnapshot {
	/// Builds a snapshot from one call outcome and the current whitelist.
	///
	/// Aggregate policy:
	/// - no pools removed: the oracle's figures pass through untouched;
	/// - some pools removed: price/liquidity/deltaB are recomputed from the
	///   eligible pools, price weighted by liquidity;
	/// - every pool removed: the oracle's figures are kept as reported. The
	///   call itself succeeded; zeroing them would misstate the oracle's own
	///   economic state at that block.
	pub fn build(
		outcome: OracleCallOutcome,
		whitelist: &HashSet<Address>,
	) -> Result<Self, SnapshotError> {
		let raw = match outcome {
			OracleCallOutcome::Reverted => return Ok(Self::Reverted),
			OracleCallOutcome::Priced(raw) => raw,
		};

		let reported = raw.aggregate();
		let mut eligible = Vec::with_capacity(raw.pools.len());
		let mut ineligible = Vec::new();
		for pool in raw.pools {
			if whitelist.contains(&pool.pool) {
				eligible.push(pool);
			} else {
				ineligible.push(pool);
			}
		}

		let aggregate = if ineligible.is_empty() || eligible.is_empty() {
			reported
		} else {
			weighted_aggregate(&eligible)?
		};

		Ok(Self::Priced {
			aggregate,
			eligible,
			ineligible,
		})
	}

	/// True iff the underlying oracle call reverted.
	pub fn is_reverted(&self) -> bool {
		matches!(self, Self::Reverted)
	}

	/// The overall figures, recomputed where pools were dewhitelisted.
	pub fn value(&self) -> Result<&PriceAggregate, SnapshotError> {
		match self {
			Self::Reverted => Err(SnapshotError::RevertedAccess),
			Self::Priced { aggregate, .. } => Ok(aggregate),
		}
	}

	/// Whitelisted pools, in oracle order.
	pub fn eligible_pools(&self) -> Result<&[PoolPrice], SnapshotError> {
		match self {
			Self::Reverted => Err(SnapshotError::RevertedAccess),
			Self::Priced { eligible, .. } => Ok(eligible),
		}
	}

	/// Pools the oracle reported but the whitelist no longer contains.
	pub fn ineligible_pools(&self) -> Result<&[PoolPrice], SnapshotError> {
		match self {
			Self::Reverted => Err(SnapshotError::RevertedAccess),
			Self::Priced { ineligible, .. } => Ok(ineligible),
		}
	}

	/// Looks a pool up in either partition, eligible first.
	///
	/// Callers needing to know which partition matched must inspect the
	/// partitions directly. On a reverted snapshot both partitions are
	/// empty, so this returns `None`.
	pub fn find_pool(&self, pool: Address) -> Option<&PoolPrice> {
		match self {
			Self::Reverted => None,
			Self::Priced {
				eligible,
				ineligible,
				..
			} => eligible
				.iter()
				.chain(ineligible.iter())
				.find(|p| p.pool == pool),
		}
	}
}

/// Liquidity-weighted aggregate over the surviving pools.
///
/// `price = Σ(price_i · liquidity_i) / Σ liquidity_i`, with deltaB and
/// liquidity summed directly. A zero liquidity sum has no defined weighting
/// and surfaces as [`SnapshotError::DivisionByZero`].
fn weighted_aggregate(eligible: &[PoolPrice]) -> Result<PriceAggregate, SnapshotError> {
	let mut weighted = U256::ZERO;
	let mut liquidity = U256::ZERO;
	let mut delta_b = I256::ZERO;

	for pool in eligible {
		let term = pool
			.price
			.checked_mul(pool.liquidity)
			.ok_or(SnapshotError::Overflow)?;
		weighted = weighted.checked_add(term).ok_or(SnapshotError::Overflow)?;
		liquidity = liquidity
			.checked_add(pool.liquidity)
			.ok_or(SnapshotError::Overflow)?;
		delta_b = delta_b
			.checked_add(pool.delta_b)
			.ok_or(SnapshotError::Overflow)?;
	}

	let price = weighted
		.checked_div(liquidity)
		.ok_or(SnapshotError::DivisionByZero)?;

	Ok(PriceAggregate {
		price,
		liquidity,
		delta_b,
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::fixtures::{pool_address, PoolPriceBuilder, RawPriceResultBuilder};

	fn whitelist(tags: &[u8]) -> HashSet<Address> {
		tags.iter().map(|t| pool_address(*t)).collect()
	}

	fn three_pool_result() -> OracleCallOutcome {
		RawPriceResultBuilder::new()
			.price(1_000_000)
			.liquidity(600)
			.delta_b(40)
			.pool(
				PoolPriceBuilder::new(pool_address(1))
					.price(990_000)
					.liquidity(100)
					.delta_b(5)
					.build(),
			)
			.pool(
				PoolPriceBuilder::new(pool_address(2))
					.price(1_000_000)
					.liquidity(200)
					.delta_b(47)
					.build(),
			)
			.pool(
				PoolPriceBuilder::new(pool_address(3))
					.price(1_010_000)
					.liquidity(300)
					.delta_b(-12)
					.build(),
			)
			.build_outcome()
	}

	#[test]
	fn test_all_pools_whitelisted_passes_through() {
		let snapshot =
			PriceSnapshot::build(three_pool_result(), &whitelist(&[1, 2, 3])).unwrap();

		assert!(!snapshot.is_reverted());
		let value = snapshot.value().unwrap();
		assert_eq!(value.price, U256::from(1_000_000u64));
		assert_eq!(value.liquidity, U256::from(600u64));
		assert_eq!(value.delta_b, I256::try_from(40).unwrap());
		assert_eq!(snapshot.eligible_pools().unwrap().len(), 3);
		assert!(snapshot.ineligible_pools().unwrap().is_empty());

		// Lookup hits the eligible partition
		let entry = snapshot.find_pool(pool_address(2)).unwrap();
		assert_eq!(entry.liquidity, U256::from(200u64));
	}

	#[test]
	fn test_partial_dewhitelist_recomputes_weighted_aggregate() {
		// Pools {1, 2, 3}, whitelist {1, 3}: pool 2 is removed.
		let snapshot = PriceSnapshot::build(three_pool_result(), &whitelist(&[1, 3])).unwrap();

		let value = snapshot.value().unwrap();
		// (0.99 * 100 + 1.01 * 300) / 400 = 1.005 at 6 decimals
		assert_eq!(value.price, U256::from(1_005_000u64));
		assert_eq!(value.liquidity, U256::from(400u64));
		assert_eq!(value.delta_b, I256::try_from(5 - 12).unwrap());

		let eligible = snapshot.eligible_pools().unwrap();
		assert_eq!(eligible.len(), 2);
		assert_eq!(eligible[0].pool, pool_address(1));
		assert_eq!(eligible[1].pool, pool_address(3));

		let ineligible = snapshot.ineligible_pools().unwrap();
		assert_eq!(ineligible.len(), 1);
		assert_eq!(ineligible[0].pool, pool_address(2));
	}

	#[test]
	fn test_full_dewhitelist_keeps_reported_aggregate() {
		let snapshot = PriceSnapshot::build(three_pool_result(), &HashSet::new()).unwrap();

		// Aggregates are neither recomputed nor zeroed
		let value = snapshot.value().unwrap();
		assert_eq!(value.price, U256::from(1_000_000u64));
		assert_eq!(value.liquidity, U256::from(600u64));
		assert_eq!(value.delta_b, I256::try_from(40).unwrap());

		assert!(snapshot.eligible_pools().unwrap().is_empty());
		let ineligible = snapshot.ineligible_pools().unwrap();
		assert_eq!(ineligible.len(), 3);
		// Original oracle order is preserved
		assert_eq!(ineligible[0].pool, pool_address(1));
		assert_eq!(ineligible[1].pool, pool_address(2));
		assert_eq!(ineligible[2].pool, pool_address(3));

		// Lookup still finds dewhitelisted pools
		let entry = snapshot.find_pool(pool_address(1)).unwrap();
		assert_eq!(entry.liquidity, U256::from(100u64));
	}

	#[test]
	fn test_partition_completeness() {
		for tags in [&[][..], &[1][..], &[2, 3][..], &[1, 2, 3][..]] {
			let snapshot =
				PriceSnapshot::build(three_pool_result(), &whitelist(tags)).unwrap();
			let eligible = snapshot.eligible_pools().unwrap();
			let ineligible = snapshot.ineligible_pools().unwrap();
			assert_eq!(eligible.len() + ineligible.len(), 3);
			for tag in [1u8, 2, 3] {
				let in_eligible = eligible.iter().any(|p| p.pool == pool_address(tag));
				let in_ineligible = ineligible.iter().any(|p| p.pool == pool_address(tag));
				assert!(in_eligible ^ in_ineligible);
			}
		}
	}

	#[test]
	fn test_reverted_snapshot_guards_access() {
		let snapshot =
			PriceSnapshot::build(OracleCallOutcome::Reverted, &whitelist(&[1])).unwrap();

		assert!(snapshot.is_reverted());
		assert_eq!(snapshot.value(), Err(SnapshotError::RevertedAccess));
		assert_eq!(
			snapshot.eligible_pools().unwrap_err(),
			SnapshotError::RevertedAccess
		);
		assert_eq!(
			snapshot.ineligible_pools().unwrap_err(),
			SnapshotError::RevertedAccess
		);
		// Lookup degenerates to not-found rather than failing
		assert!(snapshot.find_pool(pool_address(1)).is_none());
	}

	#[test]
	fn test_find_pool_missing_id_is_none() {
		let snapshot =
			PriceSnapshot::build(three_pool_result(), &whitelist(&[1, 2, 3])).unwrap();
		assert!(snapshot.find_pool(pool_address(9)).is_none());
	}

	#[test]
	fn test_zero_eligible_liquidity_is_division_by_zero() {
		// Pool 1 survives with zero liquidity while pool 2 (liquidity 500)
		// is removed: removed == 1 of 2, so the recompute runs and divides
		// by a zero liquidity sum.
		let outcome = RawPriceResultBuilder::new()
			.price(1_000_000)
			.liquidity(500)
			.pool(
				PoolPriceBuilder::new(pool_address(1))
					.price(980_000)
					.liquidity(0)
					.build(),
			)
			.pool(
				PoolPriceBuilder::new(pool_address(2))
					.price(1_000_000)
					.liquidity(500)
					.build(),
			)
			.build_outcome();

		let err = PriceSnapshot::build(outcome, &whitelist(&[1])).unwrap_err();
		assert_eq!(err, SnapshotError::DivisionByZero);
	}

	#[test]
	fn test_recompute_overflow_is_reported() {
		let outcome = RawPriceResultBuilder::new()
			.price(1_000_000)
			.liquidity(1)
			.pool(
				PoolPriceBuilder::new(pool_address(1))
					.raw_price(U256::MAX)
					.raw_liquidity(U256::MAX)
					.build(),
			)
			.pool(
				PoolPriceBuilder::new(pool_address(2))
					.price(1_000_000)
					.liquidity(1)
					.build(),
			)
			.build_outcome();

		let err = PriceSnapshot::build(outcome, &whitelist(&[1])).unwrap_err();
		assert_eq!(err, SnapshotError::Overflow);
	}

	#[test]
	fn test_empty_pool_list_passes_through() {
		let outcome = RawPriceResultBuilder::new()
			.price(1_020_000)
			.liquidity(0)
			.build_outcome();

		let snapshot = PriceSnapshot::build(outcome, &whitelist(&[1])).unwrap();
		assert_eq!(snapshot.value().unwrap().price, U256::from(1_020_000u64));
		assert!(snapshot.eligible_pools().unwrap().is_empty());
		assert!(snapshot.ineligible_pools().unwrap().is_empty());
	}
}
