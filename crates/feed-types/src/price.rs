//! Raw oracle output types.
//!
//! These mirror the price aggregate contract's ABI field-for-field. The
//! normalizer sums, weights, and divides these values but never rescales
//! them; decimal interpretation stays with the caller.

use crate::common::{Address, I256, U256};
use serde::{Deserialize, Serialize};

/// One pool's breakdown as reported by the price contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolPrice {
	/// The pool's address.
	pub pool: Address,
	/// Constituent tokens, in contract order.
	pub tokens: Vec<Address>,
	/// Token balances, same length and order as `tokens`.
	pub balances: Vec<U256>,
	/// Pool-local price, USD at 6 decimals.
	pub price: U256,
	/// Pool-local liquidity, USD fixed point.
	pub liquidity: U256,
	/// Signed imbalance against the stable reference.
	pub delta_b: I256,
	/// USD value of the pool's LP-equivalent stake.
	pub lp_usd: U256,
	/// Protocol base value of that stake.
	pub lp_bdv: U256,
}

/// Overall price/liquidity/deltaB figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceAggregate {
	pub price: U256,
	pub liquidity: U256,
	pub delta_b: I256,
}

/// The full contract response: overall figures plus the per-pool breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPriceResult {
	pub price: U256,
	pub liquidity: U256,
	pub delta_b: I256,
	/// Per-pool breakdown, in contract order.
	pub pools: Vec<PoolPrice>,
}

impl RawPriceResult {
	/// The overall figures exactly as reported, before whitelist filtering.
	pub fn aggregate(&self) -> PriceAggregate {
		PriceAggregate {
			price: self.price,
			liquidity: self.liquidity,
			delta_b: self.delta_b,
		}
	}
}

/// Outcome of one oracle invocation.
///
/// A revert is a legitimate result the caller must handle, distinct from a
/// transport fault. Adapters map contract-level reverts here and surface
/// everything else as an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OracleCallOutcome {
	/// The contract answered with a structured result.
	Priced(RawPriceResult),
	/// The call reverted; no data is available for this block.
	Reverted,
}
