//! ABI bindings for the contracts the feed reads.

use alloy::sol;
use feed_types::price::{PoolPrice, RawPriceResult};

// Solidity type definitions for the price aggregate contract.
//
// These match the on-chain ABI; `RawPriceResult` mirrors them field-for-field
// and must stay in sync if the contract response ever changes.
sol! {
	#[sol(rpc)]
	interface IPriceAggregate {
		/// One pool's breakdown.
		struct Pool {
			address pool;
			address[] tokens;
			uint256[] balances;
			uint256 price;
			uint256 liquidity;
			int256 deltaB;
			uint256 lpUsd;
			uint256 lpBdv;
		}

		/// Overall figures plus the per-pool breakdown.
		struct Prices {
			uint256 price;
			uint256 liquidity;
			int256 deltaB;
			Pool[] ps;
		}

		function price() external view returns (Prices memory p);
	}
}

// Curve-style fallback pricing contract, read only when the aggregate call
// reverts.
sol! {
	#[sol(rpc)]
	interface ICurvePrice {
		struct CurvePrices {
			address pool;
			address[2] tokens;
			uint256[2] balances;
			uint256 price;
			uint256 liquidity;
			int256 deltaB;
			uint256 lpUsd;
			uint256 lpBdv;
		}

		function getCurve() external view returns (CurvePrices memory curvePrices);
	}
}

impl From<IPriceAggregate::Pool> for PoolPrice {
	fn from(value: IPriceAggregate::Pool) -> Self {
		Self {
			pool: value.pool,
			tokens: value.tokens,
			balances: value.balances,
			price: value.price,
			liquidity: value.liquidity,
			delta_b: value.deltaB,
			lp_usd: value.lpUsd,
			lp_bdv: value.lpBdv,
		}
	}
}

impl From<IPriceAggregate::Prices> for RawPriceResult {
	fn from(value: IPriceAggregate::Prices) -> Self {
		Self {
			price: value.price,
			liquidity: value.liquidity,
			delta_b: value.deltaB,
			pools: value.ps.into_iter().map(Into::into).collect(),
		}
	}
}
