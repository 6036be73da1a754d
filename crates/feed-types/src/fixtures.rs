//! Builders that synthesize oracle call results for tests.
//!
//! Kept in the library proper so downstream crates can drive the normalizer
//! and the service layer without touching a chain.

use crate::common::{Address, I256, U256, PRICE_DECIMALS};
use crate::price::{OracleCallOutcome, PoolPrice, RawPriceResult};

/// A deterministic test address: 20 bytes of `tag`.
pub fn pool_address(tag: u8) -> Address {
	Address::from([tag; 20])
}

/// Synthesizes a [`PoolPrice`] with plausible defaults.
#[derive(Debug, Clone)]
pub struct PoolPriceBuilder {
	inner: PoolPrice,
}

impl PoolPriceBuilder {
	pub fn new(pool: Address) -> Self {
		Self {
			inner: PoolPrice {
				pool,
				tokens: Vec::new(),
				balances: Vec::new(),
				// 1.00 USD at the protocol scale
				price: U256::from(10u64.pow(PRICE_DECIMALS)),
				liquidity: U256::ZERO,
				delta_b: I256::ZERO,
				lp_usd: U256::ZERO,
				lp_bdv: U256::ZERO,
			},
		}
	}

	pub fn tokens(mut self, tokens: Vec<Address>) -> Self {
		self.inner.tokens = tokens;
		self
	}

	pub fn balances(mut self, balances: Vec<u64>) -> Self {
		self.inner.balances = balances.into_iter().map(U256::from).collect();
		self
	}

	pub fn price(mut self, price: u64) -> Self {
		self.inner.price = U256::from(price);
		self
	}

	pub fn raw_price(mut self, price: U256) -> Self {
		self.inner.price = price;
		self
	}

	pub fn liquidity(mut self, liquidity: u64) -> Self {
		self.inner.liquidity = U256::from(liquidity);
		self
	}

	pub fn raw_liquidity(mut self, liquidity: U256) -> Self {
		self.inner.liquidity = liquidity;
		self
	}

	pub fn delta_b(mut self, delta_b: i64) -> Self {
		self.inner.delta_b = I256::try_from(delta_b).expect("i64 fits in I256");
		self
	}

	pub fn lp_usd(mut self, lp_usd: u64) -> Self {
		self.inner.lp_usd = U256::from(lp_usd);
		self
	}

	pub fn lp_bdv(mut self, lp_bdv: u64) -> Self {
		self.inner.lp_bdv = U256::from(lp_bdv);
		self
	}

	pub fn build(self) -> PoolPrice {
		self.inner
	}
}

/// Synthesizes a [`RawPriceResult`].
#[derive(Debug, Clone, Default)]
pub struct RawPriceResultBuilder {
	price: U256,
	liquidity: U256,
	delta_b: I256,
	pools: Vec<PoolPrice>,
}

impl RawPriceResultBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn price(mut self, price: u64) -> Self {
		self.price = U256::from(price);
		self
	}

	pub fn liquidity(mut self, liquidity: u64) -> Self {
		self.liquidity = U256::from(liquidity);
		self
	}

	pub fn delta_b(mut self, delta_b: i64) -> Self {
		self.delta_b = I256::try_from(delta_b).expect("i64 fits in I256");
		self
	}

	pub fn pool(mut self, pool: PoolPrice) -> Self {
		self.pools.push(pool);
		self
	}

	pub fn build(self) -> RawPriceResult {
		RawPriceResult {
			price: self.price,
			liquidity: self.liquidity,
			delta_b: self.delta_b,
			pools: self.pools,
		}
	}

	pub fn build_outcome(self) -> OracleCallOutcome {
		OracleCallOutcome::Priced(self.build())
	}
}
