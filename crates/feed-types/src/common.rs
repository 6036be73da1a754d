//! Common types used throughout the price feed.

// Re-export commonly used ethereum types
pub use alloy::primitives::{Address, I256, U256};

/// Block number
pub type BlockNumber = u64;

/// Decimal scale of USD-denominated prices reported by the oracle.
pub const PRICE_DECIMALS: u32 = 6;
