//! Error types for the price feed.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FeedError>;

#[derive(Error, Debug)]
pub enum FeedError {
	#[error("Oracle error: {0}")]
	Oracle(String),

	#[error("Whitelist error: {0}")]
	Whitelist(String),

	#[error("Fallback price error: {0}")]
	Fallback(String),

	#[error("Configuration error: {0}")]
	Config(String),

	#[error(transparent)]
	Snapshot(#[from] SnapshotError),

	#[error(transparent)]
	Other(#[from] anyhow::Error),
}

/// Failures of snapshot construction and its guarded accessors.
///
/// These are part of the public contract: a reverted call must never be
/// readable as a zero-valued aggregate, and the liquidity-weighted recompute
/// must fail loudly rather than divide by zero.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotError {
	#[error("accessed the value of a reverted oracle call, check is_reverted() before reading")]
	RevertedAccess,

	#[error("eligible pools sum to zero liquidity, the weighted aggregate price is undefined")]
	DivisionByZero,

	#[error("arithmetic overflow while recomputing the aggregate price")]
	Overflow,
}
