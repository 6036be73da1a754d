//! On-chain adapters for the price feed.
//!
//! This crate is the transport boundary: it binds the price aggregate
//! contract and the curve-style fallback contract, resolves which historical
//! deployment a block belongs to, and classifies contract-level reverts as
//! the first-class [`feed_types::OracleCallOutcome::Reverted`] outcome. No
//! business logic lives here; the normalizer consumes whatever these
//! adapters return.

pub mod adapter;
pub mod contracts;
pub mod deployments;
pub mod fallback;

pub use adapter::{connect, OnchainPriceOracle};
pub use deployments::{DeploymentSchedule, OracleDeployment};
pub use fallback::CurveFallbackSource;
