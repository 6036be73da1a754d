//! # Price Feed Core
//!
//! Composes the oracle adapter, whitelist provider, and fallback price
//! source into the two query operations the indexing pipeline consumes:
//!
//! - [`PriceFeed::snapshot_at`] - a whitelist-aware [`feed_types::PriceSnapshot`]
//!   for one block
//! - [`PriceFeed::price_at`] - the overall price, delegating to the fallback
//!   source when the oracle call reverted
//!
//! Each query is a self-contained computation; the service holds no mutable
//! state and requires no coordination between concurrent callers.

pub mod feed;
pub mod whitelist;

pub use feed::PriceFeed;
pub use whitelist::StaticWhitelist;
