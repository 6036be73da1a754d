//! Configuration loading from files and environment.

use crate::types::*;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, info};

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
	/// Load configuration from file
	pub fn from_file<P: AsRef<Path>>(path: P) -> Result<FeedConfig> {
		let path = path.as_ref();
		info!("Loading configuration from {:?}", path);

		let contents = std::fs::read_to_string(path)
			.with_context(|| format!("Failed to read config file: {:?}", path))?;

		let config = match path.extension().and_then(|s| s.to_str()) {
			Some("toml") => Self::from_toml(&contents)?,
			Some("json") => Self::from_json(&contents)?,
			Some("yaml") | Some("yml") => Self::from_yaml(&contents)?,
			_ => anyhow::bail!("Unsupported config format: {:?}", path),
		};

		Self::validate_config(&config)?;
		Ok(config)
	}

	/// Load from TOML string
	pub fn from_toml(contents: &str) -> Result<FeedConfig> {
		toml::from_str(contents).map_err(|e| anyhow::anyhow!("Failed to parse TOML: {}", e))
	}

	/// Load from JSON string
	pub fn from_json(contents: &str) -> Result<FeedConfig> {
		serde_json::from_str(contents).context("Failed to parse JSON")
	}

	/// Load from YAML string
	pub fn from_yaml(contents: &str) -> Result<FeedConfig> {
		serde_yaml::from_str(contents).context("Failed to parse YAML")
	}

	/// Load from file with environment variable overrides applied
	pub fn from_env_and_file<P: AsRef<Path>>(path: P) -> Result<FeedConfig> {
		let mut config = Self::from_file(path)?;
		Self::apply_env_overrides(&mut config)?;
		Self::validate_config(&config)?;
		Ok(config)
	}

	/// Apply environment variable overrides
	fn apply_env_overrides(config: &mut FeedConfig) -> Result<()> {
		if let Ok(url) = std::env::var("FEED_RPC_URL") {
			debug!("Overriding RPC URL from environment");
			config.chain.rpc_url = url;
		}

		if let Ok(address) = std::env::var("FEED_FALLBACK_ADDRESS") {
			debug!("Overriding fallback contract address from environment");
			config.fallback.address = address
				.parse()
				.context("FEED_FALLBACK_ADDRESS is not a valid address")?;
		}

		Ok(())
	}

	/// Validate configuration
	fn validate_config(config: &FeedConfig) -> Result<()> {
		if !config.chain.rpc_url.starts_with("http://") && !config.chain.rpc_url.starts_with("https://")
		{
			anyhow::bail!("RPC URL must start with http:// or https://");
		}

		if config.oracle.deployments.is_empty() {
			anyhow::bail!("At least one oracle deployment must be configured");
		}

		// Two deployments sharing a starting block would make address
		// resolution order-dependent
		let mut blocks: Vec<_> = config
			.oracle
			.deployments
			.iter()
			.map(|d| d.from_block)
			.collect();
		blocks.sort_unstable();
		blocks.dedup();
		if blocks.len() != config.oracle.deployments.len() {
			anyhow::bail!("Oracle deployments must have distinct starting blocks");
		}

		Ok(())
	}
}

/// Load configuration from standard locations
pub fn load_config() -> Result<FeedConfig> {
	// Check for config file in order:
	// 1. Environment variable FEED_CONFIG_FILE
	// 2. ./feed.toml
	// 3. /etc/pool-price-feed/feed.toml

	if let Ok(path) = std::env::var("FEED_CONFIG_FILE") {
		return ConfigLoader::from_env_and_file(Path::new(&path));
	}

	let paths = ["./feed.toml", "/etc/pool-price-feed/feed.toml"];
	for path in &paths {
		if Path::new(path).exists() {
			return ConfigLoader::from_env_and_file(Path::new(path));
		}
	}

	anyhow::bail!("No configuration file found; set FEED_CONFIG_FILE or create ./feed.toml")
}
