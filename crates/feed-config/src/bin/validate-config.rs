//! Configuration validation utility
//!
//! Usage: cargo run --bin validate-config feed.toml

use std::env;
use std::process;

use feed_config::ConfigLoader;

fn main() {
	tracing_subscriber::fmt::init();

	let args: Vec<String> = env::args().collect();

	if args.len() != 2 {
		eprintln!("Usage: {} <config-file>", args[0]);
		process::exit(1);
	}

	let config_path = &args[1];

	println!("Validating configuration file: {}", config_path);

	match ConfigLoader::from_file(config_path) {
		Ok(config) => {
			println!("✅ Configuration is valid!");
			println!("Chain: {}", config.chain.name);
			println!("Oracle deployments: {}", config.oracle.deployments.len());
			println!("Fallback contract: {}", config.fallback.address);
			println!("Whitelisted pools: {}", config.whitelist.pools.len());
		}
		Err(e) => {
			eprintln!("❌ Configuration validation failed:");
			eprintln!("{}", e);
			process::exit(1);
		}
	}
}
