//! # Organization Configuration

use dao_types::{Address, U256};
use tracing::{info, warn};

/// Configuration for an organization bootstrap.
#[derive(Debug, Clone)]
pub struct OrgConfig {
    /// The deploying identity; becomes the sole admin of the core registry.
    pub deployer: Address,
    /// Governance token name.
    pub token_name: String,
    /// Governance token symbol.
    pub token_symbol: String,
    /// Initial token supply, in 10^-18 units.
    pub initial_supply: U256,
    /// Change bus channel capacity.
    pub bus_capacity: usize,
}

impl Default for OrgConfig {
    fn default() -> Self {
        Self {
            // Placeholder local deployer; override with DAO_DEPLOYER.
            deployer: Address::new([0xda; 20]),
            token_name: "DAO Multi-Agent Token".to_string(),
            token_symbol: "DMAT".to_string(),
            initial_supply: U256::from(1_000_000u64) * U256::exp10(18),
            bus_capacity: dao_bus::DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

impl OrgConfig {
    /// Load configuration from the environment on top of the defaults.
    ///
    /// Recognized variables: `DAO_DEPLOYER` (40 hex chars, optional `0x`
    /// prefix), `DAO_BUS_CAPACITY`.
    #[must_use]
    pub fn load() -> Self {
        let mut config = Self::default();

        if let Ok(raw) = std::env::var("DAO_DEPLOYER") {
            let raw = raw.strip_prefix("0x").unwrap_or(&raw);
            match hex::decode(raw) {
                Ok(bytes) if bytes.len() == 20 => {
                    // from_slice cannot fail here: length checked above
                    if let Some(addr) = Address::from_slice(&bytes) {
                        config.deployer = addr;
                        info!(deployer = %config.deployer, "Loaded deployer from environment");
                    }
                }
                _ => warn!("DAO_DEPLOYER must be 20 bytes (40 hex chars)"),
            }
        }

        if let Ok(raw) = std::env::var("DAO_BUS_CAPACITY") {
            if let Ok(capacity) = raw.parse() {
                config.bus_capacity = capacity;
            }
        }

        config
    }
}
