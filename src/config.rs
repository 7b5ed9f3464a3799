//! Tunables for the send form and the domain resolver.
//!
//! Both structs deserialize from JSON with every field optional; missing
//! fields take the defaults below.

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

use crate::asset::{chain, ChainId};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SendFormConfig {
    /// Quiet period before a typed recipient is validated and resolved.
    pub debounce_ms: u64,
    /// Delay before the amount field reports losing focus.
    pub blur_delay_ms: u64,
    /// Chains on which gifts can be claimed.
    pub gift_claim_chains: Vec<ChainId>,
    /// Minimum USD value of a gift.
    pub min_gift_usd: f64,
    /// Native currency kept back for gas when sending the max amount.
    pub native_gas_reserve_wei: U256,
    pub fee_usd_decimals: usize,
    pub invalid_address_message: String,
}

impl Default for SendFormConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 500,
            blur_delay_ms: 300,
            gift_claim_chains: vec![chain::BSC],
            min_gift_usd: 1.0,
            native_gas_reserve_wei: U256::from(10_000_000_000_000_000u64),
            fee_usd_decimals: 2,
            invalid_address_message: "Invalid wallet address".to_string(),
        }
    }
}

impl SendFormConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn blur_delay(&self) -> Duration {
        Duration::from_millis(self.blur_delay_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DomainConfig {
    /// Chains on which the chain-native name provider is never queried.
    pub native_excluded_chains: Vec<ChainId>,
    /// Chains that run native lookups against themselves rather than mainnet.
    pub native_lookup_testnets: Vec<ChainId>,
    pub native_lookup_mainnet: ChainId,
    pub twitter_key: String,
    pub github_key: String,
}

impl Default for DomainConfig {
    fn default() -> Self {
        Self {
            native_excluded_chains: vec![chain::BSC_TESTNET],
            native_lookup_testnets: vec![chain::GOERLI],
            native_lookup_mainnet: chain::ETHEREUM,
            twitter_key: "com.twitter".to_string(),
            github_key: "com.github".to_string(),
        }
    }
}

impl DomainConfig {
    pub fn native_enabled_on(&self, active_chain: ChainId) -> bool {
        !self.native_excluded_chains.contains(&active_chain)
    }

    /// The chain the native provider should be asked on.
    pub fn native_lookup_chain(&self, active_chain: ChainId) -> ChainId {
        if self.native_lookup_testnets.contains(&active_chain) {
            active_chain
        } else {
            self.native_lookup_mainnet
        }
    }
}

/// Top-level file layout: `{ "send_form": {...}, "domain": {...} }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub send_form: SendFormConfig,
    pub domain: DomainConfig,
}

pub fn load_from_str(json: &str) -> Result<Settings, ConfigError> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_from_path(path: impl AsRef<Path>) -> Result<Settings, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    load_from_str(&contents)
}
