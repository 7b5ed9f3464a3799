//! Asset descriptions handed to the send form, plus address syntax checks.
//!
//! An [`Asset`] is an immutable snapshot of a balance row: the token, the chain it
//! lives on, the held quantity and an optional USD unit price. The chain's native
//! currency is encoded with the zero address in the token field.

use alloy_primitives::Address;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::OnceLock;

use crate::amount::{AmountError, TokenAmount};

pub type ChainId = u64;

/// Well-known chain ids.
pub mod chain {
    use super::ChainId;

    pub const ETHEREUM: ChainId = 1;
    pub const GOERLI: ChainId = 5;
    pub const BSC: ChainId = 56;
    pub const BSC_TESTNET: ChainId = 97;
    pub const BASE: ChainId = 8453;
}

/// Token metadata as delivered by the token list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenInfo {
    pub address: Address,
    pub symbol: String,
    pub decimals: u8,
    pub name: String,
    #[serde(rename = "logoURI", default)]
    pub logo_uri: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetPrice {
    pub usd: Option<f64>,
}

/// A held asset on a given chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub chain_id: ChainId,
    pub token: TokenInfo,
    /// Human readable balance, e.g. "12.5".
    pub quantity: String,
    #[serde(default)]
    pub price: Option<AssetPrice>,
}

impl Asset {
    /// True when the token field carries the native-currency sentinel.
    pub fn is_native(&self) -> bool {
        self.token.address.is_zero()
    }

    /// USD unit price, zero when unknown.
    pub fn usd_price(&self) -> f64 {
        self.price.as_ref().and_then(|p| p.usd).unwrap_or(0.0)
    }

    /// Parse the held quantity into raw units of the token.
    pub fn balance(&self) -> Result<TokenAmount, AmountError> {
        TokenAmount::parse(&self.quantity, self.token.decimals)
    }
}

/// The chain's native currency, used for fee display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeCurrency {
    pub chain_id: ChainId,
    pub symbol: String,
    pub decimals: u8,
}

impl NativeCurrency {
    pub fn new(chain_id: ChainId, symbol: impl Into<String>, decimals: u8) -> Self {
        Self {
            chain_id,
            symbol: symbol.into(),
            decimals,
        }
    }
}

fn address_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^0x[0-9a-fA-F]{40}$").expect("static address pattern"))
}

/// Syntactic address check.
///
/// Single-case hex is accepted as is; mixed-case input must carry a valid
/// EIP-55 checksum.
pub fn is_address(input: &str) -> bool {
    if !address_regex().is_match(input) {
        return false;
    }
    let hex = &input[2..];
    let has_lower = hex.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = hex.chars().any(|c| c.is_ascii_uppercase());
    if has_lower && has_upper {
        return Address::parse_checksummed(input, None).is_ok();
    }
    true
}

/// Parse an input that already passed [`is_address`].
pub fn parse_address(input: &str) -> Option<Address> {
    if !is_address(input) {
        return None;
    }
    Address::from_str(input).ok()
}
