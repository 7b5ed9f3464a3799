//! Gift mode: an alternate confirmation path that wraps the transfer in a
//! claimable voucher instead of sending it to an address.

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use crate::amount::TokenAmount;
use crate::asset::ChainId;

/// Gift settings handed to the form at construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SendGiftConfig {
    /// The user switched the gift toggle on.
    pub is_send_gift: bool,
    /// The gift also carries some native currency for the claimer's gas.
    pub include_starter_gas: bool,
    /// Raw amount of native currency bundled as starter gas.
    pub native_amount: Option<U256>,
    /// The sender cannot cover the starter gas.
    pub is_user_insufficient_balance: bool,
}

impl SendGiftConfig {
    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn enabled() -> Self {
        Self {
            is_send_gift: true,
            ..Self::default()
        }
    }

    /// Gift mode is on and the chain supports claiming gifts.
    pub fn is_supported_on(&self, chain_id: ChainId, claim_chains: &[ChainId]) -> bool {
        self.is_send_gift && claim_chains.contains(&chain_id)
    }

    /// Starter gas, when requested, must be positive and affordable.
    pub fn is_valid_gas_sponsor(&self, gift_supported: bool) -> bool {
        if !(self.include_starter_gas && gift_supported) {
            return true;
        }
        self.native_amount.is_some_and(|amount| amount > U256::ZERO)
            && !self.is_user_insufficient_balance
    }
}

/// A gift must be worth at least `min_usd`. Zero counts as "nothing entered
/// yet" and passes; so does an amount that did not parse, which the amount
/// rules block on their own.
pub fn is_gift_amount_valid(
    gift_supported: bool,
    amount: Option<&TokenAmount>,
    is_insufficient_balance: bool,
    usd_price: f64,
    min_usd: f64,
) -> bool {
    let amount = match amount {
        Some(amount) if gift_supported && !is_insufficient_balance => amount,
        _ => return true,
    };
    let value_usd = amount.to_f64() * usd_price;
    value_usd == 0.0 || value_usd >= min_usd
}
