//! Transfer construction, fee estimation and submission against an EVM chain.
//!
//! The chain itself is reached through [`ChainClient`], which the host wires to
//! whatever RPC transport and wallet connection it already owns. This module
//! only builds requests and interprets results.

use alloy::rpc::types::request::TransactionRequest;
use alloy_primitives::{Address, TxHash, TxKind, U256};
use alloy_sol_macro::sol;
use alloy_sol_types::SolCall;
use tracing::{debug, warn};

use crate::amount::{format_units, TokenAmount};
use crate::asset::{ChainId, NativeCurrency};

sol! {
    interface IERC20 {
        function transfer(address to, uint256 value) external returns (bool);
    }
}

/// Result of handing a transaction to the wallet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendReceipt {
    /// True when the transaction was accepted and executed successfully.
    pub status: bool,
    pub transaction_hash: TxHash,
}

/// RPC and wallet access needed by the send form.
#[allow(async_fn_in_trait)]
pub trait ChainClient {
    /// The connected account, if any.
    fn account(&self) -> Option<Address>;

    async fn estimate_gas(&self, tx: TransactionRequest) -> anyhow::Result<u64>;

    async fn gas_price(&self) -> anyhow::Result<u128>;

    async fn send_transaction(&self, tx: TransactionRequest) -> anyhow::Result<SendReceipt>;
}

/// Calldata for `transfer(to, value)`.
pub fn transfer_calldata(to: Address, value: U256) -> Vec<u8> {
    IERC20::transferCall { to, value }.abi_encode()
}

/// A plain value transfer of the native currency.
pub fn native_transfer(
    from: Option<Address>,
    to: Address,
    value: U256,
    chain_id: ChainId,
) -> TransactionRequest {
    TransactionRequest {
        from,
        to: Some(TxKind::Call(to)),
        value: Some(value),
        chain_id: Some(chain_id),
        ..Default::default()
    }
}

/// A `transfer` call on an ERC-20 contract. Carries no value.
pub fn token_transfer(
    from: Option<Address>,
    token: Address,
    to: Address,
    amount: U256,
    chain_id: ChainId,
) -> TransactionRequest {
    TransactionRequest {
        from,
        to: Some(TxKind::Call(token)),
        value: Some(U256::ZERO),
        input: transfer_calldata(to, amount).into(),
        chain_id: Some(chain_id),
        ..Default::default()
    }
}

/// Build the right transfer for an asset: native when `token` is the zero
/// address, ERC-20 otherwise.
pub fn asset_transfer(
    from: Option<Address>,
    token: Address,
    to: Address,
    amount: &TokenAmount,
    chain_id: ChainId,
) -> TransactionRequest {
    if token.is_zero() {
        native_transfer(from, to, amount.raw(), chain_id)
    } else {
        token_transfer(from, token, to, amount.raw(), chain_id)
    }
}

/// Observable state of the network fee estimate.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FeeEstimate {
    /// Inputs are incomplete; nothing to estimate.
    #[default]
    Idle,
    Loading,
    /// The estimate failed. Shown as "no fee", never as an error.
    Unknown,
    Ready {
        /// Fee in native-currency units, e.g. "0.000021".
        fee: String,
        /// Fee in USD with fixed decimals, when a native price is known.
        fee_usd: Option<String>,
    },
}

impl FeeEstimate {
    pub fn fee(&self) -> Option<&str> {
        match self {
            FeeEstimate::Ready { fee, .. } => Some(fee),
            _ => None,
        }
    }

    pub fn fee_usd(&self) -> Option<&str> {
        match self {
            FeeEstimate::Ready { fee_usd, .. } => fee_usd.as_deref(),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FeeEstimate::Loading)
    }
}

/// A snapshot of everything needed to estimate a fee, tagged with the input
/// generation it was taken at.
#[derive(Debug, Clone)]
pub struct FeeRequest {
    pub generation: u64,
    /// `None` when the typed amount could not be parsed.
    pub tx: Option<TransactionRequest>,
    pub native: NativeCurrency,
    pub native_usd_price: Option<f64>,
    pub usd_decimals: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeeOutcome {
    pub generation: u64,
    pub estimate: FeeEstimate,
}

impl FeeRequest {
    /// Run the estimate. Failures degrade to [`FeeEstimate::Unknown`].
    pub async fn run<C: ChainClient>(self, client: &C) -> FeeOutcome {
        let estimate = match self.estimate(client).await {
            Ok(estimate) => estimate,
            Err(e) => {
                warn!("fee estimation failed: {e:#}");
                FeeEstimate::Unknown
            }
        };
        FeeOutcome {
            generation: self.generation,
            estimate,
        }
    }

    async fn estimate<C: ChainClient>(&self, client: &C) -> anyhow::Result<FeeEstimate> {
        let tx = self
            .tx
            .clone()
            .ok_or_else(|| anyhow::anyhow!("amount could not be parsed"))?;
        let gas = client.estimate_gas(tx).await?;
        let gas_price = client.gas_price().await?;

        let fee_raw = U256::from(gas)
            .checked_mul(U256::from(gas_price))
            .ok_or_else(|| anyhow::anyhow!("fee overflow: {gas} gas at {gas_price}"))?;
        let fee = format_units(fee_raw, self.native.decimals);
        debug!("estimated fee {fee} {} ({gas} gas)", self.native.symbol);

        let fee_usd = self.native_usd_price.map(|price| {
            let native_fee = fee.parse::<f64>().unwrap_or(0.0);
            format!("{:.*}", self.usd_decimals, native_fee * price)
        });

        Ok(FeeEstimate::Ready { fee, fee_usd })
    }
}
