//! Headless send-asset flow for EVM wallets.
//!
//! - [`send_form::SendAssetForm`] drives the edit → confirm → send flow for a
//!   single asset: debounced recipient validation, forward name resolution,
//!   fee estimation, gating, and submission.
//! - [`domain::DomainResolver`] merges three reverse name services into one
//!   identity record for an address.
//!
//! All network access goes through traits implemented by the host
//! ([`transfer::ChainClient`], [`domain::AddressResolver`],
//! [`domain::ReverseNameProvider`], [`domain::NativeNameProvider`]).

pub mod amount;
pub mod asset;
pub mod clock;
pub mod config;
pub mod domain;
pub mod gift;
#[cfg(feature = "logging")]
pub mod logging;
pub mod send_form;
pub mod transfer;

pub use amount::{AmountError, MaxSpend, ReservedGasMaxSpend, TokenAmount};
pub use asset::{Asset, AssetPrice, ChainId, NativeCurrency, TokenInfo};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{DomainConfig, SendFormConfig, Settings};
pub use domain::{
    AddressResolver, DomainRecord, DomainResolver, NativeNameProvider, ReverseNameProvider,
};
pub use gift::SendGiftConfig;
pub use send_form::{
    AdvanceBlocker, FormEvent, FormView, SendAssetError, SendAssetForm, ViewState,
};
pub use transfer::{ChainClient, FeeEstimate, SendReceipt};
