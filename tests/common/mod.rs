#![allow(dead_code)]

use alloy::rpc::types::request::TransactionRequest;
use alloy_primitives::{Address, TxHash};
use send_asset_lib::asset::{chain, AssetPrice, TokenInfo};
use send_asset_lib::domain::{AddressResolver, NativeNameProvider, ReverseNameProvider};
use send_asset_lib::transfer::{ChainClient, SendReceipt};
use send_asset_lib::{Asset, ChainId};
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

pub const RECIPIENT: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";
pub const USDT: &str = "0x55d398326f99059fF775485246999027B3197955";

pub fn address(s: &str) -> Address {
    Address::from_str(s).unwrap()
}

pub fn account() -> Address {
    Address::repeat_byte(0xaa)
}

pub fn native_asset(quantity: &str) -> Asset {
    Asset {
        chain_id: chain::BSC,
        token: TokenInfo {
            address: Address::ZERO,
            symbol: "BNB".into(),
            decimals: 18,
            name: "BNB".into(),
            logo_uri: None,
        },
        quantity: quantity.into(),
        price: Some(AssetPrice { usd: Some(600.0) }),
    }
}

pub fn token_asset(quantity: &str) -> Asset {
    Asset {
        chain_id: chain::BSC,
        token: TokenInfo {
            address: address(USDT),
            symbol: "USDT".into(),
            decimals: 18,
            name: "Tether USD".into(),
            logo_uri: Some("https://example.org/usdt.png".into()),
        },
        quantity: quantity.into(),
        price: Some(AssetPrice { usd: Some(1.0) }),
    }
}

/// Chain client with canned answers that records what it was asked.
pub struct MockChainClient {
    pub account: Option<Address>,
    pub gas: Result<u64, String>,
    pub gas_price: u128,
    pub receipt_status: bool,
    pub fail_send: bool,
    pub estimates: Mutex<Vec<TransactionRequest>>,
    pub sent: Mutex<Vec<TransactionRequest>>,
}

impl MockChainClient {
    pub fn new() -> Self {
        Self {
            account: Some(account()),
            gas: Ok(21_000),
            gas_price: 1_000_000_000,
            receipt_status: true,
            fail_send: false,
            estimates: Mutex::new(Vec::new()),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_estimates() -> Self {
        Self {
            gas: Err("execution reverted".into()),
            ..Self::new()
        }
    }

    pub fn sent(&self) -> Vec<TransactionRequest> {
        self.sent.lock().unwrap().clone()
    }
}

impl ChainClient for MockChainClient {
    fn account(&self) -> Option<Address> {
        self.account
    }

    async fn estimate_gas(&self, tx: TransactionRequest) -> anyhow::Result<u64> {
        self.estimates.lock().unwrap().push(tx);
        self.gas.clone().map_err(|e| anyhow::anyhow!(e))
    }

    async fn gas_price(&self) -> anyhow::Result<u128> {
        Ok(self.gas_price)
    }

    async fn send_transaction(&self, tx: TransactionRequest) -> anyhow::Result<SendReceipt> {
        if self.fail_send {
            return Err(anyhow::anyhow!("user rejected the request"));
        }
        self.sent.lock().unwrap().push(tx);
        Ok(SendReceipt {
            status: self.receipt_status,
            transaction_hash: TxHash::repeat_byte(0x11),
        })
    }
}

#[derive(Default)]
pub struct MockAddressResolver {
    pub names: HashMap<String, Address>,
    pub calls: AtomicUsize,
}

impl MockAddressResolver {
    pub fn with(name: &str, address: Address) -> Self {
        let mut names = HashMap::new();
        names.insert(name.to_string(), address);
        Self {
            names,
            calls: AtomicUsize::new(0),
        }
    }
}

impl AddressResolver for MockAddressResolver {
    async fn resolve_name(&self, name: &str) -> anyhow::Result<Option<Address>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.names.get(name).copied())
    }
}

/// A reverse provider answering with a fixed name (or failing).
pub struct MockReverse {
    pub answer: Result<Option<String>, String>,
    pub calls: AtomicUsize,
}

impl MockReverse {
    pub fn named(name: &str) -> Self {
        Self {
            answer: Ok(Some(name.to_string())),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn empty() -> Self {
        Self {
            answer: Ok(None),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            answer: Err("provider unavailable".into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ReverseNameProvider for MockReverse {
    async fn name_for_address(&self, _address: Address) -> anyhow::Result<Option<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answer.clone().map_err(|e| anyhow::anyhow!(e))
    }
}

pub struct MockNative {
    pub name: Option<String>,
    pub texts: HashMap<String, String>,
    pub avatar: Option<String>,
    pub name_calls: Mutex<Vec<ChainId>>,
    pub text_keys: Mutex<Vec<String>>,
    pub avatar_calls: AtomicUsize,
}

impl MockNative {
    pub fn new(name: Option<&str>) -> Self {
        let mut texts = HashMap::new();
        texts.insert("com.twitter".to_string(), "alice_tw".to_string());
        texts.insert("com.github".to_string(), "alice-gh".to_string());
        Self {
            name: name.map(str::to_string),
            texts,
            avatar: Some("https://example.org/alice.png".into()),
            name_calls: Mutex::new(Vec::new()),
            text_keys: Mutex::new(Vec::new()),
            avatar_calls: AtomicUsize::new(0),
        }
    }

    pub fn name_calls(&self) -> Vec<ChainId> {
        self.name_calls.lock().unwrap().clone()
    }
}

impl NativeNameProvider for MockNative {
    async fn name_for_address(
        &self,
        _address: Address,
        chain_id: ChainId,
    ) -> anyhow::Result<Option<String>> {
        self.name_calls.lock().unwrap().push(chain_id);
        Ok(self.name.clone())
    }

    async fn avatar(&self, _name: &str, _chain_id: ChainId) -> anyhow::Result<Option<String>> {
        self.avatar_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.avatar.clone())
    }

    async fn text(
        &self,
        _name: &str,
        key: &str,
        _chain_id: ChainId,
    ) -> anyhow::Result<Option<String>> {
        self.text_keys.lock().unwrap().push(key.to_string());
        Ok(self.texts.get(key).cloned())
    }
}
