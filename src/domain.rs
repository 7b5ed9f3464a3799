//! Human-readable identities for addresses.
//!
//! Three independent name services are consulted for a reverse lookup:
//!
//! - SID, always asked first (when fetching is enabled),
//! - UNS, asked only once SID has answered with nothing,
//! - the chain-native service, asked unless the active chain is excluded. Once
//!   it yields a name, the avatar and two social text records are fetched.
//!
//! For display the chain-native name wins, then SID, then UNS. The lookup is
//! modelled as a [`DomainSnapshot`] of per-provider [`Lookup`] states; the gate
//! for each stage and the merge into a [`DomainRecord`] are plain functions of
//! that snapshot, so the priority and short-circuit rules can be checked
//! without any provider at all.

use alloy_primitives::Address;
use tracing::debug;

use crate::asset::ChainId;
use crate::config::DomainConfig;

/// Forward resolution of a typed name (e.g. `vitalik.eth`) to an address.
#[allow(async_fn_in_trait)]
pub trait AddressResolver {
    async fn resolve_name(&self, name: &str) -> anyhow::Result<Option<Address>>;
}

/// A reverse-resolution name service (SID, UNS).
#[allow(async_fn_in_trait)]
pub trait ReverseNameProvider {
    async fn name_for_address(&self, address: Address) -> anyhow::Result<Option<String>>;
}

/// The chain-native name service, which also serves avatars and text records.
#[allow(async_fn_in_trait)]
pub trait NativeNameProvider {
    async fn name_for_address(
        &self,
        address: Address,
        chain_id: ChainId,
    ) -> anyhow::Result<Option<String>>;

    async fn avatar(&self, name: &str, chain_id: ChainId) -> anyhow::Result<Option<String>>;

    async fn text(&self, name: &str, key: &str, chain_id: ChainId)
        -> anyhow::Result<Option<String>>;
}

/// State of one provider query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Lookup<T> {
    /// The query is gated off and will not run. Never counts as loading.
    #[default]
    Disabled,
    Pending,
    Settled(Option<T>),
}

impl<T> Lookup<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Lookup::Pending)
    }

    pub fn is_settled(&self) -> bool {
        matches!(self, Lookup::Settled(_))
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Lookup::Settled(value) => value.as_ref(),
            _ => None,
        }
    }
}

/// Merged identity for an address.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DomainRecord {
    pub domain_name: Option<String>,
    pub avatar: Option<String>,
    pub twitter: Option<String>,
    pub github: Option<String>,
    /// True while a provider that could still change the answer is pending.
    pub is_loading: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DomainSnapshot {
    pub sid: Lookup<String>,
    pub uns: Lookup<String>,
    pub native: Lookup<String>,
    pub avatar: Lookup<String>,
    pub twitter: Lookup<String>,
    pub github: Lookup<String>,
}

impl DomainSnapshot {
    /// Initial state: SID and the native service pending (if enabled),
    /// everything downstream of them not yet allowed to run.
    pub fn start(fetch_data: bool, native_enabled: bool) -> Self {
        Self {
            sid: if fetch_data {
                Lookup::Pending
            } else {
                Lookup::Disabled
            },
            native: if native_enabled {
                Lookup::Pending
            } else {
                Lookup::Disabled
            },
            ..Self::default()
        }
    }

    pub fn record(&self) -> DomainRecord {
        let domain_name = self
            .native
            .value()
            .or(self.sid.value())
            .or(self.uns.value())
            .cloned();

        let is_loading = self.native.is_loading()
            || self.avatar.is_loading()
            || self.twitter.is_loading()
            || self.github.is_loading()
            || (self.sid.is_loading() && self.native.value().is_none())
            || (self.uns.is_loading() && self.sid.value().is_none());

        DomainRecord {
            domain_name,
            avatar: self.avatar.value().cloned(),
            twitter: self.twitter.value().cloned(),
            github: self.github.value().cloned(),
            is_loading,
        }
    }
}

/// UNS only runs once SID has settled without a name.
pub fn uns_enabled(fetch_data: bool, sid: &Lookup<String>) -> bool {
    fetch_data && sid.is_settled() && sid.value().is_none()
}

/// Avatar and text records need a native name.
pub fn records_enabled(fetch_data: bool, native: &Lookup<String>) -> bool {
    fetch_data && native.value().is_some()
}

/// Provider failures settle as "no name"; empty strings count as no name.
fn settle(provider: &str, result: anyhow::Result<Option<String>>) -> Lookup<String> {
    match result {
        Ok(value) => Lookup::Settled(value.filter(|v| !v.is_empty())),
        Err(e) => {
            debug!("{provider} lookup failed: {e:#}");
            Lookup::Settled(None)
        }
    }
}

pub struct DomainResolver<S, U, N> {
    sid: S,
    uns: U,
    native: N,
    config: DomainConfig,
}

impl<S, U, N> DomainResolver<S, U, N>
where
    S: ReverseNameProvider,
    U: ReverseNameProvider,
    N: NativeNameProvider,
{
    pub fn new(sid: S, uns: U, native: N, config: DomainConfig) -> Self {
        Self {
            sid,
            uns,
            native,
            config,
        }
    }

    pub fn providers(&self) -> (&S, &U, &N) {
        (&self.sid, &self.uns, &self.native)
    }

    pub async fn resolve(
        &self,
        address: Address,
        active_chain: ChainId,
        fetch_data: bool,
    ) -> DomainRecord {
        self.resolve_with_progress(address, active_chain, fetch_data, |_| {})
            .await
    }

    /// Run the stages in order, reporting the merged record after each one.
    pub async fn resolve_with_progress(
        &self,
        address: Address,
        active_chain: ChainId,
        fetch_data: bool,
        mut on_update: impl FnMut(&DomainRecord),
    ) -> DomainRecord {
        let lookup_chain = self.config.native_lookup_chain(active_chain);
        let mut snapshot =
            DomainSnapshot::start(fetch_data, self.config.native_enabled_on(active_chain));
        on_update(&snapshot.record());

        if snapshot.sid.is_loading() {
            snapshot.sid = settle("SID", self.sid.name_for_address(address).await);
            on_update(&snapshot.record());
        }

        if uns_enabled(fetch_data, &snapshot.sid) {
            snapshot.uns = Lookup::Pending;
            on_update(&snapshot.record());
            snapshot.uns = settle("UNS", self.uns.name_for_address(address).await);
            on_update(&snapshot.record());
        }

        if snapshot.native.is_loading() {
            snapshot.native = settle(
                "native",
                self.native.name_for_address(address, lookup_chain).await,
            );
            // records go pending in the same update as the name
            if records_enabled(fetch_data, &snapshot.native) {
                snapshot.avatar = Lookup::Pending;
                snapshot.twitter = Lookup::Pending;
                snapshot.github = Lookup::Pending;
            }
            on_update(&snapshot.record());
        }

        if records_enabled(fetch_data, &snapshot.native) {
            if let Some(name) = snapshot.native.value().cloned() {
                let (avatar, twitter, github) = futures_util::join!(
                    self.native.avatar(&name, lookup_chain),
                    self.native.text(&name, &self.config.twitter_key, lookup_chain),
                    self.native.text(&name, &self.config.github_key, lookup_chain),
                );
                snapshot.avatar = settle("avatar", avatar);
                snapshot.twitter = settle("twitter", twitter);
                snapshot.github = settle("github", github);
                on_update(&snapshot.record());
            }
        }

        snapshot.record()
    }
}
