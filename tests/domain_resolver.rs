mod common;

use alloy_primitives::Address;
use common::*;
use send_asset_lib::asset::chain;
use send_asset_lib::{DomainConfig, DomainRecord, DomainResolver};
use std::sync::atomic::Ordering;

fn subject() -> Address {
    Address::repeat_byte(0x42)
}

fn resolver(
    sid: MockReverse,
    uns: MockReverse,
    native: MockNative,
) -> DomainResolver<MockReverse, MockReverse, MockNative> {
    DomainResolver::new(sid, uns, native, DomainConfig::default())
}

#[tokio::test]
async fn sid_name_skips_uns() {
    let resolver = resolver(
        MockReverse::named("alice.bnb"),
        MockReverse::named("alice.crypto"),
        MockNative::new(None),
    );
    let record = resolver.resolve(subject(), chain::BSC, true).await;

    assert_eq!(record.domain_name.as_deref(), Some("alice.bnb"));
    assert!(!record.is_loading);
    let (sid, uns, _) = resolver.providers();
    assert_eq!(sid.calls(), 1);
    assert_eq!(uns.calls(), 0);
}

#[tokio::test]
async fn uns_is_asked_when_sid_has_nothing() {
    let resolver = resolver(
        MockReverse::empty(),
        MockReverse::named("alice.crypto"),
        MockNative::new(None),
    );
    let record = resolver.resolve(subject(), chain::BSC, true).await;

    assert_eq!(record.domain_name.as_deref(), Some("alice.crypto"));
    let (_, uns, _) = resolver.providers();
    assert_eq!(uns.calls(), 1);
}

#[tokio::test]
async fn failing_sid_counts_as_no_name() {
    let resolver = resolver(
        MockReverse::failing(),
        MockReverse::named("alice.crypto"),
        MockNative::new(None),
    );
    let record = resolver.resolve(subject(), chain::BSC, true).await;
    assert_eq!(record.domain_name.as_deref(), Some("alice.crypto"));
    assert!(!record.is_loading);
}

#[tokio::test]
async fn native_name_brings_avatar_and_socials() {
    let resolver = resolver(
        MockReverse::named("alice.bnb"),
        MockReverse::empty(),
        MockNative::new(Some("alice.eth")),
    );
    let record = resolver.resolve(subject(), chain::BSC, true).await;

    assert_eq!(
        record,
        DomainRecord {
            domain_name: Some("alice.eth".into()),
            avatar: Some("https://example.org/alice.png".into()),
            twitter: Some("alice_tw".into()),
            github: Some("alice-gh".into()),
            is_loading: false,
        }
    );

    let (_, _, native) = resolver.providers();
    assert_eq!(native.avatar_calls.load(Ordering::SeqCst), 1);
    let mut keys = native.text_keys.lock().unwrap().clone();
    keys.sort();
    assert_eq!(keys, vec!["com.github", "com.twitter"]);
}

#[tokio::test]
async fn no_native_name_means_no_records() {
    let resolver = resolver(
        MockReverse::named("alice.bnb"),
        MockReverse::empty(),
        MockNative::new(None),
    );
    let record = resolver.resolve(subject(), chain::BSC, true).await;

    assert_eq!(record.avatar, None);
    assert_eq!(record.twitter, None);
    let (_, _, native) = resolver.providers();
    assert_eq!(native.avatar_calls.load(Ordering::SeqCst), 0);
    assert!(native.text_keys.lock().unwrap().is_empty());
}

#[tokio::test]
async fn excluded_chain_never_asks_native_provider() {
    let resolver = resolver(
        MockReverse::empty(),
        MockReverse::empty(),
        MockNative::new(Some("alice.eth")),
    );
    let record = resolver.resolve(subject(), chain::BSC_TESTNET, true).await;

    assert_eq!(record.domain_name, None);
    assert!(!record.is_loading);
    let (_, _, native) = resolver.providers();
    assert!(native.name_calls().is_empty());
}

#[tokio::test]
async fn native_lookup_chain_follows_active_chain() {
    let resolver = resolver(
        MockReverse::empty(),
        MockReverse::empty(),
        MockNative::new(None),
    );
    resolver.resolve(subject(), chain::GOERLI, true).await;
    resolver.resolve(subject(), chain::BSC, true).await;
    resolver.resolve(subject(), chain::BASE, true).await;

    let (_, _, native) = resolver.providers();
    assert_eq!(
        native.name_calls(),
        vec![chain::GOERLI, chain::ETHEREUM, chain::ETHEREUM]
    );
}

#[tokio::test]
async fn fetch_disabled_skips_sid_uns_and_records() {
    let resolver = resolver(
        MockReverse::named("alice.bnb"),
        MockReverse::named("alice.crypto"),
        MockNative::new(Some("alice.eth")),
    );
    let record = resolver.resolve(subject(), chain::BSC, false).await;

    let (sid, uns, native) = resolver.providers();
    assert_eq!(sid.calls(), 0);
    assert_eq!(uns.calls(), 0);
    // the native name is still looked up, but its records are not
    assert_eq!(native.name_calls(), vec![chain::ETHEREUM]);
    assert_eq!(native.avatar_calls.load(Ordering::SeqCst), 0);
    assert_eq!(record.domain_name.as_deref(), Some("alice.eth"));
    assert_eq!(record.avatar, None);
    assert!(!record.is_loading);
}

#[tokio::test]
async fn progress_reports_loading_until_done() {
    let resolver = resolver(
        MockReverse::empty(),
        MockReverse::named("alice.crypto"),
        MockNative::new(Some("alice.eth")),
    );
    let mut updates = Vec::new();
    let record = resolver
        .resolve_with_progress(subject(), chain::BSC, true, |r| updates.push(r.clone()))
        .await;

    assert!(updates.len() >= 2);
    assert!(updates[0].is_loading);
    assert_eq!(updates[0].domain_name, None);
    assert!(updates[..updates.len() - 1].iter().all(|r| r.is_loading));
    assert_eq!(updates.last(), Some(&record));
    assert!(!record.is_loading);
    assert_eq!(record.domain_name.as_deref(), Some("alice.eth"));
}
