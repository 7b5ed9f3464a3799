//! The send-asset form controller.
//!
//! [`SendAssetForm`] owns the editable state of a single transfer: recipient,
//! amount, validation, fee estimate and the edit/confirm view state. It never
//! performs I/O on its own. Network work is split into three steps so that a
//! host can run it however it schedules futures:
//!
//! 1. `begin_*`/`prepare_*` snapshots the inputs and tags them with the
//!    current input generation,
//! 2. the returned request is run against a [`ChainClient`] or
//!    [`AddressResolver`],
//! 3. `apply_*`/`finish_*` folds the result back in, discarding it if the
//!    inputs moved on in the meantime.
//!
//! `refresh_fee`, `resolve_recipient` and `submit` chain the three steps for
//! callers that hold the form exclusively.

use alloy::rpc::types::request::TransactionRequest;
use alloy_primitives::{Address, TxHash};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::amount::{AmountError, MaxSpend, ReservedGasMaxSpend, TokenAmount};
use crate::asset::{is_address, parse_address, Asset, ChainId, NativeCurrency};
use crate::clock::{Clock, Debounced, DelayedFalse};
use crate::config::SendFormConfig;
use crate::domain::AddressResolver;
use crate::gift::{is_gift_amount_valid, SendGiftConfig};
use crate::transfer::{asset_transfer, ChainClient, FeeEstimate, FeeOutcome, FeeRequest, SendReceipt};

/// Which pane the host should show. Ordered: later states are further along
/// the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ViewState {
    SendAssets,
    ConfirmTransaction,
}

#[derive(Debug, Error)]
pub enum SendAssetError {
    #[error("no recipient entered")]
    MissingRecipient,

    #[error("no amount entered")]
    MissingAmount,

    #[error("invalid recipient address: {0}")]
    InvalidRecipient(String),

    #[error("invalid amount: {0}")]
    InvalidAmount(#[from] AmountError),

    #[error("balance of {0} is unavailable")]
    NoBalance(String),

    #[error("cannot continue: {0:?}")]
    Blocked(Vec<AdvanceBlocker>),

    #[error("a transaction is already in flight")]
    InFlight,

    #[error("transaction {0} reverted")]
    TransactionReverted(TxHash),

    #[error("transaction submission failed: {0:#}")]
    Submission(anyhow::Error),
}

/// Why the "next" action is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdvanceBlocker {
    InvalidRecipient,
    MissingAmount,
    InvalidAmount,
    ZeroAmount,
    InsufficientBalance,
    TransactionInFlight,
    GasSponsorUnavailable,
    GiftBelowMinimum,
}

impl fmt::Display for AdvanceBlocker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            AdvanceBlocker::InvalidRecipient => "Invalid wallet address",
            AdvanceBlocker::MissingAmount => "Enter an amount",
            AdvanceBlocker::InvalidAmount => "Invalid amount",
            AdvanceBlocker::ZeroAmount => "Amount must be greater than zero",
            AdvanceBlocker::InsufficientBalance => "Insufficient balance",
            AdvanceBlocker::TransactionInFlight => "Confirming",
            AdvanceBlocker::GasSponsorUnavailable => "Starter gas unavailable",
            AdvanceBlocker::GiftBelowMinimum => "Gift amount must be greater than $1",
        };
        f.write_str(msg)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub tx_hash: TxHash,
}

/// Things the host must react to. Drained with [`SendAssetForm::drain_events`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    ViewStateChange(ViewState),
    TransactionSubmitted(Notification),
    GiftPreview { chain_id: ChainId },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Resolution {
    Idle,
    Pending(String),
    Settled(Option<Address>),
}

/// A forward name lookup for the current debounced recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipientLookup {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipientResolved {
    pub name: String,
    pub address: Option<Address>,
}

impl RecipientLookup {
    /// Provider errors count as "no name".
    pub async fn run<R: AddressResolver>(self, resolver: &R) -> RecipientResolved {
        let address = match resolver.resolve_name(&self.name).await {
            Ok(address) => address,
            Err(e) => {
                debug!("name lookup for {} failed: {e:#}", self.name);
                None
            }
        };
        RecipientResolved {
            name: self.name,
            address,
        }
    }
}

/// A transfer that has been validated and built, awaiting submission.
#[derive(Debug, Clone)]
pub struct PendingSubmission {
    pub generation: u64,
    pub tx: TransactionRequest,
    pub recipient: String,
    pub amount: String,
    pub symbol: String,
}

#[derive(Debug)]
pub struct SubmissionOutcome {
    pub submission: PendingSubmission,
    pub result: anyhow::Result<SendReceipt>,
}

impl PendingSubmission {
    pub async fn send<C: ChainClient>(self, client: &C) -> SubmissionOutcome {
        let result = client.send_transaction(self.tx.clone()).await;
        SubmissionOutcome {
            submission: self,
            result,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditView {
    pub recipient_input: String,
    /// Hidden while the gift toggle is on.
    pub show_recipient_input: bool,
    pub address_error: Option<String>,
    pub resolved_address: Option<Address>,
    pub amount: String,
    /// e.g. "~12.50 USD"
    pub amount_usd: Option<String>,
    pub symbol: String,
    pub chain_id: ChainId,
    pub balance: Option<String>,
    /// The percent shortcuts replace the balance while the amount is focused.
    pub show_percent_buttons: bool,
    pub insufficient_balance: bool,
    pub gift_amount_error: bool,
    pub can_advance: bool,
    pub blockers: Vec<AdvanceBlocker>,
    pub is_attempting: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmView {
    pub recipient: Option<String>,
    pub amount: String,
    pub symbol: String,
    pub chain_id: ChainId,
    pub estimated_fee: Option<String>,
    pub estimated_fee_usd: Option<String>,
    pub tx_hash: Option<TxHash>,
    pub is_attempting: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GiftView {
    pub chain_id: ChainId,
    pub token_amount: Option<TokenAmount>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormView {
    Edit(EditView),
    CreateGift(GiftView),
    ConfirmSend(ConfirmView),
}

pub struct SendAssetForm {
    asset: Asset,
    native: NativeCurrency,
    gift: SendGiftConfig,
    config: SendFormConfig,
    clock: Arc<dyn Clock>,
    max_spend: Box<dyn MaxSpend + Send + Sync>,

    recipient_input: Option<String>,
    debounced_recipient: Debounced<Option<String>>,
    resolution: Resolution,
    amount: String,
    address_error: String,
    fee: FeeEstimate,
    native_usd_price: Option<f64>,
    amount_focus: DelayedFalse,
    tx_hash: Option<TxHash>,
    attempting: bool,
    view_state: ViewState,

    generation: u64,
    events: Vec<FormEvent>,
}

impl fmt::Debug for SendAssetForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SendAssetForm")
            .field("asset", &self.asset.token.symbol)
            .field("chain_id", &self.asset.chain_id)
            .field("recipient_input", &self.recipient_input)
            .field("amount", &self.amount)
            .field("address_error", &self.address_error)
            .field("fee", &self.fee)
            .field("view_state", &self.view_state)
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

impl SendAssetForm {
    pub fn new(
        asset: Asset,
        native: NativeCurrency,
        gift: SendGiftConfig,
        config: SendFormConfig,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let max_spend = ReservedGasMaxSpend::new(config.native_gas_reserve_wei);
        Self {
            debounced_recipient: Debounced::new(None, config.debounce()),
            amount_focus: DelayedFalse::new(config.blur_delay()),
            asset,
            native,
            gift,
            config,
            clock,
            max_spend: Box::new(max_spend),
            recipient_input: None,
            resolution: Resolution::Idle,
            amount: String::new(),
            address_error: String::new(),
            fee: FeeEstimate::Idle,
            native_usd_price: None,
            tx_hash: None,
            attempting: false,
            view_state: ViewState::SendAssets,
            generation: 0,
            events: Vec::new(),
        }
    }

    /// Replace the default gas-reserving max-spend policy.
    pub fn with_max_spend(mut self, policy: impl MaxSpend + Send + Sync + 'static) -> Self {
        self.max_spend = Box::new(policy);
        self
    }

    fn bump(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    //
    // INPUT
    //

    /// Store the typed recipient and restart the debounce window.
    pub fn set_recipient(&mut self, raw: impl Into<String>) {
        let raw = raw.into();
        self.debounced_recipient
            .set(Some(raw.clone()), self.clock.now());
        self.recipient_input = Some(raw);
        self.bump();
    }

    pub fn clear_recipient(&mut self) {
        self.recipient_input = Some(String::new());
        self.debounced_recipient
            .set(Some(String::new()), self.clock.now());
        self.address_error.clear();
        self.bump();
    }

    pub fn set_amount(&mut self, raw: impl Into<String>) {
        self.amount = raw.into();
        self.bump();
    }

    pub fn focus_amount(&mut self) {
        self.amount_focus.set_on();
    }

    pub fn blur_amount(&mut self) {
        self.amount_focus.schedule_off(self.clock.now());
    }

    pub fn set_native_usd_price(&mut self, price: Option<f64>) {
        self.native_usd_price = price;
    }

    /// Flush every buffer whose deadline has passed. Returns true when the
    /// debounced recipient changed, meaning a lookup and a fee refresh are due.
    pub fn tick(&mut self) -> bool {
        let now = self.clock.now();
        self.amount_focus.poll(now);
        if self.debounced_recipient.poll(now) {
            self.on_debounced_recipient_changed();
            return true;
        }
        false
    }

    /// Skip the rest of the debounce window.
    pub fn flush_recipient(&mut self) -> bool {
        if self.debounced_recipient.flush() {
            self.on_debounced_recipient_changed();
            return true;
        }
        false
    }

    fn on_debounced_recipient_changed(&mut self) {
        self.resolution = match self.debounced_recipient.settled() {
            Some(name) if !name.is_empty() => Resolution::Pending(name.clone()),
            _ => Resolution::Idle,
        };
        self.validate_recipient();
        self.bump();
    }

    //
    // RECIPIENT RESOLUTION
    //

    /// The lookup due for the current debounced input, if any.
    pub fn recipient_lookup(&self) -> Option<RecipientLookup> {
        match &self.resolution {
            Resolution::Pending(name) => Some(RecipientLookup { name: name.clone() }),
            _ => None,
        }
    }

    /// Fold a lookup result back in. Returns false if it was stale.
    pub fn apply_recipient_lookup(&mut self, resolved: RecipientResolved) -> bool {
        match &self.resolution {
            Resolution::Pending(name) if *name == resolved.name => {
                self.resolution = Resolution::Settled(resolved.address);
                self.validate_recipient();
                self.bump();
                true
            }
            _ => {
                debug!("dropping stale name lookup for {}", resolved.name);
                false
            }
        }
    }

    pub async fn resolve_recipient<R: AddressResolver>(&mut self, resolver: &R) -> bool {
        match self.recipient_lookup() {
            Some(lookup) => {
                let resolved = lookup.run(resolver).await;
                self.apply_recipient_lookup(resolved)
            }
            None => false,
        }
    }

    /// A resolved name wins over address syntax; the syntax check only runs
    /// once no name has resolved. Nothing is flagged while a lookup is pending.
    fn validate_recipient(&mut self) {
        let input = self
            .debounced_recipient
            .settled()
            .clone()
            .unwrap_or_default();
        let invalid = match &self.resolution {
            Resolution::Pending(_) => false,
            Resolution::Settled(Some(_)) => false,
            Resolution::Settled(None) | Resolution::Idle => {
                !input.is_empty() && !is_address(&input)
            }
        };
        if invalid {
            self.address_error = self.config.invalid_address_message.clone();
        } else {
            self.address_error.clear();
        }
    }

    /// True once the debounce window has caught up with what was typed.
    fn input_is_settled(&self) -> bool {
        self.recipient_input.as_deref() == self.debounced_recipient.settled().as_deref()
    }

    /// The address the current input resolved to. A resolution made for an
    /// earlier input never applies.
    pub fn resolved_address(&self) -> Option<Address> {
        match self.resolution {
            Resolution::Settled(address) if self.input_is_settled() => address,
            _ => None,
        }
    }

    /// The resolved name's address if one resolved, else the raw input.
    pub fn effective_recipient(&self) -> Option<String> {
        if let Some(address) = self.resolved_address() {
            return Some(address.to_checksum(None));
        }
        self.recipient_input.clone().filter(|raw| !raw.is_empty())
    }

    fn recipient_address(&self) -> Option<Address> {
        self.resolved_address().or_else(|| {
            self.recipient_input
                .as_deref()
                .and_then(parse_address)
        })
    }

    //
    // AMOUNT
    //

    pub fn balance(&self) -> Option<TokenAmount> {
        self.asset.balance().ok()
    }

    pub fn parsed_amount(&self) -> Option<TokenAmount> {
        TokenAmount::parse(&self.amount, self.asset.token.decimals).ok()
    }

    pub fn max_spendable(&self) -> Option<TokenAmount> {
        self.balance()
            .map(|balance| self.max_spend.max_spend(&balance, self.asset.is_native()))
    }

    /// Set the amount to `percent`% of the max spendable balance.
    pub fn apply_percent(&mut self, percent: u8) -> Result<(), SendAssetError> {
        let max = self
            .max_spendable()
            .ok_or_else(|| SendAssetError::NoBalance(self.asset.token.symbol.clone()))?;
        let amount = max.mul_percent(percent)?;
        self.set_amount(amount.to_exact());
        Ok(())
    }

    pub fn apply_max(&mut self) -> Result<(), SendAssetError> {
        self.apply_percent(100)
    }

    /// An unknown balance blocks any non-zero amount.
    pub fn is_insufficient_balance(&self) -> bool {
        match (self.parsed_amount(), self.balance()) {
            (Some(amount), Some(balance)) => amount.exceeds(&balance),
            (Some(amount), None) => !amount.is_zero(),
            (None, _) => false,
        }
    }

    //
    // GATING
    //

    pub fn is_gift_supported(&self) -> bool {
        self.gift
            .is_supported_on(self.asset.chain_id, &self.config.gift_claim_chains)
    }

    /// A recipient is valid when it names a sendable address: a resolved
    /// name or a well-formed address typed directly.
    pub fn is_valid_address(&self) -> bool {
        if self.is_gift_supported() {
            return true;
        }
        self.recipient_address().is_some() && self.address_error.is_empty()
    }

    pub fn is_gift_amount_valid(&self) -> bool {
        is_gift_amount_valid(
            self.is_gift_supported(),
            self.parsed_amount().as_ref(),
            self.is_insufficient_balance(),
            self.asset.usd_price(),
            self.config.min_gift_usd,
        )
    }

    pub fn is_valid_gas_sponsor(&self) -> bool {
        self.gift.is_valid_gas_sponsor(self.is_gift_supported())
    }

    /// Everything currently keeping the form from advancing.
    pub fn blockers(&self) -> Vec<AdvanceBlocker> {
        let mut blockers = Vec::new();
        if !self.is_valid_address() {
            blockers.push(AdvanceBlocker::InvalidRecipient);
        }
        if self.amount.is_empty() {
            blockers.push(AdvanceBlocker::MissingAmount);
        } else {
            match self.parsed_amount() {
                None => blockers.push(AdvanceBlocker::InvalidAmount),
                Some(amount) if amount.is_zero() => blockers.push(AdvanceBlocker::ZeroAmount),
                Some(_) => {}
            }
        }
        if self.is_insufficient_balance() {
            blockers.push(AdvanceBlocker::InsufficientBalance);
        }
        if self.attempting {
            blockers.push(AdvanceBlocker::TransactionInFlight);
        }
        if !self.is_valid_gas_sponsor() {
            blockers.push(AdvanceBlocker::GasSponsorUnavailable);
        }
        if !self.is_gift_amount_valid() {
            blockers.push(AdvanceBlocker::GiftBelowMinimum);
        }
        blockers
    }

    pub fn can_advance(&self) -> bool {
        self.blockers().is_empty()
    }

    //
    // FEE ESTIMATION
    //

    /// Snapshot the inputs for a fee estimate, or reset the estimate to idle
    /// when there is no account, no amount, or no address to send to yet
    /// (including while a name is still being resolved).
    pub fn begin_fee_estimate(&mut self, account: Option<Address>) -> Option<FeeRequest> {
        let to = self
            .recipient_address()
            .filter(|_| !self.amount.is_empty() && self.address_error.is_empty());
        let (account, to) = match (account, to) {
            (Some(account), Some(to)) => (account, to),
            _ => {
                self.fee = FeeEstimate::Idle;
                return None;
            }
        };

        let tx = self.parsed_amount().map(|amount| {
            asset_transfer(
                Some(account),
                self.asset.token.address,
                to,
                &amount,
                self.asset.chain_id,
            )
        });

        self.fee = FeeEstimate::Loading;
        Some(FeeRequest {
            generation: self.generation,
            tx,
            native: self.native.clone(),
            native_usd_price: self.native_usd_price,
            usd_decimals: self.config.fee_usd_decimals,
        })
    }

    /// Returns false if the outcome belongs to an older set of inputs.
    pub fn apply_fee_estimate(&mut self, outcome: FeeOutcome) -> bool {
        if outcome.generation != self.generation {
            debug!(
                "dropping stale fee estimate (generation {} != {})",
                outcome.generation, self.generation
            );
            return false;
        }
        self.fee = outcome.estimate;
        true
    }

    pub async fn refresh_fee<C: ChainClient>(&mut self, client: &C) {
        if let Some(request) = self.begin_fee_estimate(client.account()) {
            let outcome = request.run(client).await;
            self.apply_fee_estimate(outcome);
        }
    }

    //
    // SUBMISSION
    //

    pub fn prepare_submission(
        &mut self,
        account: Option<Address>,
    ) -> Result<PendingSubmission, SendAssetError> {
        if self.attempting {
            return Err(SendAssetError::InFlight);
        }
        let recipient = self
            .effective_recipient()
            .ok_or(SendAssetError::MissingRecipient)?;
        if self.amount.is_empty() {
            return Err(SendAssetError::MissingAmount);
        }
        let to = self
            .recipient_address()
            .ok_or_else(|| SendAssetError::InvalidRecipient(recipient.clone()))?;
        let amount = TokenAmount::parse(&self.amount, self.asset.token.decimals)?;

        let tx = asset_transfer(
            account,
            self.asset.token.address,
            to,
            &amount,
            self.asset.chain_id,
        );
        self.attempting = true;
        Ok(PendingSubmission {
            generation: self.generation,
            tx,
            recipient,
            amount: self.amount.clone(),
            symbol: self.asset.token.symbol.clone(),
        })
    }

    /// Record the outcome of a submission. Inputs are only reset when they
    /// have not changed since the submission was prepared.
    pub fn finish_submission(
        &mut self,
        outcome: SubmissionOutcome,
    ) -> Result<SendReceipt, SendAssetError> {
        self.attempting = false;
        let SubmissionOutcome { submission, result } = outcome;
        let receipt = match result {
            Ok(receipt) => receipt,
            Err(e) => {
                error!("send failed: {e:#}");
                return Err(SendAssetError::Submission(e));
            }
        };
        if !receipt.status {
            warn!("transaction {} reverted", receipt.transaction_hash);
            return Err(SendAssetError::TransactionReverted(receipt.transaction_hash));
        }

        info!(
            "sent {} {} to {} in {}",
            submission.amount, submission.symbol, submission.recipient, receipt.transaction_hash
        );
        self.tx_hash = Some(receipt.transaction_hash);
        self.events
            .push(FormEvent::TransactionSubmitted(Notification {
                title: "Transaction Submitted".to_string(),
                description: format!(
                    "Sent {} {} to {}",
                    submission.amount, submission.symbol, submission.recipient
                ),
                tx_hash: receipt.transaction_hash,
            }));

        if submission.generation == self.generation {
            self.reset_inputs();
        } else {
            debug!("inputs changed during submission; keeping them");
        }
        Ok(receipt)
    }

    fn reset_inputs(&mut self) {
        self.amount.clear();
        self.recipient_input = Some(String::new());
        self.debounced_recipient.reset(Some(String::new()));
        self.resolution = Resolution::Idle;
        self.address_error.clear();
        self.fee = FeeEstimate::Idle;
        self.bump();
    }

    /// Build, send and record a transfer. Failures are logged and leave the
    /// inputs as they were.
    pub async fn submit<C: ChainClient>(
        &mut self,
        client: &C,
    ) -> Result<SendReceipt, SendAssetError> {
        let pending = match self.prepare_submission(client.account()) {
            Ok(pending) => pending,
            Err(e) => {
                warn!("cannot submit: {e}");
                return Err(e);
            }
        };
        let outcome = pending.send(client).await;
        self.finish_submission(outcome)
    }

    //
    // VIEW STATE
    //

    fn change_view_state(&mut self, next: ViewState) {
        self.view_state = next;
        self.events.push(FormEvent::ViewStateChange(next));
    }

    /// Move from editing to confirmation.
    pub fn advance(&mut self) -> Result<(), SendAssetError> {
        let blockers = self.blockers();
        if !blockers.is_empty() {
            return Err(SendAssetError::Blocked(blockers));
        }
        if self.is_gift_supported() {
            info!("gift preview on chain {}", self.asset.chain_id);
            self.events.push(FormEvent::GiftPreview {
                chain_id: self.asset.chain_id,
            });
        }
        self.change_view_state(ViewState::ConfirmTransaction);
        Ok(())
    }

    pub fn close(&mut self) {
        self.change_view_state(ViewState::SendAssets);
    }

    /// Leave the confirmation pane and forget the last transaction.
    pub fn dismiss(&mut self) {
        self.tx_hash = None;
        self.change_view_state(ViewState::SendAssets);
    }

    /// Submit from the confirmation pane; returns to editing on success.
    pub async fn confirm<C: ChainClient>(&mut self, client: &C) -> Option<SendReceipt> {
        match self.submit(client).await {
            Ok(receipt) => {
                self.change_view_state(ViewState::SendAssets);
                Some(receipt)
            }
            Err(_) => None,
        }
    }

    /// Adopt a view state chosen by the host.
    pub fn set_view_state(&mut self, state: ViewState) {
        self.view_state = state;
    }

    pub fn drain_events(&mut self) -> Vec<FormEvent> {
        std::mem::take(&mut self.events)
    }

    //
    // VIEW MODEL
    //

    pub fn view(&self) -> FormView {
        let gift_supported = self.is_gift_supported();
        if self.view_state == ViewState::ConfirmTransaction && gift_supported {
            return FormView::CreateGift(GiftView {
                chain_id: self.asset.chain_id,
                token_amount: self.parsed_amount(),
            });
        }
        if self.view_state >= ViewState::ConfirmTransaction {
            return FormView::ConfirmSend(ConfirmView {
                recipient: self.effective_recipient(),
                amount: self.amount.clone(),
                symbol: self.asset.token.symbol.clone(),
                chain_id: self.asset.chain_id,
                estimated_fee: self.estimated_fee().map(str::to_string),
                estimated_fee_usd: self.estimated_fee_usd().map(str::to_string),
                tx_hash: self.tx_hash,
                is_attempting: self.attempting,
            });
        }

        let blockers = self.blockers();
        let amount_usd = self.parsed_amount().map(|amount| {
            let value = amount.to_f64() * self.asset.usd_price();
            format!("~{value:.2} USD")
        });
        FormView::Edit(EditView {
            recipient_input: self.recipient_input.clone().unwrap_or_default(),
            show_recipient_input: !gift_supported,
            address_error: (!self.address_error.is_empty()).then(|| self.address_error.clone()),
            resolved_address: self.resolved_address(),
            amount: self.amount.clone(),
            amount_usd,
            symbol: self.asset.token.symbol.clone(),
            chain_id: self.asset.chain_id,
            balance: self.balance().map(|b| b.to_exact()),
            show_percent_buttons: self.balance().is_some() && self.amount_focus.get(),
            insufficient_balance: self.is_insufficient_balance() && !self.amount.is_empty(),
            gift_amount_error: !self.is_gift_amount_valid(),
            can_advance: blockers.is_empty(),
            blockers,
            is_attempting: self.attempting,
        })
    }

    //
    // ACCESSORS
    //

    pub fn asset(&self) -> &Asset {
        &self.asset
    }

    pub fn recipient_input(&self) -> Option<&str> {
        self.recipient_input.as_deref()
    }

    pub fn debounced_recipient(&self) -> Option<&str> {
        self.debounced_recipient.settled().as_deref()
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn address_error(&self) -> &str {
        &self.address_error
    }

    pub fn fee(&self) -> &FeeEstimate {
        &self.fee
    }

    pub fn estimated_fee(&self) -> Option<&str> {
        self.fee.fee()
    }

    pub fn estimated_fee_usd(&self) -> Option<&str> {
        self.fee.fee_usd()
    }

    pub fn is_input_focused(&self) -> bool {
        self.amount_focus.get()
    }

    pub fn tx_hash(&self) -> Option<TxHash> {
        self.tx_hash
    }

    pub fn is_attempting(&self) -> bool {
        self.attempting
    }

    pub fn view_state(&self) -> ViewState {
        self.view_state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
