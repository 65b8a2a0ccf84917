//! Application controller: user input -> gating -> gateway -> view state.
//!
//! The async entry points (`submit`, `purchase_pro`) are each split into a
//! synchronous start, an await on an external collaborator, and a
//! synchronous completion. The UI calls the halves directly so it never holds
//! the controller borrowed across an await.

use std::sync::Arc;

use crate::domain::{AnalysisRequest, AppState, PlanTier, SeoReport, UsageState, FREE_LIMIT};
use crate::error::{AppError, GatewayError, Result};
use crate::paywall::{Paywall, SimulatedCheckout};
use crate::service::AnalysisGateway;
use crate::storage::UsageStore;

/// Shown when a gateway failure carries no message of its own.
pub const GENERIC_FAILURE_MESSAGE: &str = "An unexpected error occurred.";

/// What `begin_submit` decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input; nothing happened.
    Ignored,
    /// An analysis or an unlock is already in flight.
    Busy,
    /// Free tier exhausted; the paywall is now showing.
    Blocked,
    /// Analysis started; await the gateway with this request.
    Proceed(AnalysisRequest),
}

pub struct AppController {
    gateway: Arc<dyn AnalysisGateway>,
    store: UsageStore,
    checkout: SimulatedCheckout,
    paywall: Paywall,
    usage: UsageState,
    state: AppState,
    url: String,
    report: Option<SeoReport>,
    error_message: Option<String>,
    in_flight: Option<AnalysisRequest>,
}

impl AppController {
    /// Loads the persisted usage state and starts `Idle`.
    pub fn new(
        gateway: Arc<dyn AnalysisGateway>,
        store: UsageStore,
        checkout: SimulatedCheckout,
    ) -> Self {
        let usage = store.load();
        tracing::info!(
            "Controller ready with {} gateway, usage {:?}",
            gateway.name(),
            usage
        );
        Self {
            gateway,
            store,
            checkout,
            paywall: Paywall::new(FREE_LIMIT),
            usage,
            state: AppState::Idle,
            url: String::new(),
            report: None,
            error_message: None,
            in_flight: None,
        }
    }

    // ====== Accessors ======

    pub fn state(&self) -> AppState {
        self.state
    }

    pub fn usage(&self) -> UsageState {
        self.usage
    }

    /// Derived on every call from `usage`.
    pub fn plan_tier(&self) -> PlanTier {
        self.usage.plan_tier()
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = url.into();
    }

    pub fn report(&self) -> Option<&SeoReport> {
        self.report.as_ref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn paywall(&self) -> &Paywall {
        &self.paywall
    }

    pub fn remaining_free_analyses(&self) -> Option<u32> {
        self.usage.remaining_free(self.paywall.free_limit())
    }

    /// False while an analysis or a purchase is in flight.
    pub fn can_submit(&self) -> bool {
        self.state != AppState::Analyzing && !self.paywall.is_unlocking()
    }

    pub fn gateway(&self) -> Arc<dyn AnalysisGateway> {
        self.gateway.clone()
    }

    pub fn checkout(&self) -> SimulatedCheckout {
        self.checkout.clone()
    }

    // ====== Analysis ======

    pub fn begin_submit(&mut self, url: &str) -> SubmitOutcome {
        if !self.can_submit() {
            tracing::debug!("Ignoring submit while {:?}", self.state);
            return SubmitOutcome::Busy;
        }

        let request = match AnalysisRequest::new(url, self.plan_tier()) {
            Ok(request) => request,
            Err(AppError::EmptyInput) => return SubmitOutcome::Ignored,
            Err(e) => {
                tracing::error!("Unexpected request error: {}", e);
                return SubmitOutcome::Ignored;
            }
        };
        self.url = url.to_string();

        if !self.paywall.admits(self.usage) {
            self.paywall.block();
            return SubmitOutcome::Blocked;
        }

        tracing::info!("Starting {} analysis for {}", request.plan_tier.as_str(), request.url);
        self.state = AppState::Analyzing;
        self.error_message = None;
        self.report = None;
        self.in_flight = Some(request.clone());
        SubmitOutcome::Proceed(request)
    }

    pub fn finish_submit(&mut self, outcome: std::result::Result<SeoReport, GatewayError>) {
        let Some(request) = self.in_flight.take() else {
            tracing::warn!("Dropping analysis result with no request in flight");
            return;
        };

        match outcome {
            Ok(report) => {
                if request.plan_tier == PlanTier::Free {
                    self.record_free_use();
                }
                tracing::info!("Analysis of {} finished with score {}", report.url, report.overall_score);
                self.report = Some(report);
                self.state = AppState::Success;
            }
            Err(e) => {
                tracing::warn!("Analysis of {} failed: {}", request.url, e);
                self.error_message = Some(
                    e.user_message()
                        .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string()),
                );
                self.state = AppState::Error;
            }
        }
    }

    /// Full submit: gate, call the gateway, apply the result.
    pub async fn submit(&mut self, url: &str) -> SubmitOutcome {
        let outcome = self.begin_submit(url);
        if let SubmitOutcome::Proceed(request) = &outcome {
            let gateway = self.gateway.clone();
            let result = gateway.analyze(request).await;
            self.finish_submit(result);
        }
        outcome
    }

    fn record_free_use(&mut self) {
        match self.store.record_free_use(self.usage) {
            Ok(next) => self.usage = next,
            Err(AppError::Storage(e)) => {
                tracing::warn!("Failed to persist usage count: {}", e);
                if let Some(next) = self.usage.after_free_use() {
                    self.usage = next;
                }
            }
            Err(e) => tracing::error!("Could not record free usage: {}", e),
        }
    }

    /// Back to a blank form. Always allowed.
    pub fn reset(&mut self) {
        self.url.clear();
        self.report = None;
        self.error_message = None;
        self.state = AppState::Idle;
    }

    /// Closes the error banner, keeping the typed URL.
    pub fn dismiss_error(&mut self) {
        self.error_message = None;
        if self.state == AppState::Error {
            self.state = AppState::Idle;
        }
    }

    // ====== Paywall ======

    /// Purchase button pressed: `Blocked -> Unlocking`.
    pub fn begin_purchase(&mut self) -> Result<()> {
        self.paywall.begin_unlock()?;
        tracing::info!("Simulated purchase started");
        Ok(())
    }

    /// Grants pro, closes the paywall and returns to `Idle`. The pending URL
    /// is kept but not re-analyzed; the caller must submit again.
    pub fn unlock(&mut self) -> UsageState {
        match self.store.unlock_pro() {
            Ok(state) => self.usage = state,
            Err(e) => {
                tracing::warn!("Failed to persist pro status: {}", e);
                self.usage = UsageState::Pro;
            }
        }
        if self.paywall.is_unlocking() {
            if let Err(e) = self.paywall.finish_unlock() {
                tracing::error!("{}", e);
            }
        } else {
            self.paywall.close();
        }
        self.state = AppState::Idle;
        tracing::info!("Pro plan unlocked");
        self.usage
    }

    /// Full purchase: start, wait out the simulated payment, unlock.
    pub async fn purchase_pro(&mut self) -> Result<UsageState> {
        self.begin_purchase()?;
        let checkout = self.checkout.clone();
        checkout.process().await;
        Ok(self.unlock())
    }
}
