//! Paywall overlay: decides when the free tier is exhausted and runs the
//! simulated purchase that unlocks the pro tier.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::UsageState;
use crate::error::{AppError, Result};

/// Simulated payment processing time.
pub const UNLOCK_DELAY: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaywallState {
    #[default]
    Unblocked,
    /// Upsell modal shown.
    Blocked,
    /// Simulated payment in progress.
    Unlocking,
}

#[derive(Debug, Clone)]
pub struct Paywall {
    state: PaywallState,
    free_limit: u32,
}

impl Paywall {
    pub fn new(free_limit: u32) -> Self {
        Self {
            state: PaywallState::Unblocked,
            free_limit,
        }
    }

    pub fn state(&self) -> PaywallState {
        self.state
    }

    pub fn free_limit(&self) -> u32 {
        self.free_limit
    }

    /// Whether the modal is visible.
    pub fn is_open(&self) -> bool {
        !matches!(self.state, PaywallState::Unblocked)
    }

    pub fn is_unlocking(&self) -> bool {
        matches!(self.state, PaywallState::Unlocking)
    }

    /// Pure gating check for an analysis request.
    pub fn admits(&self, usage: UsageState) -> bool {
        !usage.is_exhausted(self.free_limit)
    }

    /// `Unblocked -> Blocked`. Re-blocking an open paywall is harmless.
    pub fn block(&mut self) {
        if self.state == PaywallState::Unblocked {
            tracing::info!("Free limit of {} reached, showing paywall", self.free_limit);
            self.state = PaywallState::Blocked;
        }
    }

    /// `Blocked -> Unlocking`, started by the purchase button.
    pub fn begin_unlock(&mut self) -> Result<()> {
        match self.state {
            PaywallState::Blocked => {
                self.state = PaywallState::Unlocking;
                Ok(())
            }
            other => Err(AppError::invalid_state(format!(
                "cannot start a purchase while the paywall is {:?}",
                other
            ))),
        }
    }

    /// `Unlocking -> Unblocked`, after the simulated payment settles.
    pub fn finish_unlock(&mut self) -> Result<()> {
        match self.state {
            PaywallState::Unlocking => {
                self.state = PaywallState::Unblocked;
                Ok(())
            }
            other => Err(AppError::invalid_state(format!(
                "cannot finish a purchase while the paywall is {:?}",
                other
            ))),
        }
    }

    /// Closes the modal from any state.
    pub fn close(&mut self) {
        self.state = PaywallState::Unblocked;
    }
}

impl Default for Paywall {
    fn default() -> Self {
        Self::new(crate::domain::FREE_LIMIT)
    }
}

/// Suspension point used by the simulated checkout; swapped for an instant
/// timer in tests.
#[async_trait]
pub trait Timer: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TokioTimer;

#[async_trait]
impl Timer for TokioTimer {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Fake payment processor. There is no gateway behind it and it never fails.
#[derive(Clone)]
pub struct SimulatedCheckout {
    delay: Duration,
    timer: Arc<dyn Timer>,
}

impl SimulatedCheckout {
    pub fn new(delay: Duration, timer: Arc<dyn Timer>) -> Self {
        Self { delay, timer }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Resolves once the simulated payment has "cleared".
    pub async fn process(&self) {
        tracing::debug!("Processing simulated payment ({:?})", self.delay);
        self.timer.sleep(self.delay).await;
    }
}

impl Default for SimulatedCheckout {
    fn default() -> Self {
        Self::new(UNLOCK_DELAY, Arc::new(TokioTimer))
    }
}
