//! Free-tier consumption state and its persisted wire form.

use super::models::PlanTier;

/// Number of free analyses before the paywall opens.
pub const FREE_LIMIT: u32 = 2;

/// Reserved stored value marking an unlocked (pro) caller. Never a valid count.
pub const PRO_SENTINEL: i64 = -100;

/// How much of the free tier the caller has used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageState {
    /// Completed free analyses.
    Free(u32),
    /// Unlimited usage.
    Pro,
}

impl Default for UsageState {
    fn default() -> Self {
        UsageState::Free(0)
    }
}

impl UsageState {
    /// Decodes the stored value from its leading integer, so `"3.5"` reads as
    /// 3 and `"2abc"` as 2. Missing, unparsable or negative (non-sentinel)
    /// values read as a fresh free state.
    pub fn decode(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        match leading_integer(raw) {
            Some(PRO_SENTINEL) => UsageState::Pro,
            Some(n) if n >= 0 => UsageState::Free(u32::try_from(n).unwrap_or(u32::MAX)),
            Some(n) => {
                tracing::warn!("Ignoring negative usage count {}", n);
                Self::default()
            }
            None => {
                tracing::warn!("Ignoring unparsable usage count {:?}", raw);
                Self::default()
            }
        }
    }

    pub fn encode(&self) -> String {
        match self {
            UsageState::Free(count) => count.to_string(),
            UsageState::Pro => PRO_SENTINEL.to_string(),
        }
    }

    pub fn plan_tier(&self) -> PlanTier {
        match self {
            UsageState::Free(_) => PlanTier::Free,
            UsageState::Pro => PlanTier::Pro,
        }
    }

    pub fn is_pro(&self) -> bool {
        matches!(self, UsageState::Pro)
    }

    /// State after one more successful free analysis; `None` for pro callers.
    pub fn after_free_use(self) -> Option<Self> {
        match self {
            UsageState::Free(count) => Some(UsageState::Free(count.saturating_add(1))),
            UsageState::Pro => None,
        }
    }

    /// True once a free caller has used up `limit` analyses.
    pub fn is_exhausted(&self, limit: u32) -> bool {
        match self {
            UsageState::Free(count) => *count >= limit,
            UsageState::Pro => false,
        }
    }

    pub fn remaining_free(&self, limit: u32) -> Option<u32> {
        match self {
            UsageState::Free(count) => Some(limit.saturating_sub(*count)),
            UsageState::Pro => None,
        }
    }
}

/// Optional sign and the digits that follow it, after leading whitespace.
/// Anything from the first non-digit on is ignored.
fn leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let value = rest[..digits].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}
