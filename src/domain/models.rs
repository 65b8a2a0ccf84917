//! Report model and the small value types shared across the app.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

// ====== Enums ======

/// Plan tier of the caller. Derived from `UsageState`, never stored on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanTier {
    Free,
    Pro,
}

impl PlanTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanTier::Free => "free",
            PlanTier::Pro => "pro",
        }
    }

    pub fn is_pro(&self) -> bool {
        matches!(self, PlanTier::Pro)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Speed,
    Keywords,
    Content,
    Mobile,
    Links,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Speed => "speed",
            Category::Keywords => "keywords",
            Category::Content => "content",
            Category::Mobile => "mobile",
            Category::Links => "links",
        }
    }
}

/// Top-level view state owned by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    #[default]
    Idle,
    Analyzing,
    Success,
    Error,
    /// Payment required. Never entered: the paywall is an overlay on top of
    /// whatever state the controller is in.
    Locked,
}

// ====== Report model ======

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub category: Category,
}

/// Category scores, each in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SeoMetrics {
    pub performance: u8,
    pub seo: u8,
    pub mobile: u8,
    pub links: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalDetails {
    pub load_time_estimate: String,
    pub mobile_friendly: bool,
    pub ssl_secure: bool,
    pub internal_links_count: u32,
    pub external_links_count: u32,
}

/// An audit result. Created fresh per successful gateway call and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoReport {
    pub url: String,
    pub timestamp: DateTime<Utc>,
    #[serde(alias = "planType")]
    pub plan_tier: PlanTier,
    pub overall_score: u8,
    pub metrics: SeoMetrics,
    pub summary: String,
    /// Presentation order, not necessarily sorted by severity.
    pub suggestions: Vec<Suggestion>,
    pub technical_details: TechnicalDetails,
}

impl SeoReport {
    pub fn is_pro(&self) -> bool {
        self.plan_tier.is_pro()
    }

    pub fn critical_count(&self) -> usize {
        self.suggestions
            .iter()
            .filter(|s| s.severity == Severity::Critical)
            .count()
    }
}

// ====== Requests ======

/// A single analysis request. Built by the controller, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub url: String,
    pub plan_tier: PlanTier,
}

impl AnalysisRequest {
    /// Trims the URL; blank input is rejected with `AppError::EmptyInput`.
    pub fn new(url: &str, plan_tier: PlanTier) -> Result<Self> {
        let url = url.trim();
        if url.is_empty() {
            return Err(AppError::EmptyInput);
        }
        Ok(Self {
            url: url.to_string(),
            plan_tier,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utils::fixtures::sample_report;
    use super::*;

    #[test]
    fn request_rejects_blank_urls() {
        assert!(matches!(
            AnalysisRequest::new("   ", PlanTier::Free),
            Err(AppError::EmptyInput)
        ));
        let req = AnalysisRequest::new("  https://a.com ", PlanTier::Pro).unwrap();
        assert_eq!(req.url, "https://a.com");
        assert_eq!(req.plan_tier, PlanTier::Pro);
    }

    #[test]
    fn report_serializes_with_camel_case_keys() {
        let report = sample_report("https://a.com", PlanTier::Free);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["planTier"], "free");
        assert_eq!(json["overallScore"], 72);
        assert_eq!(json["technicalDetails"]["internalLinksCount"], 38);
        assert_eq!(json["suggestions"][1]["severity"], "critical");
    }

    #[test]
    fn report_accepts_legacy_plan_type_key() {
        let report = sample_report("https://a.com", PlanTier::Pro);
        let mut json = serde_json::to_value(&report).unwrap();
        let obj = json.as_object_mut().unwrap();
        let tier = obj.remove("planTier").unwrap();
        obj.insert("planType".into(), tier);

        let parsed: SeoReport = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, report);
        assert_eq!(parsed.critical_count(), 1);
    }
}
