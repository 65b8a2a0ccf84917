//! Fakes and fixtures shared by unit and integration tests.

pub mod fixtures {
    use chrono::{DateTime, Utc};

    use crate::domain::{
        Category, PlanTier, SeoMetrics, SeoReport, Severity, Suggestion, TechnicalDetails,
    };

    /// A small but complete report for tests.
    pub fn sample_report(url: &str, plan_tier: PlanTier) -> SeoReport {
        SeoReport {
            url: url.to_string(),
            timestamp: DateTime::parse_from_rfc3339("2026-03-01T12:00:00Z")
                .map(|t| t.with_timezone(&Utc))
                .unwrap_or_default(),
            plan_tier,
            overall_score: 72,
            metrics: SeoMetrics {
                performance: 64,
                seo: 81,
                mobile: 90,
                links: 45,
            },
            summary: "Solid foundations with slow media.".into(),
            suggestions: vec![
                Suggestion {
                    title: "Compress hero images".into(),
                    description: "Serve WebP at the rendered size.".into(),
                    severity: Severity::Warning,
                    category: Category::Speed,
                },
                Suggestion {
                    title: "Add a meta description".into(),
                    description: "The home page has none.".into(),
                    severity: Severity::Critical,
                    category: Category::Keywords,
                },
                Suggestion {
                    title: "Link related articles".into(),
                    description: "Blog posts have no internal links.".into(),
                    severity: Severity::Info,
                    category: Category::Links,
                },
            ],
            technical_details: TechnicalDetails {
                load_time_estimate: "2.4s".into(),
                mobile_friendly: true,
                ssl_secure: true,
                internal_links_count: 38,
                external_links_count: 6,
            },
        }
    }

    /// A Gemini `generateContent` body whose text part is `report_json`.
    pub fn gemini_response(report_json: &str) -> String {
        serde_json::json!({
            "candidates": [{
                "content": { "parts": [{ "text": report_json }] }
            }]
        })
        .to_string()
    }
}

pub mod mocks {
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use async_trait::async_trait;

    use super::fixtures::sample_report;
    use crate::domain::{AnalysisRequest, SeoReport};
    use crate::error::GatewayError;
    use crate::paywall::{SimulatedCheckout, Timer, UNLOCK_DELAY};
    use crate::service::AnalysisGateway;

    /// Gateway that replays queued results and records every request.
    /// With nothing queued it answers with `sample_report` for the request.
    #[derive(Default)]
    pub struct ScriptedGateway {
        script: Mutex<VecDeque<Result<SeoReport, GatewayError>>>,
        requests: Mutex<Vec<AnalysisRequest>>,
    }

    impl ScriptedGateway {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn push(&self, result: Result<SeoReport, GatewayError>) {
            if let Ok(mut script) = self.script.lock() {
                script.push_back(result);
            }
        }

        pub fn requests(&self) -> Vec<AnalysisRequest> {
            self.requests
                .lock()
                .map(|requests| requests.clone())
                .unwrap_or_default()
        }

        pub fn call_count(&self) -> usize {
            self.requests().len()
        }
    }

    #[async_trait]
    impl AnalysisGateway for ScriptedGateway {
        async fn analyze(&self, request: &AnalysisRequest) -> Result<SeoReport, GatewayError> {
            if let Ok(mut requests) = self.requests.lock() {
                requests.push(request.clone());
            }
            let queued = self.script.lock().ok().and_then(|mut s| s.pop_front());
            queued.unwrap_or_else(|| Ok(sample_report(&request.url, request.plan_tier)))
        }

        fn name(&self) -> &'static str {
            "scripted"
        }
    }

    /// Returns immediately and remembers what it was asked to wait.
    #[derive(Default)]
    pub struct InstantTimer {
        slept: Mutex<Vec<Duration>>,
    }

    impl InstantTimer {
        pub fn slept(&self) -> Vec<Duration> {
            self.slept.lock().map(|s| s.clone()).unwrap_or_default()
        }
    }

    #[async_trait]
    impl Timer for InstantTimer {
        async fn sleep(&self, duration: Duration) {
            if let Ok(mut slept) = self.slept.lock() {
                slept.push(duration);
            }
        }
    }

    /// Checkout with the real delay that completes without waiting.
    pub fn instant_checkout(timer: Arc<InstantTimer>) -> SimulatedCheckout {
        SimulatedCheckout::new(UNLOCK_DELAY, timer)
    }
}
