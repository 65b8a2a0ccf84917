use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use super::gateway::AnalysisGateway;
use super::prompt;
use crate::config::GeminiConfig;
use crate::domain::{
    AnalysisRequest, PlanTier, SeoMetrics, SeoReport, Suggestion, TechnicalDetails,
};
use crate::error::GatewayError;
use crate::extractor::PageSnapshot;
use crate::io::http_client;

/// Report payload as produced by the model, before the gateway stamps it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeneratedReport {
    overall_score: i64,
    metrics: GeneratedMetrics,
    summary: String,
    #[serde(default)]
    suggestions: Vec<Suggestion>,
    technical_details: GeneratedDetails,
}

#[derive(Debug, Deserialize)]
struct GeneratedMetrics {
    performance: i64,
    seo: i64,
    mobile: i64,
    links: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeneratedDetails {
    load_time_estimate: String,
    mobile_friendly: bool,
    ssl_secure: bool,
    internal_links_count: i64,
    external_links_count: i64,
}

fn score(raw: i64) -> u8 {
    raw.clamp(0, 100) as u8
}

fn count(raw: i64) -> u32 {
    u32::try_from(raw.max(0)).unwrap_or(u32::MAX)
}

impl GeneratedReport {
    fn into_report(self, url: &str, plan_tier: PlanTier) -> SeoReport {
        SeoReport {
            url: url.to_string(),
            timestamp: Utc::now(),
            plan_tier,
            overall_score: score(self.overall_score),
            metrics: SeoMetrics {
                performance: score(self.metrics.performance),
                seo: score(self.metrics.seo),
                mobile: score(self.metrics.mobile),
                links: score(self.metrics.links),
            },
            summary: self.summary,
            suggestions: self.suggestions,
            technical_details: TechnicalDetails {
                load_time_estimate: self.technical_details.load_time_estimate,
                mobile_friendly: self.technical_details.mobile_friendly,
                ssl_secure: self.technical_details.ssl_secure,
                internal_links_count: count(self.technical_details.internal_links_count),
                external_links_count: count(self.technical_details.external_links_count),
            },
        }
    }
}

/// Strips a Markdown code fence the model sometimes wraps JSON in.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

/// Parses the model's JSON text into a stamped report.
fn parse_report(text: &str, request: &AnalysisRequest) -> Result<SeoReport, GatewayError> {
    let generated: GeneratedReport = serde_json::from_str(strip_code_fence(text))
        .map_err(|e| GatewayError::malformed(e.to_string()))?;
    Ok(generated.into_report(&request.url, request.plan_tier))
}

/// Generates SEO audits with Google Gemini.
pub struct GeminiGateway {
    config: GeminiConfig,
    client: Client,
}

impl GeminiGateway {
    pub fn new(config: GeminiConfig) -> Result<Self, GatewayError> {
        let client = http_client::build_client(config.timeout).map_err(GatewayError::network)?;
        Ok(Self { config, client })
    }

    fn endpoint(&self, api_key: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.config.base_url.trim_end_matches('/'),
            self.config.model,
            api_key
        )
    }

    async fn snapshot(&self, url: &str) -> Option<PageSnapshot> {
        if !self.config.page_probe {
            return None;
        }
        let html = http_client::fetch_html_from_url(&self.client, url, self.config.probe_timeout).await?;
        Some(PageSnapshot::from_html(&html, url))
    }
}

#[async_trait]
impl AnalysisGateway for GeminiGateway {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<SeoReport, GatewayError> {
        let api_key = match self.config.api_key.as_deref() {
            Some(key) if !key.is_empty() => key,
            _ => return Err(GatewayError::MissingApiKey),
        };

        let snapshot = self.snapshot(&request.url).await;
        let prompt = prompt::build_prompt(&request.url, request.plan_tier, snapshot.as_ref());

        let request_body = json!({
            "contents": [{
                "parts": [{
                    "text": prompt
                }]
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": prompt::response_schema()
            }
        });

        tracing::info!(
            "Requesting {} audit for {} from {}",
            request.plan_tier.as_str(),
            request.url,
            self.config.model
        );

        let response = self
            .client
            .post(self.endpoint(api_key))
            .json(&request_body)
            .send()
            .await
            .map_err(GatewayError::network)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Gemini API error {}: {}", status, body);
            return Err(GatewayError::Upstream { status, body });
        }

        let response_json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| GatewayError::malformed(e.to_string()))?;

        let text = response_json["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or_else(|| GatewayError::malformed("response contained no report text"))?;

        let report = parse_report(text, request)?;
        tracing::info!(
            "Received audit for {}: score {}, {} suggestions",
            report.url,
            report.overall_score,
            report.suggestions.len()
        );
        Ok(report)
    }

    fn name(&self) -> &'static str {
        "gemini"
    }
}
