//! Prompt text and structured-output schema for the audit model.

use serde_json::{json, Value};

use crate::domain::PlanTier;
use crate::extractor::PageSnapshot;

const PERSONA: &str =
    "You are an expert SEO consultant. Your tone is professional, encouraging, and data-driven.";

const FREE_BRIEF: &str = r#"Produce a BASIC SEO audit of the website below.
- Estimate scores from 0 to 100 for overall health, performance, on-page SEO, mobile and links.
- Write a short executive summary (2-3 sentences).
- List 3 to 5 of the most important improvement suggestions, highest impact first.
- Keep descriptions to one or two sentences each."#;

const PRO_BRIEF: &str = r#"Produce a PREMIUM, in-depth SEO audit of the website below.
- Estimate scores from 0 to 100 for overall health, performance, on-page SEO, mobile and links.
- Write a detailed executive summary (4-6 sentences) that covers competitive positioning.
- List 8 to 12 suggestions ordered by priority, each with concrete step-by-step fixes
  (tags, attributes or configuration to change) and the expected impact.
- Cover speed, keywords, content, mobile and links."#;

/// Full prompt for one audit request.
pub fn build_prompt(url: &str, tier: PlanTier, snapshot: Option<&PageSnapshot>) -> String {
    let brief = match tier {
        PlanTier::Free => FREE_BRIEF,
        PlanTier::Pro => PRO_BRIEF,
    };

    let mut prompt = format!("{}\n\n{}\n\nWebsite: {}", PERSONA, brief, url);
    if let Some(snapshot) = snapshot {
        prompt.push_str("\n\nObserved page facts:\n");
        prompt.push_str(&snapshot.describe());
    }
    prompt.push_str(
        "\n\nRespond only with JSON matching the response schema. \
         Severity is one of critical, warning, info. \
         Category is one of speed, keywords, content, mobile, links.",
    );
    prompt
}

/// Gemini `responseSchema` for the report payload.
pub fn response_schema() -> Value {
    let score = json!({ "type": "INTEGER" });
    json!({
        "type": "OBJECT",
        "properties": {
            "overallScore": score,
            "metrics": {
                "type": "OBJECT",
                "properties": {
                    "performance": score,
                    "seo": score,
                    "mobile": score,
                    "links": score
                },
                "required": ["performance", "seo", "mobile", "links"]
            },
            "summary": { "type": "STRING" },
            "suggestions": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING" },
                        "description": { "type": "STRING" },
                        "severity": { "type": "STRING", "enum": ["critical", "warning", "info"] },
                        "category": {
                            "type": "STRING",
                            "enum": ["speed", "keywords", "content", "mobile", "links"]
                        }
                    },
                    "required": ["title", "description", "severity", "category"]
                }
            },
            "technicalDetails": {
                "type": "OBJECT",
                "properties": {
                    "loadTimeEstimate": { "type": "STRING" },
                    "mobileFriendly": { "type": "BOOLEAN" },
                    "sslSecure": { "type": "BOOLEAN" },
                    "internalLinksCount": { "type": "INTEGER" },
                    "externalLinksCount": { "type": "INTEGER" }
                },
                "required": [
                    "loadTimeEstimate",
                    "mobileFriendly",
                    "sslSecure",
                    "internalLinksCount",
                    "externalLinksCount"
                ]
            }
        },
        "required": ["overallScore", "metrics", "summary", "suggestions", "technicalDetails"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_get_different_briefs() {
        let free = build_prompt("https://a.com", PlanTier::Free, None);
        let pro = build_prompt("https://a.com", PlanTier::Pro, None);

        assert!(free.contains("BASIC SEO audit"));
        assert!(free.contains("3 to 5"));
        assert!(pro.contains("PREMIUM"));
        assert!(pro.contains("8 to 12"));
        assert!(free.contains("Website: https://a.com"));
        assert!(!free.contains("Observed page facts"));
    }

    #[test]
    fn snapshot_is_appended_when_present() {
        let snapshot = PageSnapshot {
            title: Some("Acme".into()),
            ..Default::default()
        };
        let prompt = build_prompt("https://a.com", PlanTier::Free, Some(&snapshot));
        assert!(prompt.contains("Observed page facts:"));
        assert!(prompt.contains("- Title: Acme"));
    }

    #[test]
    fn schema_requires_every_report_section() {
        let schema = response_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|v| v.as_str())
            .collect();
        assert_eq!(
            required,
            ["overallScore", "metrics", "summary", "suggestions", "technicalDetails"]
        );
        assert_eq!(
            schema["properties"]["suggestions"]["items"]["properties"]["category"]["enum"][4],
            "links"
        );
    }
}
