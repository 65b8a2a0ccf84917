//! Pure projection of a `SeoReport` into what the report view draws.
//!
//! Tier only changes cosmetics here; every field of the report is shown for
//! both tiers and suggestions keep their original order.

use chrono::Local;

use crate::domain::{Category, PlanTier, SeoReport, Severity};

/// Colour band for a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Good,
    Fair,
    Poor,
}

impl ScoreBand {
    /// Gauge thresholds: above 70 good, above 40 fair.
    pub fn for_gauge(score: u8) -> Self {
        match score {
            71.. => ScoreBand::Good,
            41..=70 => ScoreBand::Fair,
            _ => ScoreBand::Poor,
        }
    }

    /// Metric bar thresholds: 90 and up good, 50 and up fair.
    pub fn for_bar(score: u8) -> Self {
        match score {
            90.. => ScoreBand::Good,
            50..=89 => ScoreBand::Fair,
            _ => ScoreBand::Poor,
        }
    }

    pub fn stroke(&self) -> &'static str {
        match self {
            ScoreBand::Good => "#16a34a",
            ScoreBand::Fair => "#ca8a04",
            ScoreBand::Poor => "#dc2626",
        }
    }

    pub fn text_class(&self) -> &'static str {
        match self {
            ScoreBand::Good => "text-green-600",
            ScoreBand::Fair => "text-yellow-600",
            ScoreBand::Poor => "text-red-600",
        }
    }

    pub fn bar_class(&self) -> &'static str {
        match self {
            ScoreBand::Good => "bg-green-500",
            ScoreBand::Fair => "bg-yellow-500",
            ScoreBand::Poor => "bg-red-500",
        }
    }
}

/// Circle geometry for the score gauge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeGeometry {
    pub size: u32,
    pub stroke_width: f64,
    pub radius: f64,
    pub circumference: f64,
    /// Unfilled part of the ring.
    pub dash_offset: f64,
}

impl GaugeGeometry {
    pub fn new(score: u8, size: u32) -> Self {
        let stroke_width = 10.0;
        let radius = (f64::from(size) - stroke_width) / 2.0;
        let circumference = 2.0 * std::f64::consts::PI * radius;
        let fraction = f64::from(score.min(100)) / 100.0;
        Self {
            size,
            stroke_width,
            radius,
            circumference,
            dash_offset: circumference * (1.0 - fraction),
        }
    }

    pub fn center(&self) -> f64 {
        f64::from(self.size) / 2.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricCardView {
    pub title: &'static str,
    pub icon: &'static str,
    pub score: u8,
    /// Icon tint: healthy at 70 and up.
    pub healthy: bool,
    pub bar: ScoreBand,
}

impl MetricCardView {
    fn new(title: &'static str, icon: &'static str, score: u8) -> Self {
        Self {
            title,
            icon,
            score,
            healthy: score >= 70,
            bar: ScoreBand::for_bar(score),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionView {
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub category: Category,
    pub icon: &'static str,
}

impl SuggestionView {
    pub fn is_critical(&self) -> bool {
        self.severity == Severity::Critical
    }

    pub fn severity_class(&self) -> &'static str {
        match self.severity {
            Severity::Critical => "bg-red-100 text-red-700",
            Severity::Warning => "bg-yellow-100 text-yellow-800",
            Severity::Info => "bg-blue-50 text-blue-700",
        }
    }
}

pub fn category_icon(category: Category) -> &'static str {
    match category {
        Category::Speed => "⚡",
        Category::Mobile => "📱",
        Category::Links => "🔗",
        Category::Content => "📝",
        Category::Keywords => "ℹ",
    }
}

/// Everything the report layout needs, in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportPresentation {
    pub url: String,
    pub generated_at: String,
    pub tier: PlanTier,
    pub tier_badge: &'static str,
    pub overall_score: u8,
    pub gauge_band: ScoreBand,
    pub ssl_secure: bool,
    pub ssl_label: &'static str,
    pub mobile_friendly: bool,
    pub mobile_label: &'static str,
    pub metrics: Vec<MetricCardView>,
    pub summary: String,
    pub technical_rows: Vec<(&'static str, String)>,
    pub suggestions_heading: &'static str,
    pub suggestions: Vec<SuggestionView>,
}

impl ReportPresentation {
    pub fn is_pro(&self) -> bool {
        self.tier.is_pro()
    }
}

impl From<&SeoReport> for ReportPresentation {
    fn from(report: &SeoReport) -> Self {
        let pro = report.is_pro();
        let details = &report.technical_details;

        Self {
            url: report.url.clone(),
            generated_at: report
                .timestamp
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M")
                .to_string(),
            tier: report.plan_tier,
            tier_badge: if pro { "Premium" } else { "Basic" },
            overall_score: report.overall_score,
            gauge_band: ScoreBand::for_gauge(report.overall_score),
            ssl_secure: details.ssl_secure,
            ssl_label: if details.ssl_secure { "Active" } else { "Inactive" },
            mobile_friendly: details.mobile_friendly,
            mobile_label: if details.mobile_friendly { "Optimized" } else { "Failing" },
            metrics: vec![
                MetricCardView::new("Performance", "⚡", report.metrics.performance),
                MetricCardView::new("On-Page SEO", "📝", report.metrics.seo),
                MetricCardView::new("Mobile", "📱", report.metrics.mobile),
                MetricCardView::new("Links", "🔗", report.metrics.links),
            ],
            summary: report.summary.clone(),
            technical_rows: vec![
                ("Est. Load Time", details.load_time_estimate.clone()),
                ("Internal Links", details.internal_links_count.to_string()),
                ("External Links", details.external_links_count.to_string()),
            ],
            suggestions_heading: if pro {
                "Advanced Recommendations & Fixes"
            } else {
                "Improvement Opportunities"
            },
            suggestions: report
                .suggestions
                .iter()
                .map(|s| SuggestionView {
                    title: s.title.clone(),
                    description: s.description.clone(),
                    severity: s.severity,
                    category: s.category,
                    icon: category_icon(s.category),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::sample_report;

    #[test]
    fn gauge_and_bar_bands_use_their_own_thresholds() {
        assert_eq!(ScoreBand::for_gauge(71), ScoreBand::Good);
        assert_eq!(ScoreBand::for_gauge(70), ScoreBand::Fair);
        assert_eq!(ScoreBand::for_gauge(41), ScoreBand::Fair);
        assert_eq!(ScoreBand::for_gauge(40), ScoreBand::Poor);

        assert_eq!(ScoreBand::for_bar(90), ScoreBand::Good);
        assert_eq!(ScoreBand::for_bar(89), ScoreBand::Fair);
        assert_eq!(ScoreBand::for_bar(50), ScoreBand::Fair);
        assert_eq!(ScoreBand::for_bar(49), ScoreBand::Poor);
    }

    #[test]
    fn gauge_offset_tracks_score() {
        let full = GaugeGeometry::new(100, 200);
        assert!(full.dash_offset.abs() < 1e-9);
        assert_eq!(full.radius, 95.0);

        let empty = GaugeGeometry::new(0, 200);
        assert!((empty.dash_offset - empty.circumference).abs() < 1e-9);

        let half = GaugeGeometry::new(50, 100);
        assert!((half.dash_offset - half.circumference / 2.0).abs() < 1e-9);
        assert_eq!(half.center(), 50.0);
    }

    #[test]
    fn projection_keeps_content_and_order() {
        let report = sample_report("https://a.com", PlanTier::Free);
        let view = ReportPresentation::from(&report);

        assert_eq!(view.url, report.url);
        assert_eq!(view.overall_score, 72);
        assert_eq!(view.gauge_band, ScoreBand::Good);
        let titles: Vec<&str> = view.suggestions.iter().map(|s| s.title.as_str()).collect();
        let expected: Vec<&str> = report.suggestions.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, expected);
        assert!(view.suggestions[1].is_critical());
        assert_eq!(view.suggestions[0].icon, "⚡");
        assert_eq!(view.metrics.len(), 4);
        assert!(!view.metrics[0].healthy);
        assert!(view.metrics[2].healthy);
        assert_eq!(view.technical_rows[1], ("Internal Links", "38".to_string()));
    }

    #[test]
    fn tier_only_changes_cosmetics() {
        let free = ReportPresentation::from(&sample_report("https://a.com", PlanTier::Free));
        let pro = ReportPresentation::from(&sample_report("https://a.com", PlanTier::Pro));

        assert_eq!(free.tier_badge, "Basic");
        assert_eq!(pro.tier_badge, "Premium");
        assert_eq!(free.suggestions_heading, "Improvement Opportunities");
        assert_eq!(pro.suggestions_heading, "Advanced Recommendations & Fixes");
        assert_eq!(free.suggestions, pro.suggestions);
        assert_eq!(free.metrics, pro.metrics);
        assert_eq!(free.technical_rows, pro.technical_rows);
    }
}
