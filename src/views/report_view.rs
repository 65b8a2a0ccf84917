use dioxus::prelude::*;

use crate::domain::SeoReport;
use crate::report::export::{export_notice, ExportHandle, ExportOptions, NOTICE_DURATION};
use crate::report::presentation::{MetricCardView, ReportPresentation, SuggestionView};
use crate::views::score_chart::ScoreChart;

/// Report screen: toolbar plus the printable document.
#[component]
pub fn ReportView(report: SeoReport, on_back: EventHandler<()>) -> Element {
    let exporter = use_context::<ExportHandle>();
    let presentation = ReportPresentation::from(&report);
    let is_pro = presentation.is_pro();

    let mut notice = use_signal(|| None::<String>);

    let download = move |_: MouseEvent| {
        let exporter = exporter.clone();
        let report = report.clone();
        spawn(async move {
            let result = exporter.export_in_background(report, ExportOptions::default()).await;
            match &result {
                Ok(path) => tracing::info!("Report exported to {}", path.display()),
                Err(e) => tracing::error!("Report export failed: {}", e),
            }
            let message = export_notice(&result);
            notice.set(Some(message.clone()));
            tokio::time::sleep(NOTICE_DURATION).await;
            // A newer export may have replaced the notice meanwhile.
            if notice.peek().as_deref() == Some(message.as_str()) {
                notice.set(None);
            }
        });
    };

    rsx! {
        div {
            class: "pb-20",
            div {
                class: "bg-white border-b border-slate-200 shadow-sm sticky top-16 z-40 py-4 px-4 sm:px-8 flex justify-between items-center",
                button {
                    class: "text-slate-600 hover:text-sky-600 font-medium text-sm transition-colors",
                    onclick: move |_| on_back.call(()),
                    "← New Analysis"
                }
                div {
                    class: "flex gap-3 items-center",
                    if let Some(message) = notice() {
                        span { class: "export-notice text-xs text-slate-500 break-all", "{message}" }
                    }
                    if is_pro {
                        div {
                            class: "hidden sm:flex items-center gap-1 bg-amber-100 text-amber-800 px-3 py-1 rounded-full text-xs font-bold",
                            "★ PRO REPORT"
                        }
                    }
                    button {
                        class: "flex items-center gap-2 bg-sky-600 hover:bg-sky-700 text-white px-4 py-2 rounded-lg font-medium text-sm transition-all shadow-sm",
                        onclick: download,
                        "⬇ Export Report"
                    }
                }
            }
            ReportDocument { presentation }
        }
    }
}

/// The printable part of the report. Has no event handlers so it can also be
/// rendered to static HTML for export.
#[component]
pub fn ReportDocument(presentation: ReportPresentation) -> Element {
    let p = presentation;
    let is_pro = p.is_pro();
    let summary_box = if is_pro {
        "bg-gradient-to-br from-amber-50 to-white border-amber-100"
    } else {
        "bg-slate-50 border-slate-100"
    };
    let summary_heading = if is_pro { "text-amber-900" } else { "text-slate-800" };
    let tier_badge_class = if is_pro {
        "bg-gradient-to-r from-amber-500 to-orange-500 text-white"
    } else {
        "bg-slate-200 text-slate-600"
    };
    let ssl_class = if p.ssl_secure { "bg-green-100 text-green-800" } else { "bg-red-100 text-red-800" };
    let mobile_class = if p.mobile_friendly { "bg-blue-100 text-blue-800" } else { "bg-red-100 text-red-800" };
    let suggestion_count = p.suggestions.len();

    rsx! {
        div {
            id: "seo-report",
            class: "max-w-5xl mx-auto mt-8 bg-white min-h-screen p-8 rounded-xl shadow-sm border border-slate-100 relative overflow-hidden",

            if is_pro {
                div { class: "absolute top-0 right-0 -mt-10 -mr-10 w-40 h-40 bg-amber-400/10 rotate-45 pointer-events-none" }
            }

            div {
                class: "flex flex-col md:flex-row justify-between items-start md:items-center border-b border-slate-100 pb-8 mb-8",
                div {
                    div {
                        class: "flex items-center gap-3 mb-2",
                        h1 { class: "text-2xl font-bold text-slate-900", "SEO Audit Report" }
                        span {
                            class: "tier-badge text-xs px-2 py-0.5 rounded font-bold uppercase tracking-wider {tier_badge_class}",
                            "{p.tier_badge}"
                        }
                    }
                    a {
                        class: "report-url text-sky-600 hover:underline text-sm break-all",
                        href: "{p.url}",
                        target: "_blank",
                        rel: "noreferrer",
                        "{p.url}"
                    }
                    p { class: "text-slate-400 text-xs mt-2", "Generated on: {p.generated_at}" }
                }
                div {
                    class: "mt-6 md:mt-0 flex items-center gap-6",
                    div {
                        class: "text-right",
                        p { class: "text-sm text-slate-500 mb-1", "Site Health" }
                        div {
                            class: "flex gap-2",
                            span { class: "px-2.5 py-0.5 rounded-full text-xs font-medium {ssl_class}", "SSL: {p.ssl_label}" }
                            span { class: "px-2.5 py-0.5 rounded-full text-xs font-medium {mobile_class}", "Mobile: {p.mobile_label}" }
                        }
                    }
                    ScoreChart { score: p.overall_score, size: 100 }
                }
            }

            div {
                class: "grid grid-cols-2 md:grid-cols-4 gap-4 mb-10",
                for card in p.metrics.iter().cloned() {
                    MetricCard { card }
                }
            }

            div {
                class: "{summary_box} rounded-xl p-6 mb-10 border",
                h3 {
                    class: "text-lg font-semibold mb-3 flex items-center gap-2 {summary_heading}",
                    if is_pro {
                        span { class: "text-amber-500", "✨" }
                    }
                    "Executive Summary"
                }
                p { class: "report-summary text-slate-600 leading-relaxed", "{p.summary}" }
            }

            div {
                class: "mb-10",
                h3 { class: "text-lg font-semibold text-slate-800 mb-4", "Technical Details" }
                div {
                    class: "grid grid-cols-1 sm:grid-cols-3 gap-4",
                    for (label, value) in p.technical_rows.iter().cloned() {
                        TechItem { label, value }
                    }
                }
            }

            div {
                h3 {
                    class: "text-lg font-semibold text-slate-800 mb-6 flex items-center gap-2",
                    span { class: "bg-sky-100 text-sky-700 p-1 rounded text-sm font-bold min-w-[1.5rem] text-center", "{suggestion_count}" }
                    "{p.suggestions_heading}"
                }
                ol {
                    class: "suggestions space-y-4",
                    for suggestion in p.suggestions.iter().cloned() {
                        SuggestionItem { suggestion, show_docs_link: is_pro }
                    }
                }
            }
        }
    }
}

#[component]
fn MetricCard(card: MetricCardView) -> Element {
    let icon_class = if card.healthy { "bg-green-50 text-green-600" } else { "bg-red-50 text-red-600" };
    let bar_class = card.bar.bar_class();
    let score = card.score;

    rsx! {
        div {
            class: "metric-card bg-white p-4 rounded-xl border border-slate-200 flex flex-col items-center justify-center text-center",
            div { class: "mb-2 p-2 rounded-full {icon_class}", "{card.icon}" }
            span { class: "text-slate-500 text-xs font-medium uppercase mb-1", "{card.title}" }
            span { class: "text-2xl font-bold text-slate-800", "{score}/100" }
            div {
                class: "w-full bg-slate-100 h-1.5 rounded-full mt-3 overflow-hidden",
                div { class: "h-full rounded-full {bar_class}", style: "width: {score}%" }
            }
        }
    }
}

#[component]
fn TechItem(label: &'static str, value: String) -> Element {
    rsx! {
        div {
            class: "flex justify-between items-center p-3 bg-slate-50 rounded-lg border border-slate-100",
            span { class: "text-slate-500 text-sm", "{label}" }
            span { class: "text-slate-900 font-medium", "{value}" }
        }
    }
}

#[component]
fn SuggestionItem(suggestion: SuggestionView, show_docs_link: bool) -> Element {
    let border = if suggestion.is_critical() {
        "border-l-4 border-l-red-500 border-y-slate-100 border-r-slate-100"
    } else {
        "border-slate-100 hover:border-sky-200"
    };
    let chip = suggestion.severity_class();
    let severity = suggestion.severity.as_str();

    rsx! {
        li {
            class: "suggestion flex gap-4 p-4 rounded-lg border transition-all bg-white {border}",
            div { class: "mt-1 shrink-0", "{suggestion.icon}" }
            div {
                class: "flex-1",
                div {
                    class: "flex items-center justify-between mb-1",
                    h4 { class: "suggestion-title font-medium text-slate-900", "{suggestion.title}" }
                    span { class: "text-xs px-2 py-1 rounded-full font-medium uppercase {chip}", "{severity}" }
                }
                p { class: "text-slate-600 text-sm", "{suggestion.description}" }
                if show_docs_link {
                    div {
                        class: "mt-3 pt-3 border-t border-slate-100 flex items-center gap-2 text-xs text-slate-400",
                        span { class: "font-semibold text-sky-600 cursor-pointer hover:underline", "View technical docs →" }
                    }
                }
            }
        }
    }
}
