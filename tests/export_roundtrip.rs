//! Renders a report to a document on disk and reads it back with an HTML
//! parser, checking what a reader of the exported file would see.

use scraper::{Html, Selector};

use seo_master::domain::{Category, PlanTier, Severity, Suggestion};
use seo_master::report::{
    DocumentExporter, ExportHandle, ExportOptions, HtmlDocumentExporter, PageFormat,
};
use seo_master::test_utils::fixtures::sample_report;

fn texts(document: &Html, selector: &str) -> Vec<String> {
    let selector = Selector::parse(selector).unwrap();
    document
        .select(&selector)
        .map(|e| e.text().collect::<String>().trim().to_string())
        .collect()
}

#[test]
fn exported_document_matches_the_report() {
    let dir = tempfile::tempdir().unwrap();
    let exporter = HtmlDocumentExporter::new(dir.path());
    let report = sample_report("https://shop.example.com/", PlanTier::Free);

    let path = exporter.export(&report, &ExportOptions::default()).unwrap();

    assert_eq!(
        path.file_name().and_then(|n| n.to_str()),
        Some("seo-report-https___shop_example_com_.html")
    );
    let html = std::fs::read_to_string(&path).unwrap();
    assert!(html.contains("size: 210mm 297mm"));

    let document = Html::parse_document(&html);
    assert_eq!(texts(&document, "#seo-report .report-url"), vec!["https://shop.example.com/"]);
    assert_eq!(texts(&document, ".overall-score"), vec!["72"]);
    assert_eq!(texts(&document, ".tier-badge"), vec!["Basic"]);
    assert_eq!(texts(&document, ".metric-card").len(), 4);
    assert_eq!(
        texts(&document, "ol.suggestions li.suggestion h4.suggestion-title"),
        vec![
            "Compress hero images",
            "Add a meta description",
            "Link related articles",
        ]
    );
    assert_eq!(
        texts(&document, ".report-summary"),
        vec!["Solid foundations with slow media."]
    );
}

#[test]
fn exported_document_needs_no_network() {
    let dir = tempfile::tempdir().unwrap();
    let exporter = HtmlDocumentExporter::new(dir.path());
    let report = sample_report("https://a.com", PlanTier::Pro);

    let path = exporter.export(&report, &ExportOptions::default()).unwrap();
    let html = std::fs::read_to_string(&path).unwrap();
    let document = Html::parse_document(&html);

    assert!(texts(&document, "script[src]").is_empty());
    assert!(texts(&document, "link[rel=stylesheet]").is_empty());
    assert!(!html.contains("@import"));

    // Styles for the classes the report uses travel inside the file.
    let style = texts(&document, "head style").concat();
    assert!(style.contains(".rounded-xl"));
    assert!(style.contains(".md\\:grid-cols-4"));
    assert!(style.contains(".bg-gradient-to-r.from-amber-500"));
}

#[test]
fn pro_export_uses_the_premium_layout_and_letter_pages() {
    let dir = tempfile::tempdir().unwrap();
    let exporter = HtmlDocumentExporter::new(dir.path().join("nested"));
    let mut report = sample_report("https://a.com", PlanTier::Pro);
    report.suggestions.push(Suggestion {
        title: "Escape <script> & friends".into(),
        description: "Markup in model output stays text.".into(),
        severity: Severity::Critical,
        category: Category::Content,
    });
    let options = ExportOptions {
        page_format: PageFormat::Letter,
        scale: 1.0,
    };

    let path = exporter.export(&report, &options).unwrap();
    let html = std::fs::read_to_string(&path).unwrap();
    assert!(html.contains("size: 8.5in 11in"));

    let document = Html::parse_document(&html);
    assert_eq!(texts(&document, ".tier-badge"), vec!["Premium"]);
    let titles = texts(&document, "h4.suggestion-title");
    assert_eq!(titles.len(), 4);
    assert_eq!(titles[3], "Escape <script> & friends");
}

#[tokio::test]
async fn background_export_writes_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let handle = ExportHandle::new(HtmlDocumentExporter::new(dir.path()));
    let report = sample_report("https://a.com", PlanTier::Free);

    let path = handle
        .export_in_background(report, ExportOptions::default())
        .await
        .unwrap();

    assert!(path.starts_with(dir.path()));
    assert!(path.exists());
}
