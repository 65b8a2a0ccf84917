//! Report export: turns the rendered report into a downloadable, paginated
//! document named after the audited URL.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use dioxus::prelude::*;

use super::presentation::ReportPresentation;
use crate::domain::SeoReport;
use crate::error::ExportError;
use crate::views::report_view::ReportDocument;

/// Every utility class the report document uses, so the file renders the
/// same offline.
const REPORT_CSS: &str = include_str!("report.css");

/// How long the export notice stays in the report toolbar.
pub const NOTICE_DURATION: Duration = Duration::from_secs(6);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageFormat {
    #[default]
    A4,
    Letter,
}

impl PageFormat {
    /// Portrait page size for CSS `@page`.
    pub fn css_size(&self) -> &'static str {
        match self {
            PageFormat::A4 => "210mm 297mm",
            PageFormat::Letter => "8.5in 11in",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportOptions {
    pub page_format: PageFormat,
    /// Render scale relative to screen size.
    pub scale: f32,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            page_format: PageFormat::A4,
            scale: 2.0,
        }
    }
}

/// `seo-report-` followed by the URL with every non-alphanumeric ASCII
/// character replaced by `_`.
pub fn export_file_stem(url: &str) -> String {
    let slug: String = url
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    format!("seo-report-{}", slug)
}

/// Produces a document from a report and returns where it was written.
pub trait DocumentExporter: Send + Sync {
    fn export(&self, report: &SeoReport, options: &ExportOptions) -> Result<PathBuf, ExportError>;
}

/// Writes a self-contained HTML document with print pagination rules.
#[derive(Debug, Clone)]
pub struct HtmlDocumentExporter {
    output_dir: PathBuf,
}

impl HtmlDocumentExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Server-side renders the report component into a full document.
    pub fn render_document(report: &SeoReport, options: &ExportOptions) -> String {
        let presentation = ReportPresentation::from(report);
        let body = dioxus_ssr::render_element(rsx! {
            ReportDocument { presentation }
        });

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>SEO Audit Report - {title}</title>
<style>
{css}
@page {{ size: {page}; margin: 10mm; }}
body {{ zoom: {scale}; }}
@media print {{ body {{ zoom: 1; }} .suggestion, .metric-card {{ break-inside: avoid; }} }}
</style>
</head>
<body>
{body}
</body>
</html>
"#,
            title = escape_html(&report.url),
            css = REPORT_CSS,
            page = options.page_format.css_size(),
            scale = options.scale,
            body = body,
        )
    }
}

impl DocumentExporter for HtmlDocumentExporter {
    fn export(&self, report: &SeoReport, options: &ExportOptions) -> Result<PathBuf, ExportError> {
        fs::create_dir_all(&self.output_dir)?;
        let path = self
            .output_dir
            .join(format!("{}.html", export_file_stem(&report.url)));
        fs::write(&path, Self::render_document(report, options))?;
        tracing::info!("Exported report for {} to {}", report.url, path.display());
        Ok(path)
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// One-line outcome for the report toolbar.
pub fn export_notice(result: &Result<PathBuf, ExportError>) -> String {
    match result {
        Ok(path) => format!("Report saved to {}", path.display()),
        Err(e) => format!("Export failed: {}", e),
    }
}

/// Shared exporter handed to the views through the Dioxus context.
#[derive(Clone)]
pub struct ExportHandle(pub Arc<dyn DocumentExporter>);

impl ExportHandle {
    pub fn new(exporter: impl DocumentExporter + 'static) -> Self {
        Self(Arc::new(exporter))
    }

    /// Runs the export off the UI thread. Fire-and-forget for the caller:
    /// the outcome is only logged.
    pub async fn export_in_background(
        &self,
        report: SeoReport,
        options: ExportOptions,
    ) -> Result<PathBuf, ExportError> {
        let exporter = self.0.clone();
        tokio::task::spawn_blocking(move || exporter.export(&report, &options))
            .await
            .map_err(|e| ExportError::Io(std::io::Error::other(e)))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_stem_replaces_non_alphanumerics() {
        assert_eq!(
            export_file_stem("https://www.example.com/a-b?c=1"),
            "seo-report-https___www_example_com_a_b_c_1"
        );
        assert_eq!(export_file_stem("ÁB9"), "seo-report-_B9");
    }

    #[test]
    fn default_options_are_a4_at_double_scale() {
        let options = ExportOptions::default();
        assert_eq!(options.page_format, PageFormat::A4);
        assert_eq!(options.scale, 2.0);
        assert_eq!(PageFormat::Letter.css_size(), "8.5in 11in");
    }

    #[test]
    fn notice_names_the_saved_file_or_the_failure() {
        let saved = export_notice(&Ok(PathBuf::from("/tmp/seo-report-a.html")));
        assert_eq!(saved, "Report saved to /tmp/seo-report-a.html");

        let failed = export_notice(&Err(ExportError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ))));
        assert_eq!(failed, "Export failed: Failed to write report document: denied");
    }

    #[test]
    fn escapes_title_text() {
        assert_eq!(escape_html(r#"a<b>&"c""#), "a&lt;b&gt;&amp;&quot;c&quot;");
    }
}
