//! Observable facts about a fetched page, handed to the analysis prompt so
//! the model is not auditing blind.

use scraper::{Html, Selector};
use url::Url;

const MAX_HEADINGS: usize = 10;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadingElement {
    pub tag: String,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageSnapshot {
    pub title: Option<String>,
    pub meta_description: Option<String>,
    pub headings: Vec<HeadingElement>,
    pub internal_links: usize,
    pub external_links: usize,
    pub https: bool,
}

impl PageSnapshot {
    /// Pure function: parses HTML fetched from `page_url`.
    pub fn from_html(html: &str, page_url: &str) -> Self {
        let document = Html::parse_document(html);
        let base_url = Url::parse(page_url).ok();
        let (internal_links, external_links) = base_url
            .as_ref()
            .map(|base| Self::count_links(&document, base))
            .unwrap_or_default();

        Self {
            title: Self::extract_title(&document),
            meta_description: Self::extract_meta(&document, "description"),
            headings: Self::extract_headings(&document),
            internal_links,
            external_links,
            https: base_url.is_some_and(|u| u.scheme() == "https"),
        }
    }

    /// Plain-text rendition for the prompt.
    pub fn describe(&self) -> String {
        let mut lines = vec![
            format!("- Title: {}", self.title.as_deref().unwrap_or("(missing)")),
            format!(
                "- Meta description: {}",
                self.meta_description.as_deref().unwrap_or("(missing)")
            ),
            format!("- HTTPS: {}", if self.https { "Yes" } else { "No" }),
            format!("- Internal links: {}", self.internal_links),
            format!("- External links: {}", self.external_links),
        ];
        if self.headings.is_empty() {
            lines.push("- Headings: (none)".to_string());
        } else {
            lines.push("- Headings:".to_string());
            for heading in &self.headings {
                lines.push(format!("  - {}: {}", heading.tag, heading.text));
            }
        }
        lines.join("\n")
    }

    fn extract_title(document: &Html) -> Option<String> {
        let selector = Selector::parse("title").ok()?;
        document
            .select(&selector)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .filter(|t| !t.is_empty())
    }

    fn extract_meta(document: &Html, name: &str) -> Option<String> {
        let selector = Selector::parse(&format!(r#"meta[name="{}"]"#, name)).ok()?;
        document
            .select(&selector)
            .filter_map(|el| el.value().attr("content"))
            .map(|c| c.trim().to_string())
            .find(|c| !c.is_empty())
    }

    fn extract_headings(document: &Html) -> Vec<HeadingElement> {
        let mut results = Vec::new();
        for level in 1..=3 {
            let tag = format!("h{}", level);
            let Ok(selector) = Selector::parse(&tag) else {
                continue;
            };
            for element in document.select(&selector) {
                let text = element.text().collect::<Vec<_>>().join(" ").trim().to_string();
                if !text.is_empty() {
                    results.push(HeadingElement {
                        tag: tag.clone(),
                        text,
                    });
                }
            }
        }
        results.truncate(MAX_HEADINGS);
        results
    }

    fn count_links(document: &Html, base_url: &Url) -> (usize, usize) {
        let Ok(selector) = Selector::parse("a[href]") else {
            return (0, 0);
        };
        let mut internal = 0;
        let mut external = 0;

        for link in document.select(&selector) {
            let Some(href) = link.value().attr("href") else {
                continue;
            };
            let Ok(url) = base_url.join(href) else {
                continue;
            };
            if !matches!(url.scheme(), "http" | "https") {
                continue;
            }
            if url.host_str() == base_url.host_str() {
                internal += 1;
            } else {
                external += 1;
            }
        }
        (internal, external)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html>
            <head>
                <title> Acme Widgets </title>
                <meta name="description" content="Widgets for every need">
            </head>
            <body>
                <h1>Widgets</h1>
                <h2>Pricing</h2>
                <h2>   </h2>
                <a href="/about">About</a>
                <a href="https://acme.test/contact">Contact</a>
                <a href="https://other.test/">Partner</a>
                <a href="mailto:hi@acme.test">Mail</a>
            </body>
        </html>
    "#;

    #[test]
    fn extracts_page_facts() {
        let snapshot = PageSnapshot::from_html(PAGE, "https://acme.test/");

        assert_eq!(snapshot.title.as_deref(), Some("Acme Widgets"));
        assert_eq!(
            snapshot.meta_description.as_deref(),
            Some("Widgets for every need")
        );
        assert_eq!(snapshot.headings.len(), 2);
        assert_eq!(snapshot.headings[0].tag, "h1");
        assert_eq!(snapshot.internal_links, 2);
        assert_eq!(snapshot.external_links, 1);
        assert!(snapshot.https);
    }

    #[test]
    fn tolerates_missing_elements_and_bad_urls() {
        let snapshot = PageSnapshot::from_html("<html><body></body></html>", "not a url");
        assert_eq!(snapshot, PageSnapshot::default());

        let text = snapshot.describe();
        assert!(text.contains("Title: (missing)"));
        assert!(text.contains("Headings: (none)"));
    }
}
