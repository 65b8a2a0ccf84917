use std::time::Duration;

use reqwest::Client;

const USER_AGENT: &str = "Mozilla/5.0 (compatible; SeoMasterBot/1.0; +https://example.com/bot)";

/// Builds the shared HTTP client. `timeout` of `None` waits indefinitely.
pub fn build_client(timeout: Option<Duration>) -> reqwest::Result<Client> {
    let mut builder = Client::builder().user_agent(USER_AGENT);
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build()
}

/// Upper bound for a best-effort page fetch, body included.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Best-effort page fetch; failures (timeouts included) are logged and yield
/// `None`. `timeout` applies to this request only, whatever the client's own
/// timeout is.
pub async fn fetch_html_from_url(client: &Client, url: &str, timeout: Duration) -> Option<String> {
    tracing::debug!("Fetching HTML from URL: {}", url);
    match client.get(url).timeout(timeout).send().await {
        Ok(response) if response.status().is_success() => match response.text().await {
            Ok(body) => Some(body),
            Err(e) => {
                tracing::warn!("Error reading HTML from {}: {}", url, e);
                None
            }
        },
        Ok(response) => {
            tracing::warn!("Failed to fetch HTML from {}: {}", url, response.status());
            None
        }
        Err(e) => {
            tracing::warn!("Error fetching HTML from {}: {}", url, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fetch_returns_body_on_success() {
        let mut server = mockito::Server::new_async().await;
        let page = server
            .mock("GET", "/")
            .with_status(200)
            .with_body("<html><title>Hi</title></html>")
            .create_async()
            .await;

        let client = build_client(None).unwrap();
        let html = fetch_html_from_url(&client, &server.url(), PROBE_TIMEOUT).await;

        page.assert_async().await;
        assert_eq!(html.as_deref(), Some("<html><title>Hi</title></html>"));
    }

    #[tokio::test]
    async fn fetch_returns_none_on_error_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/missing")
            .with_status(404)
            .create_async()
            .await;

        let client = build_client(Some(Duration::from_secs(5))).unwrap();
        let html = fetch_html_from_url(&client, &format!("{}/missing", server.url()), PROBE_TIMEOUT).await;
        assert!(html.is_none());
    }

    #[tokio::test]
    async fn fetch_gives_up_on_a_silent_server() {
        // Accepts connections and never writes a byte.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let hold = tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });

        let client = build_client(None).unwrap();
        let started = tokio::time::Instant::now();
        let html = fetch_html_from_url(
            &client,
            &format!("http://{}/", addr),
            Duration::from_millis(200),
        )
        .await;

        assert!(html.is_none());
        assert!(started.elapsed() < Duration::from_secs(5));
        hold.abort();
    }
}
