// src/checker/http.rs
// =============================================================================
// This module checks if URLs are alive by making HTTP requests.
//
// Key functionality:
// - One GET per link, no retries
// - Any HTTP response counts, whatever the status code (404 included)
// - Any failure to complete the exchange becomes the "Broken Link" sentinel
// - All probes run concurrently; the batch returns only when every probe has
//   finished
//
// Rust concepts:
// - async/await: For concurrent network I/O
// - Streams: buffer_unordered drives many probes at once
// =============================================================================

use crate::checker::report::{CheckReport, LinkOutcome};
use crate::error::Result;
use futures::stream::{self, StreamExt};
use log::{debug, trace};
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);
pub const DEFAULT_MAX_CONCURRENCY: usize = 128;
pub const DEFAULT_USER_AGENT: &str = concat!("m-check/", env!("CARGO_PKG_VERSION"));

/// Settings for the link checker's HTTP client.
#[derive(Debug, Clone)]
pub struct CheckerConfig {
    /// Client-level bound on each probe, not on the batch.
    pub timeout: Duration,
    /// How many probes may be in flight at once.
    pub max_concurrency: usize,
    pub user_agent: String,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Probes links over HTTP. Cloning is cheap and shares the connection pool.
#[derive(Debug, Clone)]
pub struct LinkChecker {
    client: Client,
    max_concurrency: usize,
}

impl LinkChecker {
    pub fn new(config: &CheckerConfig) -> Result<Self> {
        // reqwest follows up to 10 redirects by default; that is the only
        // redirect handling we do.
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            max_concurrency: config.max_concurrency.max(1),
        })
    }

    /// Checks a single link. Never fails: transport errors become
    /// [`LinkOutcome::broken`].
    pub async fn check(&self, url: &str) -> LinkOutcome {
        match self.client.get(url).send().await {
            Ok(response) => {
                let code = response.status().as_u16();
                trace!("{url} answered {code}");
                LinkOutcome::responded(url, code)
            }
            Err(e) => {
                debug!("failed to connect to {url}: {e}");
                LinkOutcome::broken(url)
            }
        }
    }

    /// Checks every link and returns once all probes are done.
    ///
    /// The report is in completion order and has exactly one entry per input
    /// link, duplicates included.
    pub async fn check_batch(&self, links: Vec<String>) -> CheckReport {
        let probes = links.into_iter().map(|url| {
            let checker = self.clone();
            async move { checker.check(&url).await }
        });

        stream::iter(probes)
            .buffer_unordered(self.max_concurrency)
            .collect()
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checker::report::LinkStatus;
    use std::collections::HashMap;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    // Nothing listens on port 1, so connecting is refused straight away.
    const UNREACHABLE: &str = "http://127.0.0.1:1/";

    async fn mock_server(route: &str, status: u16) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(status))
            .mount(&server)
            .await;
        server
    }

    fn checker() -> LinkChecker {
        LinkChecker::new(&CheckerConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn test_live_link_reports_status() {
        let server = mock_server("/x", 200).await;
        let url = format!("{}/x", server.uri());

        let outcome = checker().check(&url).await;
        assert_eq!(outcome, LinkOutcome::responded(url.clone(), 200));
        assert_eq!(outcome.to_string(), format!("{url} - 200"));
    }

    #[tokio::test]
    async fn test_404_is_a_status_not_a_broken_link() {
        let server = mock_server("/missing", 404).await;
        let url = format!("{}/missing", server.uri());

        let outcome = checker().check(&url).await;
        assert_eq!(outcome.status, LinkStatus::Responded { code: 404 });
        assert!(outcome.to_string().ends_with(" - 404"));
    }

    #[tokio::test]
    async fn test_server_error_is_a_status() {
        let server = mock_server("/boom", 503).await;
        let outcome = checker().check(&format!("{}/boom", server.uri())).await;
        assert_eq!(outcome.status, LinkStatus::Responded { code: 503 });
    }

    #[tokio::test]
    async fn test_unreachable_host_is_broken() {
        let outcome = checker().check(UNREACHABLE).await;
        assert!(outcome.is_broken());
        assert_eq!(outcome.to_string(), format!("{UNREACHABLE} - Broken Link"));
    }

    #[tokio::test]
    async fn test_malformed_link_is_broken() {
        let outcome = checker().check("http://").await;
        assert!(outcome.is_broken());
    }

    #[tokio::test]
    async fn test_timeout_is_broken() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
            .mount(&server)
            .await;

        let config = CheckerConfig {
            timeout: Duration::from_millis(200),
            ..CheckerConfig::default()
        };
        let checker = LinkChecker::new(&config).unwrap();

        let outcome = checker.check(&server.uri()).await;
        assert!(outcome.is_broken());
    }

    #[tokio::test]
    async fn test_same_link_twice_gives_same_status() {
        let server = mock_server("/stable", 200).await;
        let url = format!("{}/stable", server.uri());
        let checker = checker();

        let first = checker.check(&url).await;
        let second = checker.check(&url).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_batch_keeps_every_input_including_duplicates() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ok"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/gone"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let ok = format!("{}/ok", server.uri());
        let gone = format!("{}/gone", server.uri());
        let links = vec![
            ok.clone(),
            gone.clone(),
            ok.clone(),
            UNREACHABLE.to_string(),
            ok.clone(),
        ];

        let report = checker().check_batch(links).await;
        assert_eq!(report.len(), 5);
        assert_eq!(report.broken_count(), 1);

        let mut seen: HashMap<String, Vec<LinkStatus>> = HashMap::new();
        for outcome in &report {
            seen.entry(outcome.url.clone()).or_default().push(outcome.status);
        }
        assert_eq!(seen[&ok], vec![LinkStatus::Responded { code: 200 }; 3]);
        assert_eq!(seen[&gone], vec![LinkStatus::Responded { code: 404 }]);
        assert_eq!(seen[UNREACHABLE], vec![LinkStatus::Broken]);
    }

    #[tokio::test]
    async fn test_batch_with_concurrency_of_one() {
        let server = mock_server("/ok", 200).await;
        let url = format!("{}/ok", server.uri());
        let config = CheckerConfig {
            max_concurrency: 1,
            ..CheckerConfig::default()
        };

        let report = LinkChecker::new(&config)
            .unwrap()
            .check_batch(vec![url.clone(), url.clone(), url])
            .await;
        assert_eq!(report.len(), 3);
        assert_eq!(report.broken_count(), 0);
    }

    #[tokio::test]
    async fn test_empty_batch() {
        let report = checker().check_batch(Vec::new()).await;
        assert!(report.is_empty());
    }
}
