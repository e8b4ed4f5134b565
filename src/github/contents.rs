// src/github/contents.rs
// =============================================================================
// This module walks a repository's documentation directory through the
// GitHub contents API and collects every markdown file in it.
//
// How it works:
// 1. Start with the documentation root in a queue
// 2. List the directory (GET /repos/{owner}/{repo}/contents/{path})
// 3. Keep `.md` files, queue subdirectories, ignore everything else
// 4. Repeat until the queue is empty
//
// The root listing must succeed. A nested directory that cannot be listed is
// logged and skipped.
//
// Rust concepts:
// - VecDeque: breadth-first walk without recursive async functions
// - serde: decode the JSON listing into typed entries
// =============================================================================

use crate::checker::is_markdown;
use crate::error::{CheckError, Result};
use log::{debug, warn};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use serde::Deserialize;
use std::collections::VecDeque;
use url::Url;

pub const GITHUB_API: &str = "https://api.github.com";

/// One item of a contents listing. Only the fields we use are decoded.
#[derive(Debug, Clone, Deserialize)]
struct ContentEntry {
    name: String,
    path: String,
    #[serde(rename = "type")]
    kind: String,
    download_url: Option<String>,
}

/// A markdown file found in the remote documentation tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteFile {
    /// Repository-relative path, e.g. `docs/guide/intro.md`.
    pub path: String,
    pub download_url: String,
}

/// Talks to the GitHub contents API for one repository.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: Client,
    api_base: Url,
    owner: String,
    repo: String,
    token: Option<String>,
}

impl GitHubClient {
    pub fn new(owner: &str, repo: &str, token: Option<String>) -> Result<Self> {
        Self::with_api_base(GITHUB_API, owner, repo, token)
    }

    /// Same as [`GitHubClient::new`] against a different API host.
    pub fn with_api_base(
        api_base: &str,
        owner: &str,
        repo: &str,
        token: Option<String>,
    ) -> Result<Self> {
        let api_base = Url::parse(api_base).map_err(|source| CheckError::InvalidUrl {
            url: api_base.to_string(),
            source,
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));

        // The API refuses requests without a User-Agent.
        let client = Client::builder()
            .user_agent(concat!("m-check/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            api_base,
            owner: owner.to_string(),
            repo: repo.to_string(),
            token: token.filter(|t| !t.is_empty()),
        })
    }

    pub(crate) fn http(&self) -> &Client {
        &self.client
    }

    /// Lists every markdown file under `root`, breadth-first.
    pub async fn list_markdown_files(&self, root: &str) -> Result<Vec<RemoteFile>> {
        let mut queue = VecDeque::new();
        queue.push_back(root.trim_matches('/').to_string());

        let mut files = Vec::new();
        let mut is_root = true;

        while let Some(dir) = queue.pop_front() {
            let entries = match self.list_dir(&dir).await {
                Ok(entries) => entries,
                Err(e) if !is_root => {
                    warn!("skipping {dir}: {e}");
                    continue;
                }
                Err(e) => return Err(e),
            };
            is_root = false;

            for entry in entries {
                match entry.kind.as_str() {
                    "file" if is_markdown(&entry.name) => match entry.download_url {
                        Some(download_url) => files.push(RemoteFile {
                            path: entry.path,
                            download_url,
                        }),
                        None => warn!("{} has no download URL", entry.path),
                    },
                    "dir" => queue.push_back(entry.path),
                    _ => debug!("ignoring {} ({})", entry.path, entry.kind),
                }
            }
        }

        Ok(files)
    }

    async fn list_dir(&self, path: &str) -> Result<Vec<ContentEntry>> {
        let url = self.contents_url(path)?;
        let request_error = |source| CheckError::Request {
            url: url.to_string(),
            source,
        };

        let mut request = self.client.get(url.clone());
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(request_error)?;
        if !response.status().is_success() {
            return Err(CheckError::GitHub {
                path: path.to_string(),
                status: response.status().as_u16(),
            });
        }

        response.json().await.map_err(request_error)
    }

    fn contents_url(&self, path: &str) -> Result<Url> {
        let mut url = self.api_base.clone();
        url.path_segments_mut()
            .map_err(|()| CheckError::InvalidUrl {
                url: self.api_base.to_string(),
                source: url::ParseError::RelativeUrlWithoutBase,
            })?
            .pop_if_empty()
            .extend(["repos", self.owner.as_str(), self.repo.as_str(), "contents"])
            .extend(path.split('/').filter(|segment| !segment.is_empty()));
        Ok(url)
    }
}
