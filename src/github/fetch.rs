// src/github/fetch.rs
// =============================================================================
// This module downloads the markdown files found by the contents walk.
//
// Every file lands flat in one directory. Its local name is the path below the
// documentation root with `/` turned into `.`:
//   docs/guide/intro.md  ->  guide.intro.md
//
// Any failed download or write stops the run. A half-downloaded documentation
// set would silently drop links from the report.
// =============================================================================

use crate::error::{CheckError, Result};
use crate::github::contents::{GitHubClient, RemoteFile};
use log::debug;
use std::path::{Path, PathBuf};

/// Local file name for `path`, relative to the documentation `root`.
///
/// Example:
///   local_name("docs", "docs/guide/intro.md") -> "guide.intro.md"
pub fn local_name(root: &str, path: &str) -> String {
    let root = root.trim_matches('/');
    let relative = if root.is_empty() {
        path
    } else {
        path.strip_prefix(root)
            .and_then(|rest| rest.strip_prefix('/'))
            .unwrap_or(path)
    };
    relative.trim_start_matches('/').replace('/', ".")
}

impl GitHubClient {
    /// Downloads `files` into `dest`, returning the paths written.
    pub async fn download_all(
        &self,
        root: &str,
        files: &[RemoteFile],
        dest: &Path,
    ) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(files.len());

        for file in files {
            let content = self.fetch_file(&file.download_url).await?;
            let target = dest.join(local_name(root, &file.path));

            tokio::fs::write(&target, &content)
                .await
                .map_err(|source| CheckError::Write {
                    path: target.clone(),
                    source,
                })?;

            debug!("saved {} to {}", file.path, target.display());
            written.push(target);
        }

        Ok(written)
    }

    // Fetches raw file contents. Non-success statuses count as failures.
    async fn fetch_file(&self, url: &str) -> Result<Vec<u8>> {
        let request_error = |source| CheckError::Request {
            url: url.to_string(),
            source,
        };

        let response = self
            .http()
            .get(url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(request_error)?;

        let bytes = response.bytes().await.map_err(request_error)?;
        Ok(bytes.to_vec())
    }
}
