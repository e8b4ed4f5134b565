// src/checker/files.rs
// =============================================================================
// Applies the link extractor across a set of downloaded documents.
//
// Only names ending in `.md` (case-sensitive) are read. Everything else is
// skipped silently, including the report file that shares the directory.
//
// Files are read concurrently and joined before returning. The joined order
// follows the order of `files`, and within a file links keep their line order.
//
// The first markdown file that cannot be read fails the whole parse. The
// remaining reads are dropped with it; no partial link list is returned.
// =============================================================================

use crate::checker::markdown::extract_links;
use crate::error::{CheckError, Result};
use futures::future::try_join_all;
use log::debug;
use std::path::Path;

const MARKDOWN_EXTENSION: &str = ".md";

/// True when `name` carries the exact `.md` extension.
pub fn is_markdown(name: &str) -> bool {
    name.ends_with(MARKDOWN_EXTENSION)
}

/// Extracts the links of every markdown file in `files`, resolved against
/// `base`.
pub async fn parse_batch(base: &Path, files: &[String]) -> Result<Vec<String>> {
    let parses = files
        .iter()
        .filter(|name| is_markdown(name))
        .map(|name| parse_file(base, name));

    let per_file = try_join_all(parses).await?;
    Ok(per_file.into_iter().flatten().collect())
}

/// Reads one document and extracts its links line by line.
async fn parse_file(base: &Path, name: &str) -> Result<Vec<String>> {
    let path = base.join(name);
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|source| CheckError::ReadFile {
            path: path.clone(),
            source,
        })?;

    // Documents are scanned as text; stray invalid bytes must not hide links
    // elsewhere on the line.
    let text = String::from_utf8_lossy(&bytes);
    let links: Vec<String> = text.lines().flat_map(extract_links).collect();

    debug!("{} link(s) found in {}", links.len(), name);
    Ok(links)
}
