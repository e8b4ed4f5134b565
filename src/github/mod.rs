// src/github/mod.rs
// =============================================================================
// This module handles getting documentation out of GitHub repositories.
//
// - contents: walks the docs directory through the contents API
// - fetch: downloads the markdown files it found to local storage
// =============================================================================

mod contents;
mod fetch;

pub use contents::GitHubClient;
