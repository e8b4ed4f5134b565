// src/checker/mod.rs
// =============================================================================
// This module contains the link pipeline.
//
// Submodules:
// - markdown: Extracts candidate links from text
// - files: Runs the extractor over a set of downloaded documents
// - http: Probes each link and joins all outcomes
// - report: Outcome types and the aggregated report
//
// Flow: file names -> parse_batch -> links -> check_batch -> CheckReport
// =============================================================================

mod files;
mod http;
mod markdown;
mod report;

pub use files::{is_markdown, parse_batch};
pub use http::{CheckerConfig, LinkChecker, DEFAULT_MAX_CONCURRENCY, DEFAULT_TIMEOUT};
pub use report::{CheckReport, LinkOutcome, LinkStatus};
