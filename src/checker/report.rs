// src/checker/report.rs
// =============================================================================
// Outcome types and the aggregated report of one run.
//
// The report is an ordered list in completion order. Every checked link gets
// exactly one entry, so a link that appears twice in the input appears twice
// here, each with its own probe result. Nothing is collapsed by URL.
// Completion order is not stable across runs; callers that need a stable view
// should sort.
// =============================================================================

use serde::Serialize;
use std::fmt;

/// Sentinel written in place of a status code when the exchange failed.
pub const BROKEN_LINK: &str = "Broken Link";

/// Resolution of a single link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum LinkStatus {
    /// The server answered; any code counts, 404 and 500 included.
    Responded { code: u16 },
    /// Timeout, DNS, TLS or connection failure. The cause is not kept.
    Broken,
}

impl fmt::Display for LinkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkStatus::Responded { code } => write!(f, "{code}"),
            LinkStatus::Broken => f.write_str(BROKEN_LINK),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkOutcome {
    pub url: String,
    #[serde(flatten)]
    pub status: LinkStatus,
}

impl LinkOutcome {
    pub fn responded(url: impl Into<String>, code: u16) -> Self {
        Self {
            url: url.into(),
            status: LinkStatus::Responded { code },
        }
    }

    pub fn broken(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            status: LinkStatus::Broken,
        }
    }

    pub fn is_broken(&self) -> bool {
        matches!(self.status, LinkStatus::Broken)
    }
}

/// Renders the report line: `<url> - <code>` or `<url> - Broken Link`.
impl fmt::Display for LinkOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.url, self.status)
    }
}

/// All outcomes of one run. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CheckReport {
    outcomes: Vec<LinkOutcome>,
}

impl CheckReport {
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LinkOutcome> {
        self.outcomes.iter()
    }

    pub fn broken_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_broken()).count()
    }

    pub fn responded_count(&self) -> usize {
        self.len() - self.broken_count()
    }

    /// One human-readable record per outcome, in report order.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.outcomes.iter().map(ToString::to_string)
    }
}

impl FromIterator<LinkOutcome> for CheckReport {
    fn from_iter<T: IntoIterator<Item = LinkOutcome>>(iter: T) -> Self {
        Self {
            outcomes: iter.into_iter().collect(),
        }
    }
}

// Needed by `StreamExt::collect`, which the checker joins through.
impl Extend<LinkOutcome> for CheckReport {
    fn extend<T: IntoIterator<Item = LinkOutcome>>(&mut self, iter: T) {
        self.outcomes.extend(iter);
    }
}

impl<'a> IntoIterator for &'a CheckReport {
    type Item = &'a LinkOutcome;
    type IntoIter = std::slice::Iter<'a, LinkOutcome>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
