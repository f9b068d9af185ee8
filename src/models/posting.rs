//! Job posting data structure.

use serde::{Deserialize, Serialize};

/// A job posting, either fetched from a remote API or generated as a
/// pre-filled job-board search link.
///
/// A salary of 0 means "unknown", not "zero salary". The `score` field is
/// recomputed on every ranking call; for search-link postings it starts out
/// as the generator's pre-ranked hint and is overwritten by ranking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JobPosting {
    /// Posting title ("N/A" if the source omits it)
    pub title: String,

    /// Company name ("N/A" if the source omits it)
    pub company: String,

    /// Free-text location
    pub location: String,

    /// Minimum salary in USD, 0 if unknown
    pub salary_min: u64,

    /// Maximum salary in USD, 0 if unknown or uncapped
    pub salary_max: u64,

    /// Canonical link to the posting or search page
    pub url: String,

    /// Description text, truncated to 200 characters at normalization
    pub description: String,

    /// Name of the originating provider (e.g. "RemoteOK", "LinkedIn (Remote)")
    pub source: String,

    /// Relevance score computed by the ranking stage
    pub score: i64,
}

impl JobPosting {
    /// The two keys that identify a posting for deduplication: its URL and
    /// the `"{title}-{company}"` string. A match on either against a
    /// previously seen posting discards the later one.
    pub fn dedup_keys(&self) -> (String, String) {
        (
            self.url.clone(),
            format!("{}-{}", self.title, self.company),
        )
    }

    /// Human-readable salary range, or `None` when the salary is unknown.
    pub fn salary_display(&self) -> Option<String> {
        if self.salary_min == 0 {
            return None;
        }
        if self.salary_max > 0 {
            Some(format!("${}-${}", self.salary_min, self.salary_max))
        } else {
            Some(format!("${}", self.salary_min))
        }
    }

    /// Format a posting for display using a template.
    ///
    /// Supported placeholders:
    /// - `{title}`, `{company}`, `{location}`, `{source}`, `{score}`, `{url}`
    pub fn format(&self, template: &str) -> String {
        template
            .replace("{title}", &self.title)
            .replace("{company}", &self.company)
            .replace("{location}", &self.location)
            .replace("{source}", &self.source)
            .replace("{score}", &self.score.to_string())
            .replace("{url}", &self.url)
    }
}
