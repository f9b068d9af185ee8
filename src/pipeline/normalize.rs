// src/pipeline/normalize.rs

//! Raw record normalization.

use crate::models::{JobPosting, RawRecord};
use crate::utils::truncate_chars;

/// Description text is cut to this many characters, unconditionally.
const DESCRIPTION_LIMIT: usize = 200;

/// Map a raw source record into the canonical posting schema.
///
/// Missing strings default to "N/A", missing numbers to 0; sources that only
/// carry remote postings default the location to "Remote".
pub fn normalize(raw: RawRecord) -> JobPosting {
    match raw {
        RawRecord::RemoteOk(job) => JobPosting {
            title: or_na(job.position),
            company: or_na(job.company),
            location: or_default(job.location, "Remote"),
            salary_min: job.salary_min,
            salary_max: job.salary_max,
            url: format!("https://remoteok.io/remote-jobs/{}", job.id),
            description: truncate_chars(&job.description, DESCRIPTION_LIMIT),
            source: "RemoteOK".to_string(),
            score: 0,
        },
        RawRecord::Muse(job) => JobPosting {
            title: or_na(job.name),
            company: or_na(job.company.name),
            location: job
                .locations
                .into_iter()
                .next()
                .map(|l| l.name)
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| "Remote".to_string()),
            salary_min: 0,
            salary_max: 0,
            url: job.refs.landing_page,
            description: truncate_chars(&job.contents, DESCRIPTION_LIMIT),
            source: "The Muse".to_string(),
            score: 0,
        },
        RawRecord::Link(link) => JobPosting {
            title: link.title,
            company: link.company,
            location: link.location,
            salary_min: link.salary_min,
            salary_max: 0,
            url: link.url,
            description: truncate_chars(&link.description, DESCRIPTION_LIMIT),
            source: link.source,
            score: link.score,
        },
    }
}

fn or_na(s: String) -> String {
    or_default(s, "N/A")
}

fn or_default(s: String, default: &str) -> String {
    if s.is_empty() { default.to_string() } else { s }
}
